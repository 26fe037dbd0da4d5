//! Generators for draft trees, shared by the draft tests.

use proptest::prelude::*;

use super::{Draft, DraftValue, FieldMap, FileMeta};
use crate::wizard::STEPS;

/// Path segment. Shorter than every reserved key, so roots never clash.
pub fn arb_segment() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,7}"
}

pub fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..5).prop_map(|segments| segments.join("."))
}

fn arb_file_meta() -> impl Strategy<Value = FileMeta> {
    ("[a-z]{1,8}\\.(pdf|png|jpg)", any::<u32>(), prop_oneof![Just("application/pdf"), Just("image/png")])
        .prop_map(|(name, size, mime)| FileMeta {
            name,
            size: u64::from(size),
            mime: mime.to_string(),
            captured_at: "2024-05-01T10:00:00+00:00".to_string(),
        })
}

fn arb_leaf() -> impl Strategy<Value = DraftValue> {
    prop_oneof![
        any::<bool>().prop_map(DraftValue::Bool),
        any::<i64>().prop_map(|n| DraftValue::Number(n.into())),
        ".{0,12}".prop_map(DraftValue::Text),
        prop::collection::vec(arb_file_meta(), 0..3).prop_map(DraftValue::Files),
    ]
}

pub fn arb_field_map() -> impl Strategy<Value = FieldMap> {
    prop::collection::btree_map(arb_segment(), arb_value(), 0..4)
}

pub fn arb_value() -> impl Strategy<Value = DraftValue> {
    arb_leaf().prop_recursive(3, 16, 4, |inner| {
        prop::collection::btree_map(arb_segment(), inner, 0..4).prop_map(DraftValue::Map)
    })
}

pub fn arb_draft() -> impl Strategy<Value = Draft> {
    (
        0..STEPS.len(),
        prop::sample::subsequence(STEPS.iter().map(|s| s.key).collect::<Vec<_>>(), 0..=STEPS.len()),
        prop::option::of("[0-9T:+-]{10,25}"),
        prop::option::of("[a-f0-9]{8,12}"),
        arb_field_map(),
    )
        .prop_map(|(current_step_idx, completed_steps, last_saved_at, submission_id, fields)| Draft {
            current_step_idx,
            completed_steps: completed_steps.into_iter().collect(),
            last_saved_at,
            submission_id,
            fields,
        })
}
