//! Step Definitions
//!
//! The fixed questionnaire: six steps in display order, each with its
//! static form description.

use serde::{Deserialize, Serialize};

/// Stable identity of a step, stored in `completedSteps`.
/// Ordering follows wizard progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKey {
    Client,
    Family,
    Services,
    Assets,
    Digital,
    Uploads,
}

impl StepKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKey::Client => "client",
            StepKey::Family => "family",
            StepKey::Services => "services",
            StepKey::Assets => "assets",
            StepKey::Digital => "digital",
            StepKey::Uploads => "uploads",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        STEPS.iter().map(|s| s.key).find(|k| k.as_str() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    TextArea,
    Select(&'static [&'static str]),
    Checkbox,
    File,
}

/// One form control bound to a dotted path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub path: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Free-text fields that recognized document text may be appended to
    pub ocr_target: bool,
    pub placeholder: &'static str,
}

impl FieldSpec {
    const fn hint(self, placeholder: &'static str) -> Self {
        FieldSpec { placeholder, ..self }
    }

    const fn ocr(self) -> Self {
        FieldSpec { ocr_target: true, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub key: StepKey,
    pub label: &'static str,
    pub subtitle: &'static str,
    pub fields: &'static [FieldSpec],
}

const fn field(path: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { path, label, kind, required: false, ocr_target: false, placeholder: "" }
}

const fn required(path: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { required: true, ..field(path, label, kind) }
}

const fn notes(path: &'static str, label: &'static str, placeholder: &'static str) -> FieldSpec {
    field(path, label, FieldKind::TextArea).hint(placeholder)
}

const PARTY: &str = "Full name + relationship + contact";

const SERVICE_STATES: &[&str] = &["NY", "NJ", "PA"];

const MARITAL_STATUS: &[&str] = &["Single", "Married", "Domestic partnership", "Divorced", "Widowed", "Separated"];

const FEE_PREFERENCE: &[&str] = &["Essentials", "Family+", "Digital Vault Add-on", "Not sure yet"];

const TIMING: &[&str] = &["Urgent (within 2 weeks)", "Normal (2–6 weeks)", "Flexible"];

pub static STEPS: [StepDescriptor; 6] = [
    StepDescriptor {
        key: StepKey::Client,
        label: "Client",
        subtitle: "identity + contact",
        fields: &[
            required("client.fullName", "Full legal name", FieldKind::Text).hint("e.g., Asha R. Singh"),
            field("client.dob", "Date of birth", FieldKind::Date),
            required("client.email", "Email", FieldKind::Email).hint("name@example.com"),
            field("client.phone", "Phone", FieldKind::Tel).hint("(###) ###-####"),
            field("client.address1", "Address", FieldKind::Text).hint("Street address"),
            field("client.city", "City", FieldKind::Text),
            required("client.state", "State", FieldKind::Select(SERVICE_STATES)),
            field("client.zip", "ZIP", FieldKind::Text),
            field("client.maritalStatus", "Marital status", FieldKind::Select(MARITAL_STATUS)),
            field("client.language", "Preferred language (optional)", FieldKind::Text)
                .hint("e.g., English, Haitian Creole, Patois, etc."),
            notes("client.notes", "Notes / concerns (optional)", "Anything you want us to know up front."),
        ],
    },
    StepDescriptor {
        key: StepKey::Family,
        label: "Family",
        subtitle: "beneficiaries + fiduciaries",
        fields: &[
            notes("family.beneficiaries", "Primary beneficiary(ies)", "Names + relationship + approximate shares"),
            notes(
                "family.guardianship",
                "Minor children / guardianship needs",
                "Children names + preferred guardian (if applicable)",
            ),
            field("family.executor", "Executor (will)", FieldKind::Text).hint(PARTY),
            field("family.executorBackup", "Backup executor", FieldKind::Text).hint(PARTY),
            field("family.poaAgent", "Agent (Power of Attorney)", FieldKind::Text).hint(PARTY),
            field("family.healthProxy", "Health care proxy", FieldKind::Text).hint(PARTY),
            notes(
                "family.special",
                "Special considerations",
                "Blended families, dependents with special needs, relatives abroad, property abroad, etc.",
            ),
        ],
    },
    StepDescriptor {
        key: StepKey::Services,
        label: "Services",
        subtitle: "what you want drafted",
        fields: &[
            field("services.will", "Last Will and Testament", FieldKind::Checkbox),
            field("services.trust", "Revocable Living Trust", FieldKind::Checkbox),
            field("services.poa", "Durable Power of Attorney", FieldKind::Checkbox),
            field("services.health", "Health Care Proxy / Advance Directive", FieldKind::Checkbox),
            field(
                "services.digital",
                "Digital Asset Plan (crypto, NFTs, social, access letters)",
                FieldKind::Checkbox,
            ),
            field("services.feePreference", "Flat-fee preference (optional)", FieldKind::Select(FEE_PREFERENCE)),
            field("services.timing", "Timing", FieldKind::Select(TIMING)),
            notes(
                "services.goals",
                "Goals (optional)",
                "What matters most? Avoid probate, protect kids, simplify, minimize family conflict, etc.",
            ),
        ],
    },
    StepDescriptor {
        key: StepKey::Assets,
        label: "Assets",
        subtitle: "home, accounts, business",
        fields: &[
            notes("assets.realEstate", "Real estate", "Address, type (home/rental), approx value, mortgage info").ocr(),
            notes("assets.bank", "Bank accounts", "Institution(s), type (checking/savings), approx totals").ocr(),
            notes(
                "assets.retirement",
                "Retirement accounts",
                "401(k), IRA, pension; approx totals; beneficiary designations?",
            ),
            notes("assets.insurance", "Life insurance", "Carrier, policy type, beneficiary, approx benefit"),
            notes("assets.brokerage", "Brokerage / equity accounts", "Broker(s), account types, approx totals").ocr(),
            notes("assets.business", "Business interests", "LLC/corp interests, partners, buy-sell, etc."),
            notes(
                "assets.debts",
                "Debts / obligations (optional)",
                "Mortgage, car loan, credit cards, personal loans, etc.",
            ),
        ],
    },
    StepDescriptor {
        key: StepKey::Digital,
        label: "Digital",
        subtitle: "crypto, NFTs, social, access",
        fields: &[
            notes(
                "digital.social",
                "Social media + content",
                "Instagram, Facebook, TikTok, YouTube; handles; monetization",
            )
            .ocr(),
            notes("digital.emailCloud", "Email + cloud storage", "Gmail, iCloud, Google Drive, Dropbox, etc."),
            notes(
                "digital.exchanges",
                "Crypto exchanges (e.g., Coinbase)",
                "Exchange name(s), account email, approx holdings",
            )
            .ocr(),
            notes(
                "digital.wallets",
                "Crypto wallets (hot/cold)",
                "Wallet types, device location, storage approach (do not include seed phrase)",
            )
            .ocr(),
            notes("digital.nfts", "NFTs / collectibles", "Marketplace(s), wallet addresses, collection names"),
            notes(
                "digital.domains",
                "Domains / websites / online businesses",
                "Domain registrar, website(s), revenue streams",
            ),
            notes("digital.devices", "Devices (access)", "Primary phone/laptop, where stored, who can access"),
            notes(
                "digital.security",
                "Password manager / 2FA recovery",
                "Password manager used; where recovery codes are stored; trusted contact",
            ),
            notes(
                "digital.instructions",
                "Digital asset instructions (draft)",
                "Who should manage what, and priorities (preserve accounts, liquidate crypto, etc.).",
            ),
        ],
    },
    StepDescriptor {
        key: StepKey::Uploads,
        label: "Uploads",
        subtitle: "documents + OCR",
        fields: &[
            field("uploads.files", "Upload documents (metadata only)", FieldKind::File),
            notes(
                "uploads.notes",
                "Anything else to upload / share?",
                "List any documents you plan to provide later.",
            ),
            required(
                "uploads.consent",
                "I confirm the information provided is accurate to the best of my knowledge.",
                FieldKind::Checkbox,
            ),
        ],
    },
];

pub fn find_field(path: &str) -> Option<&'static FieldSpec> {
    STEPS.iter().flat_map(|s| s.fields.iter()).find(|f| f.path == path)
}

/// Fields recognized document text can be appended to, with their step
pub fn ocr_targets() -> impl Iterator<Item = (&'static StepDescriptor, &'static FieldSpec)> {
    STEPS
        .iter()
        .flat_map(|s| s.fields.iter().map(move |f| (s, f)))
        .filter(|(_, f)| f.ocr_target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_step_order() {
        let keys: Vec<_> = STEPS.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["client", "family", "services", "assets", "digital", "uploads"]);
    }

    #[test]
    fn test_key_round_trip() {
        for step in &STEPS {
            assert_eq!(StepKey::from_key(step.key.as_str()), Some(step.key));
        }
        assert_eq!(StepKey::from_key("Client"), None);
    }

    #[test]
    fn test_paths_unique_and_rooted_in_step() {
        let mut seen = HashSet::new();
        for step in &STEPS {
            for f in step.fields {
                assert!(seen.insert(f.path), "duplicate path {}", f.path);
                assert!(f.path.starts_with(step.key.as_str()), "{} outside {}", f.path, step.key.as_str());
            }
        }
    }

    #[test]
    fn test_ocr_targets() {
        let paths: Vec<_> = ocr_targets().map(|(_, f)| f.path).collect();
        assert_eq!(
            paths,
            [
                "assets.realEstate",
                "assets.bank",
                "assets.brokerage",
                "digital.social",
                "digital.exchanges",
                "digital.wallets",
            ]
        );
        assert!(ocr_targets().all(|(_, f)| f.kind == FieldKind::TextArea));
    }

    #[test]
    fn test_server_summary_paths_exist() {
        for path in [
            "client.fullName",
            "client.email",
            "client.state",
            "services.will",
            "services.trust",
            "services.poa",
            "services.health",
            "services.digital",
        ] {
            assert!(find_field(path).is_some(), "{path}");
        }
        for path in ["digital.exchanges", "digital.wallets", "digital.nfts", "digital.social", "digital.domains"] {
            assert_eq!(find_field(path).map(|f| f.kind), Some(FieldKind::TextArea), "{path}");
        }
    }

    #[test]
    fn test_fiduciaries_present() {
        for path in ["family.executor", "family.executorBackup", "family.poaAgent", "family.healthProxy"] {
            assert_eq!(find_field(path).map(|f| f.kind), Some(FieldKind::Text), "{path}");
        }
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<_> = STEPS
            .iter()
            .flat_map(|s| s.fields.iter())
            .filter(|f| f.required)
            .map(|f| f.path)
            .collect();
        assert_eq!(required, ["client.fullName", "client.email", "client.state", "uploads.consent"]);
        assert_eq!(find_field("client.state").map(|f| f.kind), Some(FieldKind::Select(&["NY", "NJ", "PA"])));
    }
}
