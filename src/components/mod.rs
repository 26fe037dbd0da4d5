//! UI Components
//!
//! Leptos views for the shell, wizard and side panels.

mod admin_view;
mod chat_panel;
mod nav_bar;
mod ocr_panel;
mod pages;
mod reset_button;
mod step_form;
mod stepper;
mod summary_view;
mod toast_stack;
mod wizard_view;

pub use admin_view::AdminView;
pub use chat_panel::ChatPanel;
pub use nav_bar::NavBar;
pub use ocr_panel::OcrPanel;
pub use pages::{HomePage, PrivacyPage, ServicesPage};
pub use reset_button::ResetButton;
pub use step_form::{flag_invalid, read_form, StepForm};
pub use stepper::Stepper;
pub use summary_view::SummaryView;
pub use toast_stack::ToastStack;
pub use wizard_view::WizardView;
