//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod loading_overlay;
pub use loading_overlay::LoadingOverlay;

mod partner_card;
pub use partner_card::PartnerCard;

mod partner_form;
pub use partner_form::PartnerForm;

pub mod state;
pub use state::{DraftPartner, PartnersEvent, PartnersState};

pub mod toast;
pub use toast::{use_toasts, Toast, ToastLevel, Toasts};

mod toast_host;
pub use toast_host::{ToastHost, ToastProvider};
