//! View state for the partners admin screen.
//!
//! The three pieces of state the view owns — the cached partner collection,
//! the in-progress create draft, and the in-flight flag — live in one
//! [`PartnersState`] value, and every transition is a pure function of the
//! prior state and a [`PartnersEvent`]. The `idle → loading → idle` cycle and
//! each cache mutation are therefore testable without a rendering environment.

use api::{ImageUpload, Partner};

/// Transient input state for a not-yet-submitted create.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftPartner {
    pub name: String,
    pub image: Option<ImageUpload>,
}

impl DraftPartner {
    /// Both required fields present.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.image.is_some()
    }
}

/// Events that drive the partners view.
#[derive(Debug, Clone, PartialEq)]
pub enum PartnersEvent {
    /// The initial fetch settled successfully; replace the cached collection.
    Loaded(Vec<Partner>),
    /// A network operation left the ground.
    OperationStarted,
    /// A network operation settled with an error. The cache and the draft are
    /// untouched so the operator can retry.
    OperationFailed,
    /// Create succeeded; the server-returned partner joins the cache.
    Created(Partner),
    /// Delete succeeded for the given identifier.
    Removed(String),
    /// The operator edited the draft name.
    DraftName(String),
    /// The operator picked an image for the draft.
    DraftImage(ImageUpload),
}

/// State owned by the partners view.
///
/// `partners` is a client-side cache of server state, kept in sync only by
/// optimistic local mutation after each confirmed create/delete. `loading` is
/// a plain boolean: one operator, one in-flight request at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartnersState {
    pub partners: Vec<Partner>,
    pub draft: DraftPartner,
    pub loading: bool,
}

impl PartnersState {
    /// Advance the state by one event, returning the next state.
    pub fn apply(mut self, event: PartnersEvent) -> Self {
        match event {
            PartnersEvent::Loaded(partners) => {
                self.partners = partners;
                self.loading = false;
            }
            PartnersEvent::OperationStarted => self.loading = true,
            PartnersEvent::OperationFailed => self.loading = false,
            PartnersEvent::Created(partner) => {
                self.partners.push(partner);
                self.draft = DraftPartner::default();
                self.loading = false;
            }
            PartnersEvent::Removed(id) => {
                self.partners.retain(|p| p.id != id);
                self.loading = false;
            }
            PartnersEvent::DraftName(name) => self.draft.name = name,
            PartnersEvent::DraftImage(image) => self.draft.image = Some(image),
        }
        self
    }
}
