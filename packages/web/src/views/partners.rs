use api::{ImageUpload, PartnersApi};
use dioxus::prelude::*;

use ui::{use_toasts, LoadingOverlay, PartnerCard, PartnerForm, PartnersEvent, PartnersState};

/// Admin view for the partners list: create via name + image upload, list,
/// delete by identifier.
///
/// The collection shown is a client-side cache of server state, mutated
/// optimistically after each confirmed create/delete rather than re-fetched.
#[component]
pub fn Partners() -> Element {
    let mut state = use_signal(PartnersState::default);
    let mut toasts = use_toasts();

    let mut dispatch = move |event: PartnersEvent| {
        let next = state.peek().clone().apply(event);
        state.set(next);
    };

    // Fetch the collection on mount. A failed load is logged but not surfaced;
    // the operator can still add partners against an empty list.
    let _loader = use_resource(move || async move {
        dispatch(PartnersEvent::OperationStarted);
        match PartnersApi::new().list().await {
            Ok(partners) => dispatch(PartnersEvent::Loaded(partners)),
            Err(e) => {
                tracing::error!("failed to fetch partners: {e}");
                dispatch(PartnersEvent::OperationFailed);
            }
        }
    });

    let handle_submit = move |_: ()| {
        let draft = state.peek().draft.clone();
        spawn(async move {
            dispatch(PartnersEvent::OperationStarted);
            match PartnersApi::new().create(&draft.name, draft.image).await {
                Ok(partner) => {
                    dispatch(PartnersEvent::Created(partner));
                    toasts.write().success("Partner successfully added!");
                }
                Err(e) => {
                    tracing::error!("failed to add partner: {e}");
                    dispatch(PartnersEvent::OperationFailed);
                    toasts
                        .write()
                        .error("Failed to add partner. Please try again.");
                }
            }
        });
    };

    let handle_delete = move |id: String| {
        if !confirm_delete() {
            return;
        }
        spawn(async move {
            dispatch(PartnersEvent::OperationStarted);
            match PartnersApi::new().delete(&id).await {
                Ok(()) => {
                    dispatch(PartnersEvent::Removed(id));
                    toasts.write().success("Partner successfully deleted!");
                }
                Err(e) => {
                    tracing::error!("failed to delete partner: {e}");
                    dispatch(PartnersEvent::OperationFailed);
                    toasts
                        .write()
                        .error("Failed to delete partner. Please try again.");
                }
            }
        });
    };

    rsx! {
        div {
            class: "partners-page",

            if state().loading {
                LoadingOverlay {}
            }

            PartnerForm {
                draft: state().draft.clone(),
                on_name: move |name: String| dispatch(PartnersEvent::DraftName(name)),
                on_image: move |image: ImageUpload| dispatch(PartnersEvent::DraftImage(image)),
                on_submit: handle_submit,
            }

            div {
                class: "partners-grid",
                for partner in state().partners.clone() {
                    PartnerCard {
                        key: "{partner.id}",
                        partner: partner.clone(),
                        on_delete: handle_delete,
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn confirm_delete() -> bool {
    web_sys::window()
        .map(|w| {
            w.confirm_with_message("Are you sure you want to delete this Partner?")
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn confirm_delete() -> bool {
    // No blocking prompt outside the browser.
    true
}
