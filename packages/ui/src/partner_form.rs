use api::ImageUpload;
use dioxus::prelude::*;

use crate::state::DraftPartner;

/// Create-partner form: a name and a single image file, both required.
///
/// The draft lives in the parent view so a failed submit keeps the operator's
/// input; this component only reports edits and the submit click.
#[component]
pub fn PartnerForm(
    draft: DraftPartner,
    on_name: EventHandler<String>,
    on_image: EventHandler<ImageUpload>,
    on_submit: EventHandler<()>,
) -> Element {
    let handle_file = move |evt: FormEvent| async move {
        let Some(file_engine) = evt.files() else {
            return;
        };
        // Only the first selected file is staged.
        let Some(file_name) = file_engine.files().into_iter().next() else {
            return;
        };
        if let Some(bytes) = file_engine.read_file(&file_name).await {
            on_image.call(ImageUpload { file_name, bytes });
        }
    };

    rsx! {
        form {
            class: "partner-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            div {
                class: "form-field",
                label { r#for: "partner-name", "Partner Name" }
                input {
                    id: "partner-name",
                    r#type: "text",
                    name: "name",
                    placeholder: "Partner Name",
                    required: true,
                    value: "{draft.name}",
                    oninput: move |evt: FormEvent| on_name.call(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { r#for: "partner-image", "Upload Image" }
                input {
                    id: "partner-image",
                    r#type: "file",
                    name: "image",
                    accept: "image/*",
                    required: true,
                    onchange: handle_file,
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    "Add Partner"
                }
            }
        }
    }
}
