use api::Partner;
use dioxus::prelude::*;

use crate::icons::FaTrashCan;
use crate::Icon;

/// Card for a single partner: name, first image when present, delete control.
#[component]
pub fn PartnerCard(partner: Partner, on_delete: EventHandler<String>) -> Element {
    let id = partner.id.clone();

    rsx! {
        div {
            class: "partner-card",
            h2 { class: "partner-card-name", "{partner.name}" }
            if let Some(url) = partner.first_image_url() {
                img {
                    class: "partner-card-image",
                    src: "{url}",
                    alt: "{partner.name}",
                }
            }
            button {
                class: "partner-card-delete",
                title: "Delete partner",
                onclick: move |_| on_delete.call(id.clone()),
                Icon { icon: FaTrashCan, width: 14, height: 14 }
                span { "Delete" }
            }
        }
    }
}
