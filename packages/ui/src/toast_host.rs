use dioxus::prelude::*;

use crate::toast::{use_toasts, ToastLevel, Toasts};

/// Provider component that owns the shared toast store.
/// Wrap the app with this component; it also mounts the [`ToastHost`].
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        ToastHost {}
        {children}
    }
}

/// Fixed top-center stack of transient notifications.
///
/// Entries expire on a one-second heartbeat and can be dismissed by click.
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();

    // Heartbeat that ages and expires entries.
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;

                if !toasts.peek().entries.is_empty() {
                    toasts.write().tick();
                }
            }
        });
    });

    if toasts().entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts().entries.clone() {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    },
                    title: "Dismiss",
                    onclick: {
                        let id = toast.id;
                        move |_| toasts.write().dismiss(id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
