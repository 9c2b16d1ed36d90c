use dioxus::prelude::*;

use ui::ToastProvider;
use views::Partners;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/partners")]
    Partners {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/partners`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Partners {});
    rsx! {}
}
