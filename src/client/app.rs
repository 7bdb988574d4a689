use dioxus::prelude::*;

use crate::client::{components::ToastHost, router::Route, store::toast::ToastQueue};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(ToastQueue::default()));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
        ToastHost {}
    }
}
