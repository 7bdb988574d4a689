use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Roster"
                        }
                        p { class: "text-xs",
                            "v0.1.0-Alpha.1"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
