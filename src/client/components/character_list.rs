use dioxus::prelude::*;

use crate::{client::components::RosterCard, service::CharacterBoard};

#[component]
pub fn CharacterList(board: Signal<CharacterBoard>) -> Element {
    let count = board.read().len();

    rsx!(
        div {
            class: "w-full flex flex-wrap justify-center gap-4",
            if count == 0 {
                p { class: "opacity-70",
                    "No characters yet"
                }
            }
            // Cards are keyed by position so controls always act on the index they render
            for index in 0..count {
                RosterCard { key: "{index}", board, index }
            }
        }
    )
}
