use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{
        components::{CharacterForm, CharacterList, Page},
        util::{synchronize_board, use_roster_service},
    },
    service::CharacterBoard,
};

#[component]
pub fn Home() -> Element {
    let board = use_signal(CharacterBoard::default);
    let roster = use_roster_service();

    // Draw the list once on load; every later redraw follows a mutation
    use_future(move || {
        let roster = roster.clone();
        async move { synchronize_board(&roster, board).await }
    });

    rsx!(
        Title { "Roster" }
        Meta {
            name: "description",
            content: "Browse, create, and edit characters."
        }
        Page { class: "flex flex-col items-center gap-6",
            div { class: "w-full max-w-[1440px] flex flex-col items-center gap-6",
                CharacterForm { board }
                CharacterList { board }
            }
        }
    )
}
