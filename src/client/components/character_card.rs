use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFloppyDisk, FaPenToSquare, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::util::use_roster_service,
    service::{CharacterBoard, Field},
};

#[component]
pub fn RosterCard(board: Signal<CharacterBoard>, index: usize) -> Element {
    let mut board = board;
    let roster = use_roster_service();

    let card = match board.read().card(index) {
        Ok(card) => card.clone(),
        Err(err) => {
            tracing::error!("{}", err);
            return rsx!();
        }
    };
    let fields = card.fields().clone();
    let timestamp = card.relative_timestamp(Utc::now());

    let on_delete = {
        let roster = roster.clone();
        move |_: MouseEvent| {
            let id = match board.read().delete_target(index) {
                Ok(id) => id,
                Err(err) => {
                    tracing::error!("{}", err);
                    return;
                }
            };

            let roster = roster.clone();
            spawn(async move {
                match roster.delete(&id).await {
                    Ok(refreshed) => board.write().apply(refreshed),
                    Err(err) => tracing::error!("Failed to delete character {}: {}", id, err),
                }
            });
        }
    };

    let on_edit = move |_: MouseEvent| {
        if let Err(err) = board.write().begin_edit(index) {
            tracing::error!("{}", err);
        }
    };

    let on_save = move |_: MouseEvent| {
        let request = board.read().save_request(index, Utc::now());
        let (id, update) = match request {
            Ok(request) => request,
            Err(err) => {
                tracing::error!("{}", err);
                return;
            }
        };

        let roster = roster.clone();
        spawn(async move {
            match roster.save(&id, &update).await {
                Ok(refreshed) => {
                    if let Err(err) = board.write().complete_save(index, refreshed) {
                        tracing::error!("{}", err);
                    }
                }
                Err(err) => tracing::error!("Failed to update character {}: {}", id, err),
            }
        });
    };

    rsx!(
        div {
            class: "card shadow-sm w-72",
            figure { class: "px-4 pt-4",
                if let Some(src) = card.image() {
                    img {
                        class: "w-24 h-24 rounded-full",
                        src,
                        alt: "{fields.name}",
                    }
                } else {
                    img {
                        class: "w-24 h-24 rounded-full",
                        alt: "{fields.name}",
                    }
                }
            }
            div {
                class: "card-body gap-1",
                if card.is_editing() {
                    EditableField { board, index, field: Field::Name, value: fields.name.clone() }
                    EditableField { board, index, field: Field::Race, value: fields.race.clone() }
                    EditableField { board, index, field: Field::Age, value: fields.age.clone() }
                    EditableField { board, index, field: Field::Class, value: fields.class_name.clone() }
                    EditableField { board, index, field: Field::Lore, value: fields.lore.clone() }
                } else {
                    h1 { class: "card-title", "{fields.name}" }
                    h2 { class: "text-lg", "{fields.race}" }
                    h3 { "{fields.age}" }
                    h3 { "{fields.class_name}" }
                    h3 { class: "italic", "{fields.lore}" }
                }
                div {
                    class: "card-actions mt-2",
                    button {
                        class: "btn btn-outline btn-sm flex gap-2",
                        onclick: on_delete,
                        Icon { width: 16, height: 16, icon: FaTrash }
                        "delete"
                    }
                    if card.is_editing() {
                        button {
                            class: "btn btn-primary btn-sm flex gap-2",
                            onclick: on_save,
                            Icon { width: 16, height: 16, icon: FaFloppyDisk }
                            "save"
                        }
                    } else {
                        button {
                            class: "btn btn-outline btn-sm flex gap-2",
                            onclick: on_edit,
                            Icon { width: 16, height: 16, icon: FaPenToSquare }
                            "edit"
                        }
                    }
                }
                span { class: "text-xs opacity-70", "{timestamp}" }
            }
        }
    )
}

/// One card field while editing, outlined and writing every keystroke back to the board.
#[component]
fn EditableField(board: Signal<CharacterBoard>, index: usize, field: Field, value: String) -> Element {
    let mut board = board;

    rsx!(
        input {
            class: "input input-sm w-full border border-blue-500",
            r#type: "text",
            value: "{value}",
            oninput: move |evt: FormEvent| {
                if let Err(err) = board.write().edit_field(index, field, evt.value()) {
                    tracing::error!("{}", err);
                }
            }
        }
    )
}
