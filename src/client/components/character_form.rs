use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUserPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::util::use_roster_service,
    error::Error,
    model::{class::CharacterClass, race::Race},
    service::{CharacterBoard, CreateForm},
};

#[component]
pub fn CharacterForm(board: Signal<CharacterBoard>) -> Element {
    let mut board = board;
    let mut form = use_signal(CreateForm::default);
    let roster = use_roster_service();

    let current = form.read().clone();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let roster = roster.clone();
        spawn(async move {
            let submitted = form.read().clone();
            match roster.create(&submitted, Utc::now()).await {
                Ok(refreshed) => form.write().finish_submit(&mut board.write(), refreshed),
                // Already logged by the service, no request was made
                Err(Error::MissingFormField(_)) => (),
                Err(err) => tracing::error!("Failed to create character: {}", err),
            }
        });
    };

    rsx!(
        div {
            class: "card shadow-sm w-full max-w-196",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "New Character"
                }
                form {
                    class: "flex flex-col gap-3",
                    onsubmit,
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        name: "name",
                        placeholder: "Name",
                        value: "{current.name}",
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                    select {
                        class: "select select-bordered w-full",
                        name: "race",
                        onchange: move |evt: FormEvent| form.write().race = Race::from_name(&evt.value()),
                        option {
                            value: "",
                            disabled: true,
                            selected: current.race.is_none(),
                            "Choose a race"
                        }
                        for race in Race::ALL {
                            option {
                                value: race.as_str(),
                                selected: current.race == Some(race),
                                {race.label()}
                            }
                        }
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "number",
                        name: "age",
                        placeholder: "Age",
                        value: "{current.age}",
                        oninput: move |evt: FormEvent| form.write().age = evt.value(),
                    }
                    div {
                        class: "flex flex-wrap gap-3",
                        for character_class in CharacterClass::ALL {
                            label {
                                class: "label cursor-pointer flex gap-1",
                                input {
                                    class: "radio radio-sm",
                                    r#type: "radio",
                                    name: "class",
                                    value: character_class.as_str(),
                                    checked: current.class == Some(character_class),
                                    onchange: move |_| form.write().class = Some(character_class),
                                }
                                span { "{character_class}" }
                            }
                        }
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        name: "lore",
                        placeholder: "Lore",
                        value: "{current.lore}",
                        oninput: move |evt: FormEvent| form.write().lore = evt.value(),
                    }
                    button {
                        class: "btn btn-primary flex gap-2",
                        r#type: "submit",
                        Icon { width: 16, height: 16, icon: FaUserPlus }
                        "Add character"
                    }
                }
            }
        }
    )
}
