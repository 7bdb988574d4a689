use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::store::toast::ToastQueue,
    config::Config,
    service::{CharacterBoard, HttpCharacterApi, RosterService},
};

pub type WebRosterService = RosterService<HttpCharacterApi, Signal<ToastQueue>>;

/// Builds the roster service from the launch [`Config`] and the app's toast queue.
pub fn use_roster_service() -> WebRosterService {
    let config = use_context::<Config>();
    let toasts = use_context::<Signal<ToastQueue>>();

    RosterService::new(HttpCharacterApi::new(config.api_base_url), toasts)
}

/// Fetches the collection and redraws the board. On failure the board is left untouched.
pub async fn synchronize_board(roster: &WebRosterService, mut board: Signal<CharacterBoard>) {
    match roster.synchronize().await {
        Ok(records) => board.write().replace(records),
        Err(err) => tracing::error!("Failed to fetch characters: {}", err),
    }
}
