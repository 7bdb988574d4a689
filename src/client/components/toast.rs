use dioxus::prelude::*;

use crate::{
    client::store::toast::{Toast, ToastQueue},
    config::Config,
};

/// Renders queued toasts at the top center of the screen.
///
/// Each toast fades out over the configured duration and removes itself when the CSS
/// animation ends.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_context::<Signal<ToastQueue>>();
    let config = use_context::<Config>();

    let visible: Vec<Toast> = toasts.read().iter().cloned().collect();

    rsx!(
        div {
            class: "toast toast-top toast-center z-50",
            for toast in visible {
                ToastItem {
                    key: "{toast.id}",
                    id: toast.id,
                    message: toast.message.clone(),
                    duration_ms: config.toast_duration_ms,
                }
            }
        }
    )
}

#[component]
fn ToastItem(id: u64, message: String, duration_ms: u32) -> Element {
    let mut toasts = use_context::<Signal<ToastQueue>>();

    rsx!(
        div {
            class: "alert roster-toast flex gap-2",
            style: "animation-duration: {duration_ms}ms",
            onanimationend: move |_| toasts.write().dismiss(id),
            span { "{message}" }
            button {
                class: "btn btn-ghost btn-xs",
                onclick: move |_| toasts.write().dismiss(id),
                "✕"
            }
        }
    )
}
