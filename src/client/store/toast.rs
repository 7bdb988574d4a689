use std::collections::VecDeque;

use dioxus::prelude::*;

use crate::service::Toaster;

/// Most toasts kept on screen at once; the oldest is dropped first.
pub const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Queues a message and returns the id used to dismiss it.
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push_back(Toast {
            id,
            message: message.into(),
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }

        id
    }

    /// Removes a toast; unknown ids are ignored since a toast can be closed and expire in the
    /// same frame.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Toaster for Signal<ToastQueue> {
    fn show(&self, message: &str) {
        let mut queue = *self;
        queue.write().push(message);
    }
}
