use std::{cell::RefCell, rc::Rc};

use roster::service::Toaster;

/// Toaster that remembers every message instead of displaying it.
#[derive(Debug, Clone, Default)]
pub struct RecordingToaster {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingToaster {
    /// Messages shown so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Toaster for RecordingToaster {
    fn show(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
