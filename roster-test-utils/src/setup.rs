use roster::service::RosterService;

use crate::{MockCharacterApi, RecordingToaster};

/// A mock collection and toaster wired together, produced by [`crate::TestBuilder`].
pub struct TestSetup {
    pub api: MockCharacterApi,
    pub toaster: RecordingToaster,
}

impl TestSetup {
    /// A roster service sharing this setup's collection and toaster.
    pub fn service(&self) -> RosterService<MockCharacterApi, RecordingToaster> {
        RosterService::new(self.api.clone(), self.toaster.clone())
    }
}
