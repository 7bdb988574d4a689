pub mod api;
pub mod builder;
pub mod error;
pub mod fixtures;
pub mod log;
pub mod setup;
pub mod toaster;

pub use api::{ApiRequest, MockCharacterApi};
pub use builder::TestBuilder;
pub use error::TestError;
pub use log::LogCapture;
pub use setup::TestSetup;
pub use toaster::RecordingToaster;

pub mod prelude {
    pub use crate::{
        fixtures::factory, ApiRequest, LogCapture, MockCharacterApi, RecordingToaster, TestBuilder, TestError,
        TestSetup,
    };
}
