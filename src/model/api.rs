use serde::Deserialize;

/// The body returned by the characters API when a request fails
#[derive(Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
