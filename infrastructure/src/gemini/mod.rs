//! Gemini adapter.
//!
//! Implements the [`ModelGateway`](hospital_application::ModelGateway) port
//! over the Gemini `generateContent` REST endpoint using `reqwest`.

pub mod convert;
pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::GeminiError;
pub use gateway::{DEFAULT_BASE_URL, GeminiGateway, GeminiSettings};
