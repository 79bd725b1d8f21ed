//! KrishiSahayi - conversational assistant for Kerala farmers
//!
//! Routes a farmer's question (text, optionally with a photo) to Gemini with a
//! Malayalam or English agricultural-expert prompt and returns the answer over
//! a small JSON HTTP API.

pub mod ai;
pub mod app;
pub mod compose;
pub mod error;
pub mod models;
pub mod prompts;
pub mod server;

pub use error::{Error, Result};
