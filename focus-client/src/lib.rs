//! Adapters for the Goal Focus outbound ports.
//!
//! [`FocusApiClient`] talks to the hosted backend (or to an in-memory
//! [`DevBackend`] in dev mode) and [`GeminiGenerator`] generates text through
//! Google's Gemini API.

mod client;
mod dev_backend;
mod dto;
mod gemini;

pub use client::*;
pub use dev_backend::DevBackend;
pub use gemini::*;
