//! Chat Backend Module
//!
//! Thin proxy in front of the external legal-RAG backend:
//! - `POST /api/chat/ask` - forward a question to the retrieval pipeline
//! - `GET /api/conversations` - list the user's conversations
//! - `POST /api/conversations` - create a conversation
//!
//! The session cookie supplies the bearer token for backend calls. Backend
//! failures degrade to explicit fallback payloads; they never crash the
//! request.

pub mod dto;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{ChatError, ChatResult};
pub use gateway::{ChatGateway, HttpChatGateway};
pub use router::chat_router;
