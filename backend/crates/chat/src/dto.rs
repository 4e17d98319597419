//! Request/Response DTOs
//!
//! Inbound DTOs are camelCase (client wire format); the RAG backend speaks
//! snake_case, so the outbound types keep Rust field names as-is.

use serde::{Deserialize, Serialize};

/// Retrieval depth forwarded on every ask
pub const ASK_TOP_K: u32 = 5;

/// POST /api/chat/ask request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    pub question: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Outbound body for the backend `POST /rag/ask`
#[derive(Debug, Serialize)]
pub struct RagAskBody<'a> {
    pub question: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<&'a str>,
    pub top_k: u32,
    pub use_enhanced_retrieval: bool,
}

impl<'a> RagAskBody<'a> {
    pub fn new(question: &'a str, conversation_id: Option<&'a str>) -> Self {
        Self {
            question,
            conversation_id,
            top_k: ASK_TOP_K,
            use_enhanced_retrieval: true,
        }
    }
}

/// Answer payload from the retrieval pipeline, passed through verbatim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub sources: Vec<String>,
    pub response_time_seconds: f64,
    pub citation_count: u32,
    pub citation_accuracy: f64,
    pub domain: String,
    pub domain_label: String,
    pub domain_confidence: f64,
}

impl AskResponse {
    /// Fallback payload when the backend is unreachable or errors out
    pub fn fallback() -> Self {
        Self {
            answer: "Something went wrong while answering. Please try again.".to_string(),
            sources: Vec::new(),
            response_time_seconds: 0.0,
            citation_count: 0,
            citation_accuracy: 0.0,
            domain: String::new(),
            domain_label: String::new(),
            domain_confidence: 0.0,
        }
    }
}

/// Conversation record as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationResponse {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub message_count: u32,
}

/// POST /api/conversations request
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateConversationRequest {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rag_ask_body_defaults() {
        let body = RagAskBody::new("What is tenancy law?", None);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["question"], "What is tenancy law?");
        assert_eq!(json["top_k"], 5);
        assert_eq!(json["use_enhanced_retrieval"], true);
        // Absent conversation id is omitted, not null
        assert!(json.get("conversation_id").is_none());
    }

    #[test]
    fn test_rag_ask_body_with_conversation() {
        let body = RagAskBody::new("Follow-up?", Some("conv-9"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["conversation_id"], "conv-9");
    }

    #[test]
    fn test_ask_request_accepts_camel_case() {
        let req: AskRequest =
            serde_json::from_str(r#"{"question":"q","conversationId":"c1"}"#).unwrap();
        assert_eq!(req.conversation_id.as_deref(), Some("c1"));

        let req: AskRequest = serde_json::from_str(r#"{"question":"q"}"#).unwrap();
        assert!(req.conversation_id.is_none());
    }

    #[test]
    fn test_fallback_answer_shape() {
        let fallback = AskResponse::fallback();
        assert!(fallback.sources.is_empty());
        assert_eq!(fallback.citation_count, 0);
        assert!(!fallback.answer.is_empty());
    }

    #[test]
    fn test_conversation_defaults_message_count() {
        let conv: ConversationResponse = serde_json::from_str(
            r#"{"id":"1","title":"t","created_at":"2026-01-01","updated_at":"2026-01-02"}"#,
        )
        .unwrap();
        assert_eq!(conv.message_count, 0);
    }
}
