//! Chat Gateway Trait
//!
//! Interface to the external RAG backend. The HTTP implementation lives
//! here too; tests substitute a mock.

use platform::http::ApiClient;

use crate::dto::{AskResponse, ConversationResponse, CreateConversationRequest, RagAskBody};
use crate::error::ChatResult;

/// RAG backend gateway
#[trait_variant::make(ChatGateway: Send)]
pub trait LocalChatGateway {
    /// Forward a question to the retrieval pipeline (`POST /rag/ask`)
    async fn ask(
        &self,
        question: &str,
        conversation_id: Option<&str>,
        bearer: Option<&str>,
    ) -> ChatResult<AskResponse>;

    /// List the user's conversations (`GET /conversations`)
    async fn list_conversations(&self, bearer: Option<&str>)
    -> ChatResult<Vec<ConversationResponse>>;

    /// Create a conversation (`POST /conversations`)
    async fn create_conversation(
        &self,
        title: &str,
        bearer: Option<&str>,
    ) -> ChatResult<ConversationResponse>;
}

/// Chat gateway backed by the external HTTP API
#[derive(Debug, Clone)]
pub struct HttpChatGateway {
    api: ApiClient,
}

impl HttpChatGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl ChatGateway for HttpChatGateway {
    async fn ask(
        &self,
        question: &str,
        conversation_id: Option<&str>,
        bearer: Option<&str>,
    ) -> ChatResult<AskResponse> {
        let body = RagAskBody::new(question, conversation_id);
        Ok(self.api.post_json("/rag/ask", &body, bearer).await?)
    }

    async fn list_conversations(
        &self,
        bearer: Option<&str>,
    ) -> ChatResult<Vec<ConversationResponse>> {
        Ok(self.api.get_json("/conversations", bearer).await?)
    }

    async fn create_conversation(
        &self,
        title: &str,
        bearer: Option<&str>,
    ) -> ChatResult<ConversationResponse> {
        let body = CreateConversationRequest {
            title: title.to_string(),
        };
        Ok(self.api.post_json("/conversations", &body, bearer).await?)
    }
}
