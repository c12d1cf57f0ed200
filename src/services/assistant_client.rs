//! Cliente del asistente conversacional externo (API de chat completions)
//!
//! `ReplyGenerator` es la capacidad que usa el chat: recibe el prompt de sistema y
//! el historial, devuelve texto o un `UpstreamError`. El chat siempre puede caer al
//! responder determinista, así que aquí no se reintenta nada.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Temperatura de las respuestas del asistente
pub const ASSISTANT_TEMPERATURE: f32 = 0.8;
/// Longitud máxima de la respuesta
pub const ASSISTANT_MAX_TOKENS: u32 = 500;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Fallos del asistente externo. Nunca llegan al cliente HTTP.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("assistant is not configured")]
    NotConfigured,

    #[error("assistant did not answer within {0:?}")]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("assistant returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("assistant returned an empty reply")]
    EmptyResponse,
}

#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn generate_reply(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<String, UpstreamError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Asistente respaldado por un endpoint compatible con OpenAI
pub struct OpenAiAssistant {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiAssistant {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ReplyGenerator for OpenAiAssistant {
    async fn generate_reply(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<String, UpstreamError> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::new(ChatRole::System, system_prompt));
        messages.extend_from_slice(history);

        let body = CompletionRequest {
            model: &self.model,
            messages,
            temperature: ASSISTANT_TEMPERATURE,
            max_tokens: ASSISTANT_MAX_TOKENS,
        };

        tracing::debug!("🤖 Enviando {} mensajes al asistente ({})", history.len(), self.model);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("❌ El asistente respondió con status {}: {}", status, body);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(UpstreamError::EmptyResponse)
    }
}

/// Sin clave configurada: siempre responde `NotConfigured`
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledAssistant;

#[async_trait]
impl ReplyGenerator for DisabledAssistant {
    async fn generate_reply(
        &self,
        _system_prompt: &str,
        _history: &[ChatMessage],
    ) -> Result<String, UpstreamError> {
        Err(UpstreamError::NotConfigured)
    }
}
