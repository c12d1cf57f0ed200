use serde::{Deserialize, Serialize};

use crate::models::Vehicle;

// Turno previo de la conversación tal como lo envía el widget de chat
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChatTurn {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub text: String,
}

// Request del chat
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

/// Acción que el frontend debe ejecutar con la respuesta
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatAction {
    Chat,
    Search,
    Compare,
    Finance,
}

// Response del chat
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicles: Option<Vec<Vehicle>>,
    pub action: ChatAction,
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

pub const EMPTY_MESSAGE_REPLY: &str = "Please enter a message or question.";

pub const CHAT_FAILURE_REPLY: &str = "I'm sorry, I encountered an error processing your request. Please try again.\n\n\
Here are some things you can ask me:\n\n\
• \"Show me hybrid SUVs\"\n\
• \"Find cars under $30,000\"\n\
• \"Compare Camry vs Accord\"\n\
• \"Tell me about financing options\"";

impl ChatResponse {
    pub fn reply(response: String, action: ChatAction, vehicles: Option<Vec<Vehicle>>) -> Self {
        Self {
            response,
            vehicles,
            action,
            error: false,
            error_message: None,
        }
    }

    /// Mensaje vacío: se pide una pregunta, no es un error
    pub fn prompt_for_input() -> Self {
        Self::reply(EMPTY_MESSAGE_REPLY.to_string(), ChatAction::Chat, None)
    }

    /// Fallo interno: texto de ayuda + bandera de error
    pub fn failure(error_message: impl Into<String>) -> Self {
        Self {
            response: CHAT_FAILURE_REPLY.to_string(),
            vehicles: None,
            action: ChatAction::Chat,
            error: true,
            error_message: Some(error_message.into()),
        }
    }
}
