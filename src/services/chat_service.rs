//! Servicio de chat del asistente de compra
//!
//! Flujo: interpretar el mensaje, filtrar el catálogo, detectar intenciones,
//! preguntar al asistente externo con timeout y, ante cualquier fallo, responder
//! con el generador determinista. La acción devuelta no depende de qué camino
//! produjo el texto.

use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;
use std::time::Duration;

use crate::dto::chat_dto::{ChatAction, ChatRequest, ChatResponse, ChatTurn};
use crate::dto::vehicle_dto::CompareRequest;
use crate::models::Vehicle;
use crate::repositories::CatalogRepository;
use crate::services::assistant_client::{ChatMessage, ChatRole, ReplyGenerator, UpstreamError};
use crate::services::{comparison_service, query_parser, vehicle_filter};
use crate::utils::format::{format_signed, format_signed_decimal, format_thousands};

/// Turnos previos que se reenvían al asistente
pub const HISTORY_LIMIT: usize = 10;
/// Vehículos devueltos junto a una respuesta de búsqueda
pub const MAX_RETURNED_VEHICLES: usize = 10;
/// Vehículos listados dentro del texto de la respuesta
pub const MAX_LISTED_VEHICLES: usize = 5;

lazy_static! {
    static ref GREETING_REGEX: Regex =
        Regex::new(r"(?i)\b(hello|hi|hey|greetings|good morning|good afternoon|good evening)\b").unwrap();
    static ref HELP_REGEX: Regex =
        Regex::new(r"(?i)\b(help|what can you|what do you|how|tell me|explain)\b").unwrap();
    static ref SEARCH_REGEX: Regex = Regex::new(
        r"(?i)\b(show|find|search|look for|affordable|hybrids?|suvs?|sedans?|trucks?|under|cars?|vehicles?)\b|\$"
    )
    .unwrap();
    static ref COMPARISON_REGEX: Regex =
        Regex::new(r"(?i)\b(vs|versus|compared? to|compare)\b").unwrap();
    static ref FINANCE_QUESTION_REGEX: Regex = Regex::new(
        r"(?i)\b(finance|financing|payments?|lease|leasing|buy|purchase|monthly|apr|interest|afford|affordable|cost|price)\b"
    )
    .unwrap();
    static ref COMPARE_VERB_REGEX: Regex =
        Regex::new(r"(?i)^\s*(can you\s+|please\s+)?compare\s+").unwrap();
    static ref FINANCE_ACTION_REGEX: Regex =
        Regex::new(r"(?i)\b(finance|financing|payments?|lease|leasing|apr|interest)\b").unwrap();
}

/// Intenciones detectadas en un mensaje
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intents {
    pub greeting: bool,
    pub help: bool,
    pub search: bool,
    pub comparison: bool,
    pub finance_question: bool,
    pub finance_action: bool,
}

impl Intents {
    pub fn detect(message: &str) -> Self {
        Self {
            greeting: GREETING_REGEX.is_match(message),
            help: HELP_REGEX.is_match(message),
            search: SEARCH_REGEX.is_match(message),
            comparison: COMPARISON_REGEX.is_match(message),
            finance_question: FINANCE_QUESTION_REGEX.is_match(message),
            finance_action: FINANCE_ACTION_REGEX.is_match(message),
        }
    }
}

/// Acción para el frontend: búsqueda sólo si hay resultados
pub fn infer_action(intents: &Intents, match_count: usize) -> ChatAction {
    if intents.search && match_count > 0 {
        ChatAction::Search
    } else if intents.comparison {
        ChatAction::Compare
    } else if intents.finance_action {
        ChatAction::Finance
    } else {
        ChatAction::Chat
    }
}

pub struct ChatService {
    catalog: Arc<CatalogRepository>,
    generator: Arc<dyn ReplyGenerator>,
    timeout: Duration,
    assistant_name: String,
}

impl ChatService {
    pub fn new(
        catalog: Arc<CatalogRepository>,
        generator: Arc<dyn ReplyGenerator>,
        timeout: Duration,
        assistant_name: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            generator,
            timeout,
            assistant_name: assistant_name.into(),
        }
    }

    pub async fn respond(&self, request: &ChatRequest) -> ChatResponse {
        let message = request.message.as_deref().unwrap_or_default();
        if message.trim().is_empty() {
            return ChatResponse::prompt_for_input();
        }

        let vehicles = self.catalog.vehicles();
        let filters = query_parser::parse(message);
        let matches = vehicle_filter::filter(vehicles, &filters);
        let intents = Intents::detect(message);

        let system_prompt = self.system_prompt();
        let history = conversation_history(&request.conversation_history, message);

        let response = match self.ask_assistant(&system_prompt, &history).await {
            Ok(reply) => {
                tracing::debug!("🤖 Respuesta del asistente recibida ({} caracteres)", reply.len());
                with_matching_vehicles(reply, &intents, &matches)
            }
            Err(UpstreamError::NotConfigured) => self.fallback_reply(message, &intents, &matches),
            Err(e) => {
                tracing::warn!("⚠️ Asistente no disponible, usando respuesta local: {}", e);
                self.fallback_reply(message, &intents, &matches)
            }
        };

        let action = infer_action(&intents, matches.len());
        let returned = (action == ChatAction::Search).then(|| {
            matches
                .iter()
                .take(MAX_RETURNED_VEHICLES)
                .map(|v| (*v).clone())
                .collect()
        });

        tracing::info!(
            "💬 Chat: {} coincidencias, acción {:?}",
            matches.len(),
            action
        );

        ChatResponse::reply(response, action, returned)
    }

    async fn ask_assistant(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<String, UpstreamError> {
        match tokio::time::timeout(
            self.timeout,
            self.generator.generate_reply(system_prompt, history),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout(self.timeout)),
        }
    }

    /// Persona del asistente + una línea por vehículo del catálogo
    pub fn system_prompt(&self) -> String {
        let catalog_lines = self
            .catalog
            .vehicles()
            .iter()
            .map(prompt_line)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "You are {name}, a knowledgeable and friendly AI assistant for Toyota's vehicle shopping and finance platform. \
You help customers find the perfect vehicle, understand financing options, and make informed decisions.

**Available Vehicles:**
{catalog_lines}

**Key Information:**
- Toyota offers competitive financing with APR ranging from 2.9% to 7.9% depending on credit score
- Leasing options: 24-48 month terms with lower monthly payments
- Subscription service: All-inclusive monthly payments with insurance and maintenance
- Toyota Safety Sense is standard on all models
- Hybrid models offer excellent fuel economy (40-57 MPG)
- All vehicles come with comprehensive warranties

**Your Role:**
- Answer questions about vehicles, financing, features, and comparisons
- When users ask about specific vehicles, provide detailed information from the available data
- For financing questions, explain options clearly and help with calculations
- If asked about vehicles not in the list, acknowledge it and suggest similar alternatives
- Use markdown formatting for better readability (bold, lists, etc.)
- Keep responses informative but concise (2-4 paragraphs typically)",
            name = self.assistant_name,
        )
    }

    /// Respuesta determinista: saludo, ayuda, comparación resuelta, búsqueda,
    /// finanzas, comparación sin resolver y ayuda por defecto, en ese orden
    pub fn fallback_reply(&self, message: &str, intents: &Intents, matches: &[&Vehicle]) -> String {
        if intents.greeting {
            return format!(
                "Hello! I'm {}, your AI assistant. I'm here to help you find the perfect Toyota vehicle, \
understand financing options, and answer any questions you have about our lineup.\n\n\
I can help you:\n\
• Find vehicles that match your needs and budget\n\
• Compare different models and trims\n\
• Understand financing, leasing, and subscription options\n\
• Learn about vehicle features, specifications, and capabilities\n\n\
What would you like to explore today?",
                self.assistant_name
            );
        }

        if intents.help {
            return "I'm here to help! I can assist you with:\n\n\
🔍 **Vehicle Search**: Find vehicles by type, price, features, or specifications\n\
⚖️ **Comparisons**: Compare different models side-by-side\n\
💰 **Financing**: Get information about buying, leasing, and subscription options\n\
📊 **Specifications**: Learn about MPG, horsepower, features, and more\n\n\
Just ask me anything about Toyota vehicles or financing, and I'll do my best to help!"
                .to_string();
        }

        if intents.comparison {
            // "Compare Camry vs RAV4": el verbo no forma parte del primer nombre
            let request = CompareRequest {
                query: Some(COMPARE_VERB_REGEX.replace(message, "").into_owned()),
                ..Default::default()
            };
            if let Ok(comparison) = comparison_service::compare(self.catalog.vehicles(), &request) {
                return comparison_summary(&comparison);
            }
        }

        if intents.search {
            if matches.is_empty() {
                return "I couldn't find any vehicles matching those exact criteria. Here are some suggestions:\n\n\
• Try 'Show me all SUVs' or 'Find hybrid vehicles'\n\
• Search by price range: 'Cars under $40,000'\n\
• Ask about specific models: 'Tell me about the Toyota Camry'\n\n\
You can also browse our full inventory on the Vehicles page!"
                    .to_string();
            }

            let list = matches
                .iter()
                .take(MAX_LISTED_VEHICLES)
                .map(|v| format!("• {}", vehicle_line(v)))
                .collect::<Vec<_>>()
                .join("\n");
            return format!(
                "Great! I found {} vehicle(s) that match your criteria:\n\n{}\n\n\
Would you like more details about any of these vehicles, or would you like to compare them?",
                matches.len(),
                list
            );
        }

        if intents.finance_question {
            return "I can help with financing questions! Here's an overview:\n\n\
**Buying:**\n\
• APR typically ranges from 2.9% to 7.9% depending on your credit score\n\
• Loan terms available from 36 to 84 months\n\
• You own the vehicle after paying off the loan\n\n\
**Leasing:**\n\
• Lower monthly payments than buying\n\
• Terms typically 24-48 months\n\
• You return the vehicle at the end of the lease\n\n\
**Subscription:**\n\
• All-inclusive monthly payment\n\
• Includes insurance and maintenance\n\
• Flexible terms with no long-term commitment\n\n\
Use the Finance page to calculate exact monthly payments based on your situation!"
                .to_string();
        }

        if intents.comparison {
            return "I can help you compare vehicles! To get the best comparison, please specify two vehicles you'd like to compare.\n\n\
For example:\n\
• 'Compare Toyota Camry with Honda Accord'\n\
• 'Toyota RAV4 vs Honda Accord'\n\
• 'Show me Camry vs Accord comparison'\n\n\
I'll provide a detailed side-by-side comparison of features, pricing, and specifications."
                .to_string();
        }

        "I'm here to help! I can assist you with:\n\n\
• Finding the perfect vehicle for your needs\n\
• Comparing different models and trims\n\
• Understanding financing and payment options\n\
• Answering questions about features and specifications\n\n\
What would you like to know? Feel free to ask me anything about Toyota vehicles or financing!"
            .to_string()
    }
}

/// Últimos turnos del historial + mensaje actual, con roles del asistente
pub fn conversation_history(turns: &[ChatTurn], message: &str) -> Vec<ChatMessage> {
    let start = turns.len().saturating_sub(HISTORY_LIMIT);
    turns[start..]
        .iter()
        .map(|turn| {
            let role = if turn.from == "user" {
                ChatRole::User
            } else {
                ChatRole::Assistant
            };
            ChatMessage::new(role, turn.text.clone())
        })
        .chain(std::iter::once(ChatMessage::new(ChatRole::User, message)))
        .collect()
}

/// Añade la lista de coincidencias si la respuesta del asistente no habla de ellas
fn with_matching_vehicles(reply: String, intents: &Intents, matches: &[&Vehicle]) -> String {
    if !intents.search || matches.is_empty() {
        return reply;
    }
    let lowered = reply.to_lowercase();
    if lowered.contains("found") || lowered.contains("vehicle") {
        return reply;
    }

    let list = matches
        .iter()
        .take(MAX_LISTED_VEHICLES)
        .map(|v| vehicle_line(v))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\n**Matching Vehicles:**\n{}", reply, list)
}

fn vehicle_line(vehicle: &Vehicle) -> String {
    format!(
        "**{}** - ${} ({} MPG, {})",
        vehicle.display_name(),
        format_thousands(u64::from(vehicle.price)),
        vehicle.mpg,
        vehicle.vehicle_type
    )
}

fn prompt_line(vehicle: &Vehicle) -> String {
    format!(
        "{} ({}): ${}, {} MPG, {}, {}, {}, {} HP",
        vehicle.display_name(),
        vehicle.year,
        format_thousands(u64::from(vehicle.price)),
        vehicle.mpg,
        vehicle.vehicle_type,
        vehicle.drivetrain,
        vehicle.fuel_type,
        vehicle.horsepower
    )
}

fn comparison_summary(comparison: &crate::dto::vehicle_dto::ComparisonResponse) -> String {
    let (v1, v2) = (&comparison.vehicle1, &comparison.vehicle2);
    let mut summary = format!(
        "Here's how the **{}** compares to the **{}**:\n\n\
• Price: ${} vs ${} ({})\n\
• MPG: {} vs {} ({})\n\
• Horsepower: {} vs {} ({})",
        v1.display_name(),
        v2.display_name(),
        format_thousands(u64::from(v1.price)),
        format_thousands(u64::from(v2.price)),
        format_signed(comparison.differences.price),
        v1.mpg,
        v2.mpg,
        format_signed_decimal(comparison.differences.mpg),
        v1.horsepower,
        v2.horsepower,
        format_signed(comparison.differences.horsepower),
    );

    if !comparison.similarities.is_empty() {
        summary.push_str(&format!(
            "\n\n**What they share:** {}",
            comparison.similarities.join(", ")
        ));
    }
    summary.push_str("\n\nWould you like to calculate payments for either of them?");
    summary
}
