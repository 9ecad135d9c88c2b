//! Axum route handler for the facts endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::facts::prompts::facts_prompt;
use crate::facts::validation::validate_topic;
use crate::inference::parse::parse_fact_list;
use crate::inference::{FACTS_SAMPLING, MORE_FACTS_SAMPLING};
use crate::language::Language;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FactsRequest {
    pub topic: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub more: bool,
}

#[derive(Debug, Serialize)]
pub struct FactsResponse {
    pub facts: Vec<String>,
    pub language: Language,
}

/// POST /facts
///
/// Generates a batch of short facts about a topic. `more=true` asks for the
/// second "unpopular" batch with its own template and sampling. The response
/// may carry fewer facts than requested when the model under-delivers.
pub async fn handle_facts(
    State(state): State<AppState>,
    Json(request): Json<FactsRequest>,
) -> Result<Json<FactsResponse>, AppError> {
    let topic = validate_topic(request.topic.as_deref()).map_err(|e| {
        warn!("Facts request rejected: {}", e.message());
        AppError::Validation(e.message().to_string())
    })?;

    let language = Language::parse(request.language.as_deref());

    info!(
        "Facts requested [{}] for topic: \"{}\" ({})",
        language.code(),
        topic,
        if request.more { "unpopular" } else { "popular" }
    );

    let prompt = facts_prompt(&topic, language, request.more);
    let sampling = if request.more {
        MORE_FACTS_SAMPLING
    } else {
        FACTS_SAMPLING
    };

    let raw = state.inference.generate(&prompt, sampling).await?;
    let facts = parse_fact_list(&raw);

    info!("[{}] generated {} facts", language.code(), facts.len());

    Ok(Json(FactsResponse { facts, language }))
}
