use crate::{ApiError, ApiResult, AppState};
use axum::{extract::State, Json};
use chrono::Utc;
use moleculab_ai::{
    assess_toxicity, default_targets, explain_prediction, generate_candidates, plan_synthesis,
    predict_interactions, resolve_molecule, resolve_with_fallback, GenerationInput,
    ProviderResult,
};
use moleculab_core::{
    DiscoveryMethod, Explanation, IdentifiedMolecule, MoleculeCandidate, MoleculeRef,
    ProteinInteraction, Provenance, ReactionConditions, SynthesisStep, ToxicityProfile,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub target_disease: Option<String>,
    pub constraints: Option<String>,
    pub method: Option<DiscoveryMethod>,
    #[serde(default)]
    pub save: bool,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub ok: bool,
    pub source: Provenance,
    pub compounds: Vec<MoleculeCandidate>,
    pub saved: Vec<MoleculeCandidate>,
}

#[derive(Deserialize)]
pub struct InteractionsRequest {
    pub molecule: Option<MoleculeRef>,
    pub targets: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct InteractionsResponse {
    pub ok: bool,
    pub source: Provenance,
    pub interactions: Vec<ProteinInteraction>,
}

#[derive(Deserialize)]
pub struct MoleculeRequest {
    pub molecule: Option<MoleculeRef>,
}

#[derive(Serialize)]
pub struct ToxicityResponse {
    pub ok: bool,
    pub source: Provenance,
    pub toxicity: ToxicityProfile,
}

#[derive(Serialize)]
pub struct SynthesisResponse {
    pub ok: bool,
    pub source: Provenance,
    pub route: Vec<SynthesisStep>,
    pub conditions: Vec<ReactionConditions>,
}

#[derive(Deserialize)]
pub struct ExplainRequest {
    pub molecule: Option<MoleculeRef>,
    pub task: Option<String>,
}

#[derive(Serialize)]
pub struct ExplainResponse {
    pub ok: bool,
    pub source: Provenance,
    pub explanation: Explanation,
}

#[derive(Deserialize)]
pub struct IdentifyRequest {
    pub query: Option<String>,
}

#[derive(Serialize)]
pub struct IdentifyResponse {
    pub ok: bool,
    pub molecule: IdentifiedMolecule,
}

/// Dashboard clients send either a bare name or a molecule object.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum MoleculeField {
    Name(String),
    Reference(MoleculeRef),
}

impl From<MoleculeField> for MoleculeRef {
    fn from(field: MoleculeField) -> Self {
        match field {
            MoleculeField::Name(name) => MoleculeRef::named(name),
            MoleculeField::Reference(reference) => reference,
        }
    }
}

#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub molecule: Option<MoleculeField>,
    pub rating: Option<f64>,
    pub comments: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: String,
    pub molecule: MoleculeRef,
    pub rating: f64,
    pub comments: Option<String>,
    pub created_at: String,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub ok: bool,
    pub feedback: FeedbackRecord,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: option_env!("CARGO_PKG_VERSION")
            .unwrap_or("0.1.0")
            .to_string(),
    })
}

/// Generate candidate molecules, preferring a configured provider.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    let input = GenerationInput {
        target_disease: request.target_disease,
        constraints: request.constraints,
        method: request.method,
    };

    let attempt = state.provider.generate(&input).await;
    let (compounds, source) = resolve_with_fallback(attempt, || generate_candidates(&input));

    if request.save {
        // Row persistence belongs to the hosted data store.
        debug!(count = compounds.len(), "save requested; persistence delegated");
    }

    Ok(Json(GenerateResponse {
        ok: true,
        source,
        compounds,
        saved: Vec::new(),
    }))
}

/// Predict protein-target interactions for a molecule.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<InteractionsRequest>,
) -> ApiResult<Json<InteractionsResponse>> {
    let molecule = request
        .molecule
        .ok_or_else(|| ApiError::BadRequest("Missing molecule".to_string()))?;
    let targets = request.targets.unwrap_or_else(default_targets);

    let attempt = state.provider.dock(&molecule, &targets).await;
    let (interactions, source) =
        resolve_with_fallback(attempt, || predict_interactions(&molecule, &targets));

    Ok(Json(InteractionsResponse {
        ok: true,
        source,
        interactions,
    }))
}

/// Assess toxicity and ADMET properties for a molecule.
pub async fn toxicity(
    State(state): State<AppState>,
    Json(request): Json<MoleculeRequest>,
) -> ApiResult<Json<ToxicityResponse>> {
    let molecule = request
        .molecule
        .ok_or_else(|| ApiError::BadRequest("Missing molecule".to_string()))?;

    let attempt = state.provider.admet(&molecule).await;
    let (toxicity, source) = resolve_with_fallback(attempt, || assess_toxicity(&molecule));

    Ok(Json(ToxicityResponse {
        ok: true,
        source,
        toxicity,
    }))
}

/// Propose a synthesis route for a molecule.
pub async fn synthesis(
    State(state): State<AppState>,
    Json(request): Json<MoleculeRequest>,
) -> ApiResult<Json<SynthesisResponse>> {
    let molecule = request
        .molecule
        .ok_or_else(|| ApiError::BadRequest("Missing molecule".to_string()))?;

    let attempt = state.provider.synthesis(&molecule).await;
    let (plan, source) = resolve_with_fallback(attempt, || plan_synthesis(&molecule));

    Ok(Json(SynthesisResponse {
        ok: true,
        source,
        route: plan.route,
        conditions: plan.conditions,
    }))
}

/// Explain which features drove a prediction.
pub async fn explain(
    State(state): State<AppState>,
    Json(request): Json<ExplainRequest>,
) -> ApiResult<Json<ExplainResponse>> {
    let molecule = request
        .molecule
        .ok_or_else(|| ApiError::BadRequest("Missing molecule".to_string()))?;
    let task = request.task;

    let attempt = state.provider.explain(&molecule, task.as_deref()).await;
    let (explanation, source) =
        resolve_with_fallback(attempt, || explain_prediction(task.as_deref()));

    Ok(Json(ExplainResponse {
        ok: true,
        source,
        explanation,
    }))
}

/// Identify a molecule from a name or SMILES-like query.
pub async fn identify(
    State(state): State<AppState>,
    Json(request): Json<IdentifyRequest>,
) -> ApiResult<Json<IdentifyResponse>> {
    let query = request
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing query".to_string()))?
        .to_string();

    let molecule = match state.provider.identify(&query).await {
        ProviderResult::Ok(mut molecule) => {
            molecule.source = "provider".to_string();
            molecule
        }
        _ => resolve_molecule(state.provider.http_client(), &query).await,
    };

    Ok(Json(IdentifyResponse { ok: true, molecule }))
}

/// Capture user feedback on a candidate for a later learning loop.
pub async fn feedback(
    Json(request): Json<FeedbackRequest>,
) -> ApiResult<Json<FeedbackResponse>> {
    let molecule: MoleculeRef = request
        .molecule
        .ok_or_else(|| ApiError::BadRequest("Missing molecule".to_string()))?
        .into();

    let rating = request.rating.map_or(3.0, |r| r.clamp(1.0, 5.0));

    let record = FeedbackRecord {
        id: Uuid::new_v4().to_string(),
        molecule,
        rating,
        comments: request.comments,
        created_at: Utc::now().to_rfc3339(),
    };

    Ok(Json(FeedbackResponse {
        ok: true,
        feedback: record,
    }))
}
