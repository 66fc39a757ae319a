use crate::generator::GenerationInput;
use anyhow::{anyhow, Context, Result};
use moleculab_core::{
    DiscoveryError, Explanation, IdentifiedMolecule, MoleculeCandidate, MoleculeRef,
    ProteinInteraction, ProviderConfig, ProviderKind, ReactionConditions, SynthesisPlan,
    SynthesisStep, ToxicityProfile,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of a single provider attempt.
///
/// `Unavailable` means no URL is configured for the call, so no network
/// attempt was made. `Failed` covers everything else: connection errors,
/// timeouts, non-success statuses, unparseable bodies, and payloads missing
/// the expected field. Callers pattern-match this instead of probing
/// optional fields.
#[derive(Debug)]
pub enum ProviderResult<T> {
    Ok(T),
    Unavailable,
    Failed(String),
}

impl<T> ProviderResult<T> {
    pub fn and_then<U>(self, f: impl FnOnce(T) -> ProviderResult<U>) -> ProviderResult<U> {
        match self {
            ProviderResult::Ok(value) => f(value),
            ProviderResult::Unavailable => ProviderResult::Unavailable,
            ProviderResult::Failed(reason) => ProviderResult::Failed(reason),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ProviderResult::Ok(_))
    }
}

/// HTTP client for the optional external prediction providers.
///
/// One attempt per call, no retries: the fallback gate is the entire
/// recovery strategy.
pub struct ProviderClient {
    config: ProviderConfig,
    client: Client,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> moleculab_core::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                DiscoveryError::Configuration(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables.
    pub fn from_env() -> moleculab_core::Result<Self> {
        Self::new(ProviderConfig::from_env())
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// The underlying HTTP client, shared with the public identification
    /// lookups so they inherit the same timeout.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    pub async fn generate(
        &self,
        input: &GenerationInput,
    ) -> ProviderResult<Vec<MoleculeCandidate>> {
        self.call::<_, GenerateEnvelope>(ProviderKind::Generate, input)
            .await
            .and_then(|envelope| non_empty(envelope.compounds, "compounds"))
    }

    pub async fn dock(
        &self,
        molecule: &MoleculeRef,
        targets: &[String],
    ) -> ProviderResult<Vec<ProteinInteraction>> {
        let body = DockBody {
            molecule,
            proteins: targets,
        };
        self.call::<_, DockEnvelope>(ProviderKind::Docking, &body)
            .await
            .and_then(|envelope| non_empty(envelope.interactions, "interactions"))
    }

    pub async fn admet(&self, molecule: &MoleculeRef) -> ProviderResult<ToxicityProfile> {
        let body = MoleculeBody { molecule };
        self.call::<_, AdmetEnvelope>(ProviderKind::Admet, &body)
            .await
            .and_then(|envelope| present(envelope.toxicity, "toxicity"))
    }

    pub async fn synthesis(&self, molecule: &MoleculeRef) -> ProviderResult<SynthesisPlan> {
        let body = MoleculeBody { molecule };
        self.call::<_, SynthesisEnvelope>(ProviderKind::Synthesis, &body)
            .await
            .and_then(|envelope| match envelope.route {
                Some(route) if !route.is_empty() => ProviderResult::Ok(SynthesisPlan {
                    route,
                    conditions: envelope.conditions.unwrap_or_default(),
                }),
                _ => ProviderResult::Failed("provider returned no route".to_string()),
            })
    }

    pub async fn explain(
        &self,
        molecule: &MoleculeRef,
        task: Option<&str>,
    ) -> ProviderResult<Explanation> {
        let body = ExplainBody { molecule, task };
        self.call::<_, ExplainEnvelope>(ProviderKind::Explain, &body)
            .await
            .and_then(|envelope| present(envelope.explanation, "explanation"))
    }

    pub async fn identify(&self, query: &str) -> ProviderResult<IdentifiedMolecule> {
        let body = IdentifyBody { query };
        self.call::<_, IdentifyEnvelope>(ProviderKind::Identify, &body)
            .await
            .and_then(|envelope| present(envelope.molecule, "molecule"))
    }

    async fn call<B: Serialize, P: DeserializeOwned>(
        &self,
        kind: ProviderKind,
        body: &B,
    ) -> ProviderResult<P> {
        let Some(url) = self.config.url_for(kind) else {
            return ProviderResult::Unavailable;
        };

        match self.post_json(url, body).await {
            Ok(payload) => ProviderResult::Ok(payload),
            Err(e) => {
                tracing::warn!(provider = kind.as_str(), error = %e, "provider call failed");
                ProviderResult::Failed(e.to_string())
            }
        }
    }

    async fn post_json<B: Serialize, P: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<P> {
        let mut request = self.client.post(url).json(body);
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("failed to send provider request")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!("provider error ({}): {}", status, error_text));
        }

        response
            .json::<P>()
            .await
            .context("failed to parse provider response")
    }
}

fn non_empty<T>(field: Option<Vec<T>>, name: &str) -> ProviderResult<Vec<T>> {
    match field {
        Some(values) if !values.is_empty() => ProviderResult::Ok(values),
        _ => ProviderResult::Failed(format!("provider returned no {}", name)),
    }
}

fn present<T>(field: Option<T>, name: &str) -> ProviderResult<T> {
    match field {
        Some(value) => ProviderResult::Ok(value),
        None => ProviderResult::Failed(format!("provider returned no {}", name)),
    }
}

// Provider request/response payloads

#[derive(Serialize)]
struct MoleculeBody<'a> {
    molecule: &'a MoleculeRef,
}

#[derive(Serialize)]
struct DockBody<'a> {
    molecule: &'a MoleculeRef,
    proteins: &'a [String],
}

#[derive(Serialize)]
struct ExplainBody<'a> {
    molecule: &'a MoleculeRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    task: Option<&'a str>,
}

#[derive(Serialize)]
struct IdentifyBody<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct GenerateEnvelope {
    compounds: Option<Vec<MoleculeCandidate>>,
}

#[derive(Deserialize)]
struct DockEnvelope {
    interactions: Option<Vec<ProteinInteraction>>,
}

#[derive(Deserialize)]
struct AdmetEnvelope {
    toxicity: Option<ToxicityProfile>,
}

#[derive(Deserialize)]
struct SynthesisEnvelope {
    route: Option<Vec<SynthesisStep>>,
    conditions: Option<Vec<ReactionConditions>>,
}

#[derive(Deserialize)]
struct ExplainEnvelope {
    explanation: Option<Explanation>,
}

#[derive(Deserialize)]
struct IdentifyEnvelope {
    molecule: Option<IdentifiedMolecule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disabled_client() -> ProviderClient {
        ProviderClient::new(ProviderConfig::disabled()).unwrap()
    }

    #[tokio::test]
    async fn unconfigured_provider_is_unavailable_without_network() {
        let client = disabled_client();
        let molecule = MoleculeRef::named("Aspirin");

        assert!(matches!(
            client.generate(&GenerationInput::default()).await,
            ProviderResult::Unavailable
        ));
        assert!(matches!(
            client.dock(&molecule, &[]).await,
            ProviderResult::Unavailable
        ));
        assert!(matches!(
            client.admet(&molecule).await,
            ProviderResult::Unavailable
        ));
        assert!(matches!(
            client.synthesis(&molecule).await,
            ProviderResult::Unavailable
        ));
        assert!(matches!(
            client.explain(&molecule, None).await,
            ProviderResult::Unavailable
        ));
        assert!(matches!(
            client.identify("aspirin").await,
            ProviderResult::Unavailable
        ));
    }

    #[tokio::test]
    async fn unreachable_provider_fails_instead_of_erroring() {
        let config = ProviderConfig {
            admet_url: Some("http://127.0.0.1:9/admet".to_string()),
            timeout_secs: 1,
            ..ProviderConfig::disabled()
        };
        let client = ProviderClient::new(config).unwrap();
        let result = client.admet(&MoleculeRef::named("Aspirin")).await;
        assert!(matches!(result, ProviderResult::Failed(_)));
    }

    #[test]
    fn and_then_short_circuits_failures() {
        let failed: ProviderResult<u32> = ProviderResult::Failed("boom".to_string());
        let mapped = failed.and_then(|v| ProviderResult::Ok(v + 1));
        assert!(matches!(mapped, ProviderResult::Failed(reason) if reason == "boom"));

        let unavailable: ProviderResult<u32> = ProviderResult::Unavailable;
        assert!(matches!(
            unavailable.and_then(|v| ProviderResult::Ok(v + 1)),
            ProviderResult::Unavailable
        ));
    }

    #[test]
    fn empty_payload_fields_are_failures() {
        assert!(matches!(
            non_empty::<u32>(Some(Vec::new()), "compounds"),
            ProviderResult::Failed(_)
        ));
        assert!(matches!(
            non_empty::<u32>(None, "compounds"),
            ProviderResult::Failed(_)
        ));
        assert!(non_empty(Some(vec![1]), "compounds").is_ok());
    }
}
