use serde::{Deserialize, Serialize};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which external prediction service a call is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Generate,
    Docking,
    Admet,
    Synthesis,
    Explain,
    Identify,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Generate => "generate",
            ProviderKind::Docking => "docking",
            ProviderKind::Admet => "admet",
            ProviderKind::Synthesis => "synthesis",
            ProviderKind::Explain => "explain",
            ProviderKind::Identify => "identify",
        }
    }
}

/// Configuration for the optional external prediction providers.
///
/// One URL per provider kind plus a shared bearer token. An unset URL means
/// the corresponding provider is not configured and the synthetic path is
/// taken directly, without a network attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub generate_url: Option<String>,
    pub docking_url: Option<String>,
    pub admet_url: Option<String>,
    pub synthesis_url: Option<String>,
    pub explain_url: Option<String>,
    pub identify_url: Option<String>,
    /// Shared bearer token sent to every configured provider.
    pub api_token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            generate_url: env_opt("DISCOVERY_GENERATE_URL"),
            docking_url: env_opt("DISCOVERY_DOCK_URL"),
            admet_url: env_opt("DISCOVERY_ADMET_URL"),
            synthesis_url: env_opt("DISCOVERY_SYNTH_URL"),
            explain_url: env_opt("DISCOVERY_EXPLAIN_URL"),
            identify_url: env_opt("DISCOVERY_IDENTIFY_URL"),
            api_token: env_opt("DISCOVERY_API_TOKEN"),
            timeout_secs: std::env::var("DISCOVERY_PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ProviderConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// A configuration with every provider unset. Useful in tests and as the
    /// explicit "synthetic only" mode.
    pub fn disabled() -> Self {
        Self {
            generate_url: None,
            docking_url: None,
            admet_url: None,
            synthesis_url: None,
            explain_url: None,
            identify_url: None,
            api_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn url_for(&self, kind: ProviderKind) -> Option<&str> {
        let url = match kind {
            ProviderKind::Generate => &self.generate_url,
            ProviderKind::Docking => &self.docking_url,
            ProviderKind::Admet => &self.admet_url,
            ProviderKind::Synthesis => &self.synthesis_url,
            ProviderKind::Explain => &self.explain_url,
            ProviderKind::Identify => &self.identify_url,
        };
        url.as_deref()
    }
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
