use moleculab_ai::ProviderClient;
use moleculab_core::ProviderConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<ProviderClient>,
}

impl AppState {
    pub fn new(config: ProviderConfig) -> moleculab_core::Result<Self> {
        Ok(Self {
            provider: Arc::new(ProviderClient::new(config)?),
        })
    }

    pub fn from_env() -> moleculab_core::Result<Self> {
        Self::new(ProviderConfig::from_env())
    }
}
