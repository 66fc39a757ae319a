use crate::provider::ProviderResult;
use moleculab_core::Provenance;
use tracing::{debug, warn};

/// Resolve a provider attempt against the synthetic fallback.
///
/// Provider failures never propagate: anything other than a usable payload
/// runs the fallback generator and tags the result as synthetic. One
/// attempt per call; nothing here retries.
pub fn resolve_with_fallback<T>(
    attempt: ProviderResult<T>,
    fallback: impl FnOnce() -> T,
) -> (T, Provenance) {
    match attempt {
        ProviderResult::Ok(payload) => (payload, Provenance::Provider),
        ProviderResult::Unavailable => {
            debug!("provider not configured; using synthetic generator");
            (fallback(), Provenance::Synthetic)
        }
        ProviderResult::Failed(reason) => {
            warn!(%reason, "provider failed; falling back to synthetic generator");
            (fallback(), Provenance::Synthetic)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_payload_wins_when_present() {
        let (value, provenance) = resolve_with_fallback(ProviderResult::Ok(41), || 0);
        assert_eq!(value, 41);
        assert_eq!(provenance, Provenance::Provider);
    }

    #[test]
    fn unavailable_provider_takes_fallback() {
        let (value, provenance) = resolve_with_fallback(ProviderResult::Unavailable, || 7);
        assert_eq!(value, 7);
        assert_eq!(provenance, Provenance::Synthetic);
    }

    #[test]
    fn failed_provider_takes_fallback() {
        let attempt: ProviderResult<u32> = ProviderResult::Failed("timeout".to_string());
        let (value, provenance) = resolve_with_fallback(attempt, || 7);
        assert_eq!(value, 7);
        assert_eq!(provenance, Provenance::Synthetic);
    }
}
