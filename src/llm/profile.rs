/// Named default parameter set for a generation call.
///
/// The two profiles differ only in token budget; the gateway serves both
/// through the same model resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelProfile {
    Small,
    Large,
}

impl ModelProfile {
    /// Default token budget for this profile.
    pub fn default_max_tokens(self) -> u32 {
        match self {
            ModelProfile::Small => 512,
            ModelProfile::Large => 2048,
        }
    }

    /// Default sampling temperature. Both profiles share it.
    pub fn default_temperature(self) -> f32 {
        0.6
    }
}

/// Per-call generation overrides.
///
/// Unset fields fall through to the configured override and then to the
/// profile default; see [`resolve`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationOptions {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl GenerationOptions {
    pub fn new(max_tokens: Option<u32>, temperature: Option<f32>) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

/// Precedence resolution for a single parameter: explicit caller value first,
/// then the configured override, then the default.
pub fn resolve<T: Copy>(explicit: Option<T>, configured: Option<T>, default: T) -> T {
    explicit.or(configured).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_profile_defaults() {
        assert_eq!(ModelProfile::Small.default_max_tokens(), 512);
        assert_eq!(ModelProfile::Small.default_temperature(), 0.6);
    }

    #[test]
    fn test_large_profile_defaults() {
        assert_eq!(ModelProfile::Large.default_max_tokens(), 2048);
        assert_eq!(ModelProfile::Large.default_temperature(), 0.6);
    }

    #[test]
    fn test_generation_options_default() {
        let options = GenerationOptions::default();
        assert_eq!(options.max_tokens, None);
        assert_eq!(options.temperature, None);
    }

    #[test]
    fn test_resolve_explicit_wins() {
        assert_eq!(resolve(Some(100), Some(200), 512), 100);
    }

    #[test]
    fn test_resolve_configured_wins_over_default() {
        assert_eq!(resolve(None, Some(200), 512), 200);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(resolve::<u32>(None, None, 512), 512);
    }

    #[test]
    fn test_resolve_temperature_chain() {
        let profile = ModelProfile::Large;
        assert_eq!(resolve(Some(0.9f32), Some(0.3), profile.default_temperature()), 0.9);
        assert_eq!(resolve(None, Some(0.3f32), profile.default_temperature()), 0.3);
        assert_eq!(resolve(None, None, profile.default_temperature()), 0.6);
    }
}
