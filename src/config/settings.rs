// Configuration structs

use std::path::PathBuf;

/// Engine configuration. Scoring heuristics are fixed constants in the
/// assessment module; this gates engine behavior around them.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Risk level at which intervention and escalation activate
    pub intervention_threshold: u8,

    /// Bound on the crisis-event write before it is dropped
    pub store_timeout_ms: u64,

    /// Persist events for messages below the intervention threshold too
    pub log_below_threshold: bool,

    /// Optional lexicon JSON overriding the embedded phrase lists
    pub lexicon_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            intervention_threshold: crate::assessment::tuning::INTERVENTION_THRESHOLD,
            store_timeout_ms: 2_000,
            log_below_threshold: false,
            lexicon_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.intervention_threshold, 8);
        assert_eq!(config.store_timeout_ms, 2_000);
        assert!(!config.log_below_threshold);
        assert!(config.lexicon_path.is_none());
    }
}
