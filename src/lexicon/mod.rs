// Lexicon module
// Categorized phrase lists and the message normalizer

mod normalizer;
mod phrases;

pub use normalizer::normalize;
pub use phrases::{
    LexiconCategory, LexiconEntry, ABUSE_INDICATORS, DEFAULT_LEXICON,
    EMOTIONAL_CRISIS_INDICATORS, IMMEDIACY_WORDS, INTENSITY_WORDS, ISOLATION_PHRASES,
    MEDIUM_CAP_PHRASES, MILD_SADNESS_PHRASES, SELF_HARM_INDICATORS, SPECIFIC_HIGH_RISK_PHRASES,
    SUBSTANCE_INDICATORS, SUBSTANCE_PHRASES, SUICIDE_INDICATORS, UNAMBIGUOUS_FALSE_POSITIVES,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A runtime phrase with its fuzzy variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phrase {
    pub text: String,
    #[serde(default)]
    pub variants: Vec<String>,
}

impl Phrase {
    fn from_entry(entry: &LexiconEntry) -> Self {
        Self {
            text: entry.phrase.to_string(),
            variants: entry.variants.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// True if the phrase or any variant occurs in either text form.
    fn is_detected(&self, raw_lower: &str, normalized: &str) -> bool {
        let hit = |needle: &str| raw_lower.contains(needle) || normalized.contains(needle);
        hit(&self.text) || self.variants.iter().any(|v| hit(v))
    }
}

/// Phrase lists loadable from a JSON file, for deployments that tune the
/// broad category lists without rebuilding. The curated behavioral
/// subsets in `phrases` are engine semantics and are not overridable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconFile {
    pub high_risk: Vec<Phrase>,
    pub medium_risk: Vec<Phrase>,
    pub contextual_modifiers: Vec<Phrase>,
    pub false_positives: Vec<Phrase>,
}

/// The categorized lexicon, immutable after construction.
#[derive(Debug, Clone)]
pub struct Lexicon {
    high_risk: Vec<Phrase>,
    medium_risk: Vec<Phrase>,
    contextual_modifiers: Vec<Phrase>,
    false_positives: Vec<Phrase>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let collect = |cat: LexiconCategory| -> Vec<Phrase> {
            DEFAULT_LEXICON
                .iter()
                .filter(|e| e.category == cat)
                .map(Phrase::from_entry)
                .collect()
        };
        Self {
            high_risk: collect(LexiconCategory::HighRisk),
            medium_risk: collect(LexiconCategory::MediumRisk),
            contextual_modifiers: collect(LexiconCategory::ContextualModifier),
            false_positives: collect(LexiconCategory::FalsePositive),
        }
    }
}

impl Lexicon {
    /// Load phrase lists from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file: {}", path.display()))?;

        let file: LexiconFile =
            serde_json::from_str(&contents).context("Failed to parse lexicon JSON")?;

        Ok(Self {
            high_risk: lowercased(file.high_risk),
            medium_risk: lowercased(file.medium_risk),
            contextual_modifiers: lowercased(file.contextual_modifiers),
            false_positives: lowercased(file.false_positives),
        })
    }

    fn phrases(&self, category: LexiconCategory) -> &[Phrase] {
        match category {
            LexiconCategory::HighRisk => &self.high_risk,
            LexiconCategory::MediumRisk => &self.medium_risk,
            LexiconCategory::ContextualModifier => &self.contextual_modifiers,
            LexiconCategory::FalsePositive => &self.false_positives,
        }
    }

    /// Distinct canonical phrases of a category detected in either the
    /// raw-lowercased or the normalized text. A phrase counts if it or a
    /// listed variant appears in either form, tolerating normalization
    /// edge cases.
    pub fn detect(
        &self,
        category: LexiconCategory,
        raw_lower: &str,
        normalized: &str,
    ) -> Vec<String> {
        self.phrases(category)
            .iter()
            .filter(|p| p.is_detected(raw_lower, normalized))
            .map(|p| p.text.clone())
            .collect()
    }
}

fn lowercased(mut phrases: Vec<Phrase>) -> Vec<Phrase> {
    for p in &mut phrases {
        p.text = p.text.to_lowercase();
        for v in &mut p.variants {
            *v = v.to_lowercase();
        }
    }
    phrases
}

/// Check a static phrase list against both text forms.
pub fn any_phrase_in(list: &[&str], raw_lower: &str, normalized: &str) -> bool {
    list.iter()
        .any(|p| raw_lower.contains(p) || normalized.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_lexicon_detects_high_risk() {
        let lexicon = Lexicon::default();
        let raw = "i want to kill myself";
        let matches = lexicon.detect(LexiconCategory::HighRisk, raw, raw);
        assert!(matches.contains(&"kill myself".to_string()));
    }

    #[test]
    fn test_variant_counts_as_canonical_phrase() {
        let lexicon = Lexicon::default();
        let raw = "honestly i might kms";
        let matches = lexicon.detect(LexiconCategory::HighRisk, raw, raw);
        assert!(matches.contains(&"kill myself".to_string()));
    }

    #[test]
    fn test_detection_via_normalized_form() {
        let lexicon = Lexicon::default();
        let raw = "i dont wanna be here anymore";
        let normalized = normalize(raw);
        let matches = lexicon.detect(LexiconCategory::HighRisk, raw, &normalized);
        assert!(matches.contains(&"don't want to be here anymore".to_string()));
    }

    #[test]
    fn test_load_from_file_overrides_lists() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        let json = serde_json::json!({
            "high_risk": [{"text": "Custom Danger Phrase"}],
            "medium_risk": [{"text": "custom worry", "variants": ["cstm worry"]}],
            "contextual_modifiers": [{"text": "tonight"}],
            "false_positives": [{"text": "kill time"}],
        });
        write!(file, "{}", json)?;

        let lexicon = Lexicon::load_from_file(file.path())?;
        let raw = "a custom danger phrase appears";
        let matches = lexicon.detect(LexiconCategory::HighRisk, raw, raw);
        assert_eq!(matches, vec!["custom danger phrase".to_string()]);

        let raw = "cstm worry here";
        let matches = lexicon.detect(LexiconCategory::MediumRisk, raw, raw);
        assert_eq!(matches, vec!["custom worry".to_string()]);
        Ok(())
    }

    #[test]
    fn test_load_from_missing_file_fails_with_context() {
        let err = Lexicon::load_from_file(Path::new("/nonexistent/lexicon.json"));
        assert!(err.is_err());
    }
}
