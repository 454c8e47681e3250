// Static phrase tables
//
// One immutable table of (phrase, category, variants) plus the curated
// subsets the scorer consults. Coverage is testable by iterating the table.

use serde::{Deserialize, Serialize};

/// Category of a lexicon phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconCategory {
    HighRisk,
    MediumRisk,
    ContextualModifier,
    FalsePositive,
}

/// A single lexicon entry: canonical phrase, its category, and the fuzzy
/// variants (shorthand, misspellings) that count as a match for it.
#[derive(Debug, Clone, Copy)]
pub struct LexiconEntry {
    pub phrase: &'static str,
    pub category: LexiconCategory,
    pub variants: &'static [&'static str],
}

const fn entry(phrase: &'static str, category: LexiconCategory) -> LexiconEntry {
    LexiconEntry {
        phrase,
        category,
        variants: &[],
    }
}

const fn entry_with_variants(
    phrase: &'static str,
    category: LexiconCategory,
    variants: &'static [&'static str],
) -> LexiconEntry {
    LexiconEntry {
        phrase,
        category,
        variants,
    }
}

/// The default lexicon. English-only; callers needing another language
/// supply their own table via `Lexicon::load_from_file`.
pub static DEFAULT_LEXICON: &[LexiconEntry] = &[
    // High risk
    entry_with_variants(
        "kill myself",
        LexiconCategory::HighRisk,
        &["kms", "unalive myself", "kill myslef"],
    ),
    entry_with_variants(
        "suicide",
        LexiconCategory::HighRisk,
        &["sucide", "suicde", "suiside"],
    ),
    entry("suicidal", LexiconCategory::HighRisk),
    entry("end my life", LexiconCategory::HighRisk),
    entry("take my own life", LexiconCategory::HighRisk),
    entry("want to die", LexiconCategory::HighRisk),
    entry("wish i was dead", LexiconCategory::HighRisk),
    entry("better off dead", LexiconCategory::HighRisk),
    entry("better off without me", LexiconCategory::HighRisk),
    entry("end it all", LexiconCategory::HighRisk),
    entry("don't want to live", LexiconCategory::HighRisk),
    entry("don't want to be here anymore", LexiconCategory::HighRisk),
    entry("no reason to live", LexiconCategory::HighRisk),
    entry_with_variants("hurt myself", LexiconCategory::HighRisk, &["hurt myslef"]),
    entry("cut myself", LexiconCategory::HighRisk),
    entry("cutting myself", LexiconCategory::HighRisk),
    entry("self harm", LexiconCategory::HighRisk),
    entry("overdose", LexiconCategory::HighRisk),
    entry("he hits me", LexiconCategory::HighRisk),
    entry("she hits me", LexiconCategory::HighRisk),
    entry("being abused", LexiconCategory::HighRisk),
    entry("afraid to go home", LexiconCategory::HighRisk),
    // Medium risk
    entry("hopeless", LexiconCategory::MediumRisk),
    entry("worthless", LexiconCategory::MediumRisk),
    entry("trapped", LexiconCategory::MediumRisk),
    entry("no way out", LexiconCategory::MediumRisk),
    entry("give up", LexiconCategory::MediumRisk),
    entry("giving up", LexiconCategory::MediumRisk),
    entry("can't take it anymore", LexiconCategory::MediumRisk),
    entry("can't go on", LexiconCategory::MediumRisk),
    entry("tired of living", LexiconCategory::MediumRisk),
    entry("life has no meaning", LexiconCategory::MediumRisk),
    entry("life is meaningless", LexiconCategory::MediumRisk),
    entry("life is pointless", LexiconCategory::MediumRisk),
    entry("what's the point", LexiconCategory::MediumRisk),
    entry("empty inside", LexiconCategory::MediumRisk),
    entry("nobody cares", LexiconCategory::MediumRisk),
    entry("burden to everyone", LexiconCategory::MediumRisk),
    entry("burden on everyone", LexiconCategory::MediumRisk),
    entry("hate myself", LexiconCategory::MediumRisk),
    entry("falling apart", LexiconCategory::MediumRisk),
    entry("breaking down", LexiconCategory::MediumRisk),
    entry("scared of my partner", LexiconCategory::MediumRisk),
    entry("threatens me", LexiconCategory::MediumRisk),
    // Contextual modifiers (not dangerous alone; amplify nearby risk language)
    entry("tonight", LexiconCategory::ContextualModifier),
    entry("today", LexiconCategory::ContextualModifier),
    entry("right now", LexiconCategory::ContextualModifier),
    entry("soon", LexiconCategory::ContextualModifier),
    entry("planning", LexiconCategory::ContextualModifier),
    entry("decided", LexiconCategory::ContextualModifier),
    entry("ready to", LexiconCategory::ContextualModifier),
    entry("going to", LexiconCategory::ContextualModifier),
    entry("about to", LexiconCategory::ContextualModifier),
    entry("thinking about", LexiconCategory::ContextualModifier),
    entry("wondering if", LexiconCategory::ContextualModifier),
    entry("can't stop thinking", LexiconCategory::ContextualModifier),
    // False positives (benign idioms that lexically resemble crisis language)
    entry("kill time", LexiconCategory::FalsePositive),
    entry("killing time", LexiconCategory::FalsePositive),
    entry("dead tired", LexiconCategory::FalsePositive),
    entry("dying to know", LexiconCategory::FalsePositive),
    entry("dying to see", LexiconCategory::FalsePositive),
    entry("dying of laughter", LexiconCategory::FalsePositive),
    entry("to die for", LexiconCategory::FalsePositive),
    entry("traffic is killing me", LexiconCategory::FalsePositive),
    entry("work is killing me", LexiconCategory::FalsePositive),
    entry("killing me", LexiconCategory::FalsePositive),
    entry("killed it", LexiconCategory::FalsePositive),
    entry("dressed to kill", LexiconCategory::FalsePositive),
];

/// False positives benign enough to short-circuit scoring entirely.
/// "killing me" alone is NOT here: "my job is killing me and I want to
/// kill myself" must still be scored.
pub static UNAMBIGUOUS_FALSE_POSITIVES: &[&str] = &[
    "kill time",
    "killing time",
    "dead tired",
    "dying to know",
    "dying to see",
    "dying of laughter",
    "to die for",
    "traffic is killing me",
    "work is killing me",
    "killed it",
    "dressed to kill",
];

/// Medium phrases whose match pins the score at exactly the medium cap,
/// regardless of how many other medium phrases matched. The specific
/// high-risk override below is applied afterwards and wins on conflict.
pub static MEDIUM_CAP_PHRASES: &[&str] = &[
    "life has no meaning",
    "life is meaningless",
    "life is pointless",
];

/// Unambiguous crisis phrases that force the score to the intervention
/// floor even if the category lists drift. Overlaps the high-risk list.
pub static SPECIFIC_HIGH_RISK_PHRASES: &[&str] = &[
    "kill myself",
    "end my life",
    "take my own life",
    "want to die",
    "wish i was dead",
    "better off dead",
    "don't want to live",
    "no reason to live",
];

/// Immediacy words among the contextual modifiers.
pub static IMMEDIACY_WORDS: &[&str] = &[
    "tonight", "today", "right now", "soon", "planning", "decided", "ready to", "going to",
    "about to",
];

/// Mild-sadness phrases eligible for the low-risk reduction.
pub static MILD_SADNESS_PHRASES: &[&str] = &[
    "a bit down",
    "feeling down",
    "kind of sad",
    "a little sad",
    "feeling blue",
    "feeling low",
    "had a rough day",
    "bad day",
    "bummed out",
];

/// Substance-use phrases checked in the current message and prior turns.
pub static SUBSTANCE_PHRASES: &[&str] = &[
    "drinking", "drunk", "wasted", "pills", "drugs", "getting high", "alcohol", "blackout",
];

/// Social-isolation phrases checked in the current message.
pub static ISOLATION_PHRASES: &[&str] = &[
    "all alone",
    "so alone",
    "no one to talk to",
    "nobody to talk to",
    "no friends",
    "completely isolated",
    "by myself all the time",
];

/// Intensity words used for turn-over-turn escalation detection.
pub static INTENSITY_WORDS: &[&str] = &[
    "overwhelming",
    "unbearable",
    "never",
    "always",
    "nothing",
    "nobody",
    "alone",
    "hopeless",
    "worthless",
    "exhausted",
];

/// Category-defining subsets used to break the composite score into
/// explanatory sub-scores and to classify persisted events.
pub static SUICIDE_INDICATORS: &[&str] = &[
    "kill myself",
    "suicide",
    "suicidal",
    "end my life",
    "take my own life",
    "want to die",
    "wish i was dead",
    "better off dead",
    "end it all",
    "no reason to live",
    "don't want to live",
];

pub static SELF_HARM_INDICATORS: &[&str] = &[
    "hurt myself",
    "cut myself",
    "cutting myself",
    "self harm",
    "burn myself",
];

pub static SUBSTANCE_INDICATORS: &[&str] =
    &["overdose", "pills", "drunk", "wasted", "drugs", "alcohol"];

pub static ABUSE_INDICATORS: &[&str] = &[
    "he hits me",
    "she hits me",
    "being abused",
    "afraid to go home",
    "scared of my partner",
    "threatens me",
];

pub static EMOTIONAL_CRISIS_INDICATORS: &[&str] = &[
    "hopeless",
    "worthless",
    "trapped",
    "no way out",
    "can't take it anymore",
    "empty inside",
    "falling apart",
    "breaking down",
];
