// Context-aware signals
//
// Helpers that read the trailing conversation history for escalation
// signals. Pure functions over the caller-owned context.

use crate::lexicon::{INTENSITY_WORDS, SUBSTANCE_PHRASES};

use super::types::{ConversationContext, Speaker};

/// Known two-step tone sequences that indicate emotional escalation.
/// Matched against the trailing user turns, oldest to newest.
static ESCALATION_TONE_SEQUENCES: &[(&str, &str)] = &[
    ("sad", "hopeless"),
    ("sad", "numb"),
    ("anxious", "hopeless"),
    ("anxious", "panicked"),
    ("frustrated", "hopeless"),
    ("angry", "despairing"),
];

/// How many trailing user turns the tone-sequence check inspects
const TONE_WINDOW: usize = 3;

/// Detect emotional escalation across the trailing turns: either a known
/// two-step tone sequence, or a turn-over-turn increase in
/// intensity-keyword count.
pub fn is_escalating(context: &ConversationContext) -> bool {
    let user_turns: Vec<_> = context
        .turns
        .iter()
        .filter(|t| t.speaker == Speaker::User)
        .collect();

    // Tone sequence over the trailing window
    let window_start = user_turns.len().saturating_sub(TONE_WINDOW);
    let tones: Vec<&str> = user_turns[window_start..]
        .iter()
        .filter_map(|t| t.emotional_tone.as_deref())
        .collect();
    for pair in tones.windows(2) {
        if ESCALATION_TONE_SEQUENCES
            .iter()
            .any(|(a, b)| pair[0] == *a && pair[1] == *b)
        {
            return true;
        }
    }

    // Intensity-keyword count rising between the last two user turns
    if user_turns.len() >= 2 {
        let prev = intensity_count(&user_turns[user_turns.len() - 2].message);
        let last = intensity_count(&user_turns[user_turns.len() - 1].message);
        if last > prev {
            return true;
        }
    }

    false
}

/// Substance-use language in any prior turn (either speaker quoted back
/// counts; the user's own wording is what matters in practice).
pub fn prior_turns_mention_substance(context: &ConversationContext) -> bool {
    context.turns.iter().any(|t| {
        let lowered = t.message.to_lowercase();
        SUBSTANCE_PHRASES.iter().any(|p| lowered.contains(p))
    })
}

fn intensity_count(message: &str) -> usize {
    let lowered = message.to_lowercase();
    INTENSITY_WORDS
        .iter()
        .filter(|w| lowered.contains(*w))
        .count()
}
