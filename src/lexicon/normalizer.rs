// Message normalizer
//
// Rewrites common shorthand into canonical forms before phrase matching.
// The original message is preserved by callers; the normalized form is
// used only for matching. Total over all inputs, including empty.

/// Ordered token-boundary substitutions. Applied to whole tokens only, so
/// "2" in "2023" or "u" in "until" are left alone.
static SUBSTITUTIONS: &[(&str, &str)] = &[
    ("u", "you"),
    ("ur", "your"),
    ("r", "are"),
    ("2", "to"),
    ("4", "for"),
    ("b4", "before"),
    ("gonna", "going to"),
    ("wanna", "want to"),
    ("gotta", "got to"),
    ("dont", "don't"),
    ("cant", "can't"),
    ("wont", "won't"),
    ("didnt", "didn't"),
    ("im", "i'm"),
    ("ive", "i've"),
    ("idk", "i don't know"),
    ("rn", "right now"),
    ("sucide", "suicide"),
    ("suicde", "suicide"),
    ("suiside", "suicide"),
    ("lyfe", "life"),
    ("myslef", "myself"),
];

/// Normalize a raw message for matching. Lowercases, then applies the
/// substitution table token by token, preserving leading/trailing
/// punctuation on each token.
pub fn normalize(message: &str) -> String {
    let lowered = message.to_lowercase();
    let mut out = String::with_capacity(lowered.len());

    for (i, token) in lowered.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }

        let start = token.find(|c: char| c.is_alphanumeric() || c == '\'');
        let Some(start) = start else {
            // pure punctuation token
            out.push_str(token);
            continue;
        };
        let end = token
            .rfind(|c: char| c.is_alphanumeric() || c == '\'')
            .map(|p| p + 1)
            .unwrap_or(token.len());

        let (prefix, rest) = token.split_at(start);
        let (core, suffix) = rest.split_at(end - start);

        out.push_str(prefix);
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == core) {
            Some((_, to)) => out.push_str(to),
            None => out.push_str(core),
        }
        out.push_str(suffix);
    }

    out
}
