use crate::models::{ClassificationResult, Family, Intent, IntentScore};
use crate::similarity::best_match;
use crate::tables::{ALL_KEYWORDS, GREETING_PHRASES, KEYWORD_TABLE, TEMPLATE_FAMILIES};

/// Minimum similarity for a token to be rewritten into a keyword.
pub const TYPO_CUTOFF: f64 = 0.8;

pub fn normalize_query(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Greeting phrase check on already-normalized text: exact match, a prefix
/// followed by a non-alphanumeric char, or a whole space-delimited phrase.
pub fn is_greeting(normalized: &str) -> bool {
    let padded = format!(" {normalized} ");

    GREETING_PHRASES.iter().any(|phrase| {
        if normalized == *phrase {
            return true;
        }

        let starts_with_phrase = normalized
            .strip_prefix(phrase)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|next| !next.is_alphanumeric());

        starts_with_phrase || padded.contains(&format!(" {phrase} "))
    })
}

pub fn correct_token(token: &str) -> String {
    best_match(token, ALL_KEYWORDS.iter().copied(), TYPO_CUTOFF)
        .unwrap_or(token)
        .to_string()
}

pub fn correct_typos(text: &str) -> String {
    text.split_whitespace()
        .map(correct_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Non-zero keyword scores in canonical intent order. A keyword counts once
/// when it occurs anywhere in `corrected`, including inside a longer word.
pub fn score_intents(corrected: &str) -> Vec<IntentScore> {
    KEYWORD_TABLE
        .iter()
        .map(|(intent, keywords)| IntentScore {
            intent: *intent,
            score: keywords
                .iter()
                .filter(|keyword| corrected.contains(*keyword))
                .count(),
        })
        .filter(|entry| entry.score > 0)
        .collect()
}

pub fn detect_intent(text: &str) -> ClassificationResult {
    let normalized = normalize_query(text);

    if is_greeting(&normalized) {
        return ClassificationResult::greeting();
    }

    let corrected = correct_typos(&normalized);
    if let Some(intent) = top_intent(&score_intents(&corrected)) {
        if let Some(family) = intent.family() {
            return ClassificationResult::for_family(family);
        }
    }

    match platform_mentioned(&normalized) {
        Some(family) => ClassificationResult::for_family(family),
        None => ClassificationResult::unknown(),
    }
}

/// Highest score wins; on a tie the entry seen first is kept.
fn top_intent(scores: &[IntentScore]) -> Option<Intent> {
    let mut best: Option<&IntentScore> = None;
    for entry in scores {
        if best.map_or(true, |current| entry.score > current.score) {
            best = Some(entry);
        }
    }
    best.map(|entry| entry.intent)
}

fn platform_mentioned(normalized: &str) -> Option<Family> {
    TEMPLATE_FAMILIES.iter().find_map(|(family, templates)| {
        templates
            .iter()
            .any(|template| normalized.contains(&template.name.to_lowercase()))
            .then_some(*family)
    })
}
