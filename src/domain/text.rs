use std::sync::LazyLock;

use regex::Regex;

use super::site_profile::SiteProfile;

static NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:[.,][0-9]+)*").expect("NUMBER_TOKEN regex"));

static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\x{1F300}-\x{1F9FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}\x{1F600}-\x{1F64F}\x{1F680}-\x{1F6FF}]+",
    )
    .expect("EMOJI regex")
});

/// Parses the first number in `text`, accepting both `1.299,50` and `1299.50`.
///
/// When both separators appear the last one is the decimal mark. A single
/// separator is always read as decimal, repeated ones as thousands grouping.
pub fn parse_number(text: &str) -> Option<f64> {
    let token = NUMBER_TOKEN.find(text)?.as_str();
    normalize_separators(token).parse().ok()
}

fn normalize_separators(token: &str) -> String {
    let decimal = match (token.rfind('.'), token.rfind(',')) {
        (Some(dot), Some(comma)) => Some(dot.max(comma)),
        (Some(dot), None) if token.matches('.').count() == 1 => Some(dot),
        (None, Some(comma)) if token.matches(',').count() == 1 => Some(comma),
        _ => None,
    };

    token
        .char_indices()
        .filter_map(|(i, ch)| match ch {
            '0'..='9' => Some(ch),
            _ if Some(i) == decimal => Some('.'),
            _ => None,
        })
        .collect()
}

pub fn strip_emojis(text: &str) -> String {
    EMOJI.replace_all(text, "").trim().to_string()
}

pub fn clean_title(raw: &str, profile: &SiteProfile) -> String {
    let without_suffix = profile.title_suffix.replace(raw, "");
    let without_prefix = profile.title_prefix.replace(&without_suffix, "");
    let cleaned = strip_emojis(&without_prefix);

    match cleaned.is_empty() {
        true => raw.trim().to_string(),
        false => cleaned,
    }
}

pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
