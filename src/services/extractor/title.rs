use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::dom::{descendant_elements, element_text, is_tag};
use crate::domain::{site_profile::SiteProfile, text::clean_title};

static OG_TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:title"]"#).expect("Failed to parse og:title selector")
});
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("Failed to parse title selector"));

fn non_empty(text: String) -> Option<String> {
    (!text.trim().is_empty()).then_some(text)
}

fn social_title(document: &Html) -> Option<String> {
    document
        .root_element()
        .select(&OG_TITLE_SELECTOR)
        .find_map(|meta| meta.value().attr("content"))
        .map(|content| content.trim().to_string())
        .and_then(non_empty)
}

fn document_title(document: &Html) -> Option<String> {
    document
        .root_element()
        .select(&TITLE_SELECTOR)
        .next()
        .map(element_text)
        .and_then(non_empty)
}

fn first_heading(scope: ElementRef<'_>) -> Option<String> {
    descendant_elements(scope)
        .find(|el| is_tag(el, "h1"))
        .map(element_text)
        .and_then(non_empty)
}

/// `og:title`, then `<title>`, then the first `<h1>` in scope, cleaned of the
/// organization name. `None` when none of them has text.
pub fn extract_title(
    document: &Html,
    scope: ElementRef<'_>,
    profile: &SiteProfile,
) -> Option<String> {
    social_title(document)
        .or_else(|| document_title(document))
        .or_else(|| first_heading(scope))
        .map(|raw| clean_title(&raw, profile))
}
