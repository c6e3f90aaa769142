use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::dom::element_text;
use crate::domain::text::truncate_chars;

static FINE_PRINT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("small, footer, aside").expect("Failed to parse fine print selector")
});

const MIN_CHARS: usize = 20;
const MAX_CHARS: usize = 800;
const TRUNCATE_AT: usize = 500;
const DISCLAIMERS_CAP: usize = 5;

pub fn disclaimers(document: &Html) -> Vec<String> {
    document
        .root_element()
        .select(&FINE_PRINT_SELECTOR)
        .map(element_text)
        .filter(|text| {
            let length = text.chars().count();
            length > MIN_CHARS && length < MAX_CHARS
        })
        .map(|text| truncate_chars(&text, TRUNCATE_AT))
        .take(DISCLAIMERS_CAP)
        .collect()
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::disclaimers;

    #[test]
    fn collects_fine_print_in_document_order() {
        let html = r#"<html><body>
            <aside>Prijzen zijn exclusief btw en examengeld.</aside>
            <main><small>kort</small></main>
            <footer>© 2024 Lindenhaeghe. Alle rechten voorbehouden.</footer>
        </body></html>"#;

        assert_eq!(
            disclaimers(&Html::parse_document(html)),
            vec![
                "Prijzen zijn exclusief btw en examengeld.",
                "© 2024 Lindenhaeghe. Alle rechten voorbehouden.",
            ]
        );
    }

    #[test]
    fn truncates_and_caps() {
        let medium = "a".repeat(600);
        let html: String = (0..7).map(|_| format!("<aside>{}</aside>", medium)).collect();
        let found = disclaimers(&Html::parse_document(&html));

        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|d| d.chars().count() == 500));
    }

    #[test]
    fn drops_oversized_blocks() {
        let html = format!("<footer>{}</footer>", "b".repeat(800));

        assert!(disclaimers(&Html::parse_document(&html)).is_empty());
    }
}
