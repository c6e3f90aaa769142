use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static MAIN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("main").expect("Failed to parse main selector"));
static ROLE_MAIN_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"[role="main"]"#).expect("Failed to parse role=main selector")
});
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("Failed to parse body selector"));

pub fn resolve_scope(document: &Html) -> ElementRef<'_> {
    let root = document.root_element();

    [&*MAIN_SELECTOR, &*ROLE_MAIN_SELECTOR, &*BODY_SELECTOR]
        .into_iter()
        .find_map(|selector| root.select(selector).next())
        .unwrap_or(root)
}
