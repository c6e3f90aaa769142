use itertools::Itertools;
use scraper::ElementRef;

pub fn is_tag(element: &ElementRef<'_>, name: &str) -> bool {
    element.value().name() == name
}

pub fn has_class_containing(element: &ElementRef<'_>, fragment: &str) -> bool {
    let fragment = fragment.to_lowercase();
    element
        .value()
        .classes()
        .any(|class| class.to_lowercase().contains(&fragment))
}

pub fn descendant_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Elements that come after the start of `element` in document order,
/// beginning with its own children.
pub fn elements_after<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    let target = (*element).id();
    let root = element.ancestors().last().unwrap_or(*element);

    root.descendants()
        .skip_while(move |node| node.id() != target)
        .skip(1)
        .filter_map(ElementRef::wrap)
}

pub fn next_sibling_element<'a>(element: ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

pub fn text_nodes<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .descendants()
        .filter(|node| {
            !node
                .parent()
                .and_then(ElementRef::wrap)
                .is_some_and(|parent| matches!(parent.value().name(), "script" | "style"))
        })
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
}

pub fn element_text(element: ElementRef<'_>) -> String {
    text_nodes(element)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .join(" ")
}

pub fn list_items(list: ElementRef<'_>) -> Vec<String> {
    descendant_elements(list)
        .filter(|el| is_tag(el, "li"))
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    fn first<'a>(document: &'a Html, name: &str) -> ElementRef<'a> {
        descendant_elements(document.root_element())
            .find(|el| is_tag(el, name))
            .unwrap()
    }

    #[test]
    fn element_text_joins_trimmed_fragments() {
        let document = Html::parse_document(
            "<div id='x'>  Hallo <b> wereld </b><script>var a = 1;</script>\n</div>",
        );

        assert_eq!(element_text(first(&document, "div")), "Hallo wereld");
    }

    #[test]
    fn list_items_skips_empty_entries() {
        let document =
            Html::parse_document("<ul><li>Een</li><li>  </li><li>Twee <em>extra</em></li></ul>");

        assert_eq!(list_items(first(&document, "ul")), vec!["Een", "Twee extra"]);
    }

    #[test]
    fn has_class_containing_ignores_case() {
        let document = Html::parse_document("<div class='card Price-Block'>x</div>");
        let div = first(&document, "div");

        assert!(has_class_containing(&div, "price"));
        assert!(!has_class_containing(&div, "euro"));
    }

    #[test]
    fn elements_after_continues_past_parent() {
        let document = Html::parse_document(
            "<div><h3>Kop</h3></div><p>tussen</p><ul><li>Item</li></ul>",
        );
        let names: Vec<&str> = elements_after(first(&document, "h3"))
            .map(|el| el.value().name())
            .collect();

        assert_eq!(names, vec!["p", "ul", "li"]);
    }

    #[test]
    fn next_sibling_element_skips_text() {
        let document = Html::parse_document("<h2>Kop</h2>\n  <p>Tekst</p>");
        let sibling = next_sibling_element(first(&document, "h2")).unwrap();

        assert!(is_tag(&sibling, "p"));
    }
}
