use scraper::ElementRef;

use super::{
    capped,
    dom::{
        descendant_elements, element_text, has_class_containing, is_tag, list_items,
        next_sibling_element,
    },
    filters::{is_inside_menu_accordion, should_skip_heading},
    first_non_empty, Strategy,
};
use crate::domain::{course::ContentSection, site_profile::SiteProfile};

const COLLAPSIBLE_CLASS: &str = "collapsible";
const ACCORDION_CLASS: &str = "accordion";
const ACCORDION_ITEM_CLASS: &str = "accordion-item";
const ACCORDION_HEADER_CLASS: &str = "accordion-header";
const ACCORDION_BODY_CLASS: &str = "accordion-body";

const ACCORDION_BULLETS_CAP: usize = 20;
const SIBLING_LIST_CAP: usize = 15;

const STRATEGIES: [Strategy<ContentSection>; 2] = [collapsible_sections, heading_scan_sections];

pub fn content_sections(scope: ElementRef<'_>, profile: &SiteProfile) -> Vec<ContentSection> {
    first_non_empty(scope, profile, &STRATEGIES)
}

fn first_with_class<'a>(
    element: ElementRef<'a>,
    tag: &str,
    class: &str,
) -> Option<ElementRef<'a>> {
    descendant_elements(element).find(|el| is_tag(el, tag) && has_class_containing(el, class))
}

fn collapsible_sections(scope: ElementRef<'_>, profile: &SiteProfile) -> Vec<ContentSection> {
    descendant_elements(scope)
        .filter(|el| is_tag(el, "section") && has_class_containing(el, COLLAPSIBLE_CLASS))
        .filter_map(|section| first_with_class(section, "div", ACCORDION_CLASS))
        .filter(|accordion| !is_inside_menu_accordion(*accordion, profile))
        .flat_map(|accordion| {
            descendant_elements(accordion)
                .filter(|el| is_tag(el, "div") && has_class_containing(el, ACCORDION_ITEM_CLASS))
        })
        .filter(|item| !is_inside_menu_accordion(*item, profile))
        .filter_map(|item| accordion_item_section(item, profile))
        .collect()
}

fn accordion_item_section(item: ElementRef<'_>, profile: &SiteProfile) -> Option<ContentSection> {
    let header = first_with_class(item, "h2", ACCORDION_HEADER_CLASS)
        .or_else(|| first_with_class(item, "h3", ACCORDION_HEADER_CLASS))?;

    let heading = descendant_elements(header)
        .find(|el| is_tag(el, "button"))
        .map(element_text)
        .unwrap_or_else(|| element_text(header));
    if should_skip_heading(&heading, header, profile) {
        log::debug!("Skipping accordion heading {:?}", heading);
        return None;
    }

    let bullets = first_with_class(item, "div", ACCORDION_BODY_CLASS)
        .map(body_entries)
        .unwrap_or_default();

    Some(ContentSection {
        heading,
        bullets: capped(bullets, ACCORDION_BULLETS_CAP),
    })
}

fn body_entries(body: ElementRef<'_>) -> Vec<String> {
    descendant_elements(body)
        .flat_map(|el| match el.value().name() {
            "p" => {
                let text = element_text(el);
                match text.is_empty() {
                    true => vec![],
                    false => vec![text],
                }
            }
            "ul" => list_items(el),
            _ => vec![],
        })
        .collect()
}

fn heading_scan_sections(scope: ElementRef<'_>, profile: &SiteProfile) -> Vec<ContentSection> {
    descendant_elements(scope)
        .filter(|el| is_tag(el, "h2") || is_tag(el, "h3"))
        .filter(|heading| !is_inside_menu_accordion(*heading, profile))
        .filter_map(|heading| {
            let text = element_text(heading);
            if should_skip_heading(&text, heading, profile) {
                return None;
            }

            let bullets = match next_sibling_element(heading) {
                Some(sibling) if is_tag(&sibling, "ul") => {
                    capped(list_items(sibling), SIBLING_LIST_CAP)
                }
                Some(sibling) if is_tag(&sibling, "p") => {
                    let paragraph = element_text(sibling);
                    match paragraph.is_empty() {
                        true => vec![],
                        false => vec![paragraph],
                    }
                }
                _ => vec![],
            };

            Some(ContentSection {
                heading: text,
                bullets,
            })
        })
        .collect()
}
