use scraper::ElementRef;

use super::{
    capped,
    dom::{
        descendant_elements, element_text, elements_after, has_class_containing, is_tag,
        list_items, next_sibling_element,
    },
    filters::is_inside_menu_accordion,
    first_non_empty,
    summary::summary_bullets,
    Strategy,
};
use crate::domain::{site_profile::SiteProfile, text::truncate_chars};

const BENEFITS_CAP: usize = 10;
const BENEFIT_LIST_CAP: usize = 15;
const PARAGRAPH_MAX_CHARS: usize = 300;
const SUMMARY_FALLBACK_CAP: usize = 6;

const STRATEGIES: [Strategy<String>; 4] = [
    sidebar_card,
    heading_then_list,
    keyword_heading,
    summary_fallback,
];

pub fn key_benefits(scope: ElementRef<'_>, profile: &SiteProfile) -> Vec<String> {
    capped(first_non_empty(scope, profile, &STRATEGIES), BENEFITS_CAP)
}

fn is_heading(element: &ElementRef<'_>, levels: &[&str]) -> bool {
    levels.contains(&element.value().name())
}

fn content_list<'a>(
    mut candidates: impl Iterator<Item = ElementRef<'a>>,
    profile: &SiteProfile,
) -> Option<ElementRef<'a>> {
    candidates.find(|el| is_tag(el, "ul") && !is_inside_menu_accordion(*el, profile))
}

fn sidebar_card(scope: ElementRef<'_>, profile: &SiteProfile) -> Vec<String> {
    descendant_elements(scope)
        .filter(|el| has_class_containing(el, &profile.benefits_card_class))
        .filter(|card| {
            descendant_elements(*card)
                .find(|el| has_class_containing(el, &profile.card_heading_class))
                .map(element_text)
                .is_some_and(|heading| heading.to_lowercase().contains(&profile.benefits_phrase))
        })
        .filter_map(|card| content_list(descendant_elements(card), profile))
        .map(|list| capped(list_items(list), BENEFIT_LIST_CAP))
        .find(|items| !items.is_empty())
        .unwrap_or_default()
}

fn heading_then_list(scope: ElementRef<'_>, profile: &SiteProfile) -> Vec<String> {
    descendant_elements(scope)
        .filter(|el| is_heading(el, &["h2", "h3", "h4"]))
        .filter(|heading| !is_inside_menu_accordion(*heading, profile))
        .filter(|heading| {
            element_text(*heading)
                .to_lowercase()
                .contains(&profile.benefits_phrase)
        })
        .filter_map(|heading| content_list(elements_after(heading), profile))
        .map(|list| capped(list_items(list), BENEFIT_LIST_CAP))
        .find(|items| !items.is_empty())
        .unwrap_or_default()
}

fn keyword_heading(scope: ElementRef<'_>, profile: &SiteProfile) -> Vec<String> {
    for heading in descendant_elements(scope).filter(|el| is_heading(el, &["h2", "h3"])) {
        if is_inside_menu_accordion(heading, profile) {
            continue;
        }

        let text = element_text(heading).to_lowercase();
        if text.is_empty()
            || !profile
                .benefit_keywords
                .iter()
                .any(|keyword| text.contains(keyword.as_str()))
        {
            continue;
        }

        match next_sibling_element(heading) {
            Some(sibling) if is_tag(&sibling, "ul") => {
                return capped(list_items(sibling), BENEFITS_CAP);
            }
            Some(sibling) if is_tag(&sibling, "p") || is_tag(&sibling, "div") => {
                let paragraph = element_text(sibling);
                if !paragraph.is_empty() {
                    return vec![truncate_chars(&paragraph, PARAGRAPH_MAX_CHARS)];
                }
            }
            _ => {}
        }
    }

    vec![]
}

fn summary_fallback(scope: ElementRef<'_>, profile: &SiteProfile) -> Vec<String> {
    capped(summary_bullets(scope, profile), SUMMARY_FALLBACK_CAP)
}
