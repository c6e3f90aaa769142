use scraper::ElementRef;

use super::{
    dom::{descendant_elements, element_text, has_class_containing, text_nodes},
    first_some, FactStrategy,
};
use crate::domain::{site_profile::SiteProfile, text::parse_number};

const PRICE_STRATEGIES: [FactStrategy; 2] = [price_from_classes, price_from_text];
const HOURS_STRATEGIES: [FactStrategy; 2] = [hours_from_spec_titles, hours_from_text];

pub fn extract_price(scope: ElementRef<'_>, profile: &SiteProfile) -> Option<f64> {
    first_some(scope, profile, &PRICE_STRATEGIES)
}

pub fn extract_study_load_hours(scope: ElementRef<'_>, profile: &SiteProfile) -> Option<f64> {
    first_some(scope, profile, &HOURS_STRATEGIES)
}

fn price_from_classes(scope: ElementRef<'_>, profile: &SiteProfile) -> Option<f64> {
    profile.price_classes.iter().find_map(|fragment| {
        descendant_elements(scope)
            .filter(|el| has_class_containing(el, fragment))
            .map(element_text)
            .filter(|text| text.contains(profile.currency_symbol.as_str()))
            .find_map(|text| parse_number(&text))
    })
}

fn price_from_text(scope: ElementRef<'_>, profile: &SiteProfile) -> Option<f64> {
    text_nodes(scope)
        .filter(|text| profile.price_text.is_match(text))
        .find_map(parse_number)
}

fn hours_from_spec_titles(scope: ElementRef<'_>, profile: &SiteProfile) -> Option<f64> {
    descendant_elements(scope)
        .filter(|el| has_class_containing(el, &profile.specs_title_class))
        .find_map(|el| parse_number(&element_text(el)))
}

fn hours_from_text(scope: ElementRef<'_>, profile: &SiteProfile) -> Option<f64> {
    text_nodes(scope)
        .filter(|text| profile.hours_text.is_match(text))
        .find_map(parse_number)
}
