use scraper::ElementRef;

use super::{
    capped,
    dom::{descendant_elements, is_tag, list_items},
    filters::is_inside_menu_accordion,
};
use crate::domain::site_profile::SiteProfile;

const MAX_LIST_ITEMS: usize = 12;
const SUMMARY_CAP: usize = 8;

pub fn summary_bullets(scope: ElementRef<'_>, profile: &SiteProfile) -> Vec<String> {
    descendant_elements(scope)
        .filter(|el| is_tag(el, "ul"))
        .filter(|list| !is_inside_menu_accordion(*list, profile))
        .map(list_items)
        .find(|items| (1..=MAX_LIST_ITEMS).contains(&items.len()))
        .map(|items| capped(items, SUMMARY_CAP))
        .unwrap_or_default()
}
