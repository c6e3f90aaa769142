use scraper::ElementRef;

use crate::domain::site_profile::SiteProfile;

pub fn is_inside_menu_accordion(element: ElementRef<'_>, profile: &SiteProfile) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .filter_map(|ancestor| ancestor.value().id())
        .any(|id| {
            profile
                .menu_accordion_ids
                .iter()
                .any(|menu_id| id.contains(menu_id.as_str()))
        })
}

pub fn should_skip_heading(
    heading_text: &str,
    element: ElementRef<'_>,
    profile: &SiteProfile,
) -> bool {
    if heading_text.is_empty() {
        return true;
    }

    let lower = heading_text.to_lowercase();
    if profile
        .skip_heading_texts
        .iter()
        .any(|skip| lower.contains(skip.as_str()))
    {
        return true;
    }

    let classes = element
        .value()
        .classes()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    profile
        .skip_heading_classes
        .iter()
        .any(|skip| classes.contains(skip.as_str()))
}
