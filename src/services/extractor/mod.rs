mod benefits;
mod disclaimers;
mod dom;
mod facts;
mod filters;
mod scope;
mod sections;
mod summary;
mod title;

use scraper::{ElementRef, Html};

use crate::domain::{
    course::{ExtractionResult, Facts},
    site_profile::SiteProfile,
};

pub use benefits::key_benefits;
pub use disclaimers::disclaimers;
pub use facts::{extract_price, extract_study_load_hours};
pub use filters::{is_inside_menu_accordion, should_skip_heading};
pub use scope::resolve_scope;
pub use sections::content_sections;
pub use summary::summary_bullets;
pub use title::extract_title;

pub(crate) type Strategy<T> = fn(ElementRef<'_>, &SiteProfile) -> Vec<T>;
pub(crate) type FactStrategy = fn(ElementRef<'_>, &SiteProfile) -> Option<f64>;

pub(crate) fn first_non_empty<T>(
    scope: ElementRef<'_>,
    profile: &SiteProfile,
    strategies: &[Strategy<T>],
) -> Vec<T> {
    strategies
        .iter()
        .enumerate()
        .map(|(index, strategy)| (index, strategy(scope, profile)))
        .find(|(_, found)| !found.is_empty())
        .map(|(index, found)| {
            log::debug!("Strategy {} produced {} entries", index, found.len());
            found
        })
        .unwrap_or_default()
}

pub(crate) fn first_some(
    scope: ElementRef<'_>,
    profile: &SiteProfile,
    strategies: &[FactStrategy],
) -> Option<f64> {
    strategies.iter().find_map(|strategy| strategy(scope, profile))
}

pub(crate) fn capped<T>(mut items: Vec<T>, cap: usize) -> Vec<T> {
    items.truncate(cap);
    items
}

pub fn extract_course(html: &str, source_url: &str, profile: &SiteProfile) -> ExtractionResult {
    let document = Html::parse_document(html);
    let scope = resolve_scope(&document);

    let result = ExtractionResult {
        source_url: source_url.to_string(),
        title: extract_title(&document, scope, profile),
        label: profile.organization.clone(),
        summary_bullets: summary_bullets(scope, profile),
        key_benefits: key_benefits(scope, profile),
        content_sections: content_sections(scope, profile),
        facts: Facts::new(
            extract_price(scope, profile),
            extract_study_load_hours(scope, profile),
        ),
        disclaimers: disclaimers(&document),
    };

    log::info!(
        "Extracted {}: {} summary bullets, {} key benefits, {} sections, {} disclaimers",
        source_url,
        result.summary_bullets.len(),
        result.key_benefits.len(),
        result.content_sections.len(),
        result.disclaimers.len()
    );

    result
}

#[cfg(test)]
mod tests {
    use super::extract_course;
    use crate::domain::{
        course::{ContentSection, Facts},
        site_profile::SiteProfile,
    };

    const COURSE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="nl">
<head>
  <title>Leidinggeven aan verandering | Lindenhaeghe</title>
  <meta property="og:title" content="Leidinggeven aan verandering 🚀 | Lindenhaeghe">
</head>
<body>
  <header>
    <nav>
      <div class="accordion" id="accordion-main-menu">
        <div class="accordion-item">
          <h2 class="accordion-header"><button>Opleidingen</button></h2>
          <div class="accordion-body"><ul><li>Management</li><li>HR</li></ul></div>
        </div>
      </div>
    </nav>
  </header>
  <main>
    <h2 class="visually-hidden">Kruimelpad</h2>
    <ul class="specs-list">
      <li><span class="specs-list-title">40 uur studiebelasting</span></li>
      <li><span class="specs-list-title">Online en klassikaal</span></li>
    </ul>
    <div class="price-block"><span class="price">€ 1.299,50</span> excl. btw</div>
    <section class="collapsible-element">
      <div class="accordion" id="accordion-course">
        <div class="accordion-item">
          <h2 class="accordion-header"><button type="button">Inhoud</button></h2>
          <div class="accordion-collapse collapse">
            <div class="accordion-body">
              <p>Je leert veranderprocessen begeleiden.</p>
              <p>Met praktijkopdrachten uit je eigen organisatie.</p>
            </div>
          </div>
        </div>
      </div>
    </section>
    <aside>
      <div class="card contra-colored-card">
        <h3 class="card-heading">Wat krijg ik bij Lindenhaeghe?</h3>
        <ul><li>Erkend certificaat</li><li>Persoonlijke coach</li></ul>
      </div>
      <small>Prijzen zijn exclusief btw en examengeld.</small>
    </aside>
  </main>
</body>
</html>"#;

    fn profile() -> SiteProfile {
        SiteProfile::dutch("Lindenhaeghe").unwrap()
    }

    #[test]
    fn extracts_full_course_page() {
        let result = extract_course(COURSE_PAGE, "https://example.nl/cursus", &profile());

        assert_eq!(result.source_url, "https://example.nl/cursus");
        assert_eq!(result.title.as_deref(), Some("Leidinggeven aan verandering"));
        assert_eq!(result.label, "Lindenhaeghe");
        assert_eq!(
            result.summary_bullets,
            vec!["40 uur studiebelasting", "Online en klassikaal"]
        );
        assert_eq!(
            result.key_benefits,
            vec!["Erkend certificaat", "Persoonlijke coach"]
        );
        assert_eq!(
            result.content_sections,
            vec![ContentSection {
                heading: "Inhoud".to_string(),
                bullets: vec![
                    "Je leert veranderprocessen begeleiden.".to_string(),
                    "Met praktijkopdrachten uit je eigen organisatie.".to_string(),
                ],
            }]
        );
        assert_eq!(result.facts, Facts::new(Some(1299.50), Some(40.0)));
        assert_eq!(
            result.disclaimers.first().map(String::as_str),
            Some("Wat krijg ik bij Lindenhaeghe? Erkend certificaat Persoonlijke coach Prijzen zijn exclusief btw en examengeld.")
        );
    }

    #[test]
    fn menu_accordion_content_never_leaks() {
        let result = extract_course(COURSE_PAGE, "https://example.nl/cursus", &profile());
        let everything: Vec<&String> = result
            .summary_bullets
            .iter()
            .chain(result.key_benefits.iter())
            .chain(result.content_sections.iter().map(|s| &s.heading))
            .chain(result.content_sections.iter().flat_map(|s| s.bullets.iter()))
            .collect();

        for menu_text in ["Opleidingen", "Management", "HR"] {
            assert!(everything.iter().all(|text| text.as_str() != menu_text));
        }
    }

    #[test]
    fn bare_page_yields_empty_lists_and_absent_facts() {
        let html = "<html><head><title>Contact</title></head><body><p>Bel ons gerust.</p></body></html>";
        let result = extract_course(html, "https://example.nl/contact", &profile());

        assert_eq!(result.title.as_deref(), Some("Contact"));
        assert!(result.summary_bullets.is_empty());
        assert!(result.key_benefits.is_empty());
        assert!(result.content_sections.is_empty());
        assert!(result.disclaimers.is_empty());
        assert_eq!(result.facts, Facts::new(None, None));
        assert_eq!(result.facts.availability_period, None);
        assert_eq!(result.facts.locations_count, None);
    }

    #[test]
    fn empty_document_has_no_title() {
        let result = extract_course("", "https://example.nl/leeg", &profile());

        assert_eq!(result.title, None);
        assert_eq!(result.facts.price, None);
    }
}
