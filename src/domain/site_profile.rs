use regex::Regex;

#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub organization: String,
    pub title_suffix: Regex,
    pub title_prefix: Regex,
    pub skip_heading_texts: Vec<String>,
    pub skip_heading_classes: Vec<String>,
    pub menu_accordion_ids: Vec<String>,
    pub benefits_card_class: String,
    pub card_heading_class: String,
    pub benefits_phrase: String,
    pub benefit_keywords: Vec<String>,
    pub currency_symbol: String,
    pub price_classes: Vec<String>,
    pub price_text: Regex,
    pub specs_title_class: String,
    pub hours_text: Regex,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl SiteProfile {
    pub fn dutch(organization: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(organization);

        Ok(SiteProfile {
            organization: organization.to_string(),
            title_suffix: Regex::new(&format!(r"(?i)\s*[|\-–—]\s*{}\s*$", escaped))?,
            title_prefix: Regex::new(&format!(r"(?i)^\s*{}\s*[|\-–—]\s*", escaped))?,
            skip_heading_texts: owned(&["kruimelpad", "ga direct naar", "lees verder", "inklappen"]),
            skip_heading_classes: owned(&["visually-hidden", "nav-header"]),
            menu_accordion_ids: owned(&["accordion-main-menu", "accordion-secondary-menu"]),
            benefits_card_class: "contra-colored-card".to_string(),
            card_heading_class: "card-heading".to_string(),
            benefits_phrase: "wat krijg".to_string(),
            benefit_keywords: owned(&[
                "voordeel",
                "benefit",
                "waarom",
                "wat krijg",
                "resultaat",
                "wat levert",
            ]),
            currency_symbol: "€".to_string(),
            price_classes: owned(&["price", "euro", "price-with-discount"]),
            price_text: Regex::new(r"€\s*[0-9]")?,
            specs_title_class: "specs-list-title".to_string(),
            hours_text: Regex::new(r"(?i)[0-9]+\s*(?:uur|uren)")?,
        })
    }
}
