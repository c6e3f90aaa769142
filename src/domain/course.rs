use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub source_url: String,
    pub title: Option<String>,
    pub label: String,
    pub summary_bullets: Vec<String>,
    pub key_benefits: Vec<String>,
    pub content_sections: Vec<ContentSection>,
    pub facts: Facts,
    pub disclaimers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    pub heading: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facts {
    pub price: Option<f64>,
    pub study_load_hours: Option<f64>,
    pub availability_period: Option<String>,
    pub locations_count: Option<u32>,
}

impl Facts {
    /// Availability and location count are never present on course pages we
    /// scrape, so they are always reported as unknown.
    pub fn new(price: Option<f64>, study_load_hours: Option<f64>) -> Self {
        Facts {
            price,
            study_load_hours,
            availability_period: None,
            locations_count: None,
        }
    }
}
