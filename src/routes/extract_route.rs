use actix_web::{post, web, HttpResponse};
use serde::Deserialize;

use crate::domain::site_profile::SiteProfile;
use crate::error::ExtractError;
use crate::services::{extract_course, PageFetcher};

#[derive(Deserialize)]
pub struct ExtractRequest {
    pub url: Option<String>,
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ExtractError::InvalidBody(err.to_string()).into())
}

#[post("/extract")]
pub async fn extract(
    body: web::Json<ExtractRequest>,
    page_fetcher: web::Data<PageFetcher>,
    site_profile: web::Data<SiteProfile>,
) -> Result<HttpResponse, ExtractError> {
    let url = body.url.as_deref().unwrap_or_default().trim();
    if url.is_empty() {
        log::warn!("Rejected extract request without url");
        return Err(ExtractError::MissingUrl);
    }

    let html = page_fetcher.fetch(url).await.map_err(|e| {
        log::error!("Failed to fetch {}: {:?}", url, e);
        ExtractError::from(e)
    })?;

    // Parsing large pages is CPU bound; keep it off the async workers.
    let source_url = url.to_string();
    let profile = site_profile.clone();
    let result = web::block(move || extract_course(&html, &source_url, &profile)).await?;

    Ok(HttpResponse::Ok().json(result))
}
