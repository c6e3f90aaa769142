use std::time::Duration;

use reqwest::Client;

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(PageFetcher { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        log::info!("Fetching page {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        response.text().await
    }
}
