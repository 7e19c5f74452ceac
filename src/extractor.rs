use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::Settings;
use crate::error::ExtractError;
use crate::listing;

/// Natural-language instruction sent with every extraction request.
const EXTRACTION_PROMPT: &str = "Extract all job listings from this page and return them as an array with key 'jobListings'. For each job listing, include: position (job title), location (work location), link (URL to apply), remote (true/false/'not disclosed'), postedDate (when posted), applicationDeadline (if available), and compensation (salary/compensation if available). If remote status or other optional fields are not explicitly stated, mark them as 'not disclosed'.";

const SPINNER_TICK: Duration = Duration::from_millis(80);

/// Client for the hosted extraction API.
pub struct ExtractClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct ExtractRequest<'a> {
    urls: &'a [String],
    prompt: &'a str,
}

/// Raw service response: a success flag plus either a payload or an error.
#[derive(Debug, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ExtractClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        }
    }

    /// Issue one extraction request for the given URL patterns.
    pub async fn extract(
        &self,
        urls: &[String],
        prompt: &str,
    ) -> Result<ExtractResponse, ExtractError> {
        let endpoint = format!("{}/extract", self.api_url);
        debug!("POST {} ({} urls)", endpoint, urls.len());
        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&ExtractRequest { urls, prompt })
            .send()
            .await?
            .json::<ExtractResponse>()
            .await?;
        Ok(response)
    }
}

/// Normalize user input into the URL pattern the service expects: an
/// explicit scheme, plus a trailing wildcard so the whole site is crawled
/// rather than one page.
pub fn normalize_target_url(raw: &str) -> String {
    let mut url = raw.to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        url = format!("https://{}", url);
    }
    if !url.ends_with("/*") {
        url.push_str("/*");
    }
    url
}

/// Run one extraction against `url`, reporting status on the terminal.
pub async fn extract_job_listings(
    client: &ExtractClient,
    url: &str,
) -> Result<Vec<Value>, ExtractError> {
    let target = normalize_target_url(url);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message("Searching for job listings...");
    pb.enable_steady_tick(SPINNER_TICK);

    let outcome = client
        .extract(&[target], EXTRACTION_PROMPT)
        .await
        .and_then(listings_from_response);

    match &outcome {
        Ok(jobs) => {
            pb.finish_with_message(format!("Found {} job listings", jobs.len()));
            let conforming = jobs.iter().filter(|j| listing::matches_schema(j)).count();
            debug!(
                "{} of {} listings match the declared shape",
                conforming,
                jobs.len()
            );
        }
        Err(ExtractError::InvalidResponseShape) => {
            pb.abandon_with_message("Invalid response format");
        }
        Err(_) => {
            pb.abandon_with_message("Failed to fetch job listings");
        }
    }

    outcome
}

/// Pull the listings array out of a service response.
fn listings_from_response(response: ExtractResponse) -> Result<Vec<Value>, ExtractError> {
    if !response.success {
        return Err(ExtractError::ExtractionFailed {
            message: response.error.unwrap_or_else(|| "unknown error".to_string()),
        });
    }
    match response.data.as_ref().and_then(|d| d.get("jobListings")) {
        Some(Value::Array(jobs)) => Ok(jobs.clone()),
        _ => Err(ExtractError::InvalidResponseShape),
    }
}

// ── Tests ──
