use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ContactConfig;

/// Field values of the contact form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub problem: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Accepted,
    /// No backend wired in; nothing left the process.
    NotConfigured,
    Rejected { reason: String },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

#[async_trait]
pub trait SubmissionEndpoint: Send + Sync {
    async fn submit(&self, form: &ContactForm) -> Result<SubmissionOutcome>;
}

pub struct PlaceholderEndpoint;

#[async_trait]
impl SubmissionEndpoint for PlaceholderEndpoint {
    async fn submit(&self, form: &ContactForm) -> Result<SubmissionOutcome> {
        info!(
            industry = %form.industry,
            "contact form submitted without a backend; nothing sent"
        );
        Ok(SubmissionOutcome::NotConfigured)
    }
}

pub struct WebhookEndpoint {
    client: Client,
    url: String,
}

impl WebhookEndpoint {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("appex-site/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl SubmissionEndpoint for WebhookEndpoint {
    async fn submit(&self, form: &ContactForm) -> Result<SubmissionOutcome> {
        let response = self.client.post(&self.url).json(form).send().await?;
        let status = response.status();
        if status.is_success() {
            info!("contact form delivered to webhook ({status})");
            Ok(SubmissionOutcome::Accepted)
        } else {
            Ok(SubmissionOutcome::Rejected {
                reason: format!("webhook answered {status}"),
            })
        }
    }
}

pub fn endpoint_from_config(config: &ContactConfig) -> Result<Box<dyn SubmissionEndpoint>> {
    let url = config.webhook_url.trim();
    if url.is_empty() {
        return Ok(Box::new(PlaceholderEndpoint));
    }
    Ok(Box::new(WebhookEndpoint::new(url)?))
}
