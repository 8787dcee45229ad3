use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use tentertain_extern_contracts::emailjs::{EmailJsApiService, TemplateMessage};
use url::Url;

use crate::http::HttpClient;

const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone)]
pub struct EmailJsApiServiceImpl {
    config: EmailJsApiServiceConfig,
    client: HttpClient,
}

impl EmailJsApiServiceImpl {
    pub fn new(config: EmailJsApiServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmailJsApiServiceConfig {
    send_endpoint: Arc<Url>,
    credentials: Option<Arc<EmailJsCredentials>>,
}

/// The three identifiers the provider expects with every send request. If they
/// are absent from the configuration, sending fails at submission time.
#[derive(Debug, Clone)]
pub struct EmailJsCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsApiServiceConfig {
    pub fn new(credentials: Option<EmailJsCredentials>, send_endpoint_override: Option<Url>) -> Self {
        Self {
            send_endpoint: send_endpoint_override
                .unwrap_or_else(|| SEND_ENDPOINT.parse().unwrap())
                .into(),
            credentials: credentials.map(Arc::new),
        }
    }
}

impl EmailJsApiService for EmailJsApiServiceImpl {
    async fn send(&self, message: TemplateMessage) -> anyhow::Result<bool> {
        let credentials = self
            .config
            .credentials
            .as_deref()
            .context("Mail provider is not configured")?;

        let response = self
            .client
            .post((*self.config.send_endpoint).clone())
            .json(&SendRequest {
                service_id: &credentials.service_id,
                template_id: &credentials.template_id,
                user_id: &credentials.public_key,
                template_params: TemplateParams {
                    name: &message.name,
                    email: message.email.as_str(),
                    title: &message.title,
                    message: &message.message,
                },
            })
            .send()
            .await?;

        Ok(response.status().is_success())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let mut origin = (*self.config.send_endpoint).clone();
        origin.set_path("/");
        // any HTTP response counts as reachable
        self.client.get(origin).send().await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    title: &'a str,
    message: &'a str,
}
