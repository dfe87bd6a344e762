use crate::config::{self, Settings};
use crate::error::AppError;
use crate::models::PackageSearchResponse;
use once_cell::sync::Lazy;

const MAX_ERROR_BODY: usize = 256;

static SHARED: Lazy<Result<OpenDataSusService, String>> =
    Lazy::new(|| OpenDataSusService::from_settings(config::settings()).map_err(|e| e.to_string()));

/// Client for the OpenDataSUS CKAN API.
#[derive(Clone, Debug)]
pub struct OpenDataSusService {
    client: reqwest::Client,
    search_url: String,
    query: String,
}

impl OpenDataSusService {
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder().user_agent(settings.api.user_agent.clone());
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            search_url: settings.search_url(),
            query: settings.api.query.clone(),
        })
    }

    pub fn shared() -> Result<&'static OpenDataSusService, AppError> {
        SHARED
            .as_ref()
            .map_err(|msg| AppError::ClientUnavailable(msg.clone()))
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// `GET {base}/package_search?q={query}`, decoded only as far as the
    /// response envelope.
    pub async fn search_packages(&self) -> Result<PackageSearchResponse, AppError> {
        tracing::info!("Querying {} for '{}'", self.search_url, self.query);

        let res = self
            .client
            .get(&self.search_url)
            .query(&[("q", self.query.as_str())])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let mut message = res.text().await.unwrap_or_default();
            if message.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !message.is_char_boundary(cut) {
                    cut -= 1;
                }
                message.truncate(cut);
            }
            return Err(AppError::Api { status, message });
        }

        let body = res.text().await?;
        let envelope: PackageSearchResponse = serde_json::from_str(&body)?;
        Ok(envelope)
    }
}
