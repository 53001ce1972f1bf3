use iced::widget::image::Handle;
use reqwest::Url;

use super::error::{ApiError, Result};
use crate::config::AppConfig;
use crate::model::{CountryDetail, CountryRecord};

const USER_AGENT: &str = concat!("flagdeck/", env!("CARGO_PKG_VERSION"));

/// Client for the REST Countries `name` endpoint and the flag images it links to.
#[derive(Debug, Clone)]
pub struct CountryApi {
    client: reqwest::Client,
    base: Url,
}

impl CountryApi {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let base = Url::parse(&config.api_base)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ApiError::InvalidBaseUrl(config.api_base.clone()))?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, base })
    }

    /// `{base}/v3.1/name/{name}?fullText=true`, with the name encoded as one segment.
    pub fn lookup_url(&self, name: &str) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(["v3.1", "name", name]);
        url.query_pairs_mut().append_pair("fullText", "true");
        Ok(url)
    }

    pub async fn fetch_record(&self, name: &str) -> Result<CountryRecord> {
        let url = self.lookup_url(name)?;
        log::info!("Fetching country record: {url}");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let records: Vec<CountryRecord> = serde_json::from_slice(&body)?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(name.to_string()))
    }

    pub async fn fetch_detail(&self, name: &str) -> Result<CountryDetail> {
        let record = self.fetch_record(name).await?;
        Ok(CountryDetail::from_record(name, record))
    }

    pub async fn flag_url(&self, name: &str) -> Result<String> {
        self.fetch_record(name)
            .await?
            .flags
            .png
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ApiError::NoFlag(name.to_string()))
    }

    pub async fn download_image(&self, url: &str) -> Result<Handle> {
        let url = Url::parse(url).map_err(|_| ApiError::NoFlag(url.to_string()))?;
        log::debug!("Downloading flag image: {url}");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(Handle::from_bytes(bytes.to_vec()))
    }

    /// Resolves and downloads the flag for `name`. Failures are logged and yield `None`.
    pub async fn load_flag(&self, name: &str) -> Option<Handle> {
        let result = match self.flag_url(name).await {
            Ok(url) => self.download_image(&url).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::log!(err.log_level(), "{name}: no flag image ({err})");
                None
            }
        }
    }
}
