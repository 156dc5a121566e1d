use crate::models::{
    AnimeDetail, AnimeListResponse, AnimeSummary, DetailResponse, EpisodeResponse,
    ScheduleEntry, ScheduleResponse,
};
use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use thiserror::Error;
use urlencoding::encode;

pub const DEFAULT_BASE_URL: &str = "https://www.sankavollerei.com/anime/oploverz";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("response missing `{0}`")]
    MissingField(&'static str),
    #[error("{0} not found")]
    NotFound(&'static str),
}

/// HTTP client for the Oploverz catalog service. One instance is shared by
/// all page loaders; it holds no state besides the connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );

        let client = Client::builder().default_headers(headers).build().unwrap();
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn home(&self) -> Result<Vec<AnimeSummary>, CatalogError> {
        let resp: AnimeListResponse = self.get_json("home?page=1").await?;
        Ok(resp.anime_list)
    }

    pub async fn ongoing(&self) -> Result<Vec<AnimeSummary>, CatalogError> {
        let resp: AnimeListResponse = self.get_json("ongoing?page=1").await?;
        Ok(resp.anime_list)
    }

    pub async fn completed(&self) -> Result<Vec<AnimeSummary>, CatalogError> {
        let resp: AnimeListResponse = self.get_json("completed?page=1").await?;
        Ok(resp.anime_list)
    }

    pub async fn schedule(&self) -> Result<HashMap<String, Vec<ScheduleEntry>>, CatalogError> {
        let resp: ScheduleResponse = self.get_json("schedule").await?;
        Ok(resp.schedule)
    }

    pub async fn anime(&self, slug: &str) -> Result<AnimeDetail, CatalogError> {
        let resp: DetailResponse = self.get_json(&format!("anime/{}", slug)).await?;
        if resp.status != STATUS_SUCCESS {
            return Err(CatalogError::NotFound("anime"));
        }
        resp.detail.ok_or(CatalogError::MissingField("detail"))
    }

    pub async fn episode(&self, slug: &str) -> Result<EpisodeResponse, CatalogError> {
        let resp: EpisodeResponse = self.get_json(&format!("episode/{}", slug)).await?;
        if resp.status != STATUS_SUCCESS {
            return Err(CatalogError::NotFound("episode"));
        }
        Ok(resp)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<AnimeSummary>, CatalogError> {
        let resp: AnimeListResponse = self
            .get_json(&format!("search/{}", encode(query)))
            .await?;
        Ok(resp.anime_list)
    }

    // Body is fetched as text first so decode failures surface as Malformed
    // rather than a generic transport error.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("GET {}", url);
        let res = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;
        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
