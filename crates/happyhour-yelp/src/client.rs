//! HTTP client for the Yelp Fusion business search endpoint.
//!
//! Requests are issued one at a time. A non-success status ends a pagination
//! run without an error: the status and body are logged and the businesses
//! fetched so far are returned. Network failures and undecodable bodies
//! propagate as [`YelpError`].

use reqwest::{Client, StatusCode, Url};

use crate::error::YelpError;
use crate::pagination::{next_step, request_limit, PageStep, StopReason, MAX_RESULTS};
use crate::query::{SearchQuery, CATEGORIES};
use crate::types::{RawBusiness, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://api.yelp.com/v3/";
const SEARCH_PATH: &str = "businesses/search";
const DEFAULT_USER_AGENT: &str = "happyhour/0.1 (business-search)";

/// Outcome of a single page request.
#[derive(Debug)]
pub enum PageResponse {
    Page(SearchResponse),
    /// The service answered with any status other than 200.
    Rejected { status: StatusCode, body: String },
}

/// Client for the Yelp Fusion `businesses/search` endpoint.
///
/// Use [`YelpClient::new`] for production or [`YelpClient::with_base_url`] to
/// point at a mock server in tests.
pub struct YelpClient {
    client: Client,
    api_key: String,
    search_url: Url,
}

impl YelpClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`YelpError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(api_key: &str) -> Result<Self, YelpError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, DEFAULT_USER_AGENT)
    }

    /// Creates a client with a custom base URL and `User-Agent`.
    ///
    /// No request timeout is set: a request that never answers blocks the run.
    ///
    /// # Errors
    ///
    /// Returns [`YelpError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`YelpError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        api_key: &str,
        base_url: &str,
        user_agent: &str,
    ) -> Result<Self, YelpError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        // Exactly one trailing slash so `join` appends to the base path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised)
            .and_then(|base| base.join(SEARCH_PATH))
            .map_err(|e| YelpError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url,
        })
    }

    /// Fetches every page for `query`, starting at offset 0 and advancing by
    /// the query's page size, until a page is empty, the reported total is
    /// reached, or [`MAX_RESULTS`] businesses have been collected.
    ///
    /// A non-success status stops the run and returns the partial result.
    ///
    /// # Errors
    ///
    /// - [`YelpError::Http`] on network failure.
    /// - [`YelpError::Deserialize`] if a success body is not the expected JSON.
    pub async fn search_all(&self, query: &SearchQuery) -> Result<Vec<RawBusiness>, YelpError> {
        let mut businesses: Vec<RawBusiness> = Vec::new();
        let mut offset = 0u32;

        loop {
            let limit = request_limit(query.page_size(), offset);
            if limit == 0 {
                tracing::debug!(offset, "offset reached the result cap");
                break;
            }

            let page = match self.fetch_page(query, offset, limit).await? {
                PageResponse::Page(page) => page,
                PageResponse::Rejected { status, body } => {
                    tracing::error!(
                        status = status.as_u16(),
                        body = %body,
                        offset,
                        "Yelp search request failed, keeping results fetched so far"
                    );
                    break;
                }
            };

            let total = page.total;
            let mut page_businesses = page.businesses;
            page_businesses.truncate(MAX_RESULTS.saturating_sub(businesses.len()));
            let page_len = page_businesses.len();
            businesses.extend(page_businesses);

            if page_len > 0 {
                let fetched = businesses.len();
                tracing::info!(fetched, total, "Fetched {fetched} of {total} businesses...");
            }

            match next_step(businesses.len(), page_len, total) {
                PageStep::Continue => offset += query.page_size(),
                PageStep::Stop(reason) => {
                    log_stop(reason, businesses.len(), total);
                    break;
                }
            }
        }

        Ok(businesses)
    }

    /// Issues one search request at `offset`.
    ///
    /// # Errors
    ///
    /// - [`YelpError::Http`] on network failure or if the body cannot be read.
    /// - [`YelpError::Deserialize`] if a success body is not the expected JSON.
    pub async fn fetch_page(
        &self,
        query: &SearchQuery,
        offset: u32,
        limit: u32,
    ) -> Result<PageResponse, YelpError> {
        let url = self.build_url(query, offset, limit);
        tracing::debug!(offset, limit, "requesting search page");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        // Only 200 carries a result page; anything else, 204 included, ends the run.
        if status != StatusCode::OK {
            return Ok(PageResponse::Rejected { status, body });
        }

        let page = serde_json::from_str(&body).map_err(|e| YelpError::Deserialize {
            context: format!("businesses/search(offset={offset})"),
            source: e,
        })?;
        Ok(PageResponse::Page(page))
    }

    /// Builds the search URL with percent-encoded query parameters.
    fn build_url(&self, query: &SearchQuery, offset: u32, limit: u32) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("term", &query.term)
            .append_pair("latitude", &query.latitude.to_string())
            .append_pair("longitude", &query.longitude.to_string())
            .append_pair("radius", &query.radius_meters.to_string())
            .append_pair("categories", CATEGORIES)
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        url
    }
}

fn log_stop(reason: StopReason, fetched: usize, total: u64) {
    match reason {
        StopReason::EmptyPage => tracing::debug!(fetched, total, "empty page, no more results"),
        StopReason::Exhausted => tracing::debug!(fetched, total, "all reported results fetched"),
        StopReason::ResultCap => tracing::debug!(
            fetched,
            total,
            max = MAX_RESULTS,
            "reached the service result cap"
        ),
    }
}
