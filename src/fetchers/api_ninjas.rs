use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

use crate::config::{BasicAuth, SearchConfig};
use crate::error::SearchError;
use crate::fetchers::RecipeFetcher;
use crate::model::RecipeRecord;
use crate::request::SearchRequest;

const RECIPE_PATH: &str = "/v1/recipe";

/// Blocking client for the API Ninjas recipe endpoint
pub struct ApiNinjasFetcher {
    client: Client,
    endpoint: String,
    api_key: String,
    basic_auth: Option<BasicAuth>,
}

impl ApiNinjasFetcher {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("recipe-search/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(ApiNinjasFetcher {
            client,
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), RECIPE_PATH),
            api_key: config.api_key.clone(),
            basic_auth: config.basic_auth.clone(),
        })
    }
}

impl RecipeFetcher for ApiNinjasFetcher {
    fn fetch(&self, request: &SearchRequest) -> Result<Vec<RecipeRecord>, SearchError> {
        debug!(
            "GET {} query={:?} offset={}",
            self.endpoint, request.query, request.offset
        );

        let offset = request.offset.to_string();
        let mut builder = self
            .client
            .get(&self.endpoint)
            .header("X-Api-Key", &self.api_key)
            .query(&[("query", request.query.as_str()), ("offset", offset.as_str())]);

        if let Some(auth) = &self.basic_auth {
            builder = builder.basic_auth(&auth.username, auth.password.as_ref());
        }

        let response = builder.send().map_err(|e| {
            warn!("Recipe request failed: {}", e);
            SearchError::TransportFailure(e.without_url().to_string())
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Recipe service responded with {}", status);
            return Err(SearchError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| SearchError::TransportFailure(e.without_url().to_string()))?;

        let recipes: Vec<RecipeRecord> = serde_json::from_str(&body).map_err(|e| {
            warn!("Could not decode recipe payload: {}", e);
            SearchError::TransportFailure(format!("malformed recipe payload: {}", e))
        })?;

        debug!("Received {} recipes", recipes.len());
        Ok(recipes)
    }
}
