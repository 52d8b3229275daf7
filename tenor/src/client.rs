use serde::de::DeserializeOwned;
use url::Url;

use crate::api::raw;
use crate::api::{CategoriesResponse, CategoryTag, SearchResponse, ShareResponse, TenorApiError, TermsResponse};
use crate::config::ClientConfig;
use crate::params::Params;

const DEFAULT_ENDPOINT: &str = "https://tenor.googleapis.com/v2";

pub struct TenorClient
{
    endpoint: String,
    config: ClientConfig,
}

impl TenorClient
{
    pub fn new(config: ClientConfig) -> Self
    {
        TenorClient
        {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            config,
        }
    }

    pub fn with_endpoint(config: ClientConfig, endpoint: &str) -> Result<Self, url::ParseError>
    {
        Url::parse(endpoint)?;

        Ok(TenorClient
        {
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            config,
        })
    }

    pub fn search(&self, params: Params) -> Result<SearchResponse, TenorApiError>
    {
        self.invoke("search", params)
    }

    pub fn featured(&self, params: Params) -> Result<SearchResponse, TenorApiError>
    {
        self.invoke("featured", params)
    }

    pub fn categories(&self, params: Params) -> Result<CategoriesResponse, TenorApiError>
    {
        self.invoke("categories", params)
    }

    pub fn search_suggestions(&self, params: Params) -> Result<TermsResponse, TenorApiError>
    {
        self.invoke("search_suggestions", params)
    }

    pub fn autocomplete(&self, params: Params) -> Result<TermsResponse, TenorApiError>
    {
        self.invoke("autocomplete", params)
    }

    pub fn trending_terms(&self, params: Params) -> Result<TermsResponse, TenorApiError>
    {
        self.invoke("trending_terms", params)
    }

    pub fn posts(&self, params: Params) -> Result<SearchResponse, TenorApiError>
    {
        self.invoke("posts", params)
    }

    pub fn register_share(&self, params: Params) -> Result<bool, TenorApiError>
    {
        let response: ShareResponse = self.invoke("registershare", params)?;

        Ok(response.status)
    }

    pub fn search_by_category(&self, tag: &CategoryTag, params: Params) -> Result<SearchResponse, TenorApiError>
    {
        let url = self.category_url(tag, params);
        let (status, data) = raw::http_get(&url)?;

        raw::decode_response(status, &data)
    }

    fn invoke<T: DeserializeOwned>(&self, resource: &str, params: Params) -> Result<T, TenorApiError>
    {
        let url = self.request_url(resource, params);
        let (status, data) = raw::http_get(&url)?;

        raw::decode_response(status, &data)
    }

    fn standing_params(&self) -> Params
    {
        let mut params = Params::new().key(self.config.key.clone());

        if let Some(client_key) = &self.config.client_key
        {
            params = params.client_key(client_key.clone());
        }

        if let Some(country) = &self.config.country
        {
            params = params.country(country.clone());
        }

        if let Some(locale) = &self.config.locale
        {
            params = params.locale(locale.clone());
        }

        params
    }

    fn request_url(&self, resource: &str, params: Params) -> String
    {
        let query = self.standing_params()
            .merge(params)
            .normalize()
            .to_query_string();

        format!("{}/{}?{}", self.endpoint, resource, query)
    }

    fn category_url(&self, tag: &CategoryTag, params: Params) -> String
    {
        // Category paths are pre-built by the remote API and already
        // carry a query string (including the access key), so the
        // per-call parameters extend them with '&', never '?'

        let query = params.normalize().to_query_string();

        let path = if tag.path.contains("://")
        {
            tag.path.clone()
        }
        else
        {
            format!("{}/{}", self.endpoint, tag.path.trim_start_matches('/'))
        };

        if query.is_empty()
        {
            path
        }
        else
        {
            format!("{}&{}", path, query)
        }
    }
}
