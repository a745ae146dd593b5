//! HTTP Transport
//!
//! reqwest-backed `Transport`. Requests go out with the session cookie
//! attached; relative base URLs resolve against the page origin.

use std::sync::OnceLock;

use async_trait::async_trait;
use log::warn;
use shkola_api::{ApiError, ApiRequest, ApiResponse, ApiResult, ClientConfig, Method, Transport};

/// Page meta tag that can override the base URL at runtime
const BASE_URL_META: &str = "meta[name=\"shkola-api-base\"]";

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Resolve the client config once: build-time value, then the page meta tag.
pub fn init_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = ClientConfig::from_build_env().with_override(meta_base_url().as_deref());
        log::info!("API base URL: {}", config.base_url);
        config
    })
}

fn meta_base_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(BASE_URL_META).ok()??;
    meta.get_attribute("content")
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, request: &ApiRequest) -> String {
        let url = self.config.endpoint(&request.path_and_query());
        if url.starts_with('/') {
            format!("{}{}", page_origin().unwrap_or_default(), url)
        } else {
            url
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(init_config().clone())
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, self.url(&request));
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            warn!("{} {}: {}", request.method.as_str(), request.path, err);
            ApiError::Transport(err.to_string())
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(ApiResponse::new(status, body))
    }
}
