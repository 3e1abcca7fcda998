//! WASM HTTP client for the market API, using gloo-net

use gloo_net::http::{Request, RequestBuilder, Response};
use shared::api::{endpoints, ApiClientConfig, ApiError, MarketApi};
use shared::{LoginRequest, LoginResponse, PageRequest, Share, SharePage};

pub struct GlooApiClient {
    config: ApiClientConfig,
}

impl GlooApiClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        let config = match token {
            Some(t) => ApiClientConfig::new(base_url).with_token(t),
            None => ApiClientConfig::new(base_url),
        };
        Self { config }
    }

    fn add_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match self.config.bearer() {
            Some(bearer) => req.header("Authorization", &bearer),
            None => req,
        }
    }
}

async fn server_error(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ApiError::Server { status, message }
}

impl MarketApi for GlooApiClient {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.config.url(endpoints::LOGIN);
        let response = Request::post(&url)
            .json(req)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() != 200 {
            return Err(ApiError::Auth(format!(
                "login rejected with status {}",
                response.status()
            )));
        }

        match response.json::<LoginResponse>().await {
            Ok(body) if !body.token.is_empty() => Ok(body),
            _ => Err(ApiError::Auth("login response carried no token".to_string())),
        }
    }

    async fn fetch_shares(&self, req: PageRequest) -> Result<Vec<Share>, ApiError> {
        let url = self.config.url(&endpoints::shares_page(&req));
        let response = self
            .add_auth(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(server_error(response).await);
        }

        let page: SharePage = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(page.items)
    }
}
