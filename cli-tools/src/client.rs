//! Native HTTP client implementation using reqwest

use reqwest::{Client, StatusCode};
use shared::api::{endpoints, ApiClientConfig, ApiError, MarketApi};
use shared::{LoginRequest, LoginResponse, PageRequest, Share, SharePage};

/// Native API client using reqwest
pub struct NativeApiClient {
    client: Client,
    config: ApiClientConfig,
}

impl NativeApiClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, ApiError> {
        let config = if let Some(t) = token {
            ApiClientConfig::new(base_url).with_token(t)
        } else {
            ApiClientConfig::new(base_url)
        };

        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn add_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(bearer) = self.config.bearer() {
            req.header("Authorization", bearer)
        } else {
            req
        }
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl MarketApi for NativeApiClient {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.config.url(endpoints::LOGIN);

        let response = self
            .client
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(ApiError::Auth(format!(
                "login rejected with status {}",
                response.status().as_u16()
            )));
        }

        match response.json::<LoginResponse>().await {
            Ok(body) if !body.token.is_empty() => Ok(body),
            _ => Err(ApiError::Auth("login response carried no token".to_string())),
        }
    }

    async fn fetch_shares(&self, req: PageRequest) -> Result<Vec<Share>, ApiError> {
        let url = self.config.url(&endpoints::shares_page(&req));
        let request = self.add_auth(self.client.get(&url));

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let page: SharePage = self.handle_response(response).await?;
        Ok(page.items)
    }
}
