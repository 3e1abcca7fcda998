use serde::{Deserialize, Serialize};

// API client types and trait
pub mod api;
pub use api::{ApiClientConfig, ApiError, MarketApi};

// Runtime configuration shared by the web app and the CLI
pub mod config;
pub use config::{AppConfig, SnapshotPolicy};

// Session gate (token presence)
pub mod session;
pub use session::{MemoryTokenStore, Session, TokenStore};

// Listing view-state machine and its parts
pub mod favorites;
pub mod filter;
pub mod listing;
pub use favorites::Favorites;
pub use filter::{AppliedFilter, DraftFilter, FilterError};
pub use listing::{FetchOutcome, FetchTicket, Listing, ListingError};

/// Message shown in place of the card grid when no session token is present
pub const LOGGED_OUT_MESSAGE: &str = "Usuário não logado, logue para mostrar as ações.";

/// A tradable instrument as returned by the paged shares endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    /// Ticker symbol, unique per instrument
    pub symbol: String,
    #[serde(rename = "longName")]
    pub long_name: String,
    #[serde(rename = "logourl")]
    pub logo_url: String,
    #[serde(rename = "regularMarketPrice")]
    pub regular_market_price: f64,
}

/// One page of shares to fetch. Built fresh before each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page index
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }
}

/// Body of the paged shares response. A body without `items` is not a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharePage {
    pub items: Vec<Share>,
}

/// Credentials posted to the login endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Share;

    pub fn share(symbol: &str, price: f64) -> Share {
        Share {
            symbol: symbol.to_string(),
            long_name: format!("{} S.A.", symbol),
            logo_url: format!("https://icons.example/{}.svg", symbol),
            regular_market_price: price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_uses_upstream_field_names() {
        let json = r#"{
            "symbol": "PETR4",
            "longName": "Petróleo Brasileiro S.A. - Petrobras",
            "logourl": "https://icons.brapi.dev/icons/PETR4.svg",
            "regularMarketPrice": 38.21
        }"#;
        let share: Share = serde_json::from_str(json).unwrap();
        assert_eq!(share.symbol, "PETR4");
        assert_eq!(share.long_name, "Petróleo Brasileiro S.A. - Petrobras");
        assert_eq!(share.logo_url, "https://icons.brapi.dev/icons/PETR4.svg");
        assert!((share.regular_market_price - 38.21).abs() < f64::EPSILON);
    }

    #[test]
    fn share_page_requires_items() {
        assert!(serde_json::from_str::<SharePage>("{}").is_err());
        assert!(serde_json::from_str::<SharePage>(r#"{"error":"x"}"#).is_err());

        let page: SharePage = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn page_request_clamps_to_positive() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req, PageRequest { page: 1, page_size: 1 });

        let json = serde_json::to_value(PageRequest::new(3, 17)).unwrap();
        assert_eq!(json["page"], 3);
        assert_eq!(json["pageSize"], 17);
    }
}
