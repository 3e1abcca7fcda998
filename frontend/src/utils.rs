use shared::AppConfig;
use web_sys::window;

/// Get the base HTTP URL (e.g., "http://localhost:3000" or "https://myapp.com")
pub fn get_base_url() -> String {
    let Some(window) = window() else {
        return "http://localhost:3000".to_string();
    };
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:3000".to_string());

    format!("{}//{}", protocol, host)
}

/// Build the app configuration. The API lives on the page's origin unless
/// `SHARE_API_URL` was set at build time.
pub fn app_config() -> AppConfig {
    let base = option_env!("SHARE_API_URL")
        .map(str::to_string)
        .unwrap_or_else(get_base_url);
    AppConfig::default().with_api_base(base)
}

/// Format a price the way the API sends it (e.g., 38.21 -> "$38.21", 40.0 -> "$40")
pub fn format_price(amount: f64) -> String {
    format!("${}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_price_keeps_raw_number() {
        assert_eq!(format_price(38.21), "$38.21");
        assert_eq!(format_price(1234.5), "$1234.5");
        assert_eq!(format_price(40.0), "$40");
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(-0.001), "$-0.001");
    }
}
