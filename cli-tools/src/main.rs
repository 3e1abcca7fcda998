//! share-api - CLI tool for testing the market API
//!
//! Drives the same listing state machine as the web app, so a terminal
//! session reproduces what the card grid would show.

mod client;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use shared::{
    AppConfig, FetchTicket, Listing, LoginRequest, MarketApi, Session, Share, SnapshotPolicy,
};
use tabled::{Table, Tabled};

use client::NativeApiClient;

#[derive(Parser)]
#[command(name = "share-api")]
#[command(about = "CLI tool for testing the market API", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(short, long, default_value = "http://localhost:3000")]
    server: String,

    /// Session token (for the shares endpoint)
    #[arg(short, long, env = "SHARE_API_TOKEN")]
    token: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "pretty")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
    Table,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum PolicyArg {
    #[default]
    KeepToggled,
    RefreshFromLatest,
}

impl From<PolicyArg> for SnapshotPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::KeepToggled => SnapshotPolicy::KeepToggled,
            PolicyArg::RefreshFromLatest => SnapshotPolicy::RefreshFromLatest,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Exchange credentials for a session token
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// List one page of shares
    Shares {
        /// 1-based page index
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Items per page
        #[arg(
            long,
            default_value_t = shared::config::DEFAULT_PAGE_SIZE,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        page_size: u32,

        /// Mark a symbol as favorite (repeatable)
        #[arg(long = "favorite", value_name = "SYMBOL")]
        favorites: Vec<String>,

        /// Re-fetch keeping only favorites
        #[arg(long)]
        favorites_only: bool,

        /// Which copy a favorite keeps
        #[arg(long, default_value = "keep-toggled")]
        policy: PolicyArg,
    },
}

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Fav")]
    favorite: String,
}

/// Favorite every listed share whose symbol is in `symbols`.
/// Returns the symbols that are not on the current page.
fn mark_favorites(listing: &mut Listing, symbols: &[String]) -> Vec<String> {
    let mut missing = Vec::new();
    for symbol in symbols {
        let found = listing
            .shares()
            .iter()
            .find(|s| &s.symbol == symbol)
            .cloned();
        match found {
            Some(share) if !listing.is_favorite(&share.symbol) => {
                listing.toggle_favorite(&share);
            }
            Some(_) => {}
            None => missing.push(symbol.clone()),
        }
    }
    missing
}

async fn fetch(listing: &mut Listing, client: &NativeApiClient, ticket: FetchTicket) -> Result<()> {
    let result = client.fetch_shares(ticket.request).await;
    if let Err(e) = &result {
        bail!("Erro ao buscar ações: {}", e);
    }
    listing.apply_response(ticket.seq, result);
    Ok(())
}

fn print_shares(listing: &Listing, format: OutputFormat) -> Result<()> {
    let shares: &[Share] = listing.shares();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(shares)?),
        OutputFormat::Table => {
            if shares.is_empty() {
                println!("No shares found");
            } else {
                let rows: Vec<ShareRow> = shares
                    .iter()
                    .map(|s| ShareRow {
                        symbol: s.symbol.clone(),
                        name: s.long_name.clone(),
                        price: format!("{:.2}", s.regular_market_price),
                        favorite: if listing.is_favorite(&s.symbol) {
                            "★".to_string()
                        } else {
                            String::new()
                        },
                    })
                    .collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Pretty => {
            if shares.is_empty() {
                println!("No shares found");
            } else {
                println!(
                    "{} {} share(s) on page {}:",
                    "Found".bold(),
                    shares.len(),
                    listing.applied().page
                );
                for s in shares {
                    let star = if listing.is_favorite(&s.symbol) {
                        "★".yellow()
                    } else {
                        "☆".normal()
                    };
                    println!("\n  {} {} {}", star, s.symbol.bold(), s.long_name);
                    println!("    Price: ${:.2}", s.regular_market_price);
                    println!("    Logo: {}", s.logo_url.cyan());
                }
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email, password } => {
            let client = NativeApiClient::new(&cli.server, None)?;
            let resp = client.login(&LoginRequest { email, password }).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resp)?),
                OutputFormat::Pretty | OutputFormat::Table => {
                    println!("{} Login realizado com sucesso", "✓".green());
                    println!();
                    println!("Set this token with:");
                    println!("  export SHARE_API_TOKEN=\"{}\"", resp.token);
                }
            }
        }

        Commands::Shares {
            page,
            page_size,
            favorites,
            favorites_only,
            policy,
        } => {
            let session = Session::with_token(cli.token.clone());
            let client = NativeApiClient::new(&cli.server, session.token())?;
            let config = AppConfig {
                default_page_size: page_size,
                ..AppConfig::default().with_api_base(&cli.server)
            }
            .with_snapshot_policy(policy.into());
            let mut listing = Listing::new(&config, session.is_authenticated());

            let Some(ticket) = listing.initial_fetch() else {
                bail!("{}", shared::LOGGED_OUT_MESSAGE);
            };
            let ticket = if page > 1 {
                listing.go_to_page(page)?
            } else {
                ticket
            };
            fetch(&mut listing, &client, ticket).await?;

            for symbol in mark_favorites(&mut listing, &favorites) {
                eprintln!("{} {} is not on page {}", "!".yellow(), symbol, page);
            }

            if favorites_only {
                listing.set_favorites_only(true);
                listing.set_page_size(page_size.to_string());
                let ticket = listing.apply_filters()?;
                fetch(&mut listing, &client, ticket).await?;
            }

            print_shares(&listing, cli.format)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(symbol: &str) -> Share {
        Share {
            symbol: symbol.to_string(),
            long_name: format!("{} S.A.", symbol),
            logo_url: String::new(),
            regular_market_price: 10.0,
        }
    }

    fn loaded(symbols: &[&str]) -> Listing {
        let mut listing = Listing::new(&AppConfig::default(), true);
        let ticket = listing.initial_fetch().unwrap();
        listing.apply_response(ticket.seq, Ok(symbols.iter().map(|s| share(s)).collect()));
        listing
    }

    #[test]
    fn mark_favorites_reports_missing() {
        let mut listing = loaded(&["ABC", "XYZ"]);
        let missing = mark_favorites(&mut listing, &["XYZ".to_string(), "NOPE".to_string()]);
        assert_eq!(missing, vec!["NOPE".to_string()]);
        assert!(listing.is_favorite("XYZ"));
        assert!(!listing.is_favorite("ABC"));
    }

    #[test]
    fn mark_favorites_twice_does_not_unfavorite() {
        let mut listing = loaded(&["XYZ"]);
        mark_favorites(&mut listing, &["XYZ".to_string(), "XYZ".to_string()]);
        assert!(listing.is_favorite("XYZ"));
    }

    #[test]
    fn cli_parses_shares_flags() {
        let cli = Cli::try_parse_from([
            "share-api",
            "--token",
            "abc",
            "shares",
            "--page",
            "2",
            "--favorite",
            "XYZ",
            "--favorite",
            "ABC",
            "--favorites-only",
        ])
        .unwrap();
        assert_eq!(cli.token.as_deref(), Some("abc"));
        match cli.command {
            Commands::Shares {
                page,
                page_size,
                favorites,
                favorites_only,
                ..
            } => {
                assert_eq!(page, 2);
                assert_eq!(page_size, 17);
                assert_eq!(favorites, vec!["XYZ".to_string(), "ABC".to_string()]);
                assert!(favorites_only);
            }
            _ => panic!("Wrong command"),
        }
    }

    #[test]
    fn cli_rejects_zero_page_size() {
        let result = Cli::try_parse_from(["share-api", "shares", "--page-size", "0"]);
        assert!(result.is_err());
        let result = Cli::try_parse_from(["share-api", "shares", "--page", "0"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["share-api", "shares", "--page-size", "5"]).unwrap();
        match cli.command {
            Commands::Shares { page_size, .. } => assert_eq!(page_size, 5),
            _ => panic!("Wrong command"),
        }
    }
}
