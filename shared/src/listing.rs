//! Paged, filterable share listing.
//!
//! `Listing` holds all view state for the card grid. It never performs I/O
//! itself: operations that need data hand back a [`FetchTicket`], the caller
//! runs the request, and the result comes back through
//! [`Listing::apply_response`]. Every ticket carries a monotonic sequence
//! number and only the newest one may change the displayed list. The filter
//! a ticket was issued with becomes the applied filter only once its page
//! arrives.

use crate::filter::{AppliedFilter, DraftFilter, FilterError};
use crate::{ApiError, AppConfig, Favorites, MarketApi, PageRequest, Share, SnapshotPolicy};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingError {
    #[error("not signed in")]
    SignedOut,
    #[error("already on the first page")]
    FirstPage,
    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// A fetch the caller must run on the listing's behalf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub request: PageRequest,
}

/// What a fetch result did to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The displayed list was replaced; holds the number of visible cards
    Applied(usize),
    /// A newer request was issued since; the result was dropped
    Stale,
    /// The request failed; the previous list is still shown
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    authenticated: bool,
    shares: Vec<Share>,
    favorites: Favorites,
    draft: DraftFilter,
    applied: AppliedFilter,
    /// Filter of the newest ticket, not yet confirmed by a response
    pending: AppliedFilter,
    drawer_open: bool,
    selected: Option<Share>,
    detail_open: bool,
    latest_seq: u64,
    policy: SnapshotPolicy,
}

impl Listing {
    pub fn new(config: &AppConfig, authenticated: bool) -> Self {
        Self {
            authenticated,
            shares: Vec::new(),
            favorites: Favorites::new(),
            draft: DraftFilter::new(config.default_page_size),
            applied: AppliedFilter::new(config.default_page_size),
            pending: AppliedFilter::new(config.default_page_size),
            drawer_open: false,
            selected: None,
            detail_open: false,
            latest_seq: 0,
            policy: config.snapshot_policy,
        }
    }

    // --- fetching -----------------------------------------------------------

    /// First fetch on mount. `None` when signed out.
    pub fn initial_fetch(&mut self) -> Option<FetchTicket> {
        if !self.authenticated {
            log::info!("No session token, skipping initial fetch");
            return None;
        }
        Some(self.issue(self.applied))
    }

    /// Commit the drawer draft and fetch with it
    pub fn apply_filters(&mut self) -> Result<FetchTicket, ListingError> {
        self.ensure_authenticated()?;
        let applied = self.draft.commit(self.applied.page)?;
        Ok(self.issue(applied))
    }

    /// Fetch another page with the applied filter; the draft is not read.
    pub fn go_to_page(&mut self, page: u32) -> Result<FetchTicket, ListingError> {
        self.ensure_authenticated()?;
        let applied = self.applied.at_page(page);
        Ok(self.issue(applied))
    }

    pub fn next_page(&mut self) -> Result<FetchTicket, ListingError> {
        self.go_to_page(self.applied.page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> Result<FetchTicket, ListingError> {
        if self.authenticated && self.applied.page <= 1 {
            return Err(ListingError::FirstPage);
        }
        self.go_to_page(self.applied.page.saturating_sub(1))
    }

    /// Feed back the result of the request identified by `seq`.
    pub fn apply_response(
        &mut self,
        seq: u64,
        result: Result<Vec<Share>, ApiError>,
    ) -> FetchOutcome {
        if seq != self.latest_seq {
            log::debug!(
                "Dropping response #{} (latest issued is #{})",
                seq,
                self.latest_seq
            );
            return FetchOutcome::Stale;
        }

        let items = match result {
            Ok(items) => items,
            Err(e) => {
                log::error!("Erro ao buscar ações: {}", e);
                return FetchOutcome::Failed;
            }
        };

        self.applied = self.pending;
        if self.policy == SnapshotPolicy::RefreshFromLatest {
            self.favorites.refresh_from(&items);
        }

        self.shares = if self.applied.favorites_only {
            self.favorites.retain_favorites(items)
        } else {
            items
        };
        FetchOutcome::Applied(self.shares.len())
    }

    /// Run `ticket` against `api` and apply the result
    pub async fn run_fetch<A: MarketApi>(&mut self, api: &A, ticket: FetchTicket) -> FetchOutcome {
        let result = api.fetch_shares(ticket.request).await;
        self.apply_response(ticket.seq, result)
    }

    fn ensure_authenticated(&self) -> Result<(), ListingError> {
        if self.authenticated {
            Ok(())
        } else {
            Err(ListingError::SignedOut)
        }
    }

    fn issue(&mut self, filter: AppliedFilter) -> FetchTicket {
        self.pending = filter;
        self.latest_seq += 1;
        FetchTicket {
            seq: self.latest_seq,
            request: filter.page_request(),
        }
    }

    // --- favorites ----------------------------------------------------------

    pub fn toggle_favorite(&mut self, share: &Share) -> bool {
        self.favorites.toggle(share, self.policy, &self.shares)
    }

    pub fn is_favorite(&self, symbol: &str) -> bool {
        self.favorites.contains(symbol)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    // --- detail modal -------------------------------------------------------

    pub fn open_detail(&mut self, share: Share) {
        self.selected = Some(share);
        self.detail_open = true;
    }

    /// Hides the modal; the selection is kept until the next `open_detail`.
    pub fn close_detail(&mut self) {
        self.detail_open = false;
    }

    /// The share to render in the modal, if it is visible
    pub fn detail(&self) -> Option<&Share> {
        self.selected.as_ref().filter(|_| self.detail_open)
    }

    pub fn selected(&self) -> Option<&Share> {
        self.selected.as_ref()
    }

    // --- filter drawer ------------------------------------------------------

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn set_favorites_only(&mut self, on: bool) {
        self.draft.favorites_only = on;
    }

    pub fn set_page_size(&mut self, raw: impl Into<String>) {
        self.draft.page_size = raw.into();
    }

    // --- accessors ----------------------------------------------------------

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn draft(&self) -> &DraftFilter {
        &self.draft
    }

    pub fn applied(&self) -> AppliedFilter {
        self.applied
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }
}
