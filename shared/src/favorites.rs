//! Favorites set, keyed by symbol and held in view memory only.

use crate::{Share, SnapshotPolicy};

/// Favorited shares in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    items: Vec<Share>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.items.iter().any(|s| s.symbol == symbol)
    }

    /// Remove `share` if its symbol is present, otherwise add it.
    ///
    /// `latest` is the most recently applied page; it only matters under
    /// [`SnapshotPolicy::RefreshFromLatest`]. Returns whether the symbol is
    /// a favorite afterwards.
    pub fn toggle(&mut self, share: &Share, policy: SnapshotPolicy, latest: &[Share]) -> bool {
        if self.contains(&share.symbol) {
            self.items.retain(|s| s.symbol != share.symbol);
            return false;
        }

        let snapshot = match policy {
            SnapshotPolicy::KeepToggled => share,
            SnapshotPolicy::RefreshFromLatest => latest
                .iter()
                .find(|s| s.symbol == share.symbol)
                .unwrap_or(share),
        };
        self.items.push(snapshot.clone());
        true
    }

    /// Replace stored snapshots with the copies found in `page`
    pub fn refresh_from(&mut self, page: &[Share]) {
        for fav in &mut self.items {
            if let Some(fresh) = page.iter().find(|s| s.symbol == fav.symbol) {
                *fav = fresh.clone();
            }
        }
    }

    /// Keep only the items whose symbol is favorited
    pub fn retain_favorites(&self, items: Vec<Share>) -> Vec<Share> {
        items
            .into_iter()
            .filter(|s| self.contains(&s.symbol))
            .collect()
    }

    pub fn get(&self, symbol: &str) -> Option<&Share> {
        self.items.iter().find(|s| s.symbol == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Share> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::share;

    #[test]
    fn toggle_twice_restores_membership() {
        let mut favs = Favorites::new();
        favs.toggle(&share("ABC", 1.0), SnapshotPolicy::KeepToggled, &[]);
        let before = favs.clone();

        let xyz = share("XYZ", 2.0);
        assert!(favs.toggle(&xyz, SnapshotPolicy::KeepToggled, &[]));
        assert!(favs.contains("XYZ"));
        assert!(!favs.toggle(&xyz, SnapshotPolicy::KeepToggled, &[]));
        assert_eq!(favs, before);
    }

    #[test]
    fn removal_is_by_symbol_not_value() {
        let mut favs = Favorites::new();
        favs.toggle(&share("XYZ", 2.0), SnapshotPolicy::KeepToggled, &[]);
        // A different snapshot of the same instrument still removes it
        assert!(!favs.toggle(&share("XYZ", 9.0), SnapshotPolicy::KeepToggled, &[]));
        assert!(favs.is_empty());
    }

    #[test]
    fn keep_toggled_stores_argument() {
        let mut favs = Favorites::new();
        let latest = vec![share("XYZ", 5.0)];
        favs.toggle(&share("XYZ", 2.0), SnapshotPolicy::KeepToggled, &latest);
        assert_eq!(favs.get("XYZ").unwrap().regular_market_price, 2.0);
    }

    #[test]
    fn refresh_from_latest_prefers_page_copy() {
        let mut favs = Favorites::new();
        let latest = vec![share("XYZ", 5.0)];
        favs.toggle(&share("XYZ", 2.0), SnapshotPolicy::RefreshFromLatest, &latest);
        assert_eq!(favs.get("XYZ").unwrap().regular_market_price, 5.0);

        // Not on the latest page: falls back to the argument
        favs.toggle(&share("QQQ", 3.0), SnapshotPolicy::RefreshFromLatest, &latest);
        assert_eq!(favs.get("QQQ").unwrap().regular_market_price, 3.0);
    }

    #[test]
    fn refresh_from_updates_only_known_symbols() {
        let mut favs = Favorites::new();
        favs.toggle(&share("XYZ", 2.0), SnapshotPolicy::KeepToggled, &[]);
        favs.refresh_from(&[share("XYZ", 7.5), share("NEW", 1.0)]);
        assert_eq!(favs.len(), 1);
        assert_eq!(favs.get("XYZ").unwrap().regular_market_price, 7.5);
    }

    #[test]
    fn retain_favorites_keeps_order() {
        let mut favs = Favorites::new();
        favs.toggle(&share("C", 3.0), SnapshotPolicy::KeepToggled, &[]);
        favs.toggle(&share("A", 1.0), SnapshotPolicy::KeepToggled, &[]);
        let kept = favs.retain_favorites(vec![share("A", 1.0), share("B", 2.0), share("C", 3.0)]);
        let symbols: Vec<_> = kept.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["A", "C"]);
    }
}
