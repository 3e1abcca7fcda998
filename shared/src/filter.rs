//! Draft vs. applied filter state.
//!
//! Drawer edits only touch a [`DraftFilter`]. A fetch always runs against an
//! [`AppliedFilter`], produced by [`DraftFilter::commit`].

use crate::PageRequest;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("Itens por página deve ser um número inteiro positivo (recebido: {0:?})")]
    InvalidPageSize(String),
}

/// In-progress drawer edits. Page size is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftFilter {
    pub favorites_only: bool,
    pub page_size: String,
}

impl DraftFilter {
    pub fn new(page_size: u32) -> Self {
        Self {
            favorites_only: false,
            page_size: page_size.to_string(),
        }
    }

    /// Validate the draft and turn it into query parameters for page `page`.
    pub fn commit(&self, page: u32) -> Result<AppliedFilter, FilterError> {
        let page_size = self
            .page_size
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| FilterError::InvalidPageSize(self.page_size.clone()))?;

        Ok(AppliedFilter {
            page: page.max(1),
            page_size,
            favorites_only: self.favorites_only,
        })
    }
}

/// Parameters of the last fetch actually issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedFilter {
    pub page: u32,
    pub page_size: u32,
    pub favorites_only: bool,
}

impl AppliedFilter {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            favorites_only: false,
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    /// Same filter on another page
    pub fn at_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_copies_draft_fields() {
        let draft = DraftFilter {
            favorites_only: true,
            page_size: " 25 ".to_string(),
        };
        let applied = draft.commit(1).unwrap();
        assert_eq!(
            applied,
            AppliedFilter {
                page: 1,
                page_size: 25,
                favorites_only: true
            }
        );
        assert_eq!(applied.page_request(), PageRequest::new(1, 25));
    }

    #[test]
    fn commit_rejects_non_positive_page_size() {
        for input in ["0", "", "-3", "abc", "2.5"] {
            let draft = DraftFilter {
                favorites_only: false,
                page_size: input.to_string(),
            };
            assert_eq!(
                draft.commit(1),
                Err(FilterError::InvalidPageSize(input.to_string()))
            );
        }
    }

    #[test]
    fn at_page_never_goes_below_one() {
        let applied = AppliedFilter::new(17).at_page(0);
        assert_eq!(applied.page, 1);
        assert_eq!(applied.page_size, 17);
    }
}
