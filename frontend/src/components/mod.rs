mod filter_drawer;
mod share_card;
mod share_detail;

pub use filter_drawer::FilterDrawer;
pub use share_card::ShareCard;
pub use share_detail::ShareDetail;
