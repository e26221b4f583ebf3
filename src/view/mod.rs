pub mod breadcrumb;
pub mod listing;

pub use breadcrumb::render_bar;
pub use listing::{render_listing, ListingAction};
