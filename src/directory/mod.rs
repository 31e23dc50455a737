//! Pure derivations over the fetched collection.
//!
//! Everything here is synchronous and side-effect free: the state layer calls
//! these on every view model computation instead of caching results.
//!
//! - [`filter`]: case-insensitive substring filter on name and email
//! - [`paginate`]: page slicing, clamping, navigation, and page-number links
//! - [`highlight`]: plain/highlighted segments for rendering matches

pub mod filter;
pub mod highlight;
pub mod paginate;

pub use filter::filter_users;
pub use highlight::{highlight, Segment};
pub use paginate::{page_links, paginate, Page, PageCursor, PageLink, DEFAULT_PAGE_SIZE};
