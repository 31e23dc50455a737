//! Domain layer for the directory browser.
//!
//! Core record types and errors, independent of the terminal, the HTTP client,
//! and the event loop.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: User records and the initial snapshot handed over at startup
//!
//! # Examples
//!
//! ```
//! use dirbrowse::domain::{Result, User};
//!
//! fn fixture() -> Result<User> {
//!     Ok(User::new(1, "Leanne Graham", "Sincere@april.biz", "Romaguera-Crona"))
//! }
//! ```

pub mod error;
pub mod user;

pub use error::{DirectoryError, Result};
pub use user::{Company, InitialSnapshot, User};
