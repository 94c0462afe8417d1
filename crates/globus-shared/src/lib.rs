//! # globus-shared
//!
//! Domain types, selection logic and the text catalog shared by every
//! globus crate.

pub mod constants;
pub mod locale;
pub mod select;
pub mod types;

pub use locale::Locale;
pub use types::{CountryRecord, FavoriteEntry, RawCountry};
