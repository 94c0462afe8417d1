//! # globus-net
//!
//! Remote data source for the country list.
//!
//! - [`HttpSource`] issues a single GET against the REST Countries API.
//! - [`CountryCatalog`] memoises the first successful fetch for the rest of
//!   the session and lets concurrent callers share one in-flight request.

pub mod catalog;
pub mod source;

mod error;

pub use catalog::CountryCatalog;
pub use error::NetError;
pub use source::{CountrySource, HttpSource};
