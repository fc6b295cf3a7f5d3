//! # Catalog
//!
//! Verified game catalog behind Rotection.
//!
//! ## Source
//!
//! - Published spreadsheet exported as CSV, fetched over plain HTTP(S) GET
//! - Row 1 is a header and is always skipped
//! - Rows 2..N have 10 positional columns:
//!   name, developer, description, age group, category, link, honesty, safety, fairness, age appropriate
//! - No quoting or escaping. A comma inside a field shifts every column after it for that row.
//!   Producers must keep commas and newlines out of field values.
//!
//! ## Records
//!
//! - Ids are the position of the row among non-blank rows, as a string. They are NOT stable across reloads.
//! - Missing text columns become empty strings.
//! - Missing or non-numeric ratings become 0. A rating is never NaN or negative.
//!
//! ## State
//!
//! - [`Catalog`] owns the current [`Snapshot`], empty until the first successful load
//! - A load either replaces the whole list or leaves it untouched, never a partial list
//! - Readers subscribe through a watch channel, load outcomes go out on a broadcast channel
//! - Overlapping loads are not coordinated, whichever finishes last wins
//!
//! ## Views
//!
//! - Search matches name, developer and category, case-insensitive substring
//! - Featured is the first 3 records in load order

pub mod error;
pub mod filter;
pub mod models;
pub mod parse;
pub mod remote;
pub mod store;

pub use error::LoadError;
pub use filter::{FEATURED_COUNT, featured, filter, find};
pub use models::{GameRecord, Ratings};
pub use parse::parse_catalog;
pub use remote::{load, load_with};
pub use store::{Catalog, CatalogEvent, Snapshot};

pub const DEFAULT_CATALOG_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQdMlcR44cKlhuBXWvwsKGEhwg5Mdx6yuVPGjjcuFIvVM0h4r1FGbp9uyXuCpzoqYomZQsmjrgo02WD/pub?output=csv";
