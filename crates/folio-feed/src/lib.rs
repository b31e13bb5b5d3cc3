//! News feed ingestion for Folio.
//!
//! News posts live in a published spreadsheet. This crate fetches the
//! sheet through the visualization query endpoint, unwraps the response
//! envelope, maps columns to fields, and produces [`NewsItem`]s ordered
//! newest first.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use folio_feed::{FeedSource, HttpTransport, NewsFeed};
//!
//! let source = FeedSource::new(Some("sheet-id"), "0", "https://docs.google.com/spreadsheets/d");
//! let feed = NewsFeed::new(Arc::new(HttpTransport::new(Duration::from_secs(30))), source);
//! let items = feed.fetch_news().await?;
//! ```

mod adapter;
mod client;
pub mod columns;
mod envelope;
mod error;
mod item;
mod normalize;

pub use adapter::NewsFeed;
pub use client::{FeedSource, FeedTransport, HttpTransport, PLACEHOLDER_SHEET_ID, normalize_sheet_id};
pub use envelope::{Cell, Column, Row, Table, parse_envelope};
pub use error::FeedError;
pub use item::NewsItem;
pub use normalize::{normalize_table, parse_date, slugify};
