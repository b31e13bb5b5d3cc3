//! Content resource storage for Folio.
//!
//! This crate provides a [`Storage`] trait for reading the resources a site
//! session needs (locale bundles, markdown pages, gallery and archive JSON,
//! the contact fragment) independently of where they live. This enables:
//!
//! - **Unit testing** without touching the real filesystem or network
//! - **Backend flexibility** (local site directory, published site over HTTP)
//! - **Clean separation** between routing logic and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with an async `read()` method
//! - [`FsStorage`] for a local site root
//! - [`HttpStorage`] for a published site root (blocking `ureq` on the tokio blocking pool)
//! - [`MockStorage`] for testing (behind `mock` feature flag)

mod fs;
mod http;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
pub use http::HttpStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind, validate_path};
