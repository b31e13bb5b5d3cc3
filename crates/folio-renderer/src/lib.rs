//! HTML rendering primitives for Folio.
//!
//! This crate holds the pieces of output that do not depend on site state:
//!
//! - [`escape_html`] / [`escape_attr`] / [`encode_component`] for safe output
//! - [`md_to_html`] for the limited markdown used by pages and news text
//! - [`panels`] for loading placeholders, error and notice cards

mod escape;
mod markdown;
pub mod panels;

pub use escape::{encode_component, escape_attr, escape_html};
pub use markdown::md_to_html;
