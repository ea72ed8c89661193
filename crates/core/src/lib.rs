//! Domain types and pure policies for the portfolio data service.
//!
//! Nothing in this crate performs I/O: retrieval lives in `folio-source`
//! and the HTTP surface in `folio-api`.

pub mod config;
pub mod error;
pub mod fallback;
pub mod gallery;
pub mod image_ref;
pub mod model;
pub mod types;
