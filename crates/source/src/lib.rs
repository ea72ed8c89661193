//! Portfolio document retrieval.
//!
//! A [`PortfolioSource`](source::PortfolioSource) fetches the raw document,
//! the [`ImageResolver`](images::ImageResolver) normalizes its image
//! references, the [`PortfolioLoader`](loader::PortfolioLoader) combines the
//! two with the fallback policy, and the
//! [`PortfolioProvider`](provider::PortfolioProvider) runs one load per mount
//! in the background and publishes its state.

pub mod bundled;
pub mod error;
pub mod github;
mod http;
pub mod images;
pub mod loader;
pub mod media;
pub mod provider;
pub mod public;
pub mod source;
