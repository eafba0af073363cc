//! AI governance portfolio for a bank's use-case catalog.
//!
//! The catalog (departments, use cases, category tables) is loaded once,
//! validated, and then only read. Everything else derives from it: summary
//! statistics, filtered listings, and the per-page views the dashboard and
//! CLI render.

pub mod analytics;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod view;
pub mod web;

pub use catalog::Catalog;
pub use error::{CatalogError, EntityKind, FilterError, ViewError};
