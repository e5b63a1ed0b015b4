//! Folio: a data-driven résumé page.
//!
//! A JSON résumé document is loaded, rendered into typed fragments mounted on
//! an in-memory page, kept in sync with a small UI state, and decorated by
//! cancellable timer-driven effects.

pub mod app;
pub mod config;
pub mod data_source;
pub mod dom;
pub mod effects;
pub mod errors;
pub mod input;
pub mod models;
pub mod render;
pub mod state;
pub mod theme_store;

pub use app::{App, BootPhase};
pub use config::Config;
pub use data_source::{data_source_for, DataSource, FileDataSource, HttpDataSource};
pub use errors::{AppError, LoadError, StoreError};
pub use input::{CloseSource, UiEvent};
pub use theme_store::{FileThemeStore, MemoryThemeStore, ThemeStore};
