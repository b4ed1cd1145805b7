//! Password-gated catalog browser for outfit and exercise collections.

pub mod args;
pub mod config;
pub mod data;
pub mod error;
pub mod file_ops;
pub mod gate;
pub mod matcher;
pub mod output;
pub mod render;
pub mod resolver;

pub use error::{CatalogError, Result};
