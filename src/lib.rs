pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod names;
pub mod pipeline;
pub mod remote;
pub mod staging;
pub mod symbol;

pub use error::{IconSyncError, Result};
