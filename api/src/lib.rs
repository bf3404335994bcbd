//! TextVault API Module
//!
//! The API module provides the HTTP endpoints of the TextVault service:
//! text file CRUD under a sandboxed root and folder statistics.

pub mod error;
pub mod handlers;
pub mod models;
pub mod server;

pub use error::*;
pub use handlers::*;
pub use models::*;
pub use server::*;
