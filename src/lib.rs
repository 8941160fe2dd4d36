pub mod clients;
pub mod config;
pub mod error;
pub mod form;
pub mod mail;
pub mod projects;
pub mod render;
pub mod server;

pub use error::{Error, Result};
