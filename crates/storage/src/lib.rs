#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod bundled;
pub mod file;
pub mod schema;

pub use schema::{KnowledgeBaseError, parse};
