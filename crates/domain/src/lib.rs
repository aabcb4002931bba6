#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod knowledge;
mod muscle_group;
mod name;
pub mod sanitize;
mod service;
mod volume;
mod workout;

pub use error::*;
pub use exercise::*;
pub use knowledge::*;
pub use muscle_group::*;
pub use name::{Name, NameError};
pub use service::*;
pub use volume::*;
pub use workout::*;
