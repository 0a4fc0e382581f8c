//! Core types for the trivia API.

mod category;
mod question;

pub use category::*;
pub use question::*;
