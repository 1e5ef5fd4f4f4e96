//! HTTP Handlers

mod categories;
mod fallback;
mod ping;
mod questions;
mod quizzes;

pub use categories::*;
pub use fallback::*;
pub use ping::*;
pub use questions::*;
pub use quizzes::*;
