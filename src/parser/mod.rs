//! Markdown parsing: block segmentation and inline resolution.

pub mod block;
pub mod inline;

pub use block::{classify, segment};
pub use inline::resolve;
