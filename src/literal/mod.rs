//! Round trip between the TypeScript array literal and typed topics.
//!
//! The forward direction runs [`ExportPattern::locate`] →
//! [`DialectNormalizer::normalize`] → [`decode_topics`]. The way back is
//! [`encode_topics`] → [`Restorer::restore`], after which the caller splices
//! the text over the located span.

mod decode;
mod escape;
mod extract;
mod normalize;
mod restore;
pub mod scan;

pub use decode::*;
pub use escape::{to_template, unescape};
pub use extract::*;
pub use normalize::*;
pub use restore::*;
