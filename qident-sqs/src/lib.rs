//! SQS queue identity for qident
//!
//! Provides:
//! - Queue URL and ARN construction and parsing
//! - Queue attributes with human-readable rendering
//!   (visibility timeout, retention period, timestamps, etc.)

pub mod attributes;
mod identity;

pub use attributes::{FormatRule, DELAY_SECONDS, VISIBILITY_TIMEOUT};
pub use identity::QueueIdentity;
pub use qident_core::{FormatError, ParseError, Region};
