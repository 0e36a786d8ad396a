//! Core types for qident
//!
//! This crate provides the region, account and error types shared by the
//! queue identity library and the command line front end.

pub mod account;
pub mod error;
pub mod region;

pub use account::AccountRegionKey;
pub use error::{ErrorCode, FormatError, ParseError};
pub use region::Region;
