//! Error types and formatting

use serde::Serialize;
use thiserror::Error;

/// Stable error codes reported alongside error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidAddress,
    InvalidAttributeValue,
    InvalidParameterValue,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidAddress => "InvalidAddress",
            Self::InvalidAttributeValue => "InvalidAttributeValue",
            Self::InvalidParameterValue => "InvalidParameterValue",
        }
    }
}

/// Failure to read a queue URL or ARN
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Malformed queue URL: {0}")]
    MalformedUrl(String),

    #[error("Malformed queue ARN: {0}")]
    MalformedArn(String),
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidAddress
    }
}

/// Failure to render an attribute value for display
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Attribute {attribute} expects an integer, got {value:?}")]
    NotAnInteger { attribute: String, value: String },

    #[error("Attribute {attribute} is not a representable timestamp: {value}")]
    TimestampOutOfRange { attribute: String, value: i64 },
}

impl FormatError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidAttributeValue
    }
}

/// Format an error as a JSON body: `{"__type": <code>, "message": ...}`
pub fn to_json(code: ErrorCode, message: &str) -> String {
    #[derive(Serialize)]
    struct JsonError<'a> {
        #[serde(rename = "__type")]
        error_type: &'static str,
        message: &'a str,
    }

    let error = JsonError {
        error_type: code.as_str(),
        message,
    };

    serde_json::to_string(&error).unwrap_or_else(|_| {
        format!(r#"{{"__type":"{}","message":"{}"}}"#, code.as_str(), message)
    })
}
