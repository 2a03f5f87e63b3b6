// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the device library.
//!
//! Value validation failures (an unknown status or device type label) and
//! projection parsing/serialization failures are kept apart so callers can
//! match on the kind they care about.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing or serializing data.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The candidate is not one of the device status labels.
    #[error("invalid status: {0}")]
    InvalidStatus(String),

    /// The candidate is not one of the device type labels.
    #[error("invalid device type: {0}")]
    InvalidDeviceType(String),
}

/// Errors related to parsing identifiers and serializing projections.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON serialization or parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An identifier could not be parsed.
    #[error("failed to parse {field}: {message}")]
    InvalidId {
        /// The identifier kind that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_status_display() {
        let err = ValueError::InvalidStatus("SOME INVALID STATUS".to_string());
        assert_eq!(err.to_string(), "invalid status: SOME INVALID STATUS");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidDeviceType("ANDROID".to_string());
        let err: Error = value_err.into();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidDeviceType(ref s)) if s == "ANDROID"
        ));
    }

    #[test]
    fn top_level_display_wraps_value_error() {
        let err: Error = ValueError::InvalidStatus("active".to_string()).into();
        assert_eq!(err.to_string(), "value error: invalid status: active");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::InvalidId {
            field: "device id".to_string(),
            message: "too short".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse device id: too short");
    }
}
