//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, PartialEq, Clone, Debug)]
pub enum ResponseError {
    /// HTTP 404 for the given url
    #[error("Not Found: {0}")]
    NotFound(String),
    /// Any other non-success status with its reason phrase
    #[error("{0} {1}")]
    Status(u16, String),
    /// Connection or timeout errors
    #[error("Request failed: {0}")]
    Network(String),
    /// Response body isn't the expected JSON
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ResponseError {
    /// Map a response status to an error, `None` for success codes
    pub fn from_status(url: &str, status: StatusCode) -> Option<ResponseError> {
        if status.is_success() {
            None
        } else if status == StatusCode::NOT_FOUND {
            Some(ResponseError::NotFound(url.to_string()))
        } else {
            let reason = status.canonical_reason().unwrap_or("Unknown status");
            Some(ResponseError::Status(status.as_u16(), reason.to_string()))
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            ResponseError::NotFound(_) => true,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ResponseError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ResponseError::Decode(e.to_string())
        } else {
            ResponseError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ResponseError {
    fn from(e: serde_json::Error) -> Self {
        ResponseError::Decode(e.to_string())
    }
}
