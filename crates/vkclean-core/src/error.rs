//! Error types for vkclean.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, API, protocol, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for vkclean operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (rejected credentials, invalid token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Error envelope returned by an API method.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Protocol errors (unexpected status codes or response shapes).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (invalid URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Response body could not be decoded.
    #[error("malformed response body: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The access token was refused by the API.
    #[error("access token rejected: {message}")]
    InvalidToken { message: String },

    /// The OAuth endpoint refused the login/password pair.
    #[error("credentials rejected ({error}): {description}")]
    Rejected { error: String, description: String },

    /// The account requires two-factor validation.
    #[error("two-factor validation required")]
    ValidationRequired,

    /// The OAuth endpoint demands a captcha.
    #[error("captcha required")]
    CaptchaRequired,
}

/// Error envelope returned by an API method (`{"error": {...}}`).
#[derive(Debug)]
pub struct ApiError {
    /// Numeric error code.
    pub code: i64,
    /// Human-readable message from the server.
    pub message: String,
}

impl ApiError {
    /// Authorization failed (bad or expired token).
    pub const AUTHORIZATION_FAILED: i64 = 5;

    /// Create a new API error.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Check if this error means the token is not usable.
    pub fn is_auth_error(&self) -> bool {
        self.code == Self::AUTHORIZATION_FAILED
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Protocol-level errors: the server answered, but not in a usable way.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// What was wrong with the response.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}

impl Error {
    /// Returns true if the error means the credentials or token are unusable.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Auth(_) => true,
            Error::Api(e) => e.is_auth_error(),
            _ => false,
        }
    }
}
