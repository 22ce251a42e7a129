// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use botgram_types::ResponseParameters;
use std::fmt;

/// The error type reported by the Bot API when a request is misused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// A numerical value similar to HTTP status codes.
    pub code: i32,

    /// Human-readable description of the error, such as `Bad Request: chat not found`.
    pub description: String,

    /// In case of exceeding flood control, the number of seconds left to wait
    /// before the request can be repeated.
    pub retry_after: Option<u32>,

    /// The group has been migrated to a supergroup with this identifier.
    pub migrate_to_chat_id: Option<i64>,
}

impl std::error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "api error {}: {}", self.code, self.description)?;
        if let Some(retry_after) = self.retry_after {
            write!(f, " (retry after {retry_after}s)")?;
        }
        if let Some(chat_id) = self.migrate_to_chat_id {
            write!(f, " (migrated to {chat_id})")?;
        }
        Ok(())
    }
}

impl ApiError {
    pub(crate) fn new(
        code: i32,
        description: String,
        parameters: Option<ResponseParameters>,
    ) -> Self {
        let parameters = parameters.unwrap_or_default();
        Self {
            code,
            description,
            retry_after: parameters.retry_after,
            migrate_to_chat_id: parameters.migrate_to_chat_id,
        }
    }

    /// Matches on the description of the error (case-sensitive).
    ///
    /// Useful in `match` arm guards. A single trailing or leading asterisk (`'*'`) is allowed,
    /// and will instead check if the description starts (or ends with) the input parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// # let request_result = Result::<(), _>::Err(botgram_sender::ApiError {
    /// #     code: 400, description: "Bad Request: chat not found".to_string(),
    /// #     retry_after: None, migrate_to_chat_id: None });
    /// #
    /// match request_result {
    ///     Err(api_err) if api_err.is("Forbidden: *") => panic!(),
    ///     Err(api_err) if api_err.is("Bad Request: *") => {},
    ///     _ => panic!()
    /// }
    /// ```
    pub fn is(&self, description: &str) -> bool {
        if let Some(description) = description.strip_suffix('*') {
            self.description.starts_with(description)
        } else if let Some(description) = description.strip_prefix('*') {
            self.description.ends_with(description)
        } else {
            self.description == description
        }
    }

    /// Whether this error was caused by exceeding flood control.
    pub fn is_flood(&self) -> bool {
        self.code == 429
    }
}

/// This error occurs when a request to the Bot API was unsuccessful.
#[derive(Debug)]
pub enum InvocationError {
    /// The request invocation failed because it was invalid or the server
    /// could not process it successfully.
    Api(ApiError),

    /// The request could not be sent, or the response could not be read.
    ///
    /// The error never contains the request URL, as it holds the bot token.
    Http(reqwest::Error),

    /// The request could not be encoded.
    Serialize(serde_json::Error),

    /// The response was not what the request should have returned.
    Deserialize(serde_json::Error),

    /// The configured server address cannot be used to build method URLs.
    InvalidEndpoint(url::ParseError),
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(err) => Some(err),
            Self::Http(err) => Some(err),
            Self::Serialize(err) | Self::Deserialize(err) => Some(err),
            Self::InvalidEndpoint(err) => Some(err),
        }
    }
}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(err) => write!(f, "request error: {err}"),
            Self::Http(err) => write!(f, "request error, http failed: {err}"),
            Self::Serialize(err) => write!(f, "request error, bad request: {err}"),
            Self::Deserialize(err) => write!(f, "request error, bad response: {err}"),
            Self::InvalidEndpoint(err) => write!(f, "request error, invalid endpoint: {err}"),
        }
    }
}

impl From<ApiError> for InvocationError {
    fn from(error: ApiError) -> Self {
        Self::Api(error)
    }
}

impl From<reqwest::Error> for InvocationError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.without_url())
    }
}

impl From<url::ParseError> for InvocationError {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidEndpoint(error)
    }
}

impl InvocationError {
    /// Matches on the description of the API error (case-sensitive).
    ///
    /// Useful in `match` arm guards. A single trailing or leading asterisk (`'*'`) is allowed,
    /// and will instead check if the description starts (or ends with) the input parameter.
    ///
    /// If the error is not an API error, returns `false`.
    #[inline]
    pub fn is(&self, description: &str) -> bool {
        match self {
            Self::Api(err) => err.is(description),
            _ => false,
        }
    }

    /// The time the server asked to wait before repeating the request, if any.
    pub fn retry_after(&self) -> Option<u32> {
        match self {
            Self::Api(err) => err.retry_after,
            _ => None,
        }
    }

    /// Whether the request never reached the server or its answer was lost on the way.
    pub fn is_network(&self) -> bool {
        match self {
            Self::Http(err) => err.is_connect() || err.is_timeout() || err.is_request(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_not_found() -> ApiError {
        ApiError::new(400, "Bad Request: chat not found".into(), None)
    }

    #[test]
    fn check_description_matching() {
        let err = chat_not_found();
        assert!(err.is("Bad Request: chat not found"));
        assert!(err.is("Bad Request: *"));
        assert!(err.is("*not found"));
        assert!(!err.is("Bad Request"));
        assert!(!err.is("Forbidden: *"));

        let err = InvocationError::from(err);
        assert!(err.is("Bad Request: *"));
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn check_response_parameters_are_kept() {
        let err = ApiError::new(
            429,
            "Too Many Requests: retry after 17".into(),
            Some(ResponseParameters {
                migrate_to_chat_id: None,
                retry_after: Some(17),
            }),
        );
        assert!(err.is_flood());
        assert_eq!(InvocationError::from(err.clone()).retry_after(), Some(17));
        assert_eq!(
            err.to_string(),
            "api error 429: Too Many Requests: retry after 17 (retry after 17s)"
        );
    }

    #[test]
    fn check_migration_display() {
        let err = ApiError::new(
            400,
            "Bad Request: group chat was upgraded to a supergroup chat".into(),
            Some(ResponseParameters {
                migrate_to_chat_id: Some(-1001234),
                retry_after: None,
            }),
        );
        assert_eq!(err.migrate_to_chat_id, Some(-1001234));
        assert!(err.to_string().ends_with("(migrated to -1001234)"));
    }
}
