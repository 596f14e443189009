use thiserror::Error;

/// How a provider reports a wrapped not-found inside another failure.
const NOT_FOUND_SIGNATURE: &str = "status code 404";

/// Failures raised while talking to an external provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0} API key not configured")]
    MissingApiKey(&'static str),

    #[error("{provider} request failed: {source}")]
    Http {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned status {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider} URL is invalid: {message}")]
    InvalidUrl {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} response could not be decoded: {message}")]
    Decode {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// HTTP status reported by the provider, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Status { status, .. } => Some(*status),
            ProviderError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the provider answered 404, or its own error message reports
    /// a wrapped `status code 404`.
    ///
    /// Only the status and the parsed provider message are consulted. The
    /// rendered error can carry the request URL and raw body, which say
    /// nothing about whether the wallet was found.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
            || self
                .provider_message()
                .is_some_and(|m| m.contains(NOT_FOUND_SIGNATURE))
    }

    /// The provider's own error message, when its body carries one.
    ///
    /// Understands `{"error": {"message": ..}}`, `{"error": ".."}` and `{"message": ..}`.
    pub fn provider_message(&self) -> Option<String> {
        let ProviderError::Status { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .pointer("/error/message")
            .or_else(|| value.get("error").filter(|e| e.is_string()))
            .or_else(|| value.get("message"))
            .and_then(|m| m.as_str())
            .map(str::to_string)
    }

    /// Best-effort human readable detail for error envelopes.
    pub fn detail(&self) -> String {
        self.provider_message().unwrap_or_else(|| self.to_string())
    }
}
