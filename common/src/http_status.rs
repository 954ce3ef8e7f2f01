//! HTTP status classification for the catalog backend's responses.

/// HTTP status code carried by transport errors.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// Laravel's "page expired" status, returned when the CSRF token is stale.
    pub const SESSION_EXPIRED: u16 = 419;

    /// Returned by the backend for validation failures, including duplicate names.
    pub const UNPROCESSABLE: u16 = 422;

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// The session cookie or CSRF token is no longer accepted.
    ///
    /// Callers must re-run the handshake; nothing in the client does it for them.
    pub fn is_session_expired(&self) -> bool {
        matches!(self.0, 401 | Self::SESSION_EXPIRED)
    }

    /// The request was well-formed but rejected by server-side validation.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self.0, Self::UNPROCESSABLE | 409)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
