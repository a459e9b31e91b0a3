use std::fmt;

type RequestUrl = String;

/// Failure of a single request. The URL is kept verbatim so callers can see
/// exactly what was requested; anything written to the output logger goes
/// through `sanitize_bot_token` first.
#[derive(PartialEq, Debug, Clone)]
pub enum NetworkError {
    /// DNS, connect, proxy handshake, timeout, or reading the body failed.
    RequestFailed(RequestUrl, String),
    /// The server answered with something other than `200 OK`.
    UnexpectedStatus(RequestUrl, u16, String),
}

impl NetworkError {
    pub fn name(&self) -> &'static str {
        match self {
            NetworkError::RequestFailed(_, _) => "RequestFailed",
            NetworkError::UnexpectedStatus(_, _, _) => "UnexpectedStatus",
        }
    }

    pub fn url(&self) -> &str {
        match self {
            NetworkError::RequestFailed(url, _) | NetworkError::UnexpectedStatus(url, _, _) => url,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            NetworkError::RequestFailed(_, _) => None,
            NetworkError::UnexpectedStatus(_, status, _) => Some(*status),
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::RequestFailed(url, message) => {
                write!(f, "RequestFailed: {url} {message}")
            }
            NetworkError::UnexpectedStatus(url, status, reason) => {
                write!(f, "Status {status} {reason} returned from {url}")
            }
        }
    }
}

impl std::error::Error for NetworkError {}

pub(crate) fn get_reason_for_status(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP Error {status}"))
}
