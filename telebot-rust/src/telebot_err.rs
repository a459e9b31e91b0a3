use crate::networking::network_error::NetworkError;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum TelebotErr {
    // Caller
    InvalidArgument(String),

    // Initialization
    InitializationError(String),

    // Network
    NetworkError(NetworkError),

    // Data Format / Parsing
    JsonParseError(String, String),

    // Telegram reported `"ok": false`
    ApiError(Option<i64>, String),
}

impl Display for TelebotErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TelebotErr::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),

            TelebotErr::InitializationError(msg) => write!(f, "Initialization Error: {msg}"),

            TelebotErr::NetworkError(error) => write!(f, "NetworkError|{error}"),

            TelebotErr::JsonParseError(type_name, err_msg) => {
                write!(f, "Failed to parse JSON {type_name} - {err_msg}")
            }

            TelebotErr::ApiError(Some(code), description) => {
                write!(f, "Telegram API error {code}: {description}")
            }
            TelebotErr::ApiError(None, description) => {
                write!(f, "Telegram API error: {description}")
            }
        }
    }
}

impl std::error::Error for TelebotErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelebotErr::NetworkError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NetworkError> for TelebotErr {
    fn from(error: NetworkError) -> Self {
        TelebotErr::NetworkError(error)
    }
}

impl TelebotErr {
    pub fn name(&self) -> &'static str {
        match self {
            TelebotErr::InvalidArgument(_) => "InvalidArgument",
            TelebotErr::InitializationError(_) => "InitializationError",
            TelebotErr::NetworkError(e) => e.name(),
            TelebotErr::JsonParseError(_, _) => "JsonParseError",
            TelebotErr::ApiError(_, _) => "ApiError",
        }
    }
}
