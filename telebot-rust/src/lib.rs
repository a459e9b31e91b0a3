//! Minimal Telegram Bot API client.
//!
//! Builds `https://api.telegram.org/bot<token>/<method>?<query>` URLs, sends
//! them directly or through a SOCKS5 proxy, and decodes the JSON answer into
//! any `serde::de::DeserializeOwned` type.

pub use networking::proxy_config::{ProxyAuth, ProxyConfig};
pub use networking::{HttpMethod, NetworkError, NetworkProvider, QueryParams, QueryParamsBuilder};
pub use telebot::Telebot;
pub use telebot_err::TelebotErr;
pub use telebot_options::{TelebotOptions, TelebotOptionsBuilder};
pub use telegram_types::*;

pub mod logging_utils;
pub mod networking;
pub mod output_logger;
pub mod telegram_types;

mod telebot;
mod telebot_err;
mod telebot_options;
