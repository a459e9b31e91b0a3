use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;

use crate::{
    log_d,
    networking::{
        http_types::{HttpMethod, NetworkProvider, RequestArgs, Response},
        proxy_config::ProxyConfig,
    },
    TelebotErr,
};

const TAG: &str = "NetworkProviderReqwest";

/// Default transport. Connects directly, or through a SOCKS5 proxy when one
/// is configured.
pub struct NetworkProviderReqwest {
    client: reqwest::Client,
}

impl NetworkProviderReqwest {
    pub fn new(proxy: Option<&ProxyConfig>) -> Result<Self, TelebotErr> {
        let mut builder = reqwest::Client::builder();

        if let Some(proxy) = proxy {
            let proxy = reqwest::Proxy::all(proxy.to_proxy_url()).map_err(|e| {
                TelebotErr::InitializationError(format!(
                    "Invalid proxy address '{}': {e}",
                    proxy.proxy_addr
                ))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            TelebotErr::InitializationError(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self { client })
    }

    fn build_request(&self, method: &HttpMethod, args: &RequestArgs) -> reqwest::RequestBuilder {
        let method = match method {
            HttpMethod::GET => Method::GET,
            HttpMethod::POST => Method::POST,
        };

        let request = self.client.request(method, &args.url);

        // timeout_ms == 0: no deadline
        match args.timeout_ms > 0 {
            true => request.timeout(Duration::from_millis(args.timeout_ms)),
            false => request,
        }
    }
}

#[async_trait]
impl NetworkProvider for NetworkProviderReqwest {
    async fn send(&self, method: &HttpMethod, args: &RequestArgs) -> Response {
        let request = self.build_request(method, args);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                return Response {
                    status_code: 0,
                    data: None,
                    error: Some(get_error_message(e)),
                }
            }
        };

        let status_code = response.status().as_u16();
        log_d!(TAG, "{} {} -> {}", method, args.url, status_code);

        match response.bytes().await {
            Ok(bytes) => Response {
                status_code,
                data: Some(bytes.to_vec()),
                error: None,
            },
            Err(e) => Response {
                status_code,
                data: None,
                error: Some(get_error_message(e)),
            },
        }
    }
}

fn get_error_message(error: reqwest::Error) -> String {
    let mut error_message = error.to_string();

    if error.is_timeout() {
        error_message.push_str(". Timed out");
    } else if error.is_connect() {
        error_message.push_str(". Connection failed");
    }

    if let Some(status) = error.status() {
        error_message.push_str(&format!(". Status: {status}"));
    }

    error_message
}
