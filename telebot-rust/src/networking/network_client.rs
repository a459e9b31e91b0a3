use std::sync::Arc;

use super::network_error::get_reason_for_status;
use super::{HttpMethod, NetworkError, NetworkProvider, RequestArgs};
use crate::log_d;

const TAG: &str = stringify!(NetworkClient);
const SUCCESS_STATUS: u16 = 200;

/// Issues exactly one request per call through the configured provider and
/// turns the raw outcome into a body or a [`NetworkError`].
pub struct NetworkClient {
    net_provider: Arc<dyn NetworkProvider>,
    timeout_ms: u64,
}

impl NetworkClient {
    #[must_use]
    pub fn new(net_provider: Arc<dyn NetworkProvider>, timeout_ms: Option<u64>) -> Self {
        NetworkClient {
            net_provider,
            timeout_ms: timeout_ms.unwrap_or_default(),
        }
    }

    pub async fn make_request(
        &self,
        method: HttpMethod,
        url: String,
    ) -> Result<Vec<u8>, NetworkError> {
        let request_args = RequestArgs {
            url,
            timeout_ms: self.timeout_ms,
        };

        log_d!(TAG, "Sending {} {}", method, request_args.url);
        let response = self.net_provider.send(&method, &request_args).await;

        if let Some(error) = response.error {
            return Err(NetworkError::RequestFailed(request_args.url, error));
        }

        let status = response.status_code;
        if status != SUCCESS_STATUS {
            return Err(NetworkError::UnexpectedStatus(
                request_args.url,
                status,
                get_reason_for_status(status),
            ));
        }

        Ok(response.data.unwrap_or_default())
    }
}
