use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use telebot_rust::networking::{HttpMethod, NetworkProvider, RequestArgs, Response};

/// Answers every request with the same canned response and records what
/// it was asked to send.
pub struct MockNetworkProvider {
    pub status_code: u16,
    pub body: String,
    calls: AtomicUsize,
    requests: Mutex<Vec<(HttpMethod, String)>>,
}

impl MockNetworkProvider {
    pub fn new(status_code: u16, body: &str) -> Self {
        Self {
            status_code,
            body: body.to_string(),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn times_called(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|(_, url)| url.clone())
            .collect()
    }

    pub fn requested_methods(&self) -> Vec<HttpMethod> {
        self.requests.lock().iter().map(|(m, _)| *m).collect()
    }
}

#[async_trait]
impl NetworkProvider for MockNetworkProvider {
    async fn send(&self, method: &HttpMethod, args: &RequestArgs) -> Response {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push((*method, args.url.clone()));

        Response {
            status_code: self.status_code,
            data: Some(self.body.as_bytes().to_vec()),
            error: None,
        }
    }
}
