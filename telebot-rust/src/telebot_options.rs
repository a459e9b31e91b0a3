use crate::networking::proxy_config::ProxyConfig;
use crate::networking::NetworkProvider;
use crate::output_logger::{LogLevel, OutputLogProvider};
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct TelebotOptions {
    pub api_url: Option<String>, // defaults to https://api.telegram.org
    pub proxy: Option<ProxyConfig>,
    pub timeout_ms: Option<u64>,

    pub output_log_level: Option<LogLevel>,
    pub output_logger_provider: Option<Arc<dyn OutputLogProvider>>,

    pub network_provider: Option<Arc<dyn NetworkProvider>>, // replaces the reqwest transport, proxy is then ignored
}

impl TelebotOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> TelebotOptionsBuilder {
        TelebotOptionsBuilder::default()
    }
}

#[derive(Default)]
pub struct TelebotOptionsBuilder {
    inner: TelebotOptions,
}

impl TelebotOptionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Transport

    #[must_use]
    pub fn api_url(mut self, api_url: Option<String>) -> Self {
        self.inner.api_url = api_url;
        self
    }

    #[must_use]
    pub fn proxy(mut self, proxy: Option<ProxyConfig>) -> Self {
        self.inner.proxy = proxy;
        self
    }

    #[must_use]
    pub fn timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.inner.timeout_ms = timeout_ms;
        self
    }

    #[must_use]
    pub fn network_provider(mut self, network_provider: Option<Arc<dyn NetworkProvider>>) -> Self {
        self.inner.network_provider = network_provider;
        self
    }

    // Logging

    #[must_use]
    pub fn output_log_level(mut self, output_log_level: Option<LogLevel>) -> Self {
        self.inner.output_log_level = output_log_level;
        self
    }

    #[must_use]
    pub fn output_logger_provider(
        mut self,
        output_logger_provider: Option<Arc<dyn OutputLogProvider>>,
    ) -> Self {
        self.inner.output_logger_provider = output_logger_provider;
        self
    }

    #[must_use]
    pub fn build(self) -> TelebotOptions {
        self.inner
    }
}

impl fmt::Debug for TelebotOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelebotOptions")
            .field("api_url", &self.api_url)
            .field("proxy", &self.proxy)
            .field("timeout_ms", &self.timeout_ms)
            .field("output_log_level", &self.output_log_level)
            .field(
                "output_logger_provider",
                &self.output_logger_provider.as_ref().map(|_| "<provider>"),
            )
            .field(
                "network_provider",
                &self.network_provider.as_ref().map(|_| "<provider>"),
            )
            .finish()
    }
}
