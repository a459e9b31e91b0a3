use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::networking::api_url::{build_url, parse_base_url, TELEGRAM_BASE_URL};
use crate::networking::providers::NetworkProviderReqwest;
use crate::networking::proxy_config::ProxyConfig;
use crate::networking::{HttpMethod, NetworkClient, NetworkProvider, QueryParams};
use crate::output_logger::initialize_output_logger;
use crate::telegram_types::{
    BoolResponse, GetChatResponse, GetMeResponse, GetUpdatesResponse, SendMessageResponse,
};
use crate::{log_d, TelebotErr, TelebotOptions};

const TAG: &str = stringify!(Telebot);

/// Telegram Bot API client. Every call is independent: build the URL, send
/// one request, check the status, decode the body. Nothing is retried.
pub struct Telebot {
    token: String,
    api_url: Url,
    network: NetworkClient,
    pub options: Arc<TelebotOptions>,
}

impl Telebot {
    /// Fails with [`TelebotErr::InitializationError`] when the API base URL
    /// or the proxy address cannot be used. No client exists in that case.
    pub fn new(token: &str, options: Option<Arc<TelebotOptions>>) -> Result<Self, TelebotErr> {
        let options = options.unwrap_or_default();

        initialize_output_logger(
            &options.output_log_level,
            options.output_logger_provider.clone(),
        );

        let api_url = parse_base_url(options.api_url.as_deref().unwrap_or(TELEGRAM_BASE_URL))?;

        let net_provider: Arc<dyn NetworkProvider> = match &options.network_provider {
            Some(provider) => provider.clone(),
            None => Arc::new(NetworkProviderReqwest::new(options.proxy.as_ref())?),
        };

        log_d!(
            TAG,
            "Initialized for {} (proxy: {})",
            api_url,
            options.proxy.is_some()
        );

        Ok(Telebot {
            token: token.to_string(),
            api_url,
            network: NetworkClient::new(net_provider, options.timeout_ms),
            options,
        })
    }

    /// Routes every request through the SOCKS5 proxy at `proxy_addr`
    /// (`host:port`). Empty `username` and `password` disable proxy auth.
    pub fn with_proxy(
        token: &str,
        proxy_addr: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, TelebotErr> {
        let options = TelebotOptions {
            proxy: Some(ProxyConfig::new(proxy_addr, username, password)),
            ..TelebotOptions::new()
        };
        Self::new(token, Some(Arc::new(options)))
    }

    pub fn uses_proxy(&self) -> bool {
        self.options.proxy.is_some()
    }

    pub fn proxy_config(&self) -> Option<&ProxyConfig> {
        self.options.proxy.as_ref()
    }

    pub fn build_url(&self, api_method: &str, params: &QueryParams) -> String {
        build_url(&self.api_url, &self.token, api_method, params)
    }

    /// Decodes the response into `target`. `None` is rejected before any
    /// request is made. On error `target` is left untouched.
    pub async fn call_into<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        api_method: &str,
        params: &QueryParams,
        target: Option<&mut T>,
    ) -> Result<(), TelebotErr> {
        let Some(target) = target else {
            return Err(TelebotErr::InvalidArgument(
                "target must be a non-null mutable reference".to_string(),
            ));
        };

        *target = self.call(method, api_method, params).await?;
        Ok(())
    }

    pub async fn call<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        api_method: &str,
        params: &QueryParams,
    ) -> Result<T, TelebotErr> {
        if api_method.is_empty() {
            return Err(TelebotErr::InvalidArgument(
                "API method name must not be empty".to_string(),
            ));
        }

        let url = self.build_url(api_method, params);
        let body = self.network.make_request(method, url).await?;

        serde_json::from_slice::<T>(&body).map_err(|e| {
            TelebotErr::JsonParseError(std::any::type_name::<T>().to_string(), e.to_string())
        })
    }

    // Fixed bindings. Telegram accepts GET for all of them.

    pub async fn get_me(&self) -> Result<GetMeResponse, TelebotErr> {
        self.call(HttpMethod::GET, "getMe", &QueryParams::new()).await
    }

    pub async fn get_updates(
        &self,
        params: &QueryParams,
    ) -> Result<GetUpdatesResponse, TelebotErr> {
        self.call(HttpMethod::GET, "getUpdates", params).await
    }

    pub async fn send_message(
        &self,
        params: &QueryParams,
    ) -> Result<SendMessageResponse, TelebotErr> {
        self.call(HttpMethod::GET, "sendMessage", params).await
    }

    pub async fn get_chat(&self, params: &QueryParams) -> Result<GetChatResponse, TelebotErr> {
        self.call(HttpMethod::GET, "getChat", params).await
    }

    pub async fn delete_message(&self, params: &QueryParams) -> Result<BoolResponse, TelebotErr> {
        self.call(HttpMethod::GET, "deleteMessage", params).await
    }
}

impl fmt::Debug for Telebot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Telebot")
            .field("token", &"*****")
            .field("api_url", &self.api_url.as_str())
            .field("options", &self.options)
            .finish()
    }
}
