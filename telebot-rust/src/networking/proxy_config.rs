use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// RFC 3986 userinfo: keep unreserved characters, encode everything else.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SOCKS5_SCHEME: &str = "socks5h";

#[derive(Clone, PartialEq)]
pub struct ProxyAuth {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for ProxyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyAuth")
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}

/// SOCKS5 proxy every request is tunnelled through.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfig {
    pub proxy_addr: String, // host:port
    pub proxy_auth: Option<ProxyAuth>,
}

impl ProxyConfig {
    /// An empty username together with an empty password means the proxy
    /// takes no authentication.
    #[must_use]
    pub fn new(proxy_addr: &str, username: &str, password: &str) -> Self {
        let proxy_auth = if username.is_empty() && password.is_empty() {
            None
        } else {
            Some(ProxyAuth {
                username: username.to_string(),
                password: password.to_string(),
            })
        };

        Self {
            proxy_addr: proxy_addr.to_string(),
            proxy_auth,
        }
    }

    #[must_use]
    pub fn without_auth(proxy_addr: &str) -> Self {
        Self::new(proxy_addr, "", "")
    }

    pub fn has_auth(&self) -> bool {
        self.proxy_auth.is_some()
    }

    /// Proxy URL in the form the HTTP client expects. Host names are
    /// resolved by the proxy, not locally.
    pub fn to_proxy_url(&self) -> String {
        match &self.proxy_auth {
            Some(auth) => format!(
                "{SOCKS5_SCHEME}://{}:{}@{}",
                utf8_percent_encode(&auth.username, USERINFO),
                utf8_percent_encode(&auth.password, USERINFO),
                self.proxy_addr
            ),
            None => format!("{SOCKS5_SCHEME}://{}", self.proxy_addr),
        }
    }
}
