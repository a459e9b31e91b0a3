use url::{form_urlencoded, Url};

use super::QueryParams;
use crate::TelebotErr;

pub const TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

/// Parses the API base once, at client construction. Anything that cannot
/// take path segments (e.g. `mailto:`) or is not http(s) is rejected.
pub fn parse_base_url(base: &str) -> Result<Url, TelebotErr> {
    let url = Url::parse(base).map_err(|e| {
        TelebotErr::InitializationError(format!("Invalid API base URL '{base}': {e}"))
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(TelebotErr::InitializationError(format!(
            "Invalid API base URL '{base}': expected an http(s) URL"
        )));
    }

    Ok(url)
}

/// `<base>/bot<token>/<method>?<query>`. Repeated values become repeated
/// pairs. Keys are written in sorted order so equal inputs give equal URLs.
pub fn build_url(base: &Url, token: &str, method: &str, params: &QueryParams) -> String {
    let mut url = base.clone();

    // parse_base_url rejects cannot-be-a-base URLs, so the path is always writable.
    debug_assert!(!url.cannot_be_a_base());
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .push(&format!("bot{token}"))
            .push(method);
    }

    let query = encode_query(params);
    url.set_query(if query.is_empty() { None } else { Some(&query) });

    url.into()
}

pub fn encode_query(params: &QueryParams) -> String {
    let mut keys: Vec<&String> = params.keys().collect();
    keys.sort();

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for key in keys {
        for value in &params[key] {
            serializer.append_pair(key, value);
        }
    }

    serializer.finish()
}
