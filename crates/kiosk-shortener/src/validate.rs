use kiosk_core::ShortenerError;
use std::fmt::{Display, Formatter};
use tracing::debug;
use url::Url;

/// How strictly candidate URLs are checked before they are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlValidation {
    /// The URL must parse as an absolute `http`/`https` URL with a host.
    #[default]
    Syntax,
    /// Like [`UrlValidation::Syntax`], and the host must resolve to at least one address.
    Resolve,
}

impl Display for UrlValidation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlValidation::Syntax => write!(f, "syntax"),
            UrlValidation::Resolve => write!(f, "resolve"),
        }
    }
}

impl UrlValidation {
    /// Checks `raw`, returning the parsed URL on success.
    pub async fn check(self, raw: &str) -> Result<Url, ShortenerError> {
        let url = parse_http_url(raw)?;

        if self == UrlValidation::Resolve {
            resolve_host(&url).await?;
        }

        Ok(url)
    }
}

fn parse_http_url(raw: &str) -> Result<Url, ShortenerError> {
    if raw.trim().is_empty() {
        return Err(ShortenerError::InvalidUrl("URL cannot be empty".to_string()));
    }

    let url = Url::parse(raw).map_err(|e| ShortenerError::InvalidUrl(format!("{raw}: {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL scheme must be http or https: {other}"
            )))
        }
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(ShortenerError::InvalidUrl(format!(
            "URL must have a host: {raw}"
        ))),
    }
}

async fn resolve_host(url: &Url) -> Result<(), ShortenerError> {
    // `parse_http_url` guarantees both of these for http(s) URLs.
    let host = url.host_str().unwrap_or_default();
    let port = url.port_or_known_default().unwrap_or(80);

    // IPv6 literals come back bracketed from `host_str`.
    let host = host.trim_start_matches('[').trim_end_matches(']');

    let mut addrs = tokio::net::lookup_host((host, port)).await.map_err(|e| {
        debug!(host, error = %e, "host lookup failed");
        ShortenerError::InvalidUrl(format!("host does not resolve: {host}"))
    })?;

    if addrs.next().is_none() {
        return Err(ShortenerError::InvalidUrl(format!(
            "host has no addresses: {host}"
        )));
    }

    Ok(())
}
