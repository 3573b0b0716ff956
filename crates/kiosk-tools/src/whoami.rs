use serde::Serialize;
use std::net::IpAddr;

/// What the gateway knows about the caller of a request.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    /// Raw `X-Forwarded-For` header.
    pub forwarded_for: Option<String>,
    /// Address of the socket peer.
    pub peer_ip: Option<IpAddr>,
    /// Raw `Accept-Language` header.
    pub accept_language: Option<String>,
    /// Raw `User-Agent` header.
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhoAmI {
    pub ipaddress: Option<String>,
    pub language: Option<String>,
    pub software: Option<String>,
}

/// Echoes the caller's address, language and user agent.
///
/// The address is the left-most `X-Forwarded-For` entry when there is one,
/// otherwise the peer address.
pub fn whoami(client: ClientInfo) -> WhoAmI {
    let forwarded = client
        .forwarded_for
        .as_deref()
        .and_then(|header| header.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string);

    WhoAmI {
        ipaddress: forwarded.or_else(|| client.peer_ip.map(|ip| ip.to_string())),
        language: client.accept_language,
        software: client.user_agent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn prefers_first_forwarded_address() {
        let info = ClientInfo {
            forwarded_for: Some(" 203.0.113.7 , 10.0.0.1".to_string()),
            peer_ip: Some(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            accept_language: Some("en-US,en;q=0.9".to_string()),
            user_agent: Some("curl/8.0".to_string()),
        };

        assert_eq!(
            whoami(info),
            WhoAmI {
                ipaddress: Some("203.0.113.7".to_string()),
                language: Some("en-US,en;q=0.9".to_string()),
                software: Some("curl/8.0".to_string()),
            }
        );
    }

    #[test]
    fn falls_back_to_peer_address() {
        let info = ClientInfo {
            forwarded_for: Some("".to_string()),
            peer_ip: Some(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))),
            ..Default::default()
        };
        assert_eq!(whoami(info).ipaddress.as_deref(), Some("192.0.2.1"));
    }

    #[test]
    fn missing_headers_serialize_as_null() {
        let json = serde_json::to_value(whoami(ClientInfo::default())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"ipaddress": null, "language": null, "software": null})
        );
    }
}
