use axum::extract::ConnectInfo;
use axum::http::header::{ACCEPT_LANGUAGE, USER_AGENT};
use axum::http::{Extensions, HeaderMap, HeaderName};
use axum::Json;
use kiosk_tools::{ClientInfo, WhoAmI};
use std::net::SocketAddr;

const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

pub async fn whoami_handler(headers: HeaderMap, extensions: Extensions) -> Json<WhoAmI> {
    let header = |name: &HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let client = ClientInfo {
        forwarded_for: header(&X_FORWARDED_FOR),
        peer_ip: extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip()),
        accept_language: header(&ACCEPT_LANGUAGE),
        user_agent: header(&USER_AGENT),
    };

    Json(kiosk_tools::whoami(client))
}
