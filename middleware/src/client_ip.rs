use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{HeaderMap, Request, Response, header::FORWARDED},
    middleware::Next,
};
use forwarded_header_value::{ForwardedHeaderValue, Identifier};

/// Stores the resolved client address as an `Option<IpAddr>` request extension.
pub async fn mw_client_ip(mut request: Request<Body>, next: Next) -> Response<Body> {
    let ip = client_ip(&request);
    request.extensions_mut().insert(ip);
    next.run(request).await
}

/// The remotest `for=` of the `Forwarded` header, falling back to the TCP peer.
pub fn client_ip<B>(request: &Request<B>) -> Option<IpAddr> {
    forwarded_for(request.headers()).or_else(|| {
        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(peer)| peer.ip())
    })
}

fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    let value = headers.get(FORWARDED)?.to_str().ok()?;
    let forwarded = ForwardedHeaderValue::from_str(value).ok()?;

    // `into_remotest` pops the last stanza, i.e. the nearest proxy
    match forwarded.remotest().forwarded_for.as_ref()? {
        Identifier::SocketAddr(addr) => Some(addr.ip()),
        Identifier::IpAddr(ip) => Some(*ip),
        _ => None,
    }
}
