//! Client address extraction
//!
//! The provider binds signed links to the address the patron connects from.
//! A fronting proxy reports it in `X-Forwarded-For`; otherwise the socket
//! peer is the patron.

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, HeaderMap},
};

use super::AppError;

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Address of the patron making the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub IpAddr);

/// First address listed in `X-Forwarded-For`, if it parses
fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get(X_FORWARDED_FOR)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .and_then(|ip| ip.parse().ok())
}

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(ip) = forwarded_for(&parts.headers) {
            return Ok(Self(ip));
        }

        parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ci| Self(ci.0.ip()))
            .ok_or_else(|| AppError::bad_request("Client address unavailable"))
    }
}
