// server/src/identity.rs

//! Per-request identity extraction.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest};

/// Access-token cookie set by the external session provider.
const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// The caller's identity token, or `None` for an anonymous shopper.
///
/// The token is read fresh on every request and only transported: the
/// catalog attaches it to the data-store query so row-level visibility is
/// evaluated externally. Nothing here validates or caches it, which keeps
/// short-lived tokens fresh for the duration of exactly one call.
#[derive(Debug, Clone, Default)]
pub struct RequestIdentity(Option<String>);

impl RequestIdentity {
  pub fn token(&self) -> Option<&str> {
    self.0.as_deref()
  }

  fn from_http_request(req: &HttpRequest) -> Self {
    let bearer = req
      .headers()
      .get(AUTHORIZATION)
      .and_then(|value| value.to_str().ok())
      .and_then(|value| value.strip_prefix("Bearer "))
      .map(|token| token.trim().to_owned())
      .filter(|token| !token.is_empty());

    let token = bearer.or_else(|| {
      req
        .cookie(ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_owned())
        .filter(|token| !token.is_empty())
    });

    RequestIdentity(token)
  }
}

impl FromRequest for RequestIdentity {
  type Error = actix_web::Error;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(Ok(Self::from_http_request(req)))
  }
}
