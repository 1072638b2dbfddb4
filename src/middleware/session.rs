use axum::{
    extract::Request,
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Cookie holding the browser's session ID
pub const SESSION_COOKIE: &str = "mr_session";

/// Identifies one browser session; handlers receive it as an extension
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Finds a valid session cookie among the request's `Cookie` headers
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .flat_map(|h| h.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .filter(|(name, _)| *name == SESSION_COOKIE)
            .find_map(|(_, value)| Uuid::parse_str(value).ok())
            .map(SessionId)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Attaches a `SessionId` to every request, issuing a cookie for new sessions.
pub async fn session_middleware(mut request: Request, next: Next) -> Response {
    let (session_id, is_new) = match SessionId::from_headers(request.headers()) {
        Some(id) => (id, false),
        None => (SessionId::new(), true),
    };

    request.extensions_mut().insert(session_id);

    let mut response = next.run(request).await;

    if is_new {
        tracing::debug!(session_id = %session_id, "New session");
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, session_id);
        if let Ok(header_value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, header_value);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_from_cookie_header() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {}={}", SESSION_COOKIE, id)).unwrap(),
        );

        assert_eq!(SessionId::from_headers(&headers), Some(SessionId(id)));
    }

    #[test]
    fn test_invalid_session_cookie_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("mr_session=not-a-uuid"));

        assert_eq!(SessionId::from_headers(&headers), None);
    }

    #[test]
    fn test_missing_cookie_header() {
        assert_eq!(SessionId::from_headers(&HeaderMap::new()), None);
    }
}
