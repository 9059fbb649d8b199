//! Auth Middleware
//!
//! Bearer-token guard for protected routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use kernel::identity::CurrentUser;

use crate::application::AccessTokenService;
use crate::error::{AuthError, AuthResult};

/// Middleware that requires `Authorization: Bearer <token>`
///
/// On success the caller is available to handlers as
/// `Extension<CurrentUser>`.
pub async fn require_access_token(
    State(tokens): State<Arc<AccessTokenService>>,
    mut req: Request,
    next: Next,
) -> AuthResult<Response> {
    let token = bearer_token(req.headers())?;
    let user_id = tokens.verify(token)?;

    tracing::debug!(user_id = %user_id, "Access token accepted");
    req.extensions_mut().insert(CurrentUser::new(user_id));

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> AuthResult<&str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedHeader)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedHeader);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
        assert_eq!(bearer_token(&headers("bearer   abc ")).unwrap(), "abc");
    }

    #[test]
    fn test_missing_and_malformed() {
        assert!(matches!(
            bearer_token(&HeaderMap::new()),
            Err(AuthError::MissingToken)
        ));
        assert!(matches!(
            bearer_token(&headers("Basic dXNlcjpwYXNz")),
            Err(AuthError::MalformedHeader)
        ));
        assert!(matches!(
            bearer_token(&headers("Bearer")),
            Err(AuthError::MalformedHeader)
        ));
        assert!(matches!(
            bearer_token(&headers("Bearer    ")),
            Err(AuthError::MalformedHeader)
        ));
    }
}
