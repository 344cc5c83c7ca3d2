//! Cookie builders for access and refresh tokens.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the access token.
pub const INK_ACCESS_TOKEN: &str = "ink_access_token";

/// Cookie name for the refresh token.
pub const INK_REFRESH_TOKEN: &str = "ink_refresh_token";

/// Access-token JWT lifetime in seconds (4 hours).
pub const ACCESS_TOKEN_EXP: u64 = 14400;

/// Refresh-token JWT lifetime and cookie Max-Age for both tokens, in seconds (7 days).
pub const REFRESH_TOKEN_EXP: u64 = 604800;

/// Refresh cookie is only sent to the token endpoint.
const REFRESH_TOKEN_PATH: &str = "/auth/token";

fn token_cookie(
    name: &'static str,
    value: String,
    path: &'static str,
    domain: &str,
    max_age: Duration,
) -> Cookie<'static> {
    let mut builder = Cookie::build((name, value))
        .path(path)
        .max_age(max_age)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax);
    // An empty domain yields a host-only cookie (local development).
    if !domain.is_empty() {
        builder = builder.domain(domain.to_owned());
    }
    builder.build()
}

/// Set the access-token cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use ink_auth_types::cookie::{set_access_token_cookie, INK_ACCESS_TOKEN};
///
/// let jar = set_access_token_cookie(CookieJar::new(), "token_value".to_string(), "example.com");
/// let cookie = jar.get(INK_ACCESS_TOKEN).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.domain(), Some("example.com"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(604800)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_access_token_cookie(jar: CookieJar, value: String, domain: &str) -> CookieJar {
    jar.add(token_cookie(
        INK_ACCESS_TOKEN,
        value,
        "/",
        domain,
        Duration::seconds(REFRESH_TOKEN_EXP as i64),
    ))
}

/// Set the refresh-token cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use ink_auth_types::cookie::{set_refresh_token_cookie, INK_REFRESH_TOKEN};
///
/// let jar = set_refresh_token_cookie(CookieJar::new(), "refresh_value".to_string(), "example.com");
/// let cookie = jar.get(INK_REFRESH_TOKEN).unwrap();
/// assert_eq!(cookie.path(), Some("/auth/token"));
/// assert!(cookie.http_only().unwrap_or(false));
/// ```
pub fn set_refresh_token_cookie(jar: CookieJar, value: String, domain: &str) -> CookieJar {
    jar.add(token_cookie(
        INK_REFRESH_TOKEN,
        value,
        REFRESH_TOKEN_PATH,
        domain,
        Duration::seconds(REFRESH_TOKEN_EXP as i64),
    ))
}

/// Clear both token cookies by setting Max-Age to 0.
pub fn clear_cookies(jar: CookieJar, domain: &str) -> CookieJar {
    let access = token_cookie(INK_ACCESS_TOKEN, String::new(), "/", domain, Duration::ZERO);
    let refresh = token_cookie(
        INK_REFRESH_TOKEN,
        String::new(),
        REFRESH_TOKEN_PATH,
        domain,
        Duration::ZERO,
    );
    jar.add(access).add(refresh)
}
