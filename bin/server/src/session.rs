//! Session identity via signed cookies.
//!
//! The session identifier is an opaque ULID carried in a server-signed
//! cookie. There is no server-side session table: the identifier is the
//! only state the client holds, and the conversation it keys lives in the
//! injected store.

use crate::config::SessionConfig;
use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use muse_core::SessionId;
use time::Duration;

/// Session cookie name.
pub const SESSION_COOKIE: &str = "session";

/// Returns the session identifier from the jar, if a valid signed cookie
/// is present.
#[must_use]
pub fn session_id(jar: &SignedCookieJar) -> Option<SessionId> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
}

/// Returns the request's session identifier, minting a fresh one (and
/// adding its cookie to the jar) when the request carried none.
///
/// The jar must be returned with the response for a new cookie to reach
/// the client.
#[must_use]
pub fn establish(jar: SignedCookieJar, config: &SessionConfig) -> (SignedCookieJar, SessionId) {
    if let Some(id) = session_id(&jar) {
        return (jar, id);
    }

    let id = SessionId::new();
    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(config.duration_days));

    tracing::debug!(session_id = %id, "minted new session");
    (jar.add(cookie), id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Key;

    fn test_config() -> SessionConfig {
        SessionConfig {
            duration_days: 7,
            secure_cookies: false,
        }
    }

    #[test]
    fn establish_mints_id_for_empty_jar() {
        let jar = SignedCookieJar::new(Key::generate());
        let (jar, id) = establish(jar, &test_config());

        let cookie = jar.get(SESSION_COOKIE).expect("cookie set");
        let parsed: SessionId = cookie.value().parse().expect("valid id");
        assert_eq!(parsed, id);
    }

    #[test]
    fn establish_reuses_existing_id() {
        let jar = SignedCookieJar::new(Key::generate());
        let (jar, first) = establish(jar, &test_config());
        let (_, second) = establish(jar, &test_config());
        assert_eq!(first, second);
    }

    #[test]
    fn cookie_attributes() {
        let jar = SignedCookieJar::new(Key::generate());
        let (jar, _) = establish(jar, &test_config());

        let cookie = jar.get(SESSION_COOKIE).expect("cookie set");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }
}
