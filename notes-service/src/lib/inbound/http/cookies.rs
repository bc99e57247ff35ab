use auth::jwt::ACCESS_TOKEN_MINUTES;
use auth::jwt::REFRESH_TOKEN_DAYS;
use auth::TokenPair;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::cookie::SameSite;
use time::Duration;
use time::OffsetDateTime;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Builds the HTTP-only session cookies carrying the token pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionCookies {
    secure: bool,
}

impl SessionCookies {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Add both session cookies, lifetimes matching the token lifetimes.
    pub fn issue(&self, jar: CookieJar, pair: TokenPair) -> CookieJar {
        jar.add(self.cookie(
            ACCESS_TOKEN_COOKIE,
            pair.access_token,
            Duration::minutes(ACCESS_TOKEN_MINUTES),
        ))
        .add(self.cookie(
            REFRESH_TOKEN_COOKIE,
            pair.refresh_token,
            Duration::days(REFRESH_TOKEN_DAYS),
        ))
    }

    /// Overwrite both session cookies with empty values expiring at the epoch.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.add(self.expired(ACCESS_TOKEN_COOKIE))
            .add(self.expired(REFRESH_TOKEN_COOKIE))
    }

    fn cookie(&self, name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(max_age)
            .build()
    }

    fn expired(&self, name: &'static str) -> Cookie<'static> {
        Cookie::build((name, ""))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .expires(OffsetDateTime::UNIX_EPOCH)
            .build()
    }
}
