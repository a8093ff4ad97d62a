//! One-shot notices carried across a redirect in an encrypted cookie.

use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Error,
}

impl FlashCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashCategory::Success => "success",
            FlashCategory::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Error,
            message: message.into(),
        }
    }

    /// Queue this message for the next rendered page.
    pub fn set(self, jar: PrivateCookieJar) -> PrivateCookieJar {
        match serde_json::to_string(&self) {
            Ok(value) => jar.add(
                Cookie::build((FLASH_COOKIE, value))
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax),
            ),
            Err(e) => {
                tracing::warn!("Could not encode flash message: {}", e);
                jar
            }
        }
    }

    /// Remove and return the pending message, if any. A cookie that fails to
    /// decrypt is ignored; one that fails to decode is still cleared.
    pub fn take(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<Flash>) {
        let Some(cookie) = jar.get(FLASH_COOKIE) else {
            return (jar, None);
        };

        let flash = serde_json::from_str(cookie.value()).ok();
        let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
        (jar, flash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Key;

    fn empty_jar() -> PrivateCookieJar {
        PrivateCookieJar::new(Key::from(&[7u8; 64][..]))
    }

    #[test]
    fn test_take_returns_queued_message() {
        let jar = Flash::success("Mensagem enviada").set(empty_jar());
        let (_jar, flash) = Flash::take(jar);
        assert_eq!(flash, Some(Flash::success("Mensagem enviada")));
    }

    #[test]
    fn test_take_on_empty_jar() {
        let (_jar, flash) = Flash::take(empty_jar());
        assert!(flash.is_none());
    }

    #[test]
    fn test_take_clears_message() {
        let jar = Flash::error("Erro").set(empty_jar());
        let (jar, first) = Flash::take(jar);
        assert_eq!(first.map(|f| f.category), Some(FlashCategory::Error));

        let (_jar, second) = Flash::take(jar);
        assert!(second.is_none());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(FlashCategory::Success.as_str(), "success");
        assert_eq!(FlashCategory::Error.as_str(), "error");
    }
}
