// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use quick_submit::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{CsrfTokens, TokenManager},
};
use quick_submit::domain::ids::UserId;

/// テスト用トークン定数（タイポ防止とIDE補完のため）
pub const TEST_TOKEN: &str = "test-token";
/// マネージャー権限を持たないユーザー
pub const OUTSIDER_TOKEN: &str = "outsider-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

/// [`StaticCsrfTokens`] が受け付ける唯一の値
pub const TEST_CSRF_TOKEN: &str = "csrf-ok";

/* -------------------------------- TokenManager -------------------------------- */

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Err(ApplicationError::infrastructure("not implemented"))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let now = super::time::fixed_now();
        match token {
            TEST_TOKEN => Ok(user(1, "manager", now)),
            OUTSIDER_TOKEN => Ok(user(2, "outsider", now)),
            // 期限切れトークンは認証時に拒否する
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

pub fn user(id: i64, username: &str, now: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/* -------------------------------- CsrfTokens -------------------------------- */

/// 固定値のみを有効とする CSRF トークン実装
#[derive(Clone, Debug, Default)]
pub struct StaticCsrfTokens;

impl CsrfTokens for StaticCsrfTokens {
    fn issue(&self, _user_id: UserId) -> String {
        TEST_CSRF_TOKEN.into()
    }

    fn verify(&self, _user_id: UserId, token: &str) -> bool {
        token == TEST_CSRF_TOKEN
    }
}
