// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use crate::domain::ids::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}

/// Anti-forgery tokens bound to a user.
pub trait CsrfTokens: Send + Sync {
    fn issue(&self, user_id: UserId) -> String;
    fn verify(&self, user_id: UserId, token: &str) -> bool;
}
