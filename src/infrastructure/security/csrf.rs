// src/infrastructure/security/csrf.rs
use crate::application::ports::security::CsrfTokens;
use crate::domain::ids::UserId;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Stateless anti-forgery tokens: `<nonce>.<HMAC-SHA256(user id, nonce)>`.
#[derive(Clone)]
pub struct HmacCsrfTokens {
    secret: Vec<u8>,
}

impl HmacCsrfTokens {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn mac(&self, user_id: UserId, nonce: &str) -> HmacSha256 {
        // HMAC accepts keys of any length
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .unwrap_or_else(|_| unreachable!("hmac key length is unrestricted"));
        mac.update(user_id.to_string().as_bytes());
        mac.update(b":");
        mac.update(nonce.as_bytes());
        mac
    }
}

impl CsrfTokens for HmacCsrfTokens {
    fn issue(&self, user_id: UserId) -> String {
        let nonce = uuid::Uuid::new_v4().simple().to_string();
        let signature = self.mac(user_id, &nonce).finalize().into_bytes();
        format!("{nonce}.{}", URL_SAFE_NO_PAD.encode(signature))
    }

    fn verify(&self, user_id: UserId, token: &str) -> bool {
        let Some((nonce, signature)) = token.trim().split_once('.') else {
            return false;
        };
        let Ok(signature) = URL_SAFE_NO_PAD.decode(signature) else {
            return false;
        };
        self.mac(user_id, nonce).verify_slice(&signature).is_ok()
    }
}
