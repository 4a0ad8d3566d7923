// src/bin/issue_token.rs
use anyhow::{Context, Result, bail};
use quick_submit::application::{dto::TokenSubject, ports::security::TokenManager};
use quick_submit::config::AppConfig;
use quick_submit::domain::ids::UserId;
use quick_submit::infrastructure::security::token::BiscuitTokenManager;
use std::env;

/// Mints a bearer token for an existing user: `issue_token <user-id> <username>`.
#[tokio::main]
async fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let (Some(user_id), Some(username)) = (args.next(), args.next()) else {
        bail!("usage: issue_token <user-id> <username>");
    };
    let user_id = UserId::new(user_id.parse().context("user id must be an integer")?)?;

    let config = AppConfig::from_env()?;
    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let issued = manager.issue(TokenSubject { user_id, username }).await?;

    println!("{}", issued.token);
    eprintln!("expires at {} ({}s)", issued.expires_at, issued.expires_in);
    Ok(())
}
