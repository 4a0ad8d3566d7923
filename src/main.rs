use anyhow::Result;
use quick_submit::application::services::{Adapters, ApplicationServices, Repositories};
use quick_submit::config::AppConfig;
use quick_submit::infrastructure::{
    database,
    repositories::{
        PostgresCategoryRepository, PostgresChapterRepository, PostgresDoiSettingsRepository,
        PostgresPressRepository, PostgresPublicationRepository, PostgresSeriesRepository,
        PostgresStageAssignmentRepository, PostgresSubmissionRepository,
        PostgresTemporaryFileRepository, PostgresUserGroupRepository,
    },
    search::PostgresSearchIndex,
    security::{csrf::HmacCsrfTokens, token::BiscuitTokenManager},
    storage::{LocalPublicFileStore, LocalTemporaryFileStore},
    time::SystemClock,
};
use quick_submit::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// URL prefix under which the public files directory is served.
const PUBLIC_FILES_URL: &str = "/public";

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let repos = Repositories {
        presses: Arc::new(PostgresPressRepository::new(pool.clone())),
        submissions: Arc::new(PostgresSubmissionRepository::new(pool.clone())),
        publications: Arc::new(PostgresPublicationRepository::new(pool.clone())),
        chapters: Arc::new(PostgresChapterRepository::new(pool.clone())),
        series: Arc::new(PostgresSeriesRepository::new(pool.clone())),
        categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        user_groups: Arc::new(PostgresUserGroupRepository::new(pool.clone())),
        stage_assignments: Arc::new(PostgresStageAssignmentRepository::new(pool.clone())),
        temporary_files: Arc::new(PostgresTemporaryFileRepository::new(pool.clone())),
        doi_settings: Arc::new(PostgresDoiSettingsRepository::new(pool.clone())),
    };

    let adapters = Adapters {
        token_manager: Arc::new(BiscuitTokenManager::new(
            config.biscuit_private_key(),
            config.token_ttl(),
        )?),
        csrf_tokens: Arc::new(HmacCsrfTokens::new(config.csrf_secret())),
        public_files: Arc::new(LocalPublicFileStore::new(
            config.public_files_dir().clone(),
            PUBLIC_FILES_URL,
        )),
        temporary_store: Arc::new(LocalTemporaryFileStore::new(config.temporary_files_dir().clone())),
        search_index: Arc::new(PostgresSearchIndex::new(pool.clone())),
        clock: Arc::new(SystemClock),
    };

    let services = Arc::new(ApplicationServices::new(repos, adapters));
    let state = HttpState {
        services,
        max_upload_bytes: config.max_upload_bytes(),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
