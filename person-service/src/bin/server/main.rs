use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use person_service::config::Config;
use person_service::config::StoreMode;
use person_service::domain::person::ports::PersonServicePort;
use person_service::domain::person::service::PersonService;
use person_service::inbound::http::policy::AccessPolicy;
use person_service::inbound::http::router::create_router;
use person_service::outbound::repositories::MemoryPersonRepository;
use person_service::outbound::repositories::PostgresPersonRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "person_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "person-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        store_mode = ?config.store.mode,
        token_expiration_days = config.jwt.expiration_days,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_days,
    ));
    let policy = Arc::new(AccessPolicy::standard());

    let person_service: Arc<dyn PersonServicePort> = match config.store.mode {
        StoreMode::Memory => {
            tracing::info!(store = "memory", "Using ephemeral credential store");
            Arc::new(PersonService::new(Arc::new(MemoryPersonRepository::new())))
        }
        StoreMode::Postgres => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&config.database.url)
                .await?;
            tracing::info!(
                max_connections = 5,
                store = "postgres",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(store = "postgres", "Database migrations completed");

            Arc::new(PersonService::new(Arc::new(PostgresPersonRepository::new(
                pg_pool,
                config.database.max_retries,
                Duration::from_millis(config.database.retry_delay_ms),
            ))))
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(person_service, authenticator, policy);
    axum::serve(http_listener, application).await?;

    Ok(())
}
