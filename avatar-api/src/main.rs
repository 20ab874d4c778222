use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod adapters;
mod app_state;
mod config;
mod domain;
mod factory;
mod router;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "avatar_api=debug,reqres=debug,tower_http=debug".into()),
        )
        .with(fmt::layer().with_timer(fmt::time::LocalTime::rfc_3339()))
        .init();

    let settings = config::read_config()?;

    let connection_pool = PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy_with(settings.database.with_db());

    sqlx::migrate!().run(&connection_pool).await?;
    tracing::info!("database migrations applied");

    let app_state = factory::build_app_state(connection_pool, &settings).await?;
    let app = router::create(app_state);

    let address = format!("{}:{}", settings.application.host, settings.application.port);
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
