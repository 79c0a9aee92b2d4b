use std::env;

use linguaquest::database::init;
use linguaquest::model::AppState;
use linguaquest::services::sync;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = env::var("DATABASE_URL").expect("Expected DATABASE_URL in the environment.");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Error connecting to the database.");

    init::run_migrations(&pool)
        .await
        .expect("Error running database migrations.");

    let app = AppState::new(pool);

    tokio::select! {
        result = sync::run_listener(app.clone()) => {
            if let Err(err) = result {
                tracing::error!(error = %err, "profile listener stopped");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutting down");
        }
    }
}
