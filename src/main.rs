use std::sync::{Arc, Mutex};
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use concierge::config::AppConfig;
use concierge::db;
use concierge::models::HotelConfig;
use concierge::services::conversation::Assistant;
use concierge::services::identity::supabase::SupabaseIdentity;
use concierge::services::identity::{AnonymousIdentity, IdentityProvider};
use concierge::services::rooms::sqlite::SqliteRooms;
use concierge::services::rooms::supabase::SupabaseRooms;
use concierge::services::rooms::RoomsProvider;
use concierge::services::sessions::SessionStore;
use concierge::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let hotel = HotelConfig::load(config.hotel_config_path.as_deref())?;
    tracing::info!("serving as {} ({} room types)", hotel.name, hotel.rooms.len());

    let rooms: Arc<dyn RoomsProvider> = match config.rooms_backend.as_str() {
        "supabase" => {
            anyhow::ensure!(
                config.supabase_configured(),
                "SUPABASE_URL and SUPABASE_ANON_KEY must be set when ROOMS_BACKEND=supabase"
            );
            tracing::info!("using Supabase rooms backend (url: {})", config.supabase_url);
            Arc::new(SupabaseRooms::new(
                config.supabase_url.clone(),
                config.supabase_anon_key.clone(),
            ))
        }
        _ => {
            tracing::info!("using SQLite rooms backend (path: {})", config.database_url);
            let conn = db::init_db(&config.database_url)?;
            Arc::new(SqliteRooms::new(Arc::new(Mutex::new(conn))))
        }
    };

    let identity: Box<dyn IdentityProvider> = if config.supabase_configured() {
        Box::new(SupabaseIdentity::new(
            config.supabase_url.clone(),
            config.supabase_anon_key.clone(),
        ))
    } else {
        tracing::warn!("Supabase not configured, every guest is treated as signed out");
        Box::new(AnonymousIdentity)
    };

    let assistant = Assistant::new(
        hotel,
        Arc::clone(&rooms),
        Duration::from_secs(config.rooms_fetch_timeout_secs),
    );

    let state = Arc::new(AppState {
        sessions: SessionStore::new(config.session_ttl_minutes),
        config: config.clone(),
        assistant,
        rooms,
        identity,
    });

    let app = concierge::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
