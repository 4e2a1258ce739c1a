use actix_web::{web, App, HttpServer};
use geoposts::config::db::DbProfile;
use geoposts::config::server::ServerConfig;
use geoposts::infra::state::build_state;
use geoposts::middleware::cors::cors_middleware;
use geoposts::middleware::request_trace::RequestTrace;
use geoposts::middleware::structured_logger::StructuredLogger;
use geoposts::middleware::trace_span::TraceSpan;
use geoposts::routes;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from the process environment (docker env_file,
    // or `set -a; . ./.env; set +a` locally).
    let server = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Invalid server configuration: {e}");
            std::process::exit(1);
        }
    };
    let profile = match DbProfile::from_env() {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("❌ Invalid database configuration: {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_db(profile.clone()).build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(host = %server.host, port = server.port, db = ?profile, "server.starting");

    let data = web::Data::new(app_state);
    let timeout = server.request_timeout;

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .client_request_timeout(timeout)
    .client_disconnect_timeout(timeout)
    .keep_alive(timeout)
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
