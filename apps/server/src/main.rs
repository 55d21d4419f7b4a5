use actix_web::{web, App, HttpServer};
use belote_server::state::AppState;
use belote_server::{telemetry, ws};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();
    dotenvy::dotenv().ok();

    let port: u16 = std::env::var("APP_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3001);

    let app_state = AppState::new();
    tracing::info!(port, "starting belote server");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .route("/ws", web::get().to(ws::session::upgrade))
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
