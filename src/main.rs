mod auth;
mod board_cli;
mod config;
mod error;
mod handlers;
mod label;
mod label_registry;
mod router;
mod site_config;
mod state;
mod storage;
mod ticket;

use config::Config;
use state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str());

    match command {
        Some("board") => {
            let once = args.iter().any(|a| a == "--once");
            board_cli::run(once).await;
        }
        Some("serve") | None => serve().await,
        Some(other) => {
            eprintln!("unknown command: {other}");
            eprintln!("usage: studio-desk [serve|board [--once]]");
            std::process::exit(1);
        }
    }
}

async fn serve() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "studio_desk=info".into()),
        )
        .init();

    let config = Config::from_env().expect("invalid configuration");
    let addr = format!("{}:{}", config.host, config.port);

    info!(
        data_dir = %config.data_dir.display(),
        "studio-desk listening on {addr}"
    );

    let state = AppState::new(&config);
    let app = router::build(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server error");
}
