use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};

use timetable::{create_router, AppState, Config, Schedule};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt().with_max_level(config.log_level).init();

    // The program is read once and shared by every request
    let schedule = match Schedule::load(&config) {
        Ok(schedule) => schedule,
        Err(e) => {
            error!("Failed to load schedule: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let bind_addr = config.bind_addr.clone();
    let app = create_router(AppState::new(schedule, config));

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", bind_addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Server is running on http://{}", bind_addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
