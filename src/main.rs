use holocron::server::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = startup::init_tracing() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::connect_to_database(&config).await {
        tracing::error!("Failed to prepare catalog database: {}", e);
        std::process::exit(1);
    }
}
