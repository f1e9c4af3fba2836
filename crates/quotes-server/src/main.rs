use quotes_server::config::ServerConfig;
use quotes_server::logging::init_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[FATAL] Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(config.env) {
        eprintln!("[FATAL] {:#}", e);
        std::process::exit(1);
    }

    info!("Starting Quotes Server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Config loaded: env={:?}, bind={}, shutdown_grace={:?}",
        config.env,
        config.bind_address(),
        config.shutdown_grace()
    );

    if let Err(e) = quotes_server::run(config).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}
