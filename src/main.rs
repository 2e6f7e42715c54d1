use std::{path::Path, sync::Arc, time::Duration};

use clap::Parser;
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use showcase_api::{
    ShowcaseServer, UsageMetrics,
    config::{ServerConfig, ServerConfigValidator, load_config, load_or_default},
    metrics,
    ports::HttpServer,
    tracing_setup,
    utils::GracefulShutdown,
};

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    #[clap(subcommand)]
    command: Option<Commands>,

    #[clap(short, long, default_value = "showcase.toml")]
    config: String,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Validate configuration file
    Validate {
        /// Configuration file to validate
        #[clap(short, long, default_value = "showcase.toml")]
        config: String,
    },
    /// Initialize a new configuration file
    Init {
        /// Output path for the new config file
        #[clap(short, long, default_value = "showcase.toml")]
        config: String,
    },
    /// Start the API server (default)
    Serve {
        /// Configuration file to use; defaults apply when it does not exist
        #[clap(short, long, default_value = "showcase.toml")]
        config: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    match args.command {
        Some(Commands::Validate { config }) => validate_config_command(&config).await,
        Some(Commands::Init { config }) => init_config_command(&config).await,
        Some(Commands::Serve { config }) => serve_command(&config).await,
        None => serve_command(&args.config).await,
    }
}

async fn serve_command(config_path: &str) -> Result<()> {
    let config: ServerConfig = load_or_default(config_path)
        .await
        .with_context(|| format!("Failed to load configuration from {config_path}"))?;

    ServerConfigValidator::validate(&config)
        .map_err(|e| eyre!("Invalid configuration in {config_path}: {e}"))?;

    tracing_setup::init_from_config(&config.logging)
        .map_err(|e| eyre!("Failed to initialize tracing: {}", e))?;

    metrics::init_metrics().map_err(|e| eyre!("Failed to initialize metrics: {}", e))?;

    let usage = Arc::new(UsageMetrics::record_start());
    let shutdown = Arc::new(GracefulShutdown::with_timeout(Duration::from_secs(
        config.shutdown_timeout_secs,
    )));

    let signal_handler_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = signal_handler_shutdown.run_signal_handler().await {
            tracing::error!("Signal handler error: {}", e);
        }
    });

    tracing::info!(
        "Starting Showcase API on {} ({} {})",
        config.listen_addr,
        config.showcase.framework,
        config.showcase.framework_version
    );

    ShowcaseServer::new(Arc::new(config), usage, shutdown)
        .run()
        .await
        .context("Server error")?;

    tracing::info!("Showcase API stopped");
    Ok(())
}

/// Validate configuration file and exit
async fn validate_config_command(config_path: &str) -> Result<()> {
    println!("🔍 Validating configuration file: {config_path}");

    if !Path::new(config_path).exists() {
        eprintln!("❌ Error: Configuration file '{config_path}' not found");
        std::process::exit(1);
    }

    let config = match load_config(config_path).await {
        Ok(config) => {
            println!("✅ Configuration parsing: OK");
            config
        }
        Err(e) => {
            eprintln!("❌ Configuration parsing failed:");
            eprintln!("   {e:#}");
            std::process::exit(1);
        }
    };

    match ServerConfigValidator::validate(&config) {
        Ok(()) => {
            println!("✅ Configuration validation: OK");
            println!();
            println!("📋 Configuration Summary:");
            println!("   • Listen Address: {}", config.listen_addr);
            println!("   • Log Level: {}", config.logging.level);
            println!("   • Log Format: {:?}", config.logging.format);
            println!(
                "   • Framework: {} {}",
                config.showcase.framework, config.showcase.framework_version
            );
            println!("   • Shutdown Timeout: {}s", config.shutdown_timeout_secs);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Configuration validation failed:");
            eprintln!("{e}");
            println!();
            println!("💡 Common fixes:");
            println!("   • Verify listen address format (e.g., '127.0.0.1:8000')");
            println!("   • Use a valid log level such as 'info' or 'showcase_api=debug'");
            std::process::exit(1);
        }
    }
}

/// Initialize a new configuration file
async fn init_config_command(config_path: &str) -> Result<()> {
    let path = Path::new(config_path);
    if path.exists() {
        eprintln!("❌ Error: Configuration file '{config_path}' already exists");
        std::process::exit(1);
    }

    let default_config = r#"# Showcase API Configuration

# The address to listen on
listen_addr = "127.0.0.1:8000"

# Seconds to wait for open connections after SIGINT/SIGTERM
shutdown_timeout_secs = 30

[logging]
# EnvFilter directive; RUST_LOG overrides it
level = "info"
# "pretty" or "json"
format = "pretty"

[showcase]
framework = "Axum"
framework_version = "0.8"
"#;

    tokio::fs::write(path, default_config)
        .await
        .context("Failed to write config file")?;
    println!("✅ Created default configuration at: {config_path}");
    println!("   Run 'showcase serve --config {config_path}' to start the server");
    Ok(())
}
