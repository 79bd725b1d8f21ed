use anyhow::Result;
use clap::Parser;
use krishi_sahayi::{app::ChatApp, models::Config, server};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "krishi-sahayi")]
#[command(about = "Agricultural assistant chat API backed by Gemini")]
struct CliArgs {
    /// Address to listen on, overriding KRISHI_BIND (e.g. 127.0.0.1:8080).
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let mut config = Config::from_env();
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting krishi-sahayi");

    let app = ChatApp::from_config(&config);

    if let Err(e) = server::serve(app, &config).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn test_bind_override_parses() {
        let args = CliArgs::parse_from(["krishi-sahayi", "--bind", "127.0.0.1:8080"]);
        assert_eq!(args.bind.as_deref(), Some("127.0.0.1:8080"));
    }

    #[test]
    fn test_bind_is_optional() {
        let args = CliArgs::parse_from(["krishi-sahayi"]);
        assert!(args.bind.is_none());
    }
}
