use std::fs::File;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use nt_core::config::{ADMIN_SECRET_ENV, DEFAULT_SECRET_HEADER, ENDPOINT_ENV, SECRET_HEADER_ENV};
use nt_core::ProviderConfig;
use nt_web::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod dashboard;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse AI-generated news summaries", long_about = None)]
pub struct Cli {
    #[arg(long, env = "NT_PROVIDER", default_value = "hasura", help = "Summary provider. Available: hasura (default), memory")]
    provider: String,
    #[arg(long, env = ENDPOINT_ENV)]
    endpoint_url: Option<String>,
    #[arg(long, env = ADMIN_SECRET_ENV, hide_env_values = true)]
    admin_secret: Option<String>,
    #[arg(long, env = SECRET_HEADER_ENV, default_value = DEFAULT_SECRET_HEADER)]
    secret_header: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Browse summaries in the terminal
    Tui {
        /// Write logs here while the dashboard owns the terminal
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
    /// Serve the dashboard as HTML
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

impl Cli {
    fn provider_config(&self) -> nt_core::Result<Option<ProviderConfig>> {
        match (&self.endpoint_url, &self.admin_secret) {
            (Some(url), Some(secret)) => Ok(Some(
                ProviderConfig::new(url, secret.clone())?.with_secret_header(self.secret_header.clone()),
            )),
            (None, None) => Ok(None),
            (Some(_), None) => Err(nt_core::Error::Config(format!("{} is required", ADMIN_SECRET_ENV))),
            (None, Some(_)) => Err(nt_core::Error::Config(format!("{} is required", ENDPOINT_ENV))),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Tui { log_file: Some(path) } => {
            let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        Commands::Tui { log_file: None } => {}
        Commands::Serve { .. } => {
            tracing_subscriber::fmt().with_env_filter(env_filter()).init();
        }
    }

    let config = cli.provider_config()?;
    let provider = nt_provider::create_provider(&cli.provider, config)?;
    info!("📡 Summary provider initialized (using {})", provider.name());

    match cli.command {
        Commands::Tui { .. } => dashboard::run(provider).await?,
        Commands::Serve { addr } => {
            let app = nt_web::create_app(AppState { provider });
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding {}", addr))?;
            info!("🌐 Serving dashboard on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_provider_config_from_flags() {
        let cli = parse(&[
            "nt",
            "--endpoint-url",
            "https://example.test/v1/graphql",
            "--admin-secret",
            "s",
            "--secret-header",
            "x-api-key",
            "serve",
        ]);
        let config = cli.provider_config().unwrap().unwrap();
        assert_eq!(config.endpoint_url.as_str(), "https://example.test/v1/graphql");
        assert_eq!(config.secret_header, "x-api-key");
        assert!(matches!(cli.command, Commands::Serve { .. }));
    }

    fn cli(endpoint_url: Option<&str>, admin_secret: Option<&str>) -> Cli {
        Cli {
            provider: "hasura".to_string(),
            endpoint_url: endpoint_url.map(str::to_string),
            admin_secret: admin_secret.map(str::to_string),
            secret_header: DEFAULT_SECRET_HEADER.to_string(),
            command: Commands::Tui { log_file: None },
        }
    }

    #[test]
    fn test_partial_provider_config_is_rejected() {
        let missing_secret = cli(Some("https://example.test/v1/graphql"), None).provider_config();
        assert!(matches!(missing_secret, Err(nt_core::Error::Config(ref m)) if m.contains(ADMIN_SECRET_ENV)));

        let missing_endpoint = cli(None, Some("s")).provider_config();
        assert!(matches!(missing_endpoint, Err(nt_core::Error::Config(ref m)) if m.contains(ENDPOINT_ENV)));

        assert!(cli(None, None).provider_config().unwrap().is_none());
    }

    #[test]
    fn test_memory_provider_needs_no_config() {
        let cli = parse(&["nt", "--provider", "memory", "tui"]);
        assert_eq!(cli.provider, "memory");
        assert!(matches!(cli.command, Commands::Tui { log_file: None }));
    }
}
