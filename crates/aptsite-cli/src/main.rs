mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "aptsite-cli")]
#[command(about = "Render the pricing/FAQ page and its structured data from a gateway")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch pricing and FAQ through the gateway and write the rendered page
    Render {
        /// Root URL of the proxy gateway (the `/api/data` path is appended)
        #[arg(long, env = "APTSITE_GATEWAY_URL")]
        gateway_url: String,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// Page title
        #[arg(long, default_value = render::DEFAULT_TITLE)]
        title: String,
        /// Request timeout in seconds
        #[arg(long, default_value_t = 15)]
        timeout_secs: u64,
    },
    /// Print the JSON-LD documents the page would publish
    Schema {
        /// Root URL of the proxy gateway (the `/api/data` path is appended)
        #[arg(long, env = "APTSITE_GATEWAY_URL")]
        gateway_url: String,
        /// Request timeout in seconds
        #[arg(long, default_value_t = 15)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(std::env::var("APTSITE_LOG_LEVEL").unwrap_or_else(|_| "warn".into()))
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            gateway_url,
            out,
            title,
            timeout_secs,
        } => {
            let page = render::render_page(&gateway_url, &title, timeout_secs).await?;
            render::write_page(&page, out.as_deref())?;
        }
        Commands::Schema {
            gateway_url,
            timeout_secs,
        } => {
            let docs = render::schema_documents(&gateway_url, timeout_secs).await?;
            println!("{docs}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
