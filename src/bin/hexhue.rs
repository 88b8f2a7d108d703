use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hexhue::server::{config::ServerConfig, route_builder};
use hexhue::{adjust_brightness, generate_random_color, is_dark_color, string_to_color};

#[derive(Parser)]
#[command(name = "hexhue", version, about = "Hex color helpers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive a stable color from a string
    Hash { input: String },
    /// Print random colors
    Random {
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
    /// Print whether a color is dark or light
    Dark { color: String },
    /// Lighten (positive) or darken (negative) a color by a percentage
    Adjust {
        color: String,
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexhue=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Hash { input } => println!("{}", string_to_color(&input)?),
        Command::Random { count } => {
            for _ in 0..count {
                println!("{}", generate_random_color());
            }
        }
        Command::Dark { color } => {
            let label = if is_dark_color(&color)? { "dark" } else { "light" };
            println!("{}", label);
        }
        Command::Adjust { color, percent } => {
            println!("{}", adjust_brightness(&color, percent)?)
        }
        Command::Serve { host, port } => {
            let mut config = ServerConfig::from_env()?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            route_builder::serve(&config).await?;
        }
    }

    Ok(())
}
