mod config;
mod error;
mod options;
mod port;
mod server;
mod types;

use clap::{Parser, ValueEnum};

use config::Config;
use error::ServerError;
use server::Server;

/// Configure a server with a builder or with functional options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address the server would bind to
    #[arg(long, default_value = "localhost")]
    addr: String,
    /// Requested port: omit for the default, 0 to have one allocated
    #[arg(long, env = "PORT", allow_negative_numbers = true)]
    port: Option<i32>,
    /// Which idiom to run; both when omitted
    #[arg(long, value_enum)]
    idiom: Option<Idiom>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Idiom {
    Builder,
    Options,
}

fn init_logs() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, fmt, registry};

    let _ = registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("{}=debug", env!("CARGO_CRATE_NAME")).into()
        }))
        .with(fmt::layer().with_ansi(cfg!(debug_assertions)))
        .try_init();
}

fn with_builder(addr: &str, port: Option<i32>) -> Result<Server, ServerError> {
    let mut builder = Config::builder();
    if let Some(port) = port {
        builder = builder.port(port);
    }
    let config = builder.build()?;
    Server::new(addr, &config)
}

fn with_options(addr: &str, port: Option<i32>) -> Result<Server, ServerError> {
    let opts: Vec<_> = port.into_iter().map(options::with_port).collect();
    options::new_server(addr, opts)
}

fn main() -> Result<(), ServerError> {
    init_logs();
    let args = Args::parse();

    if !matches!(args.idiom, Some(Idiom::Options)) {
        let server = with_builder(&args.addr, args.port)?;
        tracing::info!("builder: {}", server.bind_addr());
    }
    if !matches!(args.idiom, Some(Idiom::Builder)) {
        let server = with_options(&args.addr, args.port)?;
        tracing::info!("options: {}", server.bind_addr());
    }

    Ok(())
}
