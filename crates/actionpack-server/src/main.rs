use actionpack_server::AppState;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "actionpack-server", about = "Action pack dispatch server")]
struct Args {
    /// Address to bind the REST API to
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();
    let app_state = AppState::new();
    tracing::info!(packs = ?app_state.dispatcher.pack_names(), "packs registered");

    actionpack_server::serve(app_state, &args.addr).await?;
    Ok(())
}
