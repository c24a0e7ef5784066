mod server;

use clap::Parser;

/// Static asset server for the visualization front-end.
#[derive(Debug, Parser)]
#[command(name = "modring-serve")]
struct Args {
    /// Listen address.
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: String,

    /// Directory of static assets to serve.
    #[arg(long, default_value = "web")]
    dir: String,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = server::serve(&args.addr, &args.dir).await {
        log::error!("server error: {}", e);
        std::process::exit(1);
    }
}
