use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use hammer::Hammer;
use hammer_payload::Protocol;

/// Replays canned HEP or IPFIX records at a collector, as fast or as slow
/// as you ask for.
#[derive(Debug, Parser)]
#[command(name = "hammer", version, about)]
struct Args {
    /// Destination address
    #[arg(long, default_value = "localhost")]
    address: String,

    /// Destination port
    #[arg(long, default_value_t = 9060)]
    port: u16,

    /// Packets per second, split evenly across transports
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..))]
    rate: u32,

    /// Payload protocol, one of HEP, IPFIX
    #[arg(long, default_value = "HEP")]
    protocol: String,

    /// Comma-separated transports from UDP, TCP, TLS
    #[arg(long, default_value = "TLS")]
    transport: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    if args.address.trim().is_empty()
        || args.protocol.trim().is_empty()
        || args.transport.trim().is_empty()
    {
        eprintln!("Invalid flags provided!");
        std::process::exit(1);
    }

    let protocol = Protocol::from_name(&args.protocol);
    let hammer =
        match Hammer::connect(protocol, &args.address, args.port, &args.transport, args.rate).await
        {
            Ok(hammer) => hammer,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        };

    println!(
        "Hammer down {protocol} at {}:{} over {} with {} pps",
        args.address, args.port, args.transport, args.rate
    );

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("interrupt received, shutting down");
                cancel.cancel();
            }
        }
    });

    hammer.run(cancel).await;
}
