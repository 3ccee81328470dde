use clap::Parser;

/// Terminal chat over a DriftChat relay.
#[derive(Parser, Debug)]
#[command(name = "driftchat", version, about)]
pub struct Cli {
    /// Relay server URL
    #[arg(long, default_value = "http://localhost:3000")]
    pub server: String,
}
