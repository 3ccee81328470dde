mod cli;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use driftchat_client::{Chat, ExchangeStatus, HttpTransport, ReplySink};
use tokio::io::AsyncBufReadExt;

fn flush() {
    let _ = std::io::stdout().flush();
}

/// Renders exchange progress on stdout.
#[derive(Default)]
struct TerminalSink {
    streaming: bool,
}

impl ReplySink for TerminalSink {
    fn awaiting(&mut self, visible: bool) {
        if visible {
            self.streaming = false;
            print!("assistant is typing\u{2026}");
        } else if !self.streaming {
            // Nothing was rendered; wipe the indicator line.
            print!("\r\x1b[2K");
        }
        flush();
    }

    fn delta(&mut self, text: &str) {
        if !self.streaming {
            // First data: the indicator gives way to the reply.
            print!("\r\x1b[2K");
            self.streaming = true;
        }
        print!("{text}");
        flush();
    }

    fn settled(&mut self, status: &ExchangeStatus) {
        if self.streaming {
            println!();
        }
        if let ExchangeStatus::Failed { error } = status {
            println!("error: {error}");
        }
        flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the rendered reply.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut chat = Chat::new(HttpTransport::new(&cli.server));
    let mut sink = TerminalSink::default();

    println!("Hi \u{2014} I am your assistant. Ask me anything.");
    println!("(/clear resets the history, ctrl-d quits)");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        flush();
        let Some(line) = lines.next_line().await? else {
            break;
        };

        if line.trim() == "/clear" {
            chat.session_mut().clear();
            println!("history cleared");
            continue;
        }

        chat.send(&line, &mut sink).await;
    }

    Ok(())
}
