use anyhow::Result;
use chatbot_prep::cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chatbot_prep=info")),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
