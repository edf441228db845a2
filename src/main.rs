use anyhow::{Context, Result};
use clap::Parser;

use starling::{
    arguments::{Cli, Command, TransactionsArgs},
    display,
    logger::{self, LogTag},
    Client, Config,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init(cli.debug, &cli.debug_tags());

    if let Err(e) = run(cli).await {
        logger::error(LogTag::System, &format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    if config.access_token.is_none() {
        logger::warning(
            LogTag::Config,
            "No access token configured, set STARLING_ACCESS_TOKEN or access_token in the config file",
        );
    }

    let client = Client::new(&config).context("Failed to create API client")?;

    match cli.command {
        Command::Transactions(args) => list_transactions(&client, &args).await,
    }
}

async fn list_transactions(client: &Client, args: &TransactionsArgs) -> Result<()> {
    let range = args.date_range();
    let (transactions, _response) = client
        .list_transactions(range.as_ref())
        .await
        .context("Failed to list transactions")?;

    let count = transactions.as_ref().map_or(0, |t| t.len());
    logger::info(LogTag::System, &format!("Fetched {} transactions", count));

    if args.json {
        let json = serde_json::to_string_pretty(&transactions.unwrap_or_default())
            .context("Failed to serialize transactions")?;
        println!("{}", json);
    } else {
        println!("{}", display::render_transactions(transactions.as_ref()));
    }

    Ok(())
}
