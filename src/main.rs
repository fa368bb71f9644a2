mod article;
mod card;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod feed;
mod filter;
mod http;
mod landscape;
mod logging;
mod output;
mod pagination;
mod resolver;
mod source;
mod tui;

#[cfg(test)]
mod test_support;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
