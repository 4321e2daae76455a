use clap::Parser;
use sentirs::config::cli::{Cli, Command, OutputFormat};
use sentirs::config::file::FileConfig;
use sentirs::utils::logger;
use sentirs::utils::validation::{validate_positive_number, validate_url};
use sentirs::{resolve_credentials, spawn_watch, Result, SentimentClient, TickerSnapshot};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let file_config = match cli.config.as_deref() {
        Some(path) => Some(FileConfig::from_file(path)?),
        None => None,
    };

    let credentials = resolve_credentials(
        cli.token.as_deref(),
        cli.key.as_deref(),
        file_config.as_ref(),
    )?;

    let mut client = SentimentClient::from_provider(&credentials);
    let base_url = cli
        .base_url
        .as_deref()
        .or_else(|| file_config.as_ref().and_then(|f| f.base_url()));
    if let Some(base_url) = base_url {
        validate_url("base_url", base_url)?;
        client = client.with_base_url(base_url);
    }

    match cli.command {
        Command::Parsed { symbol } => {
            let metrics = client.parsed(&symbol).await?;
            match cli.format {
                OutputFormat::Json => print_json(&metrics)?,
                OutputFormat::Csv => print_serialized_csv(&metrics)?,
            }
        }
        Command::Raw { symbol } => {
            let metrics = client.raw(&symbol).await?;
            match cli.format {
                OutputFormat::Json => print_json(&metrics)?,
                OutputFormat::Csv => print_serialized_csv(&metrics)?,
            }
        }
        Command::Quote { symbol, enrich } => {
            let snapshot = client.quote(&symbol, enrich).await?;
            print_snapshots(std::slice::from_ref(&snapshot), cli.format)?;
        }
        Command::Bulk { symbols, enrich } => {
            let snapshots = client.bulk(&symbols, enrich).await?;
            print_snapshots(&snapshots, cli.format)?;
        }
        Command::All { enrich } => {
            tracing::info!("Fetching all covered stocks, this can take a while");
            let snapshots = client.all(enrich).await?;
            print_snapshots(&snapshots, cli.format)?;
        }
        Command::Sort { metric, limit } => {
            validate_positive_number("limit", limit, 1)?;
            let ranked = client.sort(&metric, limit).await?;
            print_snapshots(&ranked, cli.format)?;
        }
        Command::Historical {
            symbol,
            metric,
            start,
            end,
        } => {
            let points = client.historical(&symbol, &metric, start, end).await?;
            match cli.format {
                OutputFormat::Json => print_json(&points)?,
                OutputFormat::Csv => {
                    let mut writer = csv::Writer::from_writer(std::io::stdout());
                    for point in &points {
                        writer.serialize(point)?;
                    }
                    writer.flush()?;
                }
            }
        }
        Command::Supported { symbol } => {
            let supported = client.supported(&symbol).await?;
            println!(
                "{} {} supported.",
                symbol,
                if supported { "is" } else { "is not" }
            );
        }
        Command::Stocks => {
            let stocks = client.all_stocks().await?;
            match cli.format {
                OutputFormat::Json => print_json(&stocks)?,
                OutputFormat::Csv => {
                    for symbol in &stocks {
                        println!("{}", symbol);
                    }
                }
            }
        }
        Command::Account => {
            let info = client.account_info().await?;
            print_json(&info)?;
        }
        Command::Watch { symbols, interval } => {
            validate_positive_number("interval", interval as usize, 1)?;
            let (handle, mut rx) =
                spawn_watch(Arc::new(client), symbols, Duration::from_secs(interval));

            while let Some(update) = rx.recv().await {
                println!("{}", serde_json::to_string(&update)?);
            }
            handle.await.ok();
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// CSV output for flat metric structs, one row with serde-derived headers.
fn print_serialized_csv<T: Serialize>(value: &T) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.serialize(value)?;
    writer.flush()?;
    Ok(())
}

fn print_snapshots(snapshots: &[TickerSnapshot], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&snapshots),
        OutputFormat::Csv => write_snapshots_csv(snapshots, std::io::stdout()),
    }
}

fn write_snapshots_csv<W: std::io::Write>(snapshots: &[TickerSnapshot], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "symbol",
        "rank",
        "sentiment",
        "AHI",
        "RHI",
        "SGP",
        "reddit_comment_mentions",
        "reddit_post_mentions",
        "tweet_mentions",
        "stocktwits_post_mentions",
        "yahoo_finance_comment_mentions",
    ])?;

    for snapshot in snapshots {
        writer.write_record([
            snapshot.symbol.clone().unwrap_or_default(),
            fmt_opt_u32(snapshot.rank),
            fmt_opt(snapshot.sentiment),
            fmt_opt(snapshot.ahi),
            fmt_opt(snapshot.rhi),
            fmt_opt(snapshot.sgp),
            fmt_opt(snapshot.platforms.reddit_comment_mentions),
            fmt_opt(snapshot.platforms.reddit_post_mentions),
            fmt_opt(snapshot.platforms.tweet_mentions),
            fmt_opt(snapshot.platforms.stocktwits_post_mentions),
            fmt_opt(snapshot.platforms.yahoo_finance_comment_mentions),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn fmt_opt_u32(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_csv_rows() {
        let snapshots = vec![
            TickerSnapshot {
                symbol: Some("AMC".to_string()),
                rank: Some(0),
                sentiment: Some(0.708),
                ahi: Some(1.92),
                ..Default::default()
            },
            TickerSnapshot {
                symbol: Some("ET".to_string()),
                rank: Some(1),
                ..Default::default()
            },
        ];

        let mut buf = Vec::new();
        write_snapshots_csv(&snapshots, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("symbol,rank,sentiment,AHI"));
        assert!(lines[1].starts_with("AMC,0,0.708,1.92"));
        assert!(lines[2].starts_with("ET,1,,"));
    }
}
