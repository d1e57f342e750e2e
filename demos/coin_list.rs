//! Load the coin list through the view-model, then lay out a week of Bitcoin
//! prices as a chart frame.
//!
//! Run with:
//! ```bash
//! RUST_LOG=crypto_tracker=debug cargo run --example coin_list
//! ```
//!
//! `COINCAP_API_URL` (read from the environment or a `.env` file) overrides
//! the API base URL.

use std::env;
use std::error::Error;

use chrono::{Duration, Utc};
use futures_util::StreamExt;
use tracing_subscriber::EnvFilter;

use crypto_tracker::prelude::*;
use crypto_tracker::presentation::chart::Size;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("crypto_tracker=info".parse()?))
        .with_target(true)
        .init();

    let base_url = env::var("COINCAP_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let client = Arc::new(CoinCapClient::builder().base_url(&base_url).build()?);

    // ── Coin list ────────────────────────────────────────────────────────
    let view_model = CoinListViewModel::new(Arc::clone(&client) as Arc<dyn CoinDataSource>);
    let mut events = view_model.events();
    let mut subscription = view_model.subscribe();

    let state = loop {
        tokio::select! {
            Some(state) = subscription.next() => {
                if !state.is_loading {
                    break state;
                }
                println!("Loading coins...");
            }
            Some(CoinListEvent::Error(error)) = events.next() => {
                eprintln!("Could not load coins: {error}");
                return Ok(());
            }
        }
    };

    for coin in state.coins.iter().take(10) {
        println!(
            "{:>3}  {:<6} {:<16} {:>16} {:>10}  {:>12}",
            coin.rank,
            coin.symbol,
            coin.name,
            coin.price_label(),
            coin.change_label(),
            coin.market_cap_label(),
        );
    }
    drop(subscription);

    // ── Chart ────────────────────────────────────────────────────────────
    let end = Utc::now();
    let start = end - Duration::days(7);
    let prices = match client.get_coin_history("bitcoin", start, end).await {
        Ok(prices) => prices,
        Err(error) => {
            eprintln!("Could not load history: {error}");
            return Ok(());
        }
    };

    let data_points: Vec<DataPoint> = prices.iter().map(DataPoint::from).collect();
    let last = data_points.len().saturating_sub(1);
    let first_visible = last.saturating_sub(6);
    let mut chart = LineChart::new(data_points, ChartStyle::default(), first_visible..=last, "$")
        .with_selected(Some(last))
        .on_x_label_width_change(|width| println!("x label width: {width:.1}"));

    let frame = chart.render(Size::new(1000.0, 400.0), &MonospaceMeasurer::default());
    println!(
        "viewport {:?}, {} points, {} y labels",
        frame.viewport,
        frame.points.len(),
        frame.y_labels.len()
    );
    for label in &frame.y_labels {
        println!("  {}", label.text);
    }
    if let Some(value) = &frame.value_label {
        println!("selected: {}", value.text);
    }

    Ok(())
}
