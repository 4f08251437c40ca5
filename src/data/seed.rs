use anyhow::{Context, Result, ensure};
use chrono::{Duration, Utc};
use rand::Rng;

use crate::config::{FEED, constants::CHART_POINTS};
use crate::models::{Asset, ChartPoint};

const SEED_ASSETS_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/seed_data/assets.json"
));

/// Load the embedded seed list and synthesize each asset's trailing-week
/// chart (the seed file carries metadata only, history is generated fresh
/// per session).
pub fn seed_assets() -> Result<Vec<Asset>> {
    let mut assets: Vec<Asset> =
        serde_json::from_str(SEED_ASSETS_JSON).context("parsing embedded seed asset list")?;

    ensure!(!assets.is_empty(), "seed asset list is empty");

    let mut rng = rand::rng();
    for asset in &mut assets {
        asset.chart_data = synthesize_week(asset.price, &mut rng);
    }

    Ok(assets)
}

/// Build CHART_POINTS daily points ending today, each a jittered take on the
/// seed price. A flat seed price (stablecoins) stays flat: jitter scales
/// with the price, so 1.0 wanders by fractions of a cent at most.
fn synthesize_week(seed_price: f64, rng: &mut impl Rng) -> Vec<ChartPoint> {
    let today = Utc::now().date_naive();
    let jitter = FEED.chart_seed_jitter;

    (0..CHART_POINTS)
        .map(|i| {
            let days_back = (CHART_POINTS - 1 - i) as i64;
            ChartPoint {
                date: today - Duration::days(days_back),
                price: seed_price * (1.0 + rng.random_range(-jitter..jitter)),
                volume: None,
                market_cap: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_assets_parse() {
        let assets = seed_assets().expect("embedded seed data must parse");
        assert_eq!(assets.len(), 5);

        let ids: Vec<&str> = assets.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["bitcoin", "ethereum", "tether", "binance-coin", "solana"]
        );

        // Uncapped supplies survive the round trip as None.
        let ethereum = &assets[1];
        assert_eq!(ethereum.max_supply, None);
        let bitcoin = &assets[0];
        assert_eq!(bitcoin.max_supply, Some(21_000_000.0));
    }

    #[test]
    fn test_chart_history_shape() {
        let assets = seed_assets().unwrap();

        for asset in &assets {
            assert_eq!(asset.chart_data.len(), CHART_POINTS);

            // Oldest first, strictly one day apart, ending today.
            for pair in asset.chart_data.windows(2) {
                assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
            }
            assert_eq!(
                asset.chart_data.last().unwrap().date,
                Utc::now().date_naive()
            );

            // Jitter keeps history near the seed price.
            for point in &asset.chart_data {
                assert!(point.price >= asset.price * 0.95);
                assert!(point.price <= asset.price * 1.05);
            }
        }
    }
}
