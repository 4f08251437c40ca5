use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use rand::Rng;

use crate::config::{FEED, FeedConfig};
use crate::models::Asset;

#[cfg(debug_assertions)]
use crate::config::DF;

/// One feed tick: a fresh record for every seeded asset.
pub type FeedBatch = Vec<Asset>;

/// Handle returned by [`PriceFeedSimulator::subscribe`].
///
/// Holds the receiving end of this subscriber's broadcast channel. Keep the
/// id around to unsubscribe; dropping the whole subscription also works, the
/// dead sender is pruned on the next tick.
pub struct FeedSubscription {
    pub id: u64,
    pub rx: Receiver<FeedBatch>,
}

struct SubscriberEntry {
    id: u64,
    tx: Sender<FeedBatch>,
}

struct FeedWorker {
    handle: JoinHandle<()>,
    shutdown_tx: Sender<()>,
}

/// Simulated market feed.
///
/// Owns a background thread that perturbs the seed assets on a fixed cadence
/// and broadcasts the batch to every registered subscriber. Constructed and
/// owned by whoever consumes it; there is no hidden global instance.
/// `start` is idempotent per instance, so only one worker ever runs.
pub struct PriceFeedSimulator {
    config: FeedConfig,
    subscribers: Arc<Mutex<Vec<SubscriberEntry>>>,
    worker: Mutex<Option<FeedWorker>>,
    next_subscriber_id: AtomicU64,
}

impl PriceFeedSimulator {
    pub fn new() -> Self {
        Self::with_config(FEED)
    }

    pub fn with_config(config: FeedConfig) -> Self {
        Self {
            config,
            subscribers: Arc::new(Mutex::new(Vec::new())),
            worker: Mutex::new(None),
            next_subscriber_id: AtomicU64::new(1),
        }
    }

    /// Register a new subscriber and hand back its receiving end.
    pub fn subscribe(&self) -> FeedSubscription {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = crossbeam_channel::unbounded();

        let mut subs = self.subscribers.lock().unwrap();
        subs.push(SubscriberEntry { id, tx });

        #[cfg(debug_assertions)]
        if DF.log_feed_subscribers {
            log::info!("feed: subscriber #{} added ({} total)", id, subs.len());
        }

        FeedSubscription { id, rx }
    }

    /// Remove a subscriber. Unknown ids are a no-op.
    pub fn unsubscribe(&self, id: u64) {
        let mut subs = self.subscribers.lock().unwrap();
        let _before = subs.len();
        subs.retain(|entry| entry.id != id);

        #[cfg(debug_assertions)]
        if DF.log_feed_subscribers && subs.len() != _before {
            log::info!("feed: subscriber #{} removed ({} left)", id, subs.len());
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }

    /// Spawn the worker thread if it is not already running.
    ///
    /// Each tick derives a fresh batch from `seeds` (the perturbation is
    /// always relative to the seed values, so prices wander around the seed
    /// rather than drifting off). The first batch lands one full interval
    /// after start, matching a plain repeating timer.
    pub fn start(&self, seeds: Vec<Asset>) {
        let mut slot = self.worker.lock().unwrap();
        if slot.is_some() {
            log::debug!("feed: start requested while already running; ignoring");
            return;
        }

        let (shutdown_tx, shutdown_rx) = crossbeam_channel::bounded::<()>(1);
        let subscribers = Arc::clone(&self.subscribers);
        let tick = self.config.tick_interval;
        let price_jitter = self.config.price_jitter;
        let change_span = self.config.change_span;
        let volume_jitter = self.config.volume_jitter;

        let handle = thread::spawn(move || {
            let mut rng = rand::rng();
            log::info!(
                "feed: worker started, {} assets every {:?} (thread {:?})",
                seeds.len(),
                tick,
                thread::current().id()
            );

            loop {
                match shutdown_rx.recv_timeout(tick) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {}
                }

                let batch: FeedBatch = seeds
                    .iter()
                    .map(|seed| {
                        perturb_asset(seed, price_jitter, change_span, volume_jitter, &mut rng)
                    })
                    .collect();

                #[cfg(debug_assertions)]
                if DF.log_feed_ticks {
                    log::info!("feed: tick with {} records", batch.len());
                }

                // Best-effort broadcast: a failed send means the receiver is
                // gone, so the entry is dropped from the list.
                let mut subs = subscribers.lock().unwrap();
                subs.retain(|entry| entry.tx.send(batch.clone()).is_ok());
            }

            log::info!("feed: worker stopped");
        });

        *slot = Some(FeedWorker {
            handle,
            shutdown_tx,
        });
    }

    /// Stop the worker and wait for it to exit. Idempotent.
    pub fn stop(&self) {
        let worker = self.worker.lock().unwrap().take();
        let Some(worker) = worker else {
            return;
        };

        // Wakes the worker out of its interval sleep immediately.
        let _ = worker.shutdown_tx.send(());
        if worker.handle.join().is_err() {
            log::error!("feed: worker thread panicked before join");
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.lock().unwrap().is_some()
    }
}

impl Default for PriceFeedSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PriceFeedSimulator {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Derive one tick's record for an asset from its seed values.
///
/// price: seed price scaled by a uniform factor within ±`price_jitter`.
/// change fields: uniform in ±`change_span` (raw percentage points).
/// volume: seed volume scaled by a uniform factor within ±`volume_jitter`.
/// Everything else (identity, supplies, chart history) carries over as-is.
fn perturb_asset(
    seed: &Asset,
    price_jitter: f64,
    change_span: f64,
    volume_jitter: f64,
    rng: &mut impl Rng,
) -> Asset {
    Asset {
        price: seed.price * (1.0 + rng.random_range(-price_jitter..price_jitter)),
        change_1h: rng.random_range(-change_span..change_span),
        change_24h: rng.random_range(-change_span..change_span),
        change_7d: rng.random_range(-change_span..change_span),
        volume_24h: seed.volume_24h * (1.0 + rng.random_range(-volume_jitter..volume_jitter)),
        ..seed.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn seed(id: &str, price: f64, volume: f64) -> Asset {
        Asset {
            id: id.into(),
            name: id.to_uppercase(),
            symbol: id[..3.min(id.len())].to_uppercase(),
            price,
            change_1h: 0.5,
            change_24h: 2.5,
            change_7d: 5.0,
            market_cap: 1_000_000.0,
            volume_24h: volume,
            circulating_supply: 19_000_000.0,
            max_supply: Some(21_000_000.0),
            logo: "https://example.com/logo.png".into(),
            chart_data: Vec::new(),
        }
    }

    fn fast_sim() -> PriceFeedSimulator {
        PriceFeedSimulator::with_config(FeedConfig::with_tick_interval(Duration::from_millis(10)))
    }

    #[test]
    fn test_perturbation_bounds_and_carryover() {
        let base = seed("bitcoin", 50_000.0, 25_000_000_000.0);
        let mut rng = rand::rng();

        for _ in 0..200 {
            let tick = perturb_asset(&base, 0.01, 5.0, 0.05, &mut rng);

            assert!(tick.price >= base.price * 0.99 && tick.price <= base.price * 1.01);
            assert!(tick.change_1h >= -5.0 && tick.change_1h <= 5.0);
            assert!(tick.change_24h >= -5.0 && tick.change_24h <= 5.0);
            assert!(tick.change_7d >= -5.0 && tick.change_7d <= 5.0);
            assert!(
                tick.volume_24h >= base.volume_24h * 0.95
                    && tick.volume_24h <= base.volume_24h * 1.05
            );

            // Identity and supply metadata pass through untouched.
            assert_eq!(tick.id, base.id);
            assert_eq!(tick.market_cap, base.market_cap);
            assert_eq!(tick.circulating_supply, base.circulating_supply);
            assert_eq!(tick.max_supply, base.max_supply);
        }
    }

    #[test]
    fn test_subscriber_receives_full_batches() {
        let sim = fast_sim();
        let sub = sim.subscribe();
        sim.start(vec![
            seed("bitcoin", 50_000.0, 1_000.0),
            seed("ethereum", 3_000.0, 2_000.0),
        ]);

        let batch = sub
            .rx
            .recv_timeout(Duration::from_secs(2))
            .expect("a tick should arrive");
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].id, "bitcoin");

        sim.stop();
    }

    #[test]
    fn test_start_is_idempotent_and_stop_silences() {
        let sim = fast_sim();
        let sub = sim.subscribe();

        sim.start(vec![seed("bitcoin", 50_000.0, 1_000.0)]);
        sim.start(vec![seed("bitcoin", 50_000.0, 1_000.0)]); // ignored
        assert!(sim.is_running());

        // Let a few ticks through, then stop.
        let _ = sub.rx.recv_timeout(Duration::from_secs(2)).unwrap();
        sim.stop();
        assert!(!sim.is_running());

        // Drain whatever was in flight; after that the channel stays quiet.
        while sub.rx.try_recv().is_ok() {}
        assert!(sub.rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn test_stop_then_start_resumes() {
        let sim = fast_sim();
        let sub = sim.subscribe();

        sim.start(vec![seed("bitcoin", 50_000.0, 1_000.0)]);
        let _ = sub.rx.recv_timeout(Duration::from_secs(2)).unwrap();
        sim.stop();
        sim.stop(); // idempotent

        sim.start(vec![seed("bitcoin", 50_000.0, 1_000.0)]);
        assert!(sim.is_running());
        let batch = sub
            .rx
            .recv_timeout(Duration::from_secs(2))
            .expect("ticks should resume after restart");
        assert_eq!(batch.len(), 1);

        sim.stop();
    }

    #[test]
    fn test_unsubscribe_unknown_id_is_noop() {
        let sim = fast_sim();
        let sub = sim.subscribe();
        assert_eq!(sim.subscriber_count(), 1);

        sim.unsubscribe(9_999);
        assert_eq!(sim.subscriber_count(), 1);

        sim.unsubscribe(sub.id);
        assert_eq!(sim.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribed_receiver_goes_quiet() {
        let sim = fast_sim();
        let sub = sim.subscribe();
        sim.start(vec![seed("bitcoin", 50_000.0, 1_000.0)]);

        let _ = sub.rx.recv_timeout(Duration::from_secs(2)).unwrap();
        sim.unsubscribe(sub.id);

        while sub.rx.try_recv().is_ok() {}
        assert!(sub.rx.recv_timeout(Duration::from_millis(100)).is_err());

        sim.stop();
    }
}
