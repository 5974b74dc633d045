use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// One firing of the tick driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub sequence: u64,
}

/// Fixed-interval tick source. The driver knows nothing about the engine; it
/// only delivers `Tick`s to whoever owns the receiver.
pub struct TickDriver;

impl TickDriver {
    /// Spawn the tick task. The first tick fires one `period` after start.
    /// Ticks missed by a slow consumer are skipped, not queued.
    pub fn start(period: Duration) -> (DriverHandle, mpsc::Receiver<Tick>) {
        let (tx, rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let task = tokio::spawn(run_driver(period, tx, token.clone()));
        info!("Tick driver started with a {:?} period", period);
        (DriverHandle { token, task: Some(task) }, rx)
    }
}

async fn run_driver(period: Duration, tx: mpsc::Sender<Tick>, token: CancellationToken) {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut sequence = 0u64;

    loop {
        tokio::select! {
            biased;

            _ = token.cancelled() => {
                debug!("Tick driver cancelled after {} ticks", sequence);
                break;
            }

            _ = interval.tick() => {
                sequence += 1;
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    sent = tx.send(Tick { sequence }) => {
                        if sent.is_err() {
                            debug!("Tick receiver dropped, stopping driver");
                            break;
                        }
                    }
                }
            }
        }
    }
}

/// Keeps the tick task alive. Dropping the handle stops the driver.
pub struct DriverHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl DriverHandle {
    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Stop the driver and wait for its task to finish.
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
