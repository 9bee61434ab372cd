use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

/// One countdown step for the quest accepted under `generation`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTick {
    pub generation: u64,
}

pub type TickSender = mpsc::UnboundedSender<CountdownTick>;
pub type TickReceiver = mpsc::UnboundedReceiver<CountdownTick>;

/// Repeating countdown task. Aborted when dropped, so holding at most one of
/// these means at most one live timer.
#[derive(Debug)]
pub struct CountdownTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

impl CountdownTimer {
    /// Spawns the task on the current tokio runtime. The first tick fires one
    /// `period` after start.
    pub fn start(generation: u64, period: Duration, sender: TickSender) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if sender.send(CountdownTick { generation }).is_err() {
                    // Receiver gone, app is shutting down
                    break;
                }
            }
        });

        tracing::debug!(generation, ?period, "countdown started");
        Self { generation, handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(generation = self.generation, "countdown cancelled");
    }
}
