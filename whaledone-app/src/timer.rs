use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::events::{AppEvent, EventSender};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task feeding one [`AppEvent::Tick`] per second into the event
/// channel. Dropping the timer aborts the task.
#[derive(Debug)]
pub struct CountdownTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

impl CountdownTimer {
    /// Must be called from within a tokio runtime. The first tick arrives
    /// one period after the start.
    pub fn start(
        events: EventSender,
        generation: u64,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if events.send(AppEvent::Tick { generation }).is_err() {
                    break;
                }
            }
        });
        debug!(generation, "countdown timer started");
        Self { generation, handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.handle.abort();
        debug!(generation = self.generation, "countdown timer stopped");
    }
}
