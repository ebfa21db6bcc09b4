//! Self-driven scheduler on a background thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::{Pacer, Scheduler, TickCallback};

/// Wakeup resolution of the timer thread.
pub const RESOLUTION: Duration = Duration::from_millis(1);

struct Worker {
    stop: Arc<AtomicBool>,
    /// Hands the callback back when the thread exits
    handle: JoinHandle<TickCallback>,
}

/// Fires the callback from a timer thread, independent of rendering.
///
/// The thread wakes every [`RESOLUTION`] and asks the pacer whether the
/// interval has elapsed. `stop` (or drop) joins the thread.
pub struct IntervalScheduler {
    pacer: Pacer,
    callback: Option<TickCallback>,
    worker: Option<Worker>,
}

impl IntervalScheduler {
    pub fn new(pacer: Pacer, callback: TickCallback) -> Self {
        Self {
            pacer,
            callback: Some(callback),
            worker: None,
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn start(&mut self) {
        if self.worker.is_some() {
            return;
        }
        let Some(mut callback) = self.callback.take() else {
            return;
        };

        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let mut pacer = self.pacer.clone();

        let handle = thread::spawn(move || {
            pacer.start_at(Instant::now());
            while !stop_flag.load(Ordering::Relaxed) {
                thread::sleep(RESOLUTION);
                if pacer.tick(Instant::now()) {
                    callback();
                }
            }
            callback
        });

        tracing::debug!(interval = ?self.pacer.interval(), "interval scheduler started");
        self.worker = Some(Worker { stop, handle });
    }

    fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        worker.stop.store(true, Ordering::Relaxed);
        match worker.handle.join() {
            Ok(callback) => self.callback = Some(callback),
            Err(_) => tracing::warn!("scheduler thread panicked, callback dropped"),
        }
        tracing::debug!("interval scheduler stopped");
    }

    fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Frames do not drive this scheduler.
    fn on_frame(&mut self) -> bool {
        false
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for IntervalScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalScheduler")
            .field("pacer", &self.pacer)
            .field("running", &self.worker.is_some())
            .finish()
    }
}
