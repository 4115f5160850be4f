use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::constants::TIMER_TICK_MS;

const STOP_POLL: Duration = Duration::from_millis(20);

pub struct TimerConfig {
    pub tick_interval_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TIMER_TICK_MS,
        }
    }
}

/// Background ticker for the focus-mode clock.
///
/// Calls the tick handler with the whole seconds elapsed since `started_at`
/// once per interval until [`FocusTimer::stop`] is called. The first tick
/// fires as soon as the thread starts.
pub struct FocusTimer {
    config: TimerConfig,
    started_at: Instant,
    running: Arc<AtomicBool>,
}

impl FocusTimer {
    pub fn new(started_at: Instant, config: TimerConfig) -> Self {
        Self {
            config,
            started_at,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn start<F>(&self, mut on_tick: F) -> thread::JoinHandle<()>
    where
        F: FnMut(u64) + Send + 'static,
    {
        self.running.store(true, Ordering::SeqCst);

        let running = Arc::clone(&self.running);
        let started_at = self.started_at;
        let interval = Duration::from_millis(self.config.tick_interval_ms.max(1));

        thread::spawn(move || loop {
            on_tick(started_at.elapsed().as_secs());

            // Sleep in short slices so stop() is honoured promptly.
            let deadline = Instant::now() + interval;
            while running.load(Ordering::SeqCst) {
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                thread::sleep((deadline - now).min(STOP_POLL));
            }
            if !running.load(Ordering::SeqCst) {
                break;
            }
        })
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}
