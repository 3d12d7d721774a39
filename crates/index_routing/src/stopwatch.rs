use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use tracing::debug;

/// Accumulates elapsed time over one or more start/stop laps.
pub struct Stopwatch {
    name: String,
    lap_start: Instant,
    total: Duration,
}

impl Stopwatch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lap_start: Instant::now(),
            total: Duration::ZERO,
        }
    }

    pub fn start(&mut self) {
        self.lap_start = Instant::now();
    }

    pub fn stop(&mut self) {
        self.total += self.lap_start.elapsed();
    }

    pub fn total_duration(&self) -> Duration {
        self.total
    }

    pub fn report(&self) {
        debug!(elapsed = ?self.total, "{}", self.name);
    }
}

impl Display for Stopwatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {:?}", self.name, self.total)
    }
}

/// Times `$block` on `$sw` and evaluates to the block's value.
#[macro_export]
macro_rules! timed {
    ($sw:ident, $block:block) => {{
        $sw.start();
        let value = $block;
        $sw.stop();
        value
    }};
}
