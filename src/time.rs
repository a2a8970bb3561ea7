//! Fixed-timestep clock for the draw loop.
//!
//! `draw_web()` fires at whatever rate the browser paints, with a variable
//! delta. `FrameClock` folds that into discrete 10 Hz ticks so anything
//! time-based (currently just toast lifetimes) is deterministic under test.

pub struct FrameClock {
    /// Milliseconds per tick.
    ms_per_tick: f64,
    /// Milliseconds received but not yet converted into ticks.
    carry: f64,
    /// Timestamp of the previous frame, `None` before the first one.
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            carry: 0.0,
            last_timestamp: None,
        }
    }

    /// Feed the current wall-clock timestamp (`performance.now()`); returns
    /// how many whole ticks elapsed since the previous frame.
    ///
    /// Deltas are clamped to 500ms so a backgrounded tab does not dump a
    /// burst of ticks on the first frame after focus returns.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, 500.0),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.carry += delta;
        let ticks = (self.carry / self.ms_per_tick) as u32;
        self.carry -= ticks as f64 * self.ms_per_tick;
        ticks
    }
}
