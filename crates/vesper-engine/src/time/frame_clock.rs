use std::time::{Duration, Instant};

/// What the clock reports for one presented frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started, minus time spent paused.
    pub elapsed: f32,
    /// Frames ticked so far, this one excluded.
    pub frame: u64,
}

/// Wall clock for the animation.
///
/// Animation phase comes from elapsed time, not from summed deltas, so a
/// stalled frame never makes the pattern jump. While paused (minimized
/// window) elapsed time stands still.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
    paused_at: Option<Instant>,
    paused_total: Duration,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(origin: Instant) -> Self {
        Self {
            origin,
            paused_at: None,
            paused_total: Duration::ZERO,
            frame: 0,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    pub fn resume(&mut self) {
        self.resume_at(Instant::now());
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn pause_at(&mut self, now: Instant) {
        self.paused_at.get_or_insert(now);
    }

    fn resume_at(&mut self, now: Instant) {
        if let Some(since) = self.paused_at.take() {
            self.paused_total += now.saturating_duration_since(since);
        }
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        let now = self.paused_at.unwrap_or(now);
        now.saturating_duration_since(self.origin)
            .saturating_sub(self.paused_total)
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let time = FrameTime {
            elapsed: self.elapsed_at(now).as_secs_f32(),
            frame: self.frame,
        };
        self.frame += 1;
        time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn counts_frames_and_follows_wall_time() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);

        let a = clock.tick_at(t0 + secs(1));
        let b = clock.tick_at(t0 + secs(4));
        assert_eq!(a.frame, 0);
        assert_eq!(b.frame, 1);
        assert!((a.elapsed - 1.0).abs() < 1e-6);
        assert!((b.elapsed - 4.0).abs() < 1e-6);
    }

    #[test]
    fn paused_time_is_not_counted() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);

        clock.pause_at(t0 + secs(2));
        assert!(clock.is_paused());
        assert!((clock.tick_at(t0 + secs(7)).elapsed - 2.0).abs() < 1e-6);

        clock.resume_at(t0 + secs(10));
        assert!(!clock.is_paused());
        assert!((clock.tick_at(t0 + secs(11)).elapsed - 3.0).abs() < 1e-6);
    }

    #[test]
    fn repeated_pause_keeps_the_first_instant() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        clock.pause_at(t0 + secs(1));
        clock.pause_at(t0 + secs(5));
        clock.resume_at(t0 + secs(6));
        assert!((clock.tick_at(t0 + secs(6)).elapsed - 1.0).abs() < 1e-6);
    }
}
