// src/animation/driver.rs
//
// The frame-paced animation driver.
// nannou calls update once per display frame; the driver turns those
// frames into ticks no faster than one per `tick_delay`.

#[derive(Debug, Clone)]
pub struct AnimationDriver {
    active: bool,
    frame_timer: f32,
    tick_delay: f32,
}

impl AnimationDriver {
    pub fn new(tick_delay: f32) -> Self {
        Self {
            active: false,
            frame_timer: 0.0,
            tick_delay: tick_delay.max(0.0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self) {
        if !self.active {
            self.active = true;
            // first tick lands on the next frame
            self.frame_timer = self.tick_delay;
        }
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.frame_timer = 0.0;
    }

    /// Returns true when a tick is due. At most one tick per frame.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        if !dt.is_finite() || dt < 0.0 {
            log::debug!("Skipping tick: unusable frame delta {}", dt);
            return false;
        }

        self.frame_timer += dt;
        if self.frame_timer >= self.tick_delay {
            // don't let a long frame queue up a burst of ticks
            self.frame_timer = (self.frame_timer - self.tick_delay).min(self.tick_delay);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_driver_never_ticks() {
        let mut driver = AnimationDriver::new(0.03);
        assert!(!driver.tick(1.0));
    }

    #[test]
    fn test_first_frame_ticks_after_start() {
        let mut driver = AnimationDriver::new(0.03);
        driver.start();
        assert!(driver.tick(0.0));
    }

    #[test]
    fn test_pacing() {
        let mut driver = AnimationDriver::new(0.03);
        driver.start();
        assert!(driver.tick(0.016));
        // 16ms frames: a tick every second frame
        let ticks = (0..10).filter(|_| driver.tick(0.016)).count();
        assert_eq!(ticks, 5);
    }

    #[test]
    fn test_long_frame_ticks_once() {
        let mut driver = AnimationDriver::new(0.03);
        driver.start();
        driver.tick(0.0);
        assert!(driver.tick(5.0));
        assert!(driver.tick(0.0));
        assert!(!driver.tick(0.0));
    }

    #[test]
    fn test_bad_delta_is_skipped() {
        let mut driver = AnimationDriver::new(0.03);
        driver.start();
        assert!(!driver.tick(f32::NAN));
        assert!(!driver.tick(-0.5));
        assert!(driver.is_active());
        assert!(driver.tick(0.0));
    }

    #[test]
    fn test_stop() {
        let mut driver = AnimationDriver::new(0.03);
        driver.start();
        driver.stop();
        assert!(!driver.is_active());
        assert!(!driver.tick(1.0));
    }
}
