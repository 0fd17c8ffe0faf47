//! Card flip animation with exponential ease-out.
//!
//! When the shown face changes, the card's horizontal scale drops to a
//! sliver and then grows back toward full width a little each tick, which
//! reads as the card turning over.  Purely visual; the deck state has
//! already changed by the time the animation starts.

/// Horizontal-scale animator for the flashcard.
#[derive(Debug, Clone)]
pub struct CardFlip {
    /// Current width scale in `[MIN_SCALE, 1.0]`.
    scale: f64,
    /// Face shown on the previous frame.
    prev_flipped: bool,
    /// Ease-out factor: `scale += (1 - scale) * speed` each tick.
    speed: f64,
}

const MIN_SCALE: f64 = 0.08;

impl Default for CardFlip {
    fn default() -> Self {
        Self::new(0.45)
    }
}

impl CardFlip {
    pub fn new(speed: f64) -> Self {
        Self {
            scale: 1.0,
            prev_flipped: false,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Feed the face currently shown.  Collapses the card when it changed.
    pub fn set_target(&mut self, flipped: bool) {
        if flipped != self.prev_flipped {
            self.scale = MIN_SCALE;
            self.prev_flipped = flipped;
        }
    }

    /// Grow the scale toward full width.  Call once per tick.
    pub fn tick(&mut self) {
        self.scale += (1.0 - self.scale) * self.speed;
        if self.scale > 0.97 {
            self.scale = 1.0;
        }
    }

    /// Width to draw for a card whose settled width is `full`.
    pub fn width(&self, full: u16) -> u16 {
        ((full as f64) * self.scale).round().max(1.0).min(full as f64) as u16
    }

    pub fn is_animating(&self) -> bool {
        self.scale < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_after_a_change() {
        let mut flip = CardFlip::default();
        assert!(!flip.is_animating());
        flip.set_target(true);
        assert!(flip.is_animating());
        assert!(flip.width(60) < 10);
        for _ in 0..20 {
            flip.tick();
        }
        assert!(!flip.is_animating());
        assert_eq!(flip.width(60), 60);
    }

    #[test]
    fn same_face_does_not_restart() {
        let mut flip = CardFlip::default();
        flip.set_target(false);
        assert!(!flip.is_animating());
    }
}
