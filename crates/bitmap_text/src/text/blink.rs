//! Blink timing

/// On/off blink cycle, owned by a single text surface
///
/// The counter is kept inside one cycle, so it never grows no matter how
/// long the text stays on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blink {
    on_ms: u32,
    off_ms: u32,
    counter: u64,
}

impl Blink {
    /// Create a blink cycle; both periods zero disables blinking
    pub const fn new(on_ms: u32, off_ms: u32) -> Self {
        Self {
            on_ms,
            off_ms,
            counter: 0,
        }
    }

    /// Change the periods and restart the cycle in the visible phase
    pub fn set(&mut self, on_ms: u32, off_ms: u32) {
        *self = Self::new(on_ms, off_ms);
    }

    /// True when blinking is configured
    pub const fn is_enabled(&self) -> bool {
        self.on_ms > 0 || self.off_ms > 0
    }

    /// Length of one full cycle in ms
    pub const fn cycle_ms(&self) -> u64 {
        self.on_ms as u64 + self.off_ms as u64
    }

    /// Position within the current cycle
    pub const fn counter(&self) -> u64 {
        self.counter
    }

    /// Advance by `elapsed_ms` and report whether the text is visible
    ///
    /// Each cycle starts with `on_ms` of visibility followed by `off_ms`
    /// hidden.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_enabled() {
            return true;
        }

        let cycle = self.cycle_ms();
        let position = self.counter + u64::from(elapsed_ms);
        self.counter = position - (position / cycle) * cycle;

        self.counter < u64::from(self.on_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_always_visible() {
        let mut blink = Blink::default();
        assert!(blink.advance(u32::MAX));
        assert_eq!(blink.counter(), 0);
    }

    #[test]
    fn test_on_then_off() {
        let mut blink = Blink::new(300, 200);
        assert!(blink.advance(0));
        assert!(blink.advance(299));
        assert!(!blink.advance(1));
        assert!(!blink.advance(199));
        assert!(blink.advance(1));
        assert_eq!(blink.counter(), 0);
    }

    #[test]
    fn test_counter_stays_inside_one_cycle() {
        let mut blink = Blink::new(7, 3);
        for _ in 0..1_000 {
            blink.advance(u32::MAX);
            assert!(blink.counter() < blink.cycle_ms());
        }
    }

    #[test]
    fn test_off_only_never_shows() {
        let mut blink = Blink::new(0, 50);
        assert!(!blink.advance(0));
        assert!(!blink.advance(25));
    }

    #[test]
    fn test_instances_are_independent() {
        let mut fast = Blink::new(10, 10);
        let mut slow = Blink::new(1_000, 1_000);

        assert!(!fast.advance(15));
        assert!(slow.advance(15));
        assert_eq!(slow.counter(), 15);
    }
}
