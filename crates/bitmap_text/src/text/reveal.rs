//! Typewriter reveal

/// How much of the text a frame may draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealCap {
    /// No limit
    All,
    /// Draw at most this many characters
    Chars(usize),
}

impl RevealCap {
    /// True when `drawn` characters already use up the cap
    pub const fn is_reached(self, drawn: usize) -> bool {
        match self {
            Self::All => false,
            Self::Chars(limit) => drawn >= limit,
        }
    }
}

/// Typewriter state: one more character every `ticks_per_char` ms
///
/// Elapsed time stops accumulating once the whole message is revealed, so a
/// finished message can sit on screen indefinitely without the counter
/// growing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Typewriter {
    ticks_per_char: u32,
    ticks_accumulated: u64,
    complete: bool,
}

impl Typewriter {
    /// Create a typewriter; zero disables the effect
    pub const fn new(ticks_per_char: u32) -> Self {
        Self {
            ticks_per_char,
            ticks_accumulated: 0,
            complete: false,
        }
    }

    /// Change the delay per character and restart the reveal
    pub fn set_ticks_per_char(&mut self, ticks_per_char: u32) {
        self.ticks_per_char = ticks_per_char;
        self.reset();
    }

    /// Restart the reveal from the first character
    pub fn reset(&mut self) {
        self.ticks_accumulated = 0;
        self.complete = false;
    }

    /// Delay per character in ms
    pub const fn ticks_per_char(&self) -> u32 {
        self.ticks_per_char
    }

    /// Milliseconds counted towards the reveal so far
    pub const fn ticks_accumulated(&self) -> u64 {
        self.ticks_accumulated
    }

    /// True when the typewriter effect is active
    pub const fn is_enabled(&self) -> bool {
        self.ticks_per_char > 0
    }

    /// True once the whole message has been revealed
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Characters currently revealed out of `message_len`
    pub fn revealed(&self, message_len: usize) -> usize {
        if !self.is_enabled() || self.complete {
            return message_len;
        }
        let revealed = self.ticks_accumulated / u64::from(self.ticks_per_char);
        usize::try_from(revealed).map_or(message_len, |r| r.min(message_len))
    }

    /// Count `elapsed_ms` towards the reveal and return this frame's cap
    pub fn advance(&mut self, elapsed_ms: u32, message_len: usize) -> RevealCap {
        if !self.is_enabled() || self.complete {
            return RevealCap::All;
        }

        let total = self.ticks_accumulated.saturating_add(u64::from(elapsed_ms));
        let revealed = total / u64::from(self.ticks_per_char);

        match usize::try_from(revealed) {
            Ok(revealed) if revealed < message_len => {
                self.ticks_accumulated = total;
                RevealCap::Chars(revealed)
            }
            Ok(revealed) if revealed == message_len => {
                self.ticks_accumulated = total;
                self.complete = true;
                RevealCap::All
            }
            _ => {
                self.complete = true;
                RevealCap::All
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_reveals_everything() {
        let mut typewriter = Typewriter::default();
        assert_eq!(typewriter.advance(10, 50), RevealCap::All);
        assert_eq!(typewriter.revealed(50), 50);
        assert_eq!(typewriter.ticks_accumulated(), 0);
    }

    #[test]
    fn test_reveal_reaches_length_and_stops_counting() {
        let mut typewriter = Typewriter::new(100);

        let counts: Vec<usize> = (0..5)
            .map(|_| {
                typewriter.advance(100, 5);
                typewriter.revealed(5)
            })
            .collect();
        assert_eq!(counts, vec![1, 2, 3, 4, 5]);
        assert!(typewriter.is_complete());

        assert_eq!(typewriter.advance(100, 5), RevealCap::All);
        assert_eq!(typewriter.revealed(5), 5);
        assert_eq!(typewriter.ticks_accumulated(), 500);
    }

    #[test]
    fn test_overshoot_freezes_accumulator() {
        let mut typewriter = Typewriter::new(10);
        assert_eq!(typewriter.advance(25, 4), RevealCap::Chars(2));
        assert_eq!(typewriter.advance(1_000, 4), RevealCap::All);
        assert_eq!(typewriter.ticks_accumulated(), 25);
        assert_eq!(typewriter.revealed(4), 4);
    }

    #[test]
    fn test_reset_restarts_reveal() {
        let mut typewriter = Typewriter::new(10);
        typewriter.advance(1_000, 3);
        assert!(typewriter.is_complete());

        typewriter.reset();
        assert_eq!(typewriter.advance(15, 3), RevealCap::Chars(1));
    }

    #[test]
    fn test_cap_reached() {
        assert!(!RevealCap::All.is_reached(usize::MAX));
        assert!(RevealCap::Chars(2).is_reached(2));
        assert!(!RevealCap::Chars(2).is_reached(1));
    }
}
