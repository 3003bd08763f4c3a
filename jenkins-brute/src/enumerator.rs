//! Mixed-radix ("odometer") enumeration of inner word tuples.
//!
//! For `slots` inner positions over `radix` words, every tuple in
//! `[0, radix)^slots` is produced exactly once. The rightmost digit turns
//! fastest; when it wraps it carries into its left neighbour, and a carry out
//! of the leftmost digit ends the enumeration.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Nothing yielded yet; the next call yields the all-zero tuple.
    Start,
    /// `digits` holds the tuple yielded last.
    At,
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct Odometer {
    digits: Vec<usize>,
    radix: usize,
    position: Position,
}

impl Odometer {
    pub fn new(slots: usize, radix: usize) -> Self {
        Self { digits: vec![0; slots], radix, position: Position::Start }
    }

    /// Rewinds to the first tuple.
    pub fn reset(&mut self) {
        self.digits.fill(0);
        self.position = Position::Start;
    }

    #[inline]
    pub fn slots(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.position == Position::Exhausted
    }

    /// Number of tuples a full pass yields (`radix^slots`), or `None` on
    /// overflow. Zero slots always yield exactly one empty tuple.
    pub fn total(&self) -> Option<u128> {
        let slots = u32::try_from(self.slots()).ok()?;
        (self.radix as u128).checked_pow(slots)
    }

    /// Yields the next tuple, or `None` once every tuple has been produced.
    pub fn next_tuple(&mut self) -> Option<&[usize]> {
        match self.position {
            Position::Exhausted => return None,
            Position::Start => {
                // radix^slots is zero when there are slots but no words.
                if self.radix == 0 && !self.digits.is_empty() {
                    self.position = Position::Exhausted;
                    return None;
                }
                self.position = Position::At;
            }
            Position::At => {
                if !self.advance() {
                    self.position = Position::Exhausted;
                    return None;
                }
            }
        }
        Some(&self.digits)
    }

    /// Steps to the following tuple. Returns `false` when the leftmost digit
    /// carries out, leaving the digits wrapped back to zero.
    fn advance(&mut self) -> bool {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.radix {
                return true;
            }
            *digit = 0;
        }
        false
    }
}
