//! RotorBank: the ordered rotor stack and its stepping mechanism.
//!
//! Holds exactly three rotors, index 0 being the rightmost/fastest and
//! higher indices the more significant positions. The bank itself keeps
//! no state beyond the rotors; its job is the per-keystroke turnover
//! decision, including the double-step anomaly:
//!
//! 1. middle rotor at its notch → middle and left rotors turn;
//! 2. otherwise, right rotor at its notch → middle rotor turns;
//! 3. the right rotor turns unconditionally.
//!
//! All notch conditions are read against pre-turn state before any rotor
//! moves. Because the middle rotor is pushed once by the right rotor's
//! notch and again one keystroke later by its own, it advances on two
//! consecutive keystrokes — the historical anomaly. The rule is defined
//! for exactly this three-rotor geometry; the array type pins that scope.

use crate::rotor::Rotor;

/// Number of rotors in the bank. The stepping rule is defined for
/// exactly this geometry.
pub const ROTOR_COUNT: usize = 3;

/// Positions of the stepping participants within the bank.
const RIGHT: usize = 0;
const MIDDLE: usize = 1;
const LEFT: usize = 2;

/// An ordered stack of three rotors plus the turnover logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorBank {
    rotors: [Rotor; ROTOR_COUNT],
}

impl RotorBank {
    /// Builds a bank from three rotors, index 0 = rightmost/fastest.
    pub fn new(rotors: [Rotor; ROTOR_COUNT]) -> Self {
        RotorBank { rotors }
    }

    /// Executes one keystroke's worth of rotor turnover.
    ///
    /// Runs before the letter is enciphered. Rotor count and order are
    /// untouched; each rotor turns at most once per call except the
    /// middle rotor, which never turns more than once either — the
    /// double-step shows up across consecutive keystrokes, not within
    /// one.
    pub fn step(&mut self) {
        // Read every notch against pre-turn state.
        let middle_at_notch = self.rotors[MIDDLE].is_at_notch();
        let right_at_notch = self.rotors[RIGHT].is_at_notch();

        if middle_at_notch {
            self.rotors[MIDDLE].turn();
            self.rotors[LEFT].turn();
        } else if right_at_notch {
            self.rotors[MIDDLE].turn();
        }
        self.rotors[RIGHT].turn();
    }

    /// Forward pass: right rotor to left rotor.
    pub(crate) fn encipher(&self, index: usize) -> usize {
        self.rotors
            .iter()
            .fold(index, |current, rotor| rotor.encipher(current))
    }

    /// Reverse pass: left rotor back to right rotor.
    pub(crate) fn decipher(&self, index: usize) -> usize {
        self.rotors
            .iter()
            .rev()
            .fold(index, |current, rotor| rotor.decipher(current))
    }

    /// The window letters as the operator reads them, leftmost rotor
    /// first.
    pub fn windows(&self) -> String {
        self.rotors
            .iter()
            .rev()
            .map(Rotor::window_letter)
            .collect()
    }

    /// Read-only access to the rotors, index 0 = rightmost.
    pub fn rotors(&self) -> &[Rotor; ROTOR_COUNT] {
        &self.rotors
    }
}
