//! Permutation: an invertible mapping over the 26-letter alphabet.
//!
//! The atomic building block of every wired component. A permutation is
//! validated once at construction (exactly 26 letters, each appearing
//! once) and is immutable afterwards; rotors express their rotation on
//! top of it arithmetically, or through [`Permutation::rotated`].

use crate::error::EnigmaError;
use crate::utils::alphabet;
use crate::utils::alphabet::LETTER_COUNT;

/// A bijection over letter positions 0–25 with precomputed inverse.
///
/// Position `i` holding value `v` means "the letter at position `i`
/// maps to the letter at position `v`". The inverse table is built at
/// construction so the backward lookup is a plain index access as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    forward: [u8; LETTER_COUNT],
    inverse: [u8; LETTER_COUNT],
}

impl Permutation {
    /// Parses and validates a 26-letter wiring key string.
    ///
    /// Keys are accepted in either case and normalized to upper case.
    ///
    /// # Errors
    /// - [`EnigmaError::KeyLength`] if the key is not exactly 26 characters.
    /// - [`EnigmaError::KeyNotAlphabetic`] if a character is outside `A..=Z`
    ///   (after upper-casing).
    /// - [`EnigmaError::KeyNotBijective`] if a letter appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::Permutation;
    ///
    /// // Rotor I wiring: position 0 (A) maps to position 4 (E).
    /// let p = Permutation::from_key("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// assert_eq!(p.forward(0), 4);
    /// assert_eq!(p.backward(4), 0);
    /// ```
    ///
    /// ```
    /// use enigmacrypt::Permutation;
    ///
    /// assert!(Permutation::from_key("TOOSHORT").is_err());
    /// ```
    pub fn from_key(key: &str) -> Result<Self, EnigmaError> {
        let length = key.chars().count();
        if length != LETTER_COUNT {
            return Err(EnigmaError::KeyLength(length));
        }

        let mut forward = [0u8; LETTER_COUNT];
        let mut seen = [false; LETTER_COUNT];
        for (position, entry) in key.chars().enumerate() {
            let letter = entry.to_ascii_uppercase();
            let index = alphabet::letter_index(letter)
                .ok_or(EnigmaError::KeyNotAlphabetic(entry))?;
            if seen[index] {
                return Err(EnigmaError::KeyNotBijective(letter));
            }
            seen[index] = true;
            forward[position] = index as u8;
        }

        Ok(Self::from_table(forward))
    }

    /// Builds a permutation from an already-validated forward table.
    fn from_table(forward: [u8; LETTER_COUNT]) -> Self {
        let mut inverse = [0u8; LETTER_COUNT];
        for (position, &value) in forward.iter().enumerate() {
            inverse[value as usize] = position as u8;
        }
        Permutation { forward, inverse }
    }

    /// Direct lookup: the position `index` maps to.
    pub fn forward(&self, index: usize) -> usize {
        debug_assert!(index < LETTER_COUNT);
        self.forward[index] as usize
    }

    /// Inverse lookup: the position that maps to `index`.
    pub fn backward(&self, index: usize) -> usize {
        debug_assert!(index < LETTER_COUNT);
        self.inverse[index] as usize
    }

    /// Returns the wiring as seen at physical rotation `by`.
    ///
    /// Rotating a wired wheel shifts both its entry and exit contacts
    /// against the stationary frame, so the rotated view of wiring `W`
    /// maps `i` to `W(i + by) - by` (mod 26). `rotated(0)` is the wiring
    /// itself. Rotors apply this same correction arithmetically per
    /// lookup instead of materializing a table per keystroke.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::Permutation;
    ///
    /// let p = Permutation::from_key("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// // One step in: entry A reaches contact B, wired to K, leaving at J.
    /// assert_eq!(p.rotated(1).forward(0), 9);
    /// ```
    pub fn rotated(&self, by: i32) -> Permutation {
        let mut forward = [0u8; LETTER_COUNT];
        for (position, slot) in forward.iter_mut().enumerate() {
            let exit = self.forward(alphabet::shift(position, by));
            *slot = alphabet::shift(exit, -by) as u8;
        }
        Self::from_table(forward)
    }

    /// Renders the permutation back to its 26-letter key string.
    pub fn key(&self) -> String {
        self.forward
            .iter()
            .map(|&value| alphabet::letter_at(value as usize))
            .collect()
    }
}
