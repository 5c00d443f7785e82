//! Rotor: a substitution wheel with rotational state.
//!
//! A rotor owns an immutable wiring [`Permutation`] and three pieces of
//! positional state: the turnover notch, the ring setting, and the
//! current rotational offset. Only the offset mutates during operation,
//! once per [`turn`](Rotor::turn).
//!
//! The wiring is engraved once; the ring setting offsets the printed
//! alphabet ring against the wiring, while rotation offsets the entry
//! and exit contacts against the stationary frame. Both corrections are
//! modular additions on the 26-letter ring and commute, so every lookup
//! reduces to shifting into the wiring by `offset - ring_setting` and
//! shifting back out by the same amount. No table is rebuilt when the
//! rotor turns.

use crate::error::EnigmaError;
use crate::permutation::Permutation;
use crate::utils::alphabet;
use crate::utils::alphabet::LETTER_COUNT;

/// A rotating substitution wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Permutation,
    notch: usize,
    ring_setting: usize,
    offset: usize,
}

/// Parses a single-letter parameter, accepting either case.
fn letter_param(letter: char) -> Result<usize, EnigmaError> {
    alphabet::letter_index(letter.to_ascii_uppercase()).ok_or(EnigmaError::NotALetter(letter))
}

impl Rotor {
    /// Assembles a rotor from its wiring key, turnover notch, initial
    /// window letter, and ring setting.
    ///
    /// The window letter is the letter visible to the operator; the
    /// rotor starts with its rotational offset at that position. The
    /// ring setting is also given as a letter, `A` meaning no offset
    /// between wiring and alphabet ring.
    ///
    /// # Errors
    /// - Key validation errors as for [`Permutation::from_key`].
    /// - [`EnigmaError::NotALetter`] if `notch`, `window`, or
    ///   `ring_setting` is not a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::{wirings, Rotor};
    ///
    /// let rotor = Rotor::new(wirings::ROTOR_I.key, wirings::ROTOR_I.notch, 'A', 'A').unwrap();
    /// assert_eq!(rotor.encrypt_letter('A'), 'E');
    /// ```
    ///
    /// ```
    /// use enigmacrypt::{wirings, Rotor};
    ///
    /// // With ring setting B the whole mapping shifts: A now encrypts to K.
    /// let rotor = Rotor::new(wirings::ROTOR_I.key, wirings::ROTOR_I.notch, 'A', 'B').unwrap();
    /// assert_eq!(rotor.encrypt_letter('A'), 'K');
    /// ```
    pub fn new(
        key: &str,
        notch: char,
        window: char,
        ring_setting: char,
    ) -> Result<Self, EnigmaError> {
        Ok(Rotor {
            wiring: Permutation::from_key(key)?,
            notch: letter_param(notch)?,
            ring_setting: letter_param(ring_setting)?,
            offset: letter_param(window)?,
        })
    }

    /// Net contact displacement between frame and wiring.
    fn contact_shift(&self) -> i32 {
        self.offset as i32 - self.ring_setting as i32
    }

    /// Index-level forward substitution (signal entering from the
    /// keyboard side) at the current state.
    pub(crate) fn encipher(&self, index: usize) -> usize {
        let by = self.contact_shift();
        alphabet::shift(self.wiring.forward(alphabet::shift(index, by)), -by)
    }

    /// Index-level reverse substitution (signal returning from the
    /// reflector) at the current state.
    pub(crate) fn decipher(&self, index: usize) -> usize {
        let by = self.contact_shift();
        alphabet::shift(self.wiring.backward(alphabet::shift(index, by)), -by)
    }

    /// Substitutes one letter in the forward direction. Characters
    /// outside `A..=Z` pass through unchanged.
    pub fn encrypt_letter(&self, letter: char) -> char {
        match alphabet::letter_index(letter) {
            Some(index) => alphabet::letter_at(self.encipher(index)),
            None => letter,
        }
    }

    /// Substitutes one letter in the reverse direction, undoing
    /// [`encrypt_letter`](Self::encrypt_letter) at unchanged state.
    pub fn reverse_encrypt_letter(&self, letter: char) -> char {
        match alphabet::letter_index(letter) {
            Some(index) => alphabet::letter_at(self.decipher(index)),
            None => letter,
        }
    }

    /// Advances the rotor by one position. The window letter moves to
    /// its successor regardless of the ring setting.
    pub fn turn(&mut self) {
        self.offset = alphabet::successor(self.offset);
    }

    /// The letter currently visible in the rotor window.
    pub fn window_letter(&self) -> char {
        alphabet::letter_at(self.offset)
    }

    /// Whether the rotor sits at its turnover notch, i.e. the window
    /// letter equals the configured notch letter. Consulted only by the
    /// stepping mechanism.
    pub fn is_at_notch(&self) -> bool {
        self.offset == self.notch
    }

    /// The full substitution table induced by the current state, as a
    /// 26-letter key string. Tracing and test aid, not part of the hot
    /// encipherment path.
    pub fn get_key(&self) -> String {
        (0..LETTER_COUNT)
            .map(|index| alphabet::letter_at(self.encipher(index)))
            .collect()
    }
}
