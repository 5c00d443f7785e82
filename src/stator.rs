//! Stator: a static, non-rotating substitution.
//!
//! Covers the two stationary components of the machine, the plugboard
//! and the reflector. Both own a plain [`Permutation`]; the difference
//! is the structural constraint checked at construction. A plugboard
//! accepts any bijection (the identity models "no plugs inserted"),
//! a reflector must be a fixed-point-free involution: 13 disjoint
//! reciprocal letter pairs covering the whole alphabet.

use crate::error::EnigmaError;
use crate::permutation::Permutation;
use crate::utils::alphabet;
use crate::utils::alphabet::LETTER_COUNT;

/// Which stationary role a [`Stator`] plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatorKind {
    /// User-configurable substitution before and after the rotor stack.
    Plugboard,
    /// Involutive substitution that turns the signal back through the
    /// rotor stack.
    Reflector,
}

/// A static substitution: wiring plus the role it was validated for.
///
/// Constructed once from a wiring key and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stator {
    wiring: Permutation,
    kind: StatorKind,
}

impl Stator {
    /// Builds a plugboard from a wiring key.
    ///
    /// Any valid bijection is accepted.
    ///
    /// # Errors
    /// Key validation errors as for [`Permutation::from_key`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::Stator;
    ///
    /// // A and C plugged together, everything else straight through.
    /// let plugboard = Stator::plugboard("CBADEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
    /// assert_eq!(plugboard.encrypt_letter('A'), 'C');
    /// assert_eq!(plugboard.encrypt_letter('C'), 'A');
    /// assert_eq!(plugboard.encrypt_letter('B'), 'B');
    /// ```
    pub fn plugboard(key: &str) -> Result<Self, EnigmaError> {
        Ok(Stator {
            wiring: Permutation::from_key(key)?,
            kind: StatorKind::Plugboard,
        })
    }

    /// Builds a reflector from a wiring key.
    ///
    /// On top of key validation, the wiring must be a true involution
    /// with no letter mapping onto itself, otherwise the signal could
    /// not leave the machine on a different letter than it entered.
    ///
    /// # Errors
    /// - Key validation errors as for [`Permutation::from_key`].
    /// - [`EnigmaError::ReflectorSelfMapping`] if a letter maps onto itself.
    /// - [`EnigmaError::ReflectorNotReciprocal`] if a pair does not map
    ///   onto each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::{wirings, Stator};
    ///
    /// let reflector = Stator::reflector(wirings::REFLECTOR_B).unwrap();
    /// assert_eq!(reflector.encrypt_letter('A'), 'Y');
    /// assert_eq!(reflector.encrypt_letter('Y'), 'A');
    /// ```
    ///
    /// ```
    /// use enigmacrypt::Stator;
    ///
    /// // The identity maps every letter onto itself.
    /// assert!(Stator::reflector("ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
    /// ```
    pub fn reflector(key: &str) -> Result<Self, EnigmaError> {
        let wiring = Permutation::from_key(key)?;
        for entry in 0..LETTER_COUNT {
            let exit = wiring.forward(entry);
            if exit == entry {
                return Err(EnigmaError::ReflectorSelfMapping(alphabet::letter_at(entry)));
            }
            if wiring.forward(exit) != entry {
                return Err(EnigmaError::ReflectorNotReciprocal(
                    alphabet::letter_at(entry),
                    alphabet::letter_at(exit),
                ));
            }
        }
        Ok(Stator {
            wiring,
            kind: StatorKind::Reflector,
        })
    }

    /// Substitutes one letter. Characters outside `A..=Z` pass through
    /// unchanged.
    pub fn encrypt_letter(&self, letter: char) -> char {
        match alphabet::letter_index(letter) {
            Some(index) => alphabet::letter_at(self.encipher(index)),
            None => letter,
        }
    }

    /// Index-level substitution used on the hot encipherment path.
    pub(crate) fn encipher(&self, index: usize) -> usize {
        self.wiring.forward(index)
    }

    /// The full substitution table as a 26-letter key string.
    pub fn get_key(&self) -> String {
        self.wiring.key()
    }

    /// The role this stator was validated for.
    pub fn kind(&self) -> StatorKind {
        self.kind
    }
}
