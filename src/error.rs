//! Error types for the enigmacrypt library.

use thiserror::Error;

/// Errors produced when assembling machine components.
///
/// All variants are raised at construction time only; a validly
/// constructed machine never fails during encipherment. The first four
/// variants reject malformed wiring-key strings and letter parameters,
/// the reflector variants reject wirings that are not fixed-point-free
/// involutions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// Wiring key string is not exactly 26 characters long.
    #[error("wiring key must be exactly 26 letters, got {0}")]
    KeyLength(usize),
    /// Wiring key contains a character that is not an ASCII letter.
    #[error("wiring key contains non-alphabetic character {0:?}")]
    KeyNotAlphabetic(char),
    /// Wiring key repeats a letter, so the mapping is not a bijection.
    #[error("wiring key maps two positions to the same letter {0:?}")]
    KeyNotBijective(char),
    /// A letter parameter (notch, window, or ring setting) is not an
    /// ASCII letter.
    #[error("expected a letter A-Z, got {0:?}")]
    NotALetter(char),
    /// Reflector wiring maps a letter onto itself.
    #[error("reflector wiring maps {0:?} onto itself")]
    ReflectorSelfMapping(char),
    /// Reflector wiring is not reciprocal: a letter pair does not map
    /// onto each other.
    #[error("reflector wiring is not reciprocal: {0:?} maps to {1:?} but not back")]
    ReflectorNotReciprocal(char, char),
}
