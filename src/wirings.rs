//! Historical wiring tables for rotors and reflectors.
//!
//! The wirings of the service machine's rotors I–V (with their turnover
//! notches), the reflectors A, B, C plus the thin B and C variants, and
//! the empty plugboard. These are plain configuration constants; the
//! cipher engine computes nothing from them beyond validation at
//! assembly time.

use crate::error::EnigmaError;
use crate::rotor::Rotor;

/// A rotor's engraved wiring and its turnover notch letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorWiring {
    /// 26-letter substitution key.
    pub key: &'static str,
    /// Window letter at which the next rotor is carried along.
    pub notch: char,
}

impl RotorWiring {
    /// Assembles a [`Rotor`] from this wiring with the given initial
    /// window letter and ring setting.
    ///
    /// # Errors
    /// Parameter validation errors as for [`Rotor::new`]; the catalog
    /// keys themselves always validate.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::wirings;
    ///
    /// let rotor = wirings::ROTOR_II.assemble('A', 'A').unwrap();
    /// assert_eq!(rotor.window_letter(), 'A');
    /// ```
    pub fn assemble(&self, window: char, ring_setting: char) -> Result<Rotor, EnigmaError> {
        Rotor::new(self.key, self.notch, window, ring_setting)
    }
}

/// Rotor I, notch at Q.
pub const ROTOR_I: RotorWiring = RotorWiring {
    key: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    notch: 'Q',
};

/// Rotor II, notch at E.
pub const ROTOR_II: RotorWiring = RotorWiring {
    key: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
    notch: 'E',
};

/// Rotor III, notch at V.
pub const ROTOR_III: RotorWiring = RotorWiring {
    key: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
    notch: 'V',
};

/// Rotor IV, notch at J.
pub const ROTOR_IV: RotorWiring = RotorWiring {
    key: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
    notch: 'J',
};

/// Rotor V, notch at Z.
pub const ROTOR_V: RotorWiring = RotorWiring {
    key: "VZBRGITYUPSDNHLXAWMJQOFECK",
    notch: 'Z',
};

/// Reflector A.
pub const REFLECTOR_A: &str = "EJMZALYXVBWFCRQUONTSPIKHGD";

/// Reflector B, the most common service reflector.
pub const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// Reflector C.
pub const REFLECTOR_C: &str = "FVPJIAOYEDRZXWGCTKUQSBNMHL";

/// Thin reflector B.
pub const REFLECTOR_B_THIN: &str = "ENKQAUYWJICOPBLMDXZVFTHRGS";

/// Thin reflector C.
pub const REFLECTOR_C_THIN: &str = "RDOBJNTKVEHMLFCWZAXGYIPSUQ";

/// Plugboard with no plugs inserted.
pub const PLUGBOARD_EMPTY: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::Permutation;
    use crate::stator::Stator;

    #[test]
    fn every_rotor_wiring_validates() {
        for wiring in [ROTOR_I, ROTOR_II, ROTOR_III, ROTOR_IV, ROTOR_V] {
            assert!(Permutation::from_key(wiring.key).is_ok());
            assert!(wiring.notch.is_ascii_uppercase());
        }
    }

    #[test]
    fn every_reflector_wiring_validates() {
        for key in [
            REFLECTOR_A,
            REFLECTOR_B,
            REFLECTOR_C,
            REFLECTOR_B_THIN,
            REFLECTOR_C_THIN,
        ] {
            assert!(Stator::reflector(key).is_ok());
        }
    }

    #[test]
    fn assemble_builds_a_positioned_rotor() {
        let rotor = ROTOR_V.assemble('M', 'C').unwrap();
        assert_eq!(rotor.window_letter(), 'M');
        assert!(!rotor.is_at_notch());
    }
}
