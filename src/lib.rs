//! Enigma rotor cipher machine engine.
//!
//! Models the signal path of the electromechanical rotor cipher machine:
//! a plugboard, three rotating substitution rotors, and a reflector,
//! wired so that every keystroke yields a reciprocal substitution while
//! the rotor stack advances — including the historical double-step
//! anomaly of the middle rotor.
//!
//! # Architecture
//!
//! ```text
//! Permutation  (atomic unit — validated bijection over the 26 letters)
//!     ↕ owned by
//! Stator       (static wiring — plugboard, involutive reflector)
//! Rotor        (wiring + notch, ring setting, rotational offset)
//!     ↕ three in order
//! RotorBank    (stepping mechanism — turnover and double-step decision)
//!     ↕ composed by
//! Enigma       (orchestrator — plugboard → rotors → reflector → rotors
//!               → plugboard, letter counter, trace derivation)
//! ```
//!
//! # Examples
//!
//! Encipher and decipher with two machines in the same configuration:
//!
//! ```
//! use enigmacrypt::{wirings, Enigma, Stator};
//!
//! fn assemble() -> Enigma {
//!     Enigma::new(
//!         [
//!             wirings::ROTOR_III.assemble('A', 'A').unwrap(),
//!             wirings::ROTOR_II.assemble('A', 'A').unwrap(),
//!             wirings::ROTOR_I.assemble('A', 'A').unwrap(),
//!         ],
//!         Stator::plugboard(wirings::PLUGBOARD_EMPTY).unwrap(),
//!         Stator::reflector(wirings::REFLECTOR_B).unwrap(),
//!     )
//! }
//!
//! let mut encoder = assemble();
//! let ciphertext = encoder.encrypt("AAAAA", true);
//! assert_eq!(ciphertext, "BDZGO");
//!
//! let mut decoder = assemble();
//! assert_eq!(decoder.encrypt(&ciphertext, true), "AAAAA");
//! ```
//!
//! Inspect the machine state while enciphering:
//!
//! ```
//! use enigmacrypt::{wirings, Enigma, Stator};
//!
//! let mut machine = Enigma::new(
//!     [
//!         wirings::ROTOR_III.assemble('A', 'A').unwrap(),
//!         wirings::ROTOR_II.assemble('A', 'A').unwrap(),
//!         wirings::ROTOR_I.assemble('A', 'A').unwrap(),
//!     ],
//!     Stator::plugboard(wirings::PLUGBOARD_EMPTY).unwrap(),
//!     Stator::reflector(wirings::REFLECTOR_B).unwrap(),
//! );
//!
//! machine.encrypt_letter('A');
//! assert_eq!(machine.windows(), "AAB");
//! assert_eq!(machine.letters_processed(), 1);
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod wirings;

mod enigma;
mod permutation;
mod rotor;
mod rotor_bank;
mod stator;
pub(crate) mod utils;

pub use enigma::{Enigma, LetterTrace};
pub use error::EnigmaError;
pub use permutation::Permutation;
pub use rotor::Rotor;
pub use rotor_bank::{RotorBank, ROTOR_COUNT};
pub use stator::{Stator, StatorKind};
