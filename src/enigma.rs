//! Enigma: the assembled rotor cipher machine.
//!
//! Composes the plugboard, the rotor bank, and the reflector into one
//! per-letter encipherment pipeline. The reflector sends the signal back
//! through the rotor stack, which makes the whole machine self-reciprocal:
//! a second machine in the same starting configuration deciphers what the
//! first enciphered.

use std::fmt;

use crate::rotor::Rotor;
use crate::rotor_bank::{RotorBank, ROTOR_COUNT};
use crate::stator::Stator;
use crate::utils::alphabet;
use crate::utils::alphabet::LETTER_COUNT;

/// An assembled cipher machine.
///
/// # Architecture
///
/// ```text
/// keyboard ──→ plugboard ──→ rotor 0 ──→ rotor 1 ──→ rotor 2 ──┐
///                                                          reflector
/// lampboard ←── plugboard ←── rotor 0 ←── rotor 1 ←── rotor 2 ─┘
/// ```
///
/// Rotor 0 is the rightmost/fastest rotor. The rotor bank steps once per
/// keystroke *before* the letter is enciphered; the plugboard applies the
/// same forward substitution on entry and exit.
///
/// One machine instance owns its components exclusively and is fully
/// synchronous; concurrent sessions each need their own instance because
/// stepping mutates rotor state.
///
/// # Examples
///
/// ```
/// use enigmacrypt::{wirings, Enigma, Stator};
///
/// // Service configuration B-I-II-III, all windows at A, rings at A.
/// let mut machine = Enigma::new(
///     [
///         wirings::ROTOR_III.assemble('A', 'A').unwrap(),
///         wirings::ROTOR_II.assemble('A', 'A').unwrap(),
///         wirings::ROTOR_I.assemble('A', 'A').unwrap(),
///     ],
///     Stator::plugboard(wirings::PLUGBOARD_EMPTY).unwrap(),
///     Stator::reflector(wirings::REFLECTOR_B).unwrap(),
/// );
/// assert_eq!(machine.encrypt("AAAAA", true), "BDZGO");
/// ```
#[derive(Debug, Clone)]
pub struct Enigma {
    rotors: RotorBank,
    plugboard: Stator,
    reflector: Stator,
    letters_processed: u64,
}

impl Enigma {
    /// Assembles a machine from three rotors (index 0 = rightmost), a
    /// plugboard, and a reflector.
    ///
    /// All components are validated at their own construction; assembly
    /// itself cannot fail. The processed-letter counter starts at zero
    /// and is reset only by building a new machine.
    pub fn new(rotors: [Rotor; ROTOR_COUNT], plugboard: Stator, reflector: Stator) -> Self {
        Enigma {
            rotors: RotorBank::new(rotors),
            plugboard,
            reflector,
            letters_processed: 0,
        }
    }

    /// Enciphers a single keystroke.
    ///
    /// Steps the rotor bank, then sends the letter through the full
    /// pipeline. Characters outside `A..=Z` pass through unchanged with
    /// no stepping, no substitution, and no counter increment — the
    /// policy for spaces, punctuation, and digits.
    pub fn encrypt_letter(&mut self, letter: char) -> char {
        self.process(letter, true)
    }

    /// Enciphers a whole text, letter by letter.
    ///
    /// With `should_turn` false the stepping mechanism is skipped for
    /// the entire call, so every letter is enciphered at the same fixed
    /// machine state. That exposes the bare permutation stack for
    /// verification, independent of rotor motion.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::{wirings, Enigma, Stator};
    ///
    /// let mut machine = Enigma::new(
    ///     [
    ///         wirings::ROTOR_III.assemble('A', 'A').unwrap(),
    ///         wirings::ROTOR_II.assemble('A', 'A').unwrap(),
    ///         wirings::ROTOR_I.assemble('A', 'A').unwrap(),
    ///     ],
    ///     Stator::plugboard(wirings::PLUGBOARD_EMPTY).unwrap(),
    ///     Stator::reflector(wirings::REFLECTOR_B).unwrap(),
    /// );
    /// let ciphertext = machine.encrypt("UEJOBTPZWCNSRKDGVMLFAQIYXH", false);
    /// assert_eq!(ciphertext, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    /// ```
    pub fn encrypt(&mut self, text: &str, should_turn: bool) -> String {
        text.chars()
            .map(|letter| self.process(letter, should_turn))
            .collect()
    }

    /// Enciphers a whole text and records a [`LetterTrace`] for every
    /// enciphered letter: the encipherment ordinal, the substitution
    /// key in effect, and the rotor windows after stepping. Passthrough
    /// characters produce no trace entry.
    pub fn encrypt_verbose(&mut self, text: &str) -> (String, Vec<LetterTrace>) {
        let mut traces = Vec::new();
        let mut cyphertext = String::with_capacity(text.len());
        for letter in text.chars() {
            let output = self.process(letter, true);
            cyphertext.push(output);
            if alphabet::letter_index(letter).is_some() {
                traces.push(LetterTrace {
                    ordinal: self.letters_processed,
                    input: letter,
                    output,
                    key: self.get_resulting_key(),
                    windows: self.windows(),
                });
            }
        }
        (cyphertext, traces)
    }

    /// Derives the net substitution table for the current machine state.
    ///
    /// Maps every alphabet letter through the pipeline without stepping
    /// and without touching the counter: the composition of plugboard,
    /// rotor, and reflector keys at this exact state. The table is
    /// itself a valid permutation and self-inverse, inherited from the
    /// reflector's involution.
    pub fn get_resulting_key(&self) -> String {
        (0..LETTER_COUNT)
            .map(|index| alphabet::letter_at(self.encipher(index)))
            .collect()
    }

    /// The rotor window letters as the operator reads them, leftmost
    /// rotor first, e.g. `"AAA"`.
    pub fn windows(&self) -> String {
        self.rotors.windows()
    }

    /// Read-only access to the rotor bank.
    pub fn rotors(&self) -> &RotorBank {
        &self.rotors
    }

    /// Number of letters enciphered since assembly. Passthrough
    /// characters do not count.
    pub fn letters_processed(&self) -> u64 {
        self.letters_processed
    }

    /// Steps (optionally) and enciphers one character, applying the
    /// passthrough policy for non-alphabetic input.
    fn process(&mut self, letter: char, should_turn: bool) -> char {
        match alphabet::letter_index(letter) {
            None => letter,
            Some(index) => {
                if should_turn {
                    self.rotors.step();
                }
                self.letters_processed += 1;
                alphabet::letter_at(self.encipher(index))
            }
        }
    }

    /// The full pipeline at the current state: plugboard, rotors
    /// forward, reflector, rotors reverse, plugboard again.
    fn encipher(&self, index: usize) -> usize {
        let entered = self.plugboard.encipher(index);
        let ascended = self.rotors.encipher(entered);
        let reflected = self.reflector.encipher(ascended);
        let descended = self.rotors.decipher(reflected);
        self.plugboard.encipher(descended)
    }
}

/// Record of one letter's encipherment, for display and verification.
///
/// Rendered via `Display` in the historical trace shape: the 1-based
/// encipherment ordinal, the input letter, the resulting substitution
/// key with the output letter bracketed, the window letters, and their
/// 1-based positions:
///
/// ```text
/// 001 A > (B)AQMFEXIHSWPDYTLCVJOZRKGNU AAB 01 01 02
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterTrace {
    /// 1-based count of letters enciphered so far, this one included.
    pub ordinal: u64,
    /// The plaintext letter as typed.
    pub input: char,
    /// The enciphered letter.
    pub output: char,
    /// The resulting substitution key at the post-step state.
    pub key: String,
    /// Window letters after stepping, leftmost rotor first.
    pub windows: String,
}

impl fmt::Display for LetterTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03} {} > ", self.ordinal, self.input)?;
        match self.key.find(self.output) {
            Some(position) => write!(
                f,
                "{}({}){}",
                &self.key[..position],
                self.output,
                &self.key[position + 1..]
            )?,
            None => write!(f, "{}", self.key)?,
        }
        write!(f, " {}", self.windows)?;
        for letter in self.windows.chars() {
            if let Some(index) = alphabet::letter_index(letter) {
                write!(f, " {:02}", index + 1)?;
            }
        }
        Ok(())
    }
}
