//! Regression tests for the turnover mechanism and its double-step
//! anomaly, driven through the assembled machine.
//!
//! The window sequences are frozen from the documented stepping
//! behavior of the three-rotor machine: the middle rotor is carried
//! once by the right rotor leaving its notch and again, one keystroke
//! later, by its own notch — two advances on consecutive keystrokes.

use enigmacrypt::{wirings, Enigma, LetterTrace, Stator};

/// Machine wired III-II-I left to right (so the rightmost rotor
/// notches at Q and the middle at E), windows leftmost first, rings at
/// A, no plugs, reflector B.
fn turnover_machine(windows: &str) -> Enigma {
    let windows: Vec<char> = windows.chars().collect();
    Enigma::new(
        [
            wirings::ROTOR_I.assemble(windows[2], 'A').unwrap(),
            wirings::ROTOR_II.assemble(windows[1], 'A').unwrap(),
            wirings::ROTOR_III.assemble(windows[0], 'A').unwrap(),
        ],
        Stator::plugboard(wirings::PLUGBOARD_EMPTY).unwrap(),
        Stator::reflector(wirings::REFLECTOR_B).unwrap(),
    )
}

// ═══════════════════════════════════════════════════════════════════════
// Turnover sequences
// ═══════════════════════════════════════════════════════════════════════

/// Seven keystrokes from K/D/N walk through both carries and the
/// double step.
#[test]
fn turnover_window_sequence_from_kdn() {
    let mut machine = turnover_machine("KDN");
    let expected = ["KDO", "KDP", "KDQ", "KER", "LFS", "LFT", "LFU"];
    for windows in expected {
        machine.encrypt_letter('A');
        assert_eq!(machine.windows(), windows);
    }

    // Per-rotor introspection agrees with the window string.
    let rotors = machine.rotors().rotors();
    assert_eq!(rotors[0].window_letter(), 'U');
    assert_eq!(rotors[1].window_letter(), 'F');
    assert_eq!(rotors[2].window_letter(), 'L');
}

/// The anomaly itself: the middle rotor advances on two consecutive
/// keystrokes, first carried by the right rotor, then by its own notch.
#[test]
fn middle_rotor_advances_twice_in_a_row() {
    let mut machine = turnover_machine("KDQ");
    machine.encrypt_letter('A');
    assert_eq!(machine.windows(), "KER");
    machine.encrypt_letter('A');
    assert_eq!(machine.windows(), "LFS");
    machine.encrypt_letter('A');
    assert_eq!(machine.windows(), "LFT");
}

/// Passthrough characters reach the output but never the stepping
/// mechanism, even with the machine parked on a notch.
#[test]
fn passthrough_does_not_trigger_turnover() {
    let mut machine = turnover_machine("KDQ");
    assert_eq!(machine.encrypt("... ", true), "... ");
    assert_eq!(machine.windows(), "KDQ");
    assert_eq!(machine.letters_processed(), 0);
}

/// Disabling stepping freezes the windows even across notch positions.
#[test]
fn should_turn_false_freezes_the_windows() {
    let mut machine = turnover_machine("KDQ");
    machine.encrypt("AAAAAAA", false);
    assert_eq!(machine.windows(), "KDQ");
    assert_eq!(machine.letters_processed(), 7);
}

// ═══════════════════════════════════════════════════════════════════════
// Trace output
// ═══════════════════════════════════════════════════════════════════════

/// Frozen verbose trace for the canonical AAAAA encipherment: ordinals,
/// windows, and the bracketed-key display shape.
#[test]
fn verbose_trace_frozen_lines() {
    let mut machine = Enigma::new(
        [
            wirings::ROTOR_III.assemble('A', 'A').unwrap(),
            wirings::ROTOR_II.assemble('A', 'A').unwrap(),
            wirings::ROTOR_I.assemble('A', 'A').unwrap(),
        ],
        Stator::plugboard(wirings::PLUGBOARD_EMPTY).unwrap(),
        Stator::reflector(wirings::REFLECTOR_B).unwrap(),
    );
    let (ciphertext, traces) = machine.encrypt_verbose("AAAAA");
    assert_eq!(ciphertext, "BDZGO");
    assert_eq!(traces.len(), 5);

    let lines: Vec<String> = traces.iter().map(LetterTrace::to_string).collect();
    assert_eq!(lines[0], "001 A > (B)AQMFEXIHSWPDYTLCVJOZRKGNU AAB 01 01 02");
    assert_eq!(lines[4], "005 A > (O)SNIRGFMDPVUHCAJWEBXLKQTZY AAF 01 01 06");

    // Each trace key is the machine's involution at that state, so the
    // output letter always appears in it exactly once.
    for (trace, output) in traces.iter().zip(ciphertext.chars()) {
        assert_eq!(trace.output, output);
        assert_eq!(trace.key.matches(output).count(), 1);
    }
}
