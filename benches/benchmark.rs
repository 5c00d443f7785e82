//! Benchmarks for the Enigma cipher engine.
//!
//! Measures machine assembly, single-keystroke encipherment, message
//! throughput scaling across text lengths, and resulting-key derivation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigmacrypt::{wirings, Enigma, Stator};

/// Window configuration used consistently across all benchmarks.
const BENCH_WINDOWS: [char; 3] = ['Q', 'E', 'V'];

/// Assembles the service machine B-I-II-III at the bench windows.
fn bench_machine() -> Enigma {
    Enigma::new(
        [
            wirings::ROTOR_III.assemble(BENCH_WINDOWS[2], 'B').unwrap(),
            wirings::ROTOR_II.assemble(BENCH_WINDOWS[1], 'C').unwrap(),
            wirings::ROTOR_I.assemble(BENCH_WINDOWS[0], 'D').unwrap(),
        ],
        Stator::plugboard("BADCFEHGJILKNMPORQTSVUXWZY").unwrap(),
        Stator::reflector(wirings::REFLECTOR_B).unwrap(),
    )
}

/// Benchmarks full machine assembly including wiring validation.
fn bench_assembly(c: &mut Criterion) {
    c.bench_function("machine_assembly", |b| {
        b.iter(|| black_box(bench_machine()));
    });
}

/// Benchmarks single-keystroke encipherment.
///
/// The machine is assembled once and state advances naturally between
/// iterations, reflecting real streaming behavior of an operator
/// typing a message.
fn bench_encrypt_letter(c: &mut Criterion) {
    let mut machine = bench_machine();
    c.bench_function("encrypt_letter", |b| {
        b.iter(|| machine.encrypt_letter(black_box('A')));
    });
}

/// Benchmarks message throughput across increasing text lengths.
fn bench_encrypt_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt_message");
    for size in [26usize, 260, 2600] {
        let plaintext: String = ('A'..='Z').cycle().take(size).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &plaintext, |b, text| {
            let mut machine = bench_machine();
            b.iter(|| machine.encrypt(black_box(text), true));
        });
    }
    group.finish();
}

/// Benchmarks derivation of the full 26-letter resulting key at a
/// fixed state.
fn bench_resulting_key(c: &mut Criterion) {
    let machine = bench_machine();
    c.bench_function("resulting_key", |b| {
        b.iter(|| black_box(machine.get_resulting_key()));
    });
}

criterion_group!(
    benches,
    bench_assembly,
    bench_encrypt_letter,
    bench_encrypt_message,
    bench_resulting_key
);
criterion_main!(benches);
