//! # Shift Protocol Benchmarks
//!
//! Measures the protocol overhead of bit-banging frames, without real pin
//! latency: a no-op sink shows the cost of the driver itself, the chain
//! emulator adds the register model on top.
//!
//! Run: `cargo bench --bench shift_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lights::LightArray;
use lights_core::{PinResult, PinSink};
use lights_driver::{ChainEmulator, ShiftRegisterChain, BITS_PER_CHIP, MAX_CHIPS};

/// Accepts every level change and does nothing
struct NullPins;

impl PinSink for NullPins {
    fn set_data(&mut self, level: bool) -> PinResult<()> {
        black_box(level);
        Ok(())
    }

    fn set_clock(&mut self, level: bool) -> PinResult<()> {
        black_box(level);
        Ok(())
    }

    fn set_latch(&mut self, level: bool) -> PinResult<()> {
        black_box(level);
        Ok(())
    }

    fn set_control(&mut self, level: bool) -> PinResult<()> {
        black_box(level);
        Ok(())
    }

    fn get_control(&mut self) -> PinResult<bool> {
        Ok(false)
    }
}

/// Benchmark a single shifted bit
fn bench_shift_bit(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift_bit");
    let mut chain = ShiftRegisterChain::new(NullPins, 1).unwrap();

    group.bench_function("shift_high", |b| {
        b.iter(|| chain.shift_high())
    });

    group.bench_function("shift_low", |b| {
        b.iter(|| chain.shift_low())
    });

    group.finish();
}

/// Benchmark full frames for every chain length
fn bench_write_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_chain");

    for chips in 1..=MAX_CHIPS {
        group.throughput(Throughput::Elements((chips * BITS_PER_CHIP) as u64));

        let mut null = ShiftRegisterChain::new(NullPins, chips).unwrap();
        group.bench_with_input(BenchmarkId::new("null", chips), &chips, |b, _| {
            b.iter(|| null.write(black_box(0xA5A5_A5A5_A5A5_A5A5)))
        });

        let mut emulated = ShiftRegisterChain::new(ChainEmulator::new(chips), chips).unwrap();
        group.bench_with_input(BenchmarkId::new("emulator", chips), &chips, |b, _| {
            b.iter(|| emulated.write(black_box(0xA5A5_A5A5_A5A5_A5A5)))
        });
    }

    group.finish();
}

/// Benchmark a running light through a LightArray
fn bench_light_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("light_array");

    let chain = ShiftRegisterChain::new(ChainEmulator::new(3), 3).unwrap();
    let mut lights = LightArray::new(chain, 24).unwrap();
    let mut pattern = lights.new_pattern(false);
    pattern.set(0, true).unwrap();

    group.bench_function("running_light", |b| {
        b.iter(|| {
            lights.set(&pattern).unwrap();
            pattern.rotate_left(1);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_shift_bit,
    bench_write_chain,
    bench_light_array,
);

criterion_main!(benches);
