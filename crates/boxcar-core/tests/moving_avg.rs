use boxcar_core::dsp::moving_avg::MovingAvg;
use boxcar_core::runner::BlockRunner;
use proptest::prelude::*;

fn assert_close(out: &[f32], expected: &[f32]) {
    assert_eq!(out.len(), expected.len());
    for (i, (a, b)) in out.iter().zip(expected.iter()).enumerate() {
        assert!((a - b).abs() < 1e-5, "index {i}: got {a}, expected {b}");
    }
}

#[test]
fn impulse_response_n4() {
    let mut runner = BlockRunner::new(MovingAvg::new(4, 1.0));
    let out = runner.process(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_close(&out, &[0.25, 0.25, 0.25, 0.25, 0.0, 0.0]);
}

#[test]
fn step_response_n4_settles_at_scale() {
    let mut runner = BlockRunner::new(MovingAvg::new(4, 1.0));
    let out = runner.process(&[1.0; 8]);
    assert_close(&out, &[0.25, 0.5, 0.75, 1.0, 1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn ramp_n4_zero_primed_average() {
    let input: Vec<f32> = (1..=8).map(|v| v as f32).collect();
    let mut runner = BlockRunner::new(MovingAvg::new(4, 1.0));
    let out = runner.process(&input);
    assert_close(&out, &[0.25, 0.75, 1.5, 2.5, 3.5, 4.5, 5.5, 6.5]);
}

#[test]
fn ramp_n4_scale_cancels_division() {
    // scale 4 against window 4 leaves the raw sliding sums
    let input: Vec<f32> = (1..=8).map(|v| v as f32).collect();
    let mut runner = BlockRunner::new(MovingAvg::new(4, 4.0));
    let out = runner.process(&input);
    assert_close(&out, &[1.0, 3.0, 6.0, 10.0, 14.0, 18.0, 22.0, 26.0]);
}

#[test]
fn filter_reports_requested_production() {
    let avg = MovingAvg::new(4, 1.0);
    let run = [0.0f32; 11];
    let mut out = [0.0f32; 8];
    assert_eq!(avg.filter(&run, &mut out), 8);

    let identity = MovingAvg::new(1, 1.0);
    let mut empty: [f32; 0] = [];
    assert_eq!(identity.filter(&[], &mut empty), 0);
}

#[test]
fn nan_input_propagates_to_output() {
    let mut runner = BlockRunner::new(MovingAvg::new(2, 1.0));
    let out = runner.process(&[1.0, f32::NAN, 3.0]);
    assert_eq!(out.len(), 3);
    assert!((out[0] - 0.5).abs() < 1e-6);
    assert!(out[1].is_nan());
    assert!(out[2].is_nan());
    // only the scale parameter is sanitized, never the stream
    assert_eq!(runner.block().scale(), 1.0);
}

fn naive_boxcar(input: &[f32], n: usize, scale: f32) -> Vec<f32> {
    let gain = scale / n as f32;
    (0..input.len())
        .map(|i| {
            let mut sum = 0.0f32;
            for k in 0..n.min(i + 1) {
                sum += input[i - k];
            }
            gain * sum
        })
        .collect()
}

proptest! {
    #[test]
    fn matches_naive_windowed_sum(
        input in proptest::collection::vec(-1_000.0f32..1_000.0, 0..200),
        n in 1i32..32,
        scale in -8.0f32..8.0,
    ) {
        let mut runner = BlockRunner::new(MovingAvg::new(n, scale));
        let out = runner.process(&input);
        let expected = naive_boxcar(&input, n as usize, scale);
        prop_assert_eq!(out.len(), expected.len());
        for (a, b) in out.iter().zip(expected.iter()) {
            prop_assert!(
                (a - b).abs() <= 1e-2 * (1.0 + b.abs()),
                "got {}, expected {}", a, b
            );
        }
    }
}
