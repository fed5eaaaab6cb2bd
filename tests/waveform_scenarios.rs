// Integration tests driving the sampler end to end over each waveform shape.

use wavegen::gen::{Waveform, WaveformKind};
use wavegen::sampler::Sampler;

const EPSILON: f32 = 1e-3;

#[test]
fn test_sine_one_second_at_four_hertz() {
    let wave = Waveform::new(WaveformKind::Sine, 1.0, 1.0, 0.0);
    let series = Sampler::new(1.0, 4).run(&wave);

    assert_eq!(series.len(), 5);

    let times: Vec<f32> = series.iter().map(|s| s.time).collect();
    assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

    let expected = [0.0, 1.0, 0.0, -1.0, 0.0];
    for (sample, want) in series.iter().zip(expected) {
        assert!(
            (sample.value - want).abs() < EPSILON,
            "sine at t = {} should be {}, got {}",
            sample.time,
            want,
            sample.value
        );
    }
}

#[test]
fn test_square_one_second_at_four_hertz() {
    let wave = Waveform::new(WaveformKind::Square, 1.0, 2.0, 0.0);
    let series = Sampler::new(1.0, 4).run(&wave);

    assert_eq!(series.len(), 5);

    // Every sample sits on a rail.
    for sample in &series {
        assert!(
            sample.value == 2.0 || sample.value == -2.0,
            "square at t = {} should be exactly +/- 2, got {}",
            sample.time,
            sample.value
        );
    }

    // t = 0 and t = 0.5 land on zero crossings and take the positive rail:
    // the sine argument there is exact (0) or rounds non-negative (pi).
    assert_eq!(series[0].value, 2.0);
    assert_eq!(series[2].value, 2.0);
    // Mid-halves are unambiguous.
    assert_eq!(series[1].value, 2.0);
    assert_eq!(series[3].value, -2.0);
    // At t = 1.0 the rounded two-pi argument dips just below zero.
    assert_eq!(series[4].value, -2.0);
}

#[test]
fn test_triangle_peaks_at_quarter_points() {
    let wave = Waveform::new(WaveformKind::Triangle, 1.0, 1.0, 0.0);
    let series = Sampler::new(1.0, 4).run(&wave);

    assert_eq!(series.len(), 5);
    assert!(
        (series[1].value - 1.0).abs() < EPSILON,
        "triangle should peak at t = 0.25, got {}",
        series[1].value
    );
    assert!(
        (series[3].value + 1.0).abs() < EPSILON,
        "triangle should trough at t = 0.75, got {}",
        series[3].value
    );
}

#[test]
fn test_longer_run_keeps_the_grid_and_the_period() {
    let wave = Waveform::new(WaveformKind::Sine, 10.0, 0.5, 0.0);
    let sampler = Sampler::new(2.0, 1000);
    let series = sampler.run(&wave);

    assert_eq!(series.len(), 2001);
    assert_eq!(series[0].time, 0.0);
    assert!(series.last().unwrap().time <= 2.0);

    // One full 10 Hz period is 100 samples at 1 kHz.
    for n in (0..1000).step_by(37) {
        let diff = (series[n].value - series[n + 100].value).abs();
        assert!(
            diff < EPSILON,
            "samples one period apart should match, diff {} at n = {}",
            diff,
            n
        );
    }
}

#[test]
fn test_invalid_selector_produces_no_waveform() {
    let result = WaveformKind::from_selector(4);
    assert!(result.is_err(), "selector 4 should not map to a waveform");

    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("invalid waveform kind"),
        "unexpected error message: {}",
        message
    );
}
