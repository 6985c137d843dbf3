// File: crates/candlechart-core/tests/labelling.rs
// Purpose: Properties of the optimal label search over a spread of data ranges.

use candlechart_core::labelling::{Candidate, Weights};
use candlechart_core::{optimal_labels, Containment, LabelParams, RenderError};

const RANGES: &[(f64, f64)] = &[
    (0.0, 100.0),
    (-37.2, -3.1),
    (7.3, 12.7),
    (0.0012, 0.0047),
    (1.0e6, 5.3e6),
    (-1.0, 1.0),
    (99.5, 100.25),
];

#[test]
fn labels_are_sorted_and_evenly_spaced() {
    let params = LabelParams::default();
    for &(lo, hi) in RANGES {
        for want in [2, 5, 10, 15] {
            let l = optimal_labels(lo, hi, want, Containment::Free, &params).expect("labels");
            assert!(l.values.len() >= 2, "[{lo}, {hi}] want {want}: {:?}", l.values);
            let step = l.major_step();
            assert!(step > 0.0);
            for w in l.values.windows(2) {
                assert!(w[1] > w[0]);
                assert!(((w[1] - w[0]) - step).abs() <= step * 1e-9, "uneven step in {:?}", l.values);
            }
            assert!(!l.is_fallback());
            assert_eq!(l.step, l.skip as f64 * l.q);
            assert!(params.nice_numbers.contains(&l.q));
        }
    }
}

#[test]
fn zero_to_hundred_beats_naive_split() {
    let params = LabelParams::default();
    let l = optimal_labels(0.0, 100.0, 5, Containment::Free, &params).expect("labels");
    let naive = Candidate { q: 2.5, skip: 1, count: 5, l_min: 0.0, l_max: 100.0, step: 25.0 };
    let naive_score = params.score(0.0, 100.0, 5, &naive).expect("2.5 is a nice number");
    let best = l.score.expect("search result is scored");
    assert!(best >= naive_score - 1e-12, "best {best} < naive {naive_score}");
    assert!(l.values[0] <= 10.0 && *l.values.last().expect("non-empty") >= 90.0);
}

#[test]
fn search_is_deterministic() {
    let params = LabelParams::default();
    for &(lo, hi) in RANGES {
        let a = optimal_labels(lo, hi, 7, Containment::Free, &params).expect("labels");
        let b = optimal_labels(lo, hi, 7, Containment::Free, &params).expect("labels");
        assert_eq!(a, b);
    }
}

#[test]
fn containment_is_honoured() {
    let params = LabelParams::default();
    let tol = 1e-9;
    for &(lo, hi) in RANGES {
        let c = optimal_labels(lo, hi, 5, Containment::ContainData, &params).expect("labels");
        let (first, last) = (c.values[0], c.values[c.values.len() - 1]);
        assert!(first <= lo + tol * lo.abs().max(1.0) && last >= hi - tol * hi.abs().max(1.0), "{:?}", c.values);

        let w = optimal_labels(lo, hi, 5, Containment::WithinData, &params).expect("labels");
        let (first, last) = (w.values[0], w.values[w.values.len() - 1]);
        assert!(first >= lo - tol * lo.abs().max(1.0) && last <= hi + tol * hi.abs().max(1.0), "{:?}", w.values);
    }
}

#[test]
fn degenerate_range_falls_back_to_uniform() {
    let l = optimal_labels(5.0, 5.0, 4, Containment::Free, &LabelParams::default()).expect("labels");
    assert!(l.is_fallback());
    assert_eq!(l.values, vec![5.0; 4]);
    assert_eq!(l.score, None);
    assert_eq!(l.magnitude, 0);
}

#[test]
fn near_zero_span_falls_back_to_uniform() {
    let (lo, hi) = (1.0, 1.0 + 1e-15);
    let want = 4;
    let l = optimal_labels(lo, hi, want, Containment::Free, &LabelParams::default()).expect("labels");
    assert!(l.is_fallback());
    assert_eq!(l.values.len(), want);
    assert_eq!(l.values[0], lo);
    assert_eq!(l.step, (hi - lo) / (want - 1) as f64);
    for (i, v) in l.values.iter().enumerate() {
        assert!((v - (lo + i as f64 * l.step)).abs() <= 1e-15, "{:?}", l.values);
    }
    assert!(l.values.windows(2).all(|w| w[1] >= w[0]));
    assert!((l.values[want - 1] - hi).abs() <= 1e-15);
}

#[test]
fn bad_input_is_rejected() {
    let p = LabelParams::default();
    assert!(matches!(optimal_labels(2.0, 1.0, 5, Containment::Free, &p), Err(RenderError::InvalidRange(_))));
    assert!(matches!(optimal_labels(f64::NAN, 1.0, 5, Containment::Free, &p), Err(RenderError::InvalidRange(_))));
    assert!(matches!(optimal_labels(0.0, 1.0, 1, Containment::Free, &p), Err(RenderError::InvalidRange(_))));
    // Finite bounds whose span overflows.
    assert!(matches!(optimal_labels(-1e308, 1e308, 15, Containment::Free, &p), Err(RenderError::InvalidRange(_))));
    assert!(matches!(optimal_labels(-f64::MAX, f64::MAX, 5, Containment::ContainData, &p), Err(RenderError::InvalidRange(_))));

    let empty = LabelParams { nice_numbers: vec![], ..LabelParams::default() };
    assert!(matches!(optimal_labels(0.0, 1.0, 5, Containment::Free, &empty), Err(RenderError::InvalidConfig(_))));
    let flat = LabelParams { weights: Weights { density: 0.0, ..Weights::default() }, ..LabelParams::default() };
    assert!(matches!(optimal_labels(0.0, 1.0, 5, Containment::Free, &flat), Err(RenderError::InvalidConfig(_))));
}

#[test]
fn custom_nice_numbers_restrict_steps() {
    let params = LabelParams { nice_numbers: vec![1.0, 5.0], ..LabelParams::default() };
    let l = optimal_labels(0.0, 37.0, 6, Containment::Free, &params).expect("labels");
    assert!(l.q == 1.0 || l.q == 5.0);
}
