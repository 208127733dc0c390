use fuzzy_core::*;

/// Symmetric two-input heater: error and drift -> power
fn heater() -> InferenceEngine {
    let error = LinguisticVariable::new(
        "error",
        Universe::new(-10.0, 10.0, 0.5).unwrap(),
        [
            ("NEG", Membership::trapezoidal(-10.0, -10.0, -4.0, 0.0).unwrap()),
            ("ZERO", Membership::triangular(-4.0, 0.0, 4.0).unwrap()),
            ("POS", Membership::trapezoidal(0.0, 4.0, 10.0, 10.0).unwrap()),
        ],
    )
    .unwrap();
    let drift = LinguisticVariable::new(
        "drift",
        Universe::new(-1.0, 1.0, 0.1).unwrap(),
        [
            ("FALLING", Membership::trapezoidal(-1.0, -1.0, -0.5, 0.0).unwrap()),
            ("STEADY", Membership::triangular(-0.5, 0.0, 0.5).unwrap()),
            ("RISING", Membership::trapezoidal(0.0, 0.5, 1.0, 1.0).unwrap()),
        ],
    )
    .unwrap();
    let power = LinguisticVariable::new(
        "power",
        Universe::new(-1.0, 1.0, 0.05).unwrap(),
        [
            ("DOWN", Membership::triangular(-1.0, -1.0, 0.0).unwrap()),
            ("HOLD", Membership::triangular(-0.5, 0.0, 0.5).unwrap()),
            ("UP", Membership::triangular(0.0, 1.0, 1.0).unwrap()),
        ],
    )
    .unwrap();

    let table = [
        ("NEG", ["HOLD", "DOWN", "DOWN"]),
        ("ZERO", ["UP", "HOLD", "DOWN"]),
        ("POS", ["UP", "UP", "HOLD"]),
    ];
    let drifts = ["FALLING", "STEADY", "RISING"];
    let rules = table
        .iter()
        .flat_map(|(e, row)| {
            drifts
                .iter()
                .zip(row)
                .map(move |(d, out)| Rule::when("error", *e).and("drift", *d).then(*out))
        })
        .collect();

    InferenceEngine::new(vec![error, drift], power, rules).unwrap()
}

#[test]
fn test_repeated_inference_is_bit_identical() {
    let engine = heater();
    for &(e, d) in &[(0.0, 0.0), (3.3, -0.2), (-7.1, 0.9), (12.0, -3.0)] {
        let first = engine.infer(&[("error", e), ("drift", d)]).unwrap();
        let second = engine.infer(&[("drift", d), ("error", e)]).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}

#[test]
fn test_mirrored_inputs_mirror_output() {
    let engine = heater();
    for k in [0.5, 1.0, 2.5, 4.0, 6.0, 9.5] {
        let up = engine.infer_positional(&[k, 0.0]).unwrap();
        let down = engine.infer_positional(&[-k, 0.0]).unwrap();
        assert!((up + down).abs() < 1e-9, "k={k}: {up} vs {down}");
        assert!(up > 0.0);
    }
}

#[test]
fn test_centre_is_neutral() {
    let engine = heater();
    let out = engine.infer(&[("error", 0.0), ("drift", 0.0)]).unwrap();
    assert!(out.abs() < 1e-12);
}

#[test]
fn test_trace_matches_output() {
    let engine = heater();
    let inference = engine.evaluate(&[("error", 2.0), ("drift", 0.25)]).unwrap();
    assert_eq!(inference.degrees.len(), 2);
    assert_eq!(inference.strengths.len(), 9);
    assert_eq!(inference.activations.len(), 3);
    assert_eq!(
        inference.output,
        engine.infer(&[("error", 2.0), ("drift", 0.25)]).unwrap()
    );

    let error = engine.antecedents()[0].fuzzify(2.0);
    assert_eq!(error.degree("ZERO"), Some(0.5));
    assert_eq!(error.degree("POS"), Some(0.5));
}
