use rgbetween_core::{ConfigError, Gradient, GradientConfig, GradientError};

#[test]
fn builds_from_hex_list_with_stops() {
    let g = Gradient::from_json(
        r##"{"colors": ["#000000", "#ff8000", "#ffffff"], "stops": [0.0, 0.3, 1.0], "easing": 0.1}"##,
    )
    .unwrap();
    assert_eq!(g.stops(), &[0.0, 0.3, 1.0]);
    assert_eq!(g.easing(), 0.1);
    assert_eq!(g.evaluate_hex(0.3), "#ff8000");
}

#[test]
fn builds_from_pairs() {
    let g = Gradient::from_json(r##"{"colors": [["#000000", 0.0], ["#ffffff", 1.0]]}"##).unwrap();
    assert_eq!(g.evaluate_hex(0.5), "#808080");
    assert!(!g.has_uniform_stops());
}

#[test]
fn invalid_descriptions_report_validation_errors() {
    let err = Gradient::from_json(r##"{"colors": ["#000000"]}"##).unwrap_err();
    assert!(matches!(err, GradientError::Config(ConfigError::TooFewColors(1))));

    let err = Gradient::from_json(r##"{"colors": "#000000"}"##).unwrap_err();
    assert!(matches!(err, GradientError::Json(_)));
}

#[test]
fn easing_is_clamped_on_load() {
    let g = Gradient::from_json(r##"{"colors": ["#000000", "#ffffff"], "easing": 4.0}"##).unwrap();
    assert_eq!(g.easing(), 1.0);
}

#[test]
fn gradient_survives_serde_round_trip() {
    let g = Gradient::with_stops(&["#102030", "#abcdef", "#ffffff"], &[0.0, 0.4, 1.0])
        .unwrap()
        .with_easing(0.25);
    let json = serde_json::to_string(&g).unwrap();
    let back: Gradient = serde_json::from_str(&json).unwrap();
    assert_eq!(back, g);
}

#[test]
fn serde_deserialization_validates() {
    let result = serde_json::from_str::<Gradient>(r##"{"colors": ["#000000", "#fff"]}"##);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("invalid length"), "{err}");
}

#[test]
fn config_round_trip_keeps_implicit_stops() {
    let g = Gradient::new(&["#000000", "#7f7f7f", "#ffffff"]).unwrap();
    let config = g.to_config();
    assert_eq!(config.stops, None);
    let json = config.to_json().unwrap();
    let back = GradientConfig::from_json(&json).unwrap().build().unwrap();
    assert!(back.has_uniform_stops());
    assert_eq!(back, g);
}
