use anyhow::Result;
use curveblend_core::{
    interp::{inverse_lerp, lerp_clamped, lerp_f32},
    keyframe::DEFAULT_WEIGHT,
    BlendConfig, Curve, CurveError, Keyframe, TimeShift, WeightedMode,
};
use curveblend_test_fixtures::curves;
use serde_json::json;

#[test]
fn empty_curve_is_rejected() {
    assert_eq!(Curve::new(Vec::new()), Err(CurveError::Empty));
}

#[test]
fn unsorted_and_duplicate_times_are_rejected() {
    let err = Curve::new(vec![Keyframe::new(0.5, 0.0), Keyframe::new(0.2, 1.0)]).unwrap_err();
    assert_eq!(
        err,
        CurveError::Unsorted {
            index: 1,
            previous: 0.5,
            time: 0.2
        }
    );

    let err = Curve::new(vec![
        Keyframe::new(0.0, 0.0),
        Keyframe::new(0.3, 1.0),
        Keyframe::new(0.3, 2.0),
    ])
    .unwrap_err();
    assert!(matches!(err, CurveError::Unsorted { index: 2, .. }));
}

#[test]
fn non_finite_keys_are_rejected() {
    let err = Curve::new(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, f32::NAN)]).unwrap_err();
    assert_eq!(err, CurveError::NonFinite { index: 1 });

    let err = Curve::new(vec![Keyframe::new(f32::INFINITY, 0.0)]).unwrap_err();
    assert_eq!(err, CurveError::NonFinite { index: 0 });
}

#[test]
fn domain_accessors() -> Result<()> {
    let wave = curves::curve("wave")?;
    assert_eq!(wave.len(), 6);
    assert!(!wave.is_empty());
    assert_eq!(wave.start_time(), 0.0);
    assert_eq!(wave.end_time(), 1.0);
    assert_eq!(wave.duration(), 1.0);
    assert_eq!(wave.first().value, 0.5);
    assert_eq!(wave.last().value, 0.3);

    let keys = wave.clone().into_keys();
    assert_eq!(keys.as_slice(), wave.keys());
    assert_eq!(Curve::try_from(keys)?, wave);
    Ok(())
}

#[test]
fn keyframe_json_uses_camel_case_and_defaults() -> Result<()> {
    let key: Keyframe = serde_json::from_value(json!({ "time": 0.25, "value": 2.0 }))?;
    assert_eq!(key, Keyframe::new(0.25, 2.0));
    assert_eq!(key.in_weight, DEFAULT_WEIGHT);
    assert_eq!(key.weighted_mode, WeightedMode::None);

    let key = Keyframe::new(0.0, 1.0)
        .with_tangents(0.5, -0.5)
        .with_weights(0.2, 0.7, WeightedMode::Out);
    let v = serde_json::to_value(key)?;
    assert_eq!(v["inTangent"], json!(0.5));
    assert_eq!(v["outTangent"], json!(-0.5));
    assert_eq!(v["weightedMode"], json!("out"));
    Ok(())
}

#[test]
fn curve_deserialization_enforces_invariants() {
    let bad = json!([
        { "time": 0.6, "value": 0.0 },
        { "time": 0.1, "value": 1.0 }
    ]);
    assert!(serde_json::from_value::<Curve>(bad).is_err());
    assert!(serde_json::from_value::<Curve>(json!([])).is_err());
}

#[test]
fn every_fixture_loads() -> Result<()> {
    let mut names = curves::keys();
    names.sort();
    assert!(names.contains(&"weighted-arc".to_string()));
    for name in names {
        let curve = curves::curve(&name)?;
        assert!(!curve.is_empty(), "{name}");
        assert!(curves::path(&name)?.exists(), "{name}");
    }
    Ok(())
}

#[test]
fn shifted_copy_preserves_everything_but_time() {
    let key = Keyframe::new(0.4, 1.0)
        .with_tangents(0.1, -0.2)
        .with_weights(0.2, 0.8, WeightedMode::Both);
    let moved = key.shifted(1.0);
    assert!((moved.time - 1.4).abs() < 1e-6);
    assert_eq!(Keyframe { time: key.time, ..moved }, key);
}

#[test]
fn interp_helpers() {
    assert_eq!(lerp_f32(0.0, 10.0, 1.5), 15.0);
    assert_eq!(lerp_clamped(0.0, 10.0, 1.5), 10.0);
    assert_eq!(lerp_clamped(0.0, 10.0, -1.0), 0.0);
    assert_eq!(inverse_lerp(2.0, 2.0, 5.0), 0.0);
    assert_eq!(inverse_lerp(0.0, 10.0, 15.0), 1.0);
    assert_eq!(inverse_lerp(0.0, 10.0, 2.5), 0.25);
}

#[test]
fn blend_config_defaults_and_partial_json() -> Result<()> {
    let cfg = BlendConfig::default();
    assert_eq!(cfg.min_blend_percentage, 0.01);
    assert_eq!(cfg.max_blend_percentage, 0.25);
    assert_eq!(cfg.tangent_step, 0.01);
    assert_eq!(cfg.time_shift, TimeShift::Fixed { offset: 1.0 });
    cfg.validate()?;

    let cfg: BlendConfig = serde_json::from_value(json!({
        "time_shift": { "mode": "after_first", "margin": 0.5 }
    }))?;
    assert_eq!(cfg.time_shift, TimeShift::AfterFirst { margin: 0.5 });
    assert_eq!(cfg.max_blend_percentage, 0.25);
    assert_eq!(cfg.clamp_percentage(0.9), 0.25);
    Ok(())
}
