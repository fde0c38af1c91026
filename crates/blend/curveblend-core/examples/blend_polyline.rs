use curveblend_core::{blend_curves, sample_curve, sampling::export_samples_json, SamplingConfig};
use curveblend_test_fixtures::{curves, HermiteEvaluator};
use serde_json::{json, to_string_pretty};

fn main() -> anyhow::Result<()> {
    // Usage: blend_polyline [curve1] [curve2] [blend_percentage]
    let mut args = std::env::args().skip(1);
    let name1 = args.next().unwrap_or_else(|| "wave".into());
    let name2 = args.next().unwrap_or_else(|| "ease-in-out".into());
    let blend_percentage: f32 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 0.1,
    };

    let eval = HermiteEvaluator;
    let curve1 = curves::curve(&name1)?;
    let curve2 = curves::curve(&name2)?;
    let blended = blend_curves(&eval, &curve1, &curve2, blend_percentage)?;

    // Sources over [0, 1], the blended curve over [0, 2].
    let unit = SamplingConfig {
        start_time: Some(0.0),
        end_time: Some(1.0),
        ..SamplingConfig::default()
    };
    let doubled = SamplingConfig {
        start_time: Some(0.0),
        end_time: Some(2.0),
        ..SamplingConfig::default()
    };

    let out = json!({
        "blendPercentage": blend_percentage,
        "keys": blended.keys(),
        "curve1": export_samples_json(&sample_curve(&eval, &curve1, &unit)),
        "curve2": export_samples_json(&sample_curve(&eval, &curve2, &unit)),
        "blended": export_samples_json(&sample_curve(&eval, &blended, &doubled)),
    });
    println!("{}", to_string_pretty(&out)?);
    Ok(())
}
