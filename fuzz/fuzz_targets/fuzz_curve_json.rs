#![no_main]

use curve_editor_engine::{evaluate_curve, evaluate_extrapolated, sample_curve, CurveData};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(curve) = CurveData::from_json(text) else {
        return;
    };

    // Auswertung darf für beliebige Eingaben nicht paniken
    let [min, max] = curve.domain_x;
    for x in [min, max, 0.5 * (min + max), min - 1.0, max + 1.0] {
        let _ = evaluate_curve(&curve, x);
        let _ = evaluate_extrapolated(&curve, x);
    }
    let _ = sample_curve(&curve, 16);
});
