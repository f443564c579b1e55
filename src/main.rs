//! curve-sample: tastet eine Kurve aus einer JSON-Datei ab.
//!
//! Aufruf: `curve-sample <curve.json> [samples]`. Gibt die Stützstellen als
//! JSON-Array von `[x, y]`-Paaren auf stdout aus.

use anyhow::{bail, Context};
use curve_editor_engine::{sample_curve, CurveData};
use std::path::PathBuf;

/// Standard-Anzahl Stützstellen ohne Argument.
const DEFAULT_SAMPLES: usize = 100;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next().map(PathBuf::from) else {
        bail!("Aufruf: curve-sample <curve.json> [samples]");
    };
    let samples = match args.next() {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("Ungültige Stützstellen-Anzahl: {}", raw))?,
        None => DEFAULT_SAMPLES,
    };

    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {}", path.display()))?;
    let curve = CurveData::from_json(&json)?;
    log::info!(
        "Kurve geladen: {} Keyframes, {} Stützstellen",
        curve.len(),
        samples
    );

    let points = sample_curve(&curve, samples);
    println!("{}", serde_json::to_string_pretty(&points)?);
    Ok(())
}
