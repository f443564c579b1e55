//! Raster-Einrasten und Rundung auf die konfigurierte Genauigkeit.

/// Rastet `value` auf das nächste von `subdivisions` gleich großen Rasterintervallen
/// über `range` ein. `subdivisions == 0` oder ein leerer Bereich lassen den Wert unverändert.
pub fn snap_to_grid(value: f64, range: [f64; 2], subdivisions: u32) -> f64 {
    let [min, max] = range;
    if subdivisions == 0 || max <= min {
        return value;
    }
    let step = (max - min) / subdivisions as f64;
    min + ((value - min) / step).round() * step
}

/// Rundet auf `decimals` Nachkommastellen.
pub fn round_to_precision(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
