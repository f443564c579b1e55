//! Kurvenmodell: Auswertung, Sampling, Sortierung und Normalisierung.

use super::bezier::{evaluate_bezier, find_t_for_x_default};
use super::keyframe::{HandleSide, Keyframe, KeyframeId, TangentMode, UNASSIGNED_ID};
use super::tangent::recompute_auto_tangents;
use super::wrap::{wrap_x, Infinity};
use anyhow::Context;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Unterhalb dieses Betrags gilt eine Handle-x-Komponente als senkrecht.
const VERTICAL_EPSILON: f64 = 1e-12;

fn unit_domain() -> [f64; 2] {
    [0.0, 1.0]
}

/// Vollständige Kurve.
///
/// Invariante, solange die Engine den Wert besitzt: Keyframes nach `x`
/// nicht-fallend sortiert, mindestens zwei Keyframes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveData {
    pub keyframes: Vec<Keyframe>,
    #[serde(default = "unit_domain")]
    pub domain_x: [f64; 2],
    #[serde(default = "unit_domain")]
    pub domain_y: [f64; 2],
    #[serde(default)]
    pub pre_infinity: Infinity,
    #[serde(default)]
    pub post_infinity: Infinity,
}

/// Vordefinierte Kurvenformen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvePreset {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Constant,
}

impl CurveData {
    /// Erstellt eine Kurve mit `constant`-Extrapolation.
    pub fn new(keyframes: Vec<Keyframe>, domain_x: [f64; 2], domain_y: [f64; 2]) -> Self {
        Self {
            keyframes,
            domain_x,
            domain_y,
            pre_infinity: Infinity::Constant,
            post_infinity: Infinity::Constant,
        }
    }

    /// Erstellt eine Preset-Kurve über den angegebenen Domänen.
    pub fn from_preset(preset: CurvePreset, domain_x: [f64; 2], domain_y: [f64; 2]) -> Self {
        let [x0, x1] = domain_x;
        let [y0, y1] = domain_y;
        let width = x1 - x0;
        // Handle-Anteile wie bei den CSS-Timing-Funktionen (0.42 / 0.58)
        let ease = DVec2::new(0.42 * width, 0.0);

        let (start, end) = match preset {
            CurvePreset::Linear => (
                Keyframe::new(1, x0, y0, TangentMode::Linear),
                Keyframe::new(2, x1, y1, TangentMode::Linear),
            ),
            CurvePreset::EaseIn => (
                Keyframe::new(1, x0, y0, TangentMode::Free).with_handles(-ease, ease),
                Keyframe::new(2, x1, y1, TangentMode::Free),
            ),
            CurvePreset::EaseOut => (
                Keyframe::new(1, x0, y0, TangentMode::Free),
                Keyframe::new(2, x1, y1, TangentMode::Free).with_handles(-ease, ease),
            ),
            CurvePreset::EaseInOut => (
                Keyframe::new(1, x0, y0, TangentMode::Free).with_handles(-ease, ease),
                Keyframe::new(2, x1, y1, TangentMode::Free).with_handles(-ease, ease),
            ),
            CurvePreset::Constant => {
                let mid = 0.5 * (y0 + y1);
                (
                    Keyframe::new(1, x0, mid, TangentMode::Linear),
                    Keyframe::new(2, x1, mid, TangentMode::Linear),
                )
            }
        };
        Self::new(vec![start, end], domain_x, domain_y)
    }

    /// Liest eine Kurve aus JSON und normalisiert sie.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let curve: CurveData =
            serde_json::from_str(json).context("Kurven-JSON konnte nicht gelesen werden")?;
        Ok(curve.normalize())
    }

    /// Serialisiert die Kurve als formatiertes JSON.
    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Bringt eine vom Host gelieferte Kurve in einen gültigen Zustand.
    ///
    /// Fehlende oder doppelte IDs werden nachgetragen, Keyframes stabil nach `x`
    /// sortiert, `linear`-Handles genullt und Auto-Tangenten neu berechnet.
    pub fn normalize(self) -> Self {
        let keyframes = match backfill_ids(&self.keyframes) {
            Some((keyframes, 0)) => keyframes,
            Some((keyframes, backfilled)) => {
                log::warn!("{} Keyframe-IDs nachgetragen", backfilled);
                keyframes
            }
            None => {
                log::warn!(
                    "ID-Raum erschöpft, {} Keyframes werden ab 1 neu nummeriert",
                    self.keyframes.len()
                );
                renumber_ids(&self.keyframes)
            }
        };
        let keyframes: Vec<Keyframe> = keyframes
            .into_iter()
            .map(|mut kf| {
                if kf.tangent_mode == TangentMode::Linear {
                    kf.handle_in = DVec2::ZERO;
                    kf.handle_out = DVec2::ZERO;
                }
                kf
            })
            .collect();

        if keyframes.len() < 2 {
            log::debug!(
                "Kurve mit {} Keyframe(s) übernommen, Auswertung ist konstant",
                keyframes.len()
            );
        }

        let sorted = sort_keyframes(&keyframes);
        Self {
            keyframes: recompute_auto_tangents(&sorted),
            ..self
        }
    }

    /// Gibt eine Kopie mit neuen Keyframes zurück (Domäne und Politik bleiben).
    pub fn with_keyframes(&self, keyframes: Vec<Keyframe>) -> Self {
        Self {
            keyframes,
            domain_x: self.domain_x,
            domain_y: self.domain_y,
            pre_infinity: self.pre_infinity,
            post_infinity: self.post_infinity,
        }
    }

    /// Nächste freie ID: größte vergebene + 1, bei erschöpftem ID-Raum die
    /// kleinste unbenutzte.
    pub fn next_keyframe_id(&self) -> KeyframeId {
        let max = self.keyframes.iter().map(|kf| kf.id).max();
        match max.unwrap_or(UNASSIGNED_ID).checked_add(1) {
            Some(id) => id,
            None => {
                let used: HashSet<KeyframeId> = self.keyframes.iter().map(|kf| kf.id).collect();
                (1..KeyframeId::MAX)
                    .find(|id| !used.contains(id))
                    .unwrap_or(UNASSIGNED_ID)
            }
        }
    }

    /// Index des Keyframes mit der ID.
    pub fn keyframe_index(&self, id: KeyframeId) -> Option<usize> {
        self.keyframes.iter().position(|kf| kf.id == id)
    }

    /// Erster Keyframe (kleinstes `x`).
    pub fn first(&self) -> Option<&Keyframe> {
        self.keyframes.first()
    }

    /// Letzter Keyframe (größtes `x`).
    pub fn last(&self) -> Option<&Keyframe> {
        self.keyframes.last()
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Prüft die Engine-Invarianten (≥ 2 Keyframes, sortiert, eindeutige IDs).
    pub fn is_valid(&self) -> bool {
        let mut ids = HashSet::with_capacity(self.keyframes.len());
        self.keyframes.len() >= 2
            && self.keyframes.windows(2).all(|w| w[0].x <= w[1].x)
            && self
                .keyframes
                .iter()
                .all(|kf| kf.id != UNASSIGNED_ID && ids.insert(kf.id))
    }
}

impl Default for CurveData {
    /// Linearer Zwei-Keyframe-Verlauf von (0,0) nach (1,1).
    fn default() -> Self {
        Self::from_preset(CurvePreset::Linear, unit_domain(), unit_domain())
    }
}

/// Trägt fehlende und doppelte IDs ab `max + 1` nach.
///
/// `None`, sobald eine nachzutragende ID über `KeyframeId::MAX` hinaus müsste.
/// Rückgabe: Keyframes und Anzahl nachgetragener IDs.
fn backfill_ids(keyframes: &[Keyframe]) -> Option<(Vec<Keyframe>, usize)> {
    let max = keyframes.iter().map(|kf| kf.id).max().unwrap_or(UNASSIGNED_ID);
    let mut next_id = max.checked_add(1);
    let mut seen = HashSet::with_capacity(keyframes.len());
    let mut backfilled = 0usize;
    let mut result = Vec::with_capacity(keyframes.len());

    for kf in keyframes {
        let mut kf = *kf;
        if kf.id == UNASSIGNED_ID || !seen.insert(kf.id) {
            let id = next_id?;
            kf.id = id;
            seen.insert(id);
            next_id = id.checked_add(1);
            backfilled += 1;
        }
        result.push(kf);
    }
    Some((result, backfilled))
}

/// Vergibt IDs dicht ab 1 in Eingabereihenfolge.
fn renumber_ids(keyframes: &[Keyframe]) -> Vec<Keyframe> {
    keyframes
        .iter()
        .zip(1..)
        .map(|(kf, id)| Keyframe { id, ..*kf })
        .collect()
}

/// Sortiert Keyframes stabil nach `x` und gibt ein neues Array zurück.
pub fn sort_keyframes(keyframes: &[Keyframe]) -> Vec<Keyframe> {
    let mut sorted = keyframes.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    sorted
}

/// Wertet die Kurve an `x` aus.
///
/// Außerhalb `[first.x, last.x]` wird auf den y-Wert des Randkeyframes geklemmt.
/// Eine Kurve mit nur einem Keyframe ist überall konstant, eine leere liefert 0.
pub fn evaluate_curve(curve: &CurveData, x: f64) -> f64 {
    let keyframes = &curve.keyframes;
    let (Some(first), Some(last)) = (keyframes.first(), keyframes.last()) else {
        return 0.0;
    };
    if keyframes.len() == 1 || x <= first.x {
        return first.y;
    }
    if x >= last.x {
        return last.y;
    }

    for pair in keyframes.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if x < b.x {
            return evaluate_segment(a, b, x);
        }
        if x == b.x {
            return b.y;
        }
    }
    last.y
}

/// Wertet ein einzelnes Segment `[a, b]` gemäß Tangenten-Modus von `a` aus.
fn evaluate_segment(a: &Keyframe, b: &Keyframe, x: f64) -> f64 {
    if a.tangent_mode == TangentMode::Step {
        return a.y;
    }
    let width = b.x - a.x;
    if width <= 0.0 {
        return b.y;
    }
    if a.tangent_mode == TangentMode::Linear && b.tangent_mode == TangentMode::Linear {
        let s = (x - a.x) / width;
        return a.y + (b.y - a.y) * s;
    }

    let p1 = a.handle_position(HandleSide::Out);
    let p2 = b.handle_position(HandleSide::In);
    let t = find_t_for_x_default(a.x, p1.x, p2.x, b.x, x);
    evaluate_bezier(a.y, p1.y, p2.y, b.y, t)
}

/// Tastet die Kurve an `samples` gleichmäßig über `domain_x` verteilten Stellen ab.
pub fn sample_curve(curve: &CurveData, samples: usize) -> Vec<DVec2> {
    let [min, max] = curve.domain_x;
    match samples {
        0 => Vec::new(),
        1 => vec![DVec2::new(min, evaluate_curve(curve, min))],
        n => {
            let step = (max - min) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let x = if i == n - 1 { max } else { min + step * i as f64 };
                    DVec2::new(x, evaluate_curve(curve, x))
                })
                .collect()
        }
    }
}

/// Wertet die Kurve inklusive Pre-/Post-Infinity-Politik aus.
///
/// `cycle`/`pingpong`/`constant` werden über [`wrap_x`] abgebildet. Bei `linear`
/// wird außerhalb der Keyframes entlang der Endtangente extrapoliert.
pub fn evaluate_extrapolated(curve: &CurveData, x: f64) -> f64 {
    let wrapped = wrap_x(x, curve.domain_x, curve.pre_infinity, curve.post_infinity);
    let keyframes = &curve.keyframes;
    let (Some(first), Some(last)) = (keyframes.first(), keyframes.last()) else {
        return 0.0;
    };

    if wrapped.x < first.x && curve.pre_infinity == Infinity::Linear {
        let slope = keyframes
            .get(1)
            .map_or(0.0, |second| end_slope(first, second, first.handle_out));
        return first.y + slope * (wrapped.x - first.x);
    }
    if wrapped.x > last.x && curve.post_infinity == Infinity::Linear {
        let slope = keyframes
            .len()
            .checked_sub(2)
            .and_then(|i| keyframes.get(i))
            .map_or(0.0, |before| end_slope(before, last, last.handle_in));
        return last.y + slope * (wrapped.x - last.x);
    }
    evaluate_curve(curve, wrapped.x)
}

/// Steigung am Kurvenende: Richtung des Handles, sonst Sehne des Endsegments.
fn end_slope(a: &Keyframe, b: &Keyframe, handle: DVec2) -> f64 {
    if a.tangent_mode == TangentMode::Step {
        return 0.0;
    }
    if handle.x.abs() > VERTICAL_EPSILON {
        return handle.y / handle.x;
    }
    let width = b.x - a.x;
    if width.abs() > VERTICAL_EPSILON {
        (b.y - a.y) / width
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn three_point_curve(mode: TangentMode) -> CurveData {
        CurveData::new(
            vec![
                Keyframe::new(1, 0.0, 0.0, mode),
                Keyframe::new(2, 0.4, 0.8, mode),
                Keyframe::new(3, 1.0, 0.2, mode),
            ],
            [0.0, 1.0],
            [0.0, 1.0],
        )
        .normalize()
    }

    #[test]
    fn default_curve_is_linear_diagonal() {
        let curve = CurveData::default();
        assert_eq!(curve.len(), 2);
        assert_relative_eq!(evaluate_curve(&curve, 0.5), 0.5, epsilon = 1e-12);
        assert_relative_eq!(evaluate_curve(&curve, 0.25), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn clamps_outside_key_range() {
        let curve = three_point_curve(TangentMode::Auto);
        assert_eq!(evaluate_curve(&curve, -5.0), 0.0);
        assert_eq!(evaluate_curve(&curve, 5.0), 0.2);
    }

    #[test]
    fn single_and_empty_curves_do_not_panic() {
        let single = CurveData::new(
            vec![Keyframe::new(1, 0.3, 0.7, TangentMode::Auto)],
            [0.0, 1.0],
            [0.0, 1.0],
        );
        for x in [-1.0, 0.0, 0.3, 0.9, 4.0] {
            assert_eq!(evaluate_curve(&single, x), 0.7);
        }
        let empty = CurveData::new(Vec::new(), [0.0, 1.0], [0.0, 1.0]);
        assert_eq!(evaluate_curve(&empty, 0.5), 0.0);
    }

    #[test]
    fn continuous_at_segment_boundaries() {
        for mode in [
            TangentMode::Free,
            TangentMode::Aligned,
            TangentMode::Mirrored,
            TangentMode::Auto,
            TangentMode::Linear,
        ] {
            let curve = three_point_curve(mode);
            let kf = curve.keyframes[1];
            assert_relative_eq!(evaluate_curve(&curve, kf.x), kf.y, epsilon = 1e-9);
            assert_relative_eq!(evaluate_curve(&curve, kf.x - 1e-9), kf.y, epsilon = 1e-6);
            assert_relative_eq!(evaluate_curve(&curve, kf.x + 1e-9), kf.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn step_holds_left_value() {
        let curve = three_point_curve(TangentMode::Step);
        assert_eq!(evaluate_curve(&curve, 0.1), 0.0);
        assert_eq!(evaluate_curve(&curve, 0.39), 0.0);
        assert_eq!(evaluate_curve(&curve, 0.5), 0.8);
    }

    #[test]
    fn linear_pair_is_exact_interpolation() {
        let curve = three_point_curve(TangentMode::Linear);
        assert_relative_eq!(evaluate_curve(&curve, 0.2), 0.4, epsilon = 1e-12);
        assert_relative_eq!(evaluate_curve(&curve, 0.7), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn sample_spans_domain() {
        let curve = CurveData::default();
        let samples = sample_curve(&curve, 10);
        assert_eq!(samples.len(), 10);
        assert_eq!(samples[0].x, 0.0);
        assert_relative_eq!(samples[9].x, 1.0);
        assert!(sample_curve(&curve, 0).is_empty());
        assert_eq!(sample_curve(&curve, 1).len(), 1);
    }

    #[test]
    fn sort_is_stable_and_non_mutating() {
        let input = vec![
            Keyframe::new(1, 0.5, 0.0, TangentMode::Free),
            Keyframe::new(2, 0.1, 0.0, TangentMode::Free),
            Keyframe::new(3, 0.5, 1.0, TangentMode::Free),
        ];
        let before = input.clone();
        let sorted = sort_keyframes(&input);
        assert_eq!(input, before);
        let ids: Vec<u64> = sorted.iter().map(|kf| kf.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn normalize_backfills_ids_and_sorts() {
        let curve = CurveData::new(
            vec![
                Keyframe::new(0, 1.0, 1.0, TangentMode::Auto),
                Keyframe::new(5, 0.0, 0.0, TangentMode::Auto),
                Keyframe::new(5, 0.5, 0.0, TangentMode::Auto),
            ],
            [0.0, 1.0],
            [0.0, 1.0],
        )
        .normalize();
        assert!(curve.is_valid());
        let ids: Vec<u64> = curve.keyframes.iter().map(|kf| kf.id).collect();
        assert_eq!(ids, vec![5, 7, 6]);
    }

    #[test]
    fn exhausted_id_space_renumbers_instead_of_overflowing() {
        let json = r#"{
            "keyframes": [
                {"id": 18446744073709551615, "x": 0.0, "y": 0.0},
                {"x": 1.0, "y": 1.0}
            ]
        }"#;
        let curve = CurveData::from_json(json).unwrap();
        assert!(curve.is_valid());
        let ids: Vec<u64> = curve.keyframes.iter().map(|kf| kf.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn max_id_without_backfill_is_kept() {
        let curve = CurveData::new(
            vec![
                Keyframe::new(u64::MAX, 0.0, 0.0, TangentMode::Linear),
                Keyframe::new(1, 1.0, 1.0, TangentMode::Linear),
            ],
            [0.0, 1.0],
            [0.0, 1.0],
        )
        .normalize();
        assert_eq!(curve.keyframes[0].id, u64::MAX);
        assert_eq!(curve.next_keyframe_id(), 2);
    }

    #[test]
    fn json_ingestion_normalizes() {
        let json = r#"{
            "keyframes": [
                {"x": 1.0, "y": 1.0, "tangentMode": "linear", "handleIn": [-0.2, 0.0]},
                {"x": 0.0, "y": 0.0, "tangentMode": "linear"}
            ],
            "domainX": [0.0, 1.0],
            "domainY": [0.0, 1.0],
            "postInfinity": "cycle"
        }"#;
        let curve = CurveData::from_json(json).unwrap();
        assert!(curve.is_valid());
        assert_eq!(curve.keyframes[0].x, 0.0);
        assert_eq!(curve.keyframes[1].handle_in, DVec2::ZERO);
        assert_eq!(curve.pre_infinity, Infinity::Constant);
        assert_eq!(curve.post_infinity, Infinity::Cycle);

        let round_trip = CurveData::from_json(&curve.to_json_pretty().unwrap()).unwrap();
        assert_eq!(round_trip, curve);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(CurveData::from_json("{\"keyframes\": 3}").is_err());
    }

    #[test]
    fn presets_hit_domain_corners() {
        for preset in [
            CurvePreset::Linear,
            CurvePreset::EaseIn,
            CurvePreset::EaseOut,
            CurvePreset::EaseInOut,
        ] {
            let curve = CurveData::from_preset(preset, [0.0, 2.0], [-1.0, 1.0]);
            assert!(curve.is_valid());
            assert_relative_eq!(evaluate_curve(&curve, 0.0), -1.0);
            assert_relative_eq!(evaluate_curve(&curve, 2.0), 1.0);
        }
        let ease_in = CurveData::from_preset(CurvePreset::EaseIn, [0.0, 1.0], [0.0, 1.0]);
        assert!(evaluate_curve(&ease_in, 0.25) < 0.25);
        let flat = CurveData::from_preset(CurvePreset::Constant, [0.0, 1.0], [0.0, 1.0]);
        assert_eq!(evaluate_curve(&flat, 0.3), 0.5);
    }

    #[test]
    fn extrapolation_policies() {
        let mut curve = CurveData::default();
        curve.pre_infinity = Infinity::Linear;
        curve.post_infinity = Infinity::Cycle;
        curve.domain_x = [0.0, 1.0];
        assert_relative_eq!(evaluate_extrapolated(&curve, -0.5), -0.5, epsilon = 1e-12);
        assert_relative_eq!(evaluate_extrapolated(&curve, 1.25), 0.25, epsilon = 1e-9);

        curve.post_infinity = Infinity::Pingpong;
        assert_relative_eq!(evaluate_extrapolated(&curve, 1.25), 0.75, epsilon = 1e-9);

        curve.post_infinity = Infinity::Constant;
        assert_eq!(evaluate_extrapolated(&curve, 3.0), 1.0);
    }

    #[test]
    fn linear_extrapolation_follows_handle_direction() {
        let curve = CurveData {
            post_infinity: Infinity::Linear,
            ..CurveData::new(
                vec![
                    Keyframe::new(1, 0.0, 0.0, TangentMode::Free),
                    Keyframe::new(2, 1.0, 1.0, TangentMode::Free)
                        .with_handles(DVec2::new(-0.5, 0.0), DVec2::ZERO),
                ],
                [0.0, 1.0],
                [0.0, 1.0],
            )
        };
        // Handle-In waagerecht → Steigung 0
        assert_relative_eq!(evaluate_extrapolated(&curve, 2.0), 1.0);
    }
}
