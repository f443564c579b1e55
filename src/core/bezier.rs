//! Geometrie-Kern: kubische Bézier-Auswertung, Ableitung und x→t-Umkehrung.
//!
//! Alle Funktionen arbeiten komponentenweise auf `f64`. Die x- und y-Komponente
//! eines Kurvensegments werden getrennt ausgewertet, weil die Kurve als Funktion
//! y(x) interpretiert wird.

/// Standard-Toleranz für [`find_t_for_x`].
pub const SOLVER_TOLERANCE: f64 = 1e-6;
/// Maximale Iterationen für Newton-Raphson bzw. den Bisektions-Fallback.
pub const SOLVER_MAX_ITERATIONS: usize = 20;
/// Unterhalb dieses Ableitungsbetrags wird Newton abgebrochen.
const DERIVATIVE_EPSILON: f64 = 1e-10;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// Für `t = 0` bzw. `t = 1` verschwinden alle anderen Terme exakt, daher gilt
/// `B(0) == p0` und `B(1) == p3` ohne Rundungsfehler.
pub fn evaluate_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
pub fn bezier_derivative(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let inv = 1.0 - t;
    3.0 * inv * inv * (p1 - p0) + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Sucht den Kurvenparameter `t ∈ [0, 1]`, an dem die x-Komponente `target_x` erreicht.
///
/// Newton-Raphson mit linearem Startwert, jeder Schritt wird auf `[0, 1]` geklemmt.
/// Fällt der Ableitungsbetrag unter `1e-10` (flaches oder entartetes Segment),
/// oder konvergiert Newton nicht innerhalb von `max_iterations`, übernimmt eine
/// Bisektion über `[0, 1]`. Die Funktion terminiert immer und liefert das beste
/// verfügbare `t`.
pub fn find_t_for_x(
    x0: f64,
    x1: f64,
    x2: f64,
    x3: f64,
    target_x: f64,
    tolerance: f64,
    max_iterations: usize,
) -> f64 {
    let range = x3 - x0;
    if range.abs() < DERIVATIVE_EPSILON {
        return 0.0;
    }

    let mut t = ((target_x - x0) / range).clamp(0.0, 1.0);
    for _ in 0..max_iterations {
        let error = evaluate_bezier(x0, x1, x2, x3, t) - target_x;
        if error.abs() < tolerance {
            return t;
        }
        let slope = bezier_derivative(x0, x1, x2, x3, t);
        if slope.abs() < DERIVATIVE_EPSILON {
            return bisect_t_for_x(x0, x1, x2, x3, target_x, tolerance, max_iterations);
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    let newton_error = (evaluate_bezier(x0, x1, x2, x3, t) - target_x).abs();
    if newton_error < tolerance {
        return t;
    }
    let fallback = bisect_t_for_x(x0, x1, x2, x3, target_x, tolerance, max_iterations);
    let fallback_error = (evaluate_bezier(x0, x1, x2, x3, fallback) - target_x).abs();
    if fallback_error < newton_error {
        fallback
    } else {
        t
    }
}

/// [`find_t_for_x`] mit Standard-Toleranz und -Iterationszahl.
pub fn find_t_for_x_default(x0: f64, x1: f64, x2: f64, x3: f64, target_x: f64) -> f64 {
    find_t_for_x(
        x0,
        x1,
        x2,
        x3,
        target_x,
        SOLVER_TOLERANCE,
        SOLVER_MAX_ITERATIONS,
    )
}

/// Bisektion über `[0, 1]`; Richtung folgt dem Vorzeichen von `x3 - x0`.
fn bisect_t_for_x(
    x0: f64,
    x1: f64,
    x2: f64,
    x3: f64,
    target_x: f64,
    tolerance: f64,
    max_iterations: usize,
) -> f64 {
    let increasing = x3 >= x0;
    let mut lo = 0.0;
    let mut hi = 1.0;
    let mut t = 0.5;
    for _ in 0..max_iterations {
        t = 0.5 * (lo + hi);
        let error = evaluate_bezier(x0, x1, x2, x3, t) - target_x;
        if error.abs() < tolerance {
            break;
        }
        if (error < 0.0) == increasing {
            lo = t;
        } else {
            hi = t;
        }
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_are_exact() {
        for &(p0, p1, p2, p3) in &[
            (0.0, 1.0, 2.0, 3.0),
            (-5.5, 100.0, -100.0, 7.25),
            (1e9, -3.0, 0.1, -1e-9),
        ] {
            assert_eq!(evaluate_bezier(p0, p1, p2, p3, 0.0), p0);
            assert_eq!(evaluate_bezier(p0, p1, p2, p3, 1.0), p3);
        }
    }

    #[test]
    fn midpoint_matches_bernstein_weights() {
        // B(0.5) = 0.125*P0 + 0.375*P1 + 0.375*P2 + 0.125*P3
        let value = evaluate_bezier(0.0, 10.0, 0.0, 10.0, 0.5);
        assert_relative_eq!(value, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn derivative_of_linear_segment_is_constant() {
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_relative_eq!(
                bezier_derivative(0.0, 1.0, 2.0, 3.0, t),
                3.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn solver_converges_on_regular_segment() {
        let (x0, x1, x2, x3) = (0.0, 0.2, 0.9, 1.0);
        for i in 0..=50 {
            let target = i as f64 / 50.0;
            let t = find_t_for_x_default(x0, x1, x2, x3, target);
            assert!((evaluate_bezier(x0, x1, x2, x3, t) - target).abs() < 1e-4);
        }
    }

    #[test]
    fn solver_handles_flat_ends() {
        // Steuerpunkte auf den Endpunkten: B'(0) = B'(1) = 0
        let (x0, x1, x2, x3) = (0.0, 0.0, 1.0, 1.0);
        for &target in &[0.0, 1e-5, 0.001, 0.5, 0.999, 1.0] {
            let t = find_t_for_x_default(x0, x1, x2, x3, target);
            assert!((evaluate_bezier(x0, x1, x2, x3, t) - target).abs() < 1e-4);
        }
    }

    #[test]
    fn solver_handles_near_vertical_middle() {
        // Beide Steuerpunkte in der Mitte: Ableitung bei t=0.5 nahezu null
        let (x0, x1, x2, x3) = (0.0, 0.5, 0.5, 1.0);
        for i in 0..=40 {
            let target = i as f64 / 40.0;
            let t = find_t_for_x_default(x0, x1, x2, x3, target);
            assert!(
                (evaluate_bezier(x0, x1, x2, x3, t) - target).abs() < 1e-4,
                "target {target} nicht erreicht"
            );
        }
    }

    #[test]
    fn solver_survives_overshooting_handles() {
        // Nicht-monotone x-Komponente
        let (x0, x1, x2, x3) = (0.0, 1.4, -0.4, 1.0);
        for i in 0..=20 {
            let target = i as f64 / 20.0;
            let t = find_t_for_x_default(x0, x1, x2, x3, target);
            assert!((0.0..=1.0).contains(&t));
            assert!((evaluate_bezier(x0, x1, x2, x3, t) - target).abs() < 1e-4);
        }
    }

    #[test]
    fn degenerate_zero_width_segment_returns_start() {
        assert_eq!(find_t_for_x_default(2.0, 2.0, 2.0, 2.0, 2.0), 0.0);
    }
}
