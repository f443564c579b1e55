//! Core-Domäne: Bézier-Kernel, Kurvenmodell, Extrapolation, Tangenten,
//! Viewport-Abbildung und Hit-Testing.

pub mod bezier;
pub mod curve;
pub mod keyframe;
pub mod snap;
pub mod tangent;
pub mod viewport;
pub mod wrap;

pub use bezier::{
    bezier_derivative, evaluate_bezier, find_t_for_x, find_t_for_x_default,
    SOLVER_MAX_ITERATIONS, SOLVER_TOLERANCE,
};
pub use curve::{
    evaluate_curve, evaluate_extrapolated, sample_curve, sort_keyframes, CurveData, CurvePreset,
};
pub use hit_test::{
    hit_test, hit_test_with_samples, keyframes_in_rect, HitKind, HitResult, CURVE_HIT_SAMPLES,
    DEFAULT_HIT_TOLERANCE_PX,
};
pub use keyframe::{HandleSide, Keyframe, KeyframeId, TangentMode, UNASSIGNED_ID};
pub use snap::{round_to_precision, snap_to_grid};
pub use tangent::{
    apply_tangent_mode, compute_auto_tangent, constrain_tangent, promote_for_handle_edit,
    recompute_auto_tangents,
};
pub use viewport::Viewport;
pub use wrap::{wrap_x, Infinity, WrappedX};
