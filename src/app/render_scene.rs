//! Builder für Render-Szenen aus dem EditorState.

use crate::app::{DragState, EditorState};
use crate::core::{sample_curve, HandleSide, TangentMode};
use crate::shared::{KeyframeGlyph, RenderScene};
use glam::DVec2;
use std::sync::Arc;

/// Baut eine RenderScene aus dem aktuellen EditorState.
pub fn build(state: &EditorState) -> RenderScene {
    let curve = state.current_curve();
    let to_px = |p: DVec2| state.to_canvas(p);

    let polyline = sample_curve(curve, state.options.render_curve_samples)
        .into_iter()
        .map(to_px)
        .collect();

    let keyframes = curve
        .keyframes
        .iter()
        .map(|kf| KeyframeGlyph {
            id: kf.id,
            position: to_px(kf.position()),
            handle_in: to_px(kf.handle_position(HandleSide::In)),
            handle_out: to_px(kf.handle_position(HandleSide::Out)),
            tangent_mode: kf.tangent_mode,
            selected: state.selection.contains(kf.id),
            show_handles: !matches!(kf.tangent_mode, TangentMode::Linear | TangentMode::Step),
        })
        .collect();

    let selection_rect = match state.interaction.drag {
        DragState::BoxSelect {
            origin_px,
            current_px,
            ..
        } => Some([origin_px, current_px]),
        _ => None,
    };

    let subdivisions = state.options.grid_subdivisions.max(1);
    let grid_x_px = grid_lines(curve.domain_x, subdivisions)
        .map(|x| to_px(DVec2::new(x, curve.domain_y[0])).x)
        .collect();
    let grid_y_px = grid_lines(curve.domain_y, subdivisions)
        .map(|y| to_px(DVec2::new(curve.domain_x[0], y)).y)
        .collect();

    RenderScene {
        curve: Arc::new(curve.clone()),
        viewport: state.viewport,
        canvas_size: state.canvas_size,
        domain_x: curve.domain_x,
        domain_y: curve.domain_y,
        selected_ids: state.selection.ids(),
        hover: state.interaction.hover,
        selection_rect,
        polyline,
        keyframes,
        grid_x_px,
        grid_y_px,
        disabled: state.options.disabled,
        read_only: state.options.read_only,
    }
}

/// Gleichmäßig verteilte Rasterpositionen inkl. beider Ränder.
fn grid_lines(range: [f64; 2], subdivisions: u32) -> impl Iterator<Item = f64> {
    let [min, max] = range;
    let step = (max - min) / subdivisions as f64;
    (0..=subdivisions).map(move |i| min + step * i as f64)
}
