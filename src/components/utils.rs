use gpui::{Hsla, Pixels, Styled, Window, px};

use crate::theme::{ColorValue, Theme};

pub fn resolve_hsla(theme: &Theme, token: &ColorValue) -> Hsla {
    theme.resolve_hsla(token)
}

fn scale_factor(window: &Window) -> f32 {
    window.scale_factor().max(f32::EPSILON)
}

pub fn snap_px(window: &Window, logical_px: f32) -> Pixels {
    if !logical_px.is_finite() {
        return px(0.0);
    }
    let scale = scale_factor(window);
    px((logical_px * scale).round() / scale)
}

pub fn hairline_px(window: &Window) -> Pixels {
    px(1.0 / scale_factor(window))
}

pub fn quantized_stroke_px(window: &Window, logical_px: f32) -> Pixels {
    if !logical_px.is_finite() || logical_px <= 0.0 {
        return px(0.0);
    }
    let snapped = snap_px(window, logical_px);
    if f32::from(snapped) > 0.0 {
        snapped
    } else {
        hairline_px(window)
    }
}

pub fn apply_rounding<T: Styled>(div: T, radius_px: f32) -> T {
    div.rounded(px(radius_px.max(0.0)))
}
