use splus_nav::store::DOCK_MAGNIFICATION_RANGE;

pub(crate) const DOCK_BOTTOM_MARGIN: f32 = 16.0;
pub(crate) const DOCK_PADDING: f32 = 8.0;
pub(crate) const DOCK_TILE_SPACING: f32 = 6.0;
pub(crate) const MAGNIFICATION_STEP: f32 = 2.0;
pub(crate) const HOVER_SCALE: f32 = 1.15;
const GLYPH_SCALE: f32 = 0.39;

/// Read-only dock data for rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DockViewModel<'a> {
    pub(crate) hovered: Option<&'a str>,
}

/// Glyph size for a tile of the given magnification.
pub(crate) fn glyph_size(magnification: f32) -> f32 {
    (magnification * GLYPH_SCALE).round()
}

/// Magnification after one wheel notch; positive `delta_y` scrolls up.
pub(crate) fn next_magnification(current: f32, delta_y: f32) -> f32 {
    let step = if delta_y > 0.0 {
        MAGNIFICATION_STEP
    } else if delta_y < 0.0 {
        -MAGNIFICATION_STEP
    } else {
        0.0
    };

    let (min, max) =
        (*DOCK_MAGNIFICATION_RANGE.start(), *DOCK_MAGNIFICATION_RANGE.end());
    (current + step).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_magnification_when_sizing_glyph_then_it_is_rounded() {
        assert_eq!(glyph_size(56.0), 22.0);
        assert_eq!(glyph_size(32.0), 12.0);
        assert_eq!(glyph_size(80.0), 31.0);
    }

    #[test]
    fn given_wheel_direction_when_scrolling_then_magnification_steps_by_two() {
        assert_eq!(next_magnification(56.0, 1.0), 58.0);
        assert_eq!(next_magnification(56.0, -3.0), 54.0);
        assert_eq!(next_magnification(56.0, 0.0), 56.0);
    }

    #[test]
    fn given_bounds_when_scrolling_past_them_then_magnification_is_clamped() {
        assert_eq!(next_magnification(80.0, 1.0), 80.0);
        assert_eq!(next_magnification(32.0, -1.0), 32.0);
    }
}
