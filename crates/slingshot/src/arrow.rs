use crate::sizes::IndicatorSizes;

/// Arrowhead triangle for the end of the arc.
///
/// Vertices are in a local frame whose origin sits on the arc's end point,
/// with the x-axis along the circle's radius (so the base straddles the
/// stroke) and the y-axis along the direction of travel. The renderer
/// rotates the frame into place. `scale` shrinks the head toward the
/// origin; at 0 the triangle collapses and nothing is visible.
pub fn arrowhead(sizes: &IndicatorSizes, scale: f64) -> [(f64, f64); 3] {
    let half_base = sizes.arrow_width * scale / 2.0;
    let length = sizes.arrow_height * scale;

    [(-half_base, 0.0), (half_base, 0.0), (0.0, length)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_straddles_the_stroke() {
        let [left, right, tip] = arrowhead(&IndicatorSizes::DEFAULT, 1.0);
        assert_eq!(left.0, -right.0);
        assert_eq!(left.1, 0.0);
        assert_eq!(right.1, 0.0);
        assert_eq!(tip, (0.0, IndicatorSizes::DEFAULT.arrow_height));
    }

    #[test]
    fn scales_linearly() {
        let full = arrowhead(&IndicatorSizes::LARGE, 1.0);
        let half = arrowhead(&IndicatorSizes::LARGE, 0.5);
        assert_eq!(half[1].0, full[1].0 / 2.0);
        assert_eq!(half[2].1, full[2].1 / 2.0);
    }

    #[test]
    fn collapses_at_zero_scale() {
        for point in arrowhead(&IndicatorSizes::DEFAULT, 0.0) {
            assert_eq!(point, (0.0, 0.0));
        }
    }
}
