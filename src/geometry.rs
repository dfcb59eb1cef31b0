use egui::{Pos2, Vec2};

/// Translates a surface-local point into the coordinate space whose origin is `origin`.
pub(crate) fn to_screen(origin: Pos2, local: Pos2) -> Pos2 {
    origin + local.to_vec2()
}

/// Approximates an ellipse outline with `segments` points (convex, clockwise).
pub(crate) fn ellipse_points(center: Pos2, radius: Vec2, segments: usize) -> Vec<Pos2> {
    (0..segments)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            Pos2::new(
                center.x + radius.x * angle.cos(),
                center.y + radius.y * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipse_points() {
        let points = ellipse_points(Pos2::new(10.0, 10.0), Vec2::new(4.0, 2.0), 4);
        assert_eq!(points.len(), 4);
        assert!((points[0].x - 14.0).abs() < 1e-4);
        assert!((points[1].y - 12.0).abs() < 1e-4);
    }
}
