use glam::{Vec2, Vec3};

/// Top-down projection of the ground plane onto a canvas.
///
/// The view is centred on `center` (usually the player), world `+X` maps to
/// canvas right and world `+Z` to canvas up.
#[derive(Clone, Copy, Debug)]
pub struct ViewLayout {
    pub center: Vec3,
    pub canvas_size: Vec2,
    pub px_per_unit: f32,
}

impl ViewLayout {
    #[inline]
    pub fn world_to_canvas(&self, p: Vec3) -> Vec2 {
        let half = self.canvas_size * 0.5;
        Vec2::new(
            half.x + (p.x - self.center.x) * self.px_per_unit,
            half.y - (p.z - self.center.z) * self.px_per_unit,
        )
    }

    /// World-space extent of the canvas along X and Z as (min, max) corners.
    pub fn visible_bounds(&self) -> (Vec2, Vec2) {
        let half_world = self.canvas_size * 0.5 / self.px_per_unit.max(1e-6);
        let c = Vec2::new(self.center.x, self.center.z);
        (c - half_world, c + half_world)
    }
}

/// Grid line coordinates in `[min, max]`, aligned to multiples of `spacing`.
pub fn grid_lines(min: f32, max: f32, spacing: f32) -> Vec<(i32, f32)> {
    if spacing <= 0.0 || !min.is_finite() || !max.is_finite() || max < min {
        return Vec::new();
    }
    let first = (min / spacing).ceil() as i32;
    let last = (max / spacing).floor() as i32;
    (first..=last).map(|i| (i, i as f32 * spacing)).collect()
}

/// Arrow outline (tip, left, right) in world space for a marker at
/// `position` facing along `forward` on the ground plane.
pub fn arrow_outline(position: Vec3, forward: Vec3, length: f32, half_width: f32) -> [Vec3; 3] {
    let fwd = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
    let fwd = if fwd == Vec3::ZERO { Vec3::Z } else { fwd };
    let right = Vec3::new(fwd.z, 0.0, -fwd.x);
    let tip = position + fwd * (length * 0.5);
    let tail = position - fwd * (length * 0.5);
    [tip, tail - right * half_width, tail + right * half_width]
}
