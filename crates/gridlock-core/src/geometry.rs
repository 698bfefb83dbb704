#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Edge insets used for grid padding, in the same units as `Rect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn uniform(v: f32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }
}

/// Parameter `t` in `[0, 1]` of the point on segment `a..b` closest to `p`.
pub fn project_on_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;
    if len_sq <= f32::EPSILON {
        return 0.0;
    }
    let t = ((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq;
    t.clamp(0.0, 1.0)
}

/// Distance from `p` to the closest point of segment `a..b`.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let t = project_on_segment(p, a, b);
    let closest = Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
    p.distance(closest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_basics() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn segment_projection_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(project_on_segment(Vec2::new(-5.0, 3.0), a, b), 0.0);
        assert_eq!(project_on_segment(Vec2::new(15.0, 3.0), a, b), 1.0);
        assert!((project_on_segment(Vec2::new(5.0, 3.0), a, b) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn segment_distance_midpoint_and_past_end() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!((distance_to_segment(Vec2::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-6);
        assert!((distance_to_segment(Vec2::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_segment_is_a_point() {
        let a = Vec2::new(2.0, 2.0);
        assert_eq!(project_on_segment(Vec2::new(7.0, 2.0), a, a), 0.0);
        assert!((distance_to_segment(Vec2::new(7.0, 2.0), a, a) - 5.0).abs() < 1e-6);
    }
}
