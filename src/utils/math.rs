/// Round a world coordinate to a whole pixel for the presentation surface.
pub fn round_px(v: f32) -> i32 {
    v.round() as i32
}

/// Round an angle in radians to two decimal places.
///
/// Transform writes use the rounded value so a body that has visually settled
/// stops producing distinct style values every frame.
pub fn round_rad(angle: f32) -> f32 {
    (angle * 100.0).round() / 100.0
}
