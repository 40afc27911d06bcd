/// Starts slow and ends fast: `t²`.
pub fn accelerate(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);

    t * t
}

/// Starts fast and ends slow: `1 - (1 - t)²`.
pub fn decelerate(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);

    1.0 - (1.0 - t) * (1.0 - t)
}
