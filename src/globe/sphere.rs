use glam::Vec3;
use std::f32::consts::TAU;

/// Golden ratio, used to space successive longitudes.
const PHI: f32 = 1.618_034;

/// Point `i` of an `n`-point Fibonacci spiral on the unit sphere.
///
/// `z` runs linearly from +1 (i = 0) to -1 (i = n - 1); longitude advances by
/// `2π / φ` per index.
#[inline]
pub fn fibonacci_sphere_point(i: usize, n: usize) -> Vec3 {
    if n < 2 {
        return Vec3::Z;
    }
    let z = 1.0 - (2.0 * i as f32) / (n - 1) as f32;
    let radius_at_z = (1.0 - z * z).max(0.0).sqrt();
    let longitude = TAU * i as f32 / PHI;
    Vec3::new(longitude.cos() * radius_at_z, longitude.sin() * radius_at_z, z)
}

/// Deterministic, roughly even sampling of `count` points on the unit sphere.
pub fn fibonacci_sphere(count: usize) -> Vec<Vec3> {
    (0..count).map(|i| fibonacci_sphere_point(i, count)).collect()
}
