mod common;

use common::approx;
use common::globe::sphere::*;

#[test]
fn points_lie_on_unit_sphere() {
    for count in [2usize, 3, 17, 500, 2048] {
        let pts = fibonacci_sphere(count);
        assert_eq!(pts.len(), count);
        for (i, p) in pts.iter().enumerate() {
            let n2 = p.length_squared();
            assert!(
                (n2 - 1.0).abs() < 1e-5,
                "count={count} i={i} |p|^2={n2}"
            );
        }
    }
}

#[test]
fn z_is_evenly_spaced_from_pole_to_pole() {
    let n = 500;
    let pts = fibonacci_sphere(n);
    assert!(approx(pts[0].z, 1.0, 1e-6));
    assert!(approx(pts[n - 1].z, -1.0, 1e-5));
    let step = 2.0 / (n - 1) as f32;
    for w in pts.windows(2) {
        assert!(approx(w[0].z - w[1].z, step, 1e-5));
    }
}

#[test]
fn sampling_is_deterministic() {
    assert_eq!(fibonacci_sphere(300), fibonacci_sphere(300));
}

#[test]
fn degenerate_counts() {
    assert!(fibonacci_sphere(0).is_empty());
    let single = fibonacci_sphere(1);
    assert_eq!(single.len(), 1);
    assert_eq!(single[0], glam::Vec3::Z);
}

#[test]
fn both_hemispheres_are_covered() {
    let pts = fibonacci_sphere(500);
    let east = pts.iter().filter(|p| p.x > 0.0).count();
    let north = pts.iter().filter(|p| p.y > 0.0).count();
    // Roughly half either side of each plane.
    assert!((200..=300).contains(&east), "east={east}");
    assert!((200..=300).contains(&north), "north={north}");
}
