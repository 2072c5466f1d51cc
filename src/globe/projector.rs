// Orthographic projection of the rotated point cloud and the embedded image plane.
//
// There is no depth buffer: dots are sorted far-to-near and painted in that
// order, and the image plane is slotted in at its average depth.

use super::config::GlobeConfig;
use super::rotation::RotationMatrix;
use glam::{Vec2, Vec3};

/// Canvas backing-store size plus the devicePixelRatio it was derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 },
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Globe radius in backing pixels.
    #[inline]
    pub fn globe_radius(&self, fill: f32) -> f32 {
        self.width.min(self.height) * 0.5 * fill
    }
}

/// Screen-space parameters shared by every point in a frame.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub center: Vec2,
    pub radius_px: f32,
    pub dot_radius_px: f32,
}

impl Projection {
    pub fn new(viewport: &Viewport, cfg: &GlobeConfig) -> Self {
        Self {
            center: viewport.center(),
            radius_px: viewport.globe_radius(cfg.globe_fill),
            dot_radius_px: cfg.dot_radius * viewport.pixel_ratio,
        }
    }

    #[inline]
    pub fn to_screen(&self, p: Vec3) -> Vec2 {
        self.center + Vec2::new(p.x, p.y) * self.radius_px
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedDot {
    pub screen_x: f32,
    pub screen_y: f32,
    pub radius: f32,
    pub opacity: f32,
    pub z: f32,
}

impl ProjectedDot {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.screen_x, self.screen_y)
    }
}

/// Project one rotated point, or `None` if it is culled (`z <= cull_threshold`).
pub fn project_point(p: Vec3, proj: &Projection, cfg: &GlobeConfig) -> Option<ProjectedDot> {
    if p.z <= cfg.cull_threshold {
        return None;
    }
    let screen = proj.to_screen(p);
    let depth = p.z.max(0.0);
    let radius =
        proj.dot_radius_px * (cfg.min_radius_ratio + (1.0 - cfg.min_radius_ratio) * depth);
    let opacity = cfg.edge_opacity + (cfg.front_opacity - cfg.edge_opacity) * depth;
    Some(ProjectedDot {
        screen_x: screen.x,
        screen_y: screen.y,
        radius,
        opacity,
        z: p.z,
    })
}

/// Project, cull and sort far-to-near.
pub fn project_points(points: &[Vec3], proj: &Projection, cfg: &GlobeConfig) -> Vec<ProjectedDot> {
    let mut dots: Vec<ProjectedDot> = points
        .iter()
        .filter_map(|&p| project_point(p, proj, cfg))
        .collect();
    dots.sort_unstable_by(|a, b| a.z.total_cmp(&b.z));
    dots
}

/// Gaussian hover weight in `[0, 1]`; zero at or beyond `radius`.
#[inline]
pub fn hover_influence(dot: Vec2, cursor: Vec2, radius: f32, falloff: f32) -> f32 {
    let dist = dot.distance(cursor);
    if radius <= 0.0 || dist >= radius {
        return 0.0;
    }
    let t = dist / radius;
    (-falloff * t * t).exp()
}

#[inline]
pub fn lerp_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Final fill for a dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle {
    pub color: [f32; 3],
    pub opacity: f32,
}

impl DotStyle {
    /// `rgba(r,g,b,a)` for Canvas2D fill styles.
    pub fn css(&self) -> String {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({},{},{},{:.3})",
            c(self.color[0]),
            c(self.color[1]),
            c(self.color[2]),
            self.opacity.clamp(0.0, 1.0)
        )
    }
}

/// Blend toward the highlight color near the cursor and lift opacity.
pub fn shade_dot(
    dot: &ProjectedDot,
    cursor: Option<Vec2>,
    cfg: &GlobeConfig,
    pixel_ratio: f32,
) -> DotStyle {
    let influence = cursor
        .map(|c| {
            hover_influence(
                dot.position(),
                c,
                cfg.hover_radius * pixel_ratio,
                cfg.hover_falloff,
            )
        })
        .unwrap_or(0.0);
    DotStyle {
        color: lerp_rgb(cfg.dot_color, cfg.highlight_color, influence),
        opacity: (dot.opacity + influence * cfg.hover_opacity_boost).min(1.0),
    }
}

/// Three screen-space corners of the image plane plus its average depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPlane {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub z: f32,
}

impl ProjectedPlane {
    /// Canvas `setTransform(a, b, c, d, e, f)` mapping an image of
    /// `width × height` so that (0,0) lands on `top_left`, (width,0) on
    /// `top_right` and (0,height) on `bottom_left`.
    pub fn affine(&self, width: f32, height: f32) -> [f32; 6] {
        let w = width.max(f32::EPSILON);
        let h = height.max(f32::EPSILON);
        let ux = (self.top_right - self.top_left) / w;
        let vy = (self.bottom_left - self.top_left) / h;
        [ux.x, ux.y, vy.x, vy.y, self.top_left.x, self.top_left.y]
    }
}

/// Rotate and project the square plane of half side `half_extent` lying on local z = 0.
pub fn project_plane(
    rotation: &RotationMatrix,
    half_extent: f32,
    proj: &Projection,
) -> ProjectedPlane {
    let h = half_extent;
    let tl = rotation.rotate_point(Vec3::new(-h, -h, 0.0));
    let tr = rotation.rotate_point(Vec3::new(h, -h, 0.0));
    let bl = rotation.rotate_point(Vec3::new(-h, h, 0.0));
    // Fourth corner is tr + bl - tl; averaging all four collapses to this.
    let z = (tr.z + bl.z) * 0.5;
    ProjectedPlane {
        top_left: proj.to_screen(tl),
        top_right: proj.to_screen(tr),
        bottom_left: proj.to_screen(bl),
        z,
    }
}

/// Index of the first dot at or in front of `plane_z` in a z-sorted slice.
#[inline]
pub fn split_index(dots: &[ProjectedDot], plane_z: f32) -> usize {
    dots.partition_point(|d| d.z < plane_z)
}
