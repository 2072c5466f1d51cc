// Per-instance globe state and the per-frame update.
//
// One `GlobeState` exists per mounted canvas. Pointer handlers and the frame
// loop mutate it; nothing here touches web APIs.

use super::config::GlobeConfig;
use super::drag::{DragPhase, DragState};
use super::projector::{
    project_plane, project_points, split_index, ProjectedDot, ProjectedPlane, Projection, Viewport,
};
use super::rotation::RotationMatrix;
use super::sphere::fibonacci_sphere;
use glam::{Vec2, Vec3};

/// Everything the painter needs for one frame.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Visible dots sorted ascending by z.
    pub dots: Vec<ProjectedDot>,
    /// Dots before this index lie behind the image plane.
    pub split: usize,
    pub plane: Option<ProjectedPlane>,
    pub cursor: Option<Vec2>,
}

impl Scene {
    pub fn back_dots(&self) -> &[ProjectedDot] {
        &self.dots[..self.split]
    }

    pub fn front_dots(&self) -> &[ProjectedDot] {
        &self.dots[self.split..]
    }
}

pub struct GlobeState {
    pub config: GlobeConfig,
    base_points: Vec<Vec3>,
    rotation: RotationMatrix,
    drag: DragState,
    cursor: Option<Vec2>,
    viewport: Viewport,
    with_plane: bool,
}

impl GlobeState {
    pub fn new(config: GlobeConfig) -> Self {
        let base_points = fibonacci_sphere(config.point_count);
        let with_plane = config.texture_url.is_some();
        Self {
            config,
            base_points,
            rotation: RotationMatrix::IDENTITY,
            drag: DragState::default(),
            cursor: None,
            viewport: Viewport::default(),
            with_plane,
        }
    }

    pub fn base_points(&self) -> &[Vec3] {
        &self.base_points
    }

    pub fn rotation(&self) -> RotationMatrix {
        self.rotation
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn phase(&self) -> DragPhase {
        self.drag.phase()
    }

    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Project the image plane alongside the dots.
    pub fn set_plane_enabled(&mut self, enabled: bool) {
        self.with_plane = enabled;
    }

    // Sensitivity and threshold are configured per CSS pixel; inputs arrive in
    // backing pixels.
    fn sensitivity_px(&self) -> f32 {
        self.config.drag_sensitivity / self.viewport.pixel_ratio
    }

    fn momentum_threshold_px(&self) -> f32 {
        self.config.momentum_threshold * self.viewport.pixel_ratio
    }

    fn rotate_by_delta(&mut self, delta: Vec2) {
        let step = RotationMatrix::from_drag(delta, self.sensitivity_px());
        self.rotation = self.rotation.compose(step);
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.cursor = Some(pos);
        self.drag.begin(pos);
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        self.cursor = Some(pos);
        if let Some(delta) = self.drag.move_to(pos) {
            self.rotate_by_delta(delta);
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Pointer left the canvas (or was cancelled): forget the cursor, end any drag.
    pub fn pointer_leave(&mut self) {
        self.cursor = None;
        self.drag.cancel();
    }

    /// One animation frame: coast, rotate, project, place the plane.
    pub fn tick(&mut self) -> Scene {
        let decay = self.config.momentum_decay;
        let threshold = self.momentum_threshold_px();
        if let Some(delta) = self.drag.coast(decay, threshold) {
            self.rotate_by_delta(delta);
        }

        let proj = Projection::new(&self.viewport, &self.config);
        let rotated = self.rotation.rotate_all_points(&self.base_points);
        let dots = project_points(&rotated, &proj, &self.config);

        let plane = self
            .with_plane
            .then(|| project_plane(&self.rotation, self.config.plane_half_extent, &proj));
        let split = match &plane {
            Some(p) => split_index(&dots, p.z),
            None => dots.len(),
        };

        Scene {
            dots,
            split,
            plane,
            cursor: self.cursor,
        }
    }
}
