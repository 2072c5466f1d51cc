// Default tuning for the dot globe. `GlobeConfig::default()` is built from these.

// Sampling
pub const POINT_COUNT: usize = 500;

// Layout: globe radius as a fraction of half the smaller canvas side
pub const GLOBE_FILL: f32 = 0.9;

// Dot sizing (CSS pixels, scaled by devicePixelRatio at projection time)
pub const DOT_RADIUS: f32 = 1.8;
pub const MIN_RADIUS_RATIO: f32 = 0.35; // edge dots keep this share of DOT_RADIUS

// Depth cue
pub const FRONT_OPACITY: f32 = 0.95;
pub const EDGE_OPACITY: f32 = 0.15;
// Slightly negative so a sliver of the back hemisphere stays visible
pub const CULL_THRESHOLD: f32 = -0.15;

// Interaction
pub const DRAG_SENSITIVITY: f32 = 0.005; // radians per CSS pixel
pub const MOMENTUM_DECAY: f32 = 0.92; // per frame
pub const MOMENTUM_THRESHOLD: f32 = 0.05; // CSS pixels per frame

// Hover highlight
pub const HOVER_RADIUS: f32 = 80.0; // CSS pixels
pub const HOVER_FALLOFF: f32 = 3.0; // k in exp(-k * (d/r)^2)
pub const HOVER_OPACITY_BOOST: f32 = 0.3;

// Palette (linear 0..1 RGB)
pub const DOT_COLOR: [f32; 3] = [0.55, 0.60, 0.68];
pub const HIGHLIGHT_COLOR: [f32; 3] = [0.25, 0.65, 1.0];

// Image plane: half side of the square in unit-sphere space
pub const PLANE_HALF_EXTENT: f32 = 0.55;

// Rotation axis shorter than this yields the identity matrix
pub const AXIS_EPSILON: f32 = 1e-10;
