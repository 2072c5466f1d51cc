use crate::globe::{shade_dot, GlobeConfig, ProjectedDot, ProjectedPlane, Scene, Viewport};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas2D painter for one globe. Draws in backing-store pixels.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
        Ok(Self { ctx })
    }

    /// Back dots, then the image plane (if its texture is ready), then front dots.
    pub fn paint(
        &self,
        scene: &Scene,
        cfg: &GlobeConfig,
        viewport: &Viewport,
        texture: Option<&web::HtmlImageElement>,
    ) {
        let pixel_ratio = viewport.pixel_ratio;
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
        self.draw_dots(scene.back_dots(), scene.cursor, cfg, pixel_ratio);
        if let (Some(plane), Some(img)) = (&scene.plane, texture.filter(|i| texture_ready(i))) {
            self.draw_plane(plane, img);
        }
        self.draw_dots(scene.front_dots(), scene.cursor, cfg, pixel_ratio);
    }

    fn draw_dots(
        &self,
        dots: &[ProjectedDot],
        cursor: Option<Vec2>,
        cfg: &GlobeConfig,
        pixel_ratio: f32,
    ) {
        for dot in dots {
            let style = shade_dot(dot, cursor, cfg, pixel_ratio);
            self.ctx.set_fill_style_str(&style.css());
            self.ctx.begin_path();
            _ = self.ctx.arc(
                dot.screen_x as f64,
                dot.screen_y as f64,
                dot.radius as f64,
                0.0,
                TAU,
            );
            self.ctx.fill();
        }
    }

    fn draw_plane(&self, plane: &ProjectedPlane, img: &web::HtmlImageElement) {
        let [a, b, c, d, e, f] =
            plane.affine(img.natural_width() as f32, img.natural_height() as f32);
        self.ctx.save();
        _ = self.ctx.set_transform(
            a as f64, b as f64, c as f64, d as f64, e as f64, f as f64,
        );
        _ = self
            .ctx
            .draw_image_with_html_image_element(img, 0.0, 0.0);
        self.ctx.restore();
    }
}

#[inline]
fn texture_ready(img: &web::HtmlImageElement) -> bool {
    img.complete() && img.natural_width() > 0 && img.natural_height() > 0
}
