use crate::constants::*;
use crate::layout::{arrow_outline, grid_lines, ViewLayout};
use drive_core::Transform;
use glam::Vec3;
use web_sys as web;

/// Draw the ground grid scrolled under the player and the player arrow.
pub fn draw_scene(
    ctx: &web::CanvasRenderingContext2d,
    layout: &ViewLayout,
    player: Option<&Transform>,
    active: bool,
) {
    let w = layout.canvas_size.x as f64;
    let h = layout.canvas_size.y as f64;
    ctx.set_fill_style_str(CLEAR_COLOR);
    ctx.fill_rect(0.0, 0.0, w, h);

    draw_grid(ctx, layout);

    if let Some(t) = player {
        let color = if active {
            PLAYER_ACTIVE_COLOR
        } else {
            PLAYER_IDLE_COLOR
        };
        let pts = arrow_outline(t.position, t.forward(), ARROW_LENGTH, ARROW_HALF_WIDTH);
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        for (i, p) in pts.iter().enumerate() {
            let c = layout.world_to_canvas(*p);
            if i == 0 {
                ctx.move_to(c.x as f64, c.y as f64);
            } else {
                ctx.line_to(c.x as f64, c.y as f64);
            }
        }
        ctx.close_path();
        ctx.fill();
    }
}

fn draw_grid(ctx: &web::CanvasRenderingContext2d, layout: &ViewLayout) {
    let (min, max) = layout.visible_bounds();
    ctx.set_line_width(1.0);

    for (i, x) in grid_lines(min.x, max.x, GRID_SPACING) {
        let a = layout.world_to_canvas(Vec3::new(x, 0.0, min.y));
        let b = layout.world_to_canvas(Vec3::new(x, 0.0, max.y));
        stroke_line(ctx, grid_color(i), a.x, a.y, b.x, b.y);
    }
    for (i, z) in grid_lines(min.y, max.y, GRID_SPACING) {
        let a = layout.world_to_canvas(Vec3::new(min.x, 0.0, z));
        let b = layout.world_to_canvas(Vec3::new(max.x, 0.0, z));
        stroke_line(ctx, grid_color(i), a.x, a.y, b.x, b.y);
    }
}

#[inline]
fn grid_color(index: i32) -> &'static str {
    if index.rem_euclid(GRID_MAJOR_EVERY) == 0 {
        GRID_MAJOR_COLOR
    } else {
        GRID_MINOR_COLOR
    }
}

#[inline]
fn stroke_line(ctx: &web::CanvasRenderingContext2d, color: &str, x0: f32, y0: f32, x1: f32, y1: f32) {
    ctx.set_stroke_style_str(color);
    ctx.begin_path();
    ctx.move_to(x0 as f64, y0 as f64);
    ctx.line_to(x1 as f64, y1 as f64);
    ctx.stroke();
}
