use crate::gui::theme::{CursorColors, ShapePaint};
use cairo::Context;
use nimbus_engine::{CursorEngine, ShapeStyle};
use std::f64::consts::PI;

fn draw_shape(
    cr: &Context,
    style: &ShapeStyle,
    paint: &ShapePaint,
) -> Result<(), cairo::Error> {
    if style.is_hidden() || style.diameter <= 0.0 {
        return Ok(());
    }

    let (x, y) = (style.center.x, style.center.y);

    let (r, g, b, a) = paint.fill.into_components();
    cr.set_source_rgba(r, g, b, a * style.opacity);
    cr.arc(x, y, style.radius(), 0.0, 2.0 * PI);
    cr.fill()?;

    if paint.has_border() {
        // border sits outside the diameter, like a content-box border
        let (r, g, b, a) = paint.border.into_components();
        cr.set_source_rgba(r, g, b, a * style.opacity);
        cr.set_line_width(paint.border_width);
        cr.arc(
            x,
            y,
            style.radius() + paint.border_width / 2.0,
            0.0,
            2.0 * PI,
        );
        cr.stroke()?;
    }
    Ok(())
}

pub fn draw(
    cr: &Context,
    engine: &CursorEngine,
    colors: &CursorColors,
) -> Result<(), cairo::Error> {
    draw_shape(cr, &engine.outer(), &colors.outer)?;
    draw_shape(cr, &engine.inner(), &colors.inner)
}
