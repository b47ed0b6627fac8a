use super::START_OFFSET;
use super::model::IndicatorState;
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use slingshot::{Slingshot, arrow, spinner};
use std::f64::consts::PI;

struct GlyphRenderer<'a> {
    state: &'a IndicatorState,
    colors: &'a ThemeColors,
    cx: f64,
    cy: f64,
}

impl GlyphRenderer<'_> {
    fn draw_disc(&self, cr: &Context, alpha: f64) -> Result<(), cairo::Error> {
        set_source(cr, self.colors.disc, alpha);
        cr.arc(self.cx, self.cy, self.state.sizes.size / 2.0, 0.0, 2.0 * PI);
        cr.fill()
    }

    fn draw_arc(&self, cr: &Context, slingshot: &Slingshot, alpha: f64) -> Result<(), cairo::Error> {
        let sizes = &self.state.sizes;
        let start = START_OFFSET + (slingshot.rotation + slingshot.start_trim) * 2.0 * PI;
        let end = START_OFFSET + (slingshot.rotation + slingshot.end_trim) * 2.0 * PI;
        if end <= start {
            return Ok(());
        }

        set_source(cr, self.colors.glyph, alpha);
        cr.set_line_width(sizes.stroke_width);
        cr.set_line_cap(cairo::LineCap::Square);
        cr.arc(self.cx, self.cy, sizes.arc_radius, start, end);
        cr.stroke()?;

        self.draw_arrow(cr, slingshot, end, alpha)
    }

    fn draw_arrow(
        &self,
        cr: &Context,
        slingshot: &Slingshot,
        end_angle: f64,
        alpha: f64,
    ) -> Result<(), cairo::Error> {
        if slingshot.arrow_scale <= 0.0 {
            return Ok(());
        }
        let sizes = &self.state.sizes;

        cr.save()?;
        cr.translate(
            self.cx + sizes.arc_radius * end_angle.cos(),
            self.cy + sizes.arc_radius * end_angle.sin(),
        );
        // local x along the radius, local y along the direction of travel
        cr.rotate(end_angle);

        let [left, right, tip] = arrow::arrowhead(sizes, slingshot.arrow_scale);
        set_source(cr, self.colors.glyph, alpha);
        cr.move_to(left.0, left.1);
        cr.line_to(right.0, right.1);
        cr.line_to(tip.0, tip.1);
        cr.close_path();
        cr.fill()?;
        cr.restore()
    }

    fn draw_spinner(&self, cr: &Context, alpha: f64) -> Result<(), cairo::Error> {
        let sizes = &self.state.sizes;
        let frame = spinner::frame(self.state.spin_phase);
        let start = START_OFFSET + (frame.rotation + frame.start_trim) * 2.0 * PI;
        let end = START_OFFSET + (frame.rotation + frame.end_trim) * 2.0 * PI;

        set_source(cr, self.colors.spinner, alpha);
        cr.set_line_width(sizes.stroke_width);
        cr.set_line_cap(cairo::LineCap::Round);
        cr.arc(self.cx, self.cy, sizes.arc_radius, start, end);
        cr.stroke()
    }
}

fn set_source(cr: &Context, color: Srgba<f64>, alpha: f64) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a * alpha);
}

pub fn draw(
    cr: &Context,
    state: &IndicatorState,
    colors: &ThemeColors,
    width: i32,
    _height: i32,
) -> Result<(), cairo::Error> {
    let slingshot = state.slingshot();
    let alpha = state.progress();
    let crossfade = state.crossfade;

    if alpha <= 0.0 && crossfade <= 0.0 {
        return Ok(());
    }

    let renderer = GlyphRenderer {
        state,
        colors,
        cx: f64::from(width) / 2.0,
        cy: slingshot.offset + state.sizes.size / 2.0,
    };

    renderer.draw_disc(cr, alpha.max(crossfade))?;

    let glyph_alpha = alpha * (1.0 - crossfade);
    if glyph_alpha > 0.0 {
        renderer.draw_arc(cr, &slingshot, glyph_alpha)?;
    }
    if crossfade > 0.0 {
        renderer.draw_spinner(cr, crossfade)?;
    }
    Ok(())
}
