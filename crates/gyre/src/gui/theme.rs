use gdk4 as gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub glyph: Srgba<f64>,
    pub spinner: Srgba<f64>,
    pub disc: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            glyph: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.25, 0.5, 0.95, 1.0),
                Some(1.0),
            ),
            spinner: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.85, 0.85, 0.85, 0.9),
                Some(0.9),
            ),
            disc: Self::lookup_color(
                context,
                "theme_bg_color",
                Srgba::new(0.13, 0.13, 0.13, 0.95),
                Some(0.95),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.gyre-drawing-area {
    background-color: alpha(currentColor, 0.04);
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
