use gtk::gdk;
use gtk4 as gtk;
use nimbus_engine::{CursorConfig, Paint};
use palette::Srgba;

pub struct ShapePaint {
    pub fill: Srgba<f64>,
    pub border: Srgba<f64>,
    pub border_width: f64,
}

impl ShapePaint {
    fn new(fill: Srgba<f64>, border: Paint, border_width: f64) -> Self {
        Self {
            fill,
            border: *border,
            border_width,
        }
    }

    pub fn has_border(&self) -> bool {
        self.border_width > 0.0 && self.border.alpha > 0.0
    }
}

pub struct CursorColors {
    pub inner: ShapePaint,
    pub outer: ShapePaint,
}

impl CursorColors {
    pub fn from_config(config: &CursorConfig) -> Self {
        Self {
            inner: ShapePaint::new(
                config.inner_fill(),
                config.inner_border_color,
                config.inner_border,
            ),
            outer: ShapePaint::new(
                config.outer_fill(),
                config.outer_border_color,
                config.outer_border,
            ),
        }
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.nimbus-canvas {
    background: none;
    background-color: transparent;
}

.nimbus-page {
    padding: 32px;
}

.link {
    color: @accent_color;
    text-decoration: underline;
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
