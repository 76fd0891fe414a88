pub mod host;
pub mod view;

use gtk::prelude::*;
use gtk4 as gtk;
use nimbus_engine::{CursorEngine, Mount};

pub use host::{GtkHost, classify};

pub type CursorMount = Mount<GtkHost>;

pub fn mount(
    engine: CursorEngine,
    window: &gtk::ApplicationWindow,
    page: &impl IsA<gtk::Widget>,
    canvas: &gtk::DrawingArea,
) -> CursorMount {
    let show_system_cursor = engine.config().show_system_cursor;
    Mount::new(GtkHost::new(window, page, canvas, engine), show_system_cursor)
}

pub fn register(mount: &mut CursorMount, widget: &gtk::Widget) -> bool {
    classify(widget, mount.host().marker())
        .is_some_and(|kind| mount.register(widget.clone(), kind))
}
