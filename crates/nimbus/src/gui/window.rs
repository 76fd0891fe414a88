use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;

/// Cursor name GTK resolves to an invisible pointer.
const HIDDEN_CURSOR: &str = "none";

pub fn hide_cursor(widget: &impl IsA<gtk::Widget>) -> Option<gdk::Cursor> {
    let previous = widget.cursor();
    widget.set_cursor_from_name(Some(HIDDEN_CURSOR));
    previous
}

pub fn restore_cursor(widget: &impl IsA<gtk::Widget>, previous: Option<&gdk::Cursor>) {
    widget.set_cursor(previous);
}

pub fn init_window(window: &gtk::ApplicationWindow) {
    window.set_title(Some("Nimbus"));
    window.set_default_size(720, 520);
}
