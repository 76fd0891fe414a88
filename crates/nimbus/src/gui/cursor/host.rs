use super::view;
use crate::gui::theme::CursorColors;
use crate::gui::window;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use nimbus_engine::{ClickableKind, CursorEngine, Host, MarkerClass, Point, Update};
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

pub fn classify(widget: &gtk::Widget, marker: &MarkerClass) -> Option<ClickableKind> {
    if widget.is::<gtk::LinkButton>() {
        Some(ClickableKind::Anchor)
    } else if widget.is::<gtk::Button>() && widget.has_css_class("suggested-action") {
        Some(ClickableKind::Submit)
    } else if widget.is::<gtk::Button>()
        || widget.is::<gtk::CheckButton>()
        || widget.is::<gtk::Switch>()
        || widget.is::<gtk::MenuButton>()
    {
        Some(ClickableKind::Button)
    } else if widget.is::<gtk::DropDown>() {
        Some(ClickableKind::Select)
    } else if widget
        .downcast_ref::<gtk::Label>()
        .is_some_and(|label| label.mnemonic_widget().is_some())
    {
        Some(ClickableKind::BoundLabel)
    } else if widget.has_css_class(marker.as_str()) {
        Some(ClickableKind::Marked)
    } else {
        None
    }
}

/// Clickables are not descended into; a button's label is part of the button.
fn collect_clickables(
    widget: &gtk::Widget,
    marker: &MarkerClass,
    found: &mut Vec<(gtk::Widget, ClickableKind)>,
) {
    let mut child = widget.first_child();
    while let Some(current) = child {
        match classify(&current, marker) {
            Some(kind) => found.push((current.clone(), kind)),
            None => collect_clickables(&current, marker, found),
        }
        child = current.next_sibling();
    }
}

fn redraw_if(canvas: &gtk::DrawingArea, update: Update) {
    if update.should_redraw {
        canvas.queue_draw();
    }
}

pub struct Binding {
    widget: gtk::Widget,
    controllers: Vec<gtk::EventController>,
    previous_cursor: Option<Option<gdk::Cursor>>,
}

impl Binding {
    fn attach(widget: &gtk::Widget, controllers: Vec<gtk::EventController>) -> Self {
        for controller in &controllers {
            widget.add_controller(controller.clone());
        }
        Self {
            widget: widget.clone(),
            controllers,
            previous_cursor: None,
        }
    }
}

pub struct GtkHost {
    window: gtk::ApplicationWindow,
    page: gtk::Widget,
    canvas: gtk::DrawingArea,
    engine: Rc<RefCell<CursorEngine>>,
    colors: Rc<CursorColors>,
    marker: MarkerClass,
    hide_element_cursors: bool,
}

impl GtkHost {
    /// `canvas` must cover `page` exactly so both share one coordinate space.
    pub fn new(
        window: &gtk::ApplicationWindow,
        page: &impl IsA<gtk::Widget>,
        canvas: &gtk::DrawingArea,
        engine: CursorEngine,
    ) -> Self {
        let config = engine.config();
        Self {
            window: window.clone(),
            page: page.clone().upcast(),
            canvas: canvas.clone(),
            colors: Rc::new(CursorColors::from_config(config)),
            marker: config.marker_class.clone(),
            hide_element_cursors: !config.show_system_cursor,
            engine: Rc::new(RefCell::new(engine)),
        }
    }

    pub fn marker(&self) -> &MarkerClass {
        &self.marker
    }

    fn motion_controller(&self) -> gtk::EventControllerMotion {
        let motion = gtk::EventControllerMotion::new();
        motion.set_propagation_phase(gtk::PropagationPhase::Capture);

        let (engine, canvas) = (self.engine.clone(), self.canvas.clone());
        motion.connect_motion(move |_, x, y| {
            redraw_if(&canvas, engine.borrow_mut().pointer_move(Point::new(x, y)));
        });

        let (engine, canvas) = (self.engine.clone(), self.canvas.clone());
        motion.connect_enter(move |_, x, y| {
            let mut engine = engine.borrow_mut();
            let update = engine
                .viewport_enter()
                .merge(engine.pointer_move(Point::new(x, y)));
            redraw_if(&canvas, update);
        });

        let (engine, canvas) = (self.engine.clone(), self.canvas.clone());
        motion.connect_leave(move |_| {
            redraw_if(&canvas, engine.borrow_mut().viewport_leave());
        });

        motion
    }

    fn button_controller(&self) -> gtk::EventControllerLegacy {
        let legacy = gtk::EventControllerLegacy::new();
        legacy.set_propagation_phase(gtk::PropagationPhase::Capture);

        let (engine, canvas) = (self.engine.clone(), self.canvas.clone());
        legacy.connect_event(move |_, event| {
            let update = match event.event_type() {
                gdk::EventType::ButtonPress => engine.borrow_mut().pointer_down(),
                gdk::EventType::ButtonRelease => engine.borrow_mut().pointer_up(),
                _ => Update::none(),
            };
            redraw_if(&canvas, update);
            glib::Propagation::Proceed
        });

        legacy
    }

    fn element_controllers(&self) -> (gtk::EventControllerMotion, gtk::EventControllerLegacy) {
        let hover = gtk::EventControllerMotion::new();

        let (engine, canvas) = (self.engine.clone(), self.canvas.clone());
        hover.connect_enter(move |_, _, _| {
            redraw_if(&canvas, engine.borrow_mut().hover_in());
        });

        let (engine, canvas) = (self.engine.clone(), self.canvas.clone());
        hover.connect_leave(move |_| {
            redraw_if(&canvas, engine.borrow_mut().hover_out());
        });

        let press = gtk::EventControllerLegacy::new();
        press.set_propagation_phase(gtk::PropagationPhase::Capture);

        let (engine, canvas, inside) = (self.engine.clone(), self.canvas.clone(), hover.clone());
        press.connect_event(move |_, event| {
            let mut engine = engine.borrow_mut();
            let update = match event.event_type() {
                gdk::EventType::ButtonPress => engine.element_press(),
                // a release outside the element is not a click; leaving already reset the state
                gdk::EventType::ButtonRelease if inside.contains_pointer() => {
                    engine.element_release().merge(engine.element_click())
                }
                _ => Update::none(),
            };
            redraw_if(&canvas, update);
            glib::Propagation::Proceed
        });

        (hover, press)
    }
}

impl Host for GtkHost {
    type Element = gtk::Widget;
    type Binding = Binding;
    type Ticker = gtk::TickCallbackId;
    type CursorGuard = Option<gdk::Cursor>;

    fn hide_page_cursor(&mut self) -> Option<gdk::Cursor> {
        window::hide_cursor(&self.window)
    }

    fn restore_page_cursor(&mut self, previous: Option<gdk::Cursor>) {
        window::restore_cursor(&self.window, previous.as_ref());
    }

    fn bind_page(&mut self) -> Binding {
        Binding::attach(
            &self.page,
            vec![
                self.motion_controller().upcast(),
                self.button_controller().upcast(),
            ],
        )
    }

    fn clickables(&self) -> Vec<(gtk::Widget, ClickableKind)> {
        let mut found = Vec::new();
        collect_clickables(&self.page, &self.marker, &mut found);
        found
    }

    fn bind(&mut self, element: &gtk::Widget, _kind: ClickableKind) -> Binding {
        let (hover, press) = self.element_controllers();
        let mut binding = Binding::attach(element, vec![hover.upcast(), press.upcast()]);
        if self.hide_element_cursors {
            binding.previous_cursor = Some(window::hide_cursor(element));
        }
        binding
    }

    fn unbind(&mut self, binding: Binding) {
        for controller in &binding.controllers {
            binding.widget.remove_controller(controller);
        }
        if let Some(previous) = binding.previous_cursor {
            window::restore_cursor(&binding.widget, previous.as_ref());
        }
    }

    fn start_ticker(&mut self) -> gtk::TickCallbackId {
        let (engine, colors) = (self.engine.clone(), self.colors.clone());
        self.canvas.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = view::draw(cr, &engine.borrow(), &colors) {
                log::error!("Drawing error: {}", e);
            }
        });

        let engine = self.engine.clone();
        self.canvas.add_tick_callback(move |canvas, clock| {
            let frame_time = clock.frame_time();
            match panic::catch_unwind(AssertUnwindSafe(|| engine.borrow_mut().tick(frame_time))) {
                Ok(update) => redraw_if(canvas, update),
                Err(_) => log::error!("Cursor frame step panicked, keeping the ticker alive"),
            }
            glib::ControlFlow::Continue
        })
    }

    fn stop_ticker(&mut self, ticker: gtk::TickCallbackId) {
        ticker.remove();
        self.canvas.unset_draw_func();
        self.canvas.queue_draw();
    }
}
