//! GTK4 host wiring: a `DrawingArea` whose draw callback renders the engine
//! and whose input controllers drive zoom and pan.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::warn;

use crate::api::TimelineEngine;
use crate::core::Viewport;
use crate::interaction::InteractionEvent;
use crate::render::{CairoContextRenderer, Renderer};

pub type SharedTimelineEngine<R> = Rc<RefCell<TimelineEngine<R>>>;

/// Owns a `DrawingArea` bound to a shared engine.
pub struct GtkTimelineAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: SharedTimelineEngine<R>,
    drawing_area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkTimelineAdapter<R> {
    #[must_use]
    pub fn new(engine: TimelineEngine<R>) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        drawing_area.set_cursor_from_name(Some(engine.borrow().cursor_affordance().cursor_name()));

        let adapter = Self {
            engine,
            drawing_area,
        };
        adapter.install_draw_func();
        adapter.install_pointer_controllers();
        adapter
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> SharedTimelineEngine<R> {
        Rc::clone(&self.engine)
    }

    /// Call after mutating the engine from outside the adapter, e.g. after
    /// `set_range` or `set_events`.
    pub fn queue_draw(&self) {
        self.drawing_area.queue_draw();
    }

    fn install_draw_func(&self) {
        let engine = Rc::clone(&self.engine);
        self.drawing_area
            .set_draw_func(move |_widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut timeline) = engine.try_borrow_mut() else {
                    return;
                };

                let viewport = Viewport::new(width as u32, height as u32);
                if timeline.viewport() != viewport {
                    if let Err(err) = timeline.set_viewport(viewport) {
                        warn!(error = %err, "skipping timeline draw on invalid viewport");
                        return;
                    }
                }
                if let Err(err) = timeline.render_on_cairo_context(context) {
                    warn!(error = %err, "timeline draw failed");
                }
            });
    }

    fn install_pointer_controllers(&self) {
        let pointer_x = Rc::new(Cell::new(0.0));

        let motion = gtk::EventControllerMotion::new();
        {
            let pointer_x = Rc::clone(&pointer_x);
            motion.connect_motion(move |_, x, _y| pointer_x.set(x));
        }
        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            motion.connect_leave(move |_| {
                let Ok(mut timeline) = engine.try_borrow_mut() else {
                    return;
                };
                if let Some(event) = timeline.pointer_leave() {
                    apply_cursor(&drawing_area, event);
                }
            });
        }
        self.drawing_area.add_controller(motion);

        let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::VERTICAL);
        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            let pointer_x = Rc::clone(&pointer_x);
            scroll.connect_scroll(move |_, _dx, dy| {
                let Ok(mut timeline) = engine.try_borrow_mut() else {
                    return glib::Propagation::Proceed;
                };
                match timeline.wheel_zoom(dy, pointer_x.get(), f64::from(drawing_area.width())) {
                    Ok(true) => drawing_area.queue_draw(),
                    Ok(false) => {}
                    Err(err) => warn!(error = %err, "ignoring wheel zoom"),
                }
                glib::Propagation::Stop
            });
        }
        self.drawing_area.add_controller(scroll);

        // A drag gesture keeps reporting through release; a click gesture is
        // cancelled once the pointer passes the drag threshold.
        let drag = gtk::GestureDrag::new();
        drag.set_button(gtk::gdk::BUTTON_PRIMARY);
        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            drag.connect_drag_begin(move |_, start_x, _start_y| {
                let Ok(mut timeline) = engine.try_borrow_mut() else {
                    return;
                };
                if let Some(event) = begin_drag(&mut timeline, start_x) {
                    apply_cursor(&drawing_area, event);
                }
            });
        }
        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            let pointer_x = Rc::clone(&pointer_x);
            drag.connect_drag_update(move |gesture, offset_x, _offset_y| {
                let Some((start_x, _start_y)) = gesture.start_point() else {
                    return;
                };
                pointer_x.set(start_x + offset_x);
                let Ok(mut timeline) = engine.try_borrow_mut() else {
                    return;
                };
                let width = f64::from(drawing_area.width());
                if update_drag(&mut timeline, start_x, offset_x, width) {
                    drawing_area.queue_draw();
                }
            });
        }
        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            drag.connect_drag_end(move |_, _offset_x, _offset_y| {
                let Ok(mut timeline) = engine.try_borrow_mut() else {
                    return;
                };
                if let Some(event) = timeline.pan_end() {
                    apply_cursor(&drawing_area, event);
                }
            });
        }
        self.drawing_area.add_controller(drag);
    }
}

fn begin_drag<R: Renderer>(
    timeline: &mut TimelineEngine<R>,
    start_x: f64,
) -> Option<InteractionEvent> {
    match timeline.pan_start(start_x) {
        Ok(event) => event,
        Err(err) => {
            warn!(error = %err, "ignoring pan start");
            None
        }
    }
}

/// Drag updates report offsets from the press point, not absolute positions.
fn update_drag<R: Renderer>(
    timeline: &mut TimelineEngine<R>,
    start_x: f64,
    offset_x: f64,
    width: f64,
) -> bool {
    match timeline.pan_move(start_x + offset_x, width) {
        Ok(changed) => changed,
        Err(err) => {
            warn!(error = %err, "ignoring pan move");
            false
        }
    }
}

fn apply_cursor(drawing_area: &gtk::DrawingArea, event: InteractionEvent) {
    drawing_area.set_cursor_from_name(Some(event.cursor().cursor_name()));
}
