use gtk4 as gtk;
use libadwaita as adw;

use gtk::gdk;
use gtk::gdk_pixbuf::Pixbuf;
use gtk::glib;
use gtk::{DrawingArea, EventControllerKey, GestureDrag};
use gtk4::prelude::*;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

use super::geometry::{Point, SurfaceTransform};
use super::render::{render_overlay, OverlayView};
use super::state::{SelectionOutcome, SelectionSession};
use crate::app::config::{Action, ShortcutConfig};
use crate::error::SnipError;

const OVERLAY_CSS_CLASS: &str = "snipper-overlay";
const OVERLAY_CSS: &str = "window.snipper-overlay { background: transparent; }";

type FinishCallback = Box<dyn FnOnce(SelectionOutcome)>;

/// Full-screen surface the user drags a rectangle on.
pub struct SelectionOverlay {
    window: gtk::Window,
    drawing_area: DrawingArea,
    shortcuts: Rc<ShortcutConfig>,
}

/// Shared between the overlay's signal handlers
struct OverlayContext {
    window: gtk::Window,
    drawing_area: DrawingArea,
    session: RefCell<SelectionSession>,
    background: Option<Pixbuf>,
    on_finish: RefCell<Option<FinishCallback>>,
}

impl SelectionOverlay {
    /// Create the undecorated surface. Fails when there is no display.
    pub fn new(app: &adw::Application, shortcuts: Rc<ShortcutConfig>) -> Result<Self, SnipError> {
        let display = gdk::Display::default()
            .ok_or_else(|| SnipError::SurfaceInitFailed("no display available".into()))?;

        let provider = gtk::CssProvider::new();
        provider.load_from_string(OVERLAY_CSS);
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        let drawing_area = DrawingArea::builder().hexpand(true).vexpand(true).build();

        let window = gtk::Window::builder()
            .application(app)
            .title("Select Region")
            .decorated(false)
            .child(&drawing_area)
            .build();
        window.add_css_class(OVERLAY_CSS_CLASS);
        window.set_cursor_from_name(Some("crosshair"));

        Ok(Self {
            window,
            drawing_area,
            shortcuts,
        })
    }

    /// Show the overlay over `background` and call `on_finish` once with the
    /// outcome. Selected rectangles are in the background's pixel space.
    pub fn run<F>(self, background: Option<Pixbuf>, on_finish: F)
    where
        F: FnOnce(SelectionOutcome) + 'static,
    {
        let ctx = Rc::new(OverlayContext {
            window: self.window.clone(),
            drawing_area: self.drawing_area.clone(),
            session: RefCell::new(SelectionSession::new()),
            background,
            on_finish: RefCell::new(Some(Box::new(on_finish))),
        });

        connect_draw(&ctx);
        connect_drag(&ctx);
        connect_keys(&ctx, self.shortcuts.clone());
        connect_close(&ctx);

        info!("Selection overlay opened");
        self.window.fullscreen();
        self.window.present();
    }
}

impl OverlayContext {
    fn transform(&self) -> SurfaceTransform {
        match &self.background {
            Some(pixbuf) => SurfaceTransform::fit(
                pixbuf.width() as u32,
                pixbuf.height() as u32,
                self.drawing_area.width(),
                self.drawing_area.height(),
            ),
            None => SurfaceTransform::identity(),
        }
    }

    /// Map to image space, then hand the outcome to the callback.
    fn deliver(&self, outcome: SelectionOutcome, close_surface: bool) {
        let outcome = match outcome {
            SelectionOutcome::Selected(rect) => {
                let mapped = self.transform().to_image_rect(rect);
                let mapped = match &self.background {
                    Some(pixbuf) => mapped.clamp_to(pixbuf.width() as u32, pixbuf.height() as u32),
                    None => mapped,
                };
                SelectionOutcome::Selected(mapped)
            }
            SelectionOutcome::Cancelled => SelectionOutcome::Cancelled,
        };

        let callback = self.on_finish.borrow_mut().take();

        if close_surface {
            self.window.close();
        }

        match callback {
            Some(callback) => callback(outcome),
            None => debug!("Selection outcome already delivered"),
        }
    }
}

fn connect_draw(ctx: &Rc<OverlayContext>) {
    let weak = Rc::downgrade(ctx);
    ctx.drawing_area.set_draw_func(move |_, cr, width, height| {
        let Some(ctx) = weak.upgrade() else {
            return;
        };
        let view = OverlayView {
            background: ctx.background.as_ref(),
            transform: ctx.transform(),
            selection: ctx.session.borrow().current_rect(),
        };
        if let Err(e) = render_overlay(cr, &view, width as f64, height as f64) {
            warn!("Overlay frame skipped: {}", e);
        }
    });
}

fn connect_drag(ctx: &Rc<OverlayContext>) {
    let drag = GestureDrag::new();
    drag.set_button(gdk::BUTTON_PRIMARY);

    drag.connect_drag_begin({
        let ctx = ctx.clone();
        move |_, x, y| {
            let redraw = ctx.session.borrow_mut().press(Point::from_surface(x, y));
            if redraw {
                ctx.drawing_area.queue_draw();
            }
        }
    });

    drag.connect_drag_update({
        let ctx = ctx.clone();
        move |gesture, offset_x, offset_y| {
            let Some((start_x, start_y)) = gesture.start_point() else {
                return;
            };
            let to = Point::from_surface(start_x + offset_x, start_y + offset_y);
            let redraw = ctx.session.borrow_mut().motion(to);
            if redraw {
                ctx.drawing_area.queue_draw();
            }
        }
    });

    drag.connect_drag_end({
        let ctx = ctx.clone();
        move |gesture, offset_x, offset_y| {
            let Some((start_x, start_y)) = gesture.start_point() else {
                return;
            };
            let at = Point::from_surface(start_x + offset_x, start_y + offset_y);
            let outcome = ctx.session.borrow_mut().release(at);
            if let Some(outcome) = outcome {
                ctx.deliver(outcome, true);
            }
        }
    });

    ctx.drawing_area.add_controller(drag);
}

fn connect_keys(ctx: &Rc<OverlayContext>, shortcuts: Rc<ShortcutConfig>) {
    let keys = EventControllerKey::new();

    keys.connect_key_pressed({
        let ctx = ctx.clone();
        move |_, key, _, modifiers| {
            if shortcuts.get_action(key, modifiers) != Some(Action::Cancel) {
                return glib::Propagation::Proceed;
            }
            let outcome = ctx.session.borrow_mut().cancel();
            if let Some(outcome) = outcome {
                ctx.deliver(outcome, true);
            }
            glib::Propagation::Stop
        }
    });

    ctx.window.add_controller(keys);
}

fn connect_close(ctx: &Rc<OverlayContext>) {
    ctx.window.connect_close_request({
        let ctx = ctx.clone();
        move |_| {
            let outcome = ctx.session.borrow_mut().close();
            if let Some(outcome) = outcome {
                // Already closing; don't re-enter close()
                ctx.deliver(outcome, false);
            }
            glib::Propagation::Proceed
        }
    });
}
