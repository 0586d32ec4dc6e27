use gtk::glib;
use gtk4 as gtk;
use libadwaita as adw;
use log::debug;

use adw::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::app::{Action, AppController, CaptureReport, NextStep, OutputSettings};
use crate::ui::header::HeaderComponents;
use crate::ui::options::OptionsComponents;

pub struct UiComponents {
    pub window: adw::ApplicationWindow,
    pub header: HeaderComponents,
    pub options: Rc<OptionsComponents>,
}

/// Everything a capture trigger needs, cloned into each handler
#[derive(Clone)]
struct CaptureContext {
    controller: Rc<AppController>,
    window: adw::ApplicationWindow,
    capture_btn: gtk::Button,
    options: Rc<OptionsComponents>,
    exit_code: Rc<Cell<u8>>,
}

impl CaptureContext {
    fn start_capture(&self) {
        let settings = self.options.settings();
        let ctx = self.clone();
        let started = self
            .controller
            .trigger(settings, Some(&self.window), move |report| {
                ctx.apply_report(&settings, report);
            });
        if started {
            self.capture_btn.set_sensitive(false);
        }
    }

    fn apply_report(&self, settings: &OutputSettings, report: CaptureReport) {
        self.capture_btn.set_sensitive(true);
        match self.controller.next_step(settings, &report) {
            NextStep::Exit(code) => {
                debug!("Exiting with code {}", code);
                self.exit_code.set(code);
                if let Some(app) = self.window.application() {
                    app.quit();
                }
            }
            NextStep::Idle { message, kind } => {
                self.options.set_status(&message, kind);
                self.window.present();
            }
        }
    }
}

fn connect_capture_handler(ctx: &CaptureContext, components: &UiComponents) {
    components.header.capture_btn.connect_clicked({
        let ctx = ctx.clone();
        move |_| ctx.start_capture()
    });
}

fn connect_shortcut_handler(ctx: &CaptureContext, components: &UiComponents) {
    let keys = gtk::EventControllerKey::new();

    keys.connect_key_pressed({
        let ctx = ctx.clone();
        move |_, key, _, modifiers| {
            match ctx.controller.config().shortcuts.get_action(key, modifiers) {
                Some(Action::Capture) => {
                    ctx.start_capture();
                    glib::Propagation::Stop
                }
                Some(Action::Quit) => {
                    ctx.window.close();
                    glib::Propagation::Stop
                }
                _ => glib::Propagation::Proceed,
            }
        }
    });

    components.window.add_controller(keys);
}

pub fn connect_all_handlers(
    controller: &Rc<AppController>,
    components: &UiComponents,
    exit_code: Rc<Cell<u8>>,
) {
    debug!("Initializing UI handlers");
    let ctx = CaptureContext {
        controller: controller.clone(),
        window: components.window.clone(),
        capture_btn: components.header.capture_btn.clone(),
        options: components.options.clone(),
        exit_code,
    };

    connect_capture_handler(&ctx, components);
    connect_shortcut_handler(&ctx, components);
}
