//! `snipper-capture [png|jpg]`: select a region and save it, no window.

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::gio;
use std::cell::Cell;
use std::process::ExitCode;
use std::rc::Rc;

use snipper::app::{AppConfig, AppController, CaptureReport, LaunchMode, NextStep, OutputSettings};
use snipper::notify::DesktopNotifier;

const APP_ID: &str = "io.github.snipper.Capture";

fn main() -> ExitCode {
    snipper::init_logging();

    let settings = OutputSettings::from_args(std::env::args_os().skip(1));
    let exit_code = Rc::new(Cell::new(0u8));

    let app = adw::Application::builder()
        .application_id(APP_ID)
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();

    app.connect_activate({
        let exit_code = exit_code.clone();
        move |app| {
            let controller = AppController::new(
                app,
                AppConfig::from_env(),
                LaunchMode::Direct,
                Rc::new(DesktopNotifier::default()),
            );

            let on_report = {
                let app = app.clone();
                let controller = controller.clone();
                let exit_code = exit_code.clone();
                move |report: CaptureReport| {
                    if let CaptureReport::Failed(e) = &report {
                        eprintln!("snipper-capture: {}", e);
                    }
                    if let NextStep::Exit(code) = controller.next_step(&settings, &report) {
                        exit_code.set(code);
                    }
                    app.quit();
                }
            };

            controller.trigger(settings, None, on_report);
        }
    });

    // Arguments were parsed above; GApplication would treat them as files
    let status = app.run_with_args::<&str>(&[]);
    if status != gtk::glib::ExitCode::SUCCESS {
        return ExitCode::FAILURE;
    }
    ExitCode::from(exit_code.get())
}
