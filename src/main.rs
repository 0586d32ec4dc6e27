use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use std::cell::Cell;
use std::process::ExitCode;
use std::rc::Rc;

use snipper::app::{AppConfig, AppController, LaunchMode};
use snipper::notify::DesktopNotifier;

const APP_ID: &str = "io.github.snipper.Snipper";

fn main() -> ExitCode {
    snipper::init_logging();

    let app = adw::Application::builder().application_id(APP_ID).build();
    let config = AppConfig::from_env();
    let exit_code = Rc::new(Cell::new(0u8));

    app.connect_activate({
        let exit_code = exit_code.clone();
        move |app| {
            if let Some(window) = app.active_window() {
                window.present();
                return;
            }

            let controller = AppController::new(
                app,
                config.clone(),
                LaunchMode::Windowed,
                Rc::new(DesktopNotifier::default()),
            );
            snipper::ui::build_ui(app, &controller, exit_code.clone());
        }
    });

    let status = app.run();
    if status != gtk::glib::ExitCode::SUCCESS {
        return ExitCode::FAILURE;
    }
    ExitCode::from(exit_code.get())
}
