//! Settings window for the windowed binary.

pub mod handlers;
pub mod header;
pub mod options;

pub use handlers::{connect_all_handlers, UiComponents};
pub use header::{create_header_bar, HeaderComponents};
pub use options::{create_options, OptionsComponents};

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::Orientation;
use std::cell::Cell;
use std::rc::Rc;

use crate::app::AppController;

/// Build and show the settings window.
///
/// `exit_code` receives the code the process should exit with when a
/// capture ends the application.
pub fn build_ui(
    app: &adw::Application,
    controller: &Rc<AppController>,
    exit_code: Rc<Cell<u8>>,
) -> adw::ApplicationWindow {
    let header = header::create_header_bar();
    let options = Rc::new(options::create_options(&controller.config().shortcuts));

    let content = gtk::Box::builder()
        .orientation(Orientation::Vertical)
        .build();
    content.append(&header.header_bar);
    content.append(&options.options_box);

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Snipper")
        .content(&content)
        .default_width(360)
        .resizable(false)
        .build();

    let components = handlers::UiComponents {
        window: window.clone(),
        header,
        options,
    };

    handlers::connect_all_handlers(controller, &components, exit_code);

    window.present();
    window
}
