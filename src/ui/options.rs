use gtk4 as gtk;

use gtk::Orientation;
use gtk4::prelude::*;

use crate::app::controller::READY_STATUS;
use crate::app::{OutputSettings, ShortcutConfig, StatusKind};
use crate::output::OutputFormat;

pub struct OptionsComponents {
    pub options_box: gtk::Box,
    pub format_dropdown: gtk::DropDown,
    pub close_after_check: gtk::CheckButton,
    pub status_label: gtk::Label,
    pub hint_label: gtk::Label,
}

impl OptionsComponents {
    /// Snapshot of the widgets for one capture
    pub fn settings(&self) -> OutputSettings {
        let format = OutputFormat::all()
            .get(self.format_dropdown.selected() as usize)
            .copied()
            .unwrap_or_default();

        OutputSettings {
            format,
            close_after_capture: self.close_after_check.is_active(),
        }
    }

    pub fn set_status(&self, message: &str, kind: StatusKind) {
        for class in ["success", "error"] {
            self.status_label.remove_css_class(class);
        }
        if let Some(class) = kind.css_class() {
            self.status_label.add_css_class(class);
        }
        self.status_label.set_label(message);
    }
}

pub fn create_options(shortcuts: &ShortcutConfig) -> OptionsComponents {
    let names: Vec<&str> = OutputFormat::all().iter().map(|f| f.extension()).collect();
    let format_dropdown = gtk::DropDown::from_strings(&names);
    format_dropdown.set_selected(0);

    let format_label = gtk::Label::new(Some("Format:"));
    format_label.add_css_class("dim-label");

    let format_row = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(12)
        .build();
    format_row.append(&format_label);
    format_row.append(&format_dropdown);

    let close_after_check = gtk::CheckButton::builder()
        .label("Close after capture")
        .active(true)
        .build();

    let status_label = gtk::Label::builder()
        .label(READY_STATUS)
        .wrap(true)
        .selectable(true)
        .halign(gtk::Align::Start)
        .build();

    let hint_label = gtk::Label::builder()
        .label(shortcuts.hint())
        .halign(gtk::Align::Start)
        .build();
    hint_label.add_css_class("dim-label");
    hint_label.add_css_class("caption");

    let options_box = gtk::Box::builder()
        .orientation(Orientation::Vertical)
        .spacing(12)
        .margin_top(18)
        .margin_bottom(18)
        .margin_start(18)
        .margin_end(18)
        .build();
    options_box.append(&format_row);
    options_box.append(&close_after_check);
    options_box.append(&status_label);
    options_box.append(&hint_label);

    OptionsComponents {
        options_box,
        format_dropdown,
        close_after_check,
        status_label,
        hint_label,
    }
}
