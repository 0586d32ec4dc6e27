use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;

pub struct HeaderComponents {
    pub header_bar: adw::HeaderBar,
    pub capture_btn: gtk::Button,
}

pub fn create_header_bar() -> HeaderComponents {
    let capture_btn = gtk::Button::builder()
        .label("Capture Screenshot")
        .icon_name("camera-photo-symbolic")
        .tooltip_text("Capture Screenshot")
        .build();
    capture_btn.add_css_class("suggested-action");

    let title = adw::WindowTitle::new("Snipper", "Region screenshot");

    let header_bar = adw::HeaderBar::builder().title_widget(&title).build();
    header_bar.pack_start(&capture_btn);

    HeaderComponents {
        header_bar,
        capture_btn,
    }
}
