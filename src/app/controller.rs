//! Runs one capture from trigger to report and decides what happens next.

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use chrono::Local;
use gtk::{gio, glib};
use log::{debug, error, info};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::config::AppConfig;
use super::settings::OutputSettings;
use super::state::AppState;
use crate::capture::{self, grabber_for, CapturedImage, DisplayServer};
use crate::error::{SaveError, SnipError};
use crate::notify::Notify;
use crate::output::{crop_and_save, ensure_dir, screenshot_path};
use crate::selection::{Rect, SelectionOutcome, SelectionOverlay};

pub const READY_STATUS: &str = "Ready to capture";

/// Terminal outcome of one capture
#[derive(Debug)]
pub enum CaptureReport {
    Saved(PathBuf),
    Cancelled,
    Failed(SnipError),
}

impl CaptureReport {
    pub fn saved_path(&self) -> Option<&Path> {
        match self {
            CaptureReport::Saved(path) => Some(path),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Settings window, capture on demand
    Windowed,
    /// One capture straight from the command line
    Direct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Neutral,
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            StatusKind::Neutral => None,
            StatusKind::Success => Some("success"),
            StatusKind::Error => Some("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    /// Stop the application with this exit code
    Exit(u8),
    /// Stay open showing a status line
    Idle { message: String, kind: StatusKind },
}

/// Exit policy after a capture finishes.
pub fn next_step(mode: LaunchMode, settings: &OutputSettings, report: &CaptureReport) -> NextStep {
    match (mode, report) {
        (LaunchMode::Direct, CaptureReport::Failed(_)) => NextStep::Exit(1),
        (LaunchMode::Direct, _) => NextStep::Exit(0),
        (LaunchMode::Windowed, CaptureReport::Saved(_)) if settings.close_after_capture => {
            NextStep::Exit(0)
        }
        (LaunchMode::Windowed, CaptureReport::Saved(path)) => NextStep::Idle {
            message: format!("Saved to: {}", path.display()),
            kind: StatusKind::Success,
        },
        (LaunchMode::Windowed, CaptureReport::Cancelled) => NextStep::Idle {
            message: READY_STATUS.to_string(),
            kind: StatusKind::Neutral,
        },
        (LaunchMode::Windowed, CaptureReport::Failed(e)) => NextStep::Idle {
            message: format!("Error: {}", e),
            kind: StatusKind::Error,
        },
    }
}

/// Turn an overlay outcome into a report: save and notify, or discard.
///
/// The capture is consumed either way, which removes its raw file.
pub fn complete_selection(
    captured: CapturedImage,
    outcome: SelectionOutcome,
    settings: &OutputSettings,
    config: &AppConfig,
    notifier: &dyn Notify,
) -> CaptureReport {
    match outcome {
        SelectionOutcome::Cancelled => {
            debug!("Selection cancelled, discarding capture");
            CaptureReport::Cancelled
        }
        SelectionOutcome::Selected(rect) => {
            match save_selection(captured, rect, settings, config) {
                Ok(path) => {
                    notifier.notify(&path, settings.format);
                    CaptureReport::Saved(path)
                }
                Err(e) => CaptureReport::Failed(e.into()),
            }
        }
    }
}

fn save_selection(
    captured: CapturedImage,
    rect: Rect,
    settings: &OutputSettings,
    config: &AppConfig,
) -> Result<PathBuf, SaveError> {
    let dir = config.screenshots_dir()?;
    ensure_dir(dir)?;
    let dest = screenshot_path(dir, settings.format, Local::now().naive_local());
    crop_and_save(captured, rect, &dest, settings.format)
}

type ReportCallback = Box<dyn FnOnce(CaptureReport)>;

/// Sequences capture, selection, save and notification.
pub struct AppController {
    app: adw::Application,
    config: AppConfig,
    mode: LaunchMode,
    state: Rc<RefCell<AppState>>,
    notifier: Rc<dyn Notify>,
}

impl AppController {
    pub fn new(
        app: &adw::Application,
        config: AppConfig,
        mode: LaunchMode,
        notifier: Rc<dyn Notify>,
    ) -> Rc<Self> {
        Rc::new(Self {
            app: app.clone(),
            config,
            mode,
            state: Rc::new(RefCell::new(AppState::new())),
            notifier,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn next_step(&self, settings: &OutputSettings, report: &CaptureReport) -> NextStep {
        next_step(self.mode, settings, report)
    }

    /// Start a capture unless one is running. `window` is hidden first.
    ///
    /// `on_report` runs once, on the main loop, when the capture ends.
    pub fn trigger<F>(
        self: &Rc<Self>,
        settings: OutputSettings,
        window: Option<&adw::ApplicationWindow>,
        on_report: F,
    ) -> bool
    where
        F: FnOnce(CaptureReport) + 'static,
    {
        if !self.state.borrow_mut().try_begin_capture() {
            return false;
        }

        let hold = self.app.hold();
        let on_report: ReportCallback = Box::new(on_report);
        info!(
            "Capture started ({}, close after: {})",
            settings.format, settings.close_after_capture
        );

        match window {
            Some(window) => {
                window.set_visible(false);
                let this = self.clone();
                glib::timeout_add_local_once(self.config.hide_delay, move || {
                    this.capture_and_select(settings, hold, on_report);
                });
            }
            None => self.capture_and_select(settings, hold, on_report),
        }

        true
    }

    fn capture_and_select(
        self: &Rc<Self>,
        settings: OutputSettings,
        hold: gio::ApplicationHoldGuard,
        on_report: ReportCallback,
    ) {
        let grabber = grabber_for(self.config.backend, DisplayServer::detect());
        let captured = match capture::capture(grabber.as_ref()) {
            Ok(captured) => captured,
            Err(e) => return self.finish(CaptureReport::Failed(e.into()), hold, on_report),
        };

        let overlay = match SelectionOverlay::new(&self.app, self.config.shortcuts.clone()) {
            Ok(overlay) => overlay,
            Err(e) => return self.finish(CaptureReport::Failed(e), hold, on_report),
        };

        let background = captured.to_pixbuf();
        let this = self.clone();
        overlay.run(Some(background), move |outcome| {
            let report = complete_selection(
                captured,
                outcome,
                &settings,
                &this.config,
                this.notifier.as_ref(),
            );
            this.finish(report, hold, on_report);
        });
    }

    fn finish(
        &self,
        report: CaptureReport,
        hold: gio::ApplicationHoldGuard,
        on_report: ReportCallback,
    ) {
        settle(&self.state, report, on_report);
        drop(hold);
    }
}

/// Release the capture slot, then hand the report on.
///
/// The slot is free before `on_report` runs, so the handler may start the
/// next capture.
fn settle(state: &RefCell<AppState>, report: CaptureReport, on_report: ReportCallback) {
    match &report {
        CaptureReport::Saved(path) => info!("Capture finished: {}", path.display()),
        CaptureReport::Cancelled => debug!("Capture cancelled"),
        CaptureReport::Failed(e) => error!("Capture failed: {}", e),
    }

    state.borrow_mut().finish_capture(report.saved_path());
    on_report(report);
}
