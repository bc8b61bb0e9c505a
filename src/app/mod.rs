// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the image rotator, the marker navigation controller
//! and the tracking session together, and translates messages into calls on
//! them. Every failure ends up as status text; nothing here aborts the app.

mod message;
mod subscription;
pub mod tracker;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::accept_drop;

use crate::config::{self, Config};
use crate::directory_scanner::is_allowed_extension;
use crate::error::Error;
use crate::image_rotator::ImageRotator;
use crate::marker_navigation::{ActivationBand, NavigationController};
use crate::ui::design_tokens::sizing;
use crate::ui::surface::{surface_size_for_window, ViewerSurface};
use iced::{window, Element, Size, Subscription, Task};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracker::TrackerSource;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 =
    600.0 + sizing::TOOLBAR_HEIGHT + sizing::STATUS_BAR_HEIGHT;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

const APP_NAME: &str = "TouchlessViewer";
pub(crate) const NO_IMAGES_LOADED: &str = "No images loaded";

/// Root application state.
pub struct App {
    rotator: ImageRotator<ViewerSurface>,
    controller: NavigationController,
    tracker: TrackerSource,
    overlay_radius: f32,
    overlay_rgb: [u8; 3],
    poll_interval: Duration,
    /// Outcome of the last load or drop, shown in the status bar.
    status: Option<String>,
    /// Why marker navigation is not attached, if it is not.
    tracking_status: Option<String>,
    picking_folder: bool,
    pending_drops: Vec<PathBuf>,
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Starts the viewer event loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application from command-line flags and `settings.toml`.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        let mut app = Self::from_config(&config, &flags);

        if let Some(warning) = config_warning {
            log::warn!("{warning}");
            app.status = Some(warning);
        }

        if let Some(path) = flags.file_path.as_deref() {
            app.open_initial_file(Path::new(path));
        }

        update::sync_binding(&mut app);
        (app, Task::none())
    }

    fn from_config(config: &Config, flags: &Flags) -> Self {
        let band = flags
            .activation_band
            .map(ActivationBand::new)
            .unwrap_or_else(|| config.navigation.activation_band());
        let surface_size =
            surface_size_for_window(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));

        let mut status = None;
        let tracker = if flags.pointer_marker || config.tracking.pointer_marker() {
            log::info!("Emulating the marker with the mouse pointer");
            TrackerSource::pointer(surface_size)
        } else {
            match flags
                .tracker_command
                .as_ref()
                .or(config.tracking.command.as_ref())
            {
                Some(command) => TrackerSource::spawn(command).unwrap_or_else(|err| {
                    log::warn!("{err}");
                    status = Some(err.status_text());
                    TrackerSource::disabled()
                }),
                None => TrackerSource::disabled(),
            }
        };

        Self {
            rotator: ImageRotator::new(ViewerSurface::new(surface_size)),
            controller: NavigationController::new(band, config.tracking.queue_capacity()),
            tracker,
            overlay_radius: config.overlay.cursor_radius(),
            overlay_rgb: config.overlay.cursor_rgb(),
            poll_interval: Duration::from_millis(config.tracking.poll_interval_ms()),
            status,
            tracking_status: None,
            picking_folder: false,
            pending_drops: Vec::new(),
        }
    }

    /// Loads the directory of `path` and selects it.
    fn open_initial_file(&mut self, path: &Path) {
        if !path.is_file() {
            self.status = Some(Error::InvalidPath(path.to_path_buf()).status_text());
            return;
        }
        if !is_allowed_extension(path) {
            self.status = Some(
                Error::DropRejected(format!("Unsupported file type: {}", path.display()))
                    .status_text(),
            );
            return;
        }
        let Some(directory) = path.parent() else {
            self.status = Some(Error::InvalidPath(path.to_path_buf()).status_text());
            return;
        };
        let directory = directory.to_path_buf();
        let result = self.rotator.load_and_select(&directory, path);
        update::report_load(self, &directory, result);
    }

    pub fn title(&self) -> String {
        if self.picking_folder {
            return format!("{APP_NAME} - Loading...");
        }
        let displayed = self
            .rotator
            .surface()
            .image()
            .and(self.rotator.current_path())
            .and_then(Path::file_name);
        match displayed {
            Some(name) => format!("{APP_NAME} - {}", name.to_string_lossy()),
            None => format!("{APP_NAME} - {NO_IMAGES_LOADED}"),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toolbar(message) => update::handle_toolbar(self, message),
            Message::Navigate(command) => {
                command.apply(&mut self.rotator);
                Task::none()
            }
            Message::FileDropped(path) => update::handle_file_dropped(self, path),
            Message::DropsSettled => update::handle_drops_settled(self),
            Message::FolderPicked(directory) => update::handle_folder_picked(self, directory),
            Message::Tick(_) => update::handle_tick(self),
            Message::WindowResized(size) => update::handle_window_resized(self, size),
            Message::PointerMoved(position) => update::handle_pointer_moved(self, position),
            Message::PointerLeft => update::handle_pointer_left(self),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.poll_interval),
        ])
    }

    pub fn rotator(&self) -> &ImageRotator<ViewerSurface> {
        &self.rotator
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// Current status bar message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().or(self.tracking_status.as_deref())
    }
}
