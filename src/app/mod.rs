// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the comparison widget.
//!
//! The `App` struct wires together the reveal engine, localization, settings
//! and interaction diagnostics. Engine effects are turned into logs and
//! diagnostics events here, next to the update loop.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::diagnostics::InteractionLog;
use crate::error::Error;
use crate::i18n::I18n;
use crate::media::{self, ImageData, LayerSide};
use crate::reveal;
use crate::ui::widgets::compare_canvas::HandleStyle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Live comparison, present once both layers decoded.
    compare: Option<reveal::State<ImageData>>,
    /// Whichever single layer loaded when the comparison could not attach.
    fallback: Option<ImageData>,
    handle_style: HandleStyle,
    show_labels: bool,
    loading: bool,
    /// i18n keys of notices shown under the comparison.
    notices: Vec<String>,
    sources: Option<(PathBuf, PathBuf)>,
    diagnostics: InteractionLog,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("attached", &self.compare.is_some())
            .field("loading", &self.loading)
            .field("notices", &self.notices)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 300;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close goes through `Message::WindowCloseRequested` so the session
        // summary is logged first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            compare: None,
            fallback: None,
            handle_style: HandleStyle::default(),
            show_labels: config::DEFAULT_SHOW_LABELS,
            loading: false,
            notices: Vec::new(),
            sources: None,
            diagnostics: InteractionLog::default(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off asynchronous decoding of
    /// both layers.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            handle_style: config.handle_style(),
            show_labels: config.show_labels(),
            loading: true,
            sources: Some((flags.before.clone(), flags.after.clone())),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notices.push(key);
        }

        tracing::info!(
            before = %flags.before.display(),
            after = %flags.after.display(),
            locale = %app.i18n.current_locale(),
            "loading comparison layers"
        );

        let task = Task::perform(media::load_pair(flags.before, flags.after), |(before, after)| {
            Message::LayersLoaded { before, after }
        });

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let Some((before, after)) = &self.sources else {
            return app_name;
        };

        let name = |path: &PathBuf| {
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        };
        format!("{} | {} - {app_name}", name(before), name(after))
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let frame_sub = self
            .compare
            .as_ref()
            .map_or_else(Subscription::none, |compare| {
                compare.subscription().map(Message::Compare)
            });

        Subscription::batch([event_sub, frame_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Compare(msg) => {
                if let Some(compare) = self.compare.as_mut() {
                    let effect = compare.handle(msg);
                    if let Some(kind) = self.diagnostics.record(effect) {
                        tracing::debug!(?kind, "comparison interaction");
                    }
                }
                Task::none()
            }
            Message::LayersLoaded { before, after } => {
                self.on_layers_loaded(before, after);
                Task::none()
            }
            Message::WindowCloseRequested(_) => {
                let summary = self.diagnostics.summary();
                tracing::info!(
                    gestures = summary.gestures,
                    cancelled = summary.cancelled,
                    commits = summary.commits,
                    saturated = summary.saturated,
                    "session finished"
                );
                iced::exit()
            }
        }
    }

    fn on_layers_loaded(
        &mut self,
        before: Result<ImageData, Error>,
        after: Result<ImageData, Error>,
    ) {
        self.loading = false;
        let before = self.accept_layer(LayerSide::Before, before);
        let after = self.accept_layer(LayerSide::After, after);

        match (before, after) {
            (Some(before), Some(after)) => {
                self.compare = reveal::State::attach(Some(before), Some(after));
            }
            (before, after) => {
                self.fallback = before.or(after);
                self.notices.push("notice-static-fallback".to_string());
            }
        }
    }

    fn accept_layer(&mut self, side: LayerSide, result: Result<ImageData, Error>) -> Option<ImageData> {
        match result {
            Ok(layer) => Some(layer),
            Err(err) => {
                tracing::warn!(?side, error = %err, "layer failed to load");
                let key = err.i18n_key().to_string();
                if !self.notices.contains(&key) {
                    self.notices.push(key);
                }
                None
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            compare: self.compare.as_ref(),
            fallback: self.fallback.as_ref(),
            handle_style: self.handle_style,
            show_labels: self.show_labels,
            loading: self.loading,
            notices: &self.notices,
        })
    }
}
