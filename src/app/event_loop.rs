use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, ToastLevel, update};
use crate::watcher::EdgeFileWatcher;

/// Poll interval while idle; short enough for toasts and file changes.
const IDLE_POLL: Duration = Duration::from_millis(250);

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge file cannot be read, the terminal cannot
    /// be initialised, or terminal I/O fails while running.
    pub fn run(&mut self) -> Result<()> {
        let edge_text = crate::app::read_edges(&self.file_path)?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - dotgrid requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = self.initial_model(edge_text, (size.width, size.height));
        if self.draw_on_start {
            model = update(model, Message::Draw);
        }

        let result = Self::event_loop(&mut terminal, &mut model);
        ratatui::restore();
        result
    }

    pub(super) fn initial_model(&self, edge_text: String, terminal_size: (u16, u16)) -> Model {
        let mut model =
            Model::new(self.grid, edge_text, terminal_size).with_file_path(self.file_path.clone());
        model.watch_enabled = self.watch_enabled;
        if let Some(color) = &self.dot_color {
            model.dot_color.clone_from(color);
        }
        if let Some(path) = &self.export_path {
            model.export_path.clone_from(path);
        }
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        model
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut file_watcher = if model.watch_enabled {
            match Self::make_file_watcher(model) {
                Ok(watcher) => Some(watcher),
                Err(err) => {
                    model.watch_enabled = false;
                    model.show_toast(ToastLevel::Warning, format!("Watch unavailable: {err}"));
                    tracing::warn!("watcher failed: {err}");
                    None
                }
            }
        } else {
            None
        };
        let mut needs_render = true;
        let mut frame_idx: u64 = 0;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if model.watch_enabled
                && file_watcher
                    .as_mut()
                    .is_some_and(EdgeFileWatcher::poll_changed)
            {
                Self::dispatch(model, &mut file_watcher, Message::FileChanged);
                needs_render = true;
            }

            let poll = if needs_render {
                Duration::ZERO
            } else {
                IDLE_POLL
            };
            if event::poll(poll)? {
                // Coalesce bursts (key repeat, paste) into one render.
                loop {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        Self::dispatch(model, &mut file_watcher, msg);
                        needs_render = true;
                    }
                    if !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }

            if needs_render {
                frame_idx += 1;
                let draw_start = Instant::now();
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                tracing::trace!(
                    frame = frame_idx,
                    draw_ms = draw_start.elapsed().as_secs_f64() * 1000.0,
                    "frame drawn"
                );
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(model: &mut Model, file_watcher: &mut Option<EdgeFileWatcher>, msg: Message) {
        tracing::debug!(?msg, "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, file_watcher, &side_msg);
    }
}
