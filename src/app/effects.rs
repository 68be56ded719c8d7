use crate::app::{App, Message, Model, ToastLevel, update};
use crate::watcher::{DEFAULT_DEBOUNCE, EdgeFileWatcher};

impl App {
    pub(super) fn make_file_watcher(model: &Model) -> anyhow::Result<EdgeFileWatcher> {
        let path = model
            .file_path
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("no edge file"))?;
        Ok(EdgeFileWatcher::new(path, DEFAULT_DEBOUNCE)?)
    }

    pub(super) fn handle_message_side_effects(
        model: &mut Model,
        file_watcher: &mut Option<EdgeFileWatcher>,
        msg: &Message,
    ) {
        match msg {
            Message::ToggleWatch => {
                if model.watch_enabled {
                    match Self::make_file_watcher(model) {
                        Ok(watcher) => {
                            *file_watcher = Some(watcher);
                            model.show_toast(ToastLevel::Info, "Watching edge file");
                        }
                        Err(err) => {
                            model.watch_enabled = false;
                            *file_watcher = None;
                            model.show_toast(
                                ToastLevel::Warning,
                                format!("Watch unavailable: {err}"),
                            );
                            tracing::warn!("watcher failed: {err}");
                        }
                    }
                } else {
                    *file_watcher = None;
                    model.show_toast(ToastLevel::Info, "Watch disabled");
                }
            }
            Message::ForceReload | Message::FileChanged => {
                Self::reload_edges(model, matches!(msg, Message::ForceReload));
            }
            Message::Export => Self::export_drawing(model),
            _ => {}
        }
    }

    /// Reload the edge file, redrawing when the old list was on screen.
    fn reload_edges(model: &mut Model, announce: bool) {
        match model.read_edge_file() {
            Ok(Some(text)) => {
                let was_drawn = model.drawn;
                *model = update(std::mem::take(model), Message::EdgesChanged(text));
                if was_drawn {
                    *model = update(std::mem::take(model), Message::Draw);
                }
                if announce {
                    model.show_toast(ToastLevel::Info, "Reloaded");
                }
            }
            Ok(None) => {
                if announce {
                    model.show_toast(ToastLevel::Info, "Edge file unchanged");
                }
            }
            Err(err) => {
                model.show_toast(ToastLevel::Error, format!("Reload failed: {err}"));
                tracing::warn!("reload failed: {err:#}");
            }
        }
    }

    fn export_drawing(model: &mut Model) {
        match crate::export::write_svg(&model.export_path, &model.grid, &model.dot_color, &model.edges)
        {
            Ok(()) => {
                let note = if model.drawn { "" } else { " (dots only)" };
                model.show_toast(
                    ToastLevel::Info,
                    format!("Saved {}{note}", model.export_path.display()),
                );
            }
            Err(err) => {
                model.show_toast(ToastLevel::Error, format!("Export failed: {err}"));
                tracing::warn!("export failed: {err:#}");
            }
        }
    }
}
