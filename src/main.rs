//! BeltRunner level editor
//!
//! Places the entities of a BeltRunner level on the playfield and edits
//! their motion, then writes the level back to its XML file.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod ui;

use macroquad::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::filter::EnvFilter;

use beltrunner_editor::config::EditorConfig;
use beltrunner_editor::editor::EditorSession;
use ui::{draw_editor, EditorAction, UiState};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("BeltRunner Editor v{}", VERSION),
        window_width: 1600,
        window_height: 900,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut config = EditorConfig::load_or_default();
    let mut session = EditorSession::new(config.default_speed);
    let mut ui_state = UiState::new();

    info!(version = VERSION, "BeltRunner editor started");

    loop {
        let action = draw_editor(&mut session, &mut ui_state, &config);
        handle_action(action, &mut session, &mut config);
        next_frame().await;
    }
}

fn handle_action(action: EditorAction, session: &mut EditorSession, config: &mut EditorConfig) {
    match action {
        EditorAction::None => {}
        EditorAction::New => {
            if confirm_discard(session) {
                session.new_level();
                session.set_status("Created new level", 3.0);
            }
        }
        EditorAction::Open => {
            if confirm_discard(session) {
                open_level(session, config);
            }
        }
        EditorAction::Save => match session.current_file.clone() {
            Some(path) => match session.save_to(&path) {
                Ok(()) => session.set_status(&format!("Saved {}", path.display()), 3.0),
                Err(e) => session.set_status(&format!("Save failed: {}", e), 5.0),
            },
            None => save_level_as(session, config),
        },
        EditorAction::SaveAs => save_level_as(session, config),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn file_dialog(config: &EditorConfig) -> rfd::FileDialog {
    let dialog = rfd::FileDialog::new().add_filter("XML Document", &["xml"]);
    match &config.last_directory {
        Some(dir) if dir.is_dir() => dialog.set_directory(dir),
        _ => dialog,
    }
}

/// Remember the directory a dialog ended in
#[cfg(not(target_arch = "wasm32"))]
fn remember_directory(config: &mut EditorConfig, path: &std::path::Path) {
    let Some(dir) = path.parent().map(|p| p.to_path_buf()) else {
        return;
    };
    if config.last_directory.as_ref() == Some(&dir) {
        return;
    }
    config.last_directory = Some(dir);
    if let Err(e) = config.save() {
        warn!(error = %e, "failed to save config");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn confirm_discard(session: &EditorSession) -> bool {
    if !session.dirty {
        return true;
    }
    let answer = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title("Unsaved changes")
        .set_description("The current level has unsaved changes. Discard them?")
        .set_buttons(rfd::MessageButtons::YesNo)
        .show();
    matches!(answer, rfd::MessageDialogResult::Yes)
}

#[cfg(not(target_arch = "wasm32"))]
fn open_level(session: &mut EditorSession, config: &mut EditorConfig) {
    let Some(path) = file_dialog(config).pick_file() else {
        return;
    };
    remember_directory(config, &path);

    match beltrunner_editor::level::load_level(&path, &config.motion_settings()) {
        Ok(level) => {
            let count = level.entities().len();
            session.open_level(level, path.clone());
            session.set_status(&format!("Loaded {} ({} entities)", path.display(), count), 3.0);
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to open level");
            session.set_status(&format!("Load failed: {}", e), 5.0);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_level_as(session: &mut EditorSession, config: &mut EditorConfig) {
    let suggested = session
        .current_file
        .as_deref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "level.xml".to_string());

    let Some(mut path) = file_dialog(config).set_file_name(suggested).save_file() else {
        return;
    };
    if path.extension().is_none() {
        path.set_extension("xml");
    }
    remember_directory(config, &path);

    match session.save_to(&path) {
        Ok(()) => session.set_status(&format!("Saved {}", path.display()), 3.0),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to save level");
            session.set_status(&format!("Save failed: {}", e), 5.0);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn confirm_discard(_session: &EditorSession) -> bool {
    true
}

#[cfg(target_arch = "wasm32")]
fn open_level(session: &mut EditorSession, _config: &mut EditorConfig) {
    session.set_status("Open not available in browser", 3.0);
}

#[cfg(target_arch = "wasm32")]
fn save_level_as(session: &mut EditorSession, _config: &mut EditorConfig) {
    session.set_status("Save As not available in browser", 3.0);
}
