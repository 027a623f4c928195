//! Editor session state
//!
//! One [`EditorSession`] owns the open level and the entity being edited.
//! The UI holds it and passes `&mut` to whatever needs to change it.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

use crate::catalog;
use crate::level::{save_level, EditError, Entity, Level, LevelError};
use crate::motion::Point;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("no entity is being edited")]
    NotEditing,
    #[error("speed must be a positive number, got {0}")]
    InvalidSpeed(f64),
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// What the next point pick sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    Start,
    Destination,
}

/// Working copy of an entity; the level only changes on commit
#[derive(Debug, Clone, PartialEq)]
pub struct EntityEditor {
    /// Index in the level, `None` for a new entity
    pub index: Option<usize>,
    pub entity: Entity,
    /// Speed entered for the next destination pick
    pub speed: Option<f64>,
    next_pick: PickTarget,
}

impl EntityEditor {
    fn new(index: Option<usize>, entity: Entity) -> Self {
        let next_pick = if entity.motion.is_some() {
            PickTarget::Start
        } else if index.is_some() && catalog::has_motion(&entity.kind) {
            PickTarget::Destination
        } else {
            PickTarget::Start
        };
        Self {
            index,
            speed: entity.speed().filter(|s| *s > 0.0),
            entity,
            next_pick,
        }
    }

    pub fn next_pick(&self) -> PickTarget {
        self.next_pick
    }

    pub fn is_new(&self) -> bool {
        self.index.is_none()
    }
}

/// Level being edited plus editor-wide state
#[derive(Debug)]
pub struct EditorSession {
    pub level: Level,
    pub editing: Option<EntityEditor>,
    pub current_file: Option<PathBuf>,
    pub dirty: bool,
    /// Speed used when a destination is picked before one is entered
    pub default_speed: f64,
    status: Option<(String, Instant)>,
}

impl EditorSession {
    pub fn new(default_speed: f64) -> Self {
        Self {
            level: Level::new(),
            editing: None,
            current_file: None,
            dirty: false,
            default_speed,
            status: None,
        }
    }

    /// Discard everything and start an empty level
    pub fn new_level(&mut self) {
        self.level = Level::new();
        self.editing = None;
        self.current_file = None;
        self.dirty = false;
        info!("new level");
    }

    /// Replace the session's level with one read from `path`
    pub fn open_level(&mut self, level: Level, path: PathBuf) {
        self.level = level;
        self.level.file_name = Some(path.clone());
        self.current_file = Some(path);
        self.editing = None;
        self.dirty = false;
    }

    /// Record a successful save to `path`
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.level.file_name = Some(path.clone());
        self.current_file = Some(path);
        self.dirty = false;
    }

    /// Write the level to `path` and mark it saved
    pub fn save_to(&mut self, path: &Path) -> Result<(), LevelError> {
        save_level(&mut self.level, path)?;
        self.mark_saved(path.to_path_buf());
        Ok(())
    }

    /// Start authoring a new entity; replaces any edit in progress
    pub fn begin_new_entity(&mut self, kind: &str, graphic: &str) {
        debug!(kind, graphic, "begin new entity");
        self.editing = Some(EntityEditor::new(None, Entity::new(kind, graphic)));
    }

    /// Start editing the entity at `index`
    pub fn begin_edit(&mut self, index: usize) -> Result<(), SessionError> {
        let entity = self
            .level
            .entity(index)
            .cloned()
            .ok_or(EditError::NoSuchEntity(index))?;
        self.editing = Some(EntityEditor::new(Some(index), entity));
        Ok(())
    }

    pub fn editor(&self) -> Option<&EntityEditor> {
        self.editing.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut EntityEditor> {
        self.editing.as_mut()
    }

    /// Write the working copy into the level, returning its index
    ///
    /// On failure the edit stays open so it can be fixed.
    pub fn commit_edit(&mut self) -> Result<usize, SessionError> {
        let editor = self.editing.as_ref().ok_or(SessionError::NotEditing)?;
        let mut entity = editor.entity.clone();
        if !catalog::has_motion(&entity.kind) {
            entity.clear_motion();
        }
        if entity.power_up.as_deref().is_some_and(|p| p.trim().is_empty()) {
            entity.power_up = None;
        }

        let index = match editor.index {
            Some(index) => self.level.replace_entity(index, entity)?,
            None => self.level.add_entity(entity)?,
        };
        self.editing = None;
        self.dirty = true;
        debug!(index, "committed entity");
        Ok(index)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn delete_entity(&mut self, index: usize) -> Result<Entity, SessionError> {
        let removed = self.level.remove_entity(index)?;
        match self.editing.as_ref().and_then(|e| e.index) {
            Some(i) if i == index => self.editing = None,
            Some(i) if i > index => {
                if let Some(editor) = &mut self.editing {
                    editor.index = Some(i - 1);
                }
            }
            _ => {}
        }
        self.dirty = true;
        Ok(removed)
    }

    /// Apply a picked model point to the entity being edited
    ///
    /// Alternates between placing the start (which drops any motion) and
    /// placing the destination. Types without motion only ever move their start.
    pub fn pick_point(&mut self, point: Point) -> Result<PickTarget, SessionError> {
        let default_speed = self.default_speed;
        let editor = self.editing.as_mut().ok_or(SessionError::NotEditing)?;

        if !catalog::has_motion(&editor.entity.kind) {
            editor.entity.position = point;
            return Ok(PickTarget::Start);
        }

        let placed = editor.next_pick;
        match placed {
            PickTarget::Start => {
                editor.entity.position = point;
                editor.entity.clear_motion();
                editor.next_pick = PickTarget::Destination;
            }
            PickTarget::Destination => {
                let speed = editor.speed.unwrap_or(default_speed);
                editor.entity.set_motion(point, speed);
                editor.next_pick = PickTarget::Start;
            }
        }
        Ok(placed)
    }

    /// Drop the motion; the next pick places a destination
    pub fn clear_destination(&mut self) -> Result<(), SessionError> {
        let editor = self.editing.as_mut().ok_or(SessionError::NotEditing)?;
        editor.entity.clear_motion();
        editor.next_pick = PickTarget::Destination;
        Ok(())
    }

    /// Set the speed of the entity being edited
    pub fn set_speed(&mut self, speed: f64) -> Result<(), SessionError> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(SessionError::InvalidSpeed(speed));
        }
        let editor = self.editing.as_mut().ok_or(SessionError::NotEditing)?;
        editor.speed = Some(speed);
        if let Some(motion) = &mut editor.entity.motion {
            motion.speed = speed;
        }
        Ok(())
    }

    /// Show a message in the status bar for `duration_secs`
    pub fn set_status(&mut self, message: &str, duration_secs: f64) {
        let duration = Duration::try_from_secs_f64(duration_secs).unwrap_or(Duration::ZERO);
        self.status = Some((message.to_string(), Instant::now() + duration));
    }

    /// Current status message if not expired
    pub fn status(&self) -> Option<&str> {
        match &self.status {
            Some((msg, expiry)) if Instant::now() < *expiry => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Window title text
    pub fn title(&self) -> String {
        let name = self
            .current_file
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.level.name.clone());
        if self.dirty {
            format!("{}*", name)
        } else {
            name
        }
    }
}
