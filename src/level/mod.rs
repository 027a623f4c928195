//! Level model
//!
//! A level is a list of graphics, the entities that use them and any entity
//! markup the editor does not model. Entity motion is held as destination +
//! speed; the velocity form only exists in the level file and is regenerated
//! on every save.
//!
//! Entities are always ordered by `(delay, type)`, absent delay counting as 0.

mod graphic;
mod io;
mod xml;

pub use graphic::*;
pub use io::*;
pub use xml::*;

use std::cmp::Ordering;
use std::path::PathBuf;
use thiserror::Error;

use crate::catalog;
use crate::motion::{
    destination_from_velocity, speed_from_velocity, velocity_from_points, MotionError, Playfield,
    Point, Size, Vector, DEFAULT_MAX_STEPS,
};

/// Name given to levels that have never been named
pub const DEFAULT_LEVEL_NAME: &str = "New Level";

/// Playfield and step budget used when turning velocities into destinations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSettings {
    pub playfield: Playfield,
    pub max_steps: u32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            playfield: Playfield::STANDARD,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Planned movement: where the entity heads and how fast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub destination: Point,
    pub speed: f64,
}

impl Motion {
    pub fn new(destination: Point, speed: f64) -> Self {
        Self { destination, speed }
    }

    /// Motion that goes nowhere
    pub fn stationary(position: Point) -> Self {
        Self { destination: position, speed: 0.0 }
    }

    /// Recover destination and speed from a stored velocity
    ///
    /// `size` is the entity's graphic size.
    pub fn from_velocity(
        position: Point,
        size: Size,
        velocity: Vector,
        settings: &MotionSettings,
    ) -> Result<Self, MotionError> {
        let destination = destination_from_velocity(
            position,
            size,
            velocity,
            &settings.playfield,
            settings.max_steps,
        )?;
        let speed = speed_from_velocity(position, destination, velocity);
        Ok(Self { destination, speed })
    }
}

/// One placeable game object
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Only authored for entities other entities refer to (lurchers)
    pub id: Option<String>,
    /// Entity type, see [`catalog::ENTITY_TYPES`]
    pub kind: String,
    /// Id of a graphic in the owning level
    pub graphic: String,
    pub position: Point,
    pub motion: Option<Motion>,
    /// Seconds before the entity spawns
    pub delay: Option<i32>,
    pub power_up: Option<String>,
    /// Lurcher attached to a crate
    pub lurcher_id: Option<String>,
}

impl Entity {
    pub fn new(kind: impl Into<String>, graphic: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: kind.into(),
            graphic: graphic.into(),
            position: Point::ORIGIN,
            motion: None,
            delay: None,
            power_up: None,
            lurcher_id: None,
        }
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_motion(mut self, destination: Point, speed: f64) -> Self {
        self.motion = Some(Motion::new(destination, speed));
        self
    }

    pub fn with_delay(mut self, delay: i32) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn destination(&self) -> Option<Point> {
        self.motion.map(|m| m.destination)
    }

    pub fn speed(&self) -> Option<f64> {
        self.motion.map(|m| m.speed)
    }

    pub fn set_motion(&mut self, destination: Point, speed: f64) {
        self.motion = Some(Motion::new(destination, speed));
    }

    pub fn clear_motion(&mut self) {
        self.motion = None;
    }

    pub fn is_police(&self) -> bool {
        catalog::is_police(&self.kind)
    }

    /// Velocity written to the level file, `None` for police or no motion
    pub fn velocity(&self) -> Option<Vector> {
        if self.is_police() {
            return None;
        }
        self.motion
            .map(|m| velocity_from_points(self.position, m.destination, m.speed))
    }

    /// Delay with absent treated as 0
    pub fn effective_delay(&self) -> i32 {
        self.delay.unwrap_or(0)
    }

    /// Ordering used for the entity list: delay, then type
    pub fn order(&self, other: &Entity) -> Ordering {
        self.effective_delay()
            .cmp(&other.effective_delay())
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

/// Rejected edit to a level
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("graphic {0:?} does not exist")]
    UnknownGraphic(String),
    #[error("graphic id {0:?} is already used")]
    DuplicateGraphic(String),
    #[error("no entity at index {0}")]
    NoSuchEntity(usize),
}

/// A level file in memory
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Where the level was last loaded from or saved to
    pub file_name: Option<PathBuf>,
    pub name: String,
    /// In authoring order
    pub graphics: Vec<Graphic>,
    /// Raw markup of entities the editor does not model
    pub ignorables: Vec<String>,
    entities: Vec<Entity>,
}

impl Default for Level {
    fn default() -> Self {
        Self::new()
    }
}

impl Level {
    pub fn new() -> Self {
        Self {
            file_name: None,
            name: DEFAULT_LEVEL_NAME.to_string(),
            graphics: Vec::new(),
            ignorables: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Entities in `(delay, type)` order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn graphic(&self, id: &str) -> Option<&Graphic> {
        self.graphics.iter().find(|g| g.id() == id)
    }

    /// Size of a graphic, `None` when missing or sizeless
    pub fn graphic_size(&self, id: &str) -> Option<Size> {
        self.graphic(id).and_then(Graphic::size)
    }

    pub fn graphic_ids(&self) -> Vec<&str> {
        self.graphics.iter().map(Graphic::id).collect()
    }

    pub fn add_graphic(&mut self, graphic: Graphic) -> Result<(), EditError> {
        if self.graphic(graphic.id()).is_some() {
            return Err(EditError::DuplicateGraphic(graphic.id().to_string()));
        }
        self.graphics.push(graphic);
        Ok(())
    }

    /// Insert an entity in order, returning its index
    pub fn add_entity(&mut self, entity: Entity) -> Result<usize, EditError> {
        if self.graphic_size(&entity.graphic).is_none() {
            return Err(EditError::UnknownGraphic(entity.graphic));
        }
        Ok(self.insert_sorted(entity))
    }

    /// Replace the entity at `index`, returning its new index
    pub fn replace_entity(&mut self, index: usize, entity: Entity) -> Result<usize, EditError> {
        if index >= self.entities.len() {
            return Err(EditError::NoSuchEntity(index));
        }
        if self.graphic_size(&entity.graphic).is_none() {
            return Err(EditError::UnknownGraphic(entity.graphic));
        }
        self.entities.remove(index);
        Ok(self.insert_sorted(entity))
    }

    pub fn remove_entity(&mut self, index: usize) -> Result<Entity, EditError> {
        if index >= self.entities.len() {
            return Err(EditError::NoSuchEntity(index));
        }
        Ok(self.entities.remove(index))
    }

    /// Restore `(delay, type)` order; ties keep their current order
    pub fn sort_entities(&mut self) {
        self.entities.sort_by(Entity::order);
    }

    fn insert_sorted(&mut self, entity: Entity) -> usize {
        // After any equal keys, so equal entities stay in insertion order
        let index = self
            .entities
            .partition_point(|e| e.order(&entity) != Ordering::Greater);
        self.entities.insert(index, entity);
        index
    }

    /// Append without checks; callers must call [`Level::sort_entities`]
    pub(crate) fn push_entity_unsorted(&mut self, entity: Entity) {
        self.entities.push(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn level_with_graphic() -> Level {
        let mut level = Level::new();
        level
            .add_graphic(Graphic::Static(ImageGraphic {
                id: "rock".to_string(),
                path: "rock.png".to_string(),
                width: 32,
                height: 32,
            }))
            .unwrap();
        level
    }

    fn is_ordered(level: &Level) -> bool {
        level
            .entities()
            .windows(2)
            .all(|w| w[0].order(&w[1]) != Ordering::Greater)
    }

    #[test]
    fn test_new_level_defaults() {
        let level = Level::new();
        assert_eq!(level.name, "New Level");
        assert!(level.file_name.is_none());
        assert!(level.entities().is_empty());
    }

    #[test]
    fn test_add_entity_keeps_order() {
        let mut level = level_with_graphic();
        level.add_entity(Entity::new("pirate", "rock").with_delay(5)).unwrap();
        level.add_entity(Entity::new("asteroid", "rock").with_delay(5)).unwrap();
        let idx = level.add_entity(Entity::new("debris", "rock")).unwrap();

        assert_eq!(idx, 0);
        let kinds: Vec<&str> = level.entities().iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["debris", "asteroid", "pirate"]);
    }

    #[test]
    fn test_absent_delay_sorts_as_zero() {
        let mut level = level_with_graphic();
        level.add_entity(Entity::new("alien", "rock").with_delay(0)).unwrap();
        level.add_entity(Entity::new("crate", "rock")).unwrap();
        level.add_entity(Entity::new("asteroid", "rock").with_delay(-1)).unwrap();

        let kinds: Vec<&str> = level.entities().iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["asteroid", "alien", "crate"]);
    }

    #[test]
    fn test_add_entity_requires_graphic() {
        let mut level = level_with_graphic();
        let err = level.add_entity(Entity::new("alien", "missing")).unwrap_err();
        assert_eq!(err, EditError::UnknownGraphic("missing".to_string()));
    }

    #[test]
    fn test_duplicate_graphic_rejected() {
        let mut level = level_with_graphic();
        let dup = Graphic::Scrolling(ImageGraphic { id: "rock".to_string(), ..Default::default() });
        assert!(matches!(level.add_graphic(dup), Err(EditError::DuplicateGraphic(_))));
        assert_eq!(level.graphics.len(), 1);
    }

    #[test]
    fn test_replace_entity_moves_it() {
        let mut level = level_with_graphic();
        level.add_entity(Entity::new("alien", "rock").with_delay(1)).unwrap();
        level.add_entity(Entity::new("pirate", "rock").with_delay(2)).unwrap();

        let edited = Entity::new("alien", "rock").with_delay(3);
        let idx = level.replace_entity(0, edited).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(level.entities()[0].kind, "pirate");
    }

    #[test]
    fn test_remove_entity_out_of_range() {
        let mut level = level_with_graphic();
        assert_eq!(level.remove_entity(0), Err(EditError::NoSuchEntity(0)));
    }

    #[test]
    fn test_police_has_no_velocity() {
        let police = Entity::new("police", "rock").with_motion(Point::new(500.0, 0.0), 10.0);
        assert_eq!(police.velocity(), None);
    }

    #[test]
    fn test_entity_velocity() {
        let alien = Entity::new("alien", "rock")
            .with_position(Point::new(0.0, 0.0))
            .with_motion(Point::new(0.0, 100.0), 25.0);
        assert_eq!(alien.velocity(), Some(Vector::new(0.0, 25.0)));
    }

    #[test]
    fn test_motion_from_velocity() {
        let motion = Motion::from_velocity(
            Point::new(100.0, 100.0),
            Size::new(20.0, 20.0),
            Vector::new(10.0, 0.0),
            &MotionSettings::default(),
        )
        .unwrap();
        assert_eq!(motion.destination, Point::new(1350.0, 100.0));
        assert!((motion.speed - 10.0).abs() < 1e-9);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add { kind: usize, delay: Option<i32> },
        Edit { index: usize, kind: usize, delay: Option<i32> },
        Delete { index: usize },
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        let delay = prop::option::of(-3i32..6);
        prop_oneof![
            (0usize..catalog::ENTITY_TYPES.len(), delay.clone())
                .prop_map(|(kind, delay)| Op::Add { kind, delay }),
            (0usize..16, 0usize..catalog::ENTITY_TYPES.len(), delay)
                .prop_map(|(index, kind, delay)| Op::Edit { index, kind, delay }),
            (0usize..16).prop_map(|index| Op::Delete { index }),
        ]
    }

    proptest! {
        #[test]
        fn prop_entities_stay_ordered(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut level = level_with_graphic();
            for op in ops {
                match op {
                    Op::Add { kind, delay } => {
                        let mut e = Entity::new(catalog::ENTITY_TYPES[kind], "rock");
                        e.delay = delay;
                        level.add_entity(e).unwrap();
                    }
                    Op::Edit { index, kind, delay } => {
                        let mut e = Entity::new(catalog::ENTITY_TYPES[kind], "rock");
                        e.delay = delay;
                        let _ = level.replace_entity(index, e);
                    }
                    Op::Delete { index } => {
                        let _ = level.remove_entity(index);
                    }
                }
                prop_assert!(is_ordered(&level));
            }
        }
    }
}
