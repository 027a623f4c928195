//! Entity type and power-up catalog
//!
//! Fixed lists the game runtime understands. Entity types are kept as strings
//! in the model so unknown types from newer level files survive a round trip.

/// Entity types offered when authoring a new entity
pub const ENTITY_TYPES: &[&str] = &[
    "alien",
    "asteroid",
    "crate",
    "debris",
    "lurcher",
    "moonBottom",
    "moonTop",
    "nebula",
    "pirate",
    "player",
    "police",
    "tentacle",
    "turret",
];

/// Power-ups an entity can drop (empty string = none)
pub const POWER_UPS: &[&str] = &[
    "",
    "bonusShield",
    "fastEnemies",
    "fastRecharge",
    "killAll",
    "lurcher",
    "slowRecharge",
];

/// Types whose motion is stored as a velocity (`vX`/`vY`)
pub const MOVEMENT_TYPES: &[&str] = &[
    "alien",
    "asteroid",
    "background",
    "debris",
    "nebula",
    "pirate",
    "crate",
    "lurcher",
];

/// Types kept as raw markup and written back untouched
pub const IGNORABLE_TYPES: &[&str] = &["background", "player", "turret"];

/// Police store destination and speed directly (`dX`/`dY`/`s`)
pub const POLICE: &str = "police";

/// Only crates carry a lurcher reference
pub const CRATE: &str = "crate";

pub fn is_movement_type(kind: &str) -> bool {
    MOVEMENT_TYPES.contains(&kind)
}

pub fn is_ignorable(kind: &str) -> bool {
    IGNORABLE_TYPES.contains(&kind)
}

pub fn is_police(kind: &str) -> bool {
    kind == POLICE
}

/// Check if destination/speed mean anything for this type
pub fn has_motion(kind: &str) -> bool {
    is_movement_type(kind) || is_police(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_types() {
        assert!(is_movement_type("asteroid"));
        assert!(is_movement_type("crate"));
        assert!(!is_movement_type("police"));
        assert!(!is_movement_type("tentacle"));
    }

    #[test]
    fn test_has_motion() {
        assert!(has_motion("police"));
        assert!(has_motion("alien"));
        assert!(!has_motion("moonTop"));
    }

    #[test]
    fn test_ignorables() {
        for kind in ["background", "player", "turret"] {
            assert!(is_ignorable(kind));
        }
        assert!(!is_ignorable("alien"));
    }
}
