//! Graphic definitions
//!
//! A level lists every visual asset once; entities refer to them by id.
//! Only the size matters to the editor's math, the rest is carried so the
//! level file round-trips.

use crate::motion::Size;

/// Direction an animation sequence loops in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopDirection {
    #[default]
    Forward,
    Bounce,
    Unknown,
}

impl LoopDirection {
    pub fn from_attr(value: &str) -> Self {
        match value {
            "forward" => LoopDirection::Forward,
            "bounce" => LoopDirection::Bounce,
            _ => LoopDirection::Unknown,
        }
    }

    /// Attribute text; the runtime treats anything but forward as bounce
    pub fn as_attr(&self) -> &'static str {
        match self {
            LoopDirection::Forward => "forward",
            LoopDirection::Bounce | LoopDirection::Unknown => "bounce",
        }
    }
}

/// A named run of frames within an animated sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    pub name: String,
    pub start: i16,
    pub count: i16,
    pub rotation: i16,
    /// Duration of one pass in milliseconds
    pub time_ms: i32,
    pub loop_count: u8,
    pub direction: LoopDirection,
}

/// Single image, drawn static or scrolling
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageGraphic {
    pub id: String,
    pub path: String,
    pub width: i16,
    pub height: i16,
}

/// Sprite sheet with frame sequences
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimatedGraphic {
    pub id: String,
    pub path: String,
    pub width: i16,
    pub height: i16,
    pub num_frames: i16,
    pub sheet_content_width: i16,
    pub sheet_content_height: i16,
    pub sequences: Vec<Sequence>,
}

/// Group of graphics sized by its first member
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetGraphic {
    pub id: String,
    pub children: Vec<Graphic>,
}

/// Graphic variant, tagged by the `type` attribute in the level file
#[derive(Debug, Clone, PartialEq)]
pub enum Graphic {
    Static(ImageGraphic),
    Scrolling(ImageGraphic),
    Animated(AnimatedGraphic),
    Set(SetGraphic),
}

impl Graphic {
    pub fn id(&self) -> &str {
        match self {
            Graphic::Static(g) | Graphic::Scrolling(g) => &g.id,
            Graphic::Animated(g) => &g.id,
            Graphic::Set(g) => &g.id,
        }
    }

    /// The `type` attribute value
    pub fn type_tag(&self) -> &'static str {
        match self {
            Graphic::Static(_) => "static",
            Graphic::Scrolling(_) => "scrolling",
            Graphic::Animated(_) => "animated",
            Graphic::Set(_) => "set",
        }
    }

    /// Drawn size, or `None` for an empty set
    pub fn size(&self) -> Option<Size> {
        match self {
            Graphic::Static(g) | Graphic::Scrolling(g) => {
                Some(Size::new(g.width as f64, g.height as f64))
            }
            Graphic::Animated(g) => Some(Size::new(g.width as f64, g.height as f64)),
            Graphic::Set(g) => g.children.first().and_then(Graphic::size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, width: i16, height: i16) -> ImageGraphic {
        ImageGraphic { id: id.to_string(), path: format!("{}.png", id), width, height }
    }

    #[test]
    fn test_static_size() {
        let g = Graphic::Static(image("rock", 64, 48));
        assert_eq!(g.size(), Some(Size::new(64.0, 48.0)));
        assert_eq!(g.id(), "rock");
        assert_eq!(g.type_tag(), "static");
    }

    #[test]
    fn test_set_uses_first_child_size() {
        let set = Graphic::Set(SetGraphic {
            id: "moons".to_string(),
            children: vec![
                Graphic::Scrolling(image("a", 100, 20)),
                Graphic::Static(image("b", 5, 5)),
            ],
        });
        assert_eq!(set.size(), Some(Size::new(100.0, 20.0)));
    }

    #[test]
    fn test_nested_set_size() {
        let inner = Graphic::Set(SetGraphic {
            id: "inner".to_string(),
            children: vec![Graphic::Static(image("c", 7, 9))],
        });
        let outer = Graphic::Set(SetGraphic { id: "outer".to_string(), children: vec![inner] });
        assert_eq!(outer.size(), Some(Size::new(7.0, 9.0)));
    }

    #[test]
    fn test_empty_set_has_no_size() {
        let set = Graphic::Set(SetGraphic { id: "empty".to_string(), children: Vec::new() });
        assert_eq!(set.size(), None);
    }

    #[test]
    fn test_loop_direction_attr() {
        assert_eq!(LoopDirection::from_attr("forward"), LoopDirection::Forward);
        assert_eq!(LoopDirection::from_attr("bounce"), LoopDirection::Bounce);
        assert_eq!(LoopDirection::from_attr("sideways"), LoopDirection::Unknown);
        assert_eq!(LoopDirection::Unknown.as_attr(), "bounce");
    }
}
