//! Level XML reading and writing
//!
//! Reading builds the whole [`Level`] or fails; nothing partial escapes.
//! Entities whose graphic cannot be found are skipped, entity types the editor
//! does not model are kept as their original markup.
//!
//! Writing regenerates the document from the model every time.

use std::borrow::Cow;
use std::fmt::Display;
use std::str::FromStr;

use roxmltree::{Document, Node};
use thiserror::Error;
use tracing::{debug, warn};

use super::{
    AnimatedGraphic, Entity, Graphic, ImageGraphic, Level, LoopDirection, Motion, MotionSettings,
    Sequence, SetGraphic,
};
use crate::catalog;
use crate::motion::{Point, Vector};

/// Why a level document could not be read
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("missing <{0}> element")]
    MissingElement(&'static str),
    #[error("line {line}: <{element}> is missing attribute `{attribute}`")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
        line: u32,
    },
    #[error("line {line}: <{element}> attribute `{attribute}` is not a valid number: {value:?}")]
    InvalidNumber {
        element: String,
        attribute: &'static str,
        value: String,
        line: u32,
    },
    #[error("graphic {id:?} has unknown type {tag:?}")]
    UnknownGraphicType { id: String, tag: String },
    #[error("graphic id {0:?} is defined more than once")]
    DuplicateGraphic(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Reading
// ─────────────────────────────────────────────────────────────────────────────

/// Parse a level document
pub fn parse_level(text: &str, settings: &MotionSettings) -> Result<Level, LoadError> {
    let doc = Document::parse(text)?;
    let map = doc.root_element();
    if map.tag_name().name() != "map" {
        return Err(LoadError::MissingElement("map"));
    }

    let mut level = Level::new();

    let info = child_element(map, "info")?;
    level.name = required(info, "name")?.to_string();

    for node in elements(child_element(map, "graphics")?) {
        let graphic = parse_graphic(node)?;
        let id = graphic.id().to_string();
        // Only a repeated id is rejected
        level
            .add_graphic(graphic)
            .map_err(|_| LoadError::DuplicateGraphic(id))?;
    }

    let mut dropped = 0usize;
    for node in elements(child_element(map, "entities")?) {
        let kind = required(node, "type")?;
        if catalog::is_ignorable(kind) {
            level.ignorables.push(text[node.range()].to_string());
            continue;
        }
        match parse_entity(node, kind, &level, settings)? {
            Some(entity) => level.push_entity_unsorted(entity),
            None => dropped += 1,
        }
    }
    level.sort_entities();

    debug!(
        name = %level.name,
        graphics = level.graphics.len(),
        entities = level.entities().len(),
        ignorables = level.ignorables.len(),
        dropped,
        "parsed level"
    );
    Ok(level)
}

fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

fn child_element<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> Result<Node<'a, 'input>, LoadError> {
    elements(node)
        .find(|n| n.tag_name().name() == name)
        .ok_or(LoadError::MissingElement(name))
}

fn line_of(node: Node) -> u32 {
    node.document().text_pos_at(node.range().start).row
}

fn required<'a>(node: Node<'a, '_>, attribute: &'static str) -> Result<&'a str, LoadError> {
    node.attribute(attribute).ok_or_else(|| LoadError::MissingAttribute {
        element: node.tag_name().name().to_string(),
        attribute,
        line: line_of(node),
    })
}

/// Non-empty attribute text, whitespace-only counts as absent
fn optional_str(node: Node, attribute: &str) -> Option<String> {
    node.attribute(attribute)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_num<T: FromStr>(node: Node, attribute: &'static str, value: &str) -> Result<T, LoadError> {
    value.trim().parse().map_err(|_| LoadError::InvalidNumber {
        element: node.tag_name().name().to_string(),
        attribute,
        value: value.to_string(),
        line: line_of(node),
    })
}

fn required_num<T: FromStr>(node: Node, attribute: &'static str) -> Result<T, LoadError> {
    parse_num(node, attribute, required(node, attribute)?)
}

fn optional_num<T: FromStr>(node: Node, attribute: &'static str) -> Result<Option<T>, LoadError> {
    node.attribute(attribute)
        .map(|v| parse_num(node, attribute, v))
        .transpose()
}

/// Floats must be finite; `parse` alone accepts "inf" and "NaN"
fn check_finite(node: Node, attribute: &'static str, value: f64) -> Result<f64, LoadError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LoadError::InvalidNumber {
            element: node.tag_name().name().to_string(),
            attribute,
            value: value.to_string(),
            line: line_of(node),
        })
    }
}

fn required_f64(node: Node, attribute: &'static str) -> Result<f64, LoadError> {
    check_finite(node, attribute, required_num(node, attribute)?)
}

fn optional_f64(node: Node, attribute: &'static str) -> Result<Option<f64>, LoadError> {
    optional_num(node, attribute)?
        .map(|v| check_finite(node, attribute, v))
        .transpose()
}

fn parse_graphic(node: Node) -> Result<Graphic, LoadError> {
    let id = required(node, "id")?.to_string();
    let tag = required(node, "type")?;

    match tag {
        "static" => Ok(Graphic::Static(parse_image(node, id)?)),
        "scrolling" => Ok(Graphic::Scrolling(parse_image(node, id)?)),
        "animated" => {
            let sequences = elements(node)
                .map(parse_sequence)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Graphic::Animated(AnimatedGraphic {
                id,
                path: required(node, "path")?.to_string(),
                width: required_num(node, "width")?,
                height: required_num(node, "height")?,
                num_frames: required_num(node, "numFrames")?,
                sheet_content_width: required_num(node, "sheetContentWidth")?,
                sheet_content_height: required_num(node, "sheetContentHeight")?,
                sequences,
            }))
        }
        "set" => {
            let children = elements(node)
                .map(parse_graphic)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Graphic::Set(SetGraphic { id, children }))
        }
        other => Err(LoadError::UnknownGraphicType {
            id,
            tag: other.to_string(),
        }),
    }
}

fn parse_image(node: Node, id: String) -> Result<ImageGraphic, LoadError> {
    Ok(ImageGraphic {
        id,
        path: required(node, "path")?.to_string(),
        width: required_num(node, "width")?,
        height: required_num(node, "height")?,
    })
}

fn parse_sequence(node: Node) -> Result<Sequence, LoadError> {
    Ok(Sequence {
        name: required(node, "name")?.to_string(),
        start: required_num(node, "start")?,
        count: required_num(node, "count")?,
        rotation: required_num(node, "rotation")?,
        time_ms: required_num(node, "time")?,
        loop_count: required_num(node, "loopCount")?,
        direction: LoopDirection::from_attr(required(node, "loopDirection")?),
    })
}

/// Build an entity, or `None` when its graphic cannot be resolved
fn parse_entity(
    node: Node,
    kind: &str,
    level: &Level,
    settings: &MotionSettings,
) -> Result<Option<Entity>, LoadError> {
    let graphic = required(node, "graphic")?.trim();
    let size = match level.graphic_size(graphic) {
        Some(size) if !graphic.is_empty() => size,
        _ => {
            debug!(kind, graphic, line = line_of(node), "skipping entity with unresolved graphic");
            return Ok(None);
        }
    };

    let position = Point::new(required_f64(node, "x")?, required_f64(node, "y")?);
    let mut entity = Entity::new(kind, graphic).with_position(position);
    entity.id = optional_str(node, "id");
    entity.delay = optional_num(node, "delay")?;
    entity.power_up = optional_str(node, "powerUp");
    entity.lurcher_id = optional_str(node, "lurcherId");

    if catalog::is_movement_type(kind) {
        let vx = optional_f64(node, "vX")?;
        let vy = optional_f64(node, "vY")?;
        if let (Some(vx), Some(vy)) = (vx, vy) {
            let velocity = Vector::new(vx, vy);
            let motion = match Motion::from_velocity(position, size, velocity, settings) {
                Ok(motion) => {
                    if motion.speed == 0.0 && !velocity.is_zero() {
                        warn!(kind, line = line_of(node), vx, vy, "entity starts past its exit edge, left stationary");
                    }
                    motion
                }
                Err(e) => {
                    warn!(kind, line = line_of(node), error = %e, "velocity projection failed, entity left stationary");
                    Motion::stationary(position)
                }
            };
            entity.motion = Some(motion);
        }
    } else if catalog::is_police(kind) {
        let dx = optional_f64(node, "dX")?;
        let dy = optional_f64(node, "dY")?;
        let speed = optional_f64(node, "s")?;
        match (dx, dy, speed) {
            (Some(x), Some(y), Some(s)) => entity.set_motion(Point::new(x, y), s),
            (None, None, None) => {}
            _ => warn!(line = line_of(node), "police entity has incomplete dX/dY/s, motion ignored"),
        }
    }

    Ok(Some(entity))
}

// ─────────────────────────────────────────────────────────────────────────────
// Writing
// ─────────────────────────────────────────────────────────────────────────────

/// Serialize a level to its XML document
pub fn level_to_xml(level: &Level) -> String {
    let mut out = String::new();
    out.push_str("<map>\n");
    out.push_str(&Element::open(2, "info").attr("name", &level.name).close());
    out.push_str("  <graphics>\n");
    for graphic in &level.graphics {
        write_graphic(&mut out, graphic, 4);
    }
    out.push_str("  </graphics>\n");
    out.push_str("  <entities>\n");
    for raw in &level.ignorables {
        out.push_str("    ");
        out.push_str(raw);
        out.push('\n');
    }
    for entity in level.entities() {
        out.push_str(&entity_element(entity, 4));
    }
    out.push_str("  </entities>\n");
    out.push_str("</map>\n");
    out
}

fn write_graphic(out: &mut String, graphic: &Graphic, indent: usize) {
    let element = Element::open(indent, "graphic")
        .attr("id", graphic.id())
        .attr("type", graphic.type_tag());

    match graphic {
        Graphic::Static(image) | Graphic::Scrolling(image) => {
            out.push_str(
                &element
                    .attr("path", &image.path)
                    .value("width", image.width)
                    .value("height", image.height)
                    .close(),
            );
        }
        Graphic::Animated(anim) => {
            let element = element
                .attr("path", &anim.path)
                .value("width", anim.width)
                .value("height", anim.height)
                .value("numFrames", anim.num_frames)
                .value("sheetContentWidth", anim.sheet_content_width)
                .value("sheetContentHeight", anim.sheet_content_height);
            if anim.sequences.is_empty() {
                out.push_str(&element.close());
                return;
            }
            out.push_str(&element.start());
            for seq in &anim.sequences {
                out.push_str(
                    &Element::open(indent + 2, "sequence")
                        .attr("name", &seq.name)
                        .value("start", seq.start)
                        .value("count", seq.count)
                        .value("rotation", seq.rotation)
                        .value("time", seq.time_ms)
                        .value("loopCount", seq.loop_count)
                        .attr("loopDirection", seq.direction.as_attr())
                        .close(),
                );
            }
            out.push_str(&end_tag(indent, "graphic"));
        }
        Graphic::Set(set) => {
            out.push_str(&element.start());
            for child in &set.children {
                write_graphic(out, child, indent + 2);
            }
            out.push_str(&end_tag(indent, "graphic"));
        }
    }
}

fn entity_element(entity: &Entity, indent: usize) -> String {
    let mut element = Element::open(indent, "entity");
    if let Some(id) = &entity.id {
        element = element.attr("id", id);
    }
    element = element
        .attr("type", &entity.kind)
        .attr("graphic", &entity.graphic)
        .number("x", entity.position.x)
        .number("y", entity.position.y);

    if entity.is_police() {
        if let Some(motion) = entity.motion {
            element = element
                .number("dX", motion.destination.x)
                .number("dY", motion.destination.y)
                .number("s", motion.speed);
        }
    } else if let Some(velocity) = entity.velocity() {
        element = element.number("vX", velocity.x).number("vY", velocity.y);
    }

    if let Some(delay) = entity.delay {
        element = element.value("delay", delay);
    }
    if let Some(power_up) = &entity.power_up {
        element = element.attr("powerUp", power_up);
    }
    if let Some(lurcher_id) = &entity.lurcher_id {
        element = element.attr("lurcherId", lurcher_id);
    }
    element.close()
}

/// One start tag being assembled
struct Element {
    buf: String,
}

impl Element {
    fn open(indent: usize, name: &str) -> Self {
        Self { buf: format!("{:indent$}<{}", "", name, indent = indent) }
    }

    fn attr(mut self, name: &str, value: &str) -> Self {
        self.buf.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        self
    }

    fn value(mut self, name: &str, value: impl Display) -> Self {
        self.buf.push_str(&format!(" {}=\"{}\"", name, value));
        self
    }

    fn number(self, name: &str, value: f64) -> Self {
        self.value(name, format_number(value))
    }

    /// Self-closing tag line
    fn close(mut self) -> String {
        self.buf.push_str(" />\n");
        self.buf
    }

    /// Start tag line for an element with children
    fn start(mut self) -> String {
        self.buf.push_str(">\n");
        self.buf
    }
}

fn end_tag(indent: usize, name: &str) -> String {
    format!("{:indent$}</{}>\n", "", name, indent = indent)
}

/// Shortest round-trip text; negative zero and non-finite values become "0"
fn format_number(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Size;

    const SAMPLE: &str = r#"<map>
  <info name="Belt One" />
  <graphics>
    <graphic id="rock" type="static" path="rock.png" width="20" height="20" />
    <graphic id="sky" type="scrolling" path="sky.png" width="1334" height="750" />
    <graphic id="ufo" type="animated" path="ufo.png" width="40" height="30" numFrames="4" sheetContentWidth="160" sheetContentHeight="30">
      <sequence name="fly" start="1" count="4" rotation="0" time="400" loopCount="0" loopDirection="forward" />
    </graphic>
    <graphic id="moons" type="set">
      <graphic id="moonA" type="static" path="a.png" width="100" height="50" />
    </graphic>
  </graphics>
  <entities>
    <entity type="background" graphic="sky" x="667" y="375" vX="-5" vY="0" />
    <entity type="asteroid" graphic="rock" x="100" y="100" vX="10" vY="0" delay="2" />
    <entity id="cop" type="police" graphic="ufo" x="0" y="0" dX="400" dY="300" s="12" />
    <entity type="alien" graphic="ghost" x="1" y="1" vX="3" vY="3" />
    <entity type="crate" graphic="rock" x="600" y="-10" vX="0" vY="4" powerUp="killAll" lurcherId="l1" />
  </entities>
</map>
"#;

    fn parse(text: &str) -> Result<Level, LoadError> {
        parse_level(text, &MotionSettings::default())
    }

    fn find<'a>(level: &'a Level, kind: &str) -> &'a Entity {
        level.entities().iter().find(|e| e.kind == kind).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_parse_sample() {
        let level = parse(SAMPLE).unwrap();
        assert_eq!(level.name, "Belt One");
        assert_eq!(level.graphic_ids(), vec!["rock", "sky", "ufo", "moons"]);
        assert_eq!(level.graphic_size("moons"), Some(Size::new(100.0, 50.0)));

        match level.graphic("ufo") {
            Some(Graphic::Animated(anim)) => {
                assert_eq!(anim.num_frames, 4);
                assert_eq!(anim.sequences.len(), 1);
                assert_eq!(anim.sequences[0].time_ms, 400);
                assert_eq!(anim.sequences[0].direction, LoopDirection::Forward);
            }
            other => panic!("expected animated graphic, got {:?}", other),
        }
    }

    #[test]
    fn test_entities_sorted_and_unresolved_dropped() {
        let level = parse(SAMPLE).unwrap();
        let kinds: Vec<&str> = level.entities().iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["crate", "police", "asteroid"]);
    }

    #[test]
    fn test_velocity_becomes_destination_and_speed() {
        let level = parse(SAMPLE).unwrap();

        let asteroid = find(&level, "asteroid");
        assert_eq!(asteroid.destination(), Some(Point::new(1350.0, 100.0)));
        assert!(close(asteroid.speed().unwrap(), 10.0));

        // -20 + 4n > 750 first at n = 193
        let crate_entity = find(&level, "crate");
        assert_eq!(crate_entity.destination(), Some(Point::new(600.0, 762.0)));
        assert!(close(crate_entity.speed().unwrap(), 4.0));
        assert_eq!(crate_entity.power_up.as_deref(), Some("killAll"));
        assert_eq!(crate_entity.lurcher_id.as_deref(), Some("l1"));
    }

    #[test]
    fn test_police_reads_destination_directly() {
        let level = parse(SAMPLE).unwrap();
        let police = find(&level, "police");
        assert_eq!(police.id.as_deref(), Some("cop"));
        assert_eq!(police.destination(), Some(Point::new(400.0, 300.0)));
        assert_eq!(police.speed(), Some(12.0));
    }

    #[test]
    fn test_ignorable_kept_verbatim() {
        let level = parse(SAMPLE).unwrap();
        assert_eq!(
            level.ignorables,
            vec![r#"<entity type="background" graphic="sky" x="667" y="375" vX="-5" vY="0" />"#]
        );

        let xml = level_to_xml(&level);
        assert!(xml.contains(
            r#"    <entity type="background" graphic="sky" x="667" y="375" vX="-5" vY="0" />"#
        ));
    }

    #[test]
    fn test_police_written_without_velocity() {
        let mut level = parse(SAMPLE).unwrap();
        let police = Entity::new("police", "ufo")
            .with_position(Point::new(-50.0, 900.0))
            .with_motion(Point::new(10.0, 20.0), 7.5);
        level.add_entity(police).unwrap();

        let xml = level_to_xml(&level);
        let line = xml
            .lines()
            .find(|l| l.contains(r#"type="police""#) && l.contains(r#"x="-50""#))
            .unwrap();
        assert!(line.contains(r#"dX="10" dY="20" s="7.5""#));
        assert!(!line.contains("vX"));
        assert!(!line.contains("vY"));
    }

    #[test]
    fn test_movement_entity_written_as_velocity() {
        let level = parse(SAMPLE).unwrap();
        let xml = level_to_xml(&level);
        let line = xml.lines().find(|l| l.contains(r#"type="asteroid""#)).unwrap();
        assert!(line.contains("vX=\""));
        assert!(line.contains(r#"vY="0""#));
        assert!(!line.contains("dX"));
        assert!(!line.contains(" s=\""));
    }

    #[test]
    fn test_entity_without_motion_has_no_motion_attributes() {
        let mut level = parse(SAMPLE).unwrap();
        level.add_entity(Entity::new("pirate", "rock").with_position(Point::new(5.0, 6.0))).unwrap();
        let xml = level_to_xml(&level);
        let line = xml.lines().find(|l| l.contains(r#"type="pirate""#)).unwrap();
        assert_eq!(line, r#"    <entity type="pirate" graphic="rock" x="5" y="6" />"#);
    }

    #[test]
    fn test_round_trip() {
        let first = parse(SAMPLE).unwrap();
        let second = parse(&level_to_xml(&first)).unwrap();

        assert_eq!(first.name, second.name);
        assert_eq!(first.graphics, second.graphics);
        assert_eq!(first.ignorables, second.ignorables);
        assert_eq!(first.entities().len(), second.entities().len());
        for (a, b) in first.entities().iter().zip(second.entities()) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.position, b.position);
            assert_eq!(a.delay, b.delay);
            let (ma, mb) = (a.motion.unwrap(), b.motion.unwrap());
            assert!(close(ma.destination.x, mb.destination.x));
            assert!(close(ma.destination.y, mb.destination.y));
            assert!(close(ma.speed, mb.speed));
        }
    }

    #[test]
    fn test_zero_velocity_round_trips() {
        let text = SAMPLE.replace(
            r#"x="100" y="100" vX="10" vY="0""#,
            r#"x="100" y="100" vX="0" vY="0""#,
        );
        let level = parse(&text).unwrap();
        let asteroid = find(&level, "asteroid");
        assert_eq!(asteroid.motion, Some(Motion::stationary(Point::new(100.0, 100.0))));

        let xml = level_to_xml(&level);
        assert!(xml.contains(r#"type="asteroid" graphic="rock" x="100" y="100" vX="0" vY="0""#));
    }

    #[test]
    fn test_start_past_exit_edge_loads_stationary() {
        let text = SAMPLE.replace(
            r#"x="100" y="100" vX="10" vY="0""#,
            r#"x="1500" y="300" vX="5" vY="0""#,
        );
        let level = parse(&text).unwrap();
        let asteroid = find(&level, "asteroid");
        assert_eq!(asteroid.motion, Some(Motion::stationary(Point::new(1500.0, 300.0))));

        let xml = level_to_xml(&level);
        assert!(xml.contains(r#"type="asteroid" graphic="rock" x="1500" y="300" vX="0" vY="0""#));
    }

    #[test]
    fn test_step_limit_loads_stationary() {
        let settings = MotionSettings { max_steps: 3, ..MotionSettings::default() };
        let level = parse_level(SAMPLE, &settings).unwrap();

        let asteroid = find(&level, "asteroid");
        assert_eq!(asteroid.motion, Some(Motion::stationary(Point::new(100.0, 100.0))));
        let crate_entity = find(&level, "crate");
        assert_eq!(crate_entity.motion, Some(Motion::stationary(Point::new(600.0, -10.0))));
        // Police motion does not go through the projection
        assert_eq!(find(&level, "police").speed(), Some(12.0));

        let xml = level_to_xml(&level);
        assert!(xml.contains(r#"type="asteroid" graphic="rock" x="100" y="100" vX="0" vY="0""#));
        assert!(xml.contains(r#"x="600" y="-10" vX="0" vY="0""#));
    }

    #[test]
    fn test_partial_velocity_means_no_motion() {
        let text = SAMPLE.replace(r#"vX="10" vY="0" delay="2""#, r#"vX="10" delay="2""#);
        let level = parse(&text).unwrap();
        assert_eq!(find(&level, "asteroid").motion, None);
    }

    #[test]
    fn test_missing_attribute_fails() {
        let text = SAMPLE.replace(r#"x="100" y="100""#, r#"y="100""#);
        match parse(&text) {
            Err(LoadError::MissingAttribute { element, attribute, line }) => {
                assert_eq!(element, "entity");
                assert_eq!(attribute, "x");
                assert_eq!(line, 15);
            }
            other => panic!("expected missing attribute, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_number_fails() {
        let text = SAMPLE.replace(r#"width="20""#, r#"width="wide""#);
        assert!(matches!(
            parse(&text),
            Err(LoadError::InvalidNumber { attribute: "width", .. })
        ));
    }

    #[test]
    fn test_non_finite_number_fails() {
        let text = SAMPLE.replace(r#"x="600""#, r#"x="NaN""#);
        assert!(matches!(parse(&text), Err(LoadError::InvalidNumber { attribute: "x", .. })));
    }

    #[test]
    fn test_unknown_graphic_type_fails() {
        let text = SAMPLE.replace(r#"type="scrolling""#, r#"type="vector""#);
        assert!(matches!(parse(&text), Err(LoadError::UnknownGraphicType { .. })));
    }

    #[test]
    fn test_duplicate_graphic_fails() {
        let text = SAMPLE.replace(r#"id="sky""#, r#"id="rock""#);
        assert!(matches!(parse(&text), Err(LoadError::DuplicateGraphic(id)) if id == "rock"));
    }

    #[test]
    fn test_missing_section_fails() {
        let text = "<map><info name=\"x\" /><graphics /></map>";
        assert!(matches!(parse(text), Err(LoadError::MissingElement("entities"))));
        assert!(matches!(parse("<level />"), Err(LoadError::MissingElement("map"))));
        assert!(matches!(parse("<map>"), Err(LoadError::Xml(_))));
    }

    #[test]
    fn test_names_are_escaped() {
        let mut level = Level::new();
        level.name = r#"Rocks & "Pirates""#.to_string();
        let xml = level_to_xml(&level);
        assert!(xml.contains(r#"<info name="Rocks &amp; &quot;Pirates&quot;" />"#));
        assert_eq!(parse(&xml).unwrap().name, level.name);
    }

    #[test]
    fn test_unknown_loop_direction_written_as_bounce() {
        let text = SAMPLE.replace(r#"loopDirection="forward""#, r#"loopDirection="spin""#);
        let level = parse(&text).unwrap();
        let xml = level_to_xml(&level);
        assert!(xml.contains(r#"loopDirection="bounce""#));
    }

    #[test]
    fn test_empty_level_layout() {
        let xml = level_to_xml(&Level::new());
        assert_eq!(
            xml,
            "<map>\n  <info name=\"New Level\" />\n  <graphics>\n  </graphics>\n  <entities>\n  </entities>\n</map>\n"
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(12.5), "12.5");
    }
}
