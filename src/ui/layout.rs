//! Editor layout: menu bar, playfield, entity list, properties, status bar

use macroquad::prelude::*;

use beltrunner_editor::catalog;
use beltrunner_editor::config::EditorConfig;
use beltrunner_editor::editor::{Anchor, EditorSession, PickTarget, ViewTransform};
use beltrunner_editor::level::{Entity, Level};
use beltrunner_editor::motion::{Point, Size};

use super::theme::*;
use super::widgets::{button, label, step_index, stepper, value_box};
use super::{FieldEvent, Modifiers, MouseState, Rect, TextField};

const MENU_HEIGHT: f32 = 30.0;
const STATUS_HEIGHT: f32 = 22.0;
const SIDE_WIDTH: f32 = 340.0;
const LIST_ROW: f32 = 20.0;
const PROP_ROW: f32 = 28.0;
const STATUS_SECS: f64 = 3.0;

/// Actions the main loop carries out (they need dialogs or the filesystem)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    New,
    Open,
    Save,
    SaveAs,
}

/// Editable text properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LevelName,
    EntityId,
    Delay,
    Speed,
    LurcherId,
}

/// Widget state that outlives a frame
#[derive(Debug, Default)]
pub struct UiState {
    /// Focused field and where it was last drawn
    focus: Option<(Field, Rect)>,
    input: TextField,
    list_scroll: usize,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_typing(&self) -> bool {
        self.focus.is_some()
    }

    fn is_focused(&self, field: Field) -> bool {
        matches!(self.focus, Some((f, _)) if f == field)
    }

    fn focus_field(&mut self, session: &EditorSession, field: Field, rect: Rect) {
        self.input = TextField::new(field_value(session, field));
        self.focus = Some((field, rect));
    }

    /// Apply the focused field's text, if any
    pub fn commit_focus(&mut self, session: &mut EditorSession) {
        if let Some((field, _)) = self.focus.take() {
            if let Err(msg) = apply_field(session, field, &self.input.text) {
                session.set_status(&msg, STATUS_SECS);
            }
        }
    }
}

/// Current value of a field as text
fn field_value(session: &EditorSession, field: Field) -> String {
    if field == Field::LevelName {
        return session.level.name.clone();
    }
    let Some(editor) = session.editor() else {
        return String::new();
    };
    let entity = &editor.entity;
    match field {
        Field::LevelName => String::new(),
        Field::EntityId => entity.id.clone().unwrap_or_default(),
        Field::Delay => entity.delay.map(|d| d.to_string()).unwrap_or_default(),
        Field::Speed => editor
            .speed
            .or_else(|| entity.speed())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        Field::LurcherId => entity.lurcher_id.clone().unwrap_or_default(),
    }
}

fn optional_text(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Write edited text back into the session
fn apply_field(session: &mut EditorSession, field: Field, text: &str) -> Result<(), String> {
    if field == Field::LevelName {
        let name = text.trim();
        if !name.is_empty() && name != session.level.name {
            session.level.name = name.to_string();
            session.dirty = true;
        }
        return Ok(());
    }

    match field {
        Field::Speed => {
            if text.trim().is_empty() {
                return Ok(());
            }
            let speed: f64 = text.trim().parse().map_err(|_| format!("Speed {:?} is not a number", text))?;
            session.set_speed(speed).map_err(|e| e.to_string())
        }
        _ => {
            let editor = session.editor_mut().ok_or("No entity is being edited")?;
            let entity = &mut editor.entity;
            match field {
                Field::EntityId => entity.id = optional_text(text),
                Field::LurcherId => entity.lurcher_id = optional_text(text),
                Field::Delay => {
                    entity.delay = match optional_text(text) {
                        None => None,
                        Some(t) => Some(
                            t.parse()
                                .map_err(|_| format!("Delay {:?} is not a whole number", t))?,
                        ),
                    };
                }
                Field::LevelName | Field::Speed => {}
            }
            Ok(())
        }
    }
}

/// Draw the complete editor UI, returns action if triggered
pub fn draw_editor(session: &mut EditorSession, ui: &mut UiState, config: &EditorConfig) -> EditorAction {
    let mouse = MouseState::sample();
    let mods = Modifiers::sample();

    // Clicking anywhere but the focused field commits it
    if mouse.left_pressed {
        if let Some((_, rect)) = ui.focus {
            if !mouse.inside(&rect) {
                ui.commit_focus(session);
            }
        }
    }

    let mut action = EditorAction::None;
    if ui.is_typing() {
        match ui.input.handle_input(mods.ctrl) {
            FieldEvent::Commit => ui.commit_focus(session),
            FieldEvent::Cancel => ui.focus = None,
            FieldEvent::Changed | FieldEvent::None => {}
        }
    } else {
        action = handle_shortcuts(session, mods);
    }
    if mods.ctrl {
        // Save shortcuts also work mid-edit
        if let Some(save) = save_shortcut(mods) {
            ui.commit_focus(session);
            action = save;
        }
    }

    clear_background(BG_COLOR);
    let screen = Rect::new(0.0, 0.0, screen_width(), screen_height());
    let (menu_rect, rest) = screen.take_top(MENU_HEIGHT);
    let (main_rect, status_rect) = rest.take_bottom(STATUS_HEIGHT);
    let (field_rect, side_rect) = main_rect.take_right(SIDE_WIDTH);
    let (list_rect, props_rect) = side_rect.take_top(side_rect.h * 0.4);

    if let Some(menu_action) = draw_menu_bar(&mouse, menu_rect, session, ui) {
        action = menu_action;
    }
    draw_playfield(&mouse, field_rect, session, config);
    draw_entity_list(&mouse, list_rect, session, ui);
    draw_properties(&mouse, props_rect, session, ui);
    draw_status_bar(status_rect, session);

    action
}

fn save_shortcut(mods: Modifiers) -> Option<EditorAction> {
    if !is_key_pressed(KeyCode::S) {
        return None;
    }
    Some(if mods.shift { EditorAction::SaveAs } else { EditorAction::Save })
}

fn handle_shortcuts(session: &mut EditorSession, mods: Modifiers) -> EditorAction {
    if mods.ctrl {
        if is_key_pressed(KeyCode::N) {
            return EditorAction::New;
        }
        if is_key_pressed(KeyCode::O) {
            return EditorAction::Open;
        }
        return EditorAction::None;
    }

    if is_key_pressed(KeyCode::Escape) && session.editing.is_some() {
        session.cancel_edit();
        session.set_status("Edit cancelled", STATUS_SECS);
    }
    if is_key_pressed(KeyCode::Enter) && session.editing.is_some() {
        commit_entity(session);
    }
    if is_key_pressed(KeyCode::Delete) {
        delete_edited_entity(session);
    }
    EditorAction::None
}

fn commit_entity(session: &mut EditorSession) {
    match session.commit_edit() {
        Ok(index) => session.set_status(&format!("Entity {} saved", index), STATUS_SECS),
        Err(e) => session.set_status(&format!("Cannot apply: {}", e), 5.0),
    }
}

fn delete_edited_entity(session: &mut EditorSession) {
    let Some(index) = session.editor().and_then(|e| e.index) else {
        return;
    };
    match session.delete_entity(index) {
        Ok(entity) => session.set_status(&format!("Deleted {}", entity.kind), STATUS_SECS),
        Err(e) => session.set_status(&e.to_string(), 5.0),
    }
}

fn begin_new_entity(session: &mut EditorSession) {
    let Some(graphic) = session.level.graphic_ids().first().map(|g| g.to_string()) else {
        session.set_status("Level has no graphics to place", 5.0);
        return;
    };
    let kind = catalog::MOVEMENT_TYPES[0];
    session.begin_new_entity(kind, &graphic);
    session.set_status("Click the playfield to place the start", STATUS_SECS);
}

// ─────────────────────────────────────────────────────────────────────────────
// Menu bar
// ─────────────────────────────────────────────────────────────────────────────

fn draw_menu_bar(
    mouse: &MouseState,
    rect: Rect,
    session: &mut EditorSession,
    ui: &mut UiState,
) -> Option<EditorAction> {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, HEADER_COLOR);
    let bar = rect.pad(3.0);
    let mut action = None;

    let mut x = bar.x;
    let mut next = |width: f32| {
        let r = Rect::new(x, bar.y, width, bar.h);
        x += width + 4.0;
        r
    };

    let buttons = [
        ("New", EditorAction::New),
        ("Open", EditorAction::Open),
        ("Save", EditorAction::Save),
        ("Save As", EditorAction::SaveAs),
    ];
    for (text, menu_action) in buttons {
        if button(mouse, next(72.0), text, true) {
            action = Some(menu_action);
        }
    }

    let add_rect = next(100.0);
    if button(mouse, add_rect, "New Entity", !session.level.graphics.is_empty()) {
        begin_new_entity(session);
    }

    label(next(48.0), "Name", TEXT_DIM);
    let name_rect = next(220.0);
    text_field(mouse, name_rect, session, ui, Field::LevelName);

    let title = session.title();
    let dims = measure_text(&title, None, FONT_SIZE_HEADER as u16, 1.0);
    let title_x = (bar.right() - dims.width - 6.0).max(x);
    draw_text(&title, title_x, (bar.y + (bar.h + dims.offset_y) * 0.5).round(), FONT_SIZE_HEADER, TEXT_COLOR);

    action
}

fn text_field(mouse: &MouseState, rect: Rect, session: &EditorSession, ui: &mut UiState, field: Field) {
    if ui.is_focused(field) {
        ui.focus = Some((field, rect));
        ui.input.draw(rect);
    } else if value_box(mouse, rect, &field_value(session, field)) {
        ui.focus_field(session, field, rect);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Playfield
// ─────────────────────────────────────────────────────────────────────────────

fn to_screen(p: Point) -> Vec2 {
    vec2(p.x as f32, p.y as f32)
}

fn draw_playfield(mouse: &MouseState, rect: Rect, session: &mut EditorSession, config: &EditorConfig) {
    let area = rect.pad(8.0);
    let view = ViewTransform::new(config.playfield, config.view_margin_x, config.view_margin_y).fit(
        area.x as f64,
        area.y as f64,
        area.w as f64,
        area.h as f64,
    );

    let total = view.view_size();
    let corner = to_screen(view.origin);
    let scale = view.scale as f32;
    draw_rectangle(corner.x, corner.y, total.width as f32 * scale, total.height as f32 * scale, MARGIN_COLOR);

    let field = to_screen(view.model_to_view(Point::ORIGIN));
    let (fw, fh) = (config.playfield.width as f32 * scale, config.playfield.height as f32 * scale);
    draw_rectangle(field.x, field.y, fw, fh, FIELD_COLOR);
    draw_rectangle_lines(field.x, field.y, fw, fh, 1.0, FIELD_BORDER);

    let editing_index = session.editor().and_then(|e| e.index);
    for (i, entity) in session.level.entities().iter().enumerate() {
        if Some(i) != editing_index {
            draw_entity(&view, &session.level, entity, ENTITY_COLOR);
        }
    }
    if let Some(editor) = session.editor() {
        draw_entity(&view, &session.level, &editor.entity, ENTITY_EDITING);
    }

    let cursor = Point::new(mouse.x as f64, mouse.y as f64);
    if !view.contains_view(cursor) {
        return;
    }
    let model = view.view_to_model(cursor);

    let readout = format!("{:.1}, {:.1}", model.x, model.y);
    draw_text(&readout, rect.x + 10.0, rect.bottom() - 8.0, FONT_SIZE_SMALL, TEXT_DIM);

    if mouse.left_pressed {
        if session.editing.is_some() {
            let point = anchored_point(session, &view, model);
            match session.pick_point(point) {
                Ok(PickTarget::Start) => session.set_status("Start placed", STATUS_SECS),
                Ok(PickTarget::Destination) => session.set_status("Destination placed", STATUS_SECS),
                Err(e) => session.set_status(&e.to_string(), 5.0),
            }
        } else if let Some(index) = hit_test(&view, &session.level, cursor) {
            if let Err(e) = session.begin_edit(index) {
                session.set_status(&e.to_string(), 5.0);
            }
        }
    } else if mouse.right_pressed && session.clear_destination().is_ok() {
        session.set_status("Destination cleared", STATUS_SECS);
    }
}

/// Snap picks in the margins to just outside the field edge
fn anchored_point(session: &EditorSession, view: &ViewTransform, model: Point) -> Point {
    let size = session
        .editor()
        .and_then(|e| session.level.graphic_size(&e.entity.graphic));
    match size {
        Some(size) => Anchor::for_point(model, &view.playfield).resolve(size, &view.playfield, model),
        None => model,
    }
}

fn entity_size(level: &Level, entity: &Entity) -> Size {
    level.graphic_size(&entity.graphic).unwrap_or(Size::new(16.0, 16.0))
}

fn draw_entity(view: &ViewTransform, level: &Level, entity: &Entity, color: Color) {
    let size = entity_size(level, entity);
    let center = to_screen(view.display_point(entity.position));
    let (w, h) = ((size.width * view.scale) as f32, (size.height * view.scale) as f32);

    if let Some(destination) = entity.destination() {
        let dest = to_screen(view.display_point(destination));
        draw_line(center.x, center.y, dest.x, dest.y, 1.5, MOTION_COLOR);
        draw_circle_lines(dest.x, dest.y, 4.0, 1.5, MOTION_COLOR);
    }
    draw_rectangle_lines(center.x - w / 2.0, center.y - h / 2.0, w, h, 1.5, color);
    draw_text(&entity.kind, center.x - w / 2.0, center.y - h / 2.0 - 3.0, FONT_SIZE_SMALL, color);
}

/// Topmost entity under a screen point
fn hit_test(view: &ViewTransform, level: &Level, cursor: Point) -> Option<usize> {
    level.entities().iter().enumerate().rev().find_map(|(i, entity)| {
        let size = entity_size(level, entity);
        let center = view.display_point(entity.position);
        let (hw, hh) = (size.width * view.scale / 2.0, size.height * view.scale / 2.0);
        let hit = (cursor.x - center.x).abs() <= hw && (cursor.y - center.y).abs() <= hh;
        hit.then_some(i)
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Side panel
// ─────────────────────────────────────────────────────────────────────────────

fn panel_header(rect: Rect, title: &str) -> Rect {
    let (header, body) = rect.take_top(22.0);
    draw_rectangle(header.x, header.y, header.w, header.h, HEADER_COLOR);
    label(Rect::new(header.x + 6.0, header.y, header.w, header.h), title, TEXT_COLOR);
    body
}

fn draw_entity_list(mouse: &MouseState, rect: Rect, session: &mut EditorSession, ui: &mut UiState) {
    let count = session.level.entities().len();
    let body = panel_header(rect, &format!("Entities ({})", count)).pad(2.0);
    let visible = (body.h / LIST_ROW).floor().max(0.0) as usize;

    if mouse.inside(&body) && mouse.scroll != 0.0 {
        ui.list_scroll = if mouse.scroll > 0.0 {
            ui.list_scroll.saturating_sub(1)
        } else {
            ui.list_scroll + 1
        };
    }
    ui.list_scroll = ui.list_scroll.min(count.saturating_sub(visible));

    let editing_index = session.editor().and_then(|e| e.index);
    let mut clicked = None;
    for (row, (i, entity)) in session
        .level
        .entities()
        .iter()
        .enumerate()
        .skip(ui.list_scroll)
        .take(visible)
        .enumerate()
    {
        let r = body.row(row, LIST_ROW);
        if Some(i) == editing_index {
            draw_rectangle(r.x, r.y, r.w, r.h, ROW_HIGHLIGHT);
        } else if mouse.inside(&r) {
            draw_rectangle(r.x, r.y, r.w, r.h, BUTTON_BG);
        }
        let delay = entity.delay.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
        let text = format!("{:>4}  {:<11} {}", delay, entity.kind, entity.graphic);
        label(Rect::new(r.x + 4.0, r.y, r.w - 4.0, r.h), &text, TEXT_COLOR);
        if mouse.clicked(&r) {
            clicked = Some(i);
        }
    }

    if let Some(index) = clicked {
        if let Err(e) = session.begin_edit(index) {
            session.set_status(&e.to_string(), 5.0);
        }
    }
}

fn draw_properties(mouse: &MouseState, rect: Rect, session: &mut EditorSession, ui: &mut UiState) {
    let Some(editor) = session.editor().cloned() else {
        let body = panel_header(rect, "Properties").pad(6.0);
        let help = [
            "Click an entity or a list row to edit it.",
            "New Entity adds one to the level.",
            "Left click: place start, then destination.",
            "Clicks in the margin park it off-field.",
            "Right click: clear destination.",
            "Enter applies, Esc cancels, Del deletes.",
            "Ctrl+O open, Ctrl+S save, Ctrl+Shift+S save as.",
        ];
        for (i, line) in help.iter().enumerate() {
            label(body.row(i, LIST_ROW), line, TEXT_DIM);
        }
        return;
    };

    let title = match editor.index {
        Some(i) => format!("Entity {}", i),
        None => "New entity".to_string(),
    };
    let body = panel_header(rect, &title).pad(6.0);
    let entity = &editor.entity;
    let mut row = 0;
    let mut next_row = || {
        let (name, value) = body.row(row, PROP_ROW).pad(2.0).take_left(90.0);
        row += 1;
        (name, value)
    };

    let (name, value) = next_row();
    label(name, "Type", TEXT_DIM);
    let current = catalog::ENTITY_TYPES.iter().position(|k| *k == entity.kind);
    let step = stepper(mouse, value, &entity.kind, true);
    if let Some(i) = step_index(current, catalog::ENTITY_TYPES.len(), step).filter(|_| step != 0) {
        if let Some(ed) = session.editor_mut() {
            ed.entity.kind = catalog::ENTITY_TYPES[i].to_string();
        }
    }

    let (name, value) = next_row();
    label(name, "Graphic", TEXT_DIM);
    let graphics: Vec<String> = session.level.graphic_ids().iter().map(|g| g.to_string()).collect();
    let current = graphics.iter().position(|g| *g == entity.graphic);
    let step = stepper(mouse, value, &entity.graphic, !graphics.is_empty());
    if let Some(i) = step_index(current, graphics.len(), step).filter(|_| step != 0) {
        if let Some(ed) = session.editor_mut() {
            ed.entity.graphic = graphics[i].clone();
        }
    }

    let (name, value) = next_row();
    label(name, "Power-up", TEXT_DIM);
    let power_up = entity.power_up.as_deref().unwrap_or("");
    let current = catalog::POWER_UPS.iter().position(|p| *p == power_up);
    let shown = if power_up.is_empty() { "none" } else { power_up };
    let step = stepper(mouse, value, shown, true);
    if let Some(i) = step_index(current, catalog::POWER_UPS.len(), step).filter(|_| step != 0) {
        if let Some(ed) = session.editor_mut() {
            let choice = catalog::POWER_UPS[i];
            ed.entity.power_up = (!choice.is_empty()).then(|| choice.to_string());
        }
    }

    let mut fields = vec![("Id", Field::EntityId), ("Delay", Field::Delay)];
    if catalog::has_motion(&entity.kind) {
        fields.push(("Speed", Field::Speed));
    }
    if entity.kind == catalog::CRATE || entity.lurcher_id.is_some() {
        fields.push(("Lurcher", Field::LurcherId));
    }
    for (text, field) in fields {
        let (name, value) = next_row();
        label(name, text, TEXT_DIM);
        text_field(mouse, value, session, ui, field);
    }

    let (name, value) = next_row();
    label(name, "Start", TEXT_DIM);
    label(value, &format!("{:.1}, {:.1}", entity.position.x, entity.position.y), TEXT_COLOR);

    if catalog::has_motion(&entity.kind) {
        let (name, value) = next_row();
        label(name, "Destination", TEXT_DIM);
        let dest = match entity.motion {
            Some(m) => format!("{:.1}, {:.1} @ {}", m.destination.x, m.destination.y, m.speed),
            None => "none".to_string(),
        };
        label(value, &dest, TEXT_COLOR);

        let (name, value) = next_row();
        label(name, "Next click", TEXT_DIM);
        let next = match editor.next_pick() {
            PickTarget::Start => "start",
            PickTarget::Destination => "destination",
        };
        label(value, next, ACCENT_COLOR);
    }

    let buttons = body.row(row, PROP_ROW).pad(2.0);
    let width = (buttons.w - 12.0) / 4.0;
    let slot = |i: usize| Rect::new(buttons.x + i as f32 * (width + 4.0), buttons.y, width, buttons.h);

    if button(mouse, slot(0), "Apply", true) {
        commit_entity(session);
    }
    if button(mouse, slot(1), "Cancel", true) {
        session.cancel_edit();
    }
    if button(mouse, slot(2), "Clear dest", entity.motion.is_some()) && session.clear_destination().is_ok() {
        session.set_status("Destination cleared", STATUS_SECS);
    }
    if button(mouse, slot(3), "Delete", !editor.is_new()) {
        delete_edited_entity(session);
    }
}

fn draw_status_bar(rect: Rect, session: &EditorSession) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, HEADER_COLOR);
    let inner = Rect::new(rect.x + 8.0, rect.y, rect.w - 16.0, rect.h);
    match session.status() {
        Some(msg) => label(inner, msg, TEXT_COLOR),
        None => {
            if let Some(path) = &session.current_file {
                label(inner, &path.display().to_string(), TEXT_DIM);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beltrunner_editor::level::{Graphic, ImageGraphic};

    fn session_editing() -> EditorSession {
        let mut session = EditorSession::new(10.0);
        session
            .level
            .add_graphic(Graphic::Static(ImageGraphic {
                id: "rock".to_string(),
                path: "rock.png".to_string(),
                width: 20,
                height: 20,
            }))
            .unwrap();
        session.begin_new_entity("crate", "rock");
        session
    }

    #[test]
    fn test_apply_delay() {
        let mut s = session_editing();
        apply_field(&mut s, Field::Delay, " 12 ").unwrap();
        assert_eq!(s.editor().unwrap().entity.delay, Some(12));
        apply_field(&mut s, Field::Delay, "").unwrap();
        assert_eq!(s.editor().unwrap().entity.delay, None);
        assert!(apply_field(&mut s, Field::Delay, "1.5").is_err());
    }

    #[test]
    fn test_apply_speed() {
        let mut s = session_editing();
        apply_field(&mut s, Field::Speed, "6.5").unwrap();
        assert_eq!(s.editor().unwrap().speed, Some(6.5));
        assert!(apply_field(&mut s, Field::Speed, "fast").is_err());
        assert!(apply_field(&mut s, Field::Speed, "-1").is_err());
        assert_eq!(field_value(&s, Field::Speed), "6.5");
    }

    #[test]
    fn test_apply_optional_text() {
        let mut s = session_editing();
        apply_field(&mut s, Field::LurcherId, "lurch1").unwrap();
        apply_field(&mut s, Field::EntityId, "   ").unwrap();
        let entity = &s.editor().unwrap().entity;
        assert_eq!(entity.lurcher_id.as_deref(), Some("lurch1"));
        assert_eq!(entity.id, None);
    }

    #[test]
    fn test_apply_level_name_marks_dirty() {
        let mut s = session_editing();
        apply_field(&mut s, Field::LevelName, "New Level").unwrap();
        assert!(!s.dirty);
        apply_field(&mut s, Field::LevelName, "Belt Two").unwrap();
        assert_eq!(s.level.name, "Belt Two");
        assert!(s.dirty);
    }

    #[test]
    fn test_apply_without_edit() {
        let mut s = EditorSession::new(10.0);
        assert!(apply_field(&mut s, Field::Delay, "3").is_err());
        assert_eq!(field_value(&s, Field::Delay), "");
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut s = session_editing();
        s.commit_edit().unwrap();
        s.begin_new_entity("alien", "rock");
        s.commit_edit().unwrap();

        let view = ViewTransform::new(Default::default(), 0.0, 0.0);
        let cursor = Point::new(5.0, 5.0);
        assert_eq!(hit_test(&view, &s.level, cursor), Some(1));
        assert_eq!(hit_test(&view, &s.level, Point::new(500.0, 500.0)), None);
    }
}
