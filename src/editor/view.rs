//! Playfield view geometry
//!
//! The editor draws the playfield with a margin on every side so entities
//! placed just off the field can still be seen and picked. [`ViewTransform`]
//! maps between screen pixels and model units; [`Anchor`] snaps a pick to the
//! field edges the way the placement grid does.

use crate::motion::{Playfield, Point, Size};

/// Screen <-> model mapping for the playfield and its margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Screen position of the margin's top-left corner
    pub origin: Point,
    /// Screen pixels per model unit
    pub scale: f64,
    pub margin_x: f64,
    pub margin_y: f64,
    pub playfield: Playfield,
}

impl ViewTransform {
    /// Unscaled view anchored at the screen origin
    pub fn new(playfield: Playfield, margin_x: f64, margin_y: f64) -> Self {
        Self {
            origin: Point::ORIGIN,
            scale: 1.0,
            margin_x,
            margin_y,
            playfield,
        }
    }

    /// Scale and centre the view inside a screen rectangle
    pub fn fit(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        let total = self.view_size();
        let scale = (width / total.width).min(height / total.height);
        self.scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        self.origin = Point::new(
            x + (width - total.width * self.scale) / 2.0,
            y + (height - total.height * self.scale) / 2.0,
        );
        self
    }

    /// Model-unit size of playfield plus margins
    pub fn view_size(&self) -> Size {
        Size::new(
            self.playfield.width + self.margin_x * 2.0,
            self.playfield.height + self.margin_y * 2.0,
        )
    }

    pub fn model_to_view(&self, p: Point) -> Point {
        Point::new(
            self.origin.x + (p.x + self.margin_x) * self.scale,
            self.origin.y + (p.y + self.margin_y) * self.scale,
        )
    }

    pub fn view_to_model(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.origin.x) / self.scale - self.margin_x,
            (p.y - self.origin.y) / self.scale - self.margin_y,
        )
    }

    /// Where to draw a marker for `p`; points off the field sit on its edge
    pub fn display_point(&self, p: Point) -> Point {
        self.model_to_view(Point::new(
            p.x.clamp(0.0, self.playfield.width),
            p.y.clamp(0.0, self.playfield.height),
        ))
    }

    /// Check if a screen point lies inside the drawn area
    pub fn contains_view(&self, p: Point) -> bool {
        let size = self.view_size();
        let m = self.view_to_model(p);
        m.x >= -self.margin_x
            && m.y >= -self.margin_y
            && m.x <= size.width - self.margin_x
            && m.y <= size.height - self.margin_y
    }
}

/// Placement along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Just outside the low edge
    Before,
    /// At the cursor
    Inside,
    /// Just outside the high edge
    After,
}

impl Edge {
    fn resolve(self, extent: f64, field: f64, cursor: f64) -> f64 {
        match self {
            Edge::Before => -extent / 2.0,
            Edge::Inside => cursor,
            Edge::After => field + extent / 2.0,
        }
    }

    fn classify(value: f64, field: f64) -> Self {
        if value < 0.0 {
            Edge::Before
        } else if value > field {
            Edge::After
        } else {
            Edge::Inside
        }
    }
}

/// Cell of the 3x3 placement grid laid over the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    Center,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::MiddleLeft,
        Anchor::Center,
        Anchor::MiddleRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    pub fn from_edges(x: Edge, y: Edge) -> Self {
        match (y, x) {
            (Edge::Before, Edge::Before) => Anchor::TopLeft,
            (Edge::Before, Edge::Inside) => Anchor::TopCenter,
            (Edge::Before, Edge::After) => Anchor::TopRight,
            (Edge::Inside, Edge::Before) => Anchor::MiddleLeft,
            (Edge::Inside, Edge::Inside) => Anchor::Center,
            (Edge::Inside, Edge::After) => Anchor::MiddleRight,
            (Edge::After, Edge::Before) => Anchor::BottomLeft,
            (Edge::After, Edge::Inside) => Anchor::BottomCenter,
            (Edge::After, Edge::After) => Anchor::BottomRight,
        }
    }

    /// (horizontal, vertical) placement
    pub fn edges(self) -> (Edge, Edge) {
        match self {
            Anchor::TopLeft => (Edge::Before, Edge::Before),
            Anchor::TopCenter => (Edge::Inside, Edge::Before),
            Anchor::TopRight => (Edge::After, Edge::Before),
            Anchor::MiddleLeft => (Edge::Before, Edge::Inside),
            Anchor::Center => (Edge::Inside, Edge::Inside),
            Anchor::MiddleRight => (Edge::After, Edge::Inside),
            Anchor::BottomLeft => (Edge::Before, Edge::After),
            Anchor::BottomCenter => (Edge::Inside, Edge::After),
            Anchor::BottomRight => (Edge::After, Edge::After),
        }
    }

    /// Cell a model point falls in: the margins are the outer cells
    pub fn for_point(p: Point, playfield: &Playfield) -> Self {
        Self::from_edges(
            Edge::classify(p.x, playfield.width),
            Edge::classify(p.y, playfield.height),
        )
    }

    /// Entity position for a pick in this cell
    ///
    /// Outer cells park a graphic of `size` just past the field edge, the
    /// centre row and column keep the cursor coordinate.
    pub fn resolve(self, size: Size, playfield: &Playfield, cursor: Point) -> Point {
        let (x, y) = self.edges();
        Point::new(
            x.resolve(size.width, playfield.width, cursor.x),
            y.resolve(size.height, playfield.height, cursor.y),
        )
    }
}
