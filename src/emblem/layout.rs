use crate::foundation::core::{Affine, BezPath, Circle, Line, Point, Rgba8, Vec2};

/// Emblem dimensions, in viewBox units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EmblemMetrics {
    /// ViewBox width.
    pub width: f64,
    /// ViewBox height.
    pub height: f64,
    /// Side of one outer square.
    pub square_width: f64,
    /// Fraction of `square_width` neighbouring squares overlap by.
    pub overlap_ratio: f64,
    /// Stroke width of the squares.
    pub square_stroke_width: f64,
}

impl Default for EmblemMetrics {
    fn default() -> Self {
        Self {
            width: 504.0,
            height: 360.0,
            square_width: 240.0,
            overlap_ratio: 0.2,
            square_stroke_width: 3.3,
        }
    }
}

impl EmblemMetrics {
    /// Overlap between neighbouring squares.
    pub fn overlap(&self) -> f64 {
        self.square_width * self.overlap_ratio
    }

    /// Centre of the viewBox.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Centres of the six outer squares: top row left to right, then bottom row.
    pub fn square_centers(&self) -> [Point; 6] {
        let c = self.center();
        let dx = self.square_width - self.overlap();
        let dy = self.square_width / 2.0 - self.overlap() / 2.0;
        [
            Point::new(c.x - dx, c.y - dy),
            Point::new(c.x, c.y - dy),
            Point::new(c.x + dx, c.y - dy),
            Point::new(c.x - dx, c.y + dy),
            Point::new(c.x, c.y + dy),
            Point::new(c.x + dx, c.y + dy),
        ]
    }

    /// Diamond outline of a square centred on `center`.
    pub fn square_path(&self, center: Point) -> BezPath {
        let h = self.square_width / 2.0;
        let mut path = BezPath::new();
        path.move_to((center.x - h, center.y));
        path.line_to((center.x, center.y - h));
        path.line_to((center.x + h, center.y));
        path.line_to((center.x, center.y + h));
        path.close_path();
        path
    }
}

/// Colors used by the emblem.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Square strokes and fill.
    pub white: Rgba8,
    /// Background and wordmark.
    pub orange: Rgba8,
    /// Light dots.
    pub light_orange_dot: Rgba8,
    /// Dark dots.
    pub dark_orange_dot: Rgba8,
    /// Side leaves.
    pub light_green_leaf: Rgba8,
    /// Leaf clusters.
    pub dark_green_leaf: Rgba8,
    /// Stems.
    pub black_stem: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            white: Rgba8::rgb(0xff, 0xff, 0xff),
            orange: Rgba8::rgb(0xef, 0x5d, 0x23),
            light_orange_dot: Rgba8::rgb(0xf0, 0x82, 0x5c),
            dark_orange_dot: Rgba8::rgb(0xf0, 0x5d, 0x22),
            light_green_leaf: Rgba8::rgb(0xc9, 0xcb, 0x42),
            dark_green_leaf: Rgba8::rgb(0x8d, 0x9a, 0x2e),
            black_stem: Rgba8::rgb(0x19, 0x11, 0x25),
        }
    }
}

/// Mountable units of the emblem. Each owns one stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum ElementKind {
    /// One of the six outer squares, by variant index.
    OuterSquare(u8),
    /// Filled square at the centre.
    CenterSquare,
    /// The lettering group.
    Wordmark,
    /// Twelve decorative dots.
    DotCluster,
    /// Single leaf left of centre.
    LeafLeft,
    /// Single leaf right of centre.
    LeafRight,
    /// Three-leaf cluster above centre.
    TopLeaves,
    /// Three-leaf cluster below centre.
    BottomLeaves,
}

impl ElementKind {
    /// Inner-tier elements in mount order.
    pub const INNER: [ElementKind; 7] = [
        Self::CenterSquare,
        Self::Wordmark,
        Self::DotCluster,
        Self::LeafLeft,
        Self::LeafRight,
        Self::TopLeaves,
        Self::BottomLeaves,
    ];

    /// The six outer squares in variant order.
    pub fn outer() -> impl Iterator<Item = ElementKind> {
        (0..6u8).map(Self::OuterSquare)
    }

    /// Whether this element belongs to the outer ring.
    pub fn is_outer(self) -> bool {
        matches!(self, Self::OuterSquare(_))
    }

    /// Stable label used in logs and stage names.
    pub fn label(self) -> String {
        match self {
            Self::OuterSquare(i) => format!("outer-square-{i}"),
            Self::CenterSquare => "center-square".to_owned(),
            Self::Wordmark => "wordmark".to_owned(),
            Self::DotCluster => "dot-cluster".to_owned(),
            Self::LeafLeft => "leaf-left".to_owned(),
            Self::LeafRight => "leaf-right".to_owned(),
            Self::TopLeaves => "top-leaves".to_owned(),
            Self::BottomLeaves => "bottom-leaves".to_owned(),
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Static geometry of one primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Shape {
    /// Explicit outline.
    Path(BezPath),
    /// Circle.
    Circle(Circle),
    /// Straight stroke.
    Line(Line),
    /// Outline supplied by the host's geometry provider under this key.
    Outline(String),
}

/// Stroke paint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width.
    pub width: f64,
}

/// Fill and stroke of a primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Paint {
    /// Fill color; `None` leaves the shape unfilled.
    pub fill: Option<Rgba8>,
    /// Stroke; `None` draws no outline.
    pub stroke: Option<Stroke>,
}

impl Paint {
    fn fill(color: Rgba8) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    fn stroke(color: Rgba8, width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(Stroke { color, width }),
        }
    }
}

/// One drawable the rendering collaborator mounts and attaches under `path`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Primitive {
    /// Registry path the primitive's handle attaches under.
    pub path: String,
    /// Geometry.
    pub shape: Shape,
    /// Colors.
    pub paint: Paint,
    /// Placement relative to the element's group.
    pub transform: Affine,
    /// Pivot for rotation and scale tweens, in viewBox units.
    pub origin: Option<Point>,
}

impl Primitive {
    fn new(path: impl Into<String>, shape: Shape, paint: Paint) -> Self {
        Self {
            path: path.into(),
            shape,
            paint,
            transform: Affine::IDENTITY,
            origin: None,
        }
    }

    fn transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    fn origin(mut self, origin: Point) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// A mountable element: its group placement plus its primitives.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementLayout {
    /// Which element.
    pub kind: ElementKind,
    /// Group translation in viewBox units.
    pub offset: Vec2,
    /// Primitives in paint order.
    pub primitives: Vec<Primitive>,
}

/// Dot positions relative to the cluster group: `(cx, cy, r, dark)`.
const DOTS: [(f64, f64, f64, bool); 12] = [
    (6.91, 8.38, 6.91, false),
    (96.67, 66.42, 6.91, false),
    (17.92, 17.92, 3.62, true),
    (6.91, 21.54, 2.3, true),
    (108.02, 83.52, 2.3, true),
    (25.32, 61.98, 2.3, false),
    (20.22, 71.52, 2.3, false),
    (104.4, 7.73, 7.73, true),
    (6.91, 67.41, 5.43, true),
    (91.58, 16.93, 2.63, false),
    (101.11, 24.0, 4.46, true),
    (112.46, 66.42, 4.46, true),
];

const STEM_WIDTH: f64 = 1.2;
const WORDMARK_STROKE_WIDTH: f64 = 0.2;

/// Layout of `kind` for the given metrics and palette.
pub fn element_layout(
    kind: ElementKind,
    metrics: &EmblemMetrics,
    palette: &Palette,
) -> ElementLayout {
    let c = metrics.center();
    let stem = Paint::stroke(palette.black_stem, STEM_WIDTH);
    let (offset, primitives) = match kind {
        ElementKind::OuterSquare(i) => {
            let center = metrics.square_centers()[usize::from(i) % 6];
            let square = Primitive::new(
                "path",
                Shape::Path(metrics.square_path(center)),
                Paint::stroke(palette.white, metrics.square_stroke_width),
            )
            .origin(center);
            (Vec2::ZERO, vec![square])
        }
        ElementKind::CenterSquare => {
            let square = Primitive::new(
                "path",
                Shape::Path(metrics.square_path(c)),
                Paint {
                    fill: Some(palette.white),
                    stroke: Some(Stroke {
                        color: palette.white,
                        width: metrics.square_stroke_width,
                    }),
                },
            )
            .origin(c);
            (Vec2::ZERO, vec![square])
        }
        ElementKind::Wordmark => {
            let group = Primitive::new(
                "g",
                Shape::Outline("wordmark".to_owned()),
                Paint {
                    fill: Some(palette.orange),
                    stroke: Some(Stroke {
                        color: palette.orange,
                        width: WORDMARK_STROKE_WIDTH,
                    }),
                },
            )
            .origin(c);
            (Vec2::new(c.x - 37.0, wordmark_translate_y(metrics)), vec![group])
        }
        ElementKind::DotCluster => {
            let dots = DOTS
                .iter()
                .enumerate()
                .map(|(i, &(cx, cy, r, dark))| {
                    let color = if dark {
                        palette.dark_orange_dot
                    } else {
                        palette.light_orange_dot
                    };
                    Primitive::new(
                        format!("circles.{i}"),
                        Shape::Circle(Circle::new((cx, cy), r)),
                        Paint::fill(color),
                    )
                })
                .collect();
            (Vec2::new(c.x - 57.0, c.y - 41.0), dots)
        }
        ElementKind::LeafLeft | ElementKind::LeafRight => {
            let left = kind == ElementKind::LeafLeft;
            let (key, line, dx) = if left {
                ("leaf-left", Line::new((3.12, 13.75), (47.35, 13.75)), -92.0)
            } else {
                ("leaf-right", Line::new((44.23, 13.75), (0.0, 13.75)), 44.0)
            };
            let prims = vec![
                Primitive::new(
                    "leaf",
                    Shape::Outline(key.to_owned()),
                    Paint::fill(palette.light_green_leaf),
                ),
                Primitive::new("stem", Shape::Line(line), stem),
            ];
            (Vec2::new(c.x + dx, c.y - 11.5), prims)
        }
        ElementKind::TopLeaves | ElementKind::BottomLeaves => {
            let top = kind == ElementKind::TopLeaves;
            let prefix = if top { "top" } else { "bottom" };
            let (left_m, right_m, dy) = if top {
                (
                    [0.6979, -0.7162, 0.7162, 0.6979, -20.7398, 46.8815],
                    [0.7162, -0.6979, 0.6979, 0.7162, -28.1778, 26.7582],
                    -81.0,
                )
            } else {
                (
                    [0.6979, -0.7162, 0.7162, 0.6979, -10.7881, 20.4203],
                    [0.7162, -0.6979, 0.6979, 0.7162, -3.2218, 38.0745],
                    12.0,
                )
            };
            let mut prims: Vec<Primitive> = (0..3)
                .map(|i| {
                    Primitive::new(
                        format!("leafs.{i}"),
                        Shape::Outline(format!("{prefix}-leaf-{i}")),
                        Paint::fill(palette.dark_green_leaf),
                    )
                })
                .collect();
            prims.push(
                Primitive::new(
                    "leftStem",
                    Shape::Outline(format!("{prefix}-left-stem")),
                    stem,
                )
                .transform(Affine::new(left_m)),
            );
            prims.push(Primitive::new(
                "centerStem",
                Shape::Outline(format!("{prefix}-center-stem")),
                stem,
            ));
            prims.push(
                Primitive::new(
                    "rightStem",
                    Shape::Outline(format!("{prefix}-right-stem")),
                    stem,
                )
                .transform(Affine::new(right_m)),
            );
            (Vec2::new(c.x - 35.0, c.y + dy), prims)
        }
    };
    ElementLayout {
        kind,
        offset,
        primitives,
    }
}

/// Vertical placement of the wordmark group.
pub fn wordmark_translate_y(metrics: &EmblemMetrics) -> f64 {
    metrics.height / 2.0 - 2.0
}

#[cfg(test)]
#[path = "../../tests/unit/emblem/layout.rs"]
mod tests;
