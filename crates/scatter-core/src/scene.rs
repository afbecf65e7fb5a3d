// File: crates/scatter-core/src/scene.rs
// Summary: Retained mark view-models and the scene graph they render into.

use tracing::error;

use crate::axis::Axis;
use crate::chart::{RenderOptions, ScatterChart};
use crate::error::LOAD_FAILURE_MESSAGE;
use crate::load::LoadOutcome;
use crate::scale::LinearScale;
use crate::theme::Rgba;
use crate::types::{linspace, PlotRect};

pub type MarkId = usize;

/// Retained view-model for one circle mark. Positions are resolved once
/// from the scales; interaction and animation mutate `opacity`/`hovered`
/// and the next `render()` reflects the change.
#[derive(Clone, Debug)]
pub struct MarkView {
    pub id: MarkId,
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub fill: Rgba,
    pub opacity: f32,
    pub label: String,
    pub hovered: bool,
}

/// The single floating label. At most one exists at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub mark: MarkId,
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Scene graph node. The SVG writer serializes these without further layout.
#[derive(Clone, Debug)]
pub enum Node {
    Group {
        id: &'static str,
        children: Vec<Node>,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        width: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Rgba,
        opacity: f32,
    },
    Text {
        x: f32,
        y: f32,
        content: String,
        fill: Rgba,
        size: f32,
        anchor: TextAnchor,
    },
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub background: Rgba,
    pub root: Vec<Node>,
}

impl Scene {
    pub fn circle_count(&self) -> usize {
        fn walk(nodes: &[Node], n: &mut usize) {
            for node in nodes {
                match node {
                    Node::Circle { .. } => *n += 1,
                    Node::Group { children, .. } => walk(children, n),
                    _ => {}
                }
            }
        }
        let mut n = 0;
        walk(&self.root, &mut n);
        n
    }

    pub fn text_contents(&self) -> Vec<&str> {
        fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a str>) {
            for node in nodes {
                match node {
                    Node::Text { content, .. } => out.push(content.as_str()),
                    Node::Group { children, .. } => walk(children, out),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.root, &mut out);
        out
    }
}

/// Retained view of the whole chart surface: marks, the tooltip singleton,
/// the cursor affordance, or the failure message when the load did not settle
/// successfully. `render()` regenerates the scene from this state, so no
/// caller ever mutates the surface directly.
pub struct ChartView {
    pub marks: Vec<MarkView>,
    pub tooltip: Option<Tooltip>,
    pub cursor: Cursor,
    pub failure: Option<String>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub opts: RenderOptions,
}

impl ChartView {
    /// The single dispatch point for the load continuation. Success builds
    /// mark view-models; failure yields a view whose scene is one static
    /// text message and nothing else.
    pub fn from_outcome(outcome: LoadOutcome, opts: &RenderOptions) -> Self {
        match outcome {
            LoadOutcome::Loaded(rows) => {
                let chart = ScatterChart::from_rows(rows);
                Self::from_chart(&chart, opts)
            }
            LoadOutcome::Failed(e) => {
                error!(error = %e, "data load failed");
                Self::failed(LOAD_FAILURE_MESSAGE, opts)
            }
        }
    }

    pub fn from_chart(chart: &ScatterChart, opts: &RenderOptions) -> Self {
        let rect = PlotRect::from_surface(opts.width, opts.height, &opts.insets);
        let sx = LinearScale::for_x(&chart.x_axis, &rect);
        let sy = LinearScale::for_y(&chart.y_axis, &rect);

        let marks = chart
            .rows
            .iter()
            .enumerate()
            .map(|(id, row)| MarkView {
                id,
                cx: sx.to_px(row.x),
                cy: sy.to_px(row.y),
                radius: opts.mark_radius,
                fill: opts.theme.fill(&row.fill),
                opacity: opts.mark_opacity,
                label: row.label.clone(),
                hovered: false,
            })
            .collect();

        Self {
            marks,
            tooltip: None,
            cursor: Cursor::Default,
            failure: None,
            x_axis: chart.x_axis.clone(),
            y_axis: chart.y_axis.clone(),
            opts: *opts,
        }
    }

    pub fn failed(message: &str, opts: &RenderOptions) -> Self {
        Self {
            marks: Vec::new(),
            tooltip: None,
            cursor: Cursor::Default,
            failure: Some(message.to_string()),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            opts: *opts,
        }
    }

    /// Drop a mark's view-model. The caller is responsible for cancelling
    /// its animation task as well (`Animator::remove_mark`).
    pub fn remove_mark(&mut self, id: MarkId) {
        self.marks.retain(|m| m.id != id);
        if self.tooltip.as_ref().is_some_and(|t| t.mark == id) {
            self.tooltip = None;
            self.cursor = Cursor::Default;
        }
    }

    pub fn mark(&self, id: MarkId) -> Option<&MarkView> {
        self.marks.iter().find(|m| m.id == id)
    }

    pub(crate) fn mark_mut(&mut self, id: MarkId) -> Option<&mut MarkView> {
        self.marks.iter_mut().find(|m| m.id == id)
    }

    /// Reconcile the retained state into a fresh scene graph.
    pub fn render(&self) -> Scene {
        let opts = &self.opts;
        let theme = &opts.theme;

        if let Some(msg) = &self.failure {
            return Scene {
                width: opts.width,
                height: opts.height,
                background: theme.background,
                root: vec![Node::Text {
                    x: opts.width as f32 * 0.5,
                    y: opts.height as f32 * 0.5,
                    content: msg.clone(),
                    fill: theme.failure_text,
                    size: 16.0,
                    anchor: TextAnchor::Middle,
                }],
            };
        }

        let rect = PlotRect::from_surface(opts.width, opts.height, &opts.insets);
        let mut root = Vec::new();

        if opts.draw_grid {
            root.push(Node::Group { id: "grid", children: grid_lines(&rect, theme.grid) });
        }
        root.push(Node::Group {
            id: "axes",
            children: axes_nodes(&rect, &self.x_axis, &self.y_axis, opts),
        });

        let circles = self
            .marks
            .iter()
            .map(|m| Node::Circle {
                cx: m.cx,
                cy: m.cy,
                r: m.radius,
                fill: m.fill,
                opacity: m.opacity,
            })
            .collect();
        root.push(Node::Group { id: "marks", children: circles });

        if let Some(t) = &self.tooltip {
            root.push(Node::Group {
                id: "tooltip",
                children: vec![Node::Text {
                    x: t.x,
                    y: t.y,
                    content: t.text.clone(),
                    fill: theme.tooltip_text,
                    size: 12.0,
                    anchor: TextAnchor::Middle,
                }],
            });
        }

        Scene {
            width: opts.width,
            height: opts.height,
            background: theme.background,
            root,
        }
    }
}

fn grid_lines(rect: &PlotRect, stroke: Rgba) -> Vec<Node> {
    let mut out = Vec::new();
    for x in linspace(rect.left as f64, rect.right as f64, 10) {
        out.push(Node::Line {
            x1: x as f32,
            y1: rect.top,
            x2: x as f32,
            y2: rect.bottom,
            stroke,
            width: 1.0,
        });
    }
    for y in linspace(rect.top as f64, rect.bottom as f64, 6) {
        out.push(Node::Line {
            x1: rect.left,
            y1: y as f32,
            x2: rect.right,
            y2: y as f32,
            stroke,
            width: 1.0,
        });
    }
    out
}

fn axes_nodes(rect: &PlotRect, x_axis: &Axis, y_axis: &Axis, opts: &RenderOptions) -> Vec<Node> {
    let theme = &opts.theme;
    let mut out = vec![
        Node::Line {
            x1: rect.left,
            y1: rect.bottom,
            x2: rect.right,
            y2: rect.bottom,
            stroke: theme.axis_line,
            width: 1.5,
        },
        Node::Line {
            x1: rect.left,
            y1: rect.top,
            x2: rect.left,
            y2: rect.bottom,
            stroke: theme.axis_line,
            width: 1.5,
        },
    ];

    let sx = LinearScale::for_x(x_axis, rect);
    let sy = LinearScale::for_y(y_axis, rect);

    for v in linspace(x_axis.min, x_axis.max, 5) {
        out.push(Node::Text {
            x: sx.to_px(v),
            y: rect.bottom + 18.0,
            content: tick_label(v),
            fill: theme.tick,
            size: 11.0,
            anchor: TextAnchor::Middle,
        });
    }
    for v in linspace(y_axis.min, y_axis.max, 5) {
        out.push(Node::Text {
            x: rect.left - 8.0,
            y: sy.to_px(v) + 4.0,
            content: tick_label(v),
            fill: theme.tick,
            size: 11.0,
            anchor: TextAnchor::End,
        });
    }

    out.push(Node::Text {
        x: rect.right,
        y: rect.bottom + 36.0,
        content: x_axis.label.clone(),
        fill: theme.axis_label,
        size: 13.0,
        anchor: TextAnchor::End,
    });
    out.push(Node::Text {
        x: rect.left,
        y: rect.top - 8.0,
        content: y_axis.label.clone(),
        fill: theme.axis_label,
        size: 13.0,
        anchor: TextAnchor::Start,
    });

    out
}

fn tick_label(v: f64) -> String {
    if v.abs() >= 100.0 || v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}
