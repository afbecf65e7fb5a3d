// File: crates/scatter-core/src/svg.rs
// Summary: Serialize a scene graph to SVG markup.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::ChartResult;
use crate::scene::{Node, Scene, TextAnchor};

/// Render a scene to a standalone SVG document.
pub fn render_svg(scene: &Scene) -> String {
    let mut svg = String::new();
    let width = scene.width;
    let height = scene.height;

    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    );
    let _ = write!(
        svg,
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        scene.background.to_css()
    );
    for node in &scene.root {
        write_node(&mut svg, node);
    }
    svg.push_str("</svg>");
    svg
}

/// Render and write a scene to `path`, creating parent directories.
pub fn write_svg(scene: &Scene, path: impl AsRef<Path>) -> ChartResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_svg(scene))?;
    Ok(())
}

fn write_node(svg: &mut String, node: &Node) {
    match node {
        Node::Group { id, children } => {
            let _ = write!(svg, "<g id=\"{id}\">");
            for c in children {
                write_node(svg, c);
            }
            svg.push_str("</g>");
        }
        Node::Line { x1, y1, x2, y2, stroke, width } => {
            let _ = write!(
                svg,
                "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\" stroke-width=\"{width:.1}\"/>",
                stroke.to_css()
            );
        }
        Node::Circle { cx, cy, r, fill, opacity } => {
            let _ = write!(
                svg,
                "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.1}\" fill=\"{}\" fill-opacity=\"{opacity:.3}\"/>",
                fill.to_css()
            );
        }
        Node::Text { x, y, content, fill, size, anchor } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let _ = write!(
                svg,
                "<text x=\"{x:.2}\" y=\"{y:.2}\" fill=\"{}\" font-size=\"{size:.0}\" text-anchor=\"{anchor}\" font-family=\"sans-serif\">{}</text>",
                fill.to_css(),
                escape(content)
            );
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
