// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming plus the categorical fill palette for marks.

/// 8-bit RGBA color serializable to CSS for SVG output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    /// CSS form: `#rrggbb` when fully opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }
}

/// Named fills the data's categorical color field may reference.
/// Unknown names fall back to `Theme::mark_fallback`.
pub const PALETTE: &[(&str, Rgba)] = &[
    ("steelblue", Rgba::opaque(0x46, 0x82, 0xb4)),
    ("seagreen", Rgba::opaque(0x2e, 0x8b, 0x57)),
    ("goldenrod", Rgba::opaque(0xda, 0xa5, 0x20)),
    ("tomato", Rgba::opaque(0xff, 0x63, 0x47)),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub tooltip_text: Rgba,
    pub failure_text: Rgba,
    pub mark_fallback: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::opaque(18, 18, 20),
            grid: Rgba::opaque(40, 40, 45),
            axis_line: Rgba::opaque(180, 180, 190),
            axis_label: Rgba::opaque(235, 235, 245),
            tick: Rgba::opaque(150, 150, 160),
            tooltip_text: Rgba::opaque(255, 230, 70),
            failure_text: Rgba::opaque(220, 80, 80),
            mark_fallback: Rgba::opaque(64, 160, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::opaque(250, 250, 252),
            grid: Rgba::opaque(230, 230, 235),
            axis_line: Rgba::opaque(60, 60, 70),
            axis_label: Rgba::opaque(20, 20, 30),
            tick: Rgba::opaque(100, 100, 110),
            tooltip_text: Rgba::opaque(30, 60, 120),
            failure_text: Rgba::opaque(200, 60, 60),
            mark_fallback: Rgba::opaque(32, 120, 200),
        }
    }

    /// Resolve a categorical fill name from the palette.
    pub fn fill(&self, name: &str) -> Rgba {
        for (n, c) in PALETTE {
            if n.eq_ignore_ascii_case(name) {
                return *c;
            }
        }
        self.mark_fallback
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
