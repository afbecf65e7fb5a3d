// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the scatterplot API.

pub mod animate;
pub mod axis;
pub mod chart;
pub mod data;
pub mod error;
pub mod hover;
pub mod load;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod types;

pub use animate::Animator;
pub use axis::Axis;
pub use chart::{RenderOptions, ScatterChart};
pub use data::{DataRow, RawRecord, RowPolicy};
pub use error::{ChartError, ChartResult, LOAD_FAILURE_MESSAGE};
pub use load::LoadOutcome;
pub use scale::LinearScale;
pub use scene::{ChartView, Cursor, MarkId, MarkView, Node, Scene, Tooltip};
pub use theme::{Rgba, Theme};
pub use types::Insets;
