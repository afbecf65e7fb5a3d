// File: crates/scatter-core/src/hover.rs
// Summary: Per-mark hover state machine driving the tooltip singleton.

use crate::scene::{ChartView, Cursor, MarkId, Tooltip};

impl ChartView {
    /// Topmost mark under the pointer, if any. Later marks win ties, matching
    /// paint order.
    pub fn hit_test(&self, px: f32, py: f32) -> Option<MarkId> {
        self.marks
            .iter()
            .rev()
            .find(|m| {
                let dx = px - m.cx;
                let dy = py - m.cy;
                dx * dx + dy * dy <= m.radius * m.radius
            })
            .map(|m| m.id)
    }

    /// Pointer entered a mark: Idle -> Labeled. The tooltip is a singleton,
    /// so entering a mark replaces whatever label was showing; repeated
    /// enter/leave cycles can never accumulate labels.
    pub fn pointer_enter(&mut self, id: MarkId) {
        let Some(m) = self.mark_mut(id) else { return };
        m.hovered = true;
        let tip = Tooltip {
            mark: m.id,
            x: m.cx,
            y: m.cy - m.radius - 6.0,
            text: m.label.clone(),
        };
        self.tooltip = Some(tip);
        self.cursor = Cursor::Pointer;
    }

    /// Pointer left a mark: Labeled -> Idle. Only removes the tooltip when it
    /// belongs to this mark, so an enter on a neighbor is not clobbered by a
    /// late leave event.
    pub fn pointer_leave(&mut self, id: MarkId) {
        if let Some(m) = self.mark_mut(id) {
            m.hovered = false;
        }
        if self.tooltip.as_ref().is_some_and(|t| t.mark == id) {
            self.tooltip = None;
            self.cursor = Cursor::Default;
        }
    }

    /// Drive enter/leave from a raw pointer position.
    pub fn pointer_move(&mut self, px: f32, py: f32) {
        let hit = self.hit_test(px, py);
        let current = self.tooltip.as_ref().map(|t| t.mark);
        if hit == current {
            return;
        }
        if let Some(id) = current {
            self.pointer_leave(id);
        }
        if let Some(id) = hit {
            self.pointer_enter(id);
        }
    }
}
