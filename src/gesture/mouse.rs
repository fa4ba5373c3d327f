use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::gesture::swipe::GestureEvent;

/// Turns terminal mouse events into swipe gesture events.
///
/// A left-button press is only a candidate. The gesture is claimed on the
/// first drag that moves further horizontally than vertically; drags that
/// start out vertical are left alone (they are scrolling, not swiping).
#[derive(Debug, Default, Clone)]
pub struct MouseGestures {
    press: Option<(u16, u16)>,
    claimed: bool,
}

impl MouseGestures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Translate one mouse event. `origin_x` is the column where the row
    /// starts, so emitted coordinates are row-local.
    pub fn translate(&mut self, event: &MouseEvent, origin_x: u16) -> Vec<GestureEvent> {
        let x = f32::from(event.column.saturating_sub(origin_x));
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press = Some((event.column, event.row));
                self.claimed = false;
                Vec::new()
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.claimed {
                    return vec![GestureEvent::Move(x)];
                }
                let Some((px, py)) = self.press else {
                    return Vec::new();
                };
                let dx = (i32::from(event.column) - i32::from(px)).abs();
                let dy = (i32::from(event.row) - i32::from(py)).abs();
                if dx > dy {
                    self.claimed = true;
                    let start = f32::from(px.saturating_sub(origin_x));
                    vec![GestureEvent::Start(start), GestureEvent::Move(x)]
                } else {
                    Vec::new()
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let claimed = self.claimed;
                self.press = None;
                self.claimed = false;
                if claimed {
                    vec![GestureEvent::End(x)]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }
}
