use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn down(position: Vec2) -> Self {
        Self {
            event: PointerEventKind::Down,
            position,
        }
    }

    pub fn moved(position: Vec2) -> Self {
        Self {
            event: PointerEventKind::Move,
            position,
        }
    }

    pub fn up(position: Vec2) -> Self {
        Self {
            event: PointerEventKind::Up,
            position,
        }
    }

    pub fn cancel(position: Vec2) -> Self {
        Self {
            event: PointerEventKind::Cancel,
            position,
        }
    }
}
