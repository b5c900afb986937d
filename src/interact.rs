//! Pointer-driven interaction with a scene: hit testing, hover tracking
//! and guarded drag updates.
//!
//! The geometry core knows nothing about input; this module owns the
//! transient pointer state and applies pointer events to a `Scene`.

use crate::geometry::Point;
use crate::scene::{RectId, Scene};

/// Pointer interaction state, advanced by pointer down/move/up events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Hovering(RectId),
    Dragging(RectId),
}

/// A scene together with the pointer state driving it
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    pub scene: Scene,
    state: PointerState,
}

impl Interaction {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            state: PointerState::Idle,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Grab the rectangle under the pointer, if any
    pub fn pointer_down(&mut self, p: Point) {
        self.state = match self.scene.rect_at(p) {
            Some(id) => PointerState::Dragging(id),
            None => PointerState::Idle,
        };
    }

    /// Advance hover or drag state for a pointer movement.
    ///
    /// A drag moves the grabbed rectangle's center to the pointer unless
    /// the new placement would overlap or crowd the other rectangle, in
    /// which case the rectangle stays where it is (the drag itself remains
    /// active).
    pub fn pointer_move(&mut self, p: Point) {
        if let PointerState::Dragging(id) = self.state {
            if !self.scene.placement_blocked(id, p) {
                self.scene.rect_mut(id).position = p;
            }
        } else {
            self.state = match self.scene.rect_at(p) {
                Some(id) => PointerState::Hovering(id),
                None => PointerState::Idle,
            };
        }
    }

    /// Release any drag. Pointer-leave is handled identically.
    pub fn pointer_up(&mut self) {
        self.state = PointerState::Idle;
    }
}
