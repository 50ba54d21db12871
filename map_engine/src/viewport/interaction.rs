//! Pointer interaction state for the map viewport.

use map_graph::{NodeId, Point};
use serde::{Deserialize, Serialize};

/// Pointer buttons the controller distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

/// Phases of the drag-pan state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanPhase {
    #[default]
    Idle,

    /// A drag is in progress; `last` is the pointer position of the previous
    /// event, in screen coordinates.
    Panning { last: Point },
}

/// Transient pointer state owned by the viewport controller.
///
/// One instance per viewport session; the controller is the only writer, so
/// a stuck drag cannot outlive the gesture that started it.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub(crate) phase: PanPhase,
    pub(crate) hovered: Option<NodeId>,
}

/// A request handed back to the host instead of acted on by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapIntent {
    /// The user activated a node; the host decides what opening it means.
    NavigateTo(NodeId),
}
