//! Viewport control - pan, zoom, and node picking for the world map.
//!
//! The controller is a small state machine (`Idle -> Panning -> Idle`) plus
//! stateless zoom arithmetic. Hosts translate their toolkit's pointer events
//! into the named transitions here; the controller never calls back into the
//! host, it only mutates the viewport rectangle and reports intents.

mod interaction;

pub use interaction::*;

use map_graph::{MapGraph, NodeId, Point, WorldCanvas};
use serde::{Deserialize, Serialize};

/// Smallest allowed viewport width, world units (deepest zoom-in).
pub const MIN_VIEW_DIM: f32 = 200.0;

/// Widest allowed viewport, as a multiple of the canvas width.
pub const MAX_VIEW_FACTOR: f32 = 3.0;

/// Wheel-notch factor that widens the view.
pub const WHEEL_STEP_OUT: f32 = 1.1;

/// Wheel-notch factor that narrows the view.
pub const WHEEL_STEP_IN: f32 = 0.9;

/// Toolbar zoom-in factor.
pub const BUTTON_ZOOM_IN: f32 = 0.8;

/// Toolbar zoom-out factor.
pub const BUTTON_ZOOM_OUT: f32 = 1.25;

/// The visible window onto the world canvas, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportState {
    pub fn new(origin_x: f32, origin_y: f32, width: f32, height: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// The full canvas, origin at zero.
    pub fn covering(canvas: WorldCanvas) -> Self {
        Self::new(0.0, 0.0, canvas.width, canvas.height)
    }

    /// Render as an SVG `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            self.origin_x, self.origin_y, self.width, self.height
        )
    }
}

/// Translates pointer gestures into viewport changes and node intents.
///
/// One controller per rendering session. Transitions take `&mut self`, so
/// events are serialized by ownership; there is no interior locking.
#[derive(Debug, Clone)]
pub struct ViewportController {
    canvas: WorldCanvas,
    surface_w: f32,
    surface_h: f32,
    view: ViewportState,
    interaction: InteractionState,
}

impl ViewportController {
    /// Create a controller showing the whole canvas.
    ///
    /// The pixel surface defaults to the canvas size until the host reports
    /// its real dimensions via [`set_surface_size`](Self::set_surface_size).
    pub fn new(canvas: WorldCanvas) -> Self {
        Self {
            canvas,
            surface_w: canvas.width,
            surface_h: canvas.height,
            view: ViewportState::covering(canvas),
            interaction: InteractionState::default(),
        }
    }

    /// The canvas this controller was built for.
    pub fn canvas(&self) -> WorldCanvas {
        self.canvas
    }

    /// The current viewport rectangle.
    pub fn view(&self) -> ViewportState {
        self.view
    }

    /// Whether a drag-pan is in progress.
    pub fn is_panning(&self) -> bool {
        matches!(self.interaction.phase, PanPhase::Panning { .. })
    }

    /// The node currently under the pointer, if any.
    pub fn hovered(&self) -> Option<NodeId> {
        self.interaction.hovered
    }

    /// Record the host surface size in pixels.
    ///
    /// Non-finite or non-positive dimensions are ignored; the previous
    /// surface stays in effect.
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            self.surface_w = width;
            self.surface_h = height;
        }
    }

    /// Convert a screen-pixel position into world coordinates under the
    /// current viewport.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            self.view.origin_x + screen.x * self.view.width / self.surface_w,
            self.view.origin_y + screen.y * self.view.height / self.surface_h,
        )
    }

    /// Start a drag-pan.
    ///
    /// Only the primary button pans; other buttons leave the controller
    /// untouched so hosts can bind them elsewhere.
    pub fn begin_pan(&mut self, button: PointerButton, screen: Point) {
        if button == PointerButton::Primary {
            self.interaction.phase = PanPhase::Panning { last: screen };
        }
    }

    /// Continue a drag-pan with a new pointer position.
    ///
    /// The screen delta since the last event converts to world units through
    /// the viewport/surface ratio and moves the origin the opposite way, so
    /// the world follows the pointer. Outside a pan this is a no-op.
    pub fn update_pan(&mut self, screen: Point) {
        if let PanPhase::Panning { last } = self.interaction.phase {
            self.view.origin_x -= (screen.x - last.x) * self.view.width / self.surface_w;
            self.view.origin_y -= (screen.y - last.y) * self.view.height / self.surface_h;
            self.interaction.phase = PanPhase::Panning { last: screen };
        }
    }

    /// Finish a drag-pan.
    pub fn end_pan(&mut self) {
        self.interaction.phase = PanPhase::Idle;
    }

    /// Handle the pointer leaving the map surface: any drag ends and hover
    /// clears, so no gesture survives outside the map.
    pub fn pointer_leave(&mut self) {
        self.interaction.phase = PanPhase::Idle;
        self.interaction.hovered = None;
    }

    /// Zoom by `factor`, keeping the world point under `anchor` fixed on
    /// screen. Factors above one widen the view (zoom out).
    ///
    /// Returns `false` without changing anything when the factor is invalid
    /// or the resulting width would leave the allowed range
    /// (`MIN_VIEW_DIM ..= MAX_VIEW_FACTOR * canvas.width`).
    pub fn zoom_at(&mut self, anchor: Point, factor: f32) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            tracing::trace!(
                target: "map_engine::viewport",
                factor,
                "viewport.zoom.rejected_factor"
            );
            return false;
        }

        let new_width = self.view.width * factor;
        let max_width = self.canvas.width * MAX_VIEW_FACTOR;
        if new_width < MIN_VIEW_DIM || new_width > max_width {
            tracing::trace!(
                target: "map_engine::viewport",
                factor,
                width = self.view.width,
                new_width,
                "viewport.zoom.rejected_clamp"
            );
            return false;
        }

        let new_height = self.view.height * factor;
        let world_anchor = self.screen_to_world(anchor);

        // Keep the anchor at the same surface fraction after scaling.
        self.view.origin_x = world_anchor.x - anchor.x * new_width / self.surface_w;
        self.view.origin_y = world_anchor.y - anchor.y * new_height / self.surface_h;
        self.view.width = new_width;
        self.view.height = new_height;
        true
    }

    /// Zoom by `factor` anchored at the surface center.
    pub fn zoom_centered(&mut self, factor: f32) -> bool {
        let center = Point::new(self.surface_w / 2.0, self.surface_h / 2.0);
        self.zoom_at(center, factor)
    }

    /// Toolbar zoom-in step.
    pub fn zoom_in(&mut self) -> bool {
        self.zoom_centered(BUTTON_ZOOM_IN)
    }

    /// Toolbar zoom-out step.
    pub fn zoom_out(&mut self) -> bool {
        self.zoom_centered(BUTTON_ZOOM_OUT)
    }

    /// Restore the initial framing: origin at zero, viewport = canvas.
    /// Always succeeds, whatever state panning or zooming left behind.
    pub fn reset(&mut self) {
        self.view = ViewportState::covering(self.canvas);
        tracing::trace!(target: "map_engine::viewport", "viewport.reset");
    }

    /// Update hover from a pointer position; returns the node under it.
    ///
    /// Picking happens in world coordinates: the nearest node within
    /// `hit_radius` world units wins. Hover only drives highlighting and
    /// tooltips; it never moves the viewport.
    pub fn hover_at(
        &mut self,
        screen: Point,
        graph: &MapGraph,
        hit_radius: f32,
    ) -> Option<NodeId> {
        let hit = self.node_at(screen, graph, hit_radius);
        self.interaction.hovered = hit;
        hit
    }

    /// Resolve a click into a navigation intent, if it lands on a node.
    pub fn click_at(
        &self,
        screen: Point,
        graph: &MapGraph,
        hit_radius: f32,
    ) -> Option<MapIntent> {
        self.node_at(screen, graph, hit_radius)
            .map(MapIntent::NavigateTo)
    }

    /// Nearest node within `hit_radius` world units of the pointer.
    fn node_at(&self, screen: Point, graph: &MapGraph, hit_radius: f32) -> Option<NodeId> {
        let world = self.screen_to_world(screen);
        let mut best: Option<(NodeId, f32)> = None;

        for node in graph.nodes() {
            let d = world.distance(node.position());
            if d <= hit_radius && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((node.id, d));
            }
        }
        best.map(|(id, _)| id)
    }
}
