//! # Gesture-password widget
//!
//! `PasswordGrid` turns a continuous pointer trajectory over a rows×cols
//! node grid into an ordered, duplicate-free sequence of node indices — the
//! password. It is headless: the host feeds it pointer events and reads back
//! node states and the connecting polyline for its own drawing step.
//!
//! One gesture runs pointer-down → pointer-move* → pointer-up:
//!
//! ```rust
//! use gridlock_core::{GridConfig, Rect};
//! use gridlock_widget::PasswordGrid;
//!
//! let mut view = PasswordGrid::new(GridConfig::default(), Rect::new(0.0, 0.0, 320.0, 320.0));
//! let a = view.node_center(1).unwrap();
//! let b = view.node_center(5).unwrap();
//! view.pointer_down(a);
//! view.pointer_moved(b);
//! let entered = view.pointer_up(b).unwrap();
//! assert_eq!(entered.password, "1,5");
//! assert_eq!(view.current_password(), "1,5");
//! ```
//!
//! Password completion is a plain return value (`PasswordEntered`), so the
//! widget is usable without any UI loop; an optional `Rc<dyn Fn(&str)>`
//! listener can be registered on top for push-style hosts. After a failed
//! validation, `show_wrong_password_ui_and_reset_after` paints the selection
//! in the error state, locks out input, and arms a one-shot reset deadline
//! that `tick()` fires against the injected [`Clock`] — hosts poll `tick()`
//! from their frame loop, tests drive a `TestClock` through virtual time.

use std::rc::Rc;

use gridlock_core::codec;
use gridlock_core::hit;
use gridlock_core::{
    Clock, GridConfig, GridModel, LineState, LineStyle, NodeState, PointerEvent, PointerEventKind,
    Rect, SystemClock, Vec2,
};
use web_time::Duration;

mod session;
mod timer;

pub use session::Phase;
use session::Session;
use timer::PendingReset;

/// Reset delay used by the `auto_reset` variants, in seconds.
pub const DEFAULT_RESET_DELAY_SECONDS: f32 = 1.0;

/// Outcome of a completed gesture, produced on pointer-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordEntered {
    /// Canonical comma-separated encoding, e.g. `"1,2,3,6,9"`.
    pub password: String,
    /// The selected node indices in selection order.
    pub sequence: Vec<u16>,
}

pub struct PasswordGrid {
    grid: GridModel,
    line_style: LineStyle,
    line_state: LineState,
    session: Session,
    pending: Option<PendingReset>,
    generation: u64,
    clock: Rc<dyn Clock>,
    on_password: Option<Rc<dyn Fn(&str)>>,
}

impl PasswordGrid {
    pub fn new(config: GridConfig, bounds: Rect) -> Self {
        Self::with_clock(config, bounds, Rc::new(SystemClock))
    }

    /// Build with an explicit time source; tests pass a
    /// [`gridlock_core::TestClock`].
    pub fn with_clock(config: GridConfig, bounds: Rect, clock: Rc<dyn Clock>) -> Self {
        Self {
            grid: GridModel::new(config, bounds),
            line_style: LineStyle::default(),
            line_state: LineState::Normal,
            session: Session::new(),
            pending: None,
            generation: 0,
            clock,
            on_password: None,
        }
    }

    // --- input -----------------------------------------------------------

    /// Dispatch a raw pointer event. Only `Up` can complete a gesture.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<PasswordEntered> {
        match event.event {
            PointerEventKind::Down => {
                self.pointer_down(event.position);
                None
            }
            PointerEventKind::Move => {
                self.pointer_moved(event.position);
                None
            }
            PointerEventKind::Up => self.pointer_up(event.position),
            PointerEventKind::Cancel => {
                self.pointer_cancelled();
                None
            }
        }
    }

    pub fn pointer_down(&mut self, point: Vec2) {
        if self.session.phase == Phase::Locked {
            log::trace!("pointer down ignored while locked");
            return;
        }
        // A fresh session has nothing selected yet, so hit-test against an
        // empty selection even if a finalized one is still on screen.
        let Some(index) = hit::node_at(&self.grid, point, &[]) else {
            return;
        };
        // A new down discards any stale finalized session.
        self.session.clear();
        self.grid.reset_states();
        self.line_state = LineState::Normal;
        self.session.phase = Phase::Tracking;
        self.session.pointer = Some(point);
        self.select(index);
    }

    pub fn pointer_moved(&mut self, point: Vec2) {
        if self.session.phase != Phase::Tracking {
            return;
        }
        self.session.pointer = Some(point);
        let Some(target) = hit::node_at(&self.grid, point, &self.session.sequence) else {
            return;
        };
        if self.session.contains(target) {
            return;
        }
        if self.grid.config().select_points_on_path {
            if let (Some(last), Some(center)) =
                (self.session.last(), self.grid.node_center(target))
            {
                for skipped in hit::pass_through_nodes(&self.grid, last, center) {
                    if skipped != target {
                        self.select(skipped);
                    }
                }
            }
        }
        self.select(target);
    }

    /// Close the gesture. With at least one selection the sequence is
    /// encoded, the listener (if any) is notified, and the selection stays
    /// visible until the next gesture or an explicit clear.
    pub fn pointer_up(&mut self, _point: Vec2) -> Option<PasswordEntered> {
        if self.session.phase != Phase::Tracking {
            return None;
        }
        self.session.pointer = None;
        if self.session.sequence.is_empty() {
            self.session.phase = Phase::Idle;
            return None;
        }
        self.session.phase = Phase::Finalized;
        let password = codec::encode(&self.session.sequence);
        log::debug!("gesture finalized: {} nodes", self.session.sequence.len());
        if let Some(listener) = &self.on_password {
            listener(&password);
        }
        Some(PasswordEntered {
            password,
            sequence: self.session.sequence.to_vec(),
        })
    }

    /// Abort an in-flight gesture without finalizing (e.g. the host lost
    /// the pointer capture).
    pub fn pointer_cancelled(&mut self) {
        if self.session.phase != Phase::Tracking {
            return;
        }
        self.session.clear();
        self.grid.reset_states();
        self.line_state = LineState::Normal;
    }

    /// Re-layout for new bounds (e.g. device rotation). Selection and node
    /// states are preserved.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.grid.set_bounds(bounds);
    }

    fn select(&mut self, index: u16) {
        let cap = self.grid.config().max_node_count;
        if self.session.try_append(index, cap) {
            self.grid.set_node_state(index, NodeState::Selected);
            log::trace!("selected node {index}");
        }
    }

    // --- public operations -----------------------------------------------

    /// Canonical encoding of the current selection, empty when none.
    pub fn current_password(&self) -> String {
        codec::encode(&self.session.sequence)
    }

    /// Discard the selection, reset every node to `Normal`, cancel any
    /// pending reset, and return to `Idle`. Valid from any state.
    pub fn clear_password(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.session.clear();
        self.grid.reset_states();
        self.line_state = LineState::Normal;
    }

    /// Paint the current selection in the error state. Keeps the sequence
    /// and schedules nothing.
    pub fn show_wrong_password_ui(&mut self) {
        if self.session.sequence.is_empty() {
            return;
        }
        for &index in &self.session.sequence {
            self.grid.set_node_state(index, NodeState::Error);
        }
        self.line_state = LineState::Error;
    }

    pub fn show_wrong_password_ui_and_auto_reset(&mut self) {
        self.show_wrong_password_ui_and_reset_after(DEFAULT_RESET_DELAY_SECONDS);
    }

    pub fn show_wrong_password_ui_and_auto_reset_with_end_block(&mut self, end_block: Rc<dyn Fn()>) {
        self.show_wrong_password_ui_and_reset_after_with_end_block(
            DEFAULT_RESET_DELAY_SECONDS,
            end_block,
        );
    }

    /// `show_wrong_password_ui`, then lock out input and arm a one-shot
    /// reset `seconds` away. Re-arming replaces any pending reset (last
    /// call wins). `tick()` fires it.
    pub fn show_wrong_password_ui_and_reset_after(&mut self, seconds: f32) {
        self.arm_reset(seconds, None);
    }

    pub fn show_wrong_password_ui_and_reset_after_with_end_block(
        &mut self,
        seconds: f32,
        end_block: Rc<dyn Fn()>,
    ) {
        self.arm_reset(seconds, Some(end_block));
    }

    fn arm_reset(&mut self, seconds: f32, end_block: Option<Rc<dyn Fn()>>) {
        if self.session.sequence.is_empty() {
            log::debug!("no selection to show as wrong; reset not armed");
            return;
        }
        self.show_wrong_password_ui();
        self.session.phase = Phase::Locked;
        self.generation += 1;
        self.pending = Some(PendingReset {
            deadline: self.clock.now() + Duration::from_secs_f32(seconds.max(0.0)),
            generation: self.generation,
            end_block,
        });
    }

    /// Fire the pending reset if its deadline has passed. Hosts call this
    /// from their frame/event loop; it is a no-op with nothing pending, and
    /// a stale deadline (session already cleared or replaced) is ignored.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        if !self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            return;
        }
        if let Some(pending) = self.pending.take() {
            if pending.generation != self.generation {
                log::trace!("stale reset deadline ignored");
                return;
            }
            self.clear_password();
            if let Some(end_block) = pending.end_block {
                end_block();
            }
        }
    }

    /// Replay a password string as a finalized selection, without pointer
    /// input and without notifying the listener. Invalid tokens are dropped;
    /// a string with no valid tokens leaves the widget untouched.
    pub fn show_gesture_with_password(&mut self, password: &str) {
        let cfg = self.grid.config();
        let decoded = codec::decode(password, cfg.start_tag, cfg.node_count());
        if decoded.is_empty() {
            log::warn!("show_gesture_with_password: no valid indices in input");
            return;
        }
        self.clear_password();
        for &index in &decoded {
            self.grid.set_node_state(index, NodeState::Selected);
        }
        self.session.sequence = decoded.into_iter().collect();
        self.session.phase = Phase::Finalized;
    }

    // --- render queries --------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn node_center(&self, index: u16) -> Option<Vec2> {
        self.grid.node_center(index)
    }

    pub fn node_state(&self, index: u16) -> Option<NodeState> {
        self.grid.node_state(index)
    }

    pub fn node_radius(&self) -> f32 {
        self.grid.node_radius()
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn line_state(&self) -> LineState {
        self.line_state
    }

    pub fn line_style(&self) -> &LineStyle {
        &self.line_style
    }

    pub fn set_line_style(&mut self, style: LineStyle) {
        self.line_style = style;
    }

    /// Points of the connecting line in draw order: selected node centers,
    /// plus the live pointer position while tracking.
    pub fn selection_polyline(&self) -> Vec<Vec2> {
        let mut points: Vec<Vec2> = self
            .session
            .sequence
            .iter()
            .filter_map(|&i| self.grid.node_center(i))
            .collect();
        if self.session.phase == Phase::Tracking
            && let Some(pointer) = self.session.pointer
            && !points.is_empty()
        {
            points.push(pointer);
        }
        points
    }

    // --- listener --------------------------------------------------------

    /// Register a completion listener. Non-owning: the host must call
    /// `clear_on_password` before dropping listener-captured state it cares
    /// about.
    pub fn set_on_password(&mut self, listener: Rc<dyn Fn(&str)>) {
        self.on_password = Some(listener);
    }

    pub fn clear_on_password(&mut self) {
        self.on_password = None;
    }
}
