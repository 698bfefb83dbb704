//! # Grid model
//!
//! Deterministic node layout for a rows×cols gesture-password grid.
//!
//! `GridModel::new` takes a `GridConfig` and a bounding `Rect` and computes
//! the center and shared activation radius of every node. Nodes are square:
//! the diameter is the smaller of the horizontally- and vertically-derived
//! fits inside the padded bounds, and adjacent centers are always exactly
//! `diameter + spacing` apart. `set_bounds` recomputes in place (device
//! rotation) and is idempotent for identical inputs — node *states* survive
//! a re-layout, geometry does not depend on them.
//!
//! Degenerate configurations (bounds smaller than the padding, zero rows)
//! are clamped to safe minimums with a `warn` log instead of failing; this
//! model never produces invalid geometry.

use crate::color::Color;
use crate::geometry::{Insets, Rect, Vec2};

/// Smallest node diameter the layout will produce, in layout units.
pub const MIN_NODE_SIZE: f32 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeState {
    #[default]
    Normal,
    Selected,
    Error,
}

/// State of the connecting polyline as a whole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineState {
    #[default]
    Normal,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Gap between the edges of adjacent nodes.
    pub spacing: f32,
    /// Outer inset of the grid within the bounds.
    pub padding: Insets,
    /// Index of the first node; 1 by convention, 0 also common.
    pub start_tag: u16,
    /// Upper bound on selections in one gesture; clamped into `1..=rows*cols`.
    pub max_node_count: usize,
    /// Credit nodes whose centers the straight path between two touched
    /// nodes crosses, even if the pointer never entered their circle.
    pub select_points_on_path: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            spacing: 24.0,
            padding: Insets::uniform(32.0),
            start_tag: 1,
            max_node_count: 9,
            select_points_on_path: false,
        }
    }
}

impl GridConfig {
    /// Clamp the configuration into its valid domain, logging on changes.
    pub fn normalized(mut self) -> Self {
        if self.rows == 0 || self.cols == 0 {
            log::warn!(
                "grid config has {}x{} nodes; clamping to at least 1x1",
                self.rows,
                self.cols
            );
            self.rows = self.rows.max(1);
            self.cols = self.cols.max(1);
        }
        if self.spacing < 0.0 {
            log::warn!("negative node spacing {}; clamping to 0", self.spacing);
            self.spacing = 0.0;
        }
        let total = self.rows * self.cols;
        if self.max_node_count < 1 || self.max_node_count > total {
            log::warn!(
                "max_node_count {} outside 1..={}; clamping",
                self.max_node_count,
                total
            );
            self.max_node_count = self.max_node_count.clamp(1, total);
        }
        // Node indices are u16; the highest one is start_tag + total - 1.
        let max_start = (u16::MAX as usize).saturating_sub(total - 1);
        if self.start_tag as usize > max_start {
            log::warn!(
                "start_tag {} leaves no room for {} node indices; clamping to {}",
                self.start_tag,
                total,
                max_start
            );
            self.start_tag = max_start as u16;
        }
        self
    }

    pub fn node_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// Stroke style for the connecting line; opaque to the engine, handed to the
/// host's renderer together with the polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub width: f32,
    pub normal_color: Color,
    pub failed_color: Color,
    /// Hosts that only highlight nodes can turn the line off entirely.
    pub draw_lines: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 4.0,
            normal_color: Color::from_hex("#2196F3"),
            failed_color: Color::from_hex("#E53935"),
            draw_lines: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub index: u16,
    pub center: Vec2,
    pub state: NodeState,
}

pub struct GridModel {
    config: GridConfig,
    bounds: Rect,
    diameter: f32,
    nodes: Vec<Node>,
}

impl GridModel {
    pub fn new(config: GridConfig, bounds: Rect) -> Self {
        let config = config.normalized();
        let mut model = Self {
            config,
            bounds,
            diameter: MIN_NODE_SIZE,
            nodes: Vec::new(),
        };
        model.layout();
        model
    }

    /// Recompute node geometry for new bounds. Node states are preserved.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layout();
    }

    fn layout(&mut self) {
        let cfg = &self.config;
        let usable_w = (self.bounds.w - cfg.padding.left - cfg.padding.right).max(0.0);
        let usable_h = (self.bounds.h - cfg.padding.top - cfg.padding.bottom).max(0.0);
        let fit_w = (usable_w - (cfg.cols - 1) as f32 * cfg.spacing) / cfg.cols as f32;
        let fit_h = (usable_h - (cfg.rows - 1) as f32 * cfg.spacing) / cfg.rows as f32;
        let mut diameter = fit_w.min(fit_h);
        if diameter < MIN_NODE_SIZE {
            log::warn!(
                "degenerate grid bounds {:?}; clamping node size {} to {}",
                self.bounds,
                diameter,
                MIN_NODE_SIZE
            );
            diameter = MIN_NODE_SIZE;
        }
        self.diameter = diameter;

        let step = diameter + cfg.spacing;
        let grid_w = cfg.cols as f32 * diameter + (cfg.cols - 1) as f32 * cfg.spacing;
        let grid_h = cfg.rows as f32 * diameter + (cfg.rows - 1) as f32 * cfg.spacing;
        // Center the grid inside the padded rect on the non-limiting axis.
        let origin_x = self.bounds.x + cfg.padding.left + (usable_w - grid_w) / 2.0;
        let origin_y = self.bounds.y + cfg.padding.top + (usable_h - grid_h) / 2.0;

        let count = cfg.node_count();
        if self.nodes.len() != count {
            self.nodes = (0..count)
                .map(|i| Node {
                    index: cfg.start_tag + i as u16,
                    center: Vec2::default(),
                    state: NodeState::Normal,
                })
                .collect();
        }
        for (i, node) in self.nodes.iter_mut().enumerate() {
            let row = i / cfg.cols;
            let col = i % cfg.cols;
            node.center = Vec2::new(
                origin_x + col as f32 * step + diameter / 2.0,
                origin_y + row as f32 * step + diameter / 2.0,
            );
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node_size(&self) -> f32 {
        self.diameter
    }

    /// Activation radius shared by all nodes.
    pub fn node_radius(&self) -> f32 {
        self.diameter / 2.0
    }

    pub fn contains_index(&self, index: u16) -> bool {
        self.slot(index).is_some()
    }

    pub fn node_center(&self, index: u16) -> Option<Vec2> {
        self.slot(index).map(|s| self.nodes[s].center)
    }

    pub fn node_state(&self, index: u16) -> Option<NodeState> {
        self.slot(index).map(|s| self.nodes[s].state)
    }

    pub fn set_node_state(&mut self, index: u16, state: NodeState) {
        if let Some(s) = self.slot(index) {
            self.nodes[s].state = state;
        }
    }

    /// Set every node back to `Normal`.
    pub fn reset_states(&mut self) {
        for node in &mut self.nodes {
            node.state = NodeState::Normal;
        }
    }

    fn slot(&self, index: u16) -> Option<usize> {
        let start = self.config.start_tag;
        if index < start {
            return None;
        }
        let slot = (index - start) as usize;
        (slot < self.nodes.len()).then_some(slot)
    }
}
