//! Repartition state store.
//!
//! Holds the last-known inputs, the layout config and the node selection,
//! together with the snapshot and layout derived from them. Every input
//! update recomputes both wholesale; config updates recompute the layout.

use crate::aggregator::aggregate;
use crate::layout::{compute_layout, ChartLayout, LayoutConfig};
use crate::model::{
    seed_assignment, seed_files, seed_nodes, Assignment, FileSize, NodeCapacity, SystemSnapshot,
};
use crate::utils::error::{ConfigError, LookupError};
use log::{debug, error, warn};

/// Owner of the current repartition state
///
/// **Public** - the single source of truth handed to input and rendering
/// layers. Callers serialize updates by holding `&mut RepartitionStore`.
#[derive(Debug, Clone)]
pub struct RepartitionStore {
    // Raw assignment as last supplied; the snapshot empties it when invalid
    assignment: Assignment,
    config: LayoutConfig,
    snapshot: SystemSnapshot,
    layout: ChartLayout,
    selection: Vec<String>,
}

impl RepartitionStore {
    /// Build a store from a complete set of inputs and the default config
    pub fn new(nodes: NodeCapacity, files: FileSize, assignment: Assignment) -> Self {
        Self::build(nodes, files, assignment, LayoutConfig::default())
    }

    /// Build a store with a custom layout config
    ///
    /// # Errors
    /// * `ConfigError::Invalid` - the config fails [`LayoutConfig::validate`]
    pub fn with_config(
        nodes: NodeCapacity,
        files: FileSize,
        assignment: Assignment,
        config: LayoutConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(nodes, files, assignment, config))
    }

    fn build(
        nodes: NodeCapacity,
        files: FileSize,
        assignment: Assignment,
        config: LayoutConfig,
    ) -> Self {
        let snapshot = aggregate(&nodes, &files, &assignment);
        let layout = compute_layout(&snapshot, &config);
        Self {
            assignment,
            config,
            snapshot,
            layout,
            selection: Vec::new(),
        }
    }

    /// Store initialized with the default seed data
    pub fn with_seed() -> Self {
        Self::new(seed_nodes(), seed_files(), seed_assignment())
    }

    /// Replace node capacities, keeping the last-known files and assignment
    pub fn update_nodes(&mut self, nodes: NodeCapacity) {
        let files = self.snapshot.files.clone();
        let assignment = self.assignment.clone();
        self.recompute(nodes, files, assignment);
    }

    /// Replace file sizes, keeping the last-known nodes and assignment
    pub fn update_files(&mut self, files: FileSize) {
        let nodes = self.snapshot.nodes.clone();
        let assignment = self.assignment.clone();
        self.recompute(nodes, files, assignment);
    }

    /// Replace the assignment, keeping the last-known nodes and files
    pub fn update_assignment(&mut self, assignment: Assignment) {
        let nodes = self.snapshot.nodes.clone();
        let files = self.snapshot.files.clone();
        self.recompute(nodes, files, assignment);
    }

    /// Replace all three inputs at once
    pub fn update_inputs(&mut self, nodes: NodeCapacity, files: FileSize, assignment: Assignment) {
        self.recompute(nodes, files, assignment);
    }

    /// Replace the layout config; the snapshot is left untouched
    ///
    /// A rejected config leaves the store as it was.
    ///
    /// # Errors
    /// * `ConfigError::Invalid` - the config fails [`LayoutConfig::validate`]
    pub fn update_config(&mut self, config: LayoutConfig) -> Result<(), ConfigError> {
        if let Err(e) = config.validate() {
            warn!("Rejected layout config: {}", e);
            return Err(e);
        }
        self.config = config;
        self.layout = compute_layout(&self.snapshot, &self.config);
        Ok(())
    }

    /// Go back to the seed data, keeping config and selection
    pub fn reset(&mut self) {
        self.recompute(seed_nodes(), seed_files(), seed_assignment());
    }

    pub fn snapshot(&self) -> &SystemSnapshot {
        &self.snapshot
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Assignment as last supplied, even when the snapshot rejected it
    pub fn input_assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Capacity of a node in the current snapshot
    ///
    /// Unknown ids are logged and returned as `LookupError::UnknownNode`.
    pub fn capacity_of(&self, node_id: &str) -> Result<f64, LookupError> {
        self.snapshot.capacity_of(node_id).map_err(|e| {
            error!("{}", e);
            e
        })
    }

    /// Size of a file in the current snapshot
    ///
    /// Unknown ids are logged and returned as `LookupError::UnknownFile`.
    pub fn size_of(&self, file_id: &str) -> Result<f64, LookupError> {
        self.snapshot.size_of(file_id).map_err(|e| {
            error!("{}", e);
            e
        })
    }

    /// Currently highlighted nodes
    pub fn selected_nodes(&self) -> &[String] {
        &self.selection
    }

    /// Replace the highlighted nodes; ids are stored as given
    pub fn update_selected_nodes(&mut self, nodes: Vec<String>) {
        self.selection = nodes;
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn recompute(&mut self, nodes: NodeCapacity, files: FileSize, assignment: Assignment) {
        debug!("Recomputing snapshot and layout");
        self.snapshot = aggregate(&nodes, &files, &assignment);
        self.assignment = assignment;
        self.layout = compute_layout(&self.snapshot, &self.config);
    }
}
