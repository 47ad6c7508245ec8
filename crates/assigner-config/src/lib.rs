//! Assigner Config - configuration state model for the Variable Assigner node
//!
//! The Variable Assigner collects variables produced elsewhere in the
//! workflow graph and republishes them, either as one flat list or as
//! several independently-typed groups. This crate owns the node's persisted
//! configuration and the transitions over it:
//!
//! - Typed, serializable config values ([`AssignerConfig`], [`Group`],
//!   [`VariableRef`])
//! - A pure reducer mapping user intents to the next valid config
//! - Validation of declared output types and duplicate variable refs
//! - Conversion to and from the graph engine's node-settings record
//!
//! The panel that renders this config, string translation, and graph-wide
//! variable resolution live outside this crate; it only consumes resolved
//! variable references.
//!
//! # Example
//!
//! ```
//! use assigner_config::{apply, AssignerConfig, Intent};
//!
//! let config = AssignerConfig::new();
//! let grouped = apply(&config, Intent::SetGroupingEnabled { enabled: true }).unwrap();
//! assert_eq!(grouped.groups.len(), 1);
//! ```

pub mod error;
pub mod reducer;
pub mod settings;
pub mod types;
pub mod validation;

// Re-export key types
pub use error::{ConfigError, Result};
pub use reducer::{apply, GroupTarget, Intent};
pub use settings::{from_node_data, to_node_data};
pub use types::{
    AssignerConfig, Group, OutputVariable, TypeTag, VariableRef, UNGROUPED_OUTPUT_NAME,
};
