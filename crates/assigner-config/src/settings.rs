//! Persisted node-settings adapter
//!
//! The graph engine stores each node's configuration as a plain structured
//! record on the node (a `serde_json::Value`). These functions convert the
//! typed config to and from that record, preserving field names and the
//! order of `variables` and `groups` exactly.

use serde_json::Value;

use crate::error::Result;
use crate::types::AssignerConfig;

/// Serialize a configuration into the node's settings record
pub fn to_node_data(config: &AssignerConfig) -> Result<Value> {
    Ok(serde_json::to_value(config)?)
}

/// Read a configuration back from the node's settings record
pub fn from_node_data(data: &Value) -> Result<AssignerConfig> {
    Ok(serde_json::from_value(data.clone())?)
}
