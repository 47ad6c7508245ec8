//! Core types for the Variable Assigner configuration
//!
//! These types define the node's persisted settings: variable references,
//! typed groups, and the top-level config that switches between the flat
//! (ungrouped) shape and the grouped shape.

use serde::{Deserialize, Serialize};

/// Unique identifier for a node
pub type NodeId = String;

/// The declared type of a variable or group output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    /// Text string
    #[serde(rename = "string")]
    String,
    /// Numeric value
    #[serde(rename = "number")]
    Number,
    /// Boolean value
    #[serde(rename = "boolean")]
    Boolean,
    /// JSON object
    #[serde(rename = "object")]
    Object,
    /// File reference
    #[serde(rename = "file")]
    File,
    /// Array of strings
    #[serde(rename = "array[string]")]
    ArrayString,
    /// Array of numbers
    #[serde(rename = "array[number]")]
    ArrayNumber,
    /// Array of booleans
    #[serde(rename = "array[boolean]")]
    ArrayBoolean,
    /// Array of objects
    #[serde(rename = "array[object]")]
    ArrayObject,
    /// Array of file references
    #[serde(rename = "array[file]")]
    ArrayFile,
}

/// A reference to a variable produced by another node
///
/// Identity is the `(node_id, variable_name)` pair; `value_type` is a
/// derived property resolved by the selection UI upstream of this core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableRef {
    /// ID of the node that produces the variable
    pub node_id: NodeId,
    /// Name of the variable on that node
    pub variable_name: String,
    /// Resolved type of the variable
    pub value_type: TypeTag,
}

impl VariableRef {
    /// Create a new variable reference
    pub fn new(
        node_id: impl Into<String>,
        variable_name: impl Into<String>,
        value_type: TypeTag,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            variable_name: variable_name.into(),
            value_type,
        }
    }

    /// The identity pair used for duplicate detection
    pub fn key(&self) -> (&str, &str) {
        (&self.node_id, &self.variable_name)
    }
}

/// An ordered collection of variable references with one declared output type
///
/// When `output_type` is `None` the type is inferred from the first variable
/// (or stays unset while the list is empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Display name, also used to derive the group's output variable name
    pub name: String,
    /// Declared output type; `None` means inferred from the variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_type: Option<TypeTag>,
    /// Variables collected into this group, in display order
    pub variables: Vec<VariableRef>,
}

impl Group {
    /// Create a new empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output_type: None,
            variables: Vec::new(),
        }
    }

    /// Set the variables for this group
    pub fn with_variables(mut self, variables: Vec<VariableRef>) -> Self {
        self.variables = variables;
        self
    }

    /// Set an explicit output type
    pub fn with_output_type(mut self, output_type: TypeTag) -> Self {
        self.output_type = Some(output_type);
        self
    }

    /// The type this group publishes: the declared type, falling back to the
    /// type of the first variable
    pub fn effective_type(&self) -> Option<TypeTag> {
        self.output_type
            .or_else(|| self.variables.first().map(|v| v.value_type))
    }

    /// Check whether the group holds no variables
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// An output variable the node publishes, as shown by the output widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputVariable {
    /// Variable name downstream nodes see
    pub name: String,
    /// Published type, if one is declared or inferable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<TypeTag>,
}

/// Name of the flat (ungrouped) output variable
pub const UNGROUPED_OUTPUT_NAME: &str = "output";

/// The Variable Assigner node's full persisted configuration
///
/// Both shapes are retained in memory at once so toggling `grouping_enabled`
/// is reversible within a session: the inactive shape keeps whatever it last
/// held. Which one is live is selected by `grouping_enabled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignerConfig {
    /// Whether the grouped shape is active
    pub grouping_enabled: bool,
    /// The flat list used when grouping is disabled
    pub ungrouped_group: Group,
    /// The explicit groups used when grouping is enabled; never empty while
    /// `grouping_enabled` is true
    pub groups: Vec<Group>,
}

impl AssignerConfig {
    /// Configuration for a freshly added node: ungrouped, no variables
    pub fn new() -> Self {
        Self {
            grouping_enabled: false,
            ungrouped_group: Group::new(UNGROUPED_OUTPUT_NAME),
            groups: Vec::new(),
        }
    }

    /// The output variables this node publishes in its current shape
    ///
    /// Ungrouped: a single `output` entry. Grouped: one `{name}.output`
    /// entry per group, in group order.
    pub fn output_variables(&self) -> Vec<OutputVariable> {
        if self.grouping_enabled {
            self.groups
                .iter()
                .map(|g| OutputVariable {
                    name: format!("{}.output", g.name),
                    value_type: g.effective_type(),
                })
                .collect()
        } else {
            vec![OutputVariable {
                name: UNGROUPED_OUTPUT_NAME.to_string(),
                value_type: self.ungrouped_group.effective_type(),
            }]
        }
    }
}

impl Default for AssignerConfig {
    fn default() -> Self {
        Self::new()
    }
}
