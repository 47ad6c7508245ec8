//! Pure transition functions over the assigner configuration
//!
//! Every user action on the panel becomes an [`Intent`]; [`apply`] maps the
//! current config plus an intent to the next config. Inputs are never
//! mutated, and a rejected intent leaves the caller's config untouched.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::types::{AssignerConfig, Group, TypeTag, VariableRef, UNGROUPED_OUTPUT_NAME};
use crate::validation::{find_duplicate, infer_type, is_type_compatible};

/// Which group an edit addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupTarget {
    /// The flat list used while grouping is disabled
    Ungrouped,
    /// A group at this position in the grouped list
    Index(usize),
}

/// A discrete user-initiated request to change the configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Intent {
    /// Switch between the flat and grouped shapes
    SetGroupingEnabled { enabled: bool },
    /// Replace one group's variable list, with an explicit or inferred type
    ReplaceVariablesAndType {
        target: GroupTarget,
        variables: Vec<VariableRef>,
        #[serde(skip_serializing_if = "Option::is_none")]
        output_type: Option<TypeTag>,
    },
    /// Append a new empty group
    AddGroup,
    /// Remove the group at this position
    RemoveGroup { index: usize },
}

/// Apply an intent to a configuration, producing the next configuration
///
/// Pure and synchronous: either the whole transition applies or the error
/// is returned and nothing changed.
pub fn apply(config: &AssignerConfig, intent: Intent) -> Result<AssignerConfig> {
    match intent {
        Intent::SetGroupingEnabled { enabled } => Ok(set_grouping_enabled(config, enabled)),
        Intent::ReplaceVariablesAndType {
            target,
            variables,
            output_type,
        } => replace_variables_and_type(config, target, variables, output_type),
        Intent::AddGroup => Ok(add_group(config)),
        Intent::RemoveGroup { index } => remove_group(config, index),
    }
}

/// Toggle between the flat and grouped shapes
///
/// Enabling seeds a single group from the flat list and leaves the flat list
/// in place, so an untouched enable/disable pair restores it exactly.
/// Disabling reverts to whatever the flat list last held; edits made to the
/// groups while grouping was on are discarded. That loss is the documented
/// contract of the toggle, not an accident.
fn set_grouping_enabled(config: &AssignerConfig, enabled: bool) -> AssignerConfig {
    if enabled == config.grouping_enabled {
        return config.clone();
    }

    let mut next = config.clone();
    next.grouping_enabled = enabled;

    if enabled {
        let seed = Group {
            name: next_group_name(&[]),
            output_type: config.ungrouped_group.effective_type(),
            variables: config.ungrouped_group.variables.clone(),
        };
        next.groups = vec![seed];
        log::debug!(
            "grouping enabled, seeded '{}' with {} variable(s)",
            next.groups[0].name,
            next.groups[0].variables.len()
        );
    } else {
        let grouped: Vec<&VariableRef> =
            config.groups.iter().flat_map(|g| &g.variables).collect();
        let flat: Vec<&VariableRef> = config.ungrouped_group.variables.iter().collect();
        if grouped != flat {
            log::warn!(
                "grouping disabled, reverting to flat list: {} grouped variable(s) discarded",
                grouped.len()
            );
        }
    }

    next
}

/// Replace the targeted group's variables and output type
///
/// With an explicit `output_type`, every variable must match it exactly;
/// mismatches are reported, never dropped. With no explicit type, the type
/// is inferred from the first variable (unset for an empty list).
fn replace_variables_and_type(
    config: &AssignerConfig,
    target: GroupTarget,
    variables: Vec<VariableRef>,
    output_type: Option<TypeTag>,
) -> Result<AssignerConfig> {
    let current = match target {
        GroupTarget::Ungrouped => &config.ungrouped_group,
        GroupTarget::Index(index) => {
            config
                .groups
                .get(index)
                .ok_or(ConfigError::IndexOutOfRange {
                    index,
                    len: config.groups.len(),
                })?
        }
    };

    if let Some(dup) = find_duplicate(&variables) {
        return Err(ConfigError::DuplicateVariable {
            node_id: dup.node_id.clone(),
            variable_name: dup.variable_name.clone(),
        });
    }

    let next_type = match output_type {
        Some(declared) => {
            let offending: Vec<VariableRef> = variables
                .iter()
                .filter(|v| !is_type_compatible(v, declared))
                .cloned()
                .collect();
            if !offending.is_empty() {
                return Err(ConfigError::TypeMismatch {
                    expected: declared,
                    offending,
                });
            }
            Some(declared)
        }
        None => infer_type(&variables),
    };

    let replacement = Group {
        name: current.name.clone(),
        output_type: next_type,
        variables,
    };

    let mut next = config.clone();
    match target {
        GroupTarget::Ungrouped => next.ungrouped_group = replacement,
        GroupTarget::Index(index) => next.groups[index] = replacement,
    }
    Ok(next)
}

/// Append a new empty group, auto-named with the lowest unused "Group N"
fn add_group(config: &AssignerConfig) -> AssignerConfig {
    let mut next = config.clone();
    next.groups.push(Group::new(next_group_name(&next.groups)));
    next
}

/// Remove the group at `index`
///
/// Removing the sole remaining group while grouping is on does not leave an
/// empty grouped shape: it disables grouping and empties the flat list.
fn remove_group(config: &AssignerConfig, index: usize) -> Result<AssignerConfig> {
    if index >= config.groups.len() {
        return Err(ConfigError::IndexOutOfRange {
            index,
            len: config.groups.len(),
        });
    }

    let mut next = config.clone();
    next.groups.remove(index);

    if config.grouping_enabled && next.groups.is_empty() {
        next.grouping_enabled = false;
        next.ungrouped_group = Group::new(UNGROUPED_OUTPUT_NAME);
        log::debug!("last group removed, falling back to empty flat list");
    }

    Ok(next)
}

/// Lowest unused "Group N" name, so removing then re-adding cannot collide
fn next_group_name(groups: &[Group]) -> String {
    let taken: HashSet<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    let mut n = 1;
    loop {
        let candidate = format!("Group {}", n);
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}
