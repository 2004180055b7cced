//! Remote-backed select population.
//!
//! Dropdowns in the editor are filled from controller calls: a plain list
//! method (app names, versions, branches, search results) or a cube's JSON
//! when the options are axis columns. The transport behind [`Controller`]
//! is out of scope here; tests drive these with a canned implementation.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{GridclipError, Result};

/// Controller method whose results are objects carrying a `name` field
/// rather than plain strings.
pub const METHOD_SEARCH: &str = "search";

/// Axis names that hold a cube's invokable methods.
const METHOD_AXIS_NAMES: [&str; 2] = ["method", "methods"];

/// Reply shape of a controller call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallResult {
    pub status: bool,
    pub data: Value,
}

/// Remote controller seam.
pub trait Controller {
    /// Invoke a controller method with JSON params.
    ///
    /// # Errors
    /// Returns an error if the call cannot be made at all; transport-level
    /// failures and controller-level `status: false` replies are distinct.
    fn call(&self, method: &str, params: &Value) -> Result<CallResult>;
}

/// How to populate a select from a controller list method.
#[derive(Debug, Clone, Default)]
pub struct PopulateOptions {
    /// Value to select once populated; absent means a leading blank option.
    pub default_value: Option<String>,
    /// Refetch even when the select already has options.
    pub force_refresh: bool,
    /// Prepend results instead of appending (newest-first lists).
    pub inverted: bool,
    /// Number of options currently in the select.
    pub existing_count: usize,
}

/// Computed contents for a select element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectContent {
    /// Option texts in display order. Empty when the fetch was skipped.
    pub options: Vec<String>,
    /// Whether the option list was refetched (and should replace the DOM's).
    pub refreshed: bool,
    /// Value to select, when a default was requested.
    pub selected: Option<String>,
    /// Whether a blank option leads the list (no default requested).
    pub leading_blank: bool,
}

/// Option text for a JSON element: strings pass through, anything else is
/// rendered as its JSON form.
fn option_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Populate a select from a controller list method.
///
/// The fetch is skipped when the select already has options and no refresh
/// is forced; the default/blank handling still applies. For
/// [`METHOD_SEARCH`] each result object contributes its `name` field.
///
/// # Errors
/// Returns [`GridclipError::Remote`] with the controller's message when the
/// call reports `status: false`.
pub fn populate_select<C>(
    ctrl: &C,
    method: &str,
    params: &Value,
    opts: &PopulateOptions,
) -> Result<SelectContent>
where
    C: Controller + ?Sized,
{
    let mut options = Vec::new();
    let mut refreshed = false;

    if opts.force_refresh || opts.existing_count == 0 {
        let result = ctrl.call(method, params)?;
        if !result.status {
            return Err(GridclipError::Remote(format!(
                "Error calling {}(): {}",
                method,
                option_text(&result.data)
            )));
        }

        let items = result.data.as_array().cloned().unwrap_or_default();
        for item in &items {
            let text = if method == METHOD_SEARCH {
                item.get("name").map(option_text).unwrap_or_default()
            } else {
                option_text(item)
            };
            if opts.inverted {
                options.insert(0, text);
            } else {
                options.push(text);
            }
        }
        refreshed = true;
    }

    Ok(SelectContent {
        options,
        refreshed,
        selected: opts.default_value.clone(),
        leading_blank: opts.default_value.is_none(),
    })
}

/// Which part of a cube's JSON feeds the select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeSearch {
    /// Columns of the axis named `method`/`methods`; options are column values.
    Method,
    /// The axes themselves; options are axis names.
    Axis,
}

/// Type information collected per axis during [`CubeSearch::Axis`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisInfo {
    pub axis_type: String,
    pub value_type: String,
}

/// Contents for a select populated from a cube's JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeSelect {
    /// Option texts in display order, always led by a blank option.
    pub options: Vec<String>,
    /// Axis name to type info; empty unless searching axes.
    pub axis_types: HashMap<String, AxisInfo>,
}

/// Populate a select from a cube's JSON (`getJson` with unresolved refs).
///
/// The controller returns the cube as a JSON *string*; its `axes` array is
/// scanned per `search`.
///
/// # Errors
/// Returns [`GridclipError::Remote`] when the call reports `status: false`,
/// and a JSON error when the payload does not parse.
pub fn populate_select_from_cube<C>(
    ctrl: &C,
    params: &Value,
    search: CubeSearch,
) -> Result<CubeSelect>
where
    C: Controller + ?Sized,
{
    let result = ctrl.call("getJson", params)?;
    if !result.status {
        return Err(GridclipError::Remote(format!(
            "Error getting cube data: {}",
            option_text(&result.data)
        )));
    }

    let payload = result.data.as_str().unwrap_or_default();
    let cube: Value = serde_json::from_str(payload)?;
    let axes = cube
        .get("axes")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    // Method search narrows to the method axis's columns; if no such axis
    // exists the axes themselves are scanned (and contribute no values).
    let items = match search {
        CubeSearch::Method => {
            let method_columns = axes
                .iter()
                .find(|axis| {
                    let name = axis.get("name").and_then(Value::as_str).unwrap_or_default();
                    METHOD_AXIS_NAMES.contains(&name)
                })
                .and_then(|axis| axis.get("columns").and_then(Value::as_array).cloned());
            method_columns.unwrap_or(axes)
        }
        CubeSearch::Axis => axes,
    };

    let mut options = Vec::new();
    let mut axis_types = HashMap::new();
    for item in &items {
        let text = match search {
            CubeSearch::Method => item.get("value").map(option_text).unwrap_or_default(),
            CubeSearch::Axis => {
                let name = item
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                let _ = axis_types.insert(
                    name.clone(),
                    AxisInfo {
                        axis_type: item
                            .get("type")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                        value_type: item
                            .get("valueType")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                    },
                );
                name
            }
        };
        options.push(text);
    }

    Ok(CubeSelect {
        options,
        axis_types,
    })
}
