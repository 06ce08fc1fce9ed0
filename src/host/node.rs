//! Node trait and the schema types the host renders as a form.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::host::{NodeInputs, WorkflowLogger};
use crate::utils::NodeError;

/// Value kinds the host's manifest schema understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InputKind {
    String,
    Int,
    Bool,
    Combo,
    List,
}

/// One named input option of a node.
///
/// `name` is not part of the entry; it becomes the key in the descriptor's map.
#[derive(Debug, Clone, Serialize)]
pub struct InputSpec {
    #[serde(skip)]
    pub name: String,
    pub label: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InputKind,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Allowed values for [`InputKind::Combo`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl InputSpec {
    pub fn new(name: &str, label: &str, description: &str, kind: InputKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            kind,
            required: false,
            default: None,
            options: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }
}

/// One named output of a node.
#[derive(Debug, Clone, Serialize)]
pub struct OutputSpec {
    #[serde(skip)]
    pub name: String,
    pub label: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InputKind,
}

impl OutputSpec {
    pub fn new(name: &str, label: &str, description: &str, kind: InputKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            kind,
        }
    }
}

/// Static description of a node, published in the plugin manifest.
///
/// `inputs` and `outputs` serialize as JSON objects keyed by option name,
/// in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct NodeDescriptor {
    /// Stable machine name used to invoke the node
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "keyed_by_name")]
    pub inputs: Vec<InputSpec>,
    #[serde(serialize_with = "keyed_by_name")]
    pub outputs: Vec<OutputSpec>,
}

trait Named {
    fn name(&self) -> &str;
}

impl Named for InputSpec {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for OutputSpec {
    fn name(&self) -> &str {
        &self.name
    }
}

fn keyed_by_name<T, S>(specs: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    T: Named + Serialize,
    S: Serializer,
{
    serializer.collect_map(specs.iter().map(|spec| (spec.name(), spec)))
}

/// JSON object a node hands back to the host.
pub type NodeOutputs = Value;

/// A command the host can run.
///
/// `execute` is synchronous and runs to completion on the caller's thread.
pub trait Node: Send + Sync {
    fn descriptor(&self) -> NodeDescriptor;

    fn execute(&self, inputs: &NodeInputs, logger: &dyn WorkflowLogger) -> Result<NodeOutputs, NodeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_schema_is_keyed_by_option_name_in_order() {
        let descriptor = NodeDescriptor {
            id: "resize".into(),
            name: "Resize".into(),
            description: String::new(),
            inputs: vec![
                InputSpec::new("width", "Width", "Pixels", InputKind::Int).required(),
                InputSpec::new("mode", "Mode", "Fit mode", InputKind::Combo)
                    .with_default("fit")
                    .with_options(&["fit", "fill"]),
                InputSpec::new("alpha", "Alpha", "Keep alpha", InputKind::Bool),
            ],
            outputs: vec![OutputSpec::new("output_file", "Output", "Written file", InputKind::String)],
        };

        let json = serde_json::to_value(&descriptor).unwrap();
        let inputs = json["inputs"].as_object().unwrap();
        assert_eq!(inputs.keys().collect::<Vec<_>>(), vec!["width", "mode", "alpha"]);
        assert_eq!(
            json["inputs"]["mode"],
            json!({
                "label": "Mode",
                "description": "Fit mode",
                "type": "COMBO",
                "required": false,
                "default": "fit",
                "options": ["fit", "fill"],
            })
        );
        assert_eq!(json["inputs"]["width"]["required"], true);
        assert_eq!(json["outputs"]["output_file"]["type"], "STRING");
    }
}
