//! Node registration and dispatch.

use std::sync::Arc;
use lazy_static::lazy_static;
use tracing::{debug, warn};

use crate::commands::{ImageToIconNode, SvgToImageNode};
use crate::core::PluginConfig;
use crate::host::{Node, NodeDescriptor, NodeInputs, NodeOutputs, WorkflowLogger};
use crate::utils::{ConvertError, NodeError};

lazy_static! {
    static ref REGISTRY: NodeRegistry = {
        let config = PluginConfig::load(None).unwrap_or_else(|e| {
            warn!("Falling back to default plugin config: {}", e);
            PluginConfig::default()
        });
        NodeRegistry::with_builtin_nodes(config)
    };
}

/// The process-wide registry holding both built-in nodes.
pub fn registry() -> &'static NodeRegistry {
    &REGISTRY
}

/// Nodes in registration order, addressed by id.
#[derive(Default, Clone)]
pub struct NodeRegistry {
    nodes: Vec<(String, Arc<dyn Node>)>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the SVG and icon converters sharing `config`.
    pub fn with_builtin_nodes(config: PluginConfig) -> Self {
        let mut registry = Self::new();
        registry.register(SvgToImageNode::new(config));
        registry.register(ImageToIconNode::new());
        registry
    }

    /// Registers `node`, replacing any node with the same id.
    pub fn register(&mut self, node: impl Node + 'static) {
        let id = node.descriptor().id;
        let node: Arc<dyn Node> = Arc::new(node);
        match self.nodes.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => {
                debug!("Replacing node '{}'", id);
                slot.1 = node;
            }
            None => {
                debug!("Registered node '{}'", id);
                self.nodes.push((id, node));
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Node>> {
        self.nodes
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, node)| Arc::clone(node))
    }

    pub fn ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn descriptors(&self) -> Vec<NodeDescriptor> {
        self.nodes.iter().map(|(_, node)| node.descriptor()).collect()
    }

    /// Runs the node registered as `id`.
    pub fn execute(
        &self,
        id: &str,
        inputs: &NodeInputs,
        logger: &dyn WorkflowLogger,
    ) -> Result<NodeOutputs, NodeError> {
        let node = self.get(id).ok_or_else(|| {
            NodeError::new(
                format!("Node '{id}'"),
                ConvertError::host(format!("Unknown node: {id}")),
            )
        })?;
        node.execute(inputs, logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{InputKind, OutputSpec, TracingLogger};
    use serde_json::json;

    struct Echo(&'static str);

    impl Node for Echo {
        fn descriptor(&self) -> NodeDescriptor {
            NodeDescriptor {
                id: "echo".into(),
                name: self.0.into(),
                description: String::new(),
                inputs: vec![],
                outputs: vec![OutputSpec::new("value", "Value", "", InputKind::String)],
            }
        }

        fn execute(&self, _: &NodeInputs, _: &dyn WorkflowLogger) -> Result<NodeOutputs, NodeError> {
            Ok(json!({ "value": self.0 }))
        }
    }

    #[test]
    fn builtin_registry_has_both_converters() {
        assert_eq!(registry().ids(), vec!["svg_to_image", "image_to_icon"]);
    }

    #[test]
    fn registering_the_same_id_replaces_in_place() {
        let mut registry = NodeRegistry::new();
        registry.register(Echo("first"));
        registry.register(Echo("second"));
        assert_eq!(registry.ids(), vec!["echo"]);

        let out = registry
            .execute("echo", &NodeInputs::default(), &TracingLogger::new("echo"))
            .unwrap();
        assert_eq!(out["value"], "second");
    }

    #[test]
    fn unknown_node_is_a_host_error() {
        let err = NodeRegistry::new()
            .execute("nope", &NodeInputs::default(), &TracingLogger::new("nope"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Node 'nope' failed: Unknown node: nope");
        assert!(matches!(err.source, ConvertError::Host(_)));
    }
}
