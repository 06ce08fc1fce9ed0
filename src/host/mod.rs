//! The AutoTask host surface.
//!
//! The host discovers nodes through the [`PluginManifest`], renders their
//! [`InputSpec`]s as a form, and calls [`Node::execute`] with the collected
//! values and a [`WorkflowLogger`].

mod inputs;
mod logger;
mod manifest;
mod node;
mod registry;

pub use inputs::NodeInputs;
pub use logger::{TracingLogger, WorkflowLogger};
pub use manifest::{manifest, PluginManifest, PLUGIN_DESCRIPTION, PLUGIN_NAME, PLUGIN_TAGS};
pub use node::{InputKind, InputSpec, Node, NodeDescriptor, NodeOutputs, OutputSpec};
pub use registry::{registry, NodeRegistry};
