//! Tool boundary for hosting agent runtimes
//!
//! Each operation is a plain function plus an explicit descriptor (name,
//! parameters with types and defaults, description) so the schema is data
//! that can be listed, serialized and tested.

/// Tool metadata and argument resolution
pub mod descriptor;
/// Invocation of tools by name
pub mod registry;

pub use descriptor::{ALL_TOOLS, ParameterKind, ParameterSpec, ToolDescriptor};
pub use registry::{ToolOutput, ToolRegistry};
