//! Core pipeline: device registry, template rendering and the session driving them

pub mod registry;
pub mod renderer;
pub mod session;

pub use registry::{build_registry, RegistryOptions};
pub use renderer::{render, resolve_variable, UNRESOLVED_MARKER};
pub use session::{GeneratedFile, Session};
