//! External playlist generator invocation

pub mod command;
pub mod engine;
pub mod invoker;

pub use command::{GeneratorCommand, PlaylistRequest};
pub use engine::{GenerateResult, PlaylistEngine};
pub use invoker::{DryRunInvoker, Invoker, ProcessInvoker};
