//! Shared workflow context

mod context;

pub use context::{use_workflow, WorkflowContext, WorkflowProvider};
