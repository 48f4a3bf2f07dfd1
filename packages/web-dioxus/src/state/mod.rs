//! Workflow state

pub mod connection;
