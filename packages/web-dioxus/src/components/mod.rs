//! Reusable UI components

mod data_panel;
mod loading;

pub use data_panel::*;
pub use loading::*;
