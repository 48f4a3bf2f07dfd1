//! Page components

mod connect;

pub use connect::Connect;
