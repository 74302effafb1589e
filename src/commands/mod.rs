//! CLI commands for waypath

pub mod dispatch;
pub mod grid;
pub mod route;
pub mod streets;
pub mod trace;
