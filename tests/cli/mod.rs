pub mod support;

mod config;
mod grid;
mod logging;
mod route;
mod streets;
