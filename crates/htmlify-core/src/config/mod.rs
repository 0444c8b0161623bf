//! Configuration loaded once at startup and passed explicitly afterwards

pub mod consts;
pub mod model;

pub use model::{Config, ConfigOverrides, EnvDir};
