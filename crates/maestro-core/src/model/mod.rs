//! Domain model types

pub mod entity;

pub use entity::{Entity, ATTR_MAX};
