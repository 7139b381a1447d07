//! Shared types used across the tool system.

pub mod tool;
