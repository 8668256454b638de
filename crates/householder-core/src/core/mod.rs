//! Core types shared by every module of the crate.

pub mod error;
pub mod types;
