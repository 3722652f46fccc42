// Path: crates/tx/src/system/mod.rs

//! Core, non-optional system collaborators for the admission precheck.

pub mod exemptions;
pub mod validation;
