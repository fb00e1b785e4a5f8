//! Output stage: everything that touches the generated file.
pub mod python;
