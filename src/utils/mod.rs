//! Utility modules

pub mod fs;
pub mod logging;
pub mod validation;
