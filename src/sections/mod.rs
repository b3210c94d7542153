//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength and
//! contributes one piece of the final report.

mod entropy;
mod length;
mod variety;

pub use entropy::{entropy_rating, entropy_section};
pub use length::length_section;
pub use variety::character_variety_section;
