//! Shared utilities: unit conversions and XML text handling.

pub mod unit;
pub mod xml;

pub use unit::{EMUS_PER_INCH, EMUS_PER_PT, inches, pt_to_emu};
pub use xml::escape_xml;
