//! Animation system for Slidetab
//!
//! Values are advanced explicitly by the host through frame timestamps, so the
//! animator never reaches back into the state that produced its targets.

mod animation;

pub use animation::*;
