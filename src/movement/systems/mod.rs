//! Movement domain: system modules for locomotion updates.

pub(crate) mod grounded;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use grounded::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{apply_jump, apply_planar_movement};
