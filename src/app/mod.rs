//! Application core — pure domain logic, zero direct I/O.
//!
//! The alarm control loop and the door watch. All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod door_watch;
pub mod events;
pub mod ports;
pub mod service;
