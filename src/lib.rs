//! Clarity - Guided focus exercises
//!
//! Three short exercises that turn a cluttered head into a clear next step:
//! filtering a brain dump down to three priorities, scoring options against
//! weighted criteria, and explaining a topic back at three levels of depth.
//! Only the chosen exercise survives a restart; exercise progress does not.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
