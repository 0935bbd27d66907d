//! The walkthrough's demonstration sections
//!
//! One module per demonstration, in walkthrough order. Each module exposes
//! the functions and types it demonstrates as ordinary public items, plus a
//! `Section` implementation that formats their results into lines.

pub mod containers;
pub mod control_flow;
pub mod decorators;
pub mod errors;
pub mod file_io;
pub mod functions;
pub mod generators;
pub mod modules;
pub mod objects;
pub mod operators;
pub mod values;
