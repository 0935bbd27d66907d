//! # primer
//!
//! An annotated, runnable walkthrough of Rust fundamentals.
//!
//! The walkthrough is a fixed sequence of independent demonstration sections
//! (values, operators, control flow, containers, functions, modules, file I/O,
//! the object model, error handling, lazy iterators, function wrapping). Each
//! section produces its observable output as printable lines; a runner
//! collects them into a transcript that renderers serialize to text, JSON,
//! or YAML.

pub mod walkthrough;
