//! Output formatting for generated questions

pub mod console;
