//! Guitar Trainer library exports for testing

pub mod catalog;
pub mod core;
pub mod obs;
pub mod tui;

#[cfg(test)]
pub mod test_support;
