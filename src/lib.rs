//! FlowTab library exports: the navigation-bar core and its terminal host.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
