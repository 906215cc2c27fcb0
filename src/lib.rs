//! Reference backend and terminal client of the billboard dashboard.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod handlers;
pub mod router;
pub mod schemas;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;
