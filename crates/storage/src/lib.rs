#![warn(clippy::pedantic)]

pub mod file;
pub mod json;

#[cfg(test)]
mod tests;

pub use file::JsonStore;
