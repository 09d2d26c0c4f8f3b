//! Unit tests for the coordinate module

#[cfg(test)]
mod point_tests;
#[cfg(test)]
mod transform_tests;
