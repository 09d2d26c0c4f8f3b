//! Unit tests for the console module

#[cfg(test)]
mod prompt_tests;
