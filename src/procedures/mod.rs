//! Procedures: the generic SLS driver.

pub mod solve;
