//! Utility functions and structures.

pub mod date_time;
