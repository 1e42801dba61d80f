//! Checks that run before a command reaches the service layer.

pub mod role;
