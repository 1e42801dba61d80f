//! Business logic layer.
//!
//! Services validate input, enforce the event lifecycle and keep the settings cache
//! consistent with storage. They return [`OperationResult`](crate::error::operation::OperationResult)
//! so every failure carries its outcome kind and user-facing message.

pub mod guild_event;
pub mod guild_settings;

#[cfg(test)]
mod test;
