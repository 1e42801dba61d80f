//! Owned view of a slash command's resolved options.
//!
//! Serenity hands options out as a borrowed tree of subcommand groups and subcommands.
//! Handlers only need the path that was invoked and the leaf values, so the tree is
//! flattened once into [`CommandArgs`].

use serenity::all::{ResolvedOption, ResolvedValue};
use std::collections::HashMap;

use crate::error::{operation::OperationResult, AppError};

/// A single leaf option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Channel(u64),
    Role(u64),
}

/// Invoked subcommand path and option values of one command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandArgs {
    path: Vec<String>,
    values: HashMap<String, OptionValue>,
}

impl CommandArgs {
    /// Flattens the resolved option tree of an interaction.
    pub fn from_resolved(options: Vec<ResolvedOption<'_>>) -> Self {
        let mut args = Self::default();
        args.collect(options);
        args
    }

    fn collect(&mut self, options: Vec<ResolvedOption<'_>>) {
        for option in options {
            let value = match option.value {
                ResolvedValue::SubCommandGroup(inner) | ResolvedValue::SubCommand(inner) => {
                    self.path.push(option.name.to_string());
                    self.collect(inner);
                    continue;
                }
                ResolvedValue::String(s) => OptionValue::String(s.to_string()),
                ResolvedValue::Integer(i) => OptionValue::Integer(i),
                ResolvedValue::Channel(channel) => OptionValue::Channel(channel.id.get()),
                ResolvedValue::Role(role) => OptionValue::Role(role.id.get()),
                _ => continue,
            };
            self.values.insert(option.name.to_string(), value);
        }
    }

    /// Adds a subcommand level to the path.
    #[cfg(test)]
    pub fn subcommand(mut self, name: &str) -> Self {
        self.path.push(name.to_string());
        self
    }

    /// Adds a leaf value.
    #[cfg(test)]
    pub fn with(mut self, name: &str, value: OptionValue) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    /// Subcommand group and subcommand names, outermost first.
    pub fn path(&self) -> Vec<&str> {
        self.path.iter().map(String::as_str).collect()
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(OptionValue::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(OptionValue::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn channel(&self, name: &str) -> Option<u64> {
        match self.values.get(name) {
            Some(OptionValue::Channel(id)) => Some(*id),
            _ => None,
        }
    }

    pub fn role(&self, name: &str) -> Option<u64> {
        match self.values.get(name) {
            Some(OptionValue::Role(id)) => Some(*id),
            _ => None,
        }
    }

    /// Reads an optional integer option that must fit in an `i32`.
    ///
    /// # Returns
    /// - `Ok(None)` - Option not provided
    /// - `Ok(Some(i32))` - Value in range
    /// - `Err(AppError::Validation)` - Value does not fit
    pub fn small_integer(&self, name: &str) -> OperationResult<Option<i32>> {
        self.integer(name)
            .map(|value| {
                i32::try_from(value).map_err(|_| {
                    AppError::Validation(format!("The value of `{}` is out of range.", name))
                })
            })
            .transpose()
    }

    /// Reads a required option Discord should always supply.
    ///
    /// # Returns
    /// - `Ok(T)` - The option value
    /// - `Err(AppError::InternalError)` - Registered definition and handler disagree
    pub fn required<T>(&self, name: &str, value: Option<T>) -> OperationResult<T> {
        value.ok_or_else(|| {
            AppError::InternalError(format!(
                "Missing required option `{}` for {:?}",
                name, self.path
            ))
        })
    }

    /// Reads the `event_id` option.
    ///
    /// Ids outside the `i32` range cannot exist and are reported as missing events.
    pub fn event_id(&self) -> OperationResult<i32> {
        let raw = self.required("event_id", self.integer("event_id"))?;

        i32::try_from(raw).map_err(|_| AppError::NotFound("Event not found.".to_string()))
    }
}
