//! Command registry and driver dispatch.
//!
//! Commands are registered once at startup. Resolving a command token plus
//! an optional variant token yields a [`Driver`], a closed set of bound
//! (command, variant) pairs the harness can run.

use tracing::debug;

use crate::config::ScratchConfig;
use crate::error::{CommandError, Fault};
use crate::math::reverser::{Reverser, ReverserCommand};
use crate::text::martini::{Martini, MartiniCommand};
use crate::utils::console::Console;
use crate::utils::harness::Workload;

/// Trait that all registered commands must implement
pub trait Command: Send + Sync {
    /// Name used on the command line (e.g., "martini")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "math", "text")
    fn category(&self) -> &'static str;

    /// Get list of selectable variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Variant used when none is given
    fn default_variant(&self) -> &'static str;

    /// Bind a driver to one of `available_variants()` (matched case-insensitively)
    fn bind(&self, variant: &str, config: &ScratchConfig) -> Option<Driver>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<(), String>;
}

/// A command bound to one of its variants
#[derive(Clone, Copy, Debug)]
pub enum Driver {
    Reverser(Reverser),
    Martini(Martini),
}

impl Driver {
    pub fn command_name(&self) -> &'static str {
        match self {
            Driver::Reverser(_) => ReverserCommand.name(),
            Driver::Martini(_) => MartiniCommand.name(),
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Driver::Reverser(r) => r.method().name(),
            Driver::Martini(m) => m.method().name(),
        }
    }
}

impl Workload for Driver {
    fn run(&self, args: &[String], console: &mut Console) -> Result<(), Fault> {
        match self {
            Driver::Reverser(r) => r.run(args, console),
            Driver::Martini(m) => m.run(args, console),
        }
    }
}

/// Registry of all commands
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command
    pub fn register<C: Command + 'static>(&mut self, command: C) {
        self.commands.push(Box::new(command));
    }

    /// Get all registered commands
    pub fn all(&self) -> &[Box<dyn Command>] {
        &self.commands
    }

    /// Find command by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .map(|c| c.as_ref())
    }

    /// List command names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// Resolve a command token and optional variant token into a driver.
    ///
    /// Leading `-` characters on the command token are ignored; a single
    /// leading `-` on the variant token is stripped. Errors carry the raw token.
    pub fn resolve(
        &self,
        command_token: &str,
        variant_token: Option<&str>,
        config: &ScratchConfig,
    ) -> Result<Driver, CommandError> {
        let command = self
            .find(command_token.trim_start_matches('-'))
            .ok_or_else(|| CommandError::UnknownCommand(command_token.to_string()))?;

        let driver = match variant_token {
            None => command.bind(command.default_variant(), config),
            Some(token) => {
                let name = token.strip_prefix('-').unwrap_or(token);
                command.bind(name, config)
            }
        };

        let driver = driver.ok_or_else(|| {
            CommandError::UnknownVariant(variant_token.unwrap_or_default().to_string())
        })?;
        debug!(
            command = driver.command_name(),
            variant = driver.variant_name(),
            "resolved driver"
        );
        Ok(driver)
    }

    /// Run every command's verification, stopping at the first failure
    pub fn verify_all(&self) -> Result<(), CommandError> {
        for command in &self.commands {
            command
                .verify()
                .map_err(|reason| CommandError::Verification {
                    command: command.name(),
                    reason,
                })?;
        }
        Ok(())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all commands
pub fn build_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register(ReverserCommand);
    registry.register(MartiniCommand);

    registry
}
