//! Text User Interface (TUI) utilities.
//!
//! Handles help and listing output for the CLI.

use std::io::{self, Write};

use crate::registry::{Command, CommandRegistry};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print command info box
pub fn print_command_info_box(out: &mut dyn Write, command: &dyn Command) -> io::Result<()> {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Command:   {}", command.name()),
        format!("Category:  {}", command.category()),
        command.description().to_string(),
        format!("Variants:  {}", command.available_variants().join(", ")),
        format!("Default:   {}", command.default_variant()),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    writeln!(out, "┌{}┐", border)?;
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            writeln!(out, "├{}┤", border)?;
        }
        writeln!(
            out,
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        )?;
    }
    writeln!(out, "└{}┘", border)?;
    writeln!(out)
}

/// Print the help message
pub fn print_help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Usage: scratchpad <COMMAND> [-VARIANT] [ARGS...] [--measure<N>]")?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(out, "  --list, -l     List all commands and their variants")?;
    writeln!(out, "  --verify       Check that every variant agrees with its reference")?;
    writeln!(out, "  --help, -h     Show this help message")?;
    writeln!(out)?;
    writeln!(out, "Arguments:")?;
    writeln!(out, "  COMMAND        Command to run (case-insensitive, optional leading --)")?;
    writeln!(out, "  -VARIANT       Variant to use, must directly follow the command")?;
    writeln!(out, "  ARGS           Payload values, each processed independently")?;
    writeln!(out, "  --measure<N>   Last token only: warm up, then time N runs")?;
    writeln!(out)?;
    writeln!(out, "Examples:")?;
    writeln!(out, "  scratchpad --martini 3                 # Draw a size-3 glass")?;
    writeln!(out, "  scratchpad --martini -basic 3 5        # Use the 'basic' variant")?;
    writeln!(out, "  scratchpad --reverser 12345 --measure10 # Time 10 runs")
}

/// Print the list of available commands
pub fn print_available_commands(out: &mut dyn Write, registry: &CommandRegistry) -> io::Result<()> {
    writeln!(out, "Available commands:")?;
    writeln!(out)?;
    for command in registry.all() {
        print_command_info_box(out, command.as_ref())?;
    }
    Ok(())
}
