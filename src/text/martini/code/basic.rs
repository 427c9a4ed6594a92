use std::io::{self, Write};

/// No buffering: one pass for the bowl, a second for stem and base.
pub fn glass_basic(size: i32, out: &mut dyn Write) -> io::Result<bool> {
    let Some(size) = super::checked_size(size) else {
        return Ok(false);
    };

    let max_width = 2 * size - 1;
    let mid = (max_width - 1) / 2;

    for i in (0..max_width).step_by(2) {
        writeln!(out, "{}{}", " ".repeat(i / 2), "0".repeat(max_width - i))?;
    }
    for _ in (0..max_width).step_by(2) {
        writeln!(out, "{}|", " ".repeat(mid))?;
    }
    writeln!(out, "{}", "=".repeat(max_width))?;

    Ok(true)
}
