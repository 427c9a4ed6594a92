use std::io::{self, Write};

/// Bowl rows go straight to the sink; stem and base are buffered and
/// flushed at the end.
pub fn glass_original(size: i32, out: &mut dyn Write) -> io::Result<bool> {
    let Some(size) = super::checked_size(size) else {
        return Ok(false);
    };

    let max_width = 2 * size - 1;
    let mid = (max_width - 1) / 2;
    let mut bottom = String::new();

    for i in (0..max_width).step_by(2) {
        writeln!(out, "{}{}", " ".repeat(i / 2), "0".repeat(max_width - i))?;
        bottom.push_str(&" ".repeat(mid));
        bottom.push_str("|\n");
    }

    bottom.push_str(&"=".repeat(max_width));
    bottom.push('\n');
    out.write_all(bottom.as_bytes())?;

    Ok(true)
}
