use std::io::{self, Write};

/// One buffer built from the middle out: each bowl row is prepended while
/// the stem lines accumulate behind it, then the base goes on last.
pub fn glass_slick(size: i32, out: &mut dyn Write) -> io::Result<bool> {
    let Some(size) = super::checked_size(size) else {
        return Ok(false);
    };

    let stem = format!("{}|\n", " ".repeat(size - 1));
    let mut glass = String::new();

    for i in (1..=size).rev() {
        let row = format!("{}{}\n", " ".repeat(i - 1), "0".repeat(2 * (size - i) + 1));
        glass.insert_str(0, &row);
        glass.push_str(&stem);
    }

    glass.push_str(&"=".repeat(2 * size - 1));
    glass.push('\n');
    out.write_all(glass.as_bytes())?;

    Ok(true)
}
