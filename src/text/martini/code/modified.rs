use std::io::{self, Write};

/// Two buffers filled in the same loop: bowl on top, stem and base below.
pub fn glass_modified(size: i32, out: &mut dyn Write) -> io::Result<bool> {
    let Some(size) = super::checked_size(size) else {
        return Ok(false);
    };

    let max_width = 2 * size - 1;
    let mid = (max_width - 1) / 2;
    let mut top = String::new();
    let mut bottom = String::new();

    for i in (0..max_width).step_by(2) {
        top.push_str(&" ".repeat(i / 2));
        top.push_str(&"0".repeat(max_width - i));
        top.push('\n');

        bottom.push_str(&" ".repeat(mid));
        bottom.push_str("|\n");
    }
    bottom.push_str(&"=".repeat(max_width));
    bottom.push('\n');

    out.write_all(top.as_bytes())?;
    out.write_all(bottom.as_bytes())?;

    Ok(true)
}
