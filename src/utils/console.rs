//! Console output sinks.
//!
//! Drivers never touch `stdout`/`stderr` directly: they write through a
//! [`Console`], which lets the harness swap the output stream for a discard
//! sink during warm-up and lets tests capture everything in memory.

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

/// The pair of streams a driver writes to.
pub struct Console {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Console {
    /// Create a console over arbitrary writers
    pub fn new(out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self { out, err }
    }

    /// Console bound to the process `stdout`/`stderr`
    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Regular output stream
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Diagnostic stream
    pub fn err(&mut self) -> &mut dyn Write {
        &mut *self.err
    }

    /// Redirect the output stream to a discard sink until the guard drops.
    ///
    /// The error stream is left untouched so diagnostics stay visible.
    pub fn silence(&mut self) -> SilenceGuard<'_> {
        let saved = std::mem::replace(&mut self.out, Box::new(io::sink()));
        SilenceGuard {
            console: self,
            saved: Some(saved),
        }
    }

    /// Flush both streams
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

/// RAII guard for a silenced console - restores the output stream on drop.
///
/// Restoration happens on every exit path, including early returns and
/// unwinding out of a driver.
///
/// # Example
/// ```ignore
/// {
///     let mut quiet = console.silence(); // output discarded
///     driver.run(&args, &mut quiet)?;
/// } // output restored here
/// ```
pub struct SilenceGuard<'a> {
    console: &'a mut Console,
    saved: Option<Box<dyn Write>>,
}

impl Deref for SilenceGuard<'_> {
    type Target = Console;

    fn deref(&self) -> &Console {
        &*self.console
    }
}

impl DerefMut for SilenceGuard<'_> {
    fn deref_mut(&mut self) -> &mut Console {
        &mut *self.console
    }
}

impl Drop for SilenceGuard<'_> {
    fn drop(&mut self) {
        if let Some(out) = self.saved.take() {
            self.console.out = out;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::capture::captured;
    use std::io::Write;

    #[test]
    fn test_silence_discards_output_only() {
        let (mut console, out, err) = captured();
        {
            let mut quiet = console.silence();
            write!(quiet.out(), "hidden").unwrap();
            write!(quiet.err(), "visible").unwrap();
        }
        write!(console.out(), "shown").unwrap();

        assert_eq!(out.text(), "shown");
        assert_eq!(err.text(), "visible");
    }

    #[test]
    fn test_silence_restores_after_unwind() {
        let (mut console, out, _err) = captured();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _quiet = console.silence();
            panic!("driver blew up");
        }));
        assert!(result.is_err());

        write!(console.out(), "after").unwrap();
        assert_eq!(out.text(), "after");
    }
}
