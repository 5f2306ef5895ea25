//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_and_errors_carry_prefixes() {
        let mut buf = Vec::new();
        write_error(&mut buf, "bad").unwrap();
        display_warning(&mut buf, "odd").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Error: bad"));
        assert!(text.contains("WARNING: odd"));
    }
}
