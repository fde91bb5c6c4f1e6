//! Input helpers for interactive commands.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Used by interactive commands that prompt for player actions. The line
/// is trimmed; `None` means EOF or a read error, which callers treat as
/// a graceful quit.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn trims_and_returns_lines() {
        let mut input = Cursor::new(b"  call  \nfold\n");
        assert_eq!(read_stdin_line(&mut input), Some("call".to_string()));
        assert_eq!(read_stdin_line(&mut input), Some("fold".to_string()));
        assert_eq!(read_stdin_line(&mut input), None);
    }
}
