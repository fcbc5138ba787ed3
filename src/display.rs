use std::io::{self, Write};

/// Full terminal reset, the ANSI equivalent of the classic `\033c`.
const CLEAR: &str = "\x1bc";

/// Clears the screen and prints the rendered lines, then the optional
/// status line without a trailing newline. Write errors are ignored;
/// there is nothing useful to do when the terminal goes away.
pub fn render(lines: &[String], status: Option<&str>) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let _ = write!(out, "{}", CLEAR);
    for line in lines {
        let _ = writeln!(out, "{}", line);
    }
    if let Some(status) = status {
        let _ = write!(out, "{}", status);
    }
    let _ = out.flush();
}
