//! Line-based terminal used by the menus.

use std::fmt::Display;
use std::io::{self, BufRead, ErrorKind, Write};
use std::ops::RangeInclusive;

/// Blocking line input and text output.
///
/// End of input is reported as an `UnexpectedEof` error.
pub trait Terminal {
    /// Prints `prompt` and reads one line without its line ending.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Prints `text` followed by a newline.
    fn print_lines(&mut self, text: &str) -> io::Result<()>;

    fn clear_screen(&mut self) -> io::Result<()>;

    /// Reads an integer, asking again until the input parses.
    fn read_integer(&mut self, prompt: &str) -> io::Result<i64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.print_lines("Invalid value specified. Try again.")?,
            }
        }
    }

    /// Reads an integer inside `range`, asking again otherwise.
    fn read_integer_in(&mut self, prompt: &str, range: RangeInclusive<i64>) -> io::Result<i64> {
        loop {
            let value = self.read_integer(prompt)?;
            if range.contains(&value) {
                return Ok(value);
            }
            self.print_lines("Invalid value specified. Try again.")?;
        }
    }

    /// Reads a real number, asking again until the input parses.
    fn read_real(&mut self, prompt: &str) -> io::Result<f64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => self.print_lines("Invalid value specified. Try again.")?,
            }
        }
    }
}

/// Prints each item on its own line, or a placeholder when there are none.
pub fn print_items<T, I>(term: &mut dyn Terminal, items: I) -> io::Result<()>
where
    T: Display,
    I: IntoIterator<Item = T>,
{
    let text = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    if text.is_empty() {
        term.print_lines("No results.")
    } else {
        term.print_lines(&text)
    }
}

/// Terminal over any reader/writer pair.
pub struct StdTerminal<R, W> {
    input: R,
    output: W,
    clear: bool,
}

impl<R: BufRead, W: Write> StdTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear: true,
        }
    }

    /// Enables or disables the ANSI clear sequence.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Terminal for StdTerminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "end of input"));
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn print_lines(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if self.clear {
            write!(self.output, "\x1B[2J\x1B[1;1H")?;
            self.output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> StdTerminal<Cursor<Vec<u8>>, Vec<u8>> {
        StdTerminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
            .with_clear_screen(false)
    }

    fn printed(terminal: &StdTerminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(terminal.output().clone()).unwrap()
    }

    #[test]
    fn test_read_integer_reprompts() {
        let mut term = terminal("abc\n\n 42 \n");
        assert_eq!(term.read_integer("n: ").unwrap(), 42);
        let out = printed(&term);
        assert_eq!(out.matches("Invalid value specified. Try again.").count(), 2);
        assert_eq!(out.matches("n: ").count(), 3);
    }

    #[test]
    fn test_read_integer_in_rejects_out_of_range() {
        let mut term = terminal("-1\n9223372036854775807\n7\n");
        assert_eq!(term.read_integer_in("k: ", 0..=10).unwrap(), 7);
        let out = printed(&term);
        assert_eq!(out.matches("Invalid value specified. Try again.").count(), 2);
    }

    #[test]
    fn test_read_real_rejects_nan() {
        let mut term = terminal("NaN\n9.5\n");
        assert_eq!(term.read_real("grade: ").unwrap(), 9.5);
    }

    #[test]
    fn test_read_line_strips_line_ending() {
        let mut term = terminal("Mary Ann\r\n");
        assert_eq!(term.read_line("").unwrap(), "Mary Ann");
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut term = terminal("");
        let err = term.read_integer("n: ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_print_items_placeholder() {
        let mut term = terminal("");
        print_items(&mut term, Vec::<String>::new()).unwrap();
        print_items(&mut term, [1, 2]).unwrap();
        assert_eq!(printed(&term), "No results.\n1\n2\n");
    }
}
