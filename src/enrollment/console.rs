use std::io::{BufRead, Write};

use log::debug;

use super::err::EnrollmentError;

/// Answer to a yes/no question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

/// Line-oriented terminal that keeps asking until the answer is valid.
///
/// None of the `read_*` methods fail on bad input; they print a hint and
/// prompt again. The only errors are I/O failures and a closed input stream.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, used to inspect what a session printed
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write `text` followed by a newline
    pub fn say(&mut self, text: &str) -> Result<(), EnrollmentError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write an empty line followed by `text`
    pub fn section(&mut self, text: &str) -> Result<(), EnrollmentError> {
        writeln!(self.output)?;
        self.say(text)
    }

    /// Read one raw line, without its line terminator. May be empty.
    pub fn read_text(&mut self, prompt: &str) -> Result<String, EnrollmentError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EnrollmentError::InputClosed(prompt.trim().to_string()));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn read_integer(&mut self, prompt: &str) -> Result<i32, EnrollmentError> {
        loop {
            let text = self.read_text(prompt)?;
            match text.trim().parse::<i32>() {
                Ok(number) => return Ok(number),
                Err(_) => {
                    debug!("rejected {:?} as a whole number", text);
                    self.say("Invalid input. Please enter a whole number.")?;
                }
            }
        }
    }

    /// Read a whole number in `min..=max`
    pub fn read_integer_in_range(
        &mut self,
        prompt: &str,
        min: i32,
        max: i32,
    ) -> Result<i32, EnrollmentError> {
        loop {
            let number = self.read_integer(prompt)?;
            if (min..=max).contains(&number) {
                return Ok(number);
            }
            debug!("rejected {} outside {}..={}", number, min, max);
            self.say(&format!(
                "Invalid choice. Please enter a number between {} and {}.",
                min, max
            ))?;
        }
    }

    pub fn read_decimal(&mut self, prompt: &str) -> Result<f64, EnrollmentError> {
        loop {
            let text = self.read_text(prompt)?;
            match text.trim().parse::<f64>() {
                Ok(number) => return Ok(number),
                Err(_) => {
                    debug!("rejected {:?} as a decimal", text);
                    self.say("Invalid input. Please enter a number (e.g., 3.5).")?;
                }
            }
        }
    }

    /// Accepts `y`/`n` in either case, surrounding whitespace ignored
    pub fn read_yes_no(&mut self, prompt: &str) -> Result<YesNo, EnrollmentError> {
        loop {
            let text = self.read_text(prompt)?;
            match text.trim().to_uppercase().as_str() {
                "Y" => return Ok(YesNo::Yes),
                "N" => return Ok(YesNo::No),
                _ => {
                    debug!("rejected {:?} as a yes/no answer", text);
                    self.say("Invalid input. Please enter 'Y' or 'N'.")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn printed(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_text_strips_line_terminator_only() {
        let mut c = console("  Ann  \r\n\nlast");
        assert_eq!(c.read_text("First: ").unwrap(), "  Ann  ");
        assert_eq!(c.read_text("Middle: ").unwrap(), "");
        assert_eq!(c.read_text("Last: ").unwrap(), "last");
        assert_eq!(printed(c), "First: Middle: Last: ");
    }

    #[test]
    fn test_read_text_at_end_of_input() {
        let mut c = console("");
        let result = c.read_text("Enter Gender: ");
        assert!(matches!(result, Err(EnrollmentError::InputClosed(_))));
    }

    #[test]
    fn test_read_integer_retries_until_valid() {
        let mut c = console("abc\n4.5\n\n  42 \n");
        assert_eq!(c.read_integer("n: ").unwrap(), 42);
        let out = printed(c);
        assert_eq!(
            out.matches("Invalid input. Please enter a whole number.\n").count(),
            3
        );
        assert_eq!(out.matches("n: ").count(), 4);
    }

    #[test]
    fn test_read_integer_accepts_negative() {
        let mut c = console("-7\n");
        assert_eq!(c.read_integer("n: ").unwrap(), -7);
    }

    #[test]
    fn test_read_integer_in_range() {
        let mut c = console("0\n6\nx\n5\n");
        assert_eq!(c.read_integer_in_range("choice: ", 1, 5).unwrap(), 5);
        let out = printed(c);
        assert_eq!(
            out.matches("Invalid choice. Please enter a number between 1 and 5.\n")
                .count(),
            2
        );
        assert_eq!(
            out.matches("Invalid input. Please enter a whole number.\n").count(),
            1
        );
    }

    #[test]
    fn test_read_integer_in_single_value_range() {
        let mut c = console("3\n");
        assert_eq!(c.read_integer_in_range("choice: ", 3, 3).unwrap(), 3);
    }

    #[test]
    fn test_read_decimal() {
        let mut c = console("three\n3.5\n");
        assert_eq!(c.read_decimal("GPA: ").unwrap(), 3.5);
        assert!(printed(c).contains("Invalid input. Please enter a number (e.g., 3.5).\n"));

        let mut c = console(" 4 \n");
        assert_eq!(c.read_decimal("GPA: ").unwrap(), 4.0);
    }

    #[test]
    fn test_read_yes_no() {
        let mut c = console("yes\nmaybe\n y \n");
        assert_eq!(c.read_yes_no("Sure? ").unwrap(), YesNo::Yes);
        assert_eq!(
            printed(c).matches("Invalid input. Please enter 'Y' or 'N'.\n").count(),
            2
        );

        let mut c = console("n\n");
        assert_eq!(c.read_yes_no("Sure? ").unwrap(), YesNo::No);
    }

    #[test]
    fn test_retry_loop_stops_at_end_of_input() {
        let mut c = console("nope\n");
        assert!(matches!(
            c.read_integer("n: "),
            Err(EnrollmentError::InputClosed(_))
        ));
    }
}
