//! Prompt, read, convert, print, repeat

use std::io::{self, BufRead, Write};
use unitconv_core::{Number, UnitconvError};
use unitconv_units::{normalize, unit_menu, Converter};

/// Escape sequence that resets the terminal
const CLEAR: &str = "\x1bc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    /// Reset the terminal before each prompt
    pub clear_screen: bool,
    /// Print the history as JSON instead of text
    pub json_history: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self { clear_screen: true, json_history: false }
    }
}

/// Whether the user asked for another round
enum Round {
    Again,
    Stop,
}

pub struct Shell<R, W> {
    converter: Converter,
    input: R,
    output: W,
    options: ShellOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(converter: Converter, input: R, output: W, options: ShellOptions) -> Self {
        Self { converter, input, output, options }
    }

    /// Run until the user declines to continue or input ends, then print
    /// the history. Returns the converter so callers can inspect it.
    pub fn run(mut self) -> io::Result<Converter> {
        loop {
            if let Round::Stop = self.round()? {
                break;
            }
        }
        self.print_history()?;
        Ok(self.converter)
    }

    fn round(&mut self) -> io::Result<Round> {
        let Some(raw_value) = self.prompt("Value:\n> ")? else {
            return Ok(Round::Stop);
        };

        match Number::from_str(&raw_value) {
            Ok(value) => {
                let menu = unit_menu();
                let Some(from) = self.prompt(&format!("From:\n{}> ", menu))? else {
                    return Ok(Round::Stop);
                };
                let Some(to) = self.prompt(&format!("To:\n{}> ", menu))? else {
                    return Ok(Round::Stop);
                };
                self.report(&value, &from, &to)?;
            }
            Err(e) => {
                tracing::debug!(input = %raw_value.trim(), "rejected malformed value");
                writeln!(self.output, "{}", UnitconvError::from(e))?;
            }
        }

        // Leave the result or error on screen while asking
        match self.ask("Continue? (y/n):\n> ")? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => Ok(Round::Again),
            _ => Ok(Round::Stop),
        }
    }

    fn report(&mut self, value: &Number, from: &str, to: &str) -> io::Result<()> {
        let places = self.converter.config().decimal_places;
        match self.converter.convert(value, from, to) {
            Ok(result) => {
                self.clear()?;
                writeln!(self.output, "Result: {} {}", result.to_fixed(places), normalize(to))
            }
            Err(e) => writeln!(self.output, "{}", UnitconvError::from(e)),
        }
    }

    fn print_history(&mut self) -> io::Result<()> {
        let history = self.converter.history();
        if self.options.json_history {
            let json = serde_json::to_string_pretty(&history)?;
            writeln!(self.output, "{}", json)?;
        } else {
            self.clear()?;
            writeln!(self.output, "History:")?;
            for entry in &history {
                writeln!(self.output, "{}", entry)?;
            }
        }
        self.output.flush()
    }

    /// Clear, show `text`, read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.clear()?;
        self.ask(text)
    }

    /// Show `text` below whatever is on screen, read one line
    fn ask(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("end of input");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.options.clear_screen {
            write!(self.output, "{}", CLEAR)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use unitconv_units::ConverterConfig;

    fn plain() -> ShellOptions {
        ShellOptions { clear_screen: false, json_history: false }
    }

    fn run(script: &str, options: ShellOptions) -> (String, Converter) {
        let converter = Converter::standard(ConverterConfig::default()).unwrap();
        let mut output = Vec::new();
        let converter = Shell::new(converter, Cursor::new(script.as_bytes()), &mut output, options)
            .run()
            .unwrap();
        (String::from_utf8(output).unwrap(), converter)
    }

    #[test]
    fn test_single_conversion_then_history() {
        let (out, converter) = run("100\nc\nf\nn\n", plain());
        assert!(out.contains("Result: 212.00 F\n"));
        assert!(out.ends_with("History:\n100 C > 212.00 F\n"));
        assert_eq!(converter.history_len(), 1);
    }

    #[test]
    fn test_multiple_rounds_keep_order() {
        let (out, _) = run("10\nmi\nkm\ny\n1\nKM\nMI\nN\n", plain());
        assert!(out.ends_with("History:\n10 MI > 16.09 KM\n1 KM > 0.62 MI\n"));
    }

    #[test]
    fn test_malformed_value_skips_unit_prompts() {
        let (out, converter) = run("abc\ny\n0\nC\nK\nn\n", plain());
        assert!(out.contains("[MALFORMED_VALUE] Not a number: 'abc'"));
        assert_eq!(out.matches("From:").count(), 1);
        assert!(out.contains("Result: 273.15 K"));
        assert_eq!(converter.history_len(), 1);
    }

    #[test]
    fn test_invalid_conversion_reported_and_not_recorded() {
        let (out, converter) = run("5\nF\nX\nn\n", plain());
        assert!(out.contains("[INVALID_CONVERSION] Invalid conversion: F > X"));
        assert_eq!(converter.history_len(), 0);
        assert!(out.ends_with("History:\n"));
    }

    #[test]
    fn test_eof_ends_session() {
        let (out, converter) = run("1\nKM\n", plain());
        assert!(out.ends_with("History:\n"));
        assert_eq!(converter.history_len(), 0);

        let (out, converter) = run("1\nKM\nMI\n", plain());
        assert!(out.contains("Result: 0.62 MI"));
        assert_eq!(converter.history_len(), 1);
    }

    #[test]
    fn test_anything_but_y_stops() {
        let (_, converter) = run("1\nKM\nMI\nyes\n2\nKM\nMI\nn\n", plain());
        assert_eq!(converter.history_len(), 1);
    }

    #[test]
    fn test_clear_screen_emitted_by_default() {
        let (out, _) = run("1\nKM\nMI\nn\n", ShellOptions::default());
        assert!(out.starts_with("\x1bcValue:\n> "));
        assert!(out.contains("\x1bcResult: 0.62 MI"));
    }

    #[test]
    fn test_result_stays_visible_at_continue_prompt() {
        let (out, _) = run("1\nKM\nMI\nn\n", ShellOptions::default());
        assert!(out.contains("Result: 0.62 MI\nContinue? (y/n):"));

        let (out, _) = run("5\nF\nX\nn\n", ShellOptions::default());
        let error_at = out.find("[INVALID_CONVERSION]").unwrap();
        let continue_at = out.find("Continue?").unwrap();
        assert!(!out[error_at..continue_at].contains("\x1bc"));

        let (out, _) = run("abc\nn\n", ShellOptions::default());
        let error_at = out.find("[MALFORMED_VALUE]").unwrap();
        let continue_at = out.find("Continue?").unwrap();
        assert!(!out[error_at..continue_at].contains("\x1bc"));
    }

    #[test]
    fn test_prompts_show_unit_menu() {
        let (out, _) = run("1\nKM\nMI\nn\n", plain());
        assert!(out.contains("From:\nC (Celsius)\nF (Fahrenheit)\nK (Kelvin)\nKM (Kilometer)\nL (Leuk)\nMI (Mile)\n> "));
    }

    #[test]
    fn test_json_history() {
        let options = ShellOptions { clear_screen: false, json_history: true };
        let (out, _) = run("0\nC\nF\nn\n", options);
        let start = out.find('[').unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out[start..]).unwrap();
        assert_eq!(parsed[0]["from"], "C");
        assert_eq!(parsed[0]["output"], "32.00");
        assert_eq!(parsed[0]["to"], "F");
    }
}
