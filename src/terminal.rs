//! Line-based prompting over an async reader and a plain writer.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::error::QuizError;
use crate::ui;

/// The terminal used by the binary.
pub type StdTerminal = Terminal<BufReader<Stdin>, io::Stdout>;

/// A terminal over standard input and output. Output is styled only when
/// stdout is an interactive terminal.
pub fn stdio() -> StdTerminal {
    let stdout = io::stdout();
    ui::set_styled(stdout.is_terminal());
    Terminal::new(BufReader::new(tokio::io::stdin()), stdout)
}

pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> Result<(), QuizError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    /// Show `prompt` and wait for one trimmed line of input.
    pub async fn ask(&mut self, prompt: &str) -> Result<String, QuizError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(QuizError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask for an integer in `lo..=hi`; a blank reply picks `default`.
    pub async fn ask_int(&mut self, msg: &str, default: u32, lo: u32, hi: u32) -> Result<u32, QuizError> {
        let prompt = format!("{} [{}]: ", msg, default);
        loop {
            let reply = self.ask(&prompt).await?;
            if reply.is_empty() {
                return Ok(default);
            }
            match reply.parse::<i64>() {
                Ok(value) if (i64::from(lo)..=i64::from(hi)).contains(&value) => {
                    return Ok(value as u32);
                }
                Ok(_) => self.say(format!("Enter a number between {} and {}.", lo, hi))?,
                Err(_) => self.say("Enter a valid integer.")?,
            }
        }
    }

    /// Ask for one of `choices`, case-insensitively; a blank reply picks
    /// `default`. The reply comes back lowercased.
    pub async fn ask_choice(&mut self, msg: &str, choices: &[&str], default: &str) -> Result<String, QuizError> {
        let listed = format_choices(choices);
        let prompt = format!("{} {} [{}]: ", msg, listed, default);
        loop {
            let reply = self.ask(&prompt).await?.to_lowercase();
            if reply.is_empty() {
                return Ok(default.to_lowercase());
            }
            if choices.iter().any(|choice| choice.to_lowercase() == reply) {
                return Ok(reply);
            }
            self.say(format!("Choose one of {} (case-insensitive).", listed))?;
        }
    }

    /// Ask for a 1-based option number out of `count`, re-prompting until
    /// a valid one arrives.
    pub async fn ask_option(&mut self, count: usize) -> Result<usize, QuizError> {
        loop {
            let reply = self.ask("Your answer (enter option number): ").await?;
            match reply.parse::<i64>() {
                Ok(value) if value >= 1 && (value as u64) <= count as u64 => {
                    return Ok(value as usize);
                }
                Ok(_) => self.say(format!("Enter a number between 1 and {}.", count))?,
                Err(_) => self.say("Please enter a valid number.")?,
            }
        }
    }
}

/// Render choices the way they appear in prompts: `['a', 'b']`.
pub fn format_choices(choices: &[&str]) -> String {
    let quoted: Vec<String> = choices.iter().map(|c| format!("'{}'", c)).collect();
    format!("[{}]", quoted.join(", "))
}
