use std::io::{self, Write};

use crossterm::style::Stylize;

use super::paint;

pub fn render<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", paint("====== Any-Topic Quiz (Open Trivia DB) ======".cyan().bold()))?;
    writeln!(out)
}
