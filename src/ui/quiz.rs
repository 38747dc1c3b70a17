use std::io::{self, Write};

use crossterm::style::Stylize;

use super::paint;
use crate::models::NormalizedQuestion;

pub fn render_question<W: Write>(out: &mut W, number: usize, question: &NormalizedQuestion) -> io::Result<()> {
    let header = format!(
        "Q{} ({} - {}):",
        number, question.category, question.difficulty
    );
    writeln!(out, "{}", paint(header.bold()))?;
    writeln!(out, "{}", question.question)?;

    for (index, option) in question.options.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, option)?;
    }
    Ok(())
}

pub fn render_feedback<W: Write>(out: &mut W, correct: bool, answer: &str) -> io::Result<()> {
    if correct {
        writeln!(out, "{}", paint("✅ Correct!".green()))?;
    } else {
        let line = format!("❌ Wrong. Correct answer: {}", answer);
        writeln!(out, "{}", paint(line.red()))?;
    }
    writeln!(out)
}
