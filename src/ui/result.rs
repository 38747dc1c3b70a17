use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use super::paint;
use crate::runner::{Grade, QuizSummary};

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::Perfect => Color::Green,
        Grade::Great => Color::Cyan,
        Grade::Ok => Color::Yellow,
        Grade::KeepLearning => Color::Red,
    }
}

pub fn render<W: Write>(out: &mut W, summary: &QuizSummary) -> io::Result<()> {
    let grade = summary.grade();

    writeln!(out, "{}", paint("🏁 Quiz Finished!".bold()))?;
    let score = format!("Your Score: {}/{}", summary.score, summary.total);
    writeln!(out, "{}", paint(score.bold()))?;
    writeln!(out, "{}", paint(grade.message().with(grade_color(grade))))
}
