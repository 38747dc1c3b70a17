//! The interactive question/answer loop and scoring.

use std::io::Write;

use tokio::io::AsyncBufRead;
use tracing::debug;

use crate::error::QuizError;
use crate::models::NormalizedQuestion;
use crate::terminal::Terminal;
use crate::ui;

/// Closing verdict for a finished quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grade {
    Perfect,
    Great,
    Ok,
    KeepLearning,
}

impl Grade {
    /// Tier for a percentage score. The 70 and 40 boundaries are inclusive.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage == 100.0 {
            Grade::Perfect
        } else if percentage >= 70.0 {
            Grade::Great
        } else if percentage >= 40.0 {
            Grade::Ok
        } else {
            Grade::KeepLearning
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Grade::Perfect => "🎉 Perfect! You nailed it!",
            Grade::Great => "👏 Great job! Keep it up.",
            Grade::Ok => "👍 Not bad—practice makes perfect.",
            Grade::KeepLearning => "📚 Keep learning—you'll improve fast!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
}

impl QuizSummary {
    /// Percentage of correct answers; 0 for an empty quiz.
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.score as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}

/// Ask every question in order, give feedback after each answer and print
/// the final score.
pub async fn run_quiz<R, W>(
    terminal: &mut Terminal<R, W>,
    questions: &[NormalizedQuestion],
) -> Result<QuizSummary, QuizError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut score = 0;
    terminal.say("\n🔹 Starting Quiz! Good luck!\n")?;

    for (index, question) in questions.iter().enumerate() {
        ui::render_question(terminal.writer(), index + 1, question)?;

        let choice = terminal.ask_option(question.options.len()).await?;
        let correct = question.is_correct(choice);
        if correct {
            score += 1;
        }
        debug!(question = index + 1, choice, correct, "answered");

        ui::render_feedback(terminal.writer(), correct, &question.answer)?;
    }

    let summary = QuizSummary {
        score,
        total: questions.len(),
    };
    ui::render_result(terminal.writer(), &summary)?;
    Ok(summary)
}
