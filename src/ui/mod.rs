//! Plain-text rendering of the quiz screens.

mod quiz;
mod result;
mod welcome;

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::StyledContent;

pub use quiz::{render_feedback, render_question};
pub use result::render as render_result;
pub use welcome::render as render_welcome;

static STYLED: AtomicBool = AtomicBool::new(false);

/// Turn colours and text attributes on or off for all screens. Off by
/// default so piped output stays free of escape sequences.
pub fn set_styled(enabled: bool) {
    STYLED.store(enabled, Ordering::Relaxed);
}

fn paint<D: Display>(content: StyledContent<D>) -> String {
    render_styled(content, STYLED.load(Ordering::Relaxed))
}

fn render_styled<D: Display>(content: StyledContent<D>, enabled: bool) -> String {
    if enabled {
        content.to_string()
    } else {
        content.content().to_string()
    }
}
