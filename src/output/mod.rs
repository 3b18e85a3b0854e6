use crossterm::style::Stylize;

use crate::quiz::{OptionFeedback, QuizResult};

pub fn intro_screen(question_count: usize) -> String {
    format!(
        "\n{}\n{}\n\nTest your knowledge about Canada's amazing physical regions!\nAnswer {} fun questions and see how much you know!\n",
        "🍁 Canada Quiz 🍁".yellow().bold(),
        "Physical Regions of Canada".bold(),
        question_count
    )
}

pub fn question_header(position: usize, total: usize, score: usize) -> String {
    format!(
        "{}   {}",
        format!("Question {} of {}", position, total).bold(),
        format!("Score: {}", score).blue()
    )
}

/// Plain-text progress bar, filled proportionally to `position / total`.
pub fn progress_bar(position: usize, total: usize, width: usize) -> String {
    let filled = position * width / total;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One option line on the answered question screen, colored per feedback.
pub fn option_review_line(option_text: &str, feedback: OptionFeedback) -> String {
    let line = format!("{}{}", option_text, feedback_mark(feedback));
    match feedback {
        OptionFeedback::Neutral => line,
        OptionFeedback::CorrectChosen | OptionFeedback::CorrectUnchosen => {
            format!("{}", line.green().bold())
        }
        OptionFeedback::IncorrectChosen => format!("{}", line.red().bold()),
        OptionFeedback::OtherUnchosen => format!("{}", line.dim()),
    }
}

fn feedback_mark(feedback: OptionFeedback) -> &'static str {
    match feedback {
        OptionFeedback::CorrectChosen | OptionFeedback::CorrectUnchosen => " ✓",
        OptionFeedback::IncorrectChosen => " ✗",
        OptionFeedback::Neutral | OptionFeedback::OtherUnchosen => "",
    }
}

pub fn result_screen(result: &QuizResult) -> String {
    let tier = result.tier();
    format!(
        "\n{} {}\n\n{}\n{}\n\n{}\n",
        "Quiz Complete!".magenta().bold(),
        tier.emoji(),
        format!("Your Score: {}/{}", result.score, result.total).bold(),
        format!("{}%", result.percentage),
        tier.message()
    )
}
