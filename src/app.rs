use anyhow::{Context, Result};
use crossterm::style::Stylize;
use inquire::{InquireError, Select};

use crate::output;
use crate::quiz::{definition::QuizDefinition, QuizSession};

const PROGRESS_BAR_WIDTH: usize = 30;

const START_LABEL: &str = "Start Quiz! 🚀";
const NEXT_LABEL: &str = "Next Question →";
const RESULTS_LABEL: &str = "See Results! 🎯";
const RESTART_LABEL: &str = "Try Again! 🔄";
const QUIT_LABEL: &str = "Quit";

/// Runs one terminal session. The quiz state lives entirely in
/// `QuizSession`; this loop only issues commands and re-renders from the
/// session's queries after each one.
pub fn run(definition: QuizDefinition) -> Result<()> {
    let mut session = QuizSession::new(definition);
    loop {
        let keep_going = if !session.has_started() {
            intro_screen(&mut session)?
        } else if session.is_finished() {
            results_screen(&mut session)?
        } else if !session.is_answered() {
            answer_prompt(&mut session)?
        } else {
            review_prompt(&mut session)?
        };
        if !keep_going {
            return Ok(());
        }
    }
}

fn intro_screen(session: &mut QuizSession) -> Result<bool> {
    println!("{}", output::intro_screen(session.question_count()));
    match select_action("Ready?", vec![START_LABEL, QUIT_LABEL])? {
        Some(label) if label == START_LABEL => {
            session.start();
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn answer_prompt(session: &mut QuizSession) -> Result<bool> {
    let (prompt, options) = {
        let question = session.current_question().context("No current question")?;
        (question.prompt.clone(), question.options.clone())
    };
    let position = session.current_index().context("No current question")? + 1;

    println!();
    println!(
        "{}",
        output::question_header(position, session.question_count(), session.score())
    );
    println!(
        "{}",
        output::progress_bar(position, session.question_count(), PROGRESS_BAR_WIDTH)
    );
    println!("\n{}\n", prompt.as_str().bold());

    match Select::new("Choose an answer:", options).raw_prompt() {
        Ok(choice) => {
            session.submit_answer(choice.index)?;
            Ok(true)
        }
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(false),
        Err(err) => Err(err.into()),
    }
}

fn review_prompt(session: &mut QuizSession) -> Result<bool> {
    {
        let question = session.current_question().context("No current question")?;
        println!();
        for (option_index, option_text) in question.options.iter().enumerate() {
            println!(
                "  {}",
                output::option_review_line(option_text, session.classify_option(option_index))
            );
        }
        println!();
    }

    let next_label = if session.is_last_question() {
        RESULTS_LABEL
    } else {
        NEXT_LABEL
    };
    match select_action("What next?", vec![next_label, QUIT_LABEL])? {
        Some(label) if label == next_label => {
            session.advance()?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn results_screen(session: &mut QuizSession) -> Result<bool> {
    let result = session.result()?;
    println!("{}", output::result_screen(&result));
    match select_action("What next?", vec![RESTART_LABEL, QUIT_LABEL])? {
        Some(label) if label == RESTART_LABEL => {
            session.restart();
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn select_action<'a>(message: &str, actions: Vec<&'a str>) -> Result<Option<&'a str>> {
    match Select::new(message, actions).prompt() {
        Ok(choice) => Ok(Some(choice)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
