use anyhow::*;
use serde::Deserialize;

/// One row of the question bank CSV. Options live in a single
/// pipe-separated column.
#[derive(Debug, Deserialize)]
pub struct RawQuestion {
    pub id: u32,
    pub prompt: String,
    pub options: String,
    pub correct_option: usize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize,
}

impl TryFrom<RawQuestion> for Question {
    type Error = anyhow::Error;

    fn try_from(raw_question: RawQuestion) -> Result<Self> {
        let options: Vec<String> = raw_question
            .options
            .split('|')
            .map(|option| option.trim().to_owned())
            .filter(|option| !option.is_empty())
            .collect();

        if raw_question.prompt.trim().is_empty() {
            bail!("Question {} has an empty prompt", raw_question.id);
        }
        if options.len() < 2 {
            bail!(
                "Question {} needs at least two options, found {}",
                raw_question.id,
                options.len()
            );
        }
        if raw_question.correct_option >= options.len() {
            bail!(
                "Question {} marks option {} as correct but only has {} options",
                raw_question.id,
                raw_question.correct_option,
                options.len()
            );
        }

        Ok(Question {
            id: raw_question.id,
            prompt: raw_question.prompt,
            options,
            correct_option: raw_question.correct_option,
        })
    }
}
