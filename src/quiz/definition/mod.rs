use anyhow::*;
use std::io::Read;

pub mod question;

pub use question::{Question, RawQuestion};

#[cfg(test)]
mod tests;

const BUILTIN_BANK: &str = include_str!("../../../assets/questions.csv");

/// Ordered, read-only question bank backing a quiz session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    /// The ten Canadian geography questions embedded at compile time.
    pub fn builtin() -> Result<QuizDefinition> {
        Self::from_csv(BUILTIN_BANK.as_bytes())
    }

    pub fn from_csv<R: Read>(source: R) -> Result<QuizDefinition> {
        let mut questions = Vec::new();

        let mut csv_reader = csv::Reader::from_reader(source);
        for row in csv_reader.deserialize() {
            let raw_question: RawQuestion = row?;
            questions.push(raw_question.try_into()?);
        }

        if questions.is_empty() {
            bail!("Quiz definition contains no questions");
        }

        Ok(QuizDefinition { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
