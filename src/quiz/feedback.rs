/// How a single option of the current question should be presented.
///
/// Derived on demand from the selection and the correct index; nothing here
/// is stored, so the feedback can never drift out of sync with the score.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OptionFeedback {
    /// The question has not been answered yet.
    Neutral,
    /// The chosen option, and it was right.
    CorrectChosen,
    /// The chosen option, and it was wrong.
    IncorrectChosen,
    /// The right option, which the user did not pick.
    CorrectUnchosen,
    /// Any other option after answering.
    OtherUnchosen,
}

pub fn classify(
    selected_option: Option<usize>,
    correct_option: usize,
    option_index: usize,
) -> OptionFeedback {
    let selected = match selected_option {
        None => return OptionFeedback::Neutral,
        Some(selected) => selected,
    };
    if option_index == correct_option {
        if selected == option_index {
            OptionFeedback::CorrectChosen
        } else {
            OptionFeedback::CorrectUnchosen
        }
    } else if selected == option_index {
        OptionFeedback::IncorrectChosen
    } else {
        OptionFeedback::OtherUnchosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanswered_question_is_neutral() {
        for option_index in 0..4 {
            assert_eq!(classify(None, 2, option_index), OptionFeedback::Neutral);
        }
    }

    #[test]
    fn correct_answer_highlights_only_the_choice() {
        assert_eq!(classify(Some(2), 2, 2), OptionFeedback::CorrectChosen);
        assert_eq!(classify(Some(2), 2, 0), OptionFeedback::OtherUnchosen);
        assert_eq!(classify(Some(2), 2, 1), OptionFeedback::OtherUnchosen);
        assert_eq!(classify(Some(2), 2, 3), OptionFeedback::OtherUnchosen);
    }

    #[test]
    fn wrong_answer_reveals_the_correct_option() {
        assert_eq!(classify(Some(1), 2, 1), OptionFeedback::IncorrectChosen);
        assert_eq!(classify(Some(1), 2, 2), OptionFeedback::CorrectUnchosen);
        assert_eq!(classify(Some(1), 2, 0), OptionFeedback::OtherUnchosen);
        assert_eq!(classify(Some(1), 2, 3), OptionFeedback::OtherUnchosen);
    }
}
