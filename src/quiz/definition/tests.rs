use super::*;

#[test]
fn builtin_bank_has_ten_valid_questions() {
    let definition = QuizDefinition::builtin().unwrap();
    assert_eq!(definition.len(), 10);
    for question in definition.questions() {
        assert_eq!(question.options.len(), 4);
        assert!(question.correct_option < question.options.len());
        assert!(!question.prompt.is_empty());
    }
}

#[test]
fn builtin_bank_keeps_source_order() {
    let definition = QuizDefinition::builtin().unwrap();
    let ids: Vec<u32> = definition.questions().iter().map(|q| q.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    assert_eq!(
        definition.questions()[0].prompt,
        "Which physical region is the largest in Canada?"
    );
}

#[test]
fn question_with_a_single_option_is_rejected() {
    let csv = "id,prompt,options,correct_option\n1,Only one way out?,Yes,0\n";
    assert!(QuizDefinition::from_csv(csv.as_bytes()).is_err());
}

#[test]
fn out_of_range_correct_option_is_rejected() {
    let csv = "id,prompt,options,correct_option\n1,Pick one,A|B|C,3\n";
    assert!(QuizDefinition::from_csv(csv.as_bytes()).is_err());
}

#[test]
fn empty_bank_is_rejected() {
    let csv = "id,prompt,options,correct_option\n";
    assert!(QuizDefinition::from_csv(csv.as_bytes()).is_err());
}

#[test]
fn option_whitespace_is_trimmed() {
    let csv = "id,prompt,options,correct_option\n1,Pick one,A | B | C,1\n";
    let definition = QuizDefinition::from_csv(csv.as_bytes()).unwrap();
    assert_eq!(definition.questions()[0].options, vec!["A", "B", "C"]);
}
