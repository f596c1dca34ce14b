use drill_core::model::{AnswerOutcome, OperandRange, Question};
use drill_core::time::fixed_now;
use drill_services::{Clock, DrillService, QuizSession, SessionPhase, generate};

#[test]
fn drill_runs_to_completion_with_retries() {
    let service = DrillService::new(OperandRange::new(2, 4), OperandRange::new(5, 7))
        .with_clock(Clock::fixed(fixed_now()));
    let mut session = service.session();
    service.new_game(&mut session);
    assert_eq!(session.total_count(), 9);

    let mut seen = Vec::new();
    let mut last = None;
    while let Some(question) = session.current_question() {
        // One wrong answer per question before the right one.
        let wrong = service.answer(&mut session, question.answer() + 1).unwrap();
        assert_eq!(
            wrong.outcome,
            AnswerOutcome::Incorrect {
                hint: question.hint_digit()
            }
        );
        assert_eq!(session.current_question(), Some(question));

        last = Some(service.answer(&mut session, question.answer()).unwrap());
        seen.push(question);
    }

    seen.sort();
    let mut expected: Vec<Question> = (2..=4)
        .flat_map(|x| (5..=7).map(move |y| Question::new(x, y)))
        .collect();
    expected.sort();
    assert_eq!(seen, expected);

    let summary = last.and_then(|answer| answer.summary).expect("summary on finish");
    assert_eq!(summary.total(), 9);
    assert_eq!(summary.mistakes(), 9);
    assert_eq!(session.phase(), SessionPhase::Complete);
}

#[test]
fn one_by_one_ranges_end_to_end() {
    let mut session = QuizSession::new(Clock::fixed(fixed_now()));
    session.start(generate(OperandRange::new(1, 1), OperandRange::new(1, 1)));

    assert_eq!(session.current_question(), Some(Question::new(1, 1)));
    assert_eq!(session.submit_answer(1), Ok(AnswerOutcome::Correct));
    assert_eq!(session.current_question(), None);
    assert_eq!(session.score(), 1);
    assert_eq!(session.total_count(), 1);
    assert!(session.is_complete());
}

#[test]
fn inverted_range_starts_an_empty_complete_game() {
    let service = DrillService::new(OperandRange::new(9, 1), OperandRange::new(1, 10));
    let mut session = service.session();
    service.new_game(&mut session);

    assert!(session.is_active());
    assert_eq!(session.phase(), SessionPhase::Complete);
    assert_eq!(session.progress().total, 0);
    assert_eq!(session.summary().map(|s| s.total()), Ok(0));
}
