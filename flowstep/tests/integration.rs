//! Integration tests for the flow engine's navigation, branching, and
//! validation behavior.

use chrono::NaiveDate;
use flowstep::{
    Alert, BranchAction, BranchRule, FlowEngine, FlowTemplate, Predicate, Question, Step,
};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
}

fn eligibility_template() -> FlowTemplate {
    FlowTemplate::new("eligibility")
        .question(Question::single_choice("Are you a US Citizen?", ["Yes", "No"]))
        .question(Question::single_choice(
            "Are you a permanent US resident?",
            ["Yes", "No"],
        ))
        .question(Question::free_text("Anything else?"))
        .rule(BranchRule::new(
            "Are you a permanent US resident?",
            Predicate::All(vec![
                Predicate::AnswerIs("No".into()),
                Predicate::PriorAnswerIs {
                    prompt: "Are you a US Citizen?".into(),
                    value: "No".into(),
                },
            ]),
            BranchAction::Block(Alert::EligibilityRestriction),
        ))
}

#[test]
fn cursor_stays_in_bounds_under_arbitrary_navigation() {
    let template = FlowTemplate::new("walk")
        .question(Question::free_text("Q0"))
        .question(Question::free_text("Q1"))
        .question(Question::free_text("Q2"));
    let mut engine = FlowEngine::new(template).unwrap();

    // Hammer the engine with a mix of moves, including redundant ones.
    for round in 0..20 {
        if round % 3 == 0 {
            engine.retreat();
        } else {
            engine.set_free_text("x");
            engine.advance();
        }
        assert!(engine.cursor() < engine.len());
    }
}

#[test]
fn ephemeral_state_clears_on_every_transition() {
    let template = FlowTemplate::new("clear")
        .question(Question::multi_choice("Pick", ["A", "B"]))
        .question(Question::free_text("Name"));
    let mut engine = FlowEngine::new(template).unwrap();

    engine.toggle("A");
    engine.set_custom_answer("custom");
    assert_eq!(engine.advance(), Step::Moved);
    assert!(engine.selected().is_empty());
    assert!(engine.custom_answer().is_empty());
    assert!(engine.free_text().is_empty());

    engine.set_free_text("partial");
    engine.retreat();
    assert!(engine.selected().is_empty());
    assert!(engine.free_text().is_empty());
}

#[test]
fn answers_commit_before_the_transition() {
    let template = FlowTemplate::new("commit")
        .question(Question::multi_choice("Pick", ["A", "B", "C"]))
        .question(Question::free_text("Name"));
    let mut engine = FlowEngine::new(template).unwrap();

    engine.toggle("B");
    engine.toggle("C");
    engine.advance();

    assert_eq!(
        engine.answers().get("Pick").unwrap(),
        &["B".to_string(), "C".to_string()]
    );
}

#[test]
fn follow_up_insertion_is_contiguous_and_shifts_the_tail() {
    let follow_ups = vec![
        Question::free_text("F0"),
        Question::free_text("F1"),
        Question::free_text("F2"),
    ];
    let template = FlowTemplate::new("insert")
        .question(Question::single_choice("Trigger?", ["Yes", "No"]))
        .question(Question::free_text("Tail0"))
        .question(Question::free_text("Tail1"))
        .rule(BranchRule::new(
            "Trigger?",
            Predicate::AnswerIs("Yes".into()),
            BranchAction::InsertFollowUps(follow_ups.clone()),
        ));
    let mut engine = FlowEngine::new(template).unwrap();

    engine.select("Yes");
    assert_eq!(engine.advance(), Step::Moved);

    let prompts: Vec<&str> = engine
        .question_list()
        .iter()
        .map(Question::prompt)
        .collect();
    assert_eq!(prompts, vec!["Trigger?", "F0", "F1", "F2", "Tail0", "Tail1"]);
    assert_eq!(engine.question_list()[1..4].to_vec(), follow_ups);
    assert_eq!(engine.cursor(), 1);
}

#[test]
fn age_gate_boundary() {
    let template = FlowTemplate::new("age")
        .question(Question::free_text("What is your date of birth?"))
        .question(Question::free_text("Done"))
        .rule(BranchRule::new(
            "What is your date of birth?",
            Predicate::UnderAge { min_years: 18 },
            BranchAction::Block(Alert::AgeRestriction),
        ));

    // 18 years minus one day before "now": blocked.
    let mut engine = FlowEngine::new(template.clone())
        .unwrap()
        .with_today(fixed_today());
    engine.set_free_text("2008-08-30");
    assert_eq!(engine.advance(), Step::Blocked(Alert::AgeRestriction));
    assert_eq!(engine.cursor(), 0);

    // Exactly 18 years before "now": passes.
    let mut engine = FlowEngine::new(template).unwrap().with_today(fixed_today());
    engine.set_free_text("2008-08-29");
    assert_eq!(engine.advance(), Step::Moved);
    assert_eq!(engine.active_alert(), None);
}

#[test]
fn date_of_birth_equal_to_today_is_treated_as_unset() {
    let template = FlowTemplate::new("age")
        .question(Question::free_text("What is your date of birth?"))
        .question(Question::free_text("Done"))
        .rule(BranchRule::new(
            "What is your date of birth?",
            Predicate::UnderAge { min_years: 18 },
            BranchAction::Block(Alert::AgeRestriction),
        ));
    let mut engine = FlowEngine::new(template).unwrap().with_today(fixed_today());

    engine.set_free_text("2026-08-29");
    assert_eq!(engine.advance(), Step::Blocked(Alert::AgeRestriction));
}

#[test]
fn eligibility_gate_blocks_no_no() {
    let mut engine = FlowEngine::new(eligibility_template()).unwrap();

    engine.select("No");
    assert_eq!(engine.advance(), Step::Moved);
    let residency_index = engine.cursor();

    engine.select("No");
    assert_eq!(
        engine.advance(),
        Step::Blocked(Alert::EligibilityRestriction)
    );
    assert_eq!(engine.cursor(), residency_index);
    assert_eq!(engine.active_alert(), Some(Alert::EligibilityRestriction));
}

#[test]
fn eligibility_gate_passes_citizens_and_residents() {
    // Citizen: residency answer is irrelevant.
    let mut engine = FlowEngine::new(eligibility_template()).unwrap();
    engine.select("Yes");
    engine.advance();
    engine.select("No");
    assert_eq!(engine.advance(), Step::Moved);

    // Non-citizen permanent resident.
    let mut engine = FlowEngine::new(eligibility_template()).unwrap();
    engine.select("No");
    engine.advance();
    engine.select("Yes");
    assert_eq!(engine.advance(), Step::Moved);
}

#[test]
fn validation_gate_per_answer_shape() {
    let template = FlowTemplate::new("gate")
        .question(Question::single_choice("Choice", ["A", "B"]))
        .question(Question::external_link("Terms", "https://example.com/terms"))
        .question(Question::free_text("Name"));
    let mut engine = FlowEngine::new(template).unwrap();

    // Choice: nothing selected, no custom answer.
    assert!(!engine.can_advance());
    engine.set_custom_answer("Other thing");
    assert!(engine.can_advance());
    engine.set_custom_answer("");
    engine.select("A");
    assert!(engine.can_advance());
    engine.advance();

    // External link: always enabled.
    assert!(engine.can_advance());
    engine.advance();

    // Free text: enabled once non-empty.
    assert!(!engine.can_advance());
    engine.set_free_text("Alice");
    assert!(engine.can_advance());
}

#[test]
fn three_question_flow_completes_with_all_answers_committed() {
    let template = FlowTemplate::new("plain")
        .question(Question::free_text("Q0"))
        .question(Question::free_text("Q1"))
        .question(Question::free_text("Q2"));
    let mut engine = FlowEngine::new(template).unwrap();

    engine.set_free_text("a");
    assert_eq!(engine.advance(), Step::Moved);
    engine.set_free_text("b");
    assert_eq!(engine.advance(), Step::Moved);
    engine.set_free_text("c");
    assert_eq!(engine.advance(), Step::Completed);

    assert!(engine.is_completed());
    assert_eq!(engine.answers().len(), 3);
    assert_eq!(engine.answers().first("Q0"), Some("a"));
    assert_eq!(engine.answers().first("Q1"), Some("b"));
    assert_eq!(engine.answers().first("Q2"), Some("c"));
}

#[test]
fn blocked_answer_is_still_committed_to_the_summary() {
    let mut engine = FlowEngine::new(eligibility_template()).unwrap();

    engine.select("No");
    engine.advance();
    engine.select("No");
    engine.advance();

    // Commit happens before rule evaluation, so the blocked answer is
    // recorded and the cross-question predicate can read the first one.
    assert_eq!(
        engine.answers().first("Are you a permanent US resident?"),
        Some("No")
    );
}
