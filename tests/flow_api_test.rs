//! Integration tests for the requirement flow API.

use std::cell::RefCell;

use buildgate::flow::{FlowController, FlowPhase, Transition};
use buildgate::report::CompletionReport;
use buildgate::requirements::{Answer, AnswerMap, RequirementDefinition, RequirementSet};
use buildgate::view::{StepIntent, StepView};
use buildgate::GateError;

fn set_ab() -> RequirementSet {
    RequirementSet::new(vec![
        RequirementDefinition::new("a", "Docker Check")
            .with_description("Is Docker installed and running?"),
        RequirementDefinition::new("b", "Dependencies").with_custom_input(),
    ])
    .unwrap()
}

#[test]
fn new_controller_starts_at_first_step() {
    let flow = FlowController::new(set_ab(), |_| {});
    assert_eq!(flow.step_index(), 0);
    assert!(flow.answers().is_empty());
    assert!(!flow.is_complete());
    assert_eq!(flow.phase(), FlowPhase::AtStep(0));
}

#[test]
fn advance_requires_an_answer() {
    let mut flow = FlowController::new(set_ab(), |_| {});
    let err = flow.advance().unwrap_err();
    assert!(matches!(err, GateError::StepUnanswered { ref id } if id == "a"));
    assert_eq!(flow.step_index(), 0);

    flow.record_answer("a", Answer::Yes).unwrap();
    assert_eq!(
        flow.advance().unwrap(),
        Transition::Moved { from: 0, to: 1 }
    );
    assert_eq!(flow.step_index(), 1);
}

#[test]
fn completion_delivers_answers_exactly_once() {
    let calls: RefCell<Vec<AnswerMap>> = RefCell::new(Vec::new());
    {
        let mut flow =
            FlowController::new(set_ab(), |answers| calls.borrow_mut().push(answers));
        flow.record_answer("a", Answer::Yes).unwrap();
        flow.advance().unwrap();
        flow.record_answer("b", Answer::no()).unwrap();
        assert_eq!(flow.advance().unwrap(), Transition::Completed);
        assert!(flow.is_complete());

        assert!(matches!(flow.advance(), Err(GateError::FlowCompleted)));
        assert!(matches!(flow.retreat(), Err(GateError::FlowCompleted)));
        assert!(matches!(
            flow.record_answer("b", Answer::Yes),
            Err(GateError::FlowCompleted)
        ));
    }

    let calls = calls.into_inner();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 2);
    assert_eq!(calls[0].get("a"), Some(&Answer::Yes));
    assert_eq!(calls[0].get("b"), Some(&Answer::no()));
}

#[test]
fn retreat_then_advance_keeps_answer() {
    let mut flow = FlowController::new(set_ab(), |_| {});
    flow.record_answer("a", Answer::Yes).unwrap();
    flow.advance().unwrap();
    flow.retreat().unwrap();

    assert_eq!(flow.step_index(), 0);
    assert_eq!(flow.answers().get("a"), Some(&Answer::Yes));

    flow.advance().unwrap();
    assert_eq!(flow.answers().get("a"), Some(&Answer::Yes));
    assert_eq!(flow.answers().len(), 1);
}

#[test]
fn later_custom_edits_replace_earlier_ones() {
    let mut flow = FlowController::new(set_ab(), |_| {});
    flow.record_answer("a", Answer::Yes).unwrap();
    flow.advance().unwrap();

    flow.record_answer("b", Answer::no_with("cuda")).unwrap();
    flow.record_answer("b", Answer::no_with("cuda and cudnn")).unwrap();
    assert_eq!(
        flow.answers().get("b"),
        Some(&Answer::no_with("cuda and cudnn"))
    );
}

#[test]
fn missing_docker_example_is_all_met() {
    let mut delivered = None;
    {
        let mut flow = FlowController::new(set_ab(), |answers| delivered = Some(answers));
        flow.record_answer("a", Answer::Yes).unwrap();
        flow.advance().unwrap();
        flow.record_answer("b", Answer::no_with("missing docker")).unwrap();
        flow.advance().unwrap();
    }

    let answers = delivered.unwrap();
    assert!(answers.all_requirements_met());
    assert_eq!(
        serde_json::to_value(&answers).unwrap(),
        serde_json::json!({
            "a": "yes",
            "b": { "answer": "no", "customValue": "missing docker" }
        })
    );

    let report = CompletionReport::new(&set_ab(), &answers);
    assert!(report.all_met);
}

#[test]
fn bare_no_on_custom_step_advances_but_is_unmet() {
    let mut delivered = None;
    {
        let mut flow = FlowController::new(set_ab(), |answers| delivered = Some(answers));
        flow.record_answer("a", Answer::Yes).unwrap();
        flow.advance().unwrap();
        flow.record_answer("b", Answer::no()).unwrap();
        assert_eq!(flow.advance().unwrap(), Transition::Completed);
    }

    let answers = delivered.unwrap();
    assert!(!answers.all_requirements_met());
    assert_eq!(answers.unmet(), vec!["b"]);
}

#[test]
fn retreat_at_first_step_is_rejected() {
    let mut flow = FlowController::new(set_ab(), |_| {});
    flow.record_answer("a", Answer::no()).unwrap();
    let before = flow.state().clone();

    assert!(matches!(flow.retreat(), Err(GateError::AtFirstStep)));
    assert_eq!(flow.state(), &before);
}

#[test]
fn view_follows_controller() {
    let mut flow = FlowController::new(set_ab(), |_| {});
    let view = StepView::render(&flow).unwrap();
    assert_eq!(view.title, "Docker Check");
    assert_eq!(view.description, "Is Docker installed and running?");
    assert!(!view.navigation.back_visible);
    assert_eq!(view.indicator(), "Step 1 of 2");
    assert!(view.custom_input.is_none());

    flow.record_answer("a", Answer::Yes).unwrap();
    flow.advance().unwrap();
    flow.record_answer("b", Answer::no()).unwrap();

    let view = StepView::render(&flow).unwrap();
    assert!(view.navigation.back_visible);
    assert_eq!(view.navigation.next_label, "Start Build");
    assert!(view.custom_input.is_some());

    let answer = view
        .answer_for(&StepIntent::EditCustom("later".into()))
        .unwrap();
    assert_eq!(answer, Answer::no_with("later"));
}

#[test]
fn independent_controllers_do_not_share_state() {
    let mut first = FlowController::new(set_ab(), |_| {});
    let second = FlowController::new(set_ab(), |_| {});

    first.record_answer("a", Answer::Yes).unwrap();
    first.advance().unwrap();

    assert_eq!(second.step_index(), 0);
    assert!(second.answers().is_empty());
}
