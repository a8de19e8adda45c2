use std::sync::Arc;
use std::time::Duration;

use salve::backend::mock::MockBackend;
use salve::coordinator::{Coordinator, InteractionState, Submission};
use salve::page::TriggerPort;
use salve::page::stub::{StubInput, StubOutput, StubTrigger};

struct Harness {
    coordinator: Arc<Coordinator>,
    input: Arc<StubInput>,
    output: Arc<StubOutput>,
    trigger: Arc<StubTrigger>,
    backend: Arc<MockBackend>,
}

fn wire(backend: MockBackend) -> Harness {
    let input = Arc::new(StubInput::new());
    let output = Arc::new(StubOutput::new());
    let trigger = Arc::new(StubTrigger::new());
    let backend = Arc::new(backend);
    let coordinator = Arc::new(Coordinator::new(
        input.clone(),
        output.clone(),
        trigger.clone(),
        backend.clone(),
    ));
    Harness {
        coordinator,
        input,
        output,
        trigger,
        backend,
    }
}

#[tokio::test]
async fn greets_the_typed_name() {
    let h = wire(MockBackend::replying("Hello, Ada!"));
    h.input.set("Ada");

    assert_eq!(h.coordinator.submit().await, Submission::Completed);

    assert_eq!(h.output.text(), "Hello, Ada!");
    assert_eq!(h.backend.names(), vec!["Ada"]);
    assert!(!h.trigger.disabled());
}

#[tokio::test]
async fn empty_input_is_still_submitted() {
    let h = wire(MockBackend::replying("Hello, !"));

    // Nothing typed into the field; no client-side emptiness check blocks it
    assert_eq!(h.coordinator.submit().await, Submission::Completed);

    assert_eq!(h.backend.calls(), 1);
    assert_eq!(h.backend.names(), vec![""]);
}

#[tokio::test]
async fn input_reaches_the_service_verbatim() {
    let h = wire(MockBackend::replying("Hello!"));
    h.input.set("  Grãçé Hõpper\t");

    h.coordinator.submit().await;

    assert_eq!(h.backend.names(), vec!["  Grãçé Hõpper\t"]);
}

#[tokio::test]
async fn second_submission_while_pending_is_ignored() {
    let (mock, release) = MockBackend::held("Hello, Ada!");
    let h = wire(mock);
    h.input.set("Ada");

    let first = {
        let coordinator = h.coordinator.clone();
        tokio::spawn(async move { coordinator.submit().await })
    };

    // Let the first submission reach its pending call
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(h.coordinator.state(), InteractionState::Pending);
    assert!(h.trigger.disabled());

    // The re-entry attempt: no second call, no port touched
    assert_eq!(h.coordinator.submit().await, Submission::Ignored);
    assert_eq!(h.backend.calls(), 1);
    assert!(h.trigger.disabled());

    release.send(true).unwrap();
    assert_eq!(first.await.unwrap(), Submission::Completed);

    assert_eq!(h.backend.calls(), 1);
    assert_eq!(h.output.text(), "Hello, Ada!");
    assert!(!h.trigger.disabled());
    assert_eq!(h.coordinator.state(), InteractionState::Idle);
}

#[tokio::test]
async fn failure_reenables_the_trigger_and_is_visible() {
    let h = wire(MockBackend::failing("service unreachable"));
    h.input.set("Ada");

    // A rejecting service never escapes submit — it becomes an outcome
    assert_eq!(h.coordinator.submit().await, Submission::Failed);

    assert!(h.output.text().contains("service unreachable"));
    assert!(!h.trigger.disabled());
    assert_eq!(h.coordinator.state(), InteractionState::Idle);
}

#[tokio::test]
async fn trigger_toggles_exactly_once_per_submission() {
    let h = wire(MockBackend::replying("hi"));

    h.coordinator.submit().await;
    assert_eq!(h.trigger.transitions(), vec![true, false]);

    h.coordinator.submit().await;
    assert_eq!(h.trigger.transitions(), vec![true, false, true, false]);
}

#[tokio::test]
async fn failed_submission_also_closes_the_state_machine() {
    let h = wire(MockBackend::failing("boom"));

    h.coordinator.submit().await;

    assert_eq!(h.trigger.transitions(), vec![true, false]);
    assert_eq!(h.coordinator.state(), InteractionState::Idle);
}

#[tokio::test]
async fn reply_is_rendered_verbatim() {
    for reply in ["Hello, Ada!", "", "¡Hola, Ada! ✓", "two\nlines"] {
        let h = wire(MockBackend::replying(reply));
        h.input.set("Ada");
        h.coordinator.submit().await;
        assert_eq!(h.output.text(), reply);
    }
}

#[tokio::test]
async fn each_reply_replaces_the_previous_one() {
    let h = wire(MockBackend::replying("Hello, again!"));
    h.input.set("Ada");

    h.coordinator.submit().await;
    h.coordinator.submit().await;

    assert_eq!(h.output.text(), "Hello, again!");
    assert_eq!(h.output.history().len(), 2);
}

#[tokio::test]
async fn idle_again_means_ready_again() {
    // A failure does not wedge the coordinator; the user just resubmits
    let h = wire(MockBackend::failing("flaky"));
    assert_eq!(h.coordinator.submit().await, Submission::Failed);
    assert_eq!(h.coordinator.submit().await, Submission::Failed);
    assert_eq!(h.backend.calls(), 2);
}
