//! Tests for the outcome pipeline: short-circuiting, identity, payload
//! absence, and projection.

use std::cell::Cell;

use super::*;
use rstest::{fixture, rstest};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Article {
    id: u64,
    subject: String,
}

#[derive(Debug, PartialEq, Eq)]
struct ArticleResponse {
    article: Article,
}

fn lookup(id: u64) -> Outcome<Article> {
    if id == 999 {
        Outcome::fail(ResultCode::not_found(), "not found")
    } else {
        Outcome::success(
            ResultCode::ok(),
            "found",
            Article {
                id,
                subject: "first".into(),
            },
        )
    }
}

#[fixture]
fn calls() -> Cell<usize> {
    Cell::new(0)
}

#[rstest]
fn produce_empty_is_a_payloadless_success() {
    let seed = Outcome::<Article>::produce_empty();
    assert!(seed.is_success());
    assert_eq!(seed.code(), &ResultCode::ok());
    assert_eq!(seed.message(), EMPTY_SUCCESS_MESSAGE);
    assert!(seed.payload().is_none());
}

type Step<T> = Box<dyn FnOnce(Success<T>) -> Outcome<T>>;

fn run_chain<T>(seed: Outcome<T>, steps: Vec<Step<T>>) -> Outcome<T> {
    steps.into_iter().fold(seed, Outcome::then)
}

#[rstest]
#[case::empty_success(Outcome::produce_empty(), "S-1", EMPTY_SUCCESS_MESSAGE, None)]
#[case::found(lookup(5), "S-1", "found", Some(5))]
#[case::not_found(lookup(999), "F-404", "not found", None)]
fn chaining_zero_steps_is_identity(
    #[case] seed: Outcome<Article>,
    #[case] code: &str,
    #[case] message: &str,
    #[case] payload_id: Option<u64>,
) {
    let outcome = run_chain(seed, Vec::new());

    assert_eq!(outcome.code().as_ref(), code);
    assert_eq!(outcome.message(), message);
    assert_eq!(outcome.payload().map(|article| article.id), payload_id);
}

#[rstest]
fn chain_helper_applies_each_step_in_order() {
    let steps: Vec<Step<Article>> = vec![
        Box::new(|_| lookup(5)),
        Box::new(|success| {
            let mut article = success.into_payload().expect("looked-up article");
            article.subject = "second".into();
            Outcome::success(ResultCode::ok(), "renamed", article)
        }),
    ];

    let outcome = run_chain(Outcome::produce_empty(), steps);

    assert_eq!(outcome.message(), "renamed");
    assert_eq!(
        outcome.payload().map(|article| article.subject.as_str()),
        Some("second")
    );
}

#[rstest]
fn success_scenario_yields_looked_up_payload() {
    let outcome = Outcome::<Article>::produce_empty().then(|_| lookup(5));
    assert!(outcome.is_success());
    assert_eq!(outcome.payload().map(|article| article.id), Some(5));
}

#[rstest]
fn not_found_short_circuits_authorisation(calls: Cell<usize>) {
    let outcome = Outcome::<Article>::produce_empty()
        .then(|_| lookup(999))
        .then(|success| {
            calls.set(calls.get() + 1);
            Outcome::<Article>::from(success)
        });

    assert_eq!(calls.get(), 0, "authorise step must not run");
    assert!(outcome.is_failure());
    assert_eq!(outcome.code().as_ref(), "F-404");
    assert_eq!(outcome.message(), "not found");
    assert!(outcome.payload().is_none());
}

#[rstest]
fn forbidden_mid_chain_skips_mutation(calls: Cell<usize>) {
    let outcome = Outcome::<Article>::produce_empty()
        .then(|_| lookup(5))
        .then_payload(|_article| Outcome::<Article>::fail(ResultCode::forbidden(), "not yours"))
        .then_payload(|mut article| {
            calls.set(calls.get() + 1);
            article.subject = "mutated".into();
            Outcome::success(ResultCode::ok(), "modified", article)
        });

    assert_eq!(calls.get(), 0, "mutate step must not run");
    assert_eq!(outcome.code().as_ref(), "F-403");
    assert_eq!(outcome.message(), "not yours");
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(4)]
fn failure_at_any_position_stops_the_rest(#[case] failing_step: usize, calls: Cell<usize>) {
    let step = |index: usize, input: Success<usize>| -> Outcome<usize> {
        calls.set(calls.get() + 1);
        if index == failing_step {
            Outcome::fail(ResultCode::failure(409), format!("step {index} failed"))
        } else {
            let seen = input.payload().copied().unwrap_or_default();
            Outcome::success(ResultCode::ok(), "ok", seen + 1)
        }
    };

    let outcome = Outcome::<usize>::produce_empty()
        .then(|s| step(1, s))
        .then(|s| step(2, s))
        .then(|s| step(3, s))
        .then(|s| step(4, s))
        .then(|s| step(5, s));

    assert_eq!(calls.get(), failing_step);
    assert_eq!(outcome.code().as_ref(), "F-409");
    assert_eq!(outcome.message(), format!("step {failing_step} failed"));
    assert!(outcome.payload().is_none());
}

#[rstest]
fn step_output_replaces_the_held_value_verbatim() {
    let outcome = lookup(5)
        .then(|_| Outcome::<String>::success(ResultCode::success(2), "renamed", "x".into()));
    assert_eq!(outcome.code().as_ref(), "S-2");
    assert_eq!(outcome.message(), "renamed");
    assert_eq!(outcome.payload().map(String::as_str), Some("x"));
}

#[rstest]
fn map_to_response_projects_payload_and_keeps_status() {
    let outcome = lookup(5).map_to_response(|article| ArticleResponse { article });
    assert!(outcome.is_success());
    assert_eq!(outcome.code(), &ResultCode::ok());
    assert_eq!(outcome.message(), "found");
    assert_eq!(
        outcome.payload().map(|response| response.article.id),
        Some(5)
    );
}

#[rstest]
fn map_to_response_never_calls_projector_on_failure() {
    let outcome = lookup(999)
        .map_to_response(|_article| -> ArticleResponse { panic!("projector must not run") });
    assert_eq!(outcome.code(), &ResultCode::not_found());
    assert_eq!(outcome.message(), "not found");
}

#[rstest]
fn map_to_response_skips_projector_without_payload() {
    let outcome = Outcome::<Article>::produce_empty()
        .map_to_response(|_article| -> ArticleResponse { panic!("projector must not run") });
    assert!(outcome.is_success());
    assert!(outcome.payload().is_none());
}

#[rstest]
fn then_payload_turns_missing_payload_into_internal_failure(calls: Cell<usize>) {
    let outcome = Outcome::<Article>::produce_empty().then_payload(|article| {
        calls.set(calls.get() + 1);
        Outcome::success(ResultCode::ok(), "unreachable", article)
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(outcome.code(), &ResultCode::internal());
}

#[rstest]
#[case("F-404")]
#[case("F-403")]
#[case("E-1")]
fn of_drops_payload_for_failure_codes(#[case] raw: &str) {
    let code = ResultCode::new(raw).expect("valid code");
    let outcome = Outcome::of(code, "failed", Some(lookup(5)));
    assert!(outcome.is_failure());
    assert!(outcome.payload().is_none());
    assert!(outcome.into_payload().is_none());
}

#[rstest]
fn of_keeps_payload_for_success_codes() {
    let outcome = Outcome::of(ResultCode::success(201), "created", Some(3_u8));
    assert!(outcome.is_success());
    assert_eq!(outcome.into_payload(), Some(3));
}

#[rstest]
fn try_of_rejects_payload_on_failure() {
    let result = Outcome::try_of(ResultCode::not_found(), "missing", Some(1_u8));
    assert_eq!(
        result,
        Err(OutcomeError::PayloadOnFailure {
            code: ResultCode::not_found()
        })
    );
}

#[rstest]
fn try_of_accepts_consistent_inputs() {
    let failure = Outcome::<u8>::try_of(ResultCode::not_found(), "missing", None)
        .expect("failure without payload is consistent");
    assert!(failure.is_failure());
    let success = Outcome::try_of(ResultCode::ok(), "ok", Some(1_u8)).expect("consistent");
    assert_eq!(success.payload(), Some(&1));
}

#[rstest]
fn into_result_round_trips_through_question_mark() {
    fn modify(id: u64) -> Result<u64, Failure> {
        let success = lookup(id).into_result()?;
        Ok(success.into_payload().map(|article| article.id).unwrap_or_default())
    }

    assert_eq!(modify(5), Ok(5));
    let failure = modify(999).expect_err("missing article");
    assert_eq!(failure.code(), &ResultCode::not_found());
    assert_eq!(failure.to_string(), "F-404: not found");
    let back = Outcome::from(Err::<Success<u64>, Failure>(failure));
    assert!(back.is_failure());
}
