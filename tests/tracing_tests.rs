#![cfg(all(feature = "effect", feature = "tracing"))]
//! Tests for the trace events emitted when an effectful pipeline short-circuits.

use funkit::effect::{compose_fallible, compose_logged, compose_multi, compose_optional, logged};
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::Level;

/// Collects formatted trace output in memory.
#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `body` with a TRACE-level subscriber and returns what it logged.
fn capture_traces<T>(body: impl FnOnce() -> T) -> (T, String) {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, body);
    (result, output.contents())
}

// =============================================================================
// Short-circuit events
// =============================================================================

#[rstest]
fn optional_short_circuit_is_traced() {
    let composed = compose_optional(|_: i32| None::<i32>, Some);

    let (result, traces) = capture_traces(|| composed(1));

    assert_eq!(result, None);
    assert!(traces.contains("TRACE"), "{traces}");
    assert!(
        traces.contains("optional composition short-circuited"),
        "{traces}"
    );
}

#[rstest]
fn fallible_short_circuit_is_traced() {
    let composed = compose_fallible(|_: i32| Err::<i32, _>("rejected"), Ok);

    let (result, traces) = capture_traces(|| composed(1));

    assert_eq!(result, Err("rejected"));
    assert!(
        traces.contains("fallible composition short-circuited"),
        "{traces}"
    );
}

#[rstest]
fn empty_multi_intermediate_is_traced() {
    let composed = compose_multi(|_: i32| Vec::<i32>::new(), |value: i32| vec![value]);

    let (result, traces) = capture_traces(|| composed(1));

    assert!(result.is_empty());
    assert!(
        traces.contains("multi composition produced no intermediate values"),
        "{traces}"
    );
}

// =============================================================================
// Quiet paths
// =============================================================================

#[rstest]
fn successful_pipelines_emit_nothing() {
    let optional = compose_optional(Some, |value: i32| Some(value + 1));
    let fallible = compose_fallible(Ok::<i32, String>, |value: i32| Ok(value * 2));
    let multi = compose_multi(|value: i32| vec![value], |value: i32| vec![value, value]);

    let (results, traces) = capture_traces(|| (optional(1), fallible(2), multi(3)));

    assert_eq!(results, (Some(2), Ok(4), vec![3, 3]));
    assert!(traces.is_empty(), "{traces}");
}

#[rstest]
fn logged_composition_never_traces() {
    let composed = compose_logged(
        |value: i32| logged(value, "first"),
        |value: i32| logged(value, "second"),
    );

    let ((_, log), traces) = capture_traces(|| composed(0));

    assert_eq!(log, vec!["first", "second"]);
    assert!(traces.is_empty(), "{traces}");
}
