//! Bounded fan-out: dispatch one task per input and collect every output.
//!
//! Each input is moved into its own spawned task, so a task can only ever
//! observe the value it was created with. Outputs funnel into a bounded
//! channel sized to the number of inputs, which means no producer blocks on
//! a slow consumer. After every task has joined, the channel is drained into
//! a `Vec`. Completion order is unspecified; callers that care should sort.

use std::future::Future;

use tokio::sync::mpsc;
use tracing::debug;

/// Run `task` once per input concurrently and collect all outputs.
///
/// Guarantees that every input produces exactly one output (no loss, no
/// duplication), in arbitrary order. An empty input yields an empty `Vec`
/// without spawning anything.
pub async fn fan_out<T, U, F, Fut>(inputs: Vec<T>, task: F) -> Vec<U>
where
    T: Send + 'static,
    U: Send + 'static,
    F: Fn(T) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = U> + Send + 'static,
{
    let n = inputs.len();
    if n == 0 {
        return Vec::new();
    }

    // Capacity n: every producer can complete its single send even if the
    // drain has not started yet.
    let (tx, mut rx) = mpsc::channel::<U>(n);

    let mut handles = Vec::with_capacity(n);
    for (index, input) in inputs.into_iter().enumerate() {
        let tx = tx.clone();
        let task = task.clone();
        handles.push(tokio::spawn(async move {
            let output = task(input).await;
            debug!(index, "fan-out task finished");
            // Receiver outlives all senders; a send can only fail if the
            // caller's future was dropped, in which case nobody is collecting.
            let _ = tx.send(output).await;
        }));
    }
    drop(tx);

    // Completion barrier: wait for every task before draining.
    for handle in handles {
        let _ = handle.await;
    }

    let mut results = Vec::with_capacity(n);
    while let Some(output) = rx.recv().await {
        results.push(output);
    }
    results
}
