//! One solve cycle: compile, exchange, project.

use crate::error::AppResult;
use cd_client::SolveClient;
use cd_params::{ParameterSet, ProblemSelection};
use cd_protocol::{compile, SolvePayload, SolveResult};
use cd_results::{project, representative_times, Snapshot};
use std::time::Instant;
use tracing::info;

/// Everything a solve needs, captured by value at submission time. Edits to
/// a live store after this point cannot reach the cycle.
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub selection: ProblemSelection,
    pub params: ParameterSet,
}

/// A finished cycle: the raw result plus the default projection over the
/// representative times (empty for families without raw arrays).
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub endpoint: &'static str,
    pub result: SolveResult,
    pub selected_times: Vec<f64>,
    pub snapshots: Vec<Snapshot>,
    pub elapsed_s: f64,
}

/// Compile without sending; the dry-run half of [`run_solve`].
pub fn compile_request(request: &SolveRequest) -> AppResult<SolvePayload> {
    Ok(compile(request.selection, &request.params)?)
}

/// Run one full cycle. A new submission does not reach back into an earlier
/// one; callers that want to supersede an in-flight cycle drop its future,
/// which tears the exchange down.
pub async fn run_solve(client: &SolveClient, request: &SolveRequest) -> AppResult<SolveOutcome> {
    let started = Instant::now();
    let payload = compile_request(request)?;
    let endpoint = payload.endpoint();
    info!(endpoint, "starting solve cycle");

    let result = client.solve(&payload).await?;
    let selected_times = representative_times(&result);
    let snapshots = project(&result, &selected_times);

    let elapsed_s = started.elapsed().as_secs_f64();
    info!(
        endpoint,
        snapshots = snapshots.len(),
        elapsed_s,
        "solve cycle finished"
    );
    Ok(SolveOutcome {
        endpoint,
        result,
        selected_times,
        snapshots,
        elapsed_s,
    })
}
