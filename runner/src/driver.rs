//! The run driver: suspension points, pacing, and the sink contract.

use searchlab_engine::{RunReport, SearchSession, StepEmit, StepRecord, VizState};

use crate::pacer::{CancelToken, Pacer};

/// Contract for the visualization layer (an external collaborator: the
/// rendering side is out of scope here, only this seam is specified).
pub trait VizSink {
    /// One step record and the visualization state after it.
    fn on_step(&mut self, record: &StepRecord, viz: &VizState);
    /// The terminal report, exactly once per run.
    fn on_finished(&mut self, report: &RunReport);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl VizSink for NullSink {
    fn on_step(&mut self, _record: &StepRecord, _viz: &VizState) {}
    fn on_finished(&mut self, _report: &RunReport) {}
}

/// Sink that collects everything it is handed (tests).
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    pub steps: Vec<StepEmit>,
    pub reports: Vec<RunReport>,
}

impl VizSink for CollectingSink {
    fn on_step(&mut self, record: &StepRecord, viz: &VizState) {
        self.steps.push(StepEmit {
            record: record.clone(),
            viz: viz.clone(),
        });
    }

    fn on_finished(&mut self, report: &RunReport) {
        self.reports.push(report.clone());
    }
}

/// Drive a session to its terminal state.
///
/// Each iteration is one suspension point: check the cancel token, take one
/// engine step, forward it to the sink, then pause. Cancellation observed
/// at a suspension point marks the run aborted and leaves every
/// already-emitted record and the last visualization state intact.
pub fn drive(
    session: &mut SearchSession,
    pacer: &dyn Pacer,
    cancel: &CancelToken,
    sink: &mut dyn VizSink,
) -> RunReport {
    loop {
        if cancel.is_cancelled() {
            session.cancel();
            break;
        }
        let Some(emit) = session.step() else {
            break;
        };
        sink.on_step(&emit.record, &emit.viz);
        if session.is_finished() {
            break;
        }
        pacer.pause();
    }
    let report = session
        .report()
        .unwrap_or(RunReport {
            outcome: searchlab_engine::RunOutcome::Aborted,
            warnings: session.warnings().to_vec(),
        });
    sink.on_finished(&report);
    report
}
