use crate::pipeline::{
    classify, count_printable, BitStringPair, CategoryCounts, ExtractionPair, Observation,
    StackOutcome, StackSimulation,
};
use serde::Serialize;
use tracing::debug;

/// Every candidate decoding of one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Size of the raw input in bytes
    pub raw_bytes: usize,
    /// Number of characters in the decoded text
    pub characters: usize,
    pub printable_characters: usize,
    pub counts: CategoryCounts,
    pub bits: BitStringPair,
    pub ascii: ExtractionPair,
    pub push_commands: usize,
    pub observations: Vec<Observation>,
    pub stack: StackOutcome,
}

/// Run every decoder over `text`.
///
/// Pure: no I/O, and identical input always yields an identical report.
/// `raw_bytes` is carried through for the caller's reporting only.
pub fn analyze(raw_bytes: usize, text: &str) -> AnalysisReport {
    let counts = classify(text);
    let bits = BitStringPair::from_text(text);
    let ascii = ExtractionPair::from_bits(&bits);
    let simulation = StackSimulation::run(text);
    let stack = simulation.render();

    debug!(
        characters = counts.total(),
        push_commands = simulation.push_commands,
        pushed = simulation.stack.len(),
        "analysis complete"
    );

    AnalysisReport {
        raw_bytes,
        characters: counts.total(),
        printable_characters: count_printable(text),
        counts,
        bits,
        ascii,
        push_commands: simulation.push_commands,
        observations: simulation.observations,
        stack,
    }
}
