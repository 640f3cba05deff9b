//! End-to-end tests of the decoding pipeline through the library API.

use vbscout::notation::codes::{Code, ReceptionOutcome, ReceptionType, SetDestination, SetType};
use vbscout::report::SummarySink;
use vbscout::{AnalysisOptions, Analyzer, Lineup, ReportSink, Transcript};

use crate::helpers::load_fixture;

fn analyze(name: &str) -> (Transcript, vbscout::Analysis) {
    let transcript = Transcript::parse(&load_fixture(name)).expect("fixture parses");
    let analysis = Analyzer::new(AnalysisOptions::default())
        .analyze(&transcript)
        .expect("not strict");
    (transcript, analysis)
}

// ============================================================================
// Transcript Tests
// ============================================================================

#[test]
fn transcript_reads_metadata_and_rallies() {
    let transcript = Transcript::parse(&load_fixture("match.txt")).unwrap();

    assert_eq!(transcript.rallies.len(), 3);
    assert_eq!(transcript.rallies[0].index, 1);
    // comment, two metadata lines and a blank line come first
    assert_eq!(transcript.rallies[0].line_number, 5);
    assert_eq!(transcript.serve_positions.len(), 5);
    assert_eq!(transcript.serve_positions.get(&6), Some(&5));
    assert_eq!(transcript.serve_types.len(), 5);
}

#[test]
fn header_lineup_starts_in_setter_rotation() {
    let lineup = Lineup::from_header("1 2 3 4 5 6 4 9").unwrap();
    assert_eq!(lineup.rotation(), 3);
    assert_eq!(lineup.setter(), 4);
    assert_eq!(lineup.libero(), 9);
    assert_eq!(lineup.server(), 1);
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[test]
fn receptions_are_credited_to_receivers() {
    let (_, analysis) = analyze("match.txt");
    let receptions = &analysis.stats.receptions;

    assert_eq!(receptions.outcomes(3), [1, 0, 0, 0]);
    assert_eq!(
        receptions.count(3, ReceptionType::Float, ReceptionOutcome::Perfect),
        1
    );
    // the libero takes position 1 in this rotation
    assert_eq!(receptions.outcomes(9), [0, 0, 0, 1]);
}

#[test]
fn sets_are_split_by_complex() {
    let (_, analysis) = analyze("match.txt");
    let stats = &analysis.stats;

    assert_eq!(
        stats.sets_k1.count(
            4,
            3,
            SetDestination::LeftFront,
            SetType::from_len(2).unwrap()
        ),
        1
    );
    assert!(stats.sets_k1_pos1.by_player().is_empty());

    let k2: Vec<_> = stats
        .sets_k2
        .distribution(4, 3)
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();
    assert_eq!(
        k2,
        vec![(SetDestination::RightBack, 1), (SetDestination::Middle, 1)]
    );
}

#[test]
fn attacks_and_breakpoints_are_tallied() {
    let (_, analysis) = analyze("match.txt");
    let stats = &analysis.stats;

    assert_eq!(stats.attacks.outcomes(3), [1, 0, 0, 0, 0]);
    assert_eq!(stats.attacks.outcomes(2), [1, 0, 0, 0, 0]);
    assert_eq!(stats.attacks.outcomes(1), [0, 0, 0, 0, 1]);

    assert_eq!(stats.breaks.rotation(3), 1);
    assert_eq!(stats.breaks.rotation(2), -1);
    assert_eq!(stats.breaks.credits(1), 1);
    assert_eq!(stats.breaks.credits(2), 0);
}

#[test]
fn summary_sink_writes_into_any_writer() {
    let (transcript, analysis) = analyze("practice.txt");
    let mut sink = SummarySink::new(Vec::new());
    sink.consume(&analysis.report(&transcript)).unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert!(text.starts_with("Serves\n"));
    assert!(text.contains("66.7%"));
}
