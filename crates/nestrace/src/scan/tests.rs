use nestrace_format::FormatError;

use super::*;
use crate::Error;

/// Build a trace line in the nestest column layout.
fn line(pc: u16, op: &str, mnemonic: &str, a: &str, sp: &str, cyc: u16) -> String {
    let head = format!("{pc:04X}  {op} 00     {mnemonic} #$00");
    format!("{head:<48}A:{a} X:00 Y:00 P:24 SP:{sp} CYC:{cyc:>3}")
}

fn trace(len: u16) -> Vec<String> {
    (0..len)
        .map(|i| line(0xC000 + i, "EA", "NOP", "00", "FD", i * 2))
        .collect()
}

fn streams(candidate: Vec<String>, reference: Vec<String>) -> (TraceStream, TraceStream) {
    (
        TraceStream::from_lines("candidate.log", candidate),
        TraceStream::from_lines("reference.log", reference),
    )
}

fn scan<'a>(candidate: &'a TraceStream, reference: &'a TraceStream) -> ScanOutcome<'a> {
    Scanner::new(candidate, reference, ScanConfig::default())
        .run()
        .unwrap()
}

fn expect_divergence(outcome: ScanOutcome<'_>) -> Divergence<'_> {
    match outcome {
        ScanOutcome::DivergenceFound(d) => d,
        ScanOutcome::AllMatched(s) => panic!("expected divergence, all matched: {s:?}"),
    }
}

#[test]
fn test_identical_traces_match() {
    let (c, r) = streams(trace(30), trace(30));
    match scan(&c, &r) {
        ScanOutcome::AllMatched(summary) => {
            assert_eq!(summary.compared, 30);
            assert!(!summary.length_mismatch());
        }
        ScanOutcome::DivergenceFound(d) => panic!("unexpected divergence at {}", d.index),
    }
}

#[test]
fn test_identical_traces_never_enter_divergence() {
    let (c, r) = streams(trace(8), trace(8));
    let mut scanner = Scanner::new(&c, &r, ScanConfig::default());
    while !scanner.state().is_terminal() {
        let state = scanner.step().unwrap();
        assert!(!matches!(state, ScanState::DivergenceFound(_)));
    }
    assert!(matches!(scanner.state(), ScanState::AllMatched(_)));
}

#[test]
fn test_empty_traces_match() {
    let (c, r) = streams(Vec::new(), Vec::new());
    match scan(&c, &r) {
        ScanOutcome::AllMatched(summary) => assert_eq!(summary.compared, 0),
        ScanOutcome::DivergenceFound(_) => panic!("empty traces cannot diverge"),
    }
}

#[test]
fn test_single_field_change_found_at_its_index() {
    for index in [0usize, 1, 7, 19] {
        let reference = trace(20);
        let mut candidate = reference.clone();
        let pc = 0xC000 + u16::try_from(index).unwrap();
        let cyc = u16::try_from(index * 2).unwrap();
        candidate[index] = line(pc, "EA", "NOP", "05", "FD", cyc);

        let (c, r) = streams(candidate, reference);
        let divergence = expect_divergence(scan(&c, &r));
        assert_eq!(divergence.index, index);
        assert_eq!(divergence.mismatched_fields(), vec![TraceField::RegisterA]);
    }
}

#[test]
fn test_each_field_triggers_divergence() {
    let base = line(0xC000, "A5", "LDA", "00", "FD", 7);
    let variants = [
        (
            line(0xC001, "A5", "LDA", "00", "FD", 7),
            TraceField::ProgramCounter,
        ),
        (
            line(0xC000, "A9", "LDA", "00", "FD", 7),
            TraceField::OpcodeByte,
        ),
        (
            line(0xC000, "A5", "LDX", "00", "FD", 7),
            TraceField::Mnemonic,
        ),
        (
            line(0xC000, "A5", "LDA", "05", "FD", 7),
            TraceField::RegisterA,
        ),
        (
            line(0xC000, "A5", "LDA", "00", "FB", 7),
            TraceField::StackPointer,
        ),
        (
            line(0xC000, "A5", "LDA", "00", "FD", 8),
            TraceField::CycleCount,
        ),
        (base.replacen("X:00", "X:01", 1), TraceField::RegisterX),
        (base.replacen("Y:00", "Y:01", 1), TraceField::RegisterY),
        (base.replacen("P:24", "P:A4", 1), TraceField::StatusFlags),
    ];

    for (changed, field) in variants {
        let (c, r) = streams(vec![changed], vec![base.clone()]);
        let divergence = expect_divergence(scan(&c, &r));
        assert_eq!(divergence.index, 0);
        assert_eq!(divergence.mismatched_fields(), vec![field]);
    }
}

#[test]
fn test_hex_case_is_a_mismatch() {
    let (c, r) = streams(
        vec![line(0xC000, "a5", "LDA", "00", "FD", 0)],
        vec![line(0xC000, "A5", "LDA", "00", "FD", 0)],
    );
    let divergence = expect_divergence(scan(&c, &r));
    assert_eq!(divergence.mismatched_fields(), vec![TraceField::OpcodeByte]);
}

#[test]
fn test_text_outside_columns_ignored() {
    let reference = trace(5);
    let candidate: Vec<String> = reference
        .iter()
        .map(|l| format!("{}  PPU: 12,345", l.replace("#$00", "#$FF")))
        .collect();

    let (c, r) = streams(candidate, reference);
    assert!(matches!(scan(&c, &r), ScanOutcome::AllMatched(_)));
}

#[test]
fn test_register_a_example() {
    let reference = vec![
        line(0x0400, "A9", "LDA", "00", "FD", 5),
        line(0x0401, "A5", "LDA", "05", "FD", 7),
    ];
    let candidate = vec![
        line(0x0400, "A9", "LDA", "00", "FD", 5),
        format!("{}   ", line(0x0401, "A5", "LDA", "00", "FD", 7)),
    ];

    let (c, r) = streams(candidate, reference);
    let divergence = expect_divergence(scan(&c, &r));
    assert_eq!(divergence.index, 1);
    assert_eq!(divergence.candidate.register_a, "00");
    assert_eq!(divergence.reference.register_a, "05");
    assert_eq!(divergence.mismatched_fields(), vec![TraceField::RegisterA]);
}

#[test]
fn test_window_has_eleven_rows_mid_trace() {
    let reference = trace(40);
    let mut candidate = reference.clone();
    candidate[20] = line(0xC014, "EA", "NOP", "01", "FD", 40);

    let (c, r) = streams(candidate, reference);
    let divergence = expect_divergence(scan(&c, &r));
    let rows = divergence.window.rows();

    assert_eq!(rows.len(), 11);
    assert_eq!(divergence.window.bounds(), Some((15, 25)));
    assert!(rows.windows(2).all(|w| w[0].index < w[1].index));
    assert_eq!(rows.iter().filter(|row| row.divergent).count(), 1);
    assert!(rows[5].divergent);
    assert_eq!(rows[5].index, 20);
    for row in rows {
        assert_eq!(row.candidate, c.line(row.index).unwrap());
        assert_eq!(row.reference, r.line(row.index).unwrap());
    }
}

#[test]
fn test_window_clamps_at_start() {
    let reference = trace(20);
    let mut candidate = reference.clone();
    candidate[0] = line(0xC000, "EA", "NOP", "01", "FD", 0);

    let (c, r) = streams(candidate, reference);
    let divergence = expect_divergence(scan(&c, &r));
    assert_eq!(divergence.window.bounds(), Some((0, 5)));
    assert_eq!(divergence.window.len(), 6);
    assert!(divergence.window.rows()[0].divergent);
}

#[test]
fn test_window_clamps_at_end() {
    let reference = trace(12);
    let mut candidate = reference.clone();
    candidate[9] = line(0xC009, "EA", "NOP", "01", "FD", 18);

    let (c, r) = streams(candidate, reference);
    let divergence = expect_divergence(scan(&c, &r));
    assert_eq!(divergence.window.bounds(), Some((4, 11)));
    assert_eq!(divergence.window.len(), 8);
}

#[test]
fn test_window_clamps_to_shorter_stream() {
    let reference = trace(30);
    let mut candidate = trace(12);
    candidate[10] = line(0xC00A, "EA", "NOP", "01", "FD", 20);

    let (c, r) = streams(candidate, reference);
    let divergence = expect_divergence(scan(&c, &r));
    assert_eq!(divergence.window.bounds(), Some((5, 11)));
}

#[test]
fn test_custom_context_radius() {
    let reference = trace(30);
    let mut candidate = reference.clone();
    candidate[15] = line(0xC00F, "EA", "NOP", "01", "FD", 30);

    let (c, r) = streams(candidate, reference);
    let config = ScanConfig {
        context: 2,
        ..Default::default()
    };
    let divergence = expect_divergence(Scanner::new(&c, &r, config).run().unwrap());
    assert_eq!(divergence.window.bounds(), Some((13, 17)));

    let config = ScanConfig {
        context: 0,
        ..Default::default()
    };
    let divergence = expect_divergence(Scanner::new(&c, &r, config).run().unwrap());
    assert_eq!(divergence.window.len(), 1);
}

#[test]
fn test_length_mismatch_matches_prefix() {
    let (c, r) = streams(trace(10), trace(25));
    match scan(&c, &r) {
        ScanOutcome::AllMatched(summary) => {
            assert_eq!(summary.compared, 10);
            assert_eq!(summary.candidate_len, 10);
            assert_eq!(summary.reference_len, 25);
            assert!(summary.length_mismatch());
        }
        ScanOutcome::DivergenceFound(d) => panic!("unexpected divergence at {}", d.index),
    }
}

#[test]
fn test_first_divergence_wins() {
    let reference = trace(20);
    let mut candidate = reference.clone();
    candidate[4] = line(0xC004, "EA", "NOP", "01", "FD", 8);
    candidate[12] = line(0xC00C, "EA", "NOP", "01", "FD", 24);

    let (c, r) = streams(candidate, reference);
    assert_eq!(expect_divergence(scan(&c, &r)).index, 4);
}

#[test]
fn test_terminal_state_is_absorbing() {
    let reference = trace(5);
    let mut candidate = reference.clone();
    candidate[2] = line(0xC002, "EA", "NOP", "01", "FD", 4);

    let (c, r) = streams(candidate, reference);
    let mut scanner = Scanner::new(&c, &r, ScanConfig::default());
    assert_eq!(scanner.limit(), 5);
    while !scanner.state().is_terminal() {
        scanner.step().unwrap();
    }
    let index = match scanner.state() {
        ScanState::DivergenceFound(d) => d.index,
        other => panic!("expected divergence, got {other:?}"),
    };
    assert_eq!(index, 2);

    scanner.step().unwrap();
    assert!(matches!(scanner.state(), ScanState::DivergenceFound(d) if d.index == 2));
}

#[test]
fn test_run_resumes_from_current_state() {
    let reference = trace(10);
    let mut candidate = reference.clone();
    candidate[7] = line(0xC007, "EA", "NOP", "01", "FD", 14);
    let (c, r) = streams(candidate, reference);

    let mut scanner = Scanner::new(&c, &r, ScanConfig::default());
    for _ in 0..3 {
        scanner.step().unwrap();
    }
    assert!(matches!(scanner.state(), ScanState::Scanning { index: 3 }));
    assert_eq!(expect_divergence(scanner.run().unwrap()).index, 7);

    let mut finished = Scanner::new(&r, &r, ScanConfig::default());
    while !finished.state().is_terminal() {
        finished.step().unwrap();
    }
    match finished.run().unwrap() {
        ScanOutcome::AllMatched(summary) => assert_eq!(summary.compared, 10),
        ScanOutcome::DivergenceFound(d) => panic!("unexpected divergence at {}", d.index),
    }
}

#[test]
fn test_malformed_line_is_fatal() {
    let reference = trace(6);
    let mut candidate = reference.clone();
    candidate[3].truncate(40);

    let (c, r) = streams(candidate, reference);
    let err = Scanner::new(&c, &r, ScanConfig::default())
        .run()
        .unwrap_err();
    match err {
        Error::Format(FormatError::Malformed { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected malformed line, got {other:?}"),
    }
}

#[test]
fn test_malformed_line_after_divergence_not_reached() {
    let reference = trace(6);
    let mut candidate = reference.clone();
    candidate[1] = line(0xC001, "EA", "NOP", "01", "FD", 2);
    candidate[4].truncate(10);

    let (c, r) = streams(candidate, reference);
    assert_eq!(expect_divergence(scan(&c, &r)).index, 1);
}

#[test]
fn test_malformed_tail_beyond_shorter_stream_ignored() {
    let reference = trace(4);
    let mut candidate = trace(6);
    candidate[5] = String::from("garbage");

    let (c, r) = streams(candidate, reference);
    assert!(matches!(scan(&c, &r), ScanOutcome::AllMatched(_)));
}
