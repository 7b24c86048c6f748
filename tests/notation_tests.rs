// tests/notation_tests.rs

use qpath::{
    Gate, GateError, GateSequence, format_gate_sequence, parse_gate_sequence,
    parse_gate_sequence_strict,
};

#[test]
fn test_round_trip_full_alphabet() {
    let seq = parse_gate_sequence("XHZN", 4);
    assert_eq!(format_gate_sequence(&seq), "XHZN");
    assert_eq!(seq.to_notation(), "XHZN");
}

#[test]
fn test_lenient_parse_drops_noise_characters() {
    let seq = parse_gate_sequence("xHz!!Q", 4);
    assert_eq!(
        seq,
        GateSequence::from_slots(vec![Some(Gate::X), Some(Gate::H), Some(Gate::Z), None])
    );
}

#[test]
fn test_lenient_parse_mixed_text() {
    // Words get mined for symbols; only the first `length` survive.
    let seq = parse_gate_sequence("the quick brown fox", 4);
    // t h e _ q u i c k _ b r o w n _ f o x -> h, n, x
    assert_eq!(
        seq.slots(),
        &[Some(Gate::H), Some(Gate::Noise), Some(Gate::X), None]
    );
}

#[test]
fn test_packed_sequences_round_trip() {
    let packed = [
        vec![Some(Gate::H), Some(Gate::Z), None, None],
        vec![Some(Gate::Noise), None, None, None],
        vec![None, None, None, None],
        vec![Some(Gate::X), Some(Gate::X), Some(Gate::X), Some(Gate::X)],
    ];
    for slots in packed {
        let seq = GateSequence::from_slots(slots);
        assert!(seq.is_packed());
        let reparsed = parse_gate_sequence(&format_gate_sequence(&seq), seq.len());
        assert_eq!(reparsed, seq);
    }
}

#[test]
fn test_interior_gaps_are_lost() {
    let seq = GateSequence::from_slots(vec![None, Some(Gate::H), None, Some(Gate::Z)]);
    assert!(!seq.is_packed());
    let reparsed = parse_gate_sequence(&format_gate_sequence(&seq), seq.len());
    assert_ne!(reparsed, seq);
    assert_eq!(reparsed.gates().collect::<Vec<_>>(), seq.gates().collect::<Vec<_>>());
}

#[test]
fn test_strict_parse() -> Result<(), GateError> {
    let seq = parse_gate_sequence_strict("H Z", 4)?;
    assert_eq!(seq.slots(), &[Some(Gate::H), Some(Gate::Z), None, None]);

    let err = parse_gate_sequence_strict("HQ", 4).unwrap_err();
    assert_eq!(err, GateError::InvalidSymbol { symbol: 'Q', position: 1 });
    assert_eq!(err.to_string(), "invalid gate symbol 'Q' at position 1");

    let err = parse_gate_sequence_strict("XHZNX", 4).unwrap_err();
    assert_eq!(err.to_string(), "sequence holds 4 gates but 5 were given");
    Ok(())
}
