use carelink_core::{
    parse_command, parse_link_args, sample_address_book, CommandError, Nric, NricError,
    ParseError,
};

#[test]
fn parse_link_args_accepts_either_prefix_order() {
    let forward = parse_link_args("p/S1234567A c/S7654321B").unwrap();
    let reversed = parse_link_args("  c/S7654321B   p/s1234567a ").unwrap();

    assert_eq!(forward, reversed);
    assert_eq!(forward.patient_nric().as_str(), "S1234567A");
    assert_eq!(forward.caregiver_nric().as_str(), "S7654321B");
}

#[test]
fn parse_link_args_rejects_missing_repeated_and_unknown_tokens() {
    for input in [
        "",
        "p/S1234567A",
        "c/S7654321B",
        "p/S1234567A p/T0123456C c/S7654321B",
        "p/S1234567A c/S7654321B extra",
        "S1234567A S7654321B",
    ] {
        let err = parse_link_args(input).unwrap_err();
        assert!(
            matches!(err, ParseError::InvalidFormat { .. }),
            "unexpected result for `{input}`: {err:?}"
        );
    }
}

#[test]
fn parse_link_args_validates_nric_format() {
    let err = parse_link_args("p/S12345A c/S7654321B").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidNric(NricError::InvalidFormat("S12345A".to_string()))
    );
}

#[test]
fn invalid_format_message_includes_usage() {
    let err = parse_link_args("p/S1234567A").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Invalid command format!"));
    assert!(message.contains("Example: link p/S1234567A c/S7654321B"));
}

#[test]
fn parse_command_dispatches_link_and_executes() {
    let mut book = sample_address_book().unwrap();

    let command = parse_command("link p/S1234567A c/S7654321B").unwrap();
    assert_eq!(command.word(), "link");

    let outcome = command.execute(&mut book).unwrap();
    assert!(outcome.feedback.starts_with("Linked Alex Yeoh"));

    let again = parse_command("link c/s7654321b p/s1234567a").unwrap();
    assert_eq!(
        again.execute(&mut book).unwrap_err(),
        CommandError::DuplicateLink
    );
    assert_eq!(book.link_count(), 1);
}

#[test]
fn parse_command_rejects_blank_and_unknown_words() {
    assert_eq!(parse_command("   ").err(), Some(ParseError::EmptyInput));
    assert_eq!(
        parse_command("unlink p/S1234567A c/S7654321B").err(),
        Some(ParseError::UnknownCommand("unlink".to_string()))
    );
}

#[test]
fn parsed_nric_matches_direct_parse() {
    let command = parse_link_args("p/s1234567a c/s7654321b").unwrap();
    assert_eq!(command.patient_nric(), &Nric::parse("S1234567A").unwrap());
}
