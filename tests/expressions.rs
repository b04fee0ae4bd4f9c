use std::fs;

use rcalc::{
    error::{ErrorKind, ValidationError},
    evaluate, parse, validate,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (input, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let result = evaluate(&input);
            match expected {
                Expected::Value(value) => match result {
                    Ok(actual) => assert_eq!(actual,
                                             value,
                                             "case {} in {path:?}: '{input}'",
                                             i + 1),
                    Err(e) => panic!("case {} in {path:?} failed:\n{input}\nError: {e}", i + 1),
                },
                Expected::Error { message, position } => match result {
                    Ok(v) => panic!("case {} in {path:?}: '{input}' evaluated to {v}", i + 1),
                    Err(e) => assert_eq!((e.message(), e.position),
                                         (message.as_str(), position),
                                         "case {} in {path:?}: '{input}'",
                                         i + 1),
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

enum Expected {
    Value(f64),
    Error { message: String, position: usize },
}

/// Reads `input => value` and `input => ! message @ position` lines.
fn extract_cases(content: &str) -> Vec<(String, Expected)> {
    let mut cases = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (input, expected) = line.split_once(" => ")
                                    .unwrap_or_else(|| panic!("Malformed case line: {line}"));
        let expected = if let Some(error) = expected.strip_prefix('!') {
            let (message, position) = error.rsplit_once('@')
                                           .unwrap_or_else(|| panic!("Missing position: {line}"));
            Expected::Error { message:  message.trim().to_string(),
                              position: position.trim().parse().unwrap(), }
        } else {
            Expected::Value(expected.trim().parse().unwrap())
        };
        cases.push((input.to_string(), expected));
    }

    cases
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "'{src}'"),
        Err(e) => panic!("Expression failed:\n{e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind, position: usize) -> ValidationError {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => {
            assert_eq!((e.kind, e.position), (kind, position), "'{src}'");
            e
        },
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 - 3", 4.0);
    assert_value("5 * 3", 15.0);
    assert_value("6 / 2", 3.0);
}

#[test]
fn mixed_expression_with_unary_minus() {
    assert_value("-6 + 3 * 8 / (-16) * (-5 + 4 * (-3)) + 6 * (2 / (-6 - (-8))) - 8 + 5 * 2 / 4 * 6 + 1",
                 33.5);
}

#[test]
fn equal_precedence_chains_associate_left() {
    assert_value("7 - 3 - 2", 2.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("2 - 3 + 4", 3.0);
    assert_value("12 / 3 * 2", 8.0);
    assert_eq!(parse("1 - 2 - 3 - 4").unwrap().to_string(), "(((1 - 2) - 3) - 4)");
}

#[test]
fn multiplication_binds_tighter() {
    assert_value("1 + 2 * 3", 7.0);
    assert_value("1 * 2 + 3", 5.0);
    assert_value("(1 + 2) * 3", 9.0);
    assert_eq!(parse("1 + 2 * 3 - 4 / 2").unwrap().to_string(),
               "((1 + (2 * 3)) - (4 / 2))");
}

#[test]
fn redundant_brackets_are_ignored() {
    assert_value("(((5)))", 5.0);
    assert_value("((2) + (3))", 5.0);
    assert_eq!(parse("((1 + 2))").unwrap(), parse("1 + 2").unwrap());
}

#[test]
fn whitespace_is_stripped_everywhere() {
    assert_value(" \t1\n+\r2 ", 3.0);
    assert_value("1 0 * 2", 20.0);
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert!(evaluate("1 / 0").unwrap().is_infinite());
    assert!(evaluate("-1 / 0").unwrap().is_sign_negative());
    assert!(evaluate("0 / 0").unwrap().is_nan());
    assert!(evaluate("1 / (3 - 3)").unwrap().is_infinite());
}

#[test]
fn unbalanced_brackets_report_missing_close_paren() {
    // Both directions share one message.
    assert_failure("(1", ErrorKind::CloseParenExpected, 0);
    assert_failure("1)", ErrorKind::CloseParenExpected, 1);
    assert_failure("((1)", ErrorKind::CloseParenExpected, 0);
    assert_failure("(1))", ErrorKind::CloseParenExpected, 3);
    assert_failure("(1) + ((2", ErrorKind::CloseParenExpected, 5);
}

#[test]
fn bracket_check_runs_before_character_check() {
    assert_failure("(a", ErrorKind::CloseParenExpected, 0);
    assert_failure("é)", ErrorKind::CloseParenExpected, 1);
}

#[test]
fn illegal_characters() {
    assert_failure("2 + a + 3", ErrorKind::IllegalCharacter, 2);
    assert_failure("1 & 5", ErrorKind::IllegalCharacter, 1);
    assert_failure("2 ^ 3", ErrorKind::IllegalCharacter, 1);
    assert_failure("2 + é", ErrorKind::IllegalCharacter, 2);
}

#[test]
fn extra_symbols() {
    assert_failure("3 + () + 8", ErrorKind::ExtraSymbol, 3);
    assert_failure("6 ++ 2", ErrorKind::ExtraSymbol, 2);
    assert_failure("5 + (* 8)", ErrorKind::ExtraSymbol, 3);
    assert_failure("5 + (/ 8)", ErrorKind::ExtraSymbol, 3);
    assert_failure("3 + (8 -)", ErrorKind::ExtraSymbol, 4);
    assert_failure("/ 3 + 8", ErrorKind::ExtraSymbol, 0);
    assert_failure("* 3", ErrorKind::ExtraSymbol, 0);
    assert_failure("5 +", ErrorKind::ExtraSymbol, 1);
    assert_failure("-", ErrorKind::ExtraSymbol, 0);
}

#[test]
fn first_extra_symbol_group_wins_over_second() {
    // `*` at the start is in the second group; the doubled operator later on
    // is in the first, so it is reported even though it is further right.
    assert_failure("*3 + -2", ErrorKind::ExtraSymbol, 3);
}

#[test]
fn missing_operators() {
    assert_failure("(3 + 2) (8 + 6)", ErrorKind::MissingOperator, 5);
    assert_failure("3 (8 + 10)", ErrorKind::MissingOperator, 1);
    assert_failure("(1 + 2) 5", ErrorKind::MissingOperator, 5);
    assert_failure("12(3)", ErrorKind::MissingOperator, 2);
}

#[test]
fn empty_input_is_rejected() {
    assert_failure("", ErrorKind::EmptyExpression, 0);
    assert_failure(" \t ", ErrorKind::EmptyExpression, 0);
}

#[test]
fn error_display_points_at_the_offending_character() {
    let e = assert_failure("6 ++ 2", ErrorKind::ExtraSymbol, 2);
    assert_eq!(e.to_string(),
               "Expression validation error:\n6++2\n  ^\nExtra symbol was found.");

    let e = assert_failure("(1", ErrorKind::CloseParenExpected, 0);
    assert_eq!(e.to_string(), "Expression validation error:\n(1\n^\n')' expected.");
}

#[test]
fn errors_are_deterministic() {
    for src in ["(1 + 2) 5", "3 + () + 8", "((1)", "2 + a"] {
        assert_eq!(evaluate(src).unwrap_err(), evaluate(src).unwrap_err());
    }
}

#[test]
fn validate_agrees_with_evaluate() {
    assert!(validate("-(1 + 2) * 3").is_ok());
    assert_eq!(validate("6 ++ 2").unwrap_err(), evaluate("6 ++ 2").unwrap_err());
}
