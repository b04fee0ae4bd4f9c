use proptest::{prelude::*, sample::select};
use rcalc::{
    error::ErrorKind,
    evaluate,
    interpreter::{
        lexer::tokenize,
        parser::{normalize::normalize_signs, split::trim},
    },
};

/// Well-formed expressions: integer literals joined by the four operators,
/// with optional groups and unary minus at the start or right after `(`.
fn expression() -> impl Strategy<Value = String> {
    let body = (0u32..1000).prop_map(|n| n.to_string())
                           .prop_recursive(6, 48, 2, |inner| {
                               prop_oneof![
                                   (inner.clone(), select(vec!['+', '-', '*', '/']), inner.clone())
                                       .prop_map(|(l, op, r)| format!("{l}{op}{r}")),
                                   (inner, any::<bool>()).prop_map(|(e, negate)| {
                                       if negate { format!("(-{e})") } else { format!("({e})") }
                                   }),
                               ]
                           });

    (any::<bool>(), body).prop_map(|(negate, e)| if negate { format!("-{e}") } else { e })
}

/// Precedence-climbing evaluator used as the reference.
///
/// A leading `-` subtracts the first term from zero, matching the way unary
/// minus is defined.
struct Reference<'a> {
    bytes: &'a [u8],
    pos:   usize,
}

impl Reference<'_> {
    fn evaluate(text: &str) -> f64 {
        let mut reference = Reference { bytes: text.as_bytes(),
                                        pos:   0, };
        let value = reference.expr();
        assert_eq!(reference.pos, text.len(), "reference stopped early in '{text}'");
        value
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.bytes.get(self.pos) == Some(&byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> f64 {
        let mut acc = if self.eat(b'-') { 0.0 - self.term() } else { self.term() };
        loop {
            if self.eat(b'+') {
                acc += self.term();
            } else if self.eat(b'-') {
                acc -= self.term();
            } else {
                return acc;
            }
        }
    }

    fn term(&mut self) -> f64 {
        let mut acc = self.factor();
        loop {
            if self.eat(b'*') {
                acc *= self.factor();
            } else if self.eat(b'/') {
                acc /= self.factor();
            } else {
                return acc;
            }
        }
    }

    fn factor(&mut self) -> f64 {
        if self.eat(b'(') {
            let value = self.expr();
            assert!(self.eat(b')'));
            return value;
        }
        let start = self.pos;
        while self.bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        std::str::from_utf8(&self.bytes[start..self.pos]).unwrap().parse().unwrap()
    }
}

fn same_value(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

proptest! {
    #[test]
    fn evaluates_like_the_reference(src in expression()) {
        let expected = Reference::evaluate(&src);
        let actual = evaluate(&src).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(same_value(actual, expected), "'{}': {} != {}", src, actual, expected);
    }

    #[test]
    fn spacing_does_not_change_the_result(src in expression()) {
        let spaced = src.chars().map(|c| format!("{c} ")).collect::<String>();
        let plain = evaluate(&src).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let spaced = evaluate(&spaced).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(same_value(plain, spaced));
    }

    #[test]
    fn trimming_is_idempotent(src in expression()) {
        let tokens = normalize_signs(&tokenize(&src).unwrap());
        let once = trim(&tokens);
        prop_assert_eq!(trim(once), once);
    }

    #[test]
    fn trailing_close_paren_is_reported_where_it_stands(src in expression()) {
        let unbalanced = format!("{src})");
        let err = evaluate(&unbalanced).unwrap_err();
        prop_assert_eq!(err.kind, ErrorKind::CloseParenExpected);
        prop_assert_eq!(err.position, src.len());
        prop_assert_eq!(evaluate(&unbalanced).unwrap_err(), err);
    }

    #[test]
    fn leading_open_paren_is_reported_at_the_start(src in expression()) {
        let err = evaluate(&format!("({src}")).unwrap_err();
        prop_assert_eq!(err.kind, ErrorKind::CloseParenExpected);
        prop_assert_eq!(err.position, 0);
    }
}
