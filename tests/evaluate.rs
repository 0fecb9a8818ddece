use mathsyn::{
    evaluate, evaluate_with, CalcError, ErrorKind, EvalConfig, EvaluationTrace, Expected, Token,
    TokenKind,
};
use pretty_assertions::assert_eq;

fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

#[test]
fn documented_examples() {
    init_test_logger();
    let cases = [
        ("2+3*4", 14.0),
        ("(2+3)*4", 20.0),
        ("2^3^2", 512.0),
        ("10%3", 1.0),
        ("sin(0)", 0.0),
        ("cos(0)", 1.0),
    ];
    for (input, expected) in cases {
        assert_eq!(evaluate(input), Ok(expected), "input: {input}");
    }
}

#[test]
fn arithmetic_errors() {
    init_test_logger();
    assert_eq!(evaluate("5/0"), Err(CalcError::DivisionByZero));
    assert_eq!(evaluate("5%0"), Err(CalcError::ModulusByZero));
    assert_eq!(
        evaluate("foo(1)"),
        Err(CalcError::UndefinedFunction { name: "foo".into() })
    );
    assert_eq!(
        evaluate("Sin(0)"),
        Err(CalcError::UndefinedFunction { name: "Sin".into() })
    );
}

#[test]
fn whitespace_does_not_matter() {
    init_test_logger();
    assert_eq!(evaluate("2 + 3"), evaluate("2+3"));
    assert_eq!(evaluate("\t( 2 +3 )\n* 4 "), Ok(20.0));
    assert_eq!(evaluate(" sin ( 0 ) "), Ok(0.0));
}

#[test]
fn malformed_input() {
    init_test_logger();
    let err = evaluate("2+").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);

    assert_eq!(
        evaluate("(2+3"),
        Err(CalcError::Syntax {
            expected: Expected::Op(')'),
            found: Token::Eof,
        })
    );

    let err = evaluate("2#3").unwrap_err();
    assert_eq!(
        err,
        CalcError::Lexical {
            character: '#',
            position: 1
        }
    );
    assert!(err.to_string().contains('#'));

    assert_eq!(
        evaluate("1,2"),
        Err(CalcError::Syntax {
            expected: Expected::Kind(TokenKind::EndOfInput),
            found: Token::Comma,
        })
    );
}

#[test]
fn leading_unary_minus_is_rejected() {
    init_test_logger();
    assert_eq!(
        evaluate("-5"),
        Err(CalcError::Syntax {
            expected: Expected::Operand,
            found: Token::Op('-'),
        })
    );
    assert_eq!(evaluate("0-5"), Ok(-5.0));
}

#[test]
fn lenient_scan_strict_decode() {
    init_test_logger();
    assert_eq!(evaluate(".5+5."), Ok(5.5));
    assert_eq!(
        evaluate("1..2"),
        Err(CalcError::InvalidNumber {
            text: "1..2".into(),
            position: 0
        })
    );
    assert_eq!(evaluate("2*.").unwrap_err().kind(), ErrorKind::Lexical);
}

#[test]
fn repeated_evaluation_is_stable() {
    init_test_logger();
    let first = evaluate("sin(1)^2 + cos(1)^2");
    for _ in 0..10 {
        assert_eq!(evaluate("sin(1)^2 + cos(1)^2"), first);
    }
    assert!((first.unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn deep_nesting_is_bounded() {
    init_test_logger();
    let depth = 10_000;
    let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(
        evaluate(&input),
        Err(CalcError::NestingTooDeep { limit: 256 })
    );

    let config = EvalConfig::default().with_max_depth(20_000);
    let shallow = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(
        evaluate_with(&shallow, &config, &mut EvaluationTrace::default()),
        Ok(1.0)
    );
}

#[test]
fn detailed_trace_lists_each_operation() {
    init_test_logger();
    let mut trace = EvaluationTrace::new(true);
    let value = evaluate_with("tan(0) + 10 % 4 ^ 1", &EvalConfig::default(), &mut trace);
    assert_eq!(value, Ok(2.0));
    let operations: Vec<&str> = trace.steps.iter().map(|s| s.operation.as_str()).collect();
    assert_eq!(operations, vec!["tan(0)", "4 ^ 1", "10 % 4", "0 + 2"]);
}

#[test]
fn negative_operands_read_unambiguously() {
    init_test_logger();
    assert_eq!(
        evaluate("(0-8)^0.5"),
        Err(CalcError::Domain {
            operation: "(-8) ^ 0.5".into()
        })
    );
    assert_eq!(
        evaluate("(0-8)^0.5").unwrap_err().to_string(),
        "math domain error in (-8) ^ 0.5"
    );

    let mut trace = EvaluationTrace::new(true);
    assert_eq!(
        evaluate_with("0-5+1", &EvalConfig::default(), &mut trace),
        Ok(-4.0)
    );
    let operations: Vec<&str> = trace.steps.iter().map(|s| s.operation.as_str()).collect();
    assert_eq!(operations, vec!["0 - 5", "(-5) + 1"]);
}

#[test]
fn infinite_literals_cannot_produce_nan() {
    init_test_logger();
    let huge = "9".repeat(400);
    assert_eq!(
        evaluate(&format!("{huge} - {huge}")),
        Err(CalcError::Domain {
            operation: "inf - inf".into()
        })
    );
    assert_eq!(
        evaluate(&format!("cos({huge})")),
        Err(CalcError::Domain {
            operation: "cos(inf)".into()
        })
    );
    assert_eq!(evaluate(&format!("{huge} * 2")), Ok(f64::INFINITY));
}

#[test]
fn evaluations_run_in_parallel() {
    init_test_logger();
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || evaluate(&format!("{i} * 2 + 1"))))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(i as f64 * 2.0 + 1.0));
    }
}
