use simple_calc::{
    add, divide, evaluate, evaluate_named, multiply, power, subtract, CalcError, Operation,
    OperationRequest,
};

#[test]
fn test_dispatch_matches_direct_calls() {
    let (a, b) = (9.0, 4.0);
    let expected = [
        (Operation::Add, add(a, b)),
        (Operation::Subtract, subtract(a, b)),
        (Operation::Multiply, multiply(a, b)),
        (Operation::Divide, divide(a, b).unwrap()),
        (Operation::Power, power(a, b)),
    ];

    for (operation, direct) in expected {
        let request = OperationRequest::new(a, b, operation);
        assert_eq!(evaluate(&request).unwrap(), direct, "{}", operation);
        assert_eq!(
            evaluate_named(a, b, operation.as_str()).unwrap(),
            direct,
            "{}",
            operation
        );
    }
}

#[test]
fn test_divide_by_zero_through_public_api() {
    assert!(matches!(
        divide(5.0, 0.0),
        Err(CalcError::InvalidOperation { .. })
    ));

    let request = OperationRequest::new(5.0, 0.0, Operation::Divide);
    assert_eq!(
        evaluate(&request).unwrap_err().to_string(),
        "Cannot divide by zero"
    );
}

#[test]
fn test_unknown_identifier_is_an_error_not_a_panic() {
    for raw in ["", "ADD", "mod", "divide "] {
        assert!(matches!(
            evaluate_named(1.0, 1.0, raw),
            Err(CalcError::InvalidOperation { .. })
        ));
    }
}
