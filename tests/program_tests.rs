use pretty_assertions::assert_eq;

use tysp::{CheckError, type_of_program};

fn type_of(source: &str) -> String {
    type_of_program(source).expect("expected program to type check")
}

fn error_of(source: &str) -> String {
    type_of_program(source)
        .expect_err("expected program to be rejected")
        .to_string()
}

#[test]
fn program_types_as_last_form() {
    assert_eq!(type_of("(program 1 #t \"done\")"), "string");
}

#[test]
fn define_extends_later_forms() {
    assert_eq!(
        type_of("(program (define (x : number) 5) (+ x 1))"),
        "number"
    );
}

#[test]
fn defines_chain_left_to_right() {
    let source = "(program \
                    (define (x : number) 5) \
                    (define (y : number) (+ x 1)) \
                    (> y x))";
    assert_eq!(type_of(source), "boolean");
}

#[test]
fn define_does_not_reach_earlier_forms() {
    let msg = error_of("(program x (define (x : number) 5))");
    assert!(msg.contains("unbound variable: x"), "{msg}");
}

#[test]
fn redefinition_shadows() {
    let source = "(program \
                    (define (x : number) 5) \
                    (define (x : boolean) #t) \
                    x)";
    assert_eq!(type_of(source), "boolean");
}

#[test]
fn empty_program_is_void() {
    assert_eq!(type_of("(program)"), "void");
}

#[test]
fn program_ending_in_define_is_void() {
    assert_eq!(type_of("(program (define (x : number) 5))"), "void");
}

#[test]
fn defined_procedures_are_applicable() {
    let source = "(program \
                    (define (inc : (number -> number)) \
                      (lambda ((x : number)) : number (+ x 1))) \
                    (inc 41))";
    assert_eq!(type_of(source), "number");
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(type_of("  (program 1)\n"), "number");
}

#[test]
fn missing_wrapper_is_rejected() {
    let err = type_of_program("(+ 1 2)").unwrap_err();
    assert!(matches!(err, CheckError::MalformedProgram { .. }));
    assert!(err.to_string().contains("Malformed program"));
}

#[test]
fn unterminated_wrapper_is_rejected() {
    assert!(matches!(
        type_of_program("(program 1"),
        Err(CheckError::MalformedProgram { .. })
    ));
}

#[test]
fn ill_typed_form_fails_whole_program() {
    let msg = error_of("(program (define (x : number) 5) (+ x #t))");
    assert!(msg.contains("type mismatch in application"), "{msg}");
}

#[test]
fn define_type_mismatch_is_reported() {
    let msg = error_of("(program (define (x : boolean) 5))");
    assert!(msg.contains("type mismatch"), "{msg}");
}
