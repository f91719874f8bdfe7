//! Programs the grammar derives.

use super::support::{assert_accepts, program_with_body};

#[test]
fn test_minimal_program() {
    assert_accepts("program p ; begin end .");
}

#[test]
fn test_var_section_only_with_empty_body() {
    assert_accepts("program p ; var x : integer ; begin end .");
}

#[test]
fn test_all_declaration_sections() {
    assert_accepts(
        "program full ;
         const c1 = 10 ; c2 = 'x' ; c3 = - c1 ; c4 = + 5 ;
         type t = integer ; arr = array [ 10 ] of char ; mat = array [ 3 ] of array [ 4 ] of t ;
         var a : arr ; i : integer ; m : mat ; k : t ;
         begin
           i := 1
         end .",
    );
}

#[test]
fn test_multiple_declarations_per_section() {
    assert_accepts(&program_with_body(
        "var a : integer ; b : char ; c : array [ 2 ] of integer ;",
        "",
    ));
}

#[test]
fn test_function_and_procedure() {
    assert_accepts(
        "program subs ;
         var n : integer ;
         function f ( x : integer ; var y : char ) : integer ;
           begin f := x end ;
         procedure q ;
           var t : integer ;
           begin t := f ( 1 , 'c' ) end ;
         procedure r ( var z : integer ) ;
           begin z := 0 end ;
         begin
           call q ;
           call r ( n )
         end .",
    );
}

#[test]
fn test_function_without_params() {
    assert_accepts(
        "program p ;
         function g : char ; begin g := 'a' end ;
         begin end .",
    );
}

#[test]
fn test_nested_subroutines() {
    assert_accepts(
        "program nest ;
         procedure outer ;
           procedure inner ; begin end ;
           begin call inner end ;
         begin call outer end .",
    );
}

#[test]
fn test_structured_statements() {
    assert_accepts(&program_with_body(
        "var i : integer ; s : integer ;",
        "s := 0 ;
         for i := 1 to 10 do s := s + i ;
         while s > 0 do begin s := s - 1 ; i := i * 2 end ;
         if s = 0 then i := 1 else i := 2 ;
         if i <> 1 then if i <= 2 then s := 1 else s := 2",
    ));
}

#[test]
fn test_all_relational_operators() {
    for op in ["=", "<>", "<", "<=", ">", ">="] {
        assert_accepts(&program_with_body("", &format!("if a {op} b then x := 1")));
    }
}

#[test]
fn test_empty_statements_before_end_and_else() {
    assert_accepts(&program_with_body("", ";"));
    assert_accepts(&program_with_body("", "x := 1 ;"));
    assert_accepts(&program_with_body("", "if a < b then else x := 1"));
    assert_accepts(&program_with_body("", "begin end ; begin ; end"));
}

#[test]
fn test_left_associative_subtraction() {
    assert_accepts(&program_with_body("", "x := 1 - 2 - 3"));
}

#[test]
fn test_leading_sign_and_precedence() {
    assert_accepts(&program_with_body("", "x := - a * b + c / ( d - 1 )"));
    assert_accepts(&program_with_body("", "x := + 1"));
}

#[test]
fn test_multi_dimensional_indexes() {
    assert_accepts(&program_with_body("", "x := a [ 1 ] [ i + 1 ]"));
    assert_accepts(&program_with_body("", "a [ i ] [ j ] := 0"));
}

#[test]
fn test_function_call_in_expression() {
    assert_accepts(&program_with_body("", "x := a ( 1 , 2 )"));
    assert_accepts(&program_with_body("", "x := f ( g ( 1 ) , h [ 2 ] , 'c' )"));
}

#[test]
fn test_call_statement_without_arguments() {
    assert_accepts(&program_with_body("", "call writeln"));
}

#[test]
fn test_char_literal_factor() {
    assert_accepts(&program_with_body("", "c := 'z'"));
}

#[test]
fn test_expressions_in_for_bounds_and_indexes() {
    assert_accepts(&program_with_body(
        "",
        "for i := a [ 1 ] * 2 to f ( n ) - 1 do a [ i ] := i",
    ));
}

#[test]
fn test_keywords_are_case_insensitive() {
    assert_accepts("PROGRAM p ; BEGIN x := 1 END .");
}
