//! Recursive-descent grammar over s-expression tokens.
//!
//! Produces the tagged expression tree and type-expression values consumed
//! by the typing engine. Identifiers naming built-in operators parse as
//! primitive references, everything else as variable references.

use crate::ast::datum::Datum;
use crate::ast::expression::{
    AppExp, Binding, BooleanLit, Expr, Ident, IfExp, LambdaExp, LetExp, LetrecBinding, LetrecExp,
    NumberLit, Param, PrimRef, Quoted, StringLit, VarRef,
};
use crate::ast::{Define, Form, Parsed, Program};
use crate::lexer::Token;
use crate::types::primitives::is_primitive;
use crate::types::ty::TypeExp;

use super::{ParseError, ParseResult, ParseState};

fn unexpected(tok: &Token, expected: impl Into<String>) -> ParseError {
    ParseError::new("unexpected token")
        .expected(expected)
        .found(tok.describe())
        .at(tok.pos())
}

fn eof_err(expected: impl Into<String>) -> ParseError {
    ParseError::new("unexpected end of input").expected(expected)
}

fn expect_lparen(state: &mut ParseState) -> ParseResult<Token> {
    match state.peek() {
        Some(Token::LParen(_)) => Ok(state.advance().unwrap()),
        Some(tok) => Err(unexpected(tok, "'('")),
        None => Err(eof_err("'('")),
    }
}

fn expect_rparen(state: &mut ParseState) -> ParseResult<Token> {
    match state.peek() {
        Some(Token::RParen(_)) => Ok(state.advance().unwrap()),
        Some(tok) => Err(unexpected(tok, "')'")),
        None => Err(eof_err("')'")),
    }
}

fn expect_colon(state: &mut ParseState) -> ParseResult<Token> {
    match state.peek() {
        Some(Token::Colon(_)) => Ok(state.advance().unwrap()),
        Some(tok) => Err(unexpected(tok, "':'")),
        None => Err(eof_err("':'")),
    }
}

fn expect_ident(state: &mut ParseState) -> ParseResult<Ident> {
    match state.peek() {
        Some(Token::Ident(_)) => {
            let Some(Token::Ident(id)) = state.advance() else {
                unreachable!()
            };
            Ok(Ident {
                value: id.value,
                position: id.position,
            })
        }
        Some(tok) => Err(unexpected(tok, "identifier")),
        None => Err(eof_err("identifier")),
    }
}

fn expect_keyword(state: &mut ParseState, keyword: &str) -> ParseResult<Token> {
    let found = matches!(state.peek(), Some(Token::Ident(id)) if id.value == keyword);
    if found {
        Ok(state.advance().unwrap())
    } else {
        match state.peek() {
            Some(tok) => Err(unexpected(tok, format!("'{}'", keyword))),
            None => Err(eof_err(format!("'{}'", keyword))),
        }
    }
}

fn peek_keyword(state: &ParseState) -> Option<String> {
    match state.peek() {
        Some(Token::Ident(id)) => Some(id.value.clone()),
        _ => None,
    }
}

fn strip_quotes(value: String) -> String {
    // Strip surrounding quotes from the string literal
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        value[1..value.len() - 1].to_string()
    } else {
        value
    }
}

pub fn parse_expr(state: &mut ParseState) -> ParseResult<Expr> {
    match state.peek() {
        Some(Token::Number(_)) => {
            let Some(Token::Number(n)) = state.advance() else {
                unreachable!()
            };
            let value = n
                .value
                .parse()
                .map_err(|_| ParseError::new("number literal out of range").at(n.position.clone()))?;
            Ok(Expr::Number(NumberLit {
                value,
                position: n.position,
            }))
        }
        Some(Token::True(_)) => {
            let tok = state.advance().unwrap();
            Ok(Expr::Boolean(BooleanLit {
                value: true,
                position: tok.pos(),
            }))
        }
        Some(Token::False(_)) => {
            let tok = state.advance().unwrap();
            Ok(Expr::Boolean(BooleanLit {
                value: false,
                position: tok.pos(),
            }))
        }
        Some(Token::StringLiteral(_)) => {
            let Some(Token::StringLiteral(s)) = state.advance() else {
                unreachable!()
            };
            Ok(Expr::Str(StringLit {
                value: strip_quotes(s.value),
                position: s.position,
            }))
        }
        Some(Token::Quote(_)) => {
            let tok = state.advance().unwrap();
            let datum = parse_datum(state)?;
            Ok(Expr::Quoted(Quoted {
                datum,
                position: tok.pos(),
            }))
        }
        Some(Token::Ident(_)) => {
            let Some(Token::Ident(id)) = state.advance() else {
                unreachable!()
            };
            if is_primitive(&id.value) {
                Ok(Expr::Prim(PrimRef {
                    op: id.value,
                    position: id.position,
                }))
            } else {
                Ok(Expr::Var(VarRef {
                    name: id.value,
                    position: id.position,
                }))
            }
        }
        Some(Token::LParen(_)) => parse_compound(state),
        Some(tok) => Err(unexpected(tok, "expression")),
        None => Err(eof_err("expression")),
    }
}

fn parse_compound(state: &mut ParseState) -> ParseResult<Expr> {
    let open = expect_lparen(state)?;
    match peek_keyword(state).as_deref() {
        Some("if") => parse_if(state, open),
        Some("lambda") => parse_lambda(state, open),
        Some("let") => parse_let(state, open),
        Some("letrec") => parse_letrec(state, open),
        Some("quote") => parse_quote(state, open),
        Some("define") => {
            Err(ParseError::new("'define' is only allowed at the top level").at(open.pos()))
        }
        _ => parse_app(state, open),
    }
}

fn parse_if(state: &mut ParseState, open: Token) -> ParseResult<Expr> {
    expect_keyword(state, "if")?;
    let test = parse_expr(state)?;
    let then = parse_expr(state)?;
    let alt = parse_expr(state)?;
    let close = expect_rparen(state)?;
    Ok(Expr::If(Box::new(IfExp {
        test,
        then,
        alt,
        position: open.pos().merge(&close.pos()),
    })))
}

fn parse_param(state: &mut ParseState) -> ParseResult<Param> {
    expect_lparen(state)?;
    let name = expect_ident(state)?;
    expect_colon(state)?;
    let ty = parse_type(state)?;
    expect_rparen(state)?;
    Ok(Param { name, ty })
}

fn parse_lambda(state: &mut ParseState, open: Token) -> ParseResult<Expr> {
    expect_keyword(state, "lambda")?;
    expect_lparen(state)?;
    let mut params = Vec::new();
    while !matches!(state.peek(), Some(Token::RParen(_)) | None) {
        params.push(parse_param(state)?);
    }
    expect_rparen(state)?;
    expect_colon(state)?;
    let return_ty = parse_type(state)?;
    let body = parse_body(state)?;
    let close = expect_rparen(state)?;
    Ok(Expr::Lambda(Box::new(LambdaExp {
        params,
        return_ty,
        body,
        position: open.pos().merge(&close.pos()),
    })))
}

/// Expressions up to (not including) the closing paren. May be empty; the
/// typing engine rejects empty body sequences.
fn parse_body(state: &mut ParseState) -> ParseResult<Vec<Expr>> {
    let mut body = Vec::new();
    while !matches!(state.peek(), Some(Token::RParen(_)) | None) {
        body.push(parse_expr(state)?);
    }
    Ok(body)
}

fn parse_binding(state: &mut ParseState) -> ParseResult<Binding> {
    expect_lparen(state)?;
    expect_lparen(state)?;
    let name = expect_ident(state)?;
    expect_colon(state)?;
    let declared = parse_type(state)?;
    expect_rparen(state)?;
    let value = parse_expr(state)?;
    expect_rparen(state)?;
    Ok(Binding {
        name,
        declared,
        value,
    })
}

fn parse_let(state: &mut ParseState, open: Token) -> ParseResult<Expr> {
    expect_keyword(state, "let")?;
    expect_lparen(state)?;
    let mut bindings = Vec::new();
    while !matches!(state.peek(), Some(Token::RParen(_)) | None) {
        bindings.push(parse_binding(state)?);
    }
    expect_rparen(state)?;
    let body = parse_body(state)?;
    let close = expect_rparen(state)?;
    Ok(Expr::Let(Box::new(LetExp {
        bindings,
        body,
        position: open.pos().merge(&close.pos()),
    })))
}

fn parse_letrec_binding(state: &mut ParseState) -> ParseResult<LetrecBinding> {
    expect_lparen(state)?;
    let name = expect_ident(state)?;
    let value = parse_expr(state)?;
    expect_rparen(state)?;
    Ok(LetrecBinding { name, value })
}

fn parse_letrec(state: &mut ParseState, open: Token) -> ParseResult<Expr> {
    expect_keyword(state, "letrec")?;
    expect_lparen(state)?;
    let mut bindings = Vec::new();
    while !matches!(state.peek(), Some(Token::RParen(_)) | None) {
        bindings.push(parse_letrec_binding(state)?);
    }
    expect_rparen(state)?;
    let body = parse_body(state)?;
    let close = expect_rparen(state)?;
    Ok(Expr::Letrec(Box::new(LetrecExp {
        bindings,
        body,
        position: open.pos().merge(&close.pos()),
    })))
}

fn parse_quote(state: &mut ParseState, open: Token) -> ParseResult<Expr> {
    expect_keyword(state, "quote")?;
    let datum = parse_datum(state)?;
    let close = expect_rparen(state)?;
    Ok(Expr::Quoted(Quoted {
        datum,
        position: open.pos().merge(&close.pos()),
    }))
}

fn parse_app(state: &mut ParseState, open: Token) -> ParseResult<Expr> {
    let rator = parse_expr(state)?;
    let rands = parse_body(state)?;
    let close = expect_rparen(state)?;
    Ok(Expr::App(Box::new(AppExp {
        rator,
        rands,
        position: open.pos().merge(&close.pos()),
    })))
}

fn parse_datum(state: &mut ParseState) -> ParseResult<Datum> {
    let Some(tok) = state.advance() else {
        return Err(eof_err("datum"));
    };
    match tok {
        Token::Number(n) => {
            let value = n
                .value
                .parse()
                .map_err(|_| ParseError::new("number literal out of range").at(n.position))?;
            Ok(Datum::Number(value))
        }
        Token::True(_) => Ok(Datum::Boolean(true)),
        Token::False(_) => Ok(Datum::Boolean(false)),
        Token::StringLiteral(s) => Ok(Datum::Str(strip_quotes(s.value))),
        Token::Ident(id) => Ok(Datum::Symbol(id.value)),
        Token::Quote(_) => {
            let inner = parse_datum(state)?;
            Ok(Datum::pair(
                Datum::Symbol("quote".to_string()),
                Datum::pair(inner, Datum::EmptyList),
            ))
        }
        Token::LParen(_) => parse_list_datum(state),
        other => Err(unexpected(&other, "datum")),
    }
}

/// The elements after an opening paren: a proper list, the empty list, or a
/// dotted pair.
fn parse_list_datum(state: &mut ParseState) -> ParseResult<Datum> {
    if matches!(state.peek(), Some(Token::RParen(_))) {
        state.advance();
        return Ok(Datum::EmptyList);
    }
    let mut items = vec![parse_datum(state)?];
    let tail = loop {
        match state.peek() {
            Some(Token::RParen(_)) => {
                state.advance();
                break Datum::EmptyList;
            }
            Some(Token::Dot(_)) => {
                state.advance();
                let tail = parse_datum(state)?;
                expect_rparen(state)?;
                break tail;
            }
            Some(_) => items.push(parse_datum(state)?),
            None => return Err(eof_err("datum or ')'")),
        }
    };
    Ok(items
        .into_iter()
        .rev()
        .fold(tail, |rest, item| Datum::pair(item, rest)))
}

pub fn parse_type(state: &mut ParseState) -> ParseResult<TypeExp> {
    match state.peek() {
        Some(Token::Ident(_)) => {
            let Some(Token::Ident(id)) = state.advance() else {
                unreachable!()
            };
            match id.value.as_str() {
                "number" => Ok(TypeExp::Number),
                "boolean" => Ok(TypeExp::Boolean),
                "string" => Ok(TypeExp::Str),
                "void" => Ok(TypeExp::Void),
                "literal" => Ok(TypeExp::Literal),
                other => Err(ParseError::new(format!("unknown type name '{}'", other))
                    .expected("type")
                    .at(id.position)),
            }
        }
        Some(Token::LParen(_)) => {
            state.advance();
            parse_compound_type(state)
        }
        Some(tok) => Err(unexpected(tok, "type")),
        None => Err(eof_err("type")),
    }
}

/// The body of a parenthesized type: `(pair T T)`, `(T * ... -> T)`, or the
/// nullary arrow `(Empty -> T)`.
fn parse_compound_type(state: &mut ParseState) -> ParseResult<TypeExp> {
    let head = peek_keyword(state);
    if head.as_deref() == Some("pair") {
        state.advance();
        let first = parse_type(state)?;
        let second = parse_type(state)?;
        expect_rparen(state)?;
        return Ok(TypeExp::pair(first, second));
    }

    let mut params = Vec::new();
    if head.as_deref() == Some("Empty") {
        state.advance();
    } else {
        params.push(parse_type(state)?);
        while matches!(state.peek(), Some(Token::Ident(id)) if id.value == "*") {
            state.advance();
            params.push(parse_type(state)?);
        }
    }
    expect_keyword(state, "->")?;
    let result = parse_type(state)?;
    expect_rparen(state)?;
    Ok(TypeExp::proc(params, result))
}

fn parse_define(state: &mut ParseState, open: Token) -> ParseResult<Define> {
    expect_keyword(state, "define")?;
    expect_lparen(state)?;
    let name = expect_ident(state)?;
    expect_colon(state)?;
    let declared = parse_type(state)?;
    expect_rparen(state)?;
    let value = parse_expr(state)?;
    let close = expect_rparen(state)?;
    Ok(Define {
        name,
        declared,
        value,
        position: open.pos().merge(&close.pos()),
    })
}

/// A top-level form: a `define` or a plain expression.
pub fn parse_form(state: &mut ParseState) -> ParseResult<Form> {
    let start = state.position();
    if matches!(state.peek(), Some(Token::LParen(_))) {
        let open = state.advance().unwrap();
        if peek_keyword(state).as_deref() == Some("define") {
            return Ok(Form::Define(parse_define(state, open)?));
        }
        state.restore(start);
    }
    Ok(Form::Exp(parse_expr(state)?))
}

/// `(program <form> ...)`
pub fn parse_program(state: &mut ParseState) -> ParseResult<Program> {
    let open = expect_lparen(state)?;
    expect_keyword(state, "program")?;
    let mut forms = Vec::new();
    while !matches!(state.peek(), Some(Token::RParen(_)) | None) {
        forms.push(parse_form(state)?);
    }
    let close = expect_rparen(state)?;
    Ok(Program {
        forms,
        position: open.pos().merge(&close.pos()),
    })
}

/// Parse a complete token stream: a program if it opens with the program
/// marker, otherwise a single top-level form. Trailing tokens are an error.
pub fn parse(state: &mut ParseState) -> ParseResult<Parsed> {
    let start = state.position();
    let is_program = if matches!(state.peek(), Some(Token::LParen(_))) {
        state.advance();
        let found = peek_keyword(state).as_deref() == Some("program");
        state.restore(start);
        found
    } else {
        false
    };

    let parsed = if is_program {
        Parsed::Program(parse_program(state)?)
    } else {
        Parsed::Exp(parse_form(state)?)
    };

    match state.peek() {
        Some(tok) => Err(unexpected(tok, "end of input")),
        None => Ok(parsed),
    }
}
