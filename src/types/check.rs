use lachs::Span;

use super::env::TEnv;
use super::error::TypeError;
use super::primitives::primitive_signature;
use super::subst::Substitution;
use super::ty::{TypeExp, VarGen};
use super::unify::unify;
use crate::ast::datum::Datum;
use crate::ast::expression::{AppExp, Expr, IfExp, LambdaExp, LetExp, LetrecExp};
use crate::ast::{Define, Form, Program};

/// Require that two independently computed types agree.
///
/// On disagreement the error embeds both printed types and the printed form
/// of `context`, the expression being checked.
pub fn check_equal_type<C: std::fmt::Display>(
    found: &TypeExp,
    expected: &TypeExp,
    context: &C,
    span: Span,
) -> Result<(), TypeError> {
    if found == expected {
        Ok(())
    } else {
        Err(TypeError::type_mismatch(
            expected.clone(),
            found.clone(),
            context.to_string(),
            span,
        ))
    }
}

/// The expression typing engine.
///
/// Owns the fresh-variable counter so that every primitive-signature lookup
/// across one checking run mints distinct variable names.
pub struct Checker {
    vars: VarGen,
}

impl Checker {
    pub fn new() -> Self {
        Checker {
            vars: VarGen::new(),
        }
    }

    pub fn type_of_expr(&mut self, expr: &Expr, env: &TEnv) -> Result<TypeExp, TypeError> {
        match expr {
            Expr::Number(_) => Ok(TypeExp::Number),
            Expr::Boolean(_) => Ok(TypeExp::Boolean),
            Expr::Str(_) => Ok(TypeExp::Str),

            Expr::Quoted(quoted) => Ok(type_of_quoted(&quoted.datum)),

            Expr::Prim(prim) => primitive_signature(&prim.op, &mut self.vars)
                .ok_or_else(|| TypeError::unknown_primitive(prim.op.clone(), prim.position.clone())),

            Expr::Var(var) => match env.lookup(&var.name) {
                Some(ty) => Ok(ty.clone()),
                None => Err(TypeError::unbound_variable(
                    var.name.clone(),
                    var.position.clone(),
                )),
            },

            Expr::If(ifexp) => self.type_of_if(ifexp, env),
            Expr::Lambda(lambda) => self.type_of_lambda(lambda, env),
            Expr::App(app) => self.type_of_app(app, env),
            Expr::Let(letexp) => self.type_of_let(letexp, env),
            Expr::Letrec(letrec) => self.type_of_letrec(letrec, env),
        }
    }

    /// `(if test then alt)`: the test must be boolean and both branches must
    /// agree; failures in the three subexpressions surface in that order.
    fn type_of_if(&mut self, ifexp: &IfExp, env: &TEnv) -> Result<TypeExp, TypeError> {
        let test_ty = self.type_of_expr(&ifexp.test, env)?;
        let then_ty = self.type_of_expr(&ifexp.then, env)?;
        let alt_ty = self.type_of_expr(&ifexp.alt, env)?;
        check_equal_type(&test_ty, &TypeExp::Boolean, ifexp, ifexp.position.clone())?;
        check_equal_type(&alt_ty, &then_ty, ifexp, ifexp.position.clone())?;
        Ok(then_ty)
    }

    fn type_of_lambda(&mut self, lambda: &LambdaExp, env: &TEnv) -> Result<TypeExp, TypeError> {
        let frame = lambda
            .params
            .iter()
            .map(|p| (p.name.value.clone(), p.ty.clone()))
            .collect();
        let body_env = env.extend(frame);
        let body_ty = self.type_of_seq(&lambda.body, &body_env, &lambda.position)?;
        check_equal_type(&body_ty, &lambda.return_ty, lambda, lambda.position.clone())?;
        Ok(TypeExp::proc(
            lambda.params.iter().map(|p| p.ty.clone()).collect(),
            lambda.return_ty.clone(),
        ))
    }

    /// Type every expression in order; the sequence's type is the last one's.
    /// An empty sequence is invalid.
    fn type_of_seq(
        &mut self,
        body: &[Expr],
        env: &TEnv,
        span: &Span,
    ) -> Result<TypeExp, TypeError> {
        let mut last = None;
        for expr in body {
            last = Some(self.type_of_expr(expr, env)?);
        }
        last.ok_or_else(|| TypeError::empty_body(span.clone()))
    }

    /// Application: the operator must have an arrow type of matching arity;
    /// each argument type unifies against the declared parameter type in one
    /// substitution shared across all positions of this call, and the result
    /// type is concretized through that substitution.
    fn type_of_app(&mut self, app: &AppExp, env: &TEnv) -> Result<TypeExp, TypeError> {
        let rator_ty = self.type_of_expr(&app.rator, env)?;
        let (params, result) = match rator_ty {
            TypeExp::Proc(params, result) => (params, result),
            other => {
                return Err(TypeError::non_procedure(
                    other,
                    app.to_string(),
                    app.position.clone(),
                ));
            }
        };

        if params.len() != app.rands.len() {
            return Err(TypeError::arity_mismatch(
                params.len(),
                app.rands.len(),
                app.to_string(),
                app.position.clone(),
            ));
        }

        // One substitution per application site, dropped on return.
        let mut subst = Substitution::empty();
        for (param_ty, rand) in params.iter().zip(&app.rands) {
            let rand_ty = self.type_of_expr(rand, env)?;
            if !unify(param_ty, &rand_ty, &mut subst) {
                return Err(TypeError::app_mismatch(
                    param_ty.clone(),
                    rand_ty,
                    app.to_string(),
                    app.position.clone(),
                ));
            }
        }
        Ok(subst.apply(&result))
    }

    /// `let` bindings are sibling-independent: every value expression is
    /// checked in the original environment, then all names enter one new
    /// frame together.
    fn type_of_let(&mut self, letexp: &LetExp, env: &TEnv) -> Result<TypeExp, TypeError> {
        let mut frame = Vec::with_capacity(letexp.bindings.len());
        for binding in &letexp.bindings {
            let value_ty = self.type_of_expr(&binding.value, env)?;
            check_equal_type(&value_ty, &binding.declared, letexp, letexp.position.clone())?;
            frame.push((binding.name.value.clone(), binding.declared.clone()));
        }
        self.type_of_seq(&letexp.body, &env.extend(frame), &letexp.position)
    }

    /// `letrec` is restricted to procedure-valued bindings. The bound arrow
    /// types come straight from each procedure's own annotations, so all
    /// names can enter one frame before any body is inspected, enabling
    /// mutual recursion.
    fn type_of_letrec(&mut self, letrec: &LetrecExp, env: &TEnv) -> Result<TypeExp, TypeError> {
        let mut procs = Vec::with_capacity(letrec.bindings.len());
        for binding in &letrec.bindings {
            match &binding.value {
                Expr::Lambda(lambda) => procs.push((&binding.name, lambda.as_ref())),
                _ => {
                    return Err(TypeError::malformed_letrec(
                        binding.name.value.clone(),
                        letrec.to_string(),
                        letrec.position.clone(),
                    ));
                }
            }
        }

        let frame = procs
            .iter()
            .map(|(name, lambda)| {
                (
                    name.value.clone(),
                    TypeExp::proc(
                        lambda.params.iter().map(|p| p.ty.clone()).collect(),
                        lambda.return_ty.clone(),
                    ),
                )
            })
            .collect();
        let rec_env = env.extend(frame);

        for (_, lambda) in &procs {
            let params = lambda
                .params
                .iter()
                .map(|p| (p.name.value.clone(), p.ty.clone()))
                .collect();
            let body_env = rec_env.extend(params);
            let body_ty = self.type_of_seq(&lambda.body, &body_env, &lambda.position)?;
            check_equal_type(&body_ty, &lambda.return_ty, *lambda, lambda.position.clone())?;
        }

        self.type_of_seq(&letrec.body, &rec_env, &letrec.position)
    }

    fn type_of_define(&mut self, define: &Define, env: &TEnv) -> Result<TEnv, TypeError> {
        let value_ty = self.type_of_expr(&define.value, env)?;
        check_equal_type(&value_ty, &define.declared, define, define.position.clone())?;
        Ok(env.extend(vec![(
            define.name.value.clone(),
            define.declared.clone(),
        )]))
    }

    /// Type a single top-level form. A `define` types as `void` and returns
    /// the extended environment for the forms that follow it.
    pub fn type_of_form(&mut self, form: &Form, env: &TEnv) -> Result<(TypeExp, TEnv), TypeError> {
        match form {
            Form::Exp(expr) => Ok((self.type_of_expr(expr, env)?, env.clone())),
            Form::Define(define) => {
                let env = self.type_of_define(define, env)?;
                Ok((TypeExp::Void, env))
            }
        }
    }

    /// Process top-level forms strictly left to right, threading the
    /// environment through `define`s. The program's type is the final
    /// form's, or `void` for an empty program.
    pub fn type_of_program(&mut self, program: &Program) -> Result<TypeExp, TypeError> {
        let mut env = TEnv::empty();
        let mut last = TypeExp::Void;
        for form in &program.forms {
            let (ty, next_env) = self.type_of_form(form, &env)?;
            env = next_env;
            last = ty;
        }
        Ok(last)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

/// Quoted data types as `literal` unless it is pair-shaped, in which case
/// each side's type comes from its immediate tag. One level only: nested
/// pair structure inside a component collapses to `literal`.
fn type_of_quoted(datum: &Datum) -> TypeExp {
    match datum {
        Datum::Pair(first, second) => {
            TypeExp::pair(component_type(first), component_type(second))
        }
        _ => TypeExp::Literal,
    }
}

fn component_type(datum: &Datum) -> TypeExp {
    match datum {
        Datum::Number(_) => TypeExp::Number,
        Datum::Boolean(_) => TypeExp::Boolean,
        Datum::Str(_) => TypeExp::Str,
        Datum::Symbol(_) | Datum::Pair(_, _) | Datum::EmptyList => TypeExp::Literal,
    }
}
