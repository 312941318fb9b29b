//! Function application: calls, builtins, and `~>` chains.

use std::rc::Rc;

use owo_ir::Expr;

use super::expr::Evaluator;
use crate::environment::SharedEnv;
use crate::errors::{not_a_function, wrong_arity};
use crate::value::{FunctionValue, Value};

impl Evaluator {
    pub(super) fn eval_call(&self, callee: &Expr, args: &[Expr], env: &SharedEnv) -> Value {
        let callee = self.eval_expr(callee, env);
        if callee.is_error() {
            return callee;
        }
        let args = match self.eval_expressions(args, env) {
            Ok(args) => args,
            Err(error) => return error,
        };
        self.apply(callee, &args)
    }

    /// `seed ~> f ~> g(x)`: the seed value threads through the stages as a
    /// one-argument call each, every stage's result feeding the next.
    pub(super) fn eval_chain(&self, elements: &[Expr], env: &SharedEnv) -> Value {
        let Some((seed, stages)) = elements.split_first() else {
            return Value::Null;
        };
        let mut acc = self.eval_expr(seed, env);
        if acc.is_error() {
            return acc;
        }
        for stage in stages {
            let callable = self.eval_expr(stage, env);
            if callable.is_error() {
                return callable;
            }
            acc = self.apply(callable, &[acc]);
            if acc.is_error() {
                return acc;
            }
        }
        acc
    }

    /// Applies a callable to already-evaluated arguments. User functions
    /// get a fresh scope enclosing their defining environment; builtins are
    /// invoked directly.
    #[expect(
        clippy::needless_pass_by_value,
        reason = "Callers hand over evaluated operands; references would add clones at call sites"
    )]
    pub(super) fn apply(&self, callee: Value, args: &[Value]) -> Value {
        match callee {
            Value::Function(function) => self.apply_function(&function, args),
            Value::Builtin(builtin) => (builtin.func)(args),
            other => not_a_function(other.type_name()),
        }
    }

    /// Binds parameters in a fresh call scope, runs the body, and unwraps a
    /// `Return` unwinding out of it.
    fn apply_function(&self, function: &FunctionValue, args: &[Value]) -> Value {
        if args.len() != function.params.len() {
            return wrong_arity(args.len(), function.params.len());
        }
        let scope = SharedEnv::enclosed(&function.env);
        for (param, arg) in function.params.iter().zip(args) {
            scope.define(Rc::clone(&param.0), arg.clone());
        }
        match self.eval_block(&function.body, &scope) {
            Value::Return(value) => *value,
            other => other,
        }
    }
}
