//! The evaluator core: statement and expression dispatch.

use std::rc::Rc;

use owo_ir::{BindingStmt, Block, Expr, Ident, InfixOp, Program, Stmt};
use rustc_hash::FxHashMap;

use crate::builtins::Builtins;
use crate::environment::SharedEnv;
use crate::errors::{identifier_not_found, reassignment_target_missing, unusable_literal_hash_key};
use crate::operators;
use crate::value::{FunctionValue, HashPair, Value};

/// The tree-walking evaluator.
///
/// Holds the builtin registry; every other piece of state lives in the
/// environment chain handed to [`Evaluator::eval_program`], so one
/// evaluator can serve any number of programs and scopes.
pub struct Evaluator {
    builtins: Builtins,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            builtins: Builtins::standard(),
        }
    }

    /// An evaluator resolving builtins from a caller-supplied registry.
    pub fn with_builtins(builtins: Builtins) -> Self {
        Evaluator { builtins }
    }

    /// Runs `program` top to bottom and yields its result: the value of the
    /// last statement, the payload of the first `return`, or the first
    /// error. An empty program yields `null`.
    pub fn eval_program(&self, program: &Program, env: &SharedEnv) -> Value {
        let mut result = Value::Null;
        for stmt in &program.statements {
            result = match self.eval_statement(stmt, env) {
                Value::Return(value) => return *value,
                error @ Value::Error(_) => return error,
                value => value,
            };
        }
        result
    }

    pub(super) fn eval_statement(&self, stmt: &Stmt, env: &SharedEnv) -> Value {
        match stmt {
            Stmt::Binding(binding) => self.eval_binding(binding, env),
            Stmt::Return(value) => {
                let value = self.eval_expr(value, env);
                if value.is_error() {
                    return value;
                }
                Value::Return(Box::new(value))
            }
            Stmt::Expr(expr) => self.eval_expr(expr, env),
        }
    }

    /// `owo name :=: value` defines in the innermost scope, shadowing any
    /// outer binding of the same name. The statement itself yields `null`.
    pub(super) fn eval_binding(&self, binding: &BindingStmt, env: &SharedEnv) -> Value {
        let value = self.eval_expr(&binding.value, env);
        if value.is_error() {
            return value;
        }
        env.define(Rc::clone(&binding.name.0), value);
        Value::Null
    }

    /// Runs a block, keeping `Return` wrapped so it can unwind through
    /// enclosing blocks until [`Evaluator::eval_program`] or a call
    /// boundary unwraps it.
    pub(super) fn eval_block(&self, block: &Block, env: &SharedEnv) -> Value {
        let mut result = Value::Null;
        for stmt in &block.statements {
            result = self.eval_statement(stmt, env);
            if matches!(result, Value::Return(_) | Value::Error(_)) {
                return result;
            }
        }
        result
    }

    pub(super) fn eval_expr(&self, expr: &Expr, env: &SharedEnv) -> Value {
        match expr {
            Expr::Integer(value) => Value::Integer(*value),
            Expr::Float(value) => Value::Float(*value),
            Expr::Str(value) => Value::Str(value.as_str().into()),
            Expr::Boolean(value) => Value::Boolean(*value),
            Expr::Ident(ident) => self.eval_identifier(ident, env),
            Expr::Prefix { op, right } => {
                let right = self.eval_expr(right, env);
                if right.is_error() {
                    return right;
                }
                operators::eval_prefix(right, *op)
            }
            Expr::Infix { op, left, right } => self.eval_infix(*op, left, right.as_deref(), env),
            Expr::If {
                condition,
                consequence,
                alternative,
            } => self.eval_if(condition, consequence, alternative.as_ref(), env),
            Expr::While { condition, body } => self.eval_while(condition, body, env),
            Expr::For {
                init,
                condition,
                step,
                body,
            } => self.eval_for(init, condition, step, body, env),
            Expr::Function { name, params, body } => {
                self.eval_function_literal(name, params, body, env)
            }
            Expr::Call { callee, args } => self.eval_call(callee, args, env),
            Expr::Chain(elements) => self.eval_chain(elements, env),
            Expr::Array(elements) => match self.eval_expressions(elements, env) {
                Ok(values) => Value::Array(Rc::new(values)),
                Err(error) => error,
            },
            Expr::Index { left, index } => {
                let left = self.eval_expr(left, env);
                if left.is_error() {
                    return left;
                }
                let index = self.eval_expr(index, env);
                if index.is_error() {
                    return index;
                }
                operators::eval_index(left, index)
            }
            Expr::Hash(pairs) => self.eval_hash_literal(pairs, env),
            Expr::Assign { name, value } => self.eval_assign(name, value, env),
        }
    }

    /// Binary dispatch. An absent right-hand side is the `++` increment
    /// sugar, which evaluates as `left + 1`.
    fn eval_infix(&self, op: InfixOp, left: &Expr, right: Option<&Expr>, env: &SharedEnv) -> Value {
        let left = self.eval_expr(left, env);
        if left.is_error() {
            return left;
        }
        let Some(right) = right else {
            return operators::eval_infix(left, Value::Integer(1), InfixOp::Plus);
        };
        let right = self.eval_expr(right, env);
        if right.is_error() {
            return right;
        }
        operators::eval_infix(left, right, op)
    }

    /// Name resolution: the environment chain first, builtins second.
    fn eval_identifier(&self, ident: &Ident, env: &SharedEnv) -> Value {
        if let Some(value) = env.get(ident.as_str()) {
            return value;
        }
        if let Some(builtin) = self.builtins.get(ident.as_str()) {
            return Value::Builtin(builtin);
        }
        identifier_not_found(ident.as_str())
    }

    /// `name :=: value`. The right-hand side is stored unchecked: an error
    /// value is written into the binding like any other result and
    /// resurfaces on the next read. Only a missing name fails here.
    fn eval_assign(&self, name: &Ident, value: &Expr, env: &SharedEnv) -> Value {
        let value = self.eval_expr(value, env);
        if env.assign(name.as_str(), value) {
            Value::Null
        } else {
            reassignment_target_missing(name.as_str())
        }
    }

    /// A function literal: builds the closure and also defines it under its
    /// own name in the current scope, which is what makes both
    /// `fn f(x) { .. } f(1)` and direct recursion work.
    fn eval_function_literal(
        &self,
        name: &Rc<str>,
        params: &Rc<Vec<Ident>>,
        body: &Rc<Block>,
        env: &SharedEnv,
    ) -> Value {
        let function = Value::Function(Rc::new(FunctionValue {
            name: Rc::clone(name),
            params: Rc::clone(params),
            body: Rc::clone(body),
            env: env.clone(),
        }));
        env.define(Rc::clone(name), function.clone());
        function
    }

    /// Evaluates `exprs` left to right, stopping at the first error.
    pub(super) fn eval_expressions(
        &self,
        exprs: &[Expr],
        env: &SharedEnv,
    ) -> Result<Vec<Value>, Value> {
        let mut values = Vec::with_capacity(exprs.len());
        for expr in exprs {
            let value = self.eval_expr(expr, env);
            if value.is_error() {
                return Err(value);
            }
            values.push(value);
        }
        Ok(values)
    }

    /// Hash literal: pairs evaluate in source order and later duplicate
    /// keys overwrite earlier ones.
    fn eval_hash_literal(&self, pairs: &[(Expr, Expr)], env: &SharedEnv) -> Value {
        let mut table = FxHashMap::default();
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expr(key_expr, env);
            if key.is_error() {
                return key;
            }
            let Some(hash_key) = key.hash_key() else {
                return unusable_literal_hash_key(key.type_name());
            };
            let value = self.eval_expr(value_expr, env);
            if value.is_error() {
                return value;
            }
            table.insert(hash_key, HashPair { key, value });
        }
        Value::Hash(Rc::new(table))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}
