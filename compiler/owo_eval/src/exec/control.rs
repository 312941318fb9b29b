//! Control flow: `if`, `while`, and `for`.
//!
//! All three forms are expressions. Loops yield the value of their last
//! completed body run, `null` if the body never ran; there is no `break`,
//! a loop exits when its condition goes falsy or a `return` or error
//! unwinds through it.

use owo_ir::{BindingStmt, Block, Expr};

use super::expr::Evaluator;
use crate::environment::SharedEnv;
use crate::value::Value;

impl Evaluator {
    pub(super) fn eval_if(
        &self,
        condition: &Expr,
        consequence: &Block,
        alternative: Option<&Block>,
        env: &SharedEnv,
    ) -> Value {
        let condition = self.eval_expr(condition, env);
        if condition.is_error() {
            return condition;
        }
        if condition.is_truthy() {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            Value::Null
        }
    }

    pub(super) fn eval_while(&self, condition: &Expr, body: &Block, env: &SharedEnv) -> Value {
        let mut result = Value::Null;
        loop {
            let condition_value = self.eval_expr(condition, env);
            if condition_value.is_error() {
                return condition_value;
            }
            if !condition_value.is_truthy() {
                return result;
            }
            result = self.eval_block(body, env);
            if matches!(result, Value::Return(_) | Value::Error(_)) {
                return result;
            }
        }
    }

    /// `for (owo init; cond; step) { body }`: init runs once, then each
    /// iteration is condition, body, step. The header shares the enclosing
    /// scope, so the induction variable stays visible after the loop.
    pub(super) fn eval_for(
        &self,
        init: &BindingStmt,
        condition: &Expr,
        step: &Expr,
        body: &Block,
        env: &SharedEnv,
    ) -> Value {
        let init_result = self.eval_binding(init, env);
        if init_result.is_error() {
            return init_result;
        }
        let mut result = Value::Null;
        loop {
            let condition_value = self.eval_expr(condition, env);
            if condition_value.is_error() {
                return condition_value;
            }
            if !condition_value.is_truthy() {
                return result;
            }
            result = self.eval_block(body, env);
            if matches!(result, Value::Return(_) | Value::Error(_)) {
                return result;
            }
            let step_result = self.eval_expr(step, env);
            if step_result.is_error() {
                return step_result;
            }
        }
    }
}
