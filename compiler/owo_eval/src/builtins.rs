//! The builtin function table.
//!
//! Builtins are ordinary [`Value::Builtin`] values resolved by name after
//! environment lookup fails, which is what lets a script shadow `len` with
//! its own binding. They validate their own arguments and report misuse as
//! error values.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::{builtin_arg_unsupported, builtin_arg_wrong_type, wrong_arity};
use crate::value::{Builtin, Value};

/// The builtin registry an [`Evaluator`](crate::Evaluator) consults.
///
/// Held by value so embedders can hand an evaluator a trimmed or extended
/// table; [`Builtins::standard`] is the stock set.
pub struct Builtins {
    table: FxHashMap<&'static str, Builtin>,
}

impl Builtins {
    /// The stock builtin set.
    pub fn standard() -> Self {
        let mut table = FxHashMap::default();
        for builtin in STANDARD {
            table.insert(builtin.name, *builtin);
        }
        Builtins { table }
    }

    /// An empty registry, for evaluators that should resolve no builtins.
    pub fn empty() -> Self {
        Builtins {
            table: FxHashMap::default(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Builtin> {
        self.table.get(name).copied()
    }

    /// Registers `builtin` under its own name, replacing any previous entry.
    pub fn register(&mut self, builtin: Builtin) {
        self.table.insert(builtin.name, builtin);
    }
}

impl Default for Builtins {
    fn default() -> Self {
        Builtins::standard()
    }
}

const STANDARD: &[Builtin] = &[
    Builtin { name: "len", func: len },
    Builtin { name: "first", func: first },
    Builtin { name: "last", func: last },
    Builtin { name: "rest", func: rest },
    Builtin { name: "push", func: push },
    Builtin { name: "show", func: show },
    Builtin { name: "upper", func: upper },
    Builtin { name: "split", func: split },
    Builtin { name: "replace", func: replace },
    Builtin { name: "strcomp", func: strcomp },
];

/// `len(x)`:code points of a string, or element count of an array.
fn len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Value::Str(text) => Value::Integer(text.chars().count() as i64),
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        other => builtin_arg_unsupported("len", other.type_name()),
    }
}

/// `first(xs)`:the first element, or `null` for an empty array.
fn first(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.first().cloned().unwrap_or(Value::Null),
        other => builtin_arg_wrong_type("first", "ARRAY", other.type_name()),
    }
}

/// `last(xs)`:the last element, or `null` for an empty array.
fn last(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.last().cloned().unwrap_or(Value::Null),
        other => builtin_arg_wrong_type("last", "ARRAY", other.type_name()),
    }
}

/// `rest(xs)`:a new array without the first element, `null` when empty.
fn rest(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => match elements.split_first() {
            Some((_, tail)) => Value::Array(Rc::new(tail.to_vec())),
            None => Value::Null,
        },
        other => builtin_arg_wrong_type("rest", "ARRAY", other.type_name()),
    }
}

/// `push(xs, x)`:a new array with `x` appended; `xs` is left untouched.
fn push(args: &[Value]) -> Value {
    if args.len() != 2 {
        return wrong_arity(args.len(), 2);
    }
    match &args[0] {
        Value::Array(elements) => {
            let mut extended = elements.as_ref().clone();
            extended.push(args[1].clone());
            Value::Array(Rc::new(extended))
        }
        other => builtin_arg_wrong_type("push", "ARRAY", other.type_name()),
    }
}

/// `show(...)`:prints each argument on its own line; yields `null`.
///
/// Variadic: any argument count is fine, including none.
fn show(args: &[Value]) -> Value {
    for arg in args {
        println!("{arg}");
    }
    Value::Null
}

/// `upper(s)`:the string uppercased.
fn upper(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Value::Str(text) => Value::Str(text.to_uppercase().into()),
        other => builtin_arg_wrong_type("upper", "STRING", other.type_name()),
    }
}

/// `split(s, sep)`:the pieces of `s` around `sep`, as an array of strings.
fn split(args: &[Value]) -> Value {
    if args.len() != 2 {
        return wrong_arity(args.len(), 2);
    }
    match (&args[0], &args[1]) {
        (Value::Str(text), Value::Str(separator)) => {
            let pieces = text
                .split(separator.as_ref())
                .map(|piece| Value::Str(piece.into()))
                .collect();
            Value::Array(Rc::new(pieces))
        }
        (Value::Str(_), other) | (other, _) => {
            builtin_arg_wrong_type("split", "STRING", other.type_name())
        }
    }
}

/// `replace(s, from, to)`:`s` with every occurrence of `from` replaced.
fn replace(args: &[Value]) -> Value {
    if args.len() != 3 {
        return wrong_arity(args.len(), 3);
    }
    if let (Value::Str(text), Value::Str(from), Value::Str(to)) = (&args[0], &args[1], &args[2]) {
        return Value::Str(text.replace(from.as_ref(), to.as_ref()).into());
    }
    let offender = args
        .iter()
        .find(|arg| !matches!(arg, Value::Str(_)))
        .unwrap_or(&args[0]);
    builtin_arg_wrong_type("replace", "STRING", offender.type_name())
}

/// `strcomp(a, b)`:string content equality, since `==` on strings is not
/// an equality test.
fn strcomp(args: &[Value]) -> Value {
    if args.len() != 2 {
        return wrong_arity(args.len(), 2);
    }
    match (&args[0], &args[1]) {
        (Value::Str(a), Value::Str(b)) => Value::Boolean(a == b),
        (Value::Str(_), other) | (other, _) => {
            builtin_arg_wrong_type("strcomp", "STRING", other.type_name())
        }
    }
}
