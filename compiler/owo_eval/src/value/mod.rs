//! Runtime values.
//!
//! Aggregates sit behind `Rc`, so cloning a value is cheap and bindings
//! share structure. Builtins like `push` build new arrays instead of
//! mutating shared ones.

use std::fmt;
use std::rc::Rc;

use owo_ir::{Block, Ident};
use rustc_hash::FxHashMap;

use crate::environment::SharedEnv;


/// Signature of a builtin implementation.
///
/// Builtins receive already-evaluated arguments and answer with a value;
/// misuse is reported through [`Value::Error`] like any runtime failure.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// A named builtin function.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

/// A user-defined function: the literal's pieces shared with the AST, plus
/// the scope captured at the definition site.
pub struct FunctionValue {
    pub name: Rc<str>,
    pub params: Rc<Vec<Ident>>,
    pub body: Rc<Block>,
    pub env: SharedEnv,
}

/// Key types admitted by hash literals and hash indexing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Str(Rc<str>),
    Boolean(bool),
}

/// A hash entry keeps the original key value alongside the stored value,
/// so displaying a hash can show the key as written.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

/// An OwO runtime value.
///
/// `Return` and `Error` are ordinary values that the evaluator watches
/// for: both short-circuit statement lists, and `Error` additionally
/// aborts whatever expression is being built around it.
#[derive(Clone, Debug)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Str(Rc<str>),
    Boolean(bool),
    Null,
    Array(Rc<Vec<Value>>),
    Hash(Rc<FxHashMap<HashKey, HashPair>>),
    Function(Rc<FunctionValue>),
    Builtin(Builtin),
    Return(Box<Value>),
    Error(String),
}

impl Value {
    /// The type name used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Float(_) => "FLOAT",
            Value::Str(_) => "STRING",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Return(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Everything is truthy except `null` and `false`; zero and the empty
    /// string count as true.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Boolean(false))
    }

    /// The hash-table key for this value, or `None` for types that cannot
    /// key a hash.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(value) => Some(HashKey::Integer(*value)),
            Value::Str(value) => Some(HashKey::Str(Rc::clone(value))),
            Value::Boolean(value) => Some(HashKey::Boolean(*value)),
            _ => None,
        }
    }
}

/// Structural equality for scalars and collections, identity for
/// functions, name equality for builtins.
///
/// This backs tests and hash-pair comparisons. The language's `==`
/// operator has its own rules and lives in the operator evaluator.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Return(a), Value::Return(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Str(value) => f.write_str(value),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Null => f.write_str("null"),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Hash(pairs) => {
                f.write_str("{")?;
                for (i, pair) in pairs.values().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                f.write_str("}")
            }
            Value::Function(function) => write!(f, "{function}"),
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Return(value) => write!(f, "{value}"),
            Value::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn {}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") {}", self.body)
    }
}

// Debug stops at the captured environment: scopes reach the functions
// defined in them, so recursing into `env` would loop.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Builtin) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
