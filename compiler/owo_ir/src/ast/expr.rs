//! Expression nodes.

use std::fmt;
use std::rc::Rc;

use super::{BindingStmt, Block, Ident, InfixOp, PrefixOp};

/// An OwO expression.
///
/// Everything except the three statement forms is an expression here,
/// loops and `if` included; each evaluates to a value.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Ident(Ident),
    Integer(i64),
    Float(f64),
    Str(String),
    Boolean(bool),
    Prefix {
        op: PrefixOp,
        right: Box<Expr>,
    },
    /// `right` is absent only for the `++` increment sugar, which the
    /// parser emits as `left ++` with nothing on the right.
    Infix {
        op: InfixOp,
        left: Box<Expr>,
        right: Option<Box<Expr>>,
    },
    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    While {
        condition: Box<Expr>,
        body: Block,
    },
    For {
        init: Box<BindingStmt>,
        condition: Box<Expr>,
        step: Box<Expr>,
        body: Block,
    },
    /// Function literals are named; the parser rejects anonymous ones.
    /// Params and body sit behind `Rc` so closure values share them.
    Function {
        name: Rc<str>,
        params: Rc<Vec<Ident>>,
        body: Rc<Block>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Array(Vec<Expr>),
    Index {
        left: Box<Expr>,
        index: Box<Expr>,
    },
    /// Pairs in source order; duplicate keys resolve at evaluation time.
    Hash(Vec<(Expr, Expr)>),
    /// `name :=: value`, reassignment of an existing binding.
    Assign {
        name: Ident,
        value: Box<Expr>,
    },
    /// `seed ~> f ~> g`, flattened left-to-right.
    Chain(Vec<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(ident) => write!(f, "{ident}"),
            Expr::Integer(value) => write!(f, "{value}"),
            Expr::Float(value) => write!(f, "{value}"),
            Expr::Str(value) => f.write_str(value),
            Expr::Boolean(value) => write!(f, "{value}"),
            Expr::Prefix { op, right } => write!(f, "({op}{right})"),
            Expr::Infix {
                op,
                left,
                right: Some(right),
            } => write!(f, "({left} {op} {right})"),
            Expr::Infix {
                op,
                left,
                right: None,
            } => write!(f, "({left} {op})"),
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            Expr::While { condition, body } => write!(f, "while {condition} {body}"),
            Expr::For {
                init,
                condition,
                step,
                body,
            } => write!(f, "for ({init} {condition}; {step}) {body}"),
            Expr::Function { name, params, body } => {
                write!(f, "fn {name}(")?;
                write_joined(f, params.iter())?;
                write!(f, ") {body}")
            }
            Expr::Call { callee, args } => {
                write!(f, "{callee}(")?;
                write_joined(f, args.iter())?;
                f.write_str(")")
            }
            Expr::Array(elements) => {
                f.write_str("[")?;
                write_joined(f, elements.iter())?;
                f.write_str("]")
            }
            Expr::Index { left, index } => write!(f, "({left}[{index}])"),
            Expr::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Expr::Assign { name, value } => write!(f, "{name} :=: {value}"),
            Expr::Chain(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ~> ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            }
        }
    }
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
