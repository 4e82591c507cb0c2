use hyperion_ast::Expr;
use std::fmt;

/// The runtime domain `partial_eval` and the runtime shim both evaluate
/// over. Mirrors the subset of [`Expr`] leaves that can be operator
/// operands: `Null`, `Bool`, `Int`, `Float`, `Str`. `partial_eval` only
/// ever constructs a `Value` from `Int`/`Float`/`Bool` operands (spec
/// §4.3.1); the runtime shim additionally accepts `Null`/`Str`, since by
/// the time it runs, the downstream library may have resolved a
/// reference to any value the base config format can hold.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Python-style truthiness, used by `land`/`lor` and `not_`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Bool(b) => Some(if *b { 1 } else { 0 }),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_) | Value::Bool(_))
    }

    pub fn is_float_typed(&self) -> bool {
        matches!(self, Value::Float(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl TryFrom<&Expr> for Value {
    type Error = ();

    /// Lifts a literal leaf expression to a [`Value`]. Fails for every
    /// non-literal expression (references, calls, containers, operators,
    /// ...) — those are never operands `partial_eval` or the runtime
    /// shim can fold.
    fn try_from(expr: &Expr) -> Result<Self, ()> {
        match expr {
            Expr::Null => Ok(Value::Null),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Int(i) => Ok(Value::Int(*i)),
            Expr::Float(x) => Ok(Value::Float(*x)),
            Expr::Str(s) => Ok(Value::Str(s.clone())),
            _ => Err(()),
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Expr::Null,
            Value::Bool(b) => Expr::Bool(b),
            Value::Int(i) => Expr::Int(i),
            Value::Float(x) => Expr::Float(x),
            Value::Str(s) => Expr::Str(s),
        }
    }
}
