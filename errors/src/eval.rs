/// An operator evaluation failed, either during `partial_eval` or at
/// base-config-parse time inside the runtime shim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("division by zero evaluating `{op}`")]
    DivisionByZero { op: String },

    #[error("overflow evaluating `{op}` on {lhs} and {rhs}")]
    Overflow { op: String, lhs: String, rhs: String },

    #[error("type mismatch: cannot apply `{op}` to {operands}")]
    TypeMismatch { op: String, operands: String },

    #[error("value out of domain for `{op}`: {detail}")]
    Domain { op: String, detail: String },

    #[error("unknown operator `{0}`")]
    UnknownOperator(String),
}
