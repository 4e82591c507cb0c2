use hyperion_ast::{Sweep, SweepStmt};
use hyperion_errors::{Result, ValidationError};

/// Walks a sweep and fails with `ValidationError` the first time a
/// `Table`'s row width disagrees with its header width.
/// Recurses into every block form (`With`, `Product`, `Union`) since a
/// malformed table may be nested arbitrarily deep.
#[tracing::instrument(skip_all)]
pub fn validate_sweep(sweep: Sweep) -> Result<Sweep> {
    validate_stmts(&sweep.stmts)?;
    Ok(sweep)
}

fn validate_stmts(stmts: &[SweepStmt]) -> Result<()> {
    for stmt in stmts {
        validate_stmt(stmt)?;
    }
    Ok(())
}

fn validate_stmt(stmt: &SweepStmt) -> Result<()> {
    match stmt {
        SweepStmt::With(_, stmts) | SweepStmt::Product(stmts) | SweepStmt::Union(stmts) => validate_stmts(stmts),
        SweepStmt::Table(header, rows) => {
            for row in rows {
                if row.0.len() != header.0.len() {
                    return Err(ValidationError::new(format!(
                        "table row has {} value(s) but header `{}` declares {} column(s)",
                        row.0.len(),
                        header.0.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", "),
                        header.0.len(),
                    ))
                    .into());
                }
            }
            Ok(())
        }
        SweepStmt::Import(_) | SweepStmt::Include(_) | SweepStmt::Binding(_, _) | SweepStmt::All(_, _) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperion_ast::{Expr, Header, Identifier, Row};

    fn table(rows: Vec<Vec<Expr>>) -> SweepStmt {
        SweepStmt::Table(Header(vec![Identifier::bare("a"), Identifier::bare("b")]), rows.into_iter().map(Row).collect())
    }

    #[test]
    fn accepts_even_tables() {
        let sweep = Sweep::new(vec![table(vec![vec![Expr::Int(1), Expr::Int(10)], vec![Expr::Int(2), Expr::Int(20)]])]);
        assert!(validate_sweep(sweep).is_ok());
    }

    #[test]
    fn rejects_uneven_tables() {
        let sweep = Sweep::new(vec![table(vec![vec![Expr::Int(1), Expr::Int(10)], vec![Expr::Int(2)]])]);
        assert!(validate_sweep(sweep).is_err());
    }

    #[test]
    fn recurses_into_nested_blocks() {
        let sweep = Sweep::new(vec![SweepStmt::Product(vec![SweepStmt::Union(vec![table(vec![vec![Expr::Int(1)]])])])]);
        assert!(validate_sweep(sweep).is_err());
    }
}
