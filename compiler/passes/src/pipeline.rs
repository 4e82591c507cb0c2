use crate::{
    bindings_to_singletons, calls_to_evaluated_references_config, calls_to_evaluated_references_sweep, expressions_to_calls_config,
    expressions_to_calls_sweep, partial_eval_config, partial_eval_sweep, validate_sweep,
};
use hyperion_ast::{Config, Sweep};
use hyperion_errors::Result;

/// `preprocess_config(c) = calls_to_evaluated_references(expressions_to_calls(partial_eval(c)))`
///.
#[tracing::instrument(skip_all)]
pub fn preprocess_config(config: Config) -> Result<Config> {
    let config = partial_eval_config(config)?;
    let config = expressions_to_calls_config(config)?;
    calls_to_evaluated_references_config(config)
}

/// `preprocess_sweep(s) = bindings_to_singletons(preprocess_config(validate_sweep(s)))`
///, with `preprocess_config`'s three component passes run
/// in their `Sweep`-typed form since a sweep carries the full config
/// statement grammar plus the sweep-only block forms.
#[tracing::instrument(skip_all)]
pub fn preprocess_sweep(sweep: Sweep) -> Result<Sweep> {
    let sweep = validate_sweep(sweep)?;
    let sweep = partial_eval_sweep(sweep)?;
    let sweep = expressions_to_calls_sweep(sweep)?;
    let sweep = calls_to_evaluated_references_sweep(sweep)?;
    bindings_to_singletons(sweep)
}
