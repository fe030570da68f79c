use crate::eval::{Outcome, Params};
use crate::rules;

/// Run the filename rule set over every path; silent when all pass.
pub fn check_filenames<S: AsRef<str>>(paths: &[S], params: &Params) -> Outcome {
    let ruleset = rules::filename::ruleset();
    paths
        .iter()
        .map(|p| {
            log::debug!("checking filename {}", p.as_ref());
            ruleset.evaluate(p.as_ref(), params)
        })
        .collect()
}
