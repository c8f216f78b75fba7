//! Use cases (application services)

pub mod evaluate_agent;
pub mod run_consensus;

#[cfg(test)]
pub(crate) mod test_support;
