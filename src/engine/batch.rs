//! Concurrent rule execution.
//!
//! Every rule runs on its own thread; results flow back over a channel
//! tagged with the rule's position and land in an indexed slot, so the
//! output order always matches the input order no matter which command
//! finishes first.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use crate::config::Rule;
use crate::error::{ReliantError, Result};
use crate::shell::ShellOptions;

use super::executor::execute;
use super::result::ExecutionResult;

/// How a batch reacts to a rule whose command could not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Every rule yields a result; command failures are recorded per rule.
    #[default]
    FailSoft,
    /// The first rule with an error aborts the batch with that error.
    ///
    /// Rules still running when the batch aborts are not waited for.
    FailFast,
}

/// Runs a set of rules concurrently.
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    policy: FailurePolicy,
    shell: ShellOptions,
}

impl BatchRunner {
    /// Create a runner with the given failure policy.
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            policy,
            shell: ShellOptions::default(),
        }
    }

    /// Use specific shell options for every rule.
    pub fn with_shell(mut self, shell: ShellOptions) -> Self {
        self.shell = shell;
        self
    }

    /// Get the failure policy.
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Run all rules and collect their results in input order.
    ///
    /// # Errors
    ///
    /// Under [`FailurePolicy::FailFast`], returns `RuleLaunch` for the first
    /// rule to finish with an error. Under either policy, returns `Other`
    /// if a worker thread could not be started or died without a result.
    pub fn run(&self, rules: &[Rule]) -> Result<Vec<ExecutionResult>> {
        tracing::info!("Running {} rule(s) ({:?})", rules.len(), self.policy);

        let (tx, rx) = mpsc::channel();
        let mut handles: Vec<JoinHandle<()>> = Vec::with_capacity(rules.len());

        for (index, rule) in rules.iter().enumerate() {
            let tx = tx.clone();
            let rule = rule.clone();
            let shell = self.shell.clone();
            let handle = thread::Builder::new()
                .name(format!("reliant-rule-{}", index))
                .spawn(move || {
                    let result = execute(&rule, &shell);
                    // The receiver is gone only after a fail-fast abort.
                    let _ = tx.send((index, result));
                })
                .map_err(|e| {
                    anyhow::anyhow!(
                        "could not start worker for rule '{}': {}",
                        rule_name(rules, index),
                        e
                    )
                })?;
            handles.push(handle);
        }
        drop(tx);

        let mut slots: Vec<Option<ExecutionResult>> = (0..rules.len()).map(|_| None).collect();

        for (index, result) in rx {
            if self.policy == FailurePolicy::FailFast {
                if let Some(error) = &result.error {
                    tracing::debug!("Aborting batch: rule '{}' failed", result.name);
                    return Err(ReliantError::RuleLaunch {
                        rule: result.name.clone(),
                        message: error.clone(),
                    });
                }
            }
            slots[index] = Some(result);
        }

        for (index, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() {
                return Err(ReliantError::from(anyhow::anyhow!(
                    "worker for rule '{}' panicked",
                    rule_name(rules, index)
                )));
            }
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| {
                    ReliantError::from(anyhow::anyhow!(
                        "rule '{}' finished without reporting a result",
                        rule_name(rules, index)
                    ))
                })
            })
            .collect()
    }
}

fn rule_name(rules: &[Rule], index: usize) -> &str {
    rules.get(index).map_or("?", |r| r.name.as_str())
}
