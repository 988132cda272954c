//! Interactive descent from a domain down to a single rule set.

use tracing::debug;

use crate::domain::{AppError, LevelOption, ResolvedRuleSet, catalog};
use crate::ports::{ChoicePrompt, ProgressReporter, TreeProvider};
use crate::services::DiscoveryEngine;

pub const DOMAIN_PROMPT: &str = "Select a domain:";
pub const STACK_PROMPT: &str = "Select a stack/option:";

/// Resolver state between steps.
///
/// Failures leave the loop as errors; there is no way back to a parent level.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NavigationState {
    SelectingDomain,
    Descending { current_path: String },
    Resolved(ResolvedRuleSet),
}

/// Walks the user from domain selection down to a directory holding the rules file.
pub struct InteractiveResolver<'a, T: TreeProvider, P: ChoicePrompt, R: ProgressReporter> {
    engine: &'a DiscoveryEngine<T>,
    prompt: &'a P,
    progress: &'a R,
}

impl<'a, T, P, R> InteractiveResolver<'a, T, P, R>
where
    T: TreeProvider,
    P: ChoicePrompt,
    R: ProgressReporter,
{
    pub fn new(engine: &'a DiscoveryEngine<T>, prompt: &'a P, progress: &'a R) -> Self {
        Self { engine, prompt, progress }
    }

    /// Run the descent.
    ///
    /// Returns `Ok(None)` when the user cancels a prompt. Fails with
    /// [`AppError::NoRuleSetsAvailable`] when no domain holds a rule set and with
    /// [`AppError::DeadEnd`] when a level offers nowhere to go.
    pub fn resolve(&self) -> Result<Option<ResolvedRuleSet>, AppError> {
        let mut state = NavigationState::SelectingDomain;
        loop {
            state = match state {
                NavigationState::SelectingDomain => match self.select_domain()? {
                    Some(domain) => {
                        NavigationState::Descending { current_path: catalog::domain_path(&domain) }
                    }
                    None => return Ok(None),
                },
                NavigationState::Descending { current_path } => match self.descend(current_path)? {
                    Some(next) => next,
                    None => return Ok(None),
                },
                NavigationState::Resolved(resolved) => return Ok(Some(resolved)),
            };
        }
    }

    fn select_domain(&self) -> Result<Option<String>, AppError> {
        self.progress.start("Discovering available rule sets...");
        let mut domains = match self.engine.available_domains() {
            Ok(domains) => domains,
            Err(err) => {
                self.progress.fail("Failed to fetch domains");
                return Err(err);
            }
        };
        if domains.is_empty() {
            self.progress.clear();
            return Err(AppError::NoRuleSetsAvailable);
        }
        self.progress.succeed("Found available domains");

        Ok(self.choose(DOMAIN_PROMPT, &domains)?.map(|index| domains.swap_remove(index)))
    }

    /// One descent step from `current_path`.
    fn descend(&self, current_path: String) -> Result<Option<NavigationState>, AppError> {
        self.progress.start("Checking for rule sets...");
        let options = match self.engine.list_first_level_options(&current_path) {
            Ok(options) => options,
            Err(err) => {
                self.progress.fail("Error navigating directories");
                return Err(err);
            }
        };

        if options == [LevelOption::current_dir()] {
            self.progress.succeed("Found RULES.md");
            return Ok(Some(NavigationState::Resolved(ResolvedRuleSet::at(current_path))));
        }
        self.progress.clear();

        let next = match options.as_slice() {
            [] => return Err(AppError::DeadEnd { path: current_path }),
            [only] => {
                debug!(path = %current_path, next = %only.name, "single option; descending");
                only.name.clone()
            }
            _ => {
                let names: Vec<String> = options.into_iter().map(|option| option.name).collect();
                match self.choose(STACK_PROMPT, &names)? {
                    Some(index) => names[index].clone(),
                    None => return Ok(None),
                }
            }
        };

        Ok(Some(NavigationState::Descending { current_path: catalog::join(&current_path, &next) }))
    }

    fn choose(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, AppError> {
        match self.prompt.select(prompt, items)? {
            Some(index) if index >= items.len() => {
                Err(AppError::Prompt(format!("Selection {} is out of range", index)))
            }
            selection => Ok(selection),
        }
    }
}
