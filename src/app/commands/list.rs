use crate::app::AppContext;
use crate::domain::{AppError, RuleSetDescriptor};
use crate::ports::{ChoicePrompt, ProgressReporter, ProjectStore, TreeProvider};

/// Rule sets of one domain, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainGroup {
    pub domain: String,
    pub rule_sets: Vec<RuleSetDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOutcome {
    pub groups: Vec<DomainGroup>,
}

impl ListOutcome {
    /// Group descriptors by domain, keeping first-seen domain order.
    pub fn from_rule_sets(rule_sets: Vec<RuleSetDescriptor>) -> Self {
        let mut groups: Vec<DomainGroup> = Vec::new();
        for rule_set in rule_sets {
            match groups.iter_mut().find(|group| group.domain == rule_set.domain) {
                Some(group) => group.rule_sets.push(rule_set),
                None => groups.push(DomainGroup {
                    domain: rule_set.domain.clone(),
                    rule_sets: vec![rule_set],
                }),
            }
        }
        Self { groups }
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|group| group.rule_sets.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Enumerate every rule set in the catalog.
pub fn execute<T, P, S, R>(ctx: &AppContext<T, P, S, R>) -> Result<ListOutcome, AppError>
where
    T: TreeProvider,
    P: ChoicePrompt,
    S: ProjectStore,
    R: ProgressReporter,
{
    ctx.progress().start("Discovering rule sets...");
    match ctx.engine().discover_all_rule_sets() {
        Ok(rule_sets) => {
            ctx.progress().succeed(&format!("Found {} rule set(s)", rule_sets.len()));
            Ok(ListOutcome::from_rule_sets(rule_sets))
        }
        Err(err) => {
            ctx.progress().fail("Failed to discover rule sets");
            Err(err)
        }
    }
}
