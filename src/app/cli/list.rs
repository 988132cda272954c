use std::io;

use crate::app::api::{self, ListOutcome};
use crate::domain::{AppError, RuleSetDescriptor};

use super::{ListArgs, print_remote_tip, print_source_banner};

pub(super) fn run_list(args: &ListArgs) -> Result<(), AppError> {
    let source = args.source.catalog_source()?;
    if !args.json {
        print_source_banner("📋 Available Rule Sets", &source);
    }

    match api::list(&source) {
        Ok(outcome) if args.json => {
            println!("{}", render_json(&outcome)?);
            Ok(())
        }
        Ok(outcome) => {
            print_outcome(&outcome);
            Ok(())
        }
        Err(err) => {
            print_remote_tip(&source, &err);
            Err(err)
        }
    }
}

fn render_json(outcome: &ListOutcome) -> Result<String, AppError> {
    let rule_sets: Vec<&RuleSetDescriptor> =
        outcome.groups.iter().flat_map(|group| &group.rule_sets).collect();
    serde_json::to_string_pretty(&rule_sets).map_err(|e| AppError::Io(io::Error::from(e)))
}

fn print_outcome(outcome: &ListOutcome) {
    if outcome.is_empty() {
        println!("No rule sets available yet. Check back soon!");
        return;
    }

    println!("Found {} rule set(s)\n", outcome.total());
    for group in &outcome.groups {
        println!("{}/", group.domain);
        for rule_set in &group.rule_sets {
            println!("  └─ {}", rule_set.subpath());
        }
        println!();
    }
    println!("To install a rule set, run: prompt-charter install\n");
}
