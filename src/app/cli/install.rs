use crate::app::api::{self, InstallOutcome, InstalledRules, UpdateOutcome};
use crate::domain::{AppError, CatalogSource, catalog};

use super::{SourceArgs, print_remote_tip, print_source_banner};

const REPOSITORY_URL: &str = "https://github.com/mpklu/prompt_charter";

pub(super) fn run_install(args: &SourceArgs) -> Result<(), AppError> {
    let source = args.catalog_source()?;
    print_source_banner("🎯 Prompt Charter - Rule Set Installer", &source);

    match api::install(&source) {
        Ok(InstallOutcome::Installed(installed)) => {
            print_installed(&installed);
            Ok(())
        }
        Ok(InstallOutcome::AlreadyInstalled { path }) => {
            println!("⚠️  {} already exists at: {}", catalog::RULES_FILE, path.display());
            println!("   Use `prompt-charter update` to replace it.\n");
            Ok(())
        }
        Ok(InstallOutcome::Cancelled) => Ok(()),
        Err(err) => finish_with_error(&source, err),
    }
}

pub(super) fn run_update(args: &SourceArgs) -> Result<(), AppError> {
    let source = args.catalog_source()?;
    print_source_banner("🎯 Prompt Charter - Rule Set Updater", &source);

    match api::update(&source) {
        Ok(UpdateOutcome::Updated(installed)) => {
            print_installed(&installed);
            Ok(())
        }
        Ok(UpdateOutcome::Cancelled) => Ok(()),
        Err(err) => finish_with_error(&source, err),
    }
}

fn finish_with_error(source: &CatalogSource, err: AppError) -> Result<(), AppError> {
    if let AppError::NoRuleSetsAvailable = err {
        println!("⚠️  {}", err);
        return Ok(());
    }
    print_remote_tip(source, &err);
    Err(err)
}

fn print_installed(installed: &InstalledRules) {
    let verb = if installed.replaced { "replaced" } else { "downloaded" };
    println!("\n✅ Successfully {} {}", verb, catalog::RULES_FILE);
    println!("📍 Location: {}", installed.target.display());
    println!("   Source: {}", installed.source);
    println!("   ({} lines)", installed.line_count);

    let rules = format!("{}/{}", catalog::INSTALL_DIR, catalog::RULES_FILE);
    println!("\n📝 Sample Usage:\n");
    println!("1. Code Generation:");
    println!("   \"Load and obey all rules in {}.", rules);
    println!("   Task: Implement UserService with createUser() method.\"\n");
    println!("2. Validation:");
    println!("   \"Load {}.", rules);
    println!("   Validate src/services/UserService.ts for rule compliance.\"\n");
    println!("3. Refactoring:");
    println!("   \"Follow {} rules.", rules);
    println!("   Refactor ScheduleStore to use ScheduleService instead of direct API calls.\"\n");

    println!("📖 Learn More:");
    println!("   Advanced patterns: {}/blob/main/templates/PROMPT_INJECTION.md", REPOSITORY_URL);
    println!("   Validation guide:  {}/blob/main/templates/VALIDATION_PROMPT.md", REPOSITORY_URL);
    println!("   Full repository:   {}\n", REPOSITORY_URL);
}
