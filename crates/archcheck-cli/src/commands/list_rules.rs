//! List rules command implementation.

use archcheck::rules::RuleSet;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<22} {:<8} Description", "Code", "Name", "Kind");
    println!("{}", "-".repeat(80));

    for rule in RuleSet::all().describe() {
        println!(
            "{:<8} {:<22} {:<8} {}",
            rule.code, rule.name, rule.kind, rule.description
        );
    }

    println!("\nBoundary scan:");
    println!("  AB001    forbidden-token        zone forbidden substrings (see [[zones]])");

    println!("\nSuppress a rule for one file with a comment:");
    println!("  // ui-check: allow card-count raw-div");
    println!("\nUse --rules to run a subset, e.g.:");
    println!("  archcheck ui --rules table-size,UI003 apps/frontend/src");
}
