//! List rules command implementation.

use zod_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} {:<8} Description", "Code", "Name", "Fixable");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {:<8} {}",
            rule.code(),
            rule.name(),
            if rule.fixable() { "yes" } else { "no" },
            rule.description()
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  zod-lint check --rules export-zod-type");
    println!("  zod-lint check --rules ZL001");
}
