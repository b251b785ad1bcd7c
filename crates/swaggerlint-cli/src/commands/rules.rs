use colored::Colorize;
use swaggerlint::RuleRegistry;

pub fn run() {
    let registry = RuleRegistry::builtin();
    let width = registry.iter().map(|rule| rule.name().len()).max().unwrap_or(0);

    for rule in registry.iter() {
        println!(
            "{}  {}",
            format!("{:width$}", rule.name()).cyan(),
            rule.description()
        );
    }
}
