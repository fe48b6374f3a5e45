use super::project::Project;
use anyhow::Result;
use landing_kit_validator::{ValidationReport, validate_config};
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> Result<()> {
    println!("Validating landing page at: {}", path.display());

    let project = Project::open(&path)?;
    let config = project.load()?;

    println!("✓ {} parsed", project.config_file_name());
    println!("  Title: {}", config.title);
    println!(
        "  Sections: {}",
        config
            .sections
            .iter()
            .map(|s| s.id())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let report = validate_config(&config);
    print_report(&report);

    if !report.is_valid() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!("\n✅ Configuration is valid");
    Ok(())
}

/// Print a report the same way for `validate` and `build`
pub fn print_report(report: &ValidationReport) {
    for info in &report.info {
        println!("  ℹ {}", info);
    }
    for warning in &report.warnings {
        println!("  ⚠ {}", warning);
    }
    for error in &report.errors {
        eprintln!("  ✗ {}", error);
    }
}
