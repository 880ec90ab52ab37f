use anyhow::Context;
use clap::Parser;
use curricuforge::core::render::{file_name, render_text};
use curricuforge::core::ConfigProvider;
use curricuforge::utils::{logger, validation::Validate};
use curricuforge::{classify, generate_topics, CurriculumEngine, CurriculumPipeline, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-curriculum")]
#[command(about = "Generate curricula for every course listed in a TOML file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "curriculum.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print each curriculum to stdout
    #[arg(long)]
    print: bool,

    /// Dry run - show what would be generated without writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    match config.log_level() {
        Some(level) if !args.verbose => logger::init_with_level(level),
        _ => logger::init_cli_logger(args.verbose),
    }

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    if args.dry_run {
        perform_dry_run(&config);
        return Ok(());
    }

    let requests = config.requests();
    let storage = LocalStorage::new(config.output_path());
    let pipeline = CurriculumPipeline::new(storage, config);
    let engine = CurriculumEngine::new(pipeline);

    let reports = match engine.run_all(&requests) {
        Ok(reports) => reports,
        Err(e) => {
            tracing::error!(
                "❌ Curriculum generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    for report in &reports {
        if args.print {
            print!("{}", render_text(&report.document)?);
            println!();
        }
        for output in &report.outputs {
            println!("📁 {}", output);
        }
    }
    println!("✅ Generated {} curricula", reports.len());

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Configuration Summary:");
    println!(
        "  Project: {} v{}",
        config.project.name,
        config.project.version.as_deref().unwrap_or("0")
    );
    if let Some(description) = &config.project.description {
        println!("  Description: {}", description);
    }
    println!("  Courses: {}", config.curriculum.courses.len());
    println!("  Plan: {} ({} weeks)", config.plan_mode(), config.duration_weeks());
    println!("  Output: {}", config.output_path());
    println!("  Bundle: {}", config.bundle());
    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    for request in config.requests() {
        println!();
        println!("  {} [{}]", request.course, classify(&request.course));
        println!("    Topics: {}", generate_topics(&request.course).len());
        for format in config.output_formats() {
            println!("    -> {}", file_name(&request.course, *format));
        }
    }
    println!();
    println!("✅ Dry run analysis complete.");
}
