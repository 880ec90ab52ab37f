use clap::Parser;
use curricuforge::core::render::render_text;
use curricuforge::core::ConfigProvider;
use curricuforge::utils::{logger, validation::Validate};
use curricuforge::{
    CliConfig, CurriculumEngine, CurriculumPipeline, LocalStorage, PartitionMode, COURSE_CATALOG,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting curricuforge CLI");
    tracing::debug!("CLI config: {:?}", config);

    if config.list_courses {
        for course in COURSE_CATALOG {
            println!("{}", course);
        }
        return Ok(());
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if config.dry_run {
        display_dry_run(&config);
        return Ok(());
    }

    let request = config.request();
    let print = config.print;
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = CurriculumPipeline::new(storage, config);
    let engine = CurriculumEngine::new(pipeline);

    match engine.run(&request) {
        Ok(report) => {
            if print {
                print!("{}", render_text(&report.document)?);
            }
            println!("✅ Curriculum generated for {}", report.document.course);
            for output in &report.outputs {
                println!("📁 Output saved to: {}", output);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Curriculum generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_dry_run(config: &CliConfig) {
    println!("🔍 Dry Run:");
    println!("  Course: {}", config.course);
    println!("  Domain: {}", curricuforge::classify(&config.course));
    match config.plan {
        PartitionMode::WeekWise => println!("  Plan: {} over {} weeks", config.plan, config.weeks),
        PartitionMode::DayWise => println!("  Plan: {}", config.plan),
    }
    println!("  Topics: {}", curricuforge::generate_topics(&config.course).len());
    println!("  Output: {}", config.output_path());

    let formats: Vec<String> = config.output_formats().iter().map(|f| f.to_string()).collect();
    println!("  Formats: {}", formats.join(", "));
    if config.bundle() {
        println!("  Bundle: ZIP archive");
    }
}
