//! # chatexport CLI
//!
//! Command-line interface for the chatexport library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatexport::cli::Args;
use chatexport::config::FilterMode;
use chatexport::core::output::write_json;
use chatexport::core::pipeline::Pipeline;
use chatexport::parser::TranscriptParser;
use chatexport::ExportError;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ExportError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let export_config = args.export_config()?;

    // Print header
    println!("📦 chatexport v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", args.output);
    match &export_config.filter {
        FilterMode::NoFilter => {}
        FilterMode::Username(user) => println!("👤 From:    {}", user),
        FilterMode::SpecificWord(word) => println!("🔍 Keyword: {}", word),
    }
    if export_config.has_hide_words() {
        println!("🙈 Hide:    {}", export_config.hide_words.join(", "));
    }
    if export_config.scrub_credentials {
        println!("🔒 Scrubbing phone and card numbers");
    }
    if export_config.obfuscate_identities {
        println!("🎭 Obfuscating usernames");
    }
    println!();

    // Step 1: Parse the whole transcript before anything is written
    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let conversation = TranscriptParser::new().parse(Path::new(&args.input))?;
    println!(
        "   Found {} messages in \"{}\" ({:.2}s)",
        conversation.len(),
        conversation.name(),
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Run the configured stages
    let pipeline = Pipeline::from_config(&export_config);
    let (conversation, stats) = if pipeline.is_empty() {
        println!("⏭️  No filters or redactions configured");
        pipeline.run_with_stats(conversation)
    } else {
        println!("🔀 Running pipeline...");
        for stage in pipeline.stages() {
            println!("   • {}", stage);
        }
        let pipeline_start = Instant::now();
        let result = pipeline.run_with_stats(conversation);
        println!(
            "   {} messages retained ({:.1}%, {:.2}s)",
            result.1.retained_count,
            result.1.retention_ratio(),
            pipeline_start.elapsed().as_secs_f64()
        );
        result
    };

    // Step 3: Write output
    println!("💾 Writing JSON...");
    let write_start = Instant::now();
    write_json(&conversation, &args.output, &args.output_config())?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {}", args.output);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Original:  {} messages", stats.original_count);
    if export_config.filter.is_active() {
        println!("   Dropped:   {} messages", stats.dropped_count());
    }
    println!("   Final:     {} messages", stats.retained_count);
    println!(
        "   Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
