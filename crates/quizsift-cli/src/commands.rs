//! Subcommand implementations: each one is a linear load → classify →
//! filter → write pipeline over the configured dataset.

use anyhow::Result;
use indicatif::ProgressIterator;
use tracing::info;

use quizsift_core::classify::{contains_number, CategoryClassifier};
use quizsift_core::dataset::{load_records, write_subset, Record};
use quizsift_core::entities::{has_rare_entity, EntityFrequencyTable, HeuristicRecognizer};
use quizsift_core::filter::{collect_subset, estimate as estimate_counts};
use quizsift_core::progress::dataset_bar;
use quizsift_core::{Category, LanguageDetector, SiftConfig, WhatlangDetector};

/// Print the record count and a pretty-printed sample record.
pub fn stats(config: &SiftConfig) -> Result<()> {
    let records = load_records(&config.dataset.data_path)?;

    println!("Total records: {}", records.len());
    if let Some(first) = records.first() {
        println!("Sample item:");
        println!("{}", serde_json::to_string_pretty(first)?);
    }
    Ok(())
}

/// Two full passes: entity frequency counting, then category totals.
pub fn estimate(config: &SiftConfig) -> Result<()> {
    let records = load_records(&config.dataset.data_path)?;
    let detector = WhatlangDetector::new();
    let recognizer = HeuristicRecognizer::new();

    let bar = dataset_bar(records.len() as u64, "Counting named entities");
    let table = EntityFrequencyTable::build(records.iter().progress_with(bar.clone()), &recognizer);
    bar.finish_and_clear();
    info!(entities = table.len(), "frequency table built");

    let classifier = CategoryClassifier::new(
        &detector,
        &recognizer,
        &table,
        config.filter.rare_threshold,
    );
    let bar = dataset_bar(records.len() as u64, "Estimating category totals");
    let counts = estimate_counts(records.iter().progress_with(bar.clone()), &classifier);
    bar.finish_and_clear();

    println!();
    println!("=== Estimation Summary ===");
    println!("Total questions: {}", counts.total);
    println!("Questions with numbers: {}", counts.numeric);
    println!("Questions with non-English words: {}", counts.foreign);
    println!("Questions with rare named entities: {}", counts.rare_entity);
    Ok(())
}

/// Collect one capped subset and write it as JSONL.
pub fn filter(config: &SiftConfig, category: Category) -> Result<()> {
    let records = load_records(&config.dataset.data_path)?;
    let cap = config.filter.subset_cap;

    let subset: Vec<&Record> = match category {
        Category::Number => {
            let bar = dataset_bar(records.len() as u64, "Selecting questions with numbers");
            let subset = collect_subset(
                records.iter().progress_with(bar.clone()),
                |r| contains_number(&r.question) || contains_number(&r.answer),
                cap,
            );
            bar.finish_and_clear();
            subset
        }
        Category::Foreign => {
            let detector = WhatlangDetector::new();
            let bar = dataset_bar(records.len() as u64, "Selecting non-English questions");
            let subset = collect_subset(
                records.iter().progress_with(bar.clone()),
                |r| detector.is_foreign(&r.question) || detector.is_foreign(&r.answer),
                cap,
            );
            bar.finish_and_clear();
            subset
        }
        Category::RareEntity => {
            let recognizer = HeuristicRecognizer::new();
            let bar = dataset_bar(records.len() as u64, "Counting named entities");
            let table =
                EntityFrequencyTable::build(records.iter().progress_with(bar.clone()), &recognizer);
            bar.finish_and_clear();
            info!(entities = table.len(), "frequency table built");

            let bar = dataset_bar(records.len() as u64, "Selecting rare named entity examples");
            let subset = collect_subset(
                records.iter().progress_with(bar.clone()),
                |r| {
                    has_rare_entity(
                        &r.question,
                        &recognizer,
                        &table,
                        config.filter.rare_threshold,
                    )
                },
                cap,
            );
            bar.finish_and_clear();
            subset
        }
    };

    let out_path = config.dataset.output_dir.join(category.subset_file_name());
    write_subset(&out_path, &subset)?;

    match category {
        Category::Number => println!("Collected {} questions with numbers.", subset.len()),
        Category::Foreign => println!(
            "Collected {} questions with non-English content.",
            subset.len()
        ),
        Category::RareEntity => println!(
            "Collected {} questions with rare named entities.",
            subset.len()
        ),
    }
    Ok(())
}
