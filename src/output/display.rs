//! Display functions for command results

use super::formatters::{
    INVALID_WORD, NO_MATCHES, create_progress_bar, format_group, too_long_notice,
};
use crate::commands::{BenchmarkResult, GroupsReport, LookupReport};
use crate::errors::QueryError;
use colored::Colorize;

/// Print one line per looked-up token
pub fn print_lookup_report(report: &LookupReport) {
    for line in &report.lines {
        match &line.result {
            Ok(outcome) if outcome.is_empty() => {
                println!("{}: {}", outcome.query.bright_white().bold(), NO_MATCHES.yellow());
            }
            Ok(outcome) => {
                println!(
                    "{}: {}",
                    outcome.query.bright_white().bold(),
                    outcome.matches.join(" ").green()
                );
            }
            Err(QueryError::InvalidInput { .. }) => {
                println!("{}: {}", line.token, INVALID_WORD.red());
            }
            Err(QueryError::TooLong { max, .. }) => {
                println!("{}: {}", line.token, too_long_notice(*max).red());
            }
        }
    }
}

/// Print the anagram group diagnostic
pub fn print_groups_report(report: &GroupsReport<'_>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ANAGRAM GROUPS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for group in &report.groups {
        println!("{}", format_group(group));
    }

    if report.groups.len() < report.total_groups {
        println!(
            "{}",
            format!(
                "… {} more groups not shown",
                report.total_groups - report.groups.len()
            )
            .bright_black()
        );
    }

    let stats = &report.statistics;
    println!("\n📊 {}", "Dictionary:".bright_cyan().bold());
    println!("   Entries:              {}", stats.total_entries);
    println!("   Distinct signatures:  {}", stats.distinct_signatures);
    println!(
        "   Groups of {}+ words:   {}",
        report.min_size,
        format!("{}", report.total_groups).bright_yellow().bold()
    );
    if let Some((signature, size)) = &stats.largest {
        println!("   Largest group:        {signature} ({size} words)");
    }

    let mut sizes: Vec<(&usize, &usize)> = stats.size_distribution.iter().collect();
    sizes.sort_unstable();
    let most = sizes.iter().map(|&(_, &count)| count).max().unwrap_or(0);

    println!("\n📈 {}", "Group sizes:".bright_cyan().bold());
    for (size, &count) in sizes {
        let bar = create_progress_bar(count as f64, most as f64, 40);
        println!("   {size:>3}: {} {count:6}", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries run:      {}", result.total_queries);
    println!(
        "   Average matches:  {}",
        format!("{:.2}", result.average_matches())
            .bright_yellow()
            .bold()
    );
    println!(
        "   With matches:     {}",
        format!("{}", result.queries_with_matches).green()
    );
    println!(
        "   Most matches:     {}",
        format!("{}", result.max_matches).yellow()
    );
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut buckets: Vec<(&usize, &usize)> = result.distribution.iter().collect();
    buckets.sort_unstable();
    for (matches, &count) in buckets.into_iter().take(15) {
        let pct = if result.total_queries == 0 {
            0.0
        } else {
            (count as f64 / result.total_queries as f64) * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {matches:>3}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
