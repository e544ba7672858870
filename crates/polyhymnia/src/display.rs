use crate::prelude::*;
use colored::Colorize;
use polyhymnia_core::metadata::DisplayOptions;
use polyhymnia_core::words::WordResult;

pub const NO_RESULTS: &str = "The search returned no results.";

/// Convert results to a pretty JSON array
pub fn format_results_json(results: &[WordResult]) -> Result<String> {
    serde_json::to_string_pretty(results).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn push_field(out: &mut String, label: &str, value: impl std::fmt::Display) {
    out.push_str(&format!("\t{}: {}\n", label.green(), value));
}

/// Render a single result as a word line followed by tab-indented fields.
///
/// Numeric fields are only shown when greater than zero, pronunciation only
/// when present.
fn format_word_text(result: &WordResult, options: &DisplayOptions) -> String {
    let mut out = format!("{}\n", result.word.bold());

    if options.show_score && result.score > 0 {
        push_field(&mut out, "Score", result.score);
    }

    if options.show_syllables && result.num_syllables > 0 {
        push_field(&mut out, "Num Syllables", result.num_syllables);
    }

    if options.show_pronunciation && !result.pronunciation.is_empty() {
        push_field(&mut out, "Pronunciation", &result.pronunciation);
    }

    if options.show_frequency && result.frequency > 0.0 {
        push_field(&mut out, "Frequency", format!("{:.6}", result.frequency));
    }

    if options.show_parts_of_speech {
        for tag in &result.parts_of_speech {
            push_field(&mut out, "Part of Speech", tag);
        }
    }

    if options.show_definitions {
        for definition in &result.definitions {
            push_field(&mut out, "Definition", definition);
        }
    }

    out.push('\n');
    out
}

/// Convert results to the plain text report
pub fn format_results_text(results: &[WordResult], options: &DisplayOptions) -> String {
    let mut out = String::new();

    if options.show_query_url {
        if let Some(first) = results.first() {
            out.push_str(&format!(
                "{}: {}\n",
                "Datamuse API URL".cyan(),
                first.query_url.underline()
            ));
        }
    }

    if options.show_count {
        out.push_str(&format!(
            "{}: {}\n",
            "Number of Results".cyan(),
            results.len().to_string().bright_yellow()
        ));
    }

    for result in results {
        out.push_str(&format_word_text(result, options));
    }

    out
}

/// Build a table with one row per result and a column per enabled field.
pub fn format_results_table(results: &[WordResult], options: &DisplayOptions) -> prettytable::Table {
    let mut table = new_table();

    let mut header = vec!["Word"];
    if options.show_score {
        header.push("Score");
    }
    if options.show_syllables {
        header.push("Syllables");
    }
    if options.show_pronunciation {
        header.push("Pronunciation");
    }
    if options.show_frequency {
        header.push("Frequency");
    }
    if options.show_parts_of_speech {
        header.push("Parts of Speech");
    }
    table.add_row(prettytable::Row::new(
        header.into_iter().map(prettytable::Cell::new).collect(),
    ));

    for result in results {
        let mut cells = vec![result.word.clone()];
        if options.show_score {
            cells.push(result.score.to_string());
        }
        if options.show_syllables {
            cells.push(result.num_syllables.to_string());
        }
        if options.show_pronunciation {
            cells.push(result.pronunciation.clone());
        }
        if options.show_frequency {
            cells.push(format!("{:.6}", result.frequency));
        }
        if options.show_parts_of_speech {
            cells.push(result.parts_of_speech.join(", "));
        }
        table.add_row(prettytable::Row::new(
            cells.iter().map(|c| prettytable::Cell::new(c)).collect(),
        ));
    }

    table
}
