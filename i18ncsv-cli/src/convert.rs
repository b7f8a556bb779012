use std::path::{Path, PathBuf};

use i18ncsv::{Codec, WriteOutcome};

use crate::validation::{
    resolve_language_list, validate_directory_path, validate_file_path, validate_source_language,
};

/// Export one JSON file to a spreadsheet with a single language filled in.
pub fn run_json_to_csv_command(
    codec: &Codec,
    input: &str,
    output: &str,
    source_language: &str,
) -> Result<(), String> {
    validate_file_path(input)?;
    let source = validate_source_language(source_language, codec.languages())?;

    println!("Converting {} → {} (language: {})", input, output, source);
    let rows = codec
        .json_file_to_csv(input, output, source.as_str())
        .map_err(|e| format!("Conversion failed: {}", e))?;

    println!("✅ Successfully converted {} → {} ({} rows)", input, output, rows);
    Ok(())
}

/// Merge `<input_dir>/<lang>.json` files into one spreadsheet.
pub fn run_merge_command(
    codec: &Codec,
    input_dir: &str,
    output: &str,
    languages: Option<&str>,
) -> Result<(), String> {
    validate_directory_path(input_dir)?;
    let targets = resolve_language_list(languages, codec.languages())?;

    println!("Merging {} → {}", input_dir, output);
    println!("Target languages: {}", join(&targets));
    let report = codec
        .merge_dir_to_csv(input_dir, output, &targets)
        .map_err(|e| format!("Merge failed: {}", e))?;

    for missing in &report.missing {
        println!(
            "⚠️  Missing {} file: {}",
            missing,
            Path::new(input_dir).join(missing.file_name()).display()
        );
    }
    println!("✅ Successfully merged into {}", output);
    println!("📊 {} translation keys processed", report.rows);
    Ok(())
}

/// Split a spreadsheet into `<output_dir>/<lang>.json` files.
///
/// `output_dir` defaults to the directory containing the spreadsheet.
pub fn run_csv_to_json_command(
    codec: &Codec,
    input: &str,
    output_dir: Option<&str>,
    languages: Option<&str>,
) -> Result<(), String> {
    validate_file_path(input)?;
    let targets = resolve_language_list(languages, codec.languages())?;
    let output_dir = output_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_dir(input));

    println!("Converting {} → {}", input, output_dir.display());
    println!("Target languages: {}", join(&targets));
    let outcomes = codec
        .csv_to_json_dir(input, &output_dir, &targets)
        .map_err(|e| format!("Conversion failed: {}", e))?;

    for outcome in &outcomes {
        match outcome {
            WriteOutcome::Written {
                language,
                path,
                entries,
            } => println!(
                "✅ Wrote {} file: {} ({} entries)",
                language,
                path.display(),
                entries
            ),
            WriteOutcome::Skipped { language } => {
                println!("➖ No {} values, nothing written", language)
            }
        }
    }
    Ok(())
}

fn default_output_dir(input: &str) -> PathBuf {
    Path::new(input)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn join(codes: &[i18ncsv::LanguageCode]) -> String {
    codes
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
