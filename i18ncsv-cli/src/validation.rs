use std::path::Path;

use i18ncsv::{LanguageCode, LanguageSet};

/// Validate file path exists and is a regular file
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate directory path exists and is a directory
pub fn validate_directory_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("Directory does not exist: {}", path));
    }

    if !path_obj.is_dir() {
        return Err(format!("Path is not a directory: {}", path));
    }

    Ok(())
}

/// Validate a single source language against the configured set
pub fn validate_source_language<'a>(
    lang: &str,
    languages: &'a LanguageSet,
) -> Result<&'a LanguageCode, String> {
    languages.get(lang).map_err(|_| {
        format!(
            "Unsupported source language \"{}\". Supported languages: {}",
            lang.trim(),
            supported_list(languages)
        )
    })
}

/// Resolve an optional comma-separated language list; `None` means every configured language.
///
/// Unknown codes are dropped; an empty result is an error.
pub fn resolve_language_list(
    list: Option<&str>,
    languages: &LanguageSet,
) -> Result<Vec<LanguageCode>, String> {
    match list {
        None => Ok(languages.codes().to_vec()),
        Some(list) => languages.select_list(list).map_err(|_| {
            format!(
                "No valid target language in \"{}\". Supported languages: {}",
                list,
                supported_list(languages)
            )
        }),
    }
}

fn supported_list(languages: &LanguageSet) -> String {
    languages
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
