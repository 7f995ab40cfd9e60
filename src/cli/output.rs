//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{HanziHintArgs, OutputFormat};
use crate::error::Result;
use crate::word_group::DictionaryIssue;
use crate::wordbank::{AttachReport, EntryHint};

/// Result structure for the groups command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupsResult {
    pub character: String,
    pub groups: Vec<String>,
}

/// Result structure for the hint command.
#[derive(Debug, Serialize, Deserialize)]
pub struct HintResult {
    pub character: String,
    pub pronunciation: String,
    pub hint: String,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub sources: usize,
    pub characters: usize,
    pub total_words: usize,
    pub empty_entries: usize,
    pub longest_entry: Option<String>,
    pub longest_entry_words: usize,
}

/// Result structure for the check command.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub characters: usize,
    pub issues: Vec<DictionaryIssue>,
}

/// Result structure for the attach command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AttachResult {
    pub wordbank: String,
    pub entries: usize,
    #[serde(flatten)]
    pub report: AttachReport,
    pub written: bool,
}

/// Result structure for the hints command.
#[derive(Debug, Serialize, Deserialize)]
pub struct HintsResult {
    pub wordbank: String,
    pub hints: Vec<EntryHint>,
}

/// Output a result as `key: value` lines or JSON.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &HanziHintArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output pre-rendered lines in human mode, or the result as JSON.
pub fn output_lines<T: Serialize>(lines: &[String], result: &T, args: &HanziHintArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &HanziHintArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in &obj {
                println!("{key}: {}", format_value(val));
            }
        }
        other => println!("{}", format_value(&other)),
    }
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &HanziHintArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for a single human-readable line.
pub fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("恒星")), "恒星");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(["恒星", "永恒"])), "[恒星, 永恒]");
        assert_eq!(format_value(&json!({"a": 1})), "[object]");
        assert_eq!(format_value(&json!(null)), "-");
    }

    #[test]
    fn test_attach_result_flattens_report() {
        let result = AttachResult {
            wordbank: "bank.json".to_string(),
            entries: 4,
            report: AttachReport {
                updated: 2,
                missing: 1,
                normalized: 0,
            },
            written: true,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["updated"], 2);
        assert_eq!(value["missing"], 1);
        assert_eq!(value["written"], true);
    }

    #[test]
    fn test_check_result_issue_tags() {
        let result = CheckResult {
            characters: 1,
            issues: vec![DictionaryIssue::EmptyEntry {
                character: "坡".to_string(),
            }],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["issues"][0]["kind"], "empty_entry");
        assert_eq!(value["issues"][0]["character"], "坡");
    }
}
