//! Command implementations for the hanzi-hint CLI.

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{HanziHintError, Result};
use crate::word_group::{DictionaryLoader, LookupConfig, WordGroupDictionary, WordGroupLookup};
use crate::wordbank::{WordBank, attach_groups, render_hints};

/// Execute a CLI command.
pub fn execute_command(args: HanziHintArgs) -> Result<()> {
    let lookup = load_lookup(&args)?;

    match &args.command {
        Command::Groups(groups_args) => show_groups(groups_args, &lookup, &args),
        Command::Hint(hint_args) => show_hint(hint_args, &lookup, &args),
        Command::Stats => show_stats(&lookup, &args),
        Command::Check => check_dictionary(&lookup, &args),
        Command::Attach(attach_args) => attach_wordbank(attach_args, &lookup, &args),
        Command::Hints(hints_args) => show_wordbank_hints(hints_args, &lookup, &args),
    }
}

/// Load the dictionaries and rendering config named on the command line.
pub fn load_lookup(args: &HanziHintArgs) -> Result<WordGroupLookup> {
    let config = match &args.config {
        Some(path) => {
            debug!("Loading hint config from {}", path.display());
            LookupConfig::load_from_file(path)?
        }
        None => LookupConfig::default(),
    };

    let dictionary = DictionaryLoader::new()
        .sources(args.dictionaries.iter().cloned())
        .skip_unreadable(!args.strict)
        .load()?;

    Ok(WordGroupLookup::with_config(dictionary, config))
}

/// Print the words registered for a character.
fn show_groups(args: &GroupsArgs, lookup: &WordGroupLookup, cli_args: &HanziHintArgs) -> Result<()> {
    let groups = lookup.groups(&args.character).to_vec();
    let lines = vec![groups.join("，")];

    output_lines(
        &lines,
        &GroupsResult {
            character: args.character.clone(),
            groups,
        },
        cli_args,
    )
}

/// Print the masked hint for a character.
fn show_hint(args: &HintArgs, lookup: &WordGroupLookup, cli_args: &HanziHintArgs) -> Result<()> {
    let hint = lookup.display_text(&args.character, &args.pronunciation);
    let lines = vec![hint.clone()];

    output_lines(
        &lines,
        &HintResult {
            character: args.character.clone(),
            pronunciation: args.pronunciation.clone(),
            hint,
        },
        cli_args,
    )
}

/// Show dictionary statistics.
fn show_stats(lookup: &WordGroupLookup, cli_args: &HanziHintArgs) -> Result<()> {
    let stats = collect_stats(lookup.dictionary(), cli_args.dictionaries.len());
    output_result("Dictionary statistics", &stats, cli_args)
}

/// Gather counts over a dictionary.
pub fn collect_stats(dictionary: &WordGroupDictionary, sources: usize) -> DictionaryStats {
    let mut stats = DictionaryStats {
        sources,
        characters: dictionary.len(),
        total_words: dictionary.word_count(),
        empty_entries: 0,
        longest_entry: None,
        longest_entry_words: 0,
    };

    for (character, words) in dictionary.iter() {
        if words.is_empty() {
            stats.empty_entries += 1;
        }
        if words.len() > stats.longest_entry_words {
            stats.longest_entry = Some(character.to_string());
            stats.longest_entry_words = words.len();
        }
    }

    stats
}

/// Check dictionary integrity; fails when any issue is found.
fn check_dictionary(lookup: &WordGroupLookup, cli_args: &HanziHintArgs) -> Result<()> {
    let dictionary = lookup.dictionary();
    let issues = dictionary.validate();
    let count = issues.len();

    let mut lines: Vec<String> = issues.iter().map(ToString::to_string).collect();
    if cli_args.verbosity() > 0 {
        lines.push(format!(
            "{} characters checked, {count} issues",
            dictionary.len()
        ));
    }

    output_lines(
        &lines,
        &CheckResult {
            characters: dictionary.len(),
            issues,
        },
        cli_args,
    )?;

    if count > 0 {
        return Err(HanziHintError::other(format!(
            "dictionary check found {count} issues"
        )));
    }
    Ok(())
}

/// Copy word groups into a word-bank file.
fn attach_wordbank(
    args: &AttachArgs,
    lookup: &WordGroupLookup,
    cli_args: &HanziHintArgs,
) -> Result<()> {
    if lookup.dictionary().is_empty() {
        return Err(HanziHintError::invalid_argument(
            "no word groups loaded; pass --dict or set HANZI_HINT_DICT",
        ));
    }

    let mut bank = WordBank::load(&args.wordbank)?;
    let report = attach_groups(&mut bank, lookup.dictionary());

    let written = !args.dry_run && report.changed();
    if written {
        bank.save(&args.wordbank)?;
    }

    output_result(
        "Word groups attached",
        &AttachResult {
            wordbank: args.wordbank.to_string_lossy().to_string(),
            entries: bank.entries.len(),
            report,
            written,
        },
        cli_args,
    )
}

/// Print the hint of every word-bank entry.
fn show_wordbank_hints(
    args: &HintsArgs,
    lookup: &WordGroupLookup,
    cli_args: &HanziHintArgs,
) -> Result<()> {
    let bank = WordBank::load(&args.wordbank)?;
    let hints = render_hints(&bank, lookup);
    let lines: Vec<String> = hints
        .iter()
        .map(|entry| format!("{}\t{}", entry.word, entry.hint))
        .collect();

    output_lines(
        &lines,
        &HintsResult {
            wordbank: args.wordbank.to_string_lossy().to_string(),
            hints,
        },
        cli_args,
    )
}
