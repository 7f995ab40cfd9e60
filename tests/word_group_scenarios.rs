use std::io::Write;
use std::sync::Arc;
use std::thread;

use hanzi_hint::prelude::*;
use hanzi_hint::wordbank::{WordBank, attach_groups, render_hints};
use tempfile::{NamedTempFile, tempdir};

const SAMPLE: &str = r#"{"恒": ["恒星", "永恒", "恒定"], "厘": ["厘米", "厘清", "厘定"]}"#;

fn sample_lookup() -> WordGroupLookup {
    WordGroupLookup::new(WordGroupDictionary::from_json_str(SAMPLE).unwrap())
}

#[test]
fn test_sample_dictionary_scenarios() {
    let lookup = sample_lookup();

    assert_eq!(lookup.groups("恒"), ["恒星", "永恒", "恒定"]);
    assert_eq!(
        lookup.display_text("恒", "héng"),
        "héng (___星，永___，___定)"
    );

    assert!(lookup.groups("坡").is_empty());
    assert_eq!(lookup.display_text("坡", "pō"), "pō");
}

#[test]
fn test_five_word_entry_uses_first_three() {
    let mut builder = WordGroupDictionary::builder();
    builder
        .insert(
            "念",
            ["想念", "念书", "纪念", "怀念", "念头"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        )
        .unwrap();
    let lookup = WordGroupLookup::new(builder.build());

    assert_eq!(lookup.groups("念").len(), 5);
    assert_eq!(lookup.display_text("念", "niàn"), "niàn (想___，___书，纪___)");
}

#[test]
fn test_every_absent_character_is_plain_pronunciation() {
    let lookup = sample_lookup();
    for (character, pronunciation) in [("坡", "pō"), ("摆", "bǎi"), ("a", "x"), ("", "")] {
        assert!(lookup.groups(character).is_empty());
        assert_eq!(lookup.display_text(character, pronunciation), pronunciation);
    }
}

#[test]
fn test_bundled_sample_data() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/word-groups.sample.json");
    let dictionary = WordGroupDictionary::load_from_file(path).unwrap();
    assert!(dictionary.validate().is_empty());

    let lookup = WordGroupLookup::new(dictionary);
    assert_eq!(lookup.display_text("摆", "bǎi"), "bǎi (___动，摇___，___设)");
}

#[test]
fn test_loader_snapshot_shared_across_threads() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("word-groups-base.json");
    let extra = dir.path().join("word-groups-extra.json");
    std::fs::write(&base, SAMPLE).unwrap();
    std::fs::write(&extra, r#"{"坡": ["山坡", "坡度"]}"#).unwrap();

    let dictionary = Arc::new(
        DictionaryLoader::new()
            .source(&base)
            .source(&extra)
            .load()
            .unwrap(),
    );
    let lookup = WordGroupLookup::new(Arc::clone(&dictionary));

    let handles: Vec<_> = ["恒", "厘", "坡", "摆"]
        .into_iter()
        .map(|character| {
            let lookup = lookup.clone();
            thread::spawn(move || lookup.display_text(character, "?"))
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(
        results,
        vec![
            "? (___星，永___，___定)",
            "? (___米，___清，___定)",
            "? (山___，___度)",
            "?",
        ]
    );
    assert_eq!(dictionary.len(), 3);
}

#[test]
fn test_wordbank_round_trip_through_files() {
    let mut dict_file = NamedTempFile::new().unwrap();
    write!(dict_file, "{SAMPLE}").unwrap();
    dict_file.flush().unwrap();

    let mut bank_file = NamedTempFile::new().unwrap();
    write!(
        bank_file,
        r#"{{"wordBank": [{{"word": "厘", "pinyin": "lí"}}, {{"word": "坡", "pinyin": "pō", "groups": ["山坡"]}}]}}"#
    )
    .unwrap();
    bank_file.flush().unwrap();

    let dictionary = WordGroupDictionary::load_from_file(dict_file.path()).unwrap();
    let mut bank = WordBank::load(bank_file.path()).unwrap();
    let report = attach_groups(&mut bank, &dictionary);
    assert_eq!(report.updated, 2);
    assert_eq!(report.missing, 1);
    assert_eq!(report.normalized, 0);
    bank.save(bank_file.path()).unwrap();

    let bank = WordBank::load(bank_file.path()).unwrap();
    assert_eq!(bank.entries[0].groups(), ["厘米", "厘清", "厘定"]);
    assert!(bank.entries[1].groups().is_empty());

    let hints = render_hints(&bank, &WordGroupLookup::new(dictionary));
    assert_eq!(hints[0].hint, "lí (___米，___清，___定)");
    assert_eq!(hints[1].hint, "pō");
}
