use super::*;

fn sample_dict() -> PrefixDictionary {
    PrefixDictionary::from_entries([
        ("s", "с"),
        ("sh", "ш"),
        ("shch", "щ"),
        ("h", "х"),
        ("c", "ц"),
        ("i", "и"),
        ("'", "ь"),
    ])
}

#[test]
fn test_insert_and_get() {
    let dict = sample_dict();
    assert_eq!(dict.get("sh"), Some("ш"));
    assert_eq!(dict.get("shch"), Some("щ"));
    assert_eq!(dict.get("'"), Some("ь"));
    assert_eq!(dict.get("shc"), None);
    assert_eq!(dict.get("q"), None);
    assert_eq!(dict.len(), 7);
}

#[test]
fn test_keys_fold_case() {
    let mut dict = PrefixDictionary::new();
    assert!(dict.insert("ZH", "ж"));
    assert_eq!(dict.get("zh"), Some("ж"));
    assert_eq!(dict.get("Zh"), Some("ж"));
    assert_eq!(dict.get("zH"), Some("ж"));
}

#[test]
fn test_empty_key_is_noop() {
    let mut dict = PrefixDictionary::new();
    assert!(!dict.insert("", "пусто"));
    assert!(dict.is_empty());
    assert_eq!(dict.node_count(), 0);
    assert_eq!(dict.get(""), None);
}

#[test]
fn test_first_insertion_wins() {
    let mut dict = PrefixDictionary::new();
    assert!(dict.insert("shod", "сход"));
    assert!(!dict.insert("shod", "шод"));
    assert!(!dict.insert("SHOD", "ШОД"));
    assert_eq!(dict.get("shod"), Some("сход"));
    // The rejected payloads never reach the word store.
    assert_eq!(dict.words().len(), 1);
}

#[test]
fn test_node_count_shares_prefixes() {
    let dict = PrefixDictionary::from_entries([("sh", "ш"), ("shch", "щ"), ("s", "с")]);
    // s, h, c, h
    assert_eq!(dict.node_count(), 4);
}

#[test]
fn test_child_at_is_case_insensitive() {
    let dict = sample_dict();
    let root = dict.root();
    let s = dict.child_at(root, 'S').unwrap();
    assert!(s.is_terminal());
    let sh = dict.child_at(s, 'H').unwrap();
    assert_eq!(sh.word().map(|id| dict.word(id)), Some("ш"));
    assert!(dict.child_at(sh, 'x').is_none());
    assert!(dict.child_at(root, 'q').is_none());
}

#[test]
fn test_longest_match_prefers_longer_key() {
    let dict = sample_dict();
    let m = dict.longest_match("shchi").unwrap();
    assert_eq!(m.char_len, 4);
    assert_eq!(m.byte_len, 4);
    assert_eq!(m.word, "щ");
}

#[test]
fn test_longest_match_falls_back_to_deepest_terminal() {
    let dict = sample_dict();
    // "shc" is a path but not terminal; "sh" is the deepest terminal.
    let m = dict.longest_match("shcx").unwrap();
    assert_eq!(m.char_len, 2);
    assert_eq!(m.word, "ш");
}

#[test]
fn test_longest_match_stops_at_end_of_input() {
    let dict = sample_dict();
    let m = dict.longest_match("shc").unwrap();
    assert_eq!(m.char_len, 2);
    assert_eq!(m.word, "ш");
}

#[test]
fn test_longest_match_none() {
    let dict = sample_dict();
    assert_eq!(dict.longest_match("qwe"), None);
    assert_eq!(dict.longest_match(""), None);
}

#[test]
fn test_longest_match_non_terminal_path_only() {
    let dict = PrefixDictionary::from_entries([("abc", "абц")]);
    assert_eq!(dict.longest_match("abx"), None);
}

#[test]
fn test_longest_match_mixed_case_source() {
    let dict = sample_dict();
    let m = dict.longest_match("ShCh").unwrap();
    assert_eq!(m.char_len, 4);
    assert_eq!(m.word, "щ");
}

#[test]
fn test_longest_match_counts_bytes_and_chars() {
    let dict = PrefixDictionary::from_entries([("é", "э"), ("éa", "эа")]);
    let m = dict.longest_match("éa!").unwrap();
    assert_eq!(m.char_len, 2);
    assert_eq!(m.byte_len, 3);
}

#[test]
fn test_long_input_does_not_recurse() {
    let key = "a".repeat(1_000);
    let dict = PrefixDictionary::from_entries([(key.as_str(), "я")]);
    let text = "a".repeat(5_000);
    let m = dict.longest_match(&text).unwrap();
    assert_eq!(m.char_len, 1_000);
}

#[test]
fn test_entries_in_key_order() {
    let dict = sample_dict();
    let keys: Vec<String> = dict.entries().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["'", "c", "h", "i", "s", "sh", "shch"]);
}
