use inidoc::{DEFAULT_SECTION, Document, IniError, IniOptions};

const SAMPLE: &str = r#"
title = Sample

[numbers]
int = 42
negative = -7
suffix = 12px
word = twelve
ratio = 2.5
sci = 1e3

[switches]
a = true
b = off
c = yes
d = 0
e = Enabled
"#;

fn sample() -> Document {
    let mut doc = Document::new();
    doc.parse(SAMPLE).unwrap();
    doc
}

#[test]
fn test_string_getters() {
    let doc = sample();
    assert_eq!(doc.get_string(DEFAULT_SECTION, "title").unwrap(), "Sample");
    assert_eq!(doc.get_string_or("numbers", "missing", "fallback"), "fallback");
}

#[test]
fn test_lenient_numbers() {
    let doc = sample();
    assert_eq!(doc.get_int("numbers", "int").unwrap(), 42);
    assert_eq!(doc.get_int("numbers", "negative").unwrap(), -7);
    assert_eq!(doc.get_int("numbers", "suffix").unwrap(), 12);
    assert_eq!(doc.get_int("numbers", "word").unwrap(), 0);
    assert_eq!(doc.get_double("numbers", "ratio").unwrap(), 2.5);
    assert_eq!(doc.get_double("numbers", "sci").unwrap(), 1000.0);
    assert_eq!(doc.get_int("numbers", "ratio").unwrap(), 2);
}

#[test]
fn test_strict_numbers() {
    let mut doc = Document::with_options(IniOptions {
        strict_numbers: true,
        ..IniOptions::default()
    });
    doc.parse(SAMPLE).unwrap();

    assert_eq!(doc.get_int("numbers", "int").unwrap(), 42);
    assert!(matches!(
        doc.get_int("numbers", "suffix"),
        Err(IniError::InvalidNumber { .. })
    ));
    assert!(doc.get_double("numbers", "word").is_err());
    assert_eq!(doc.get_int_or("numbers", "word", -1), -1);
}

#[test]
fn test_bool_table() {
    let doc = sample();
    assert!(doc.get_bool("switches", "a").unwrap());
    assert!(!doc.get_bool("switches", "b").unwrap());
    assert!(doc.get_bool("switches", "c").unwrap());
    assert!(!doc.get_bool("switches", "d").unwrap());
    assert_eq!(
        doc.get_bool("switches", "e").unwrap_err(),
        IniError::boolean_parse("Enabled")
    );
}

#[test]
fn test_custom_booleans_are_per_document() {
    let mut doc = sample();
    doc.register_booleans("Enabled", "Disabled");
    assert!(doc.get_bool("switches", "e").unwrap());

    let other = sample();
    assert!(other.get_bool("switches", "e").is_err());
}

#[test]
fn test_case_insensitive_booleans() {
    let mut doc = Document::with_options(IniOptions {
        case_insensitive_booleans: true,
        ..IniOptions::default()
    });
    doc.parse("flag = YES\nother = Off\n").unwrap();
    assert!(doc.get_bool(DEFAULT_SECTION, "flag").unwrap());
    assert!(!doc.get_bool(DEFAULT_SECTION, "other").unwrap());
}

#[test]
fn test_or_default_variants() {
    let doc = sample();
    assert!(doc.get_bool_or(DEFAULT_SECTION, "flag", true));
    assert!(!doc.get_bool_or("nowhere", "flag", false));
    assert!(doc.get_bool_or("switches", "e", true));
    assert_eq!(doc.get_int_or("numbers", "int", 0), 42);
    assert_eq!(doc.get_double_or("numbers", "nothing", 9.5), 9.5);
}

#[test]
fn test_lookup_errors() {
    let doc = sample();
    assert_eq!(
        doc.get_string("nowhere", "k").unwrap_err(),
        IniError::section_not_found("nowhere")
    );
    assert_eq!(
        doc.get_int("numbers", "nothing").unwrap_err(),
        IniError::key_not_found("numbers", "nothing")
    );
}

#[test]
fn test_enumeration() {
    let doc = sample();
    assert_eq!(doc.section_names(), vec!["", "numbers", "switches"]);
    assert_eq!(
        doc.keys("switches").unwrap(),
        vec!["a", "b", "c", "d", "e"]
    );
    assert_eq!(doc.values("switches").unwrap()[1], "off");
    assert_eq!(doc.items("numbers").unwrap().len(), 6);
    assert_eq!(doc.items_len("numbers").unwrap(), 6);
    assert!(doc.keys("nowhere").is_err());

    let sections = doc.sections_named(&["switches", "nowhere"]);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].name(), "switches");
}

#[test]
fn test_section_iteration() {
    let doc = sample();
    let section = doc.section("numbers").unwrap();
    let keys: Vec<&str> = section.iter().map(|item| item.key.as_str()).collect();
    assert_eq!(keys, section.keys());

    let mut count = 0;
    for _item in section {
        count += 1;
    }
    assert_eq!(count, section.len());
}
