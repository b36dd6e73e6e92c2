//! Parsing realistic game configuration excerpts

use pretty_assertions::assert_eq;
use tsedit_ini::{Error, ParseOptions, ParsedConfig};

const RULES_EXCERPT: &str = r#"
; RULES.INI excerpt
[General]
Name=Tiberian Sun            ; display name
Version=2.03

[InfantryTypes]
1=E1
2=E2
3=MEDIC

[E1]
UIName=Name:E1
Name=Light Infantry
Strength=125
Cost=120
TechLevel=1
Owner=GDI,Nod
Armor=none

[E1]
Cost=110
"#;

#[test]
fn sections_appear_in_first_seen_order() {
    let config = ParsedConfig::parse(RULES_EXCERPT).unwrap();
    assert_eq!(
        config.section_names().collect::<Vec<_>>(),
        vec!["General", "InfantryTypes", "E1"]
    );
}

#[test]
fn keys_keep_order_with_last_value() {
    let config = ParsedConfig::parse(RULES_EXCERPT).unwrap();
    let e1 = config.section("e1").unwrap();

    assert_eq!(
        e1.keys().collect::<Vec<_>>(),
        vec!["UIName", "Name", "Strength", "Cost", "TechLevel", "Owner", "Armor"]
    );
    assert_eq!(e1.get("Cost"), Some("110"));
    assert_eq!(e1.get_int("Strength").unwrap().unwrap(), 125);
    assert_eq!(e1.get_list("Owner").unwrap(), vec!["GDI", "Nod"]);
}

#[test]
fn trailing_comments_are_not_part_of_values() {
    let config = ParsedConfig::parse(RULES_EXCERPT).unwrap();
    assert_eq!(config.get("General", "Name"), Some("Tiberian Sun"));
}

#[test]
fn numbered_list_sections_preserve_order() {
    let config = ParsedConfig::parse(RULES_EXCERPT).unwrap();
    let types: Vec<_> = config
        .section("InfantryTypes")
        .unwrap()
        .iter()
        .map(|(_, v)| v)
        .collect();
    assert_eq!(types, vec!["E1", "E2", "MEDIC"]);
}

#[test]
fn structural_error_reports_line_number() {
    let text = "[General]\nName=x\n[Broken\nKey=1\n";
    let err = ParsedConfig::parse(text).unwrap_err();
    match err {
        Error::Structural { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("unterminated"), "got: {}", message);
        }
        other => panic!("expected structural error, got {other:?}"),
    }
}

#[test]
fn lenient_mode_still_rejects_orphan_keys() {
    let result = ParsedConfig::parse_with("Key=1\n[A]\n", ParseOptions::lenient());
    assert!(matches!(result, Err(Error::Structural { line: 1, .. })));
}
