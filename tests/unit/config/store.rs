use super::*;

fn parsed(text: &str) -> ConfigStore {
    let mut cfg = ConfigStore::new();
    cfg.parse_str(text).unwrap();
    cfg
}

#[test]
fn scalar_coercion_is_ordered() {
    let cfg = parsed("a = 5\nb = 5.5\nc = True\nd = False\ne = hello\n");
    assert_eq!(cfg.get_int("a").unwrap(), 5);
    assert_eq!(cfg.get_float("b").unwrap(), 5.5);
    assert!(cfg.get_bool("c").unwrap());
    assert!(!cfg.get_bool("d").unwrap());
    assert_eq!(cfg.get_str("e").unwrap(), "hello");
}

#[test]
fn almost_numeric_values_stay_strings() {
    let cfg = parsed("a = 5x\nb = .5\nc = 5.\nd = 1.2.3\ne = true\n");
    for key in ["a", "b", "c", "d", "e"] {
        assert!(cfg.get_str(key).is_ok(), "key {key} should be a string");
    }
}

#[test]
fn bracketed_block_preserves_order() {
    let cfg = parsed("scripts = {\na\nb\n}\n");
    assert_eq!(cfg.get_list("scripts").unwrap(), ["a", "b"]);
}

#[test]
fn blank_lines_skipped_inside_and_outside_blocks() {
    let cfg = parsed("\n\nscripts = {\n\n  first  \n\nsecond\n}\n\nk = 1\n");
    assert_eq!(cfg.get_list("scripts").unwrap(), ["first", "second"]);
    assert_eq!(cfg.get_int("k").unwrap(), 1);
}

#[test]
fn last_assignment_wins() {
    let cfg = parsed("a = 1\na = 2\n");
    assert_eq!(cfg.get_int("a").unwrap(), 2);
}

#[test]
fn missing_key_is_a_config_error() {
    let cfg = parsed("a = 1\n");
    let err = cfg.get_int("never_assigned").unwrap_err();
    assert!(err.to_string().contains("never_assigned"));
}

#[test]
fn type_mismatch_names_key_and_expected_type() {
    let cfg = parsed("a = hello\n");
    let err = cfg.get_int("a").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("'a'"));
    assert!(msg.contains("int"));
}

#[test]
fn line_without_separator_is_a_fatal_parse_error() {
    let mut cfg = ConfigStore::new();
    let err = cfg.parse_str("a = 1\nnonsense line\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 2"));
    assert!(msg.contains('='));
}

#[test]
fn unterminated_block_is_a_fatal_parse_error() {
    let mut cfg = ConfigStore::new();
    let err = cfg.parse_str("scripts = {\na\n").unwrap_err();
    assert!(err.to_string().contains("scripts"));
}

#[test]
fn default_font_is_seeded_and_overridable() {
    let mut cfg = ConfigStore::with_default_font("fonts/default.otf");
    assert_eq!(cfg.get_str("font_name").unwrap(), "fonts/default.otf");

    cfg.parse_str("font_name = custom.ttf\n").unwrap();
    assert_eq!(cfg.get_str("font_name").unwrap(), "custom.ttf");
}

#[test]
fn get_u32_rejects_negative_values() {
    let cfg = parsed("w = 100\n");
    assert_eq!(cfg.get_u32("w").unwrap(), 100);

    // Negative literals coerce to strings (no leading '-' in the digit
    // check), so they surface as a type mismatch rather than a range error.
    let cfg = parsed("w = -1\n");
    assert!(cfg.get_u32("w").is_err());
}

#[test]
fn parse_missing_file_is_an_error() {
    let mut cfg = ConfigStore::new();
    assert!(
        cfg.parse(std::path::Path::new("target/no_such_dir/config.txt"))
            .is_err()
    );
}
