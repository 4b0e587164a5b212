use super::*;

#[test]
fn mask_literals_basic() {
    assert_eq!(
        mask_literals(r#"let s = "if x > 0";"#, &["//"]),
        r#"let s = "        ";"#
    );
    assert_eq!(
        mask_literals(r#"let c = '{'; if x {"#, &["//"]),
        r#"let c = ' '; if x {"#
    );
}

#[test]
fn mask_literals_escaped_quote() {
    assert_eq!(
        mask_literals(r#"let s = "he said \"hi\"";"#, &["//"]),
        r#"let s = "              ";"#
    );
}

#[test]
fn mask_literals_strips_trailing_comment() {
    let line = "x += 1; // if this happens";
    let masked = mask_literals(line, &["//"]);
    assert!(masked.starts_with("x += 1; "));
    assert!(!masked.contains("if"));
    assert_eq!(masked.len(), line.len(), "masking preserves line length");
}

#[test]
fn mask_literals_marker_inside_string_not_a_comment() {
    let masked = mask_literals(r#"let url = "http://x"; if y {"#, &["//"]);
    assert!(
        masked.contains("if y {"),
        "code after a string containing '//' must survive: {masked:?}"
    );
}

#[test]
fn mask_literals_hash_comment() {
    let masked = mask_literals("total += 1  # for each row", &["#"]);
    assert!(!masked.contains("for"));
    assert!(masked.starts_with("total += 1"));
}

#[test]
fn mask_literals_empty() {
    assert_eq!(mask_literals("", &["//"]), "");
}

#[test]
fn mask_literals_unclosed_string() {
    assert_eq!(mask_literals(r#"let s = "hello"#, &["//"]), r#"let s = "     "#);
}

#[test]
fn round_dp_two_places() {
    assert_eq!(round_dp(33.333333, 2), 33.33);
    assert_eq!(round_dp(66.666666, 2), 66.67);
    assert_eq!(round_dp(100.0, 2), 100.0);
}

#[test]
fn round_dp_three_places() {
    assert_eq!(round_dp(5.0 / 3.0, 3), 1.667);
}
