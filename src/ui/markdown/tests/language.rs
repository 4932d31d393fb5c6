use crate::ui::markdown::language::{detect, Language};

#[test]
fn python_constructs_are_detected() {
    assert_eq!(detect("import numpy as np"), Language::Python);
    assert_eq!(detect("def greet(name):\n    return name"), Language::Python);
    assert_eq!(detect("print(42)"), Language::Python);
    assert_eq!(detect("df = pd.DataFrame(data)"), Language::Python);
}

#[test]
fn java_keywords_are_detected_on_word_boundaries() {
    assert_eq!(detect("public class Greeter {}"), Language::Java);
    assert_eq!(detect("static void main()"), Language::Java);
    // Substrings of longer words do not count.
    assert_eq!(detect("classes and functions"), Language::Python);
}

#[test]
fn javascript_keywords_and_arrows_are_detected() {
    assert_eq!(detect("const x = 1;"), Language::Javascript);
    assert_eq!(detect("let y = 2;"), Language::Javascript);
    assert_eq!(detect("(a) => a + 1"), Language::Javascript);
}

#[test]
fn sql_keywords_match_case_insensitively() {
    assert_eq!(detect("SELECT id FROM users"), Language::Sql);
    assert_eq!(detect("select id from users"), Language::Sql);
    assert_eq!(detect("insert into t values (1)"), Language::Sql);
}

#[test]
fn json_needs_a_brace_and_a_quote_or_colon() {
    assert_eq!(detect("{\"key\": \"value\"}"), Language::Json);
    // A brace alone is not enough.
    assert_eq!(detect("{}"), Language::Python);
}

#[test]
fn unmatched_input_falls_back_to_python() {
    assert_eq!(detect(""), Language::Python);
    assert_eq!(detect("hello world"), Language::Python);
}

#[test]
fn earlier_rules_shadow_later_ones() {
    // Java keywords appear before the JavaScript-looking `var`, so the Java
    // rule must win.
    assert_eq!(detect("public class A { var x; }"), Language::Java);
    // A Python marker beats everything downstream.
    assert_eq!(detect("def q():\n    return 'SELECT * FROM t'"), Language::Python);
}

#[test]
fn detection_is_deterministic() {
    let snippet = "function f() { return 1; }";
    assert_eq!(detect(snippet), detect(snippet));
    assert_eq!(detect(snippet), Language::Javascript);
}

#[test]
fn tags_have_stable_string_forms() {
    assert_eq!(Language::Python.as_str(), "python");
    assert_eq!(Language::Javascript.as_str(), "javascript");
    assert_eq!(Language::Sql.label(), "SQL");
}
