use stencil::ident::{to_snake_case, word_boundary};

#[test]
fn test_empty_input() {
    assert_eq!(to_snake_case(""), "");
}

#[test]
fn test_pascal_case() {
    assert_eq!(to_snake_case("ClassName"), "class_name");
    assert_eq!(to_snake_case("MyWidget"), "my_widget");
}

#[test]
fn test_camel_case() {
    assert_eq!(to_snake_case("fooBar"), "foo_bar");
    assert_eq!(to_snake_case("myHttpProxy"), "my_http_proxy");
}

#[test]
fn test_acronym_boundary() {
    // The split falls before the last letter of the acronym.
    assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
    assert_eq!(to_snake_case("HTTPServer"), "http_server");
    assert_eq!(to_snake_case("ABCde"), "ab_cde");
}

#[test]
fn test_all_uppercase_has_no_boundary() {
    assert_eq!(to_snake_case("ABC"), "abc");
    assert_eq!(to_snake_case("X"), "x");
}

#[test]
fn test_digit_boundaries() {
    // Letter->digit fires, then digit->uppercase fires.
    assert_eq!(to_snake_case("foo2Bar"), "foo_2_bar");
    assert_eq!(to_snake_case("Vector3"), "vector_3");
    // Digit runs stay together after the single separator.
    assert_eq!(to_snake_case("foo123"), "foo_123");
}

#[test]
fn test_no_boundaries_passes_through() {
    assert_eq!(to_snake_case("foo"), "foo");
    assert_eq!(to_snake_case("123"), "123");
}

#[test]
fn test_leading_uppercase_gets_no_leading_separator() {
    assert_eq!(to_snake_case("Foo"), "foo");
    assert_eq!(to_snake_case("F"), "f");
}

#[test]
fn test_existing_underscores_are_not_doubled() {
    assert_eq!(to_snake_case("already_snake"), "already_snake");
    assert_eq!(to_snake_case("foo_Bar"), "foo_bar");
}

#[test]
fn test_reapplication_is_a_fixed_point() {
    for input in ["ClassName", "XMLHttpRequest", "foo2Bar", "HTTPServer", "Mat4x4"] {
        let once = to_snake_case(input);
        assert_eq!(to_snake_case(&once), once, "for input {:?}", input);
    }
}

#[test]
fn test_output_shape_for_alphanumeric_inputs() {
    for input in ["ClassName", "XMLHttpRequest", "foo2Bar", "A1B2", "Mat4x4", "Foo"] {
        let result = to_snake_case(input);
        assert!(!result.contains("__"), "double underscore in {:?}", result);
        assert!(!result.starts_with('_'), "leading underscore in {:?}", result);
        assert!(!result.ends_with('_'), "trailing underscore in {:?}", result);
        assert!(result.len() >= input.len());
        assert!(result
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
    }
}

#[test]
fn test_word_boundary_rules_fire_independently() {
    // Acronym end: upper, upper, lower.
    assert!(word_boundary('B', 'C', Some('d')));
    assert!(!word_boundary('B', 'C', Some('D')));
    assert!(!word_boundary('B', 'C', None));

    // Word start: non-upper before upper.
    assert!(word_boundary('a', 'B', None));
    assert!(word_boundary('2', 'B', None));
    assert!(!word_boundary('A', 'B', None));

    // Alphabetic before non-alphabetic.
    assert!(word_boundary('a', '1', None));
    assert!(word_boundary('z', '-', None));
    assert!(!word_boundary('1', 'a', None));
    assert!(!word_boundary('a', 'b', Some('c')));
}
