//! Identifier case conversion.
//! Derives the lowercase, underscore-delimited form of a class name that is
//! used for file names and include guards.

/// Reports whether a word boundary falls between `prev` and `current`.
///
/// `following` is the character after `current`, if any. A boundary exists
/// when at least one of three rules fires:
/// 1. `prev` and `current` are both uppercase and `following` is lowercase
///    (the last letter of an acronym before a new word, `ABCde` -> `AB|Cde`);
/// 2. `prev` is not uppercase and `current` is uppercase (`fooBar` -> `foo|Bar`);
/// 3. `prev` is alphabetic and `current` is not (`foo2` -> `foo|2`).
///
/// Character classes are ASCII; the check is zero-width and consumes nothing.
pub fn word_boundary(prev: char, current: char, following: Option<char>) -> bool {
    let acronym_end = prev.is_ascii_uppercase()
        && current.is_ascii_uppercase()
        && following.is_some_and(|c| c.is_ascii_lowercase());
    let word_start = !prev.is_ascii_uppercase() && current.is_ascii_uppercase();
    let alpha_end = prev.is_ascii_alphabetic() && !current.is_ascii_alphabetic();

    acronym_end || word_start || alpha_end
}

/// Converts an identifier to its lower-snake-case naming convention.
///
/// Scans every adjacent character pair of the input, inserts a single
/// underscore wherever [`word_boundary`] reports one, then lowercases the
/// result. Overlapping rules at one position still produce one underscore,
/// and no underscore is inserted next to an existing one, so inputs made of
/// letters and digits never come out with a doubled separator and an already
/// converted name passes through unchanged.
///
/// # Arguments
/// * `input` - Identifier to convert; may be empty
///
/// # Returns
/// * `String` - Converted identifier; never shorter than the input
///
/// # Examples
/// ```
/// use stencil::ident::to_snake_case;
///
/// assert_eq!(to_snake_case("ClassName"), "class_name");
/// assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
/// ```
pub fn to_snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + input.len() / 2);

    for (i, &current) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            if prev != '_'
                && current != '_'
                && word_boundary(prev, current, chars.get(i + 1).copied())
            {
                result.push('_');
            }
        }
        result.extend(current.to_lowercase());
    }

    result
}
