/// Convert a camelCase or PascalCase identifier into a snake_case path
/// segment.
///
/// An underscore is inserted before an uppercase letter that follows a
/// lowercase letter or digit, and before an uppercase letter that starts a
/// capitalized word inside an acronym run (`ABCTest` becomes `abc_test`).
/// The result is lowercased. Already-converted input passes through
/// unchanged, so the function is idempotent.
///
/// # Example
/// ```
/// use rostra::to_snake_case;
///
/// assert_eq!(to_snake_case("GetUserData"), "get_user_data");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// ```
pub fn to_snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let after_lower_or_digit =
                chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit();
            let starts_word = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if after_lower_or_digit || starts_word {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}
