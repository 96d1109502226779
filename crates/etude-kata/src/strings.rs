//! String katas.

/// Reverse the characters of `s`.
#[must_use]
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// First character of `s` that occurs exactly once, scanning left to right.
///
/// ```
/// use etude_kata::strings::first_single_char;
///
/// assert_eq!(first_single_char("abracadabra"), Some('c'));
/// assert_eq!(first_single_char("entente"), None);
/// ```
#[must_use]
pub fn first_single_char(s: &str) -> Option<char> {
    s.chars()
        .find(|&c| s.chars().filter(|&other| other == c).count() == 1)
}

/// [Mathematical interval](https://en.wikipedia.org/wiki/Interval_(mathematics))
/// notation for the interval between `a` and `b`, smaller endpoint first.
/// Included endpoints get square brackets, excluded ones parentheses.
///
/// ```
/// use etude_kata::strings::interval_notation;
///
/// assert_eq!(interval_notation(0.0, 1.0, true, false), "[0, 1)");
/// assert_eq!(interval_notation(5.0, 3.0, true, true), "[3, 5]");
/// ```
#[must_use]
pub fn interval_notation(a: f64, b: f64, start_included: bool, end_included: bool) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let open = if start_included { '[' } else { '(' };
    let close = if end_included { ']' } else { ')' };
    format!("{open}{lo}, {hi}{close}")
}

/// Whether the brackets in `s` pair up and nest properly.
///
/// The bracket alphabet is `()`, `[]`, `{}`, `<>`; other characters are
/// ignored. The empty string is balanced.
#[must_use]
pub fn is_brackets_balanced(s: &str) -> bool {
    let mut stack = Vec::new();
    for c in s.chars() {
        match c {
            '(' | '[' | '{' | '<' => stack.push(c),
            ')' | ']' | '}' | '>' => {
                if stack.pop() != Some(opening_for(c)) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// The opening bracket matching a closing one.
const fn opening_for(closing: char) -> char {
    match closing {
        ')' => '(',
        ']' => '[',
        '}' => '{',
        _ => '<',
    }
}

/// Longest common directory prefix of the given paths, as the `/`-separated
/// components shared by all of them, each rendered with a trailing `/`.
///
/// ```
/// use etude_kata::strings::common_directory_path;
///
/// assert_eq!(
///     common_directory_path(&["/web/images/image1.png", "/web/images/image2.png"]),
///     "/web/images/"
/// );
/// assert_eq!(
///     common_directory_path(&["/web/favicon.ico", "/web-scripts/dump", "/webalizer/logs"]),
///     "/"
/// );
/// ```
#[must_use]
pub fn common_directory_path(paths: &[&str]) -> String {
    let parts: Vec<Vec<&str>> = paths.iter().map(|path| path.split('/').collect()).collect();
    let Some(head) = parts.first() else {
        return String::new();
    };

    let mut common = String::new();
    for (depth, component) in head.iter().enumerate() {
        if parts.iter().all(|p| p.get(depth) == Some(component)) {
            common.push_str(component);
            common.push('/');
        } else {
            break;
        }
    }
    common
}
