use thiserror::Error;

mod consts;

pub use self::consts::{
    BLACKLIST, INVALID_BLACKLIST, INVALID_LENGTH_0, INVALID_LETTER_CASE, INVALID_NOT_STRING,
    INVALID_SPACIAL_CHAR, INVALID_START_WITH_, INVALID_START_WITH_DOT, INVALID_TRIMABLE,
};

/**
    Why a candidate name failed npm validation.

    Each variant renders as the exact message shown to the user.
    Only the first violated rule is ever reported for a given name.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidNpmName {
    #[error("{}", INVALID_NOT_STRING)]
    NotString,
    #[error("{}", INVALID_LENGTH_0)]
    Empty,
    #[error("{}", INVALID_TRIMABLE)]
    Trimmable,
    #[error("{}", INVALID_LETTER_CASE)]
    LetterCase,
    #[error("{}", INVALID_SPACIAL_CHAR)]
    SpecialCharacter,
    #[error("{}", INVALID_START_WITH_)]
    StartsWithUnderscore,
    #[error("{}", INVALID_START_WITH_DOT)]
    StartsWithDot,
    #[error("{name} {}", INVALID_BLACKLIST)]
    Blacklist { name: String },
}

#[must_use]
pub fn is_lower_case(s: &str) -> bool {
    !s.chars().any(char::is_uppercase)
}

/**
    Returns true iff the string contains a character outside the
    allowed set: ASCII lowercase letters, digits, and the separators
    `.`, `-` and `_`. Scoped-name syntax (`@scope/name`) is not part
    of the allowed set.
*/
#[must_use]
pub fn has_special_character(s: &str) -> bool {
    s.chars()
        .any(|c| !matches!(c, 'a'..='z' | '0'..='9' | '.' | '-' | '_'))
}

#[must_use]
pub fn is_blacklist_name(s: &str) -> bool {
    BLACKLIST.contains(&s)
}

/**
    Runs the ordered npm naming rules against a candidate value and
    reports the first violation, if any.

    `None` models input that is not a string at all, which fails the
    very first rule. Rules run cheapest-first and short-circuit, so
    a caller always gets a single unambiguous diagnostic. Note that
    the blacklist rule matches the raw name exactly, so `node-modules`
    is accepted even though it normalizes like `node_modules`.
*/
#[allow(clippy::missing_errors_doc)]
pub fn validate_npm(input: Option<&str>) -> Result<(), InvalidNpmName> {
    let Some(name) = input else {
        return Err(InvalidNpmName::NotString);
    };
    if name.is_empty() {
        return Err(InvalidNpmName::Empty);
    }
    if name != name.trim() {
        return Err(InvalidNpmName::Trimmable);
    }
    if !is_lower_case(name) {
        return Err(InvalidNpmName::LetterCase);
    }
    if has_special_character(name) {
        return Err(InvalidNpmName::SpecialCharacter);
    }
    if name.starts_with('_') {
        return Err(InvalidNpmName::StartsWithUnderscore);
    }
    if name.starts_with('.') {
        return Err(InvalidNpmName::StartsWithDot);
    }
    if is_blacklist_name(name) {
        return Err(InvalidNpmName::Blacklist {
            name: name.to_string(),
        });
    }
    Ok(())
}
