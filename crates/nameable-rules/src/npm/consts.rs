pub const INVALID_NOT_STRING: &str = "name must be a string";
pub const INVALID_LENGTH_0: &str = "name length must be greater than zero";
pub const INVALID_TRIMABLE: &str = "name must not contain leading or trailing spaces";
pub const INVALID_LETTER_CASE: &str = "name must not contain capital letters";
pub const INVALID_SPACIAL_CHAR: &str = "name must not contain special characters";
pub const INVALID_START_WITH_: &str = "name must not start with _";
pub const INVALID_START_WITH_DOT: &str = "name must not start with .";
pub const INVALID_BLACKLIST: &str = "is a blacklist name";

/**
    Names that can never be published, regardless of any other rule.

    Matched exactly against the raw candidate name - case and
    separators are significant here, unlike in normalization.
*/
pub const BLACKLIST: &[&str] = &["node_modules", "favicon.ico"];
