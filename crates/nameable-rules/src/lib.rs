mod normalize;

pub mod npm;

pub use self::normalize::{NormalizedName, normalize};
pub use self::npm::{
    InvalidNpmName, has_special_character, is_blacklist_name, is_lower_case, validate_npm,
};
