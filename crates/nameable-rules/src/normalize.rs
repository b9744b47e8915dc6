use std::fmt;

/**
    Normalizes a package name for equivalence comparison:
    every `.`, `-` and `_` is removed, then the rest is lowercased.

    The normalized form is only ever used for comparison,
    never for storage or display. Idempotent, so normalizing
    an already-normalized name is a no-op.
*/
#[must_use]
pub fn normalize(name: &str) -> String {
    let mut result = String::with_capacity(name.len());

    for ch in name.chars() {
        if ch == '.' || ch == '-' || ch == '_' {
            continue;
        }
        result.extend(ch.to_lowercase());
    }

    result
}

/**
    A package name in normalized form, used to detect names that
    collide once separators and letter case are ignored.

    `"name-able"` collides with `"nameable"` and with
    `"n-a-m-e-a-b-l-e"`, since all three normalize to the same form.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(normalize(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /**
        Returns true iff `candidate` normalizes to this name.
    */
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        normalize(candidate) == self.0
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_and_lowercases() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("fonction"), "fonction");
        assert_eq!(normalize("name-able"), "nameable");
        assert_eq!(normalize("n.a.m-e..a-b-le"), "nameable");
        assert_eq!(normalize("Name_Able"), "nameable");
    }

    #[test]
    fn idempotent() {
        for s in ["", "fonction", "name-able", "N-A_M.E", "weird~chars!", "a0.b1-c2"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "normalize({s:?}) not idempotent");
        }
    }

    #[test]
    fn output_free_of_separators_and_uppercase() {
        for s in ["Name_Able", "n.a.m-e..a-b-le", "HELLO-WORLD", "__.--.__"] {
            let normalized = normalize(s);
            assert!(!normalized.contains(['.', '-', '_']), "{normalized:?}");
            assert!(!normalized.chars().any(char::is_uppercase), "{normalized:?}");
        }
    }

    #[test]
    fn equivalence_table() {
        let table = [
            ("", "", true),
            ("fonction", "fonction", true),
            ("name-able", "nameable", true),
            ("nameable", "nameable", true),
            ("name-able", "n-a-m-e-a-b-l-e", true),
            ("n.a.m-e..a-b-le", "na.m.e.a.ble", true),
            ("nameable", "nnamebale", false),
            ("n-a--m-e-a-b-l_e", "n-a-m_e._a.b.le", true),
        ];

        for (name, candidate, expected) in table {
            assert_eq!(
                NormalizedName::new(name).matches(candidate),
                expected,
                "{name:?} vs {candidate:?}",
            );
        }
    }

    #[test]
    fn normalized_names_compare_equal_across_spellings() {
        assert_eq!(
            NormalizedName::new("name-able"),
            NormalizedName::new("N_A_M_E_A_B_L_E"),
        );
        assert_ne!(
            NormalizedName::new("name-able"),
            NormalizedName::new("nameable2"),
        );
    }
}
