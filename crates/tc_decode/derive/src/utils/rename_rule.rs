/// A naming convention applied to field and variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    CamelCase,
    SnakeCase,
    KebabCase,
    LowerCase,
    UpperCase,
    PascalCase,
    ScreamingSnakeCase,
}

impl RenameRule {
    pub(crate) const NAMES: &'static [&'static str] = &[
        "camelCase",
        "snake_case",
        "kebab-case",
        "lowercase",
        "UPPERCASE",
        "PascalCase",
        "SCREAMING_SNAKE_CASE",
    ];

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "camelCase" => Self::CamelCase,
            "snake_case" => Self::SnakeCase,
            "kebab-case" => Self::KebabCase,
            "lowercase" => Self::LowerCase,
            "UPPERCASE" => Self::UpperCase,
            "PascalCase" => Self::PascalCase,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnakeCase,
            _ => return None,
        })
    }

    /// Applies the rule to a Rust identifier, either `snake_case` or `PascalCase`.
    pub(crate) fn apply(self, ident: &str) -> String {
        let words = split_words(ident);
        match self {
            Self::CamelCase => {
                let mut out = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            Self::PascalCase => words.iter().map(|word| capitalize(word)).collect(),
            Self::SnakeCase => join_lower(&words, "_"),
            Self::KebabCase => join_lower(&words, "-"),
            Self::ScreamingSnakeCase => join_lower(&words, "_").to_uppercase(),
            Self::LowerCase => words.concat().to_lowercase(),
            Self::UpperCase => words.concat().to_uppercase(),
        }
    }
}

fn split_words(ident: &str) -> Vec<String> {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let mut words = Vec::new();
    let mut current = String::new();
    for c in ident.chars() {
        if c == '_' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(c);
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn join_lower(words: &[String], sep: &str) -> String {
    words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::RenameRule;

    #[test]
    fn from_snake_field() {
        let cases = [
            (RenameRule::CamelCase, "userId"),
            (RenameRule::PascalCase, "UserId"),
            (RenameRule::KebabCase, "user-id"),
            (RenameRule::ScreamingSnakeCase, "USER_ID"),
            (RenameRule::LowerCase, "userid"),
        ];
        for (rule, expected) in cases {
            assert_eq!(rule.apply("user_id"), expected);
        }
    }

    #[test]
    fn from_pascal_variant() {
        assert_eq!(RenameRule::SnakeCase.apply("DarkBlue"), "dark_blue");
        assert_eq!(RenameRule::CamelCase.apply("DarkBlue"), "darkBlue");
        assert_eq!(RenameRule::UpperCase.apply("DarkBlue"), "DARKBLUE");
    }

    #[test]
    fn names_round_trip() {
        for name in RenameRule::NAMES {
            assert!(RenameRule::from_name(name).is_some());
        }
        assert!(RenameRule::from_name("Title Case").is_none());
    }
}
