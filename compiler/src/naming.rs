use crate::types::{ColumnCase, ColumnNameSpec};

/// Column literal used when names are left for the caller to fill in.
pub const EMPTY_COLUMN: &str = "\"\"";

/// Returns the quoted column literal passed to the `ResultSet` accessor for `identifier`.
pub fn column_token(identifier: &str, spec: &ColumnNameSpec) -> String {
    if !spec.generate_column_names {
        return EMPTY_COLUMN.to_string();
    }

    let base = if spec.use_separator {
        split_words(identifier).join(&spec.separator)
    } else {
        identifier.to_string()
    };

    let quoted = format!("\"{}\"", base);
    match spec.column_case {
        ColumnCase::Upper     => quoted.to_uppercase(),
        ColumnCase::Lower     => quoted.to_lowercase(),
        ColumnCase::Unchanged => quoted,
    }
}

/// Splits a camelCase / snake_case identifier into words.
///
/// Runs of capitals stay together, but the last capital of a run starts the
/// next word when a lowercase letter follows it, so `URLValue` becomes
/// `["URL", "Value"]`. Underscores only separate words. Characters without
/// case count as lowercase.
pub fn split_words(identifier: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut prev_upper: Option<bool> = None;

    for c in identifier.chars() {
        if c == '_' {
            flush(&mut words, &mut word);
            prev_upper = None;
            continue;
        }

        let upper = c.is_uppercase();
        match prev_upper {
            Some(true) if !upper && word.chars().count() > 1 => {
                // "URLV" + 'a' => "URL", "Va"
                if let Some(last) = word.pop() {
                    flush(&mut words, &mut word);
                    word.push(last);
                }
                word.push(c);
            }
            Some(false) if upper && !word.is_empty() => {
                flush(&mut words, &mut word);
                word.push(c);
            }
            _ => word.push(c),
        }
        prev_upper = Some(upper);
    }

    flush(&mut words, &mut word);
    words
}

fn flush(words: &mut Vec<String>, word: &mut String) {
    if !word.is_empty() {
        words.push(std::mem::take(word));
    }
}
