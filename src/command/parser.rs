use serde_json::Value;

/// Split an input line into tokens. Whitespace separates tokens, and a
/// double-quoted substring becomes a single token with the quotes stripped,
/// so an attribute value may contain spaces. An unterminated quote runs to
/// the end of the line. No escape sequences.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                // A quote starts a token even when it encloses nothing,
                // so `""` passes an explicit empty value.
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        tokens.push(current);
    }

    tokens
}

/// Attempt numeric coercion on a raw token: a pure ASCII digit run becomes
/// an integer, a digit run with exactly one decimal point becomes a float,
/// and everything else keeps its text form. Coercion never fails a command;
/// a value that does not fit (overflow, `"1.2.3"`, signs) stays a string.
pub fn coerce_value(raw: &str) -> Value {
    if is_digits(raw) {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::from(n);
        }
        // Digit run too large for i64: keep the text.
        return Value::from(raw);
    }

    if let Some((whole, frac)) = raw.split_once('.') {
        if is_digits(whole) && is_digits(frac) {
            if let Ok(f) = raw.parse::<f64>() {
                if f.is_finite() {
                    return Value::from(f);
                }
            }
        }
    }

    Value::from(raw)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
