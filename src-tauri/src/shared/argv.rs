//! Usage: Shell-style splitting of a parameter string into an argument vector.

/// Splits a raw parameter string into discrete argv tokens.
///
/// Whitespace separates tokens; single quotes take everything literally;
/// inside double quotes a backslash escapes `"`, `\`, `` ` `` and `$`; a
/// backslash outside quotes escapes the next character. Quoting can produce
/// empty tokens (`''`). An unterminated quote swallows the rest of the
/// string into the final token. The empty string yields no tokens.
pub(crate) fn split(params: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut has_token = false;
    let mut in_single = false;
    let mut in_double = false;
    let mut chars = params.chars().peekable();

    while let Some(c) = chars.next() {
        if in_single {
            if c == '\'' {
                in_single = false;
            } else {
                current.push(c);
            }
            continue;
        }

        if in_double {
            match c {
                '"' => in_double = false,
                '\\' => match chars.peek().copied() {
                    Some(next) if matches!(next, '"' | '\\' | '`' | '$') => {
                        current.push(next);
                        chars.next();
                    }
                    _ => current.push('\\'),
                },
                _ => current.push(c),
            }
            continue;
        }

        match c {
            '\'' => {
                in_single = true;
                has_token = true;
            }
            '"' => {
                in_double = true;
                has_token = true;
            }
            '\\' => {
                if let Some(next) = chars.next() {
                    current.push(next);
                    has_token = true;
                }
            }
            _ if c.is_whitespace() => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            _ => {
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
