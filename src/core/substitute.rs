//! Implementation of `matchline replace-match`
//!
//! Replaces the first match on each line and emits every line, changed or
//! not, in input order. Only the first match is touched per line; this is
//! deliberately not a global replace.

use std::io::{BufRead, Write};

use super::engine::{Captures, CompiledRegex};
use super::error::Error;

/// Rewrite sed/Python-style `\1`..`\9` backreferences to the `${N}` syntax
/// the engines expand. `\\` becomes a literal backslash; any other escape
/// passes through untouched.
pub fn normalize_replacement(replacement: &str) -> String {
    let mut result = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some(&d) if d.is_ascii_digit() => {
                chars.next();
                result.push_str("${");
                result.push(d);
                result.push('}');
            }
            Some(&'\\') => {
                chars.next();
                result.push('\\');
            }
            _ => result.push('\\'),
        }
    }

    result
}

/// Expand `$N`, `$name`, `${name}` and `$$` in a replacement against one
/// match, following the regex crate's dialect: a bare reference is the
/// longest run of word characters after `$`, and an unknown group expands
/// to the empty string.
///
/// Used for the fancy-regex engine, which has no first-match replace with
/// capture expansion of its own.
fn expand_replacement(replacement: &str, caps: &Captures<'_>) -> String {
    let mut result = String::new();
    let mut chars = replacement.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some(&c) if c == '_' || c.is_ascii_alphanumeric() => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if c != '_' && !c.is_ascii_alphanumeric() {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                if let Ok(group) = name.parse::<usize>() {
                    if let Some(text) = caps.get(group) {
                        result.push_str(text);
                    }
                } else if let Some(text) = caps.named(&name) {
                    result.push_str(text);
                }
            }
            Some(&'{') => {
                chars.next();
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if c == '}' {
                        chars.next();
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                if let Ok(group) = name.parse::<usize>() {
                    if let Some(text) = caps.get(group) {
                        result.push_str(text);
                    }
                } else if let Some(text) = caps.named(&name) {
                    result.push_str(text);
                }
            }
            Some(&'$') => {
                chars.next();
                result.push('$');
            }
            _ => result.push('$'),
        }
    }

    result
}

/// Replace the first match in one line. The replacement must already be in
/// `$`-syntax (see [`normalize_replacement`]). A line with no match comes
/// back unchanged.
pub fn substitute_line(
    re: &CompiledRegex,
    line: &str,
    replacement: &str,
) -> Result<String, Error> {
    match re {
        // regex's `replace` rewrites exactly one match and expands
        // $N/${name} natively
        CompiledRegex::Regex(inner) => Ok(inner.replace(line, replacement).into_owned()),
        CompiledRegex::FancyRegex(_) => match re.captures(line)? {
            Some(caps) => {
                if let Some((start, end)) = caps.span(0) {
                    let mut result = String::with_capacity(line.len());
                    result.push_str(&line[..start]);
                    result.push_str(&expand_replacement(replacement, &caps));
                    result.push_str(&line[end..]);
                    Ok(result)
                } else {
                    Ok(line.to_string())
                }
            }
            None => Ok(line.to_string()),
        },
    }
}

/// Run the substitute loop over the whole input, one output line per input
/// line, each followed by exactly one terminator.
pub fn substitute_lines<R: BufRead, W: Write>(
    re: &CompiledRegex,
    replacement: &str,
    reader: R,
    out: &mut W,
) -> Result<(), Error> {
    let replacement = normalize_replacement(replacement);

    for line in reader.lines() {
        let line = line?;
        let rewritten = substitute_line(re, &line, &replacement)?;
        writeln!(out, "{}", rewritten)?;
    }

    Ok(())
}
