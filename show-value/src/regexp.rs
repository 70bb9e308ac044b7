//! Regular expression values.
//!
//! Only the textual form matters here: a `VRegExp` stores its canonical source
//! and flags and renders as the literal `/source/flags`. Nothing is compiled.

use alloc::rc::Rc;
use core::fmt;

use crate::error::ValueError;
use crate::value::Identity;

/// Flags in the order the host reports them.
const FLAG_ORDER: &str = "dgimsuvy";

#[derive(Debug)]
struct RegExpInner {
    source: String,
    flags: String,
}

/// A regular expression.
#[derive(Clone)]
pub struct VRegExp(Rc<RegExpInner>);

impl VRegExp {
    /// Creates a regular expression from a pattern and a set of flags.
    ///
    /// The flags may come in any order but must be drawn from `dgimsuvy`, each at
    /// most once, and may not combine `u` with `v`.
    pub fn new(pattern: &str, flags: &str) -> Result<Self, ValueError> {
        let flags = canonical_flags(flags)?;
        Ok(VRegExp(Rc::new(RegExpInner {
            source: escape_source(pattern),
            flags,
        })))
    }

    /// The canonical pattern text, as it appears between the slashes.
    pub fn source(&self) -> &str {
        &self.0.source
    }

    /// The flags, in canonical order.
    pub fn flags(&self) -> &str {
        &self.0.flags
    }

    /// The identity of this regular expression.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

impl fmt::Display for VRegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source(), self.flags())
    }
}

fn canonical_flags(flags: &str) -> Result<String, ValueError> {
    let mut seen = [false; FLAG_ORDER.len()];
    for flag in flags.chars() {
        let Some(slot) = FLAG_ORDER.find(flag) else {
            return Err(ValueError::UnknownRegExpFlag {
                flags: flags.into(),
                flag,
            });
        };
        if seen[slot] {
            return Err(ValueError::DuplicateRegExpFlag {
                flags: flags.into(),
                flag,
            });
        }
        seen[slot] = true;
    }
    if flags.contains('u') && flags.contains('v') {
        return Err(ValueError::ConflictingRegExpFlags {
            flags: flags.into(),
        });
    }
    Ok(FLAG_ORDER
        .chars()
        .zip(seen)
        .filter_map(|(flag, on)| on.then_some(flag))
        .collect())
}

/// Makes a pattern safe to print between slashes: `/` outside a character
/// class and line terminators get escaped, and the empty pattern becomes `(?:)`.
fn escape_source(pattern: &str) -> String {
    if pattern.is_empty() {
        return "(?:)".into();
    }

    let mut out = String::with_capacity(pattern.len());
    let mut in_class = false;
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push('\\');
                if let Some(next) = chars.next() {
                    push_escaped_terminator(&mut out, next, false);
                }
            }
            '/' if !in_class => out.push_str("\\/"),
            '[' => {
                in_class = true;
                out.push(c);
            }
            ']' => {
                in_class = false;
                out.push(c);
            }
            c => push_escaped_terminator(&mut out, c, true),
        }
    }
    out
}

fn push_escaped_terminator(out: &mut String, c: char, with_backslash: bool) {
    let escape = match c {
        '\n' => "n",
        '\r' => "r",
        '\u{2028}' => "u2028",
        '\u{2029}' => "u2029",
        c => {
            out.push(c);
            return;
        }
    };
    if with_backslash {
        out.push('\\');
    }
    out.push_str(escape);
}
