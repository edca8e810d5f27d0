//! Escaping for output that will be embedded in an HTML `<script>` element.
//!
//! Such output must not contain NUL, must survive being read in an unknown charset (so it is kept
//! to ASCII), and must never contain `<script` or `</script` followed by a tag terminator.

use std::borrow::Cow;
use std::fmt::Write;

use aho_corasick::AhoCorasick;
use memchr::memchr2;
use once_cell::sync::Lazy;

use crate::ast::expr::LiteralRegExpExpression;
use crate::codegen::{regexp_flags, Escaper};
use crate::error::CodegenError;
use crate::escape::{directive_delimiter, escape_string_literal};

static SCRIPT_TAG: Lazy<AhoCorasick> =
  Lazy::new(|| AhoCorasick::new(["<script", "</script"]).expect("script tag patterns are valid"));

fn is_tag_terminator(b: u8) -> bool {
  matches!(b, b'\t' | b'\r' | b'\x0C' | b' ' | b'/' | b'>')
}

/// Rewrites `text` so it is ASCII, NUL-free, and contains no script tag. Every rewrite is an escape
/// sequence with the same meaning inside string literals, identifiers and template literals.
pub fn safe(text: &str) -> Cow<'_, str> {
  rewrite(text, false)
}

/// Like [`safe`], for source text whose backslash escapes are live, such as a directive or a
/// template segment. A character escaped by a preceding backslash is rewritten together with that
/// backslash, so `\φ` becomes `\u03C6` rather than `\\u03C6`. An escaped U+2028 or U+2029 is a
/// line continuation and is dropped along with its backslash.
pub fn safe_raw(raw: &str) -> Cow<'_, str> {
  rewrite(raw, true)
}

fn rewrite(text: &str, live_escapes: bool) -> Cow<'_, str> {
  if text.is_ascii() && memchr2(b'\0', b'<', text.as_bytes()).is_none() {
    return Cow::Borrowed(text);
  }

  let mut escaped = String::with_capacity(text.len() + 8);
  let mut odd_backslashes = false;
  for ch in text.chars() {
    if ch == '\\' {
      odd_backslashes = !odd_backslashes;
      escaped.push(ch);
      continue;
    }
    let consumes_backslash = live_escapes && odd_backslashes && (ch == '\0' || !ch.is_ascii());
    odd_backslashes = false;
    if consumes_backslash {
      escaped.pop();
      if matches!(ch, '\u{2028}' | '\u{2029}') {
        continue;
      }
    }
    match ch {
      '\0' => escaped.push_str("\\x00"),
      ch if ch.is_ascii() => escaped.push(ch),
      ch => {
        let mut units = [0u16; 2];
        for unit in ch.encode_utf16(&mut units) {
          // Writing to a String cannot fail.
          let _ = write!(escaped, "\\u{:04X}", unit);
        }
      }
    }
  }

  let bytes = escaped.as_bytes();
  let mut out = String::with_capacity(escaped.len());
  let mut copied = 0;
  for m in SCRIPT_TAG.find_iter(bytes) {
    if !bytes.get(m.end()).copied().is_some_and(is_tag_terminator) {
      continue;
    }
    // Everything up to and including the `<` or `</`, then the escaped `s`.
    let s_at = m.end() - "script".len();
    out.push_str(&escaped[copied..s_at]);
    out.push_str("\\x73");
    copied = s_at + 1;
  }
  out.push_str(&escaped[copied..]);
  Cow::Owned(out)
}

/// Lexeme escaping for web-safe output.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebSafe;

impl Escaper for WebSafe {
  type Error = CodegenError;

  fn identifier<'a>(&self, name: &'a str) -> Cow<'a, str> {
    safe(name)
  }

  fn string_literal(&self, value: &str) -> String {
    safe(&escape_string_literal(value)).into_owned()
  }

  fn directive(&self, raw: &str) -> String {
    let delim = directive_delimiter(raw);
    format!("{delim}{}{delim}", safe_raw(raw))
  }

  fn regexp(&self, node: &LiteralRegExpExpression) -> Result<String, CodegenError> {
    // The closing `/` takes part in the check so a trailing `<` cannot form `</script`.
    let body = format!("{}/", node.pattern);
    if safe(&body) != body.as_str() {
      tracing::debug!(pattern = %node.pattern, "refusing regular expression");
      return Err(CodegenError::UnsafeRegExp {
        pattern: node.pattern.clone(),
      });
    }
    Ok(format!("/{body}{}", regexp_flags(node)))
  }

  fn template_text<'a>(&self, raw: &'a str, tagged: bool) -> Result<Cow<'a, str>, CodegenError> {
    let text = safe_raw(raw);
    if tagged && text != raw {
      tracing::debug!(raw, "refusing tagged template");
      return Err(CodegenError::UnsafeTaggedTemplate {
        raw: raw.to_string(),
      });
    }
    Ok(text)
  }
}
