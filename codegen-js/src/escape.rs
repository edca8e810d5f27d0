/// Quotes and escapes a string value as a JavaScript string literal. The delimiter is `'` when
/// the value contains more double quotes than single quotes, otherwise `"`. Only characters that
/// would terminate the literal or change its meaning are escaped; NUL and non-ASCII characters are
/// copied as-is, except the line separators U+2028/U+2029.
pub fn escape_string_literal(value: &str) -> String {
  let mut doubles = 0usize;
  let mut singles = 0usize;
  for ch in value.chars() {
    match ch {
      '"' => doubles += 1,
      '\'' => singles += 1,
      _ => {}
    }
  }
  let delim = if doubles > singles { '\'' } else { '"' };
  let mut out = String::with_capacity(value.len() + 2);
  emit_string_literal(&mut out, value, delim);
  out
}

pub fn emit_string_literal(out: &mut String, value: &str, delim: char) {
  out.push(delim);
  for ch in value.chars() {
    match ch {
      c if c == delim => {
        out.push('\\');
        out.push(delim);
      }
      '\u{0008}' => out.push_str("\\b"),
      '\t' => out.push_str("\\t"),
      '\n' => out.push_str("\\n"),
      '\u{000B}' => out.push_str("\\v"),
      '\u{000C}' => out.push_str("\\f"),
      '\r' => out.push_str("\\r"),
      '\\' => out.push_str("\\\\"),
      '\u{2028}' => out.push_str("\\u2028"),
      '\u{2029}' => out.push_str("\\u2029"),
      ch => out.push(ch),
    }
  }
  out.push(delim);
}

/// Picks the quote for a directive's raw text. Directives are printed verbatim, so `"` is only
/// usable when every `"` in the raw text is part of an escape sequence.
pub fn directive_delimiter(raw: &str) -> char {
  let mut chars = raw.chars();
  while let Some(ch) = chars.next() {
    match ch {
      '\\' => {
        chars.next();
      }
      '"' => return '\'',
      _ => {}
    }
  }
  '"'
}
