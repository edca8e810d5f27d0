//! Stateful serializer that turns a sequence of lexemes into source text.
//!
//! Callers hand over one token at a time; the stream inserts the minimal whitespace needed so the
//! concatenation lexes back into the same tokens (`a+ +b`, `typeof a`, `/a/ in b`), decides owed
//! semicolons lazily (none is printed before `}`), and keeps a numeric literal followed by `.`
//! from being read as a decimal point (`1..toString`).

use crate::char::is_identifier_part;
use crate::location::{LocationTracker, Locations, NodeId, NodeRole};
use crate::num::short_d2a;

#[derive(Debug, Clone, Default)]
pub struct TokenStream {
  out: String,
  web_safe: bool,
  state: State,
  locations: Option<Box<LocationTracker>>,
}

#[derive(Debug, Clone, Default)]
struct State {
  // Last character of the last token written through `put`; raw text does not update it.
  last_char: Option<char>,
  // Text of the numeric literal written immediately before, if any.
  last_number: Option<String>,
  optional_semi: bool,
}

impl TokenStream {
  pub fn new() -> Self {
    TokenStream::default()
  }

  /// A stream for output embedded in an HTML `<script>` element: additionally keeps `<` from
  /// joining a following `script` or `/script` token, and keeps `\u` escapes produced for
  /// identifiers from joining a preceding identifier.
  pub fn web_safe() -> Self {
    TokenStream {
      web_safe: true,
      ..TokenStream::default()
    }
  }

  /// Also records where located fragments start and finish; see [`TokenStream::finish_with_locations`].
  pub fn with_locations(mut self) -> Self {
    self.locations = Some(Box::default());
    self
  }

  pub fn is_web_safe(&self) -> bool {
    self.web_safe
  }

  /// Returns the text written so far.
  pub fn as_str(&self) -> &str {
    &self.out
  }

  /// Consumes the stream, returning the output. A semicolon still owed at the end is dropped.
  pub fn finish(self) -> String {
    self.out
  }

  /// Like [`TokenStream::finish`], also returning the recorded locations, which are empty unless
  /// the stream was created [`with_locations`](TokenStream::with_locations).
  pub fn finish_with_locations(self) -> (String, Locations) {
    let locations = self
      .locations
      .map(|tracker| tracker.into_locations())
      .unwrap_or_default();
    (self.out, locations)
  }

  pub(crate) fn start_node(&mut self, node: NodeId, role: NodeRole) {
    let offset = self.out.len();
    if let Some(tracker) = &mut self.locations {
      tracker.start_node(node, role, offset);
    }
  }

  pub(crate) fn finish_node(&mut self, node: NodeId, role: NodeRole) {
    let offset = self.out.len();
    if let Some(tracker) = &mut self.locations {
      tracker.finish_node(node, role, offset);
    }
  }

  pub fn put(&mut self, token: &str) {
    let Some(first) = token.chars().next() else {
      return;
    };
    if self.state.optional_semi {
      self.state.optional_semi = false;
      if token != "}" {
        if let Some(tracker) = &mut self.locations {
          tracker.semicolon_inserted();
        }
        self.out.push(';');
        self.state.last_char = Some(';');
        self.state.last_number = None;
      }
    }
    if let Some(tracker) = &mut self.locations {
      tracker.statements_closed();
    }
    if let Some(number) = self.state.last_number.take() {
      if token == "." {
        let double_dot = number_needs_double_dot(&number);
        if double_dot {
          if let Some(tracker) = &mut self.locations {
            tracker.number_extended();
          }
        }
        self.out.push_str(if double_dot { ".." } else { "." });
        self.state.last_char = Some('.');
        return;
      }
    }
    if let Some(tracker) = &mut self.locations {
      tracker.number_closed();
    }
    if let Some(last) = self.state.last_char {
      if self.needs_space(last, first, token) {
        self.out.push(' ');
      }
    }
    if token == "--" && self.out.ends_with("<!") {
      self.out.push(' ');
    }
    self.write(token);
    self.state.last_char = token.chars().next_back();
  }

  fn write(&mut self, text: &str) {
    let offset = self.out.len();
    if let Some(tracker) = &mut self.locations {
      tracker.text_written(offset, text);
    }
    self.out.push_str(text);
  }

  pub fn put_number(&mut self, value: f64) {
    let text = short_d2a(value);
    self.put(&text);
    self.state.last_number = Some(text);
  }

  /// Records that a statement terminator is owed; the next `put` decides whether to print it.
  pub fn put_optional_semi(&mut self) {
    self.state.optional_semi = true;
  }

  /// Appends text verbatim, without spacing or semicolon handling.
  pub fn put_raw(&mut self, text: &str) {
    self.write(text);
  }

  fn needs_space(&self, last: char, first: char, token: &str) -> bool {
    if (last == '+' || last == '-') && last == first {
      return true;
    }
    if is_identifier_part(last) && (is_identifier_part(first) || (self.web_safe && first == '\\')) {
      return true;
    }
    if last == '/' && (first == 'i' || first == '/') {
      return true;
    }
    self.web_safe && last == '<' && (token.starts_with("script") || token.starts_with("/script"))
  }
}

fn number_needs_double_dot(number: &str) -> bool {
  !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn render(tokens: &[&str]) -> String {
    let mut ts = TokenStream::new();
    for token in tokens {
      ts.put(token);
    }
    ts.finish()
  }

  #[test]
  fn separates_words() {
    assert_eq!(render(&["typeof", "a"]), "typeof a");
    assert_eq!(render(&["typeof", "-", "a"]), "typeof-a");
    assert_eq!(render(&["a", "in", "b"]), "a in b");
  }

  #[test]
  fn separates_repeated_plus_and_minus() {
    assert_eq!(render(&["a", "+", "+", "a"]), "a+ +a");
    assert_eq!(render(&["+", "++", "a"]), "+ ++a");
    assert_eq!(render(&["a", "-", "--", "a"]), "a- --a");
    assert_eq!(render(&["a", "+", "-", "a"]), "a+-a");
  }

  #[test]
  fn separates_slash_from_regex_and_in() {
    assert_eq!(render(&["3", "/", "/a/g"]), "3/ /a/g");
    assert_eq!(render(&["/a/", "instanceof", "b"]), "/a/ instanceof b");
  }

  #[test]
  fn owed_semicolon_is_dropped_before_brace_and_at_end() {
    let mut ts = TokenStream::new();
    ts.put("{");
    ts.put("a");
    ts.put_optional_semi();
    ts.put("}");
    ts.put("b");
    ts.put_optional_semi();
    assert_eq!(ts.finish(), "{a}b");
  }

  #[test]
  fn owed_semicolon_is_printed_before_other_tokens() {
    let mut ts = TokenStream::new();
    ts.put("a");
    ts.put_optional_semi();
    ts.put("b");
    assert_eq!(ts.finish(), "a;b");
  }

  #[test]
  fn member_access_on_integer_uses_double_dot() {
    let mut ts = TokenStream::new();
    ts.put_number(1.0);
    ts.put(".");
    ts.put("a");
    assert_eq!(ts.finish(), "1..a");

    let mut ts = TokenStream::new();
    ts.put_number(1.5);
    ts.put(".");
    ts.put("a");
    assert_eq!(ts.finish(), "1.5.a");

    let mut ts = TokenStream::new();
    ts.put_number(1e300);
    ts.put(".");
    ts.put("a");
    assert_eq!(ts.finish(), "1e300.a");
  }

  #[test]
  fn breaks_html_comment_open() {
    assert_eq!(render(&["a", "<", "!", "--", "b"]), "a<! --b");
  }

  #[test]
  fn raw_text_does_not_affect_spacing() {
    let mut ts = TokenStream::new();
    ts.put("`");
    ts.put_raw("abc");
    ts.put("${");
    ts.put("a");
    ts.put("}");
    ts.put_raw("");
    ts.put("`");
    assert_eq!(ts.finish(), "`abc${a}`");
  }

  #[test]
  fn web_safe_separates_script_after_less_than() {
    let mut ts = TokenStream::web_safe();
    ts.put("a");
    ts.put("<");
    ts.put("script");
    assert_eq!(ts.finish(), "a< script");

    let mut ts = TokenStream::web_safe();
    ts.put("a");
    ts.put("<");
    ts.put("/script/");
    assert_eq!(ts.finish(), "a< /script/");

    assert_eq!(render(&["a", "<", "script"]), "a<script");
  }

  #[test]
  fn web_safe_separates_escaped_identifiers() {
    let mut ts = TokenStream::web_safe();
    ts.put("let");
    ts.put("\\u03C6");
    assert_eq!(ts.finish(), "let \\u03C6");
  }
}
