const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';

pub fn is_identifier_start(c: char) -> bool {
  if c.is_ascii() {
    return c.is_ascii_alphabetic() || c == '$' || c == '_';
  }
  c.is_alphabetic()
}

pub fn is_identifier_part(c: char) -> bool {
  if c.is_ascii() {
    return c.is_ascii_alphanumeric() || c == '$' || c == '_';
  }
  c.is_alphanumeric()
    || c == ZWNJ
    || c == ZWJ
    || matches!(c, '\u{0300}'..='\u{036F}' | '\u{203F}' | '\u{2040}')
}

/// Whether `name` can be written as a bare IdentifierName (reserved words included).
pub fn is_identifier_name(name: &str) -> bool {
  let mut chars = name.chars();
  let Some(first) = chars.next() else {
    return false;
  };
  is_identifier_start(first) && chars.all(is_identifier_part)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identifier_names() {
    assert!(is_identifier_name("a"));
    assert!(is_identifier_name("$_0"));
    assert!(is_identifier_name("class"));
    assert!(is_identifier_name("φ"));
    assert!(!is_identifier_name(""));
    assert!(!is_identifier_name("0a"));
    assert!(!is_identifier_name("a-b"));
    assert!(!is_identifier_name("a b"));
  }

  #[test]
  fn identifier_parts() {
    assert!(is_identifier_part('9'));
    assert!(is_identifier_part('\u{200C}'));
    assert!(!is_identifier_part('\\'));
    assert!(!is_identifier_part('+'));
  }
}
