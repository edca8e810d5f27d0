use std::error::Error;
use std::fmt;

/// Reasons web-safe generation can refuse a tree. Plain generation never fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodegenError {
  /// A regular expression pattern contains text that cannot be escaped without changing its
  /// meaning (NUL, non-ASCII, or a `<script` sequence).
  UnsafeRegExp { pattern: String },
  /// A tagged template's raw text would need escaping, which the tag function would observe.
  UnsafeTaggedTemplate { raw: String },
}

impl fmt::Display for CodegenError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CodegenError::UnsafeRegExp { pattern } => {
        write!(f, "regular expression /{pattern}/ cannot be made web-safe")
      }
      CodegenError::UnsafeTaggedTemplate { raw } => {
        write!(f, "tagged template text {raw:?} cannot be made web-safe")
      }
    }
  }
}

impl Error for CodegenError {}

pub type CodegenResult<T> = Result<T, CodegenError>;
