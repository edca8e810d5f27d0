//! Intermediate representation produced by the generator.
//!
//! Each AST node reduces to one [`CodeRep`]: a tree of output fragments plus a handful of flags
//! describing how the fragment begins and ends. Parents consult the flags of their children to
//! decide where parentheses or braces are required, so no second walk over the AST is needed.

use std::borrow::Cow;

use crate::location::{NodeId, NodeRole};
use crate::token_stream::TokenStream;

/// Contextual facts about a fragment that its parents may need to react to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
  /// Contains a top-level `in` operator that is not already parenthesized.
  pub contains_in: bool,
  /// The outermost operator is the comma operator.
  pub contains_group: bool,
  pub starts_with_object_curly: bool,
  pub starts_with_function_or_class: bool,
  pub starts_with_let: bool,
  pub starts_with_let_square_bracket: bool,
  /// Ends with an `if` that has no `else`.
  pub ends_with_missing_else: bool,
}

impl Flags {
  pub fn with_contains_in(mut self, value: bool) -> Self {
    self.contains_in = value;
    self
  }

  pub fn with_contains_group(mut self, value: bool) -> Self {
    self.contains_group = value;
    self
  }

  pub fn with_starts_with_object_curly(mut self, value: bool) -> Self {
    self.starts_with_object_curly = value;
    self
  }

  pub fn with_starts_with_function_or_class(mut self, value: bool) -> Self {
    self.starts_with_function_or_class = value;
    self
  }

  pub fn with_starts_with_let(mut self, value: bool) -> Self {
    self.starts_with_let = value;
    self
  }

  pub fn with_starts_with_let_square_bracket(mut self, value: bool) -> Self {
    self.starts_with_let_square_bracket = value;
    self
  }

  pub fn with_ends_with_missing_else(mut self, value: bool) -> Self {
    self.ends_with_missing_else = value;
    self
  }

  /// The flags describing how a fragment begins, taken from `first`, which must be the leftmost
  /// part of the fragment being built.
  pub fn leading(first: Flags) -> Self {
    Flags {
      starts_with_object_curly: first.starts_with_object_curly,
      starts_with_function_or_class: first.starts_with_function_or_class,
      starts_with_let: first.starts_with_let,
      starts_with_let_square_bracket: first.starts_with_let_square_bracket,
      ..Flags::default()
    }
  }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CodeRepKind {
  Empty,
  Token(Cow<'static, str>),
  /// Text written verbatim, bypassing spacing rules; used for template contents.
  RawToken(String),
  Number(f64),
  Paren(Box<CodeRep>),
  Bracket(Box<CodeRep>),
  Brace {
    inner: Box<CodeRep>,
    newline: bool,
  },
  Seq(Vec<CodeRep>),
  CommaSep(Vec<CodeRep>),
  /// `lhs=rhs`, where `rhs` inherits the surrounding `in` restriction.
  Init {
    lhs: Box<CodeRep>,
    rhs: Box<CodeRep>,
  },
  /// Forbids a bare `in` anywhere inside; used for `for` headers.
  NoIn(Box<CodeRep>),
  /// Parenthesizes itself when emitted under a `NoIn` restriction.
  ContainsIn(Box<CodeRep>),
  Semi,
  /// A statement terminator that the token stream may omit.
  SemiOp,
  StringLiteralExpressionStatement {
    inner: Box<CodeRep>,
    in_directive_position: bool,
    newline: bool,
  },
  /// The complete output of one node, reported to location tracking when emitted.
  Located {
    inner: Box<CodeRep>,
    node: NodeId,
    role: NodeRole,
  },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CodeRep {
  kind: CodeRepKind,
  flags: Flags,
}

impl CodeRep {
  pub fn new(kind: CodeRepKind) -> Self {
    CodeRep {
      kind,
      flags: Flags::default(),
    }
  }

  pub fn with_flags(mut self, flags: Flags) -> Self {
    self.flags = flags;
    self
  }

  pub fn kind(&self) -> &CodeRepKind {
    &self.kind
  }

  pub fn flags(&self) -> Flags {
    self.flags
  }

  pub fn contains_in(&self) -> bool {
    self.flags.contains_in
  }

  pub fn contains_group(&self) -> bool {
    self.flags.contains_group
  }

  pub fn starts_with_object_curly(&self) -> bool {
    self.flags.starts_with_object_curly
  }

  pub fn starts_with_function_or_class(&self) -> bool {
    self.flags.starts_with_function_or_class
  }

  pub fn starts_with_let(&self) -> bool {
    self.flags.starts_with_let
  }

  pub fn starts_with_let_square_bracket(&self) -> bool {
    self.flags.starts_with_let_square_bracket
  }

  pub fn ends_with_missing_else(&self) -> bool {
    self.flags.ends_with_missing_else
  }

  /// Informs the fragment that it is the first statement of a body or program, where a bare
  /// string literal statement would be read as a directive.
  pub fn in_directive_position(mut self) -> CodeRep {
    match &mut self.kind {
      CodeRepKind::StringLiteralExpressionStatement {
        in_directive_position,
        ..
      } => *in_directive_position = true,
      CodeRepKind::Located { inner, .. } => {
        let statement = std::mem::replace(inner.as_mut(), CodeRep::new(CodeRepKind::Empty));
        **inner = statement.in_directive_position();
      }
      _ => {}
    }
    self
  }

  /// Attributes this fragment to `node`, keeping its flags.
  pub(crate) fn located(self, node: NodeId, role: NodeRole) -> CodeRep {
    let flags = self.flags;
    CodeRep {
      kind: CodeRepKind::Located {
        inner: Box::new(self),
        node,
        role,
      },
      flags,
    }
  }

  /// Rewrites part `index` of a sequence. Anything else is returned unchanged.
  pub(crate) fn map_seq_part(mut self, index: usize, f: impl FnOnce(CodeRep) -> CodeRep) -> CodeRep {
    if let CodeRepKind::Seq(children) = &mut self.kind {
      if let Some(child) = children.get_mut(index) {
        let part = std::mem::replace(child, CodeRep::new(CodeRepKind::Empty));
        *child = f(part);
      }
    }
    self
  }

  pub fn emit(&self, ts: &mut TokenStream, no_in: bool) {
    match &self.kind {
      CodeRepKind::Empty => {}
      CodeRepKind::Token(token) => ts.put(token),
      CodeRepKind::RawToken(text) => ts.put_raw(text),
      CodeRepKind::Number(value) => ts.put_number(*value),
      CodeRepKind::Paren(inner) => {
        ts.put("(");
        inner.emit(ts, false);
        ts.put(")");
      }
      CodeRepKind::Bracket(inner) => {
        ts.put("[");
        inner.emit(ts, false);
        ts.put("]");
      }
      CodeRepKind::Brace { inner, newline } => {
        ts.put("{");
        if *newline {
          ts.put("\n");
        }
        inner.emit(ts, false);
        ts.put("}");
      }
      CodeRepKind::Seq(children) => {
        for child in children {
          child.emit(ts, no_in);
        }
      }
      CodeRepKind::CommaSep(children) => {
        for (i, child) in children.iter().enumerate() {
          if i > 0 {
            ts.put(",");
          }
          child.emit(ts, no_in);
        }
      }
      CodeRepKind::Init { lhs, rhs } => {
        lhs.emit(ts, false);
        ts.put("=");
        rhs.emit(ts, no_in);
      }
      CodeRepKind::NoIn(inner) => inner.emit(ts, true),
      CodeRepKind::ContainsIn(inner) => {
        if no_in {
          ts.put("(");
          inner.emit(ts, false);
          ts.put(")");
        } else {
          inner.emit(ts, false);
        }
      }
      CodeRepKind::Semi => ts.put(";"),
      CodeRepKind::SemiOp => ts.put_optional_semi(),
      CodeRepKind::StringLiteralExpressionStatement {
        inner,
        in_directive_position,
        newline,
      } => {
        if *in_directive_position {
          ts.put("(");
          inner.emit(ts, no_in);
          ts.put(")");
        } else {
          inner.emit(ts, no_in);
        }
        ts.put_optional_semi();
        if *newline {
          ts.put("\n");
        }
      }
      CodeRepKind::Located { inner, node, role } => {
        ts.start_node(*node, *role);
        inner.emit(ts, no_in);
        ts.finish_node(*node, *role);
      }
    }
  }

  /// Emits into a fresh plain token stream and returns the text.
  pub fn to_source(&self) -> String {
    let mut ts = TokenStream::new();
    self.emit(&mut ts, false);
    ts.finish()
  }
}
