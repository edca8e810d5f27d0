use std::borrow::Cow;

use crate::ast::expr::Expression;
use crate::code_rep::{CodeRep, CodeRepKind};
use crate::precedence::{expression_precedence, needs_parens, Precedence};

/// Output layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
  /// Only the whitespace required to keep tokens apart.
  #[default]
  Compact,
  /// A newline after every opening brace and statement terminator.
  Pretty,
}

/// Builds [`CodeRep`] fragments. The two styles differ only in braces and statement terminators;
/// every other fragment is identical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodeRepFactory {
  style: Style,
}

impl CodeRepFactory {
  pub fn new(style: Style) -> Self {
    CodeRepFactory { style }
  }

  pub fn style(&self) -> Style {
    self.style
  }

  fn pretty(&self) -> bool {
    self.style == Style::Pretty
  }

  pub fn empty(&self) -> CodeRep {
    CodeRep::new(CodeRepKind::Empty)
  }

  pub fn token(&self, text: impl Into<Cow<'static, str>>) -> CodeRep {
    CodeRep::new(CodeRepKind::Token(text.into()))
  }

  pub fn raw_token(&self, text: impl Into<String>) -> CodeRep {
    CodeRep::new(CodeRepKind::RawToken(text.into()))
  }

  pub fn num(&self, value: f64) -> CodeRep {
    CodeRep::new(CodeRepKind::Number(value))
  }

  pub fn paren(&self, inner: CodeRep) -> CodeRep {
    CodeRep::new(CodeRepKind::Paren(Box::new(inner)))
  }

  pub fn bracket(&self, inner: CodeRep) -> CodeRep {
    CodeRep::new(CodeRepKind::Bracket(Box::new(inner)))
  }

  pub fn brace(&self, inner: CodeRep) -> CodeRep {
    CodeRep::new(CodeRepKind::Brace {
      inner: Box::new(inner),
      newline: self.pretty(),
    })
  }

  pub fn seq(&self, children: Vec<CodeRep>) -> CodeRep {
    CodeRep::new(CodeRepKind::Seq(children))
  }

  pub fn comma_sep(&self, children: Vec<CodeRep>) -> CodeRep {
    CodeRep::new(CodeRepKind::CommaSep(children))
  }

  /// `lhs=rhs`, or just `lhs` without an initializer.
  pub fn init(&self, lhs: CodeRep, rhs: Option<CodeRep>) -> CodeRep {
    match rhs {
      Some(rhs) => CodeRep::new(CodeRepKind::Init {
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
      }),
      None => lhs,
    }
  }

  pub fn no_in(&self, inner: CodeRep) -> CodeRep {
    CodeRep::new(CodeRepKind::NoIn(Box::new(inner)))
  }

  /// Wraps a fragment with a bare `in` so that it parenthesizes itself inside a `for` header.
  pub fn test_in(&self, rep: CodeRep) -> CodeRep {
    if rep.contains_in() {
      CodeRep::new(CodeRepKind::ContainsIn(Box::new(rep)))
    } else {
      rep
    }
  }

  pub fn semi(&self) -> CodeRep {
    let semi = CodeRep::new(CodeRepKind::Semi);
    if self.pretty() {
      self.seq(vec![semi, self.token("\n")])
    } else {
      semi
    }
  }

  pub fn semi_op(&self) -> CodeRep {
    let semi = CodeRep::new(CodeRepKind::SemiOp);
    if self.pretty() {
      self.seq(vec![semi, self.token("\n")])
    } else {
      semi
    }
  }

  pub fn string_literal_expression_statement(&self, inner: CodeRep) -> CodeRep {
    CodeRep::new(CodeRepKind::StringLiteralExpressionStatement {
      inner: Box::new(inner),
      in_directive_position: false,
      newline: self.pretty(),
    })
  }

  /// Parenthesizes `rep`, the fragment for `node`, if `node` binds more loosely than `min`.
  pub fn expr(&self, node: &Expression, min: Precedence, rep: CodeRep) -> CodeRep {
    self.expr_with_precedence(expression_precedence(node), min, rep)
  }

  pub fn expr_with_precedence(&self, prec: Precedence, min: Precedence, rep: CodeRep) -> CodeRep {
    if needs_parens(prec, min) {
      self.paren(rep)
    } else {
      rep
    }
  }
}
