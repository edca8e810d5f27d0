use crate::ast::expr::{Expression, ExpressionOrSuper};

/// Binding strength of an expression form, lowest first.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Precedence {
  Sequence,
  Yield,
  Assignment,
  Conditional,
  ArrowFunction,
  LogicalOr,
  LogicalAnd,
  BitwiseOr,
  BitwiseXor,
  BitwiseAnd,
  Equality,
  Relational,
  Shift,
  Additive,
  Multiplicative,
  Exponential,
  Prefix,
  Postfix,
  New,
  Call,
  Member,
  Primary,
}

pub fn needs_parens(child_prec: Precedence, min_prec: Precedence) -> bool {
  child_prec < min_prec
}

pub fn expression_precedence(expr: &Expression) -> Precedence {
  match expr {
    Expression::ArrayExpression(_)
    | Expression::ClassExpression(_)
    | Expression::FunctionExpression(_)
    | Expression::IdentifierExpression(_)
    | Expression::LiteralBooleanExpression(_)
    | Expression::LiteralInfinityExpression(_)
    | Expression::LiteralNullExpression(_)
    | Expression::LiteralNumericExpression(_)
    | Expression::LiteralRegExpExpression(_)
    | Expression::LiteralStringExpression(_)
    | Expression::ObjectExpression(_)
    | Expression::ThisExpression(_) => Precedence::Primary,
    Expression::ArrowExpression(_)
    | Expression::AssignmentExpression(_)
    | Expression::CompoundAssignmentExpression(_)
    | Expression::YieldExpression(_)
    | Expression::YieldGeneratorExpression(_) => Precedence::Assignment,
    Expression::AwaitExpression(_) | Expression::UnaryExpression(_) => Precedence::Prefix,
    Expression::UpdateExpression(update) => {
      if update.is_prefix {
        Precedence::Prefix
      } else {
        Precedence::Postfix
      }
    }
    Expression::BinaryExpression(binary) => binary.operator.precedence(),
    Expression::CallExpression(_) => Precedence::Call,
    Expression::ConditionalExpression(_) => Precedence::Conditional,
    Expression::ComputedMemberExpression(member) => member_precedence(&member.object),
    Expression::StaticMemberExpression(member) => member_precedence(&member.object),
    Expression::NewExpression(new) => new_precedence(new.arguments.is_empty()),
    Expression::NewTargetExpression(_) => Precedence::Member,
    Expression::TemplateExpression(template) => template_precedence(template.tag.as_deref()),
  }
}

/// `new a` without an argument list binds looser than `new a()`.
pub fn new_precedence(no_arguments: bool) -> Precedence {
  if no_arguments {
    Precedence::New
  } else {
    Precedence::Member
  }
}

pub fn template_precedence(tag: Option<&Expression>) -> Precedence {
  match tag {
    Some(tag) if expression_precedence(tag) == Precedence::Call => Precedence::Call,
    _ => Precedence::Member,
  }
}

/// A member access on a call result stays at call precedence so `a().b` can be a `new` callee only
/// in parens.
pub fn member_precedence(object: &ExpressionOrSuper) -> Precedence {
  match object {
    ExpressionOrSuper::Expression(expr) if expression_precedence(expr) == Precedence::Call => {
      Precedence::Call
    }
    _ => Precedence::Member,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ordering_matches_binding_strength() {
    assert!(Precedence::Sequence < Precedence::Assignment);
    assert!(Precedence::Additive < Precedence::Multiplicative);
    assert!(Precedence::New < Precedence::Call);
    assert!(Precedence::Call < Precedence::Member);
    assert!(needs_parens(Precedence::Assignment, Precedence::Conditional));
    assert!(!needs_parens(Precedence::Primary, Precedence::Member));
  }
}
