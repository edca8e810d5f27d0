use serde::{Deserialize, Serialize};

use crate::precedence::Precedence;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum BinaryOperator {
  #[serde(rename = ",")]
  Sequence,
  #[serde(rename = "||")]
  LogicalOr,
  #[serde(rename = "&&")]
  LogicalAnd,
  #[serde(rename = "|")]
  BitwiseOr,
  #[serde(rename = "^")]
  BitwiseXor,
  #[serde(rename = "&")]
  BitwiseAnd,
  #[serde(rename = "==")]
  Equal,
  #[serde(rename = "!=")]
  NotEqual,
  #[serde(rename = "===")]
  StrictEqual,
  #[serde(rename = "!==")]
  StrictNotEqual,
  #[serde(rename = "<")]
  LessThan,
  #[serde(rename = "<=")]
  LessThanEqual,
  #[serde(rename = ">")]
  GreaterThan,
  #[serde(rename = ">=")]
  GreaterThanEqual,
  #[serde(rename = "in")]
  In,
  #[serde(rename = "instanceof")]
  Instanceof,
  #[serde(rename = "<<")]
  Left,
  #[serde(rename = ">>")]
  Right,
  #[serde(rename = ">>>")]
  UnsignedRight,
  #[serde(rename = "+")]
  Plus,
  #[serde(rename = "-")]
  Minus,
  #[serde(rename = "*")]
  Mul,
  #[serde(rename = "/")]
  Div,
  #[serde(rename = "%")]
  Rem,
  #[serde(rename = "**")]
  Exp,
}

impl BinaryOperator {
  pub fn name(self) -> &'static str {
    match self {
      BinaryOperator::Sequence => ",",
      BinaryOperator::LogicalOr => "||",
      BinaryOperator::LogicalAnd => "&&",
      BinaryOperator::BitwiseOr => "|",
      BinaryOperator::BitwiseXor => "^",
      BinaryOperator::BitwiseAnd => "&",
      BinaryOperator::Equal => "==",
      BinaryOperator::NotEqual => "!=",
      BinaryOperator::StrictEqual => "===",
      BinaryOperator::StrictNotEqual => "!==",
      BinaryOperator::LessThan => "<",
      BinaryOperator::LessThanEqual => "<=",
      BinaryOperator::GreaterThan => ">",
      BinaryOperator::GreaterThanEqual => ">=",
      BinaryOperator::In => "in",
      BinaryOperator::Instanceof => "instanceof",
      BinaryOperator::Left => "<<",
      BinaryOperator::Right => ">>",
      BinaryOperator::UnsignedRight => ">>>",
      BinaryOperator::Plus => "+",
      BinaryOperator::Minus => "-",
      BinaryOperator::Mul => "*",
      BinaryOperator::Div => "/",
      BinaryOperator::Rem => "%",
      BinaryOperator::Exp => "**",
    }
  }

  pub fn precedence(self) -> Precedence {
    match self {
      BinaryOperator::Sequence => Precedence::Sequence,
      BinaryOperator::LogicalOr => Precedence::LogicalOr,
      BinaryOperator::LogicalAnd => Precedence::LogicalAnd,
      BinaryOperator::BitwiseOr => Precedence::BitwiseOr,
      BinaryOperator::BitwiseXor => Precedence::BitwiseXor,
      BinaryOperator::BitwiseAnd => Precedence::BitwiseAnd,
      BinaryOperator::Equal
      | BinaryOperator::NotEqual
      | BinaryOperator::StrictEqual
      | BinaryOperator::StrictNotEqual => Precedence::Equality,
      BinaryOperator::LessThan
      | BinaryOperator::LessThanEqual
      | BinaryOperator::GreaterThan
      | BinaryOperator::GreaterThanEqual
      | BinaryOperator::In
      | BinaryOperator::Instanceof => Precedence::Relational,
      BinaryOperator::Left | BinaryOperator::Right | BinaryOperator::UnsignedRight => {
        Precedence::Shift
      }
      BinaryOperator::Plus | BinaryOperator::Minus => Precedence::Additive,
      BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Rem => {
        Precedence::Multiplicative
      }
      BinaryOperator::Exp => Precedence::Exponential,
    }
  }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum CompoundAssignmentOperator {
  #[serde(rename = "+=")]
  AssignPlus,
  #[serde(rename = "-=")]
  AssignMinus,
  #[serde(rename = "*=")]
  AssignMul,
  #[serde(rename = "/=")]
  AssignDiv,
  #[serde(rename = "%=")]
  AssignRem,
  #[serde(rename = "**=")]
  AssignExp,
  #[serde(rename = "<<=")]
  AssignLeftShift,
  #[serde(rename = ">>=")]
  AssignRightShift,
  #[serde(rename = ">>>=")]
  AssignUnsignedRightShift,
  #[serde(rename = "|=")]
  AssignBitOr,
  #[serde(rename = "^=")]
  AssignBitXor,
  #[serde(rename = "&=")]
  AssignBitAnd,
}

impl CompoundAssignmentOperator {
  pub fn name(self) -> &'static str {
    match self {
      CompoundAssignmentOperator::AssignPlus => "+=",
      CompoundAssignmentOperator::AssignMinus => "-=",
      CompoundAssignmentOperator::AssignMul => "*=",
      CompoundAssignmentOperator::AssignDiv => "/=",
      CompoundAssignmentOperator::AssignRem => "%=",
      CompoundAssignmentOperator::AssignExp => "**=",
      CompoundAssignmentOperator::AssignLeftShift => "<<=",
      CompoundAssignmentOperator::AssignRightShift => ">>=",
      CompoundAssignmentOperator::AssignUnsignedRightShift => ">>>=",
      CompoundAssignmentOperator::AssignBitOr => "|=",
      CompoundAssignmentOperator::AssignBitXor => "^=",
      CompoundAssignmentOperator::AssignBitAnd => "&=",
    }
  }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum UnaryOperator {
  #[serde(rename = "+")]
  Plus,
  #[serde(rename = "-")]
  Minus,
  #[serde(rename = "!")]
  LogicalNot,
  #[serde(rename = "~")]
  BitNot,
  #[serde(rename = "typeof")]
  Typeof,
  #[serde(rename = "void")]
  Void,
  #[serde(rename = "delete")]
  Delete,
}

impl UnaryOperator {
  pub fn name(self) -> &'static str {
    match self {
      UnaryOperator::Plus => "+",
      UnaryOperator::Minus => "-",
      UnaryOperator::LogicalNot => "!",
      UnaryOperator::BitNot => "~",
      UnaryOperator::Typeof => "typeof",
      UnaryOperator::Void => "void",
      UnaryOperator::Delete => "delete",
    }
  }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum UpdateOperator {
  #[serde(rename = "++")]
  Increment,
  #[serde(rename = "--")]
  Decrement,
}

impl UpdateOperator {
  pub fn name(self) -> &'static str {
    match self {
      UpdateOperator::Increment => "++",
      UpdateOperator::Decrement => "--",
    }
  }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableDeclarationKind {
  Var,
  Let,
  Const,
}

impl VariableDeclarationKind {
  pub fn name(self) -> &'static str {
    match self {
      VariableDeclarationKind::Var => "var",
      VariableDeclarationKind::Let => "let",
      VariableDeclarationKind::Const => "const",
    }
  }
}
