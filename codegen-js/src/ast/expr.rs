use derive_more::derive::From;
use serde::{Deserialize, Serialize};

use super::class_or_object::{ClassElement, ObjectProperty};
use super::func::{ArrowBody, FormalParameters, FunctionBody};
use super::pat::{AssignmentTarget, BindingIdentifier, SimpleAssignmentTarget};
use crate::operator::{BinaryOperator, CompoundAssignmentOperator, UnaryOperator, UpdateOperator};

// Payload-free kinds are empty braced structs so the internal tag can be matched against a map.
#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
  ArrayExpression(ArrayExpression),
  ArrowExpression(ArrowExpression),
  AssignmentExpression(AssignmentExpression),
  AwaitExpression(AwaitExpression),
  BinaryExpression(BinaryExpression),
  CallExpression(CallExpression),
  ClassExpression(ClassExpression),
  CompoundAssignmentExpression(CompoundAssignmentExpression),
  ComputedMemberExpression(ComputedMemberExpression),
  ConditionalExpression(ConditionalExpression),
  FunctionExpression(FunctionExpression),
  IdentifierExpression(IdentifierExpression),
  LiteralBooleanExpression(LiteralBooleanExpression),
  LiteralInfinityExpression(LiteralInfinityExpression),
  LiteralNullExpression(LiteralNullExpression),
  LiteralNumericExpression(LiteralNumericExpression),
  LiteralRegExpExpression(LiteralRegExpExpression),
  LiteralStringExpression(LiteralStringExpression),
  NewExpression(NewExpression),
  NewTargetExpression(NewTargetExpression),
  ObjectExpression(ObjectExpression),
  StaticMemberExpression(StaticMemberExpression),
  TemplateExpression(TemplateExpression),
  ThisExpression(ThisExpression),
  UnaryExpression(UnaryExpression),
  UpdateExpression(UpdateExpression),
  YieldExpression(YieldExpression),
  YieldGeneratorExpression(YieldGeneratorExpression),
}

impl Expression {
  /// Returns the identifier name if this is a bare identifier reference.
  pub fn as_identifier_name(&self) -> Option<&str> {
    match self {
      Expression::IdentifierExpression(id) => Some(&id.name),
      _ => None,
    }
  }
}

/// The object of a member access or the callee of a call, which may be `super`.
#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExpressionOrSuper {
  Expression(Expression),
  Super(Super),
}

/// An argument or array element, which may be spread.
#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SpreadOrExpression {
  Expression(Expression),
  SpreadElement(SpreadElement),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Super {}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SpreadElement {
  pub expression: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ArrayExpression {
  pub elements: Vec<Option<SpreadOrExpression>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowExpression {
  pub is_async: bool,
  pub params: FormalParameters,
  pub body: ArrowBody,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AssignmentExpression {
  pub binding: AssignmentTarget,
  pub expression: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AwaitExpression {
  pub expression: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BinaryExpression {
  pub left: Box<Expression>,
  pub operator: BinaryOperator,
  pub right: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallExpression {
  pub callee: Box<ExpressionOrSuper>,
  pub arguments: Vec<SpreadOrExpression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ClassExpression {
  pub name: Option<BindingIdentifier>,
  #[serde(rename = "super")]
  pub super_class: Option<Box<Expression>>,
  pub elements: Vec<ClassElement>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CompoundAssignmentExpression {
  pub binding: SimpleAssignmentTarget,
  pub operator: CompoundAssignmentOperator,
  pub expression: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ComputedMemberExpression {
  pub object: Box<ExpressionOrSuper>,
  pub expression: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConditionalExpression {
  pub test: Box<Expression>,
  pub consequent: Box<Expression>,
  pub alternate: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionExpression {
  pub is_async: bool,
  pub is_generator: bool,
  pub name: Option<BindingIdentifier>,
  pub params: FormalParameters,
  pub body: FunctionBody,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct IdentifierExpression {
  pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LiteralBooleanExpression {
  pub value: bool,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct LiteralInfinityExpression {}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct LiteralNullExpression {}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LiteralNumericExpression {
  pub value: f64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralRegExpExpression {
  pub pattern: String,
  pub global: bool,
  pub ignore_case: bool,
  pub multi_line: bool,
  pub sticky: bool,
  pub unicode: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LiteralStringExpression {
  pub value: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NewExpression {
  pub callee: Box<Expression>,
  pub arguments: Vec<SpreadOrExpression>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct NewTargetExpression {}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ObjectExpression {
  pub properties: Vec<ObjectProperty>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StaticMemberExpression {
  pub object: Box<ExpressionOrSuper>,
  pub property: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TemplateExpression {
  pub tag: Option<Box<Expression>>,
  pub elements: Vec<TemplatePart>,
}

/// Template parts alternate between raw text and substitutions, starting and ending with text.
#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TemplatePart {
  Expression(Expression),
  TemplateElement(TemplateElement),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateElement {
  pub raw_value: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ThisExpression {}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UnaryExpression {
  pub operator: UnaryOperator,
  pub operand: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpression {
  pub is_prefix: bool,
  pub operator: UpdateOperator,
  pub operand: SimpleAssignmentTarget,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct YieldExpression {
  pub expression: Option<Box<Expression>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct YieldGeneratorExpression {
  pub expression: Box<Expression>,
}
