use derive_more::derive::From;
use serde::{Deserialize, Serialize};

use super::class_or_object::ClassElement;
use super::expr::Expression;
use super::func::{FormalParameters, FunctionBody};
use super::pat::{AssignmentTarget, Binding, BindingIdentifier};
use crate::operator::VariableDeclarationKind;

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
  BlockStatement(BlockStatement),
  BreakStatement(BreakStatement),
  ClassDeclaration(ClassDeclaration),
  ContinueStatement(ContinueStatement),
  DebuggerStatement(DebuggerStatement),
  DoWhileStatement(DoWhileStatement),
  EmptyStatement(EmptyStatement),
  ExpressionStatement(ExpressionStatement),
  ForInStatement(ForInStatement),
  ForOfStatement(ForOfStatement),
  ForStatement(ForStatement),
  FunctionDeclaration(FunctionDeclaration),
  IfStatement(IfStatement),
  LabeledStatement(LabeledStatement),
  ReturnStatement(ReturnStatement),
  SwitchStatement(SwitchStatement),
  SwitchStatementWithDefault(SwitchStatementWithDefault),
  ThrowStatement(ThrowStatement),
  TryCatchStatement(TryCatchStatement),
  TryFinallyStatement(TryFinallyStatement),
  VariableDeclarationStatement(VariableDeclarationStatement),
  WhileStatement(WhileStatement),
  WithStatement(WithStatement),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Block {
  pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BlockStatement {
  pub block: Block,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BreakStatement {
  pub label: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ContinueStatement {
  pub label: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DebuggerStatement {}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EmptyStatement {}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ClassDeclaration {
  pub name: BindingIdentifier,
  #[serde(rename = "super")]
  pub super_class: Option<Box<Expression>>,
  pub elements: Vec<ClassElement>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
  pub is_async: bool,
  pub is_generator: bool,
  pub name: BindingIdentifier,
  pub params: FormalParameters,
  pub body: FunctionBody,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DoWhileStatement {
  pub body: Box<Statement>,
  pub test: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ExpressionStatement {
  pub expression: Box<Expression>,
}

/// The head of a `for-in` or `for-of` loop.
#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInOfLeft {
  AssignmentTarget(AssignmentTarget),
  VariableDeclaration(VariableDeclaration),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ForInStatement {
  pub left: ForInOfLeft,
  pub right: Box<Expression>,
  pub body: Box<Statement>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ForOfStatement {
  pub left: ForInOfLeft,
  pub right: Box<Expression>,
  pub body: Box<Statement>,
}

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
  Expression(Box<Expression>),
  VariableDeclaration(VariableDeclaration),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ForStatement {
  pub init: Option<ForInit>,
  pub test: Option<Box<Expression>>,
  pub update: Option<Box<Expression>>,
  pub body: Box<Statement>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct IfStatement {
  pub test: Box<Expression>,
  pub consequent: Box<Statement>,
  pub alternate: Option<Box<Statement>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LabeledStatement {
  pub label: String,
  pub body: Box<Statement>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ReturnStatement {
  pub expression: Option<Box<Expression>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SwitchCase {
  pub test: Box<Expression>,
  pub consequent: Vec<Statement>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SwitchDefault {
  pub consequent: Vec<Statement>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SwitchStatement {
  pub discriminant: Box<Expression>,
  pub cases: Vec<SwitchCase>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchStatementWithDefault {
  pub discriminant: Box<Expression>,
  pub pre_default_cases: Vec<SwitchCase>,
  pub default_case: SwitchDefault,
  pub post_default_cases: Vec<SwitchCase>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ThrowStatement {
  pub expression: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CatchClause {
  pub binding: Binding,
  pub body: Block,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TryCatchStatement {
  pub body: Block,
  pub catch_clause: CatchClause,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TryFinallyStatement {
  pub body: Block,
  pub catch_clause: Option<CatchClause>,
  pub finalizer: Block,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VariableDeclaration {
  pub kind: VariableDeclarationKind,
  pub declarators: Vec<VariableDeclarator>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VariableDeclarator {
  pub binding: Binding,
  pub init: Option<Box<Expression>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VariableDeclarationStatement {
  pub declaration: VariableDeclaration,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct WhileStatement {
  pub test: Box<Expression>,
  pub body: Box<Statement>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct WithStatement {
  pub object: Box<Expression>,
  pub body: Box<Statement>,
}
