#![allow(dead_code)]

use codegen_js::ast::class_or_object::{
  DataProperty, ObjectProperty, PropertyName, StaticPropertyName,
};
use codegen_js::ast::expr::{
  ArrowExpression, AssignmentExpression, BinaryExpression, CallExpression,
  ComputedMemberExpression, ConditionalExpression, Expression, ExpressionOrSuper,
  FunctionExpression, IdentifierExpression, LiteralNullExpression, LiteralNumericExpression,
  LiteralStringExpression, NewExpression, ObjectExpression, SpreadOrExpression,
  StaticMemberExpression, TemplateElement, TemplateExpression, TemplatePart, UnaryExpression,
};
use codegen_js::ast::func::{ArrowBody, Directive, FormalParameters, FunctionBody};
use codegen_js::ast::pat::{
  AssignmentTarget, AssignmentTargetIdentifier, Binding, BindingIdentifier, Parameter,
};
use codegen_js::ast::stmt::{
  Block, BlockStatement, EmptyStatement, ExpressionStatement, IfStatement, Statement,
  VariableDeclaration, VariableDeclarationStatement, VariableDeclarator, WhileStatement,
};
use codegen_js::ast::{Module, ModuleItem, Program, Script};
use codegen_js::operator::{BinaryOperator, UnaryOperator, VariableDeclarationKind};
use similar::ChangeTag;
use similar::TextDiff;

pub fn id(name: &str) -> Expression {
  IdentifierExpression { name: name.into() }.into()
}

pub fn num(value: f64) -> Expression {
  LiteralNumericExpression { value }.into()
}

pub fn string(value: &str) -> Expression {
  LiteralStringExpression {
    value: value.into(),
  }
  .into()
}

pub fn null() -> Expression {
  LiteralNullExpression {}.into()
}

pub fn bin(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
  BinaryExpression {
    left: Box::new(left),
    operator,
    right: Box::new(right),
  }
  .into()
}

pub fn unary(operator: UnaryOperator, operand: Expression) -> Expression {
  UnaryExpression {
    operator,
    operand: Box::new(operand),
  }
  .into()
}

pub fn assign(target: &str, expression: Expression) -> Expression {
  AssignmentExpression {
    binding: AssignmentTarget::from(AssignmentTargetIdentifier::new(target)),
    expression: Box::new(expression),
  }
  .into()
}

pub fn call(callee: Expression, arguments: Vec<Expression>) -> Expression {
  CallExpression {
    callee: Box::new(callee.into()),
    arguments: arguments.into_iter().map(SpreadOrExpression::from).collect(),
  }
  .into()
}

pub fn new(callee: Expression, arguments: Vec<Expression>) -> Expression {
  NewExpression {
    callee: Box::new(callee),
    arguments: arguments.into_iter().map(SpreadOrExpression::from).collect(),
  }
  .into()
}

pub fn member(object: Expression, property: &str) -> Expression {
  StaticMemberExpression {
    object: Box::new(ExpressionOrSuper::from(object)),
    property: property.into(),
  }
  .into()
}

pub fn index(object: Expression, expression: Expression) -> Expression {
  ComputedMemberExpression {
    object: Box::new(ExpressionOrSuper::from(object)),
    expression: Box::new(expression),
  }
  .into()
}

pub fn cond(test: Expression, consequent: Expression, alternate: Expression) -> Expression {
  ConditionalExpression {
    test: Box::new(test),
    consequent: Box::new(consequent),
    alternate: Box::new(alternate),
  }
  .into()
}

pub fn object(properties: Vec<ObjectProperty>) -> Expression {
  ObjectExpression { properties }.into()
}

pub fn data_property(name: &str, expression: Expression) -> ObjectProperty {
  DataProperty {
    name: PropertyName::from(StaticPropertyName::new(name)),
    expression: Box::new(expression),
  }
  .into()
}

pub fn function(name: Option<&str>, statements: Vec<Statement>) -> Expression {
  FunctionExpression {
    is_async: false,
    is_generator: false,
    name: name.map(BindingIdentifier::new),
    params: FormalParameters::default(),
    body: FunctionBody {
      directives: Vec::new(),
      statements,
    },
  }
  .into()
}

pub fn params(names: &[&str]) -> FormalParameters {
  FormalParameters {
    items: names
      .iter()
      .map(|name| Parameter::from(BindingIdentifier::new(*name)))
      .collect(),
    rest: None,
  }
}

pub fn arrow(names: &[&str], body: Expression) -> Expression {
  ArrowExpression {
    is_async: false,
    params: params(names),
    body: ArrowBody::from(Box::new(body)),
  }
  .into()
}

pub fn text(raw: &str) -> TemplatePart {
  TemplateElement {
    raw_value: raw.into(),
  }
  .into()
}

pub fn template(tag: Option<Expression>, elements: Vec<TemplatePart>) -> Expression {
  TemplateExpression {
    tag: tag.map(Box::new),
    elements,
  }
  .into()
}

pub fn expr_stmt(expression: Expression) -> Statement {
  ExpressionStatement {
    expression: Box::new(expression),
  }
  .into()
}

pub fn empty() -> Statement {
  EmptyStatement {}.into()
}

pub fn block(statements: Vec<Statement>) -> Statement {
  BlockStatement {
    block: Block { statements },
  }
  .into()
}

pub fn if_stmt(test: Expression, consequent: Statement, alternate: Option<Statement>) -> Statement {
  IfStatement {
    test: Box::new(test),
    consequent: Box::new(consequent),
    alternate: alternate.map(Box::new),
  }
  .into()
}

pub fn while_stmt(test: Expression, body: Statement) -> Statement {
  WhileStatement {
    test: Box::new(test),
    body: Box::new(body),
  }
  .into()
}

pub fn declaration(
  kind: VariableDeclarationKind,
  declarators: Vec<(&str, Option<Expression>)>,
) -> VariableDeclaration {
  VariableDeclaration {
    kind,
    declarators: declarators
      .into_iter()
      .map(|(name, init)| VariableDeclarator {
        binding: Binding::from(BindingIdentifier::new(name)),
        init: init.map(Box::new),
      })
      .collect(),
  }
}

pub fn var(declarators: Vec<(&str, Option<Expression>)>) -> Statement {
  VariableDeclarationStatement {
    declaration: declaration(VariableDeclarationKind::Var, declarators),
  }
  .into()
}

pub fn script(statements: Vec<Statement>) -> Program {
  Script {
    directives: Vec::new(),
    statements,
  }
  .into()
}

pub fn script_with_directives(directives: &[&str], statements: Vec<Statement>) -> Program {
  Script {
    directives: directives.iter().map(|raw| Directive::new(*raw)).collect(),
    statements,
  }
  .into()
}

pub fn module(items: Vec<ModuleItem>) -> Program {
  Module {
    directives: Vec::new(),
    items,
  }
  .into()
}

/// Compact output of a script holding the given statements.
pub fn print(statements: Vec<Statement>) -> String {
  codegen_js::generate(&script(statements))
}

/// Compact output of a script holding a single expression statement.
pub fn print_expr(expression: Expression) -> String {
  print(vec![expr_stmt(expression)])
}

pub fn assert_source(actual: &str, expected: &str) {
  if actual == expected {
    return;
  }
  let mut msg = String::from("generated source differs:\n");
  let diff = TextDiff::from_chars(expected, actual);
  for change in diff.iter_all_changes() {
    match change.tag() {
      ChangeTag::Delete => msg.push_str(&format!("[-{}]", change.value())),
      ChangeTag::Insert => msg.push_str(&format!("[+{}]", change.value())),
      ChangeTag::Equal => msg.push_str(change.value()),
    }
  }
  panic!("{msg}\nexpected: {expected:?}\n  actual: {actual:?}");
}
