//! The generator: one rule per node kind, each turning a node and its children's fragments into a
//! new [`CodeRep`].
//!
//! Rules only ever look at their direct children. Anything a parent needs to know about how a
//! child begins or ends travels upward in the child's [`Flags`].

use std::borrow::Cow;
use std::convert::Infallible;

use crate::ast::class_or_object::{
  ClassElement, ComputedPropertyName, DataProperty, Getter, Method, Setter, ShorthandProperty,
  StaticPropertyName,
};
use crate::ast::expr::{
  ArrayExpression, ArrowExpression, AssignmentExpression, AwaitExpression, BinaryExpression,
  CallExpression, ClassExpression, CompoundAssignmentExpression, ComputedMemberExpression,
  ConditionalExpression, Expression, ExpressionOrSuper, FunctionExpression, IdentifierExpression,
  LiteralBooleanExpression, LiteralInfinityExpression, LiteralNullExpression,
  LiteralNumericExpression, LiteralRegExpExpression, LiteralStringExpression, NewExpression,
  NewTargetExpression, ObjectExpression, SpreadElement, SpreadOrExpression,
  StaticMemberExpression, Super, TemplateElement, TemplateExpression, TemplatePart,
  ThisExpression, UnaryExpression, UpdateExpression, YieldExpression, YieldGeneratorExpression,
};
use crate::ast::func::{ArrowBody, Directive, FormalParameters, FunctionBody};
use crate::ast::import_export::{
  Export, ExportAllFrom, ExportDefault, ExportDefaultBody, ExportFrom, ExportFromSpecifier,
  ExportLocalSpecifier, ExportLocals, ExportableDeclaration, Import, ImportNamespace,
  ImportSpecifier,
};
use crate::ast::pat::{
  ArrayAssignmentTarget, ArrayBinding, AssignmentTarget, AssignmentTargetIdentifier,
  AssignmentTargetPropertyIdentifier, AssignmentTargetPropertyProperty,
  AssignmentTargetWithDefault, BindingIdentifier, BindingPropertyIdentifier,
  BindingPropertyProperty, BindingWithDefault, ComputedMemberAssignmentTarget,
  ObjectAssignmentTarget, ObjectBinding, Parameter, StaticMemberAssignmentTarget,
};
use crate::ast::stmt::{
  Block, BlockStatement, BreakStatement, CatchClause, ClassDeclaration, ContinueStatement,
  DebuggerStatement, DoWhileStatement, EmptyStatement, ExpressionStatement, ForInOfLeft,
  ForInStatement, ForInit, ForOfStatement, ForStatement, FunctionDeclaration, IfStatement,
  LabeledStatement, ReturnStatement, SwitchCase, SwitchDefault, SwitchStatement,
  SwitchStatementWithDefault, ThrowStatement, TryCatchStatement, TryFinallyStatement,
  VariableDeclaration, VariableDeclarationStatement, VariableDeclarator, WhileStatement,
  WithStatement,
};
use crate::ast::{Module, Script};
use crate::char::is_identifier_name;
use crate::code_rep::{CodeRep, Flags};
use crate::escape::{directive_delimiter, escape_string_literal};
use crate::factory::CodeRepFactory;
use crate::num::d2a;
use crate::operator::BinaryOperator;
use crate::precedence::{
  expression_precedence, member_precedence, needs_parens, new_precedence, template_precedence,
  Precedence,
};
use crate::reducer::Reducer;

/// Name given to the binding of an anonymous `export default` function or class.
const DEFAULT_EXPORT_NAME: &str = "*default*";

/// Turns lexeme contents into the text that is written out. Implementations decide how strings,
/// identifiers, directives, regular expressions and template text are escaped.
pub trait Escaper {
  type Error;

  fn identifier<'a>(&self, name: &'a str) -> Cow<'a, str>;

  /// A string value as a complete, quoted literal. Also used for module specifiers.
  fn string_literal(&self, value: &str) -> String;

  /// A directive's raw text with its delimiters.
  fn directive(&self, raw: &str) -> String;

  /// The complete literal, `/pattern/flags`.
  fn regexp(&self, node: &LiteralRegExpExpression) -> Result<String, Self::Error>;

  /// Raw text of one template segment.
  fn template_text<'a>(&self, raw: &'a str, tagged: bool) -> Result<Cow<'a, str>, Self::Error>;
}

/// Writes lexemes as they are, escaping only what the literal syntax requires.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl Escaper for Plain {
  type Error = Infallible;

  fn identifier<'a>(&self, name: &'a str) -> Cow<'a, str> {
    Cow::Borrowed(name)
  }

  fn string_literal(&self, value: &str) -> String {
    escape_string_literal(value)
  }

  fn directive(&self, raw: &str) -> String {
    let delim = directive_delimiter(raw);
    format!("{delim}{raw}{delim}")
  }

  fn regexp(&self, node: &LiteralRegExpExpression) -> Result<String, Infallible> {
    Ok(format!("/{}/{}", node.pattern, regexp_flags(node)))
  }

  fn template_text<'a>(&self, raw: &'a str, _tagged: bool) -> Result<Cow<'a, str>, Infallible> {
    Ok(Cow::Borrowed(raw))
  }
}

/// Flags in canonical order.
pub(crate) fn regexp_flags(node: &LiteralRegExpExpression) -> String {
  [
    (node.global, 'g'),
    (node.ignore_case, 'i'),
    (node.multi_line, 'm'),
    (node.unicode, 'u'),
    (node.sticky, 'y'),
  ]
  .into_iter()
  .filter_map(|(set, flag)| set.then_some(flag))
  .collect()
}

pub struct CodeGen<E = Plain> {
  factory: CodeRepFactory,
  escaper: E,
}

impl<E: Escaper> CodeGen<E> {
  pub fn new(factory: CodeRepFactory, escaper: E) -> Self {
    CodeGen { factory, escaper }
  }

  pub fn factory(&self) -> CodeRepFactory {
    self.factory
  }

  fn token(&self, text: &'static str) -> CodeRep {
    self.factory.token(text)
  }

  fn seq(&self, children: Vec<CodeRep>) -> CodeRep {
    self.factory.seq(children)
  }

  fn p(&self, node: &Expression, min: Precedence, rep: CodeRep) -> CodeRep {
    self.factory.expr(node, min, rep)
  }

  /// `super` needs no guarding; anything else is guarded like an expression.
  fn p_object(&self, object: &ExpressionOrSuper, min: Precedence, rep: CodeRep) -> CodeRep {
    match object {
      ExpressionOrSuper::Expression(expr) => self.p(expr, min, rep),
      ExpressionOrSuper::Super(_) => rep,
    }
  }

  fn ident(&self, name: &str) -> CodeRep {
    self
      .factory
      .token(self.escaper.identifier(name).into_owned())
  }

  /// An identifier that may begin a statement or `for` head.
  fn identifier_reference(&self, name: &str) -> CodeRep {
    let rep = self.ident(name);
    if name == "let" {
      rep.with_flags(Flags::default().with_starts_with_let(true))
    } else {
      rep
    }
  }

  fn string(&self, value: &str) -> CodeRep {
    self.factory.token(self.escaper.string_literal(value))
  }

  fn label(&self, label: Option<&str>) -> CodeRep {
    label.map_or_else(|| self.factory.empty(), |label| self.ident(label))
  }

  fn opt(&self, keyword: &'static str, present: bool) -> CodeRep {
    if present {
      self.token(keyword)
    } else {
      self.factory.empty()
    }
  }

  /// A list element or property value, where a top-level comma would split the element.
  fn assignment_expr(&self, rep: Option<CodeRep>) -> CodeRep {
    match rep {
      Some(rep) if rep.contains_group() => self.factory.paren(rep),
      Some(rep) => rep,
      None => self.factory.empty(),
    }
  }

  fn array_pattern(&self, elements: Vec<Option<CodeRep>>, rest: Option<CodeRep>) -> CodeRep {
    let content = if elements.is_empty() {
      match rest {
        Some(rest) => self.seq(vec![self.token("..."), rest]),
        None => self.factory.empty(),
      }
    } else {
      let trailing_hole = matches!(elements.last(), Some(None));
      let mut parts = vec![self
        .factory
        .comma_sep(elements.into_iter().map(|e| self.assignment_expr(e)).collect())];
      match rest {
        Some(rest) => parts.extend([self.token(","), self.token("..."), rest]),
        None if trailing_hole => parts.push(self.token(",")),
        None => {}
      }
      self.seq(parts)
    };
    self.factory.bracket(content)
  }

  fn object_braces(&self, properties: Vec<CodeRep>) -> CodeRep {
    self
      .factory
      .brace(self.factory.comma_sep(properties))
      .with_flags(Flags::default().with_starts_with_object_curly(true))
  }

  /// `target=init` for defaults, which are AssignmentExpressions.
  fn with_default(&self, binding: CodeRep, init_node: &Expression, init: CodeRep) -> CodeRep {
    let init = self.p(init_node, Precedence::Assignment, init);
    self.seq(vec![binding, self.token("="), init])
  }

  fn opt_default(
    &self,
    binding: CodeRep,
    init_node: Option<&Expression>,
    init: Option<CodeRep>,
  ) -> CodeRep {
    match (init_node, init) {
      (Some(node), Some(init)) => self.with_default(binding, node, init),
      _ => binding,
    }
  }

  fn arguments(&self, nodes: &[SpreadOrExpression], reps: Vec<CodeRep>) -> CodeRep {
    let args = nodes
      .iter()
      .zip(reps)
      .map(|(node, rep)| match node {
        SpreadOrExpression::Expression(expr) => self.p(expr, Precedence::Assignment, rep),
        SpreadOrExpression::SpreadElement(_) => rep,
      })
      .collect();
    self.factory.paren(self.factory.comma_sep(args))
  }

  fn program_body(&self, directives: Vec<CodeRep>, items: Vec<CodeRep>) -> CodeRep {
    self.seq(vec![
      self.seq(directives),
      self.seq(first_in_directive_position(items)),
    ])
  }

  fn class_tail(
    &self,
    mut parts: Vec<CodeRep>,
    super_node: Option<&Expression>,
    super_class: Option<CodeRep>,
    elements: Vec<CodeRep>,
  ) -> CodeRep {
    if let (Some(node), Some(super_class)) = (super_node, super_class) {
      parts.push(self.token("extends"));
      parts.push(self.p(node, Precedence::New, super_class));
    }
    parts.extend([self.token("{"), self.seq(elements), self.token("}")]);
    self.seq(parts)
  }

  fn function_head(&self, is_async: bool, is_generator: bool, name: Option<CodeRep>) -> Vec<CodeRep> {
    vec![
      self.opt("async", is_async),
      self.token("function"),
      self.opt("*", is_generator),
      name.unwrap_or_else(|| self.factory.empty()),
    ]
  }

  /// A statement that ends with a nested statement, and so inherits its dangling `if`.
  fn ending_in(&self, mut head: Vec<CodeRep>, body: CodeRep) -> CodeRep {
    let missing_else = body.ends_with_missing_else();
    head.push(body);
    self
      .seq(head)
      .with_flags(Flags::default().with_ends_with_missing_else(missing_else))
  }

  /// The left side of a `for-in`/`for-of` head.
  fn for_in_of_left(&self, node: &ForInOfLeft, left: CodeRep, of: bool) -> CodeRep {
    match node {
      ForInOfLeft::VariableDeclaration(_) => self.factory.no_in(self.factory.test_in(left)),
      ForInOfLeft::AssignmentTarget(AssignmentTarget::AssignmentTargetIdentifier(id))
        if of && id.name == "async" =>
      {
        self.factory.paren(left)
      }
      // `for(let in b)` and `for(let[a]in b)` would start a declaration; `let.a` would not.
      ForInOfLeft::AssignmentTarget(_) if of && left.starts_with_let() => self.factory.paren(left),
      ForInOfLeft::AssignmentTarget(AssignmentTarget::AssignmentTargetIdentifier(id))
        if id.name == "let" =>
      {
        self.factory.paren(left)
      }
      ForInOfLeft::AssignmentTarget(_) if left.starts_with_let_square_bracket() => {
        self.factory.paren(left)
      }
      ForInOfLeft::AssignmentTarget(_) => left,
    }
  }

  fn member(&self, object: CodeRep, access: Vec<CodeRep>) -> CodeRep {
    let flags = Flags::leading(object.flags());
    let mut parts = vec![object];
    parts.extend(access);
    self.seq(parts).with_flags(flags)
  }

  fn computed_member(
    &self,
    object_node: &ExpressionOrSuper,
    min: Precedence,
    object: CodeRep,
    expression: CodeRep,
  ) -> CodeRep {
    let object = self.p_object(object_node, min, object);
    let let_bracket = object.starts_with_let_square_bracket()
      || matches!(
        object_node,
        ExpressionOrSuper::Expression(Expression::IdentifierExpression(id)) if id.name == "let"
      );
    let rep = self.member(object, vec![self.factory.bracket(expression)]);
    let flags = rep.flags().with_starts_with_let_square_bracket(let_bracket);
    rep.with_flags(flags)
  }

  fn static_member(
    &self,
    object_node: &ExpressionOrSuper,
    min: Precedence,
    object: CodeRep,
    property: &str,
  ) -> CodeRep {
    let object = self.p_object(object_node, min, object);
    self.member(object, vec![self.token("."), self.ident(property)])
  }

  /// `binding op= expression` and `binding = expression`.
  fn assignment(&self, binding: CodeRep, op: &'static str, node: &Expression, rhs: CodeRep) -> CodeRep {
    let flags = Flags::leading(binding.flags());
    let (rhs, contains_in) = if needs_parens(expression_precedence(node), Precedence::Assignment) {
      (self.factory.paren(rhs), false)
    } else {
      let contains_in = rhs.contains_in();
      (rhs, contains_in)
    };
    self
      .seq(vec![binding, self.token(op), rhs])
      .with_flags(flags.with_contains_in(contains_in))
  }
}

fn first_in_directive_position(mut statements: Vec<CodeRep>) -> Vec<CodeRep> {
  if !statements.is_empty() {
    let first = statements.remove(0).in_directive_position();
    statements.insert(0, first);
  }
  statements
}

fn is_unary_like(expr: &Expression) -> bool {
  matches!(
    expr,
    Expression::UnaryExpression(_) | Expression::AwaitExpression(_)
  )
}

impl<E: Escaper> Reducer for CodeGen<E> {
  type State = CodeRep;
  type Error = E::Error;

  fn reduce_array_assignment_target(
    &self,
    _node: &ArrayAssignmentTarget,
    elements: Vec<Option<CodeRep>>,
    rest: Option<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.array_pattern(elements, rest))
  }

  fn reduce_array_binding(
    &self,
    _node: &ArrayBinding,
    elements: Vec<Option<CodeRep>>,
    rest: Option<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.array_pattern(elements, rest))
  }

  fn reduce_array_expression(
    &self,
    _node: &ArrayExpression,
    elements: Vec<Option<CodeRep>>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.array_pattern(elements, None))
  }

  fn reduce_arrow_expression(
    &self,
    node: &ArrowExpression,
    params: CodeRep,
    body: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    // A lone identifier parameter needs no parentheses.
    let params = match (&node.params.rest, node.params.items.as_slice()) {
      (None, [Parameter::BindingIdentifier(id)]) => self.reduce_binding_identifier(id)?,
      _ => params,
    };
    let body = match &node.body {
      ArrowBody::Expression(_) if body.starts_with_object_curly() => self.factory.paren(body),
      ArrowBody::Expression(expr) => self.p(expr, Precedence::Assignment, body),
      ArrowBody::FunctionBody(_) => body,
    };
    // A concise body is parsed under the same `in` restriction as the arrow itself.
    let contains_in = body.contains_in();
    Ok(
      self
        .seq(vec![
          self.opt("async", node.is_async),
          params,
          self.token("=>"),
          body,
        ])
        .with_flags(Flags::default().with_contains_in(contains_in)),
    )
  }

  fn reduce_assignment_expression(
    &self,
    node: &AssignmentExpression,
    binding: CodeRep,
    expression: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.assignment(binding, "=", &node.expression, expression))
  }

  fn reduce_assignment_target_identifier(
    &self,
    node: &AssignmentTargetIdentifier,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.identifier_reference(&node.name))
  }

  fn reduce_assignment_target_property_identifier(
    &self,
    node: &AssignmentTargetPropertyIdentifier,
    binding: CodeRep,
    init: Option<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.opt_default(binding, node.init.as_deref(), init))
  }

  fn reduce_assignment_target_property_property(
    &self,
    _node: &AssignmentTargetPropertyProperty,
    name: CodeRep,
    binding: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![name, self.token(":"), binding]))
  }

  fn reduce_assignment_target_with_default(
    &self,
    node: &AssignmentTargetWithDefault,
    binding: CodeRep,
    init: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.with_default(binding, &node.init, init))
  }

  fn reduce_await_expression(
    &self,
    node: &AwaitExpression,
    expression: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let expression = self.p(&node.expression, Precedence::Prefix, expression);
    Ok(self.seq(vec![self.token("await"), expression]))
  }

  fn reduce_binary_expression(
    &self,
    node: &BinaryExpression,
    left: CodeRep,
    right: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let op = node.operator;
    let prec = op.precedence();
    let left_prec = expression_precedence(&node.left);
    // `**` is right-associative and refuses a bare unary operand on its left.
    let left_parens = if op == BinaryOperator::Exp {
      left_prec <= prec || is_unary_like(&node.left)
    } else {
      needs_parens(left_prec, prec)
    };
    let left = if left_parens {
      self.factory.paren(left)
    } else {
      left
    };
    let right = if expression_precedence(&node.right) <= prec {
      self.factory.paren(right)
    } else {
      right
    };
    let flags = Flags::leading(left.flags())
      .with_contains_in(left.contains_in() || right.contains_in() || op == BinaryOperator::In)
      .with_contains_group(op == BinaryOperator::Sequence);
    Ok(
      self
        .seq(vec![left, self.token(op.name()), right])
        .with_flags(flags),
    )
  }

  fn reduce_binding_identifier(&self, node: &BindingIdentifier) -> Result<CodeRep, E::Error> {
    Ok(self.identifier_reference(&node.name))
  }

  fn reduce_binding_property_identifier(
    &self,
    node: &BindingPropertyIdentifier,
    binding: CodeRep,
    init: Option<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.opt_default(binding, node.init.as_deref(), init))
  }

  fn reduce_binding_property_property(
    &self,
    _node: &BindingPropertyProperty,
    name: CodeRep,
    binding: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![name, self.token(":"), binding]))
  }

  fn reduce_binding_with_default(
    &self,
    node: &BindingWithDefault,
    binding: CodeRep,
    init: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.with_default(binding, &node.init, init))
  }

  fn reduce_block(&self, _node: &Block, statements: Vec<CodeRep>) -> Result<CodeRep, E::Error> {
    Ok(self.factory.brace(self.seq(statements)))
  }

  fn reduce_block_statement(
    &self,
    _node: &BlockStatement,
    block: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(block)
  }

  fn reduce_break_statement(&self, node: &BreakStatement) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("break"),
      self.label(node.label.as_deref()),
      self.factory.semi_op(),
    ]))
  }

  fn reduce_call_expression(
    &self,
    node: &CallExpression,
    callee: CodeRep,
    arguments: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    let callee = self.p_object(&node.callee, Precedence::Call, callee);
    let flags = Flags::leading(callee.flags());
    let arguments = self.arguments(&node.arguments, arguments);
    Ok(self.seq(vec![callee, arguments]).with_flags(flags))
  }

  fn reduce_catch_clause(
    &self,
    _node: &CatchClause,
    binding: CodeRep,
    body: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("catch"),
      self.factory.paren(binding),
      body,
    ]))
  }

  fn reduce_class_declaration(
    &self,
    node: &ClassDeclaration,
    name: CodeRep,
    super_class: Option<CodeRep>,
    elements: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    let mut head = vec![self.token("class")];
    if node.name.name != DEFAULT_EXPORT_NAME {
      head.push(name);
    }
    Ok(self.class_tail(head, node.super_class.as_deref(), super_class, elements))
  }

  fn reduce_class_element(&self, node: &ClassElement, method: CodeRep) -> Result<CodeRep, E::Error> {
    if node.is_static {
      Ok(self.seq(vec![self.token("static"), method]))
    } else {
      Ok(method)
    }
  }

  fn reduce_class_expression(
    &self,
    node: &ClassExpression,
    name: Option<CodeRep>,
    super_class: Option<CodeRep>,
    elements: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    let mut head = vec![self.token("class")];
    head.extend(name);
    Ok(
      self
        .class_tail(head, node.super_class.as_deref(), super_class, elements)
        .with_flags(Flags::default().with_starts_with_function_or_class(true)),
    )
  }

  fn reduce_compound_assignment_expression(
    &self,
    node: &CompoundAssignmentExpression,
    binding: CodeRep,
    expression: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.assignment(binding, node.operator.name(), &node.expression, expression))
  }

  fn reduce_computed_member_assignment_target(
    &self,
    node: &ComputedMemberAssignmentTarget,
    object: CodeRep,
    expression: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.computed_member(&node.object, Precedence::Member, object, expression))
  }

  fn reduce_computed_member_expression(
    &self,
    node: &ComputedMemberExpression,
    object: CodeRep,
    expression: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let prec = member_precedence(&node.object);
    Ok(self.computed_member(&node.object, prec, object, expression))
  }

  fn reduce_computed_property_name(
    &self,
    node: &ComputedPropertyName,
    expression: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let expression = self.p(&node.expression, Precedence::Assignment, expression);
    Ok(self.factory.bracket(expression))
  }

  fn reduce_conditional_expression(
    &self,
    node: &ConditionalExpression,
    test: CodeRep,
    consequent: CodeRep,
    alternate: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let test = self.p(&node.test, Precedence::LogicalOr, test);
    let consequent = self.p(&node.consequent, Precedence::Assignment, consequent);
    let alternate = self.p(&node.alternate, Precedence::Assignment, alternate);
    let flags = Flags::leading(test.flags())
      .with_contains_in(test.contains_in() || alternate.contains_in());
    Ok(
      self
        .seq(vec![
          test,
          self.token("?"),
          consequent,
          self.token(":"),
          alternate,
        ])
        .with_flags(flags),
    )
  }

  fn reduce_continue_statement(&self, node: &ContinueStatement) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("continue"),
      self.label(node.label.as_deref()),
      self.factory.semi_op(),
    ]))
  }

  fn reduce_data_property(
    &self,
    _node: &DataProperty,
    name: CodeRep,
    expression: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      name,
      self.token(":"),
      self.assignment_expr(Some(expression)),
    ]))
  }

  fn reduce_debugger_statement(&self, _node: &DebuggerStatement) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![self.token("debugger"), self.factory.semi_op()]))
  }

  fn reduce_directive(&self, node: &Directive) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.factory.token(self.escaper.directive(&node.raw_value)),
      self.factory.semi_op(),
    ]))
  }

  fn reduce_do_while_statement(
    &self,
    _node: &DoWhileStatement,
    body: CodeRep,
    test: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("do"),
      body,
      self.token("while"),
      self.factory.paren(test),
      self.factory.semi_op(),
    ]))
  }

  fn reduce_empty_statement(&self, _node: &EmptyStatement) -> Result<CodeRep, E::Error> {
    Ok(self.factory.semi())
  }

  fn reduce_export(&self, node: &Export, declaration: CodeRep) -> Result<CodeRep, E::Error> {
    let declaration = match node.declaration {
      ExportableDeclaration::VariableDeclaration(_) => {
        self.seq(vec![declaration, self.factory.semi_op()])
      }
      _ => declaration,
    };
    Ok(self.seq(vec![self.token("export"), declaration]))
  }

  fn reduce_export_all_from(&self, node: &ExportAllFrom) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("export"),
      self.token("*"),
      self.token("from"),
      self.string(&node.module_specifier),
      self.factory.semi_op(),
    ]))
  }

  fn reduce_export_default(&self, node: &ExportDefault, body: CodeRep) -> Result<CodeRep, E::Error> {
    let body = match &node.body {
      ExportDefaultBody::Expression(_) if body.starts_with_function_or_class() => {
        self.seq(vec![self.factory.paren(body), self.factory.semi_op()])
      }
      ExportDefaultBody::Expression(expr) => self.seq(vec![
        self.p(expr, Precedence::Assignment, body),
        self.factory.semi_op(),
      ]),
      ExportDefaultBody::Declaration(_) => body,
    };
    Ok(self.seq(vec![self.token("export"), self.token("default"), body]))
  }

  fn reduce_export_from(
    &self,
    node: &ExportFrom,
    named_exports: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("export"),
      self.factory.brace(self.factory.comma_sep(named_exports)),
      self.token("from"),
      self.string(&node.module_specifier),
      self.factory.semi_op(),
    ]))
  }

  fn reduce_export_from_specifier(&self, node: &ExportFromSpecifier) -> Result<CodeRep, E::Error> {
    let name = self.ident(&node.name);
    Ok(match &node.exported_name {
      Some(exported) => self.seq(vec![name, self.token("as"), self.ident(exported)]),
      None => name,
    })
  }

  fn reduce_export_local_specifier(
    &self,
    node: &ExportLocalSpecifier,
    name: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(match &node.exported_name {
      Some(exported) => self.seq(vec![name, self.token("as"), self.ident(exported)]),
      None => name,
    })
  }

  fn reduce_export_locals(
    &self,
    _node: &ExportLocals,
    named_exports: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("export"),
      self.factory.brace(self.factory.comma_sep(named_exports)),
      self.factory.semi_op(),
    ]))
  }

  fn reduce_expression_statement(
    &self,
    node: &ExpressionStatement,
    expression: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    if let Expression::LiteralStringExpression(_) = *node.expression {
      return Ok(self.factory.string_literal_expression_statement(expression));
    }
    let expression = if expression.starts_with_object_curly()
      || expression.starts_with_let_square_bracket()
      || expression.starts_with_function_or_class()
    {
      self.factory.paren(expression)
    } else {
      expression
    };
    Ok(self.seq(vec![expression, self.factory.semi_op()]))
  }

  fn reduce_for_in_statement(
    &self,
    node: &ForInStatement,
    left: CodeRep,
    right: CodeRep,
    body: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let left = self.for_in_of_left(&node.left, left, false);
    let head = self.factory.paren(self.seq(vec![left, self.token("in"), right]));
    Ok(self.ending_in(vec![self.token("for"), head], body))
  }

  fn reduce_for_of_statement(
    &self,
    node: &ForOfStatement,
    left: CodeRep,
    right: CodeRep,
    body: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let left = self.for_in_of_left(&node.left, left, true);
    let right = self.p(&node.right, Precedence::Assignment, right);
    let head = self.factory.paren(self.seq(vec![left, self.token("of"), right]));
    Ok(self.ending_in(vec![self.token("for"), head], body))
  }

  fn reduce_for_statement(
    &self,
    node: &ForStatement,
    init: Option<CodeRep>,
    test: Option<CodeRep>,
    update: Option<CodeRep>,
    body: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let init = match (&node.init, init) {
      // `for(let[` would start a declaration.
      (Some(ForInit::Expression(_)), Some(init)) if init.starts_with_let_square_bracket() => {
        self.factory.paren(init)
      }
      (_, Some(init)) => self.factory.no_in(self.factory.test_in(init)),
      (_, None) => self.factory.empty(),
    };
    let head = self.factory.paren(self.seq(vec![
      init,
      self.token(";"),
      test.unwrap_or_else(|| self.factory.empty()),
      self.token(";"),
      update.unwrap_or_else(|| self.factory.empty()),
    ]));
    Ok(self.ending_in(vec![self.token("for"), head], body))
  }

  fn reduce_formal_parameters(
    &self,
    _node: &FormalParameters,
    mut items: Vec<CodeRep>,
    rest: Option<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    if let Some(rest) = rest {
      items.push(self.seq(vec![self.token("..."), rest]));
    }
    Ok(self.factory.paren(self.factory.comma_sep(items)))
  }

  fn reduce_function_body(
    &self,
    _node: &FunctionBody,
    directives: Vec<CodeRep>,
    statements: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.factory.brace(self.seq(vec![
      self.seq(directives),
      self.seq(first_in_directive_position(statements)),
    ])))
  }

  fn reduce_function_declaration(
    &self,
    node: &FunctionDeclaration,
    name: CodeRep,
    params: CodeRep,
    body: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let name = (node.name.name != DEFAULT_EXPORT_NAME).then_some(name);
    let mut parts = self.function_head(node.is_async, node.is_generator, name);
    parts.extend([params, body]);
    Ok(self.seq(parts))
  }

  fn reduce_function_expression(
    &self,
    node: &FunctionExpression,
    name: Option<CodeRep>,
    params: CodeRep,
    body: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let mut parts = self.function_head(node.is_async, node.is_generator, name);
    parts.extend([params, body]);
    Ok(
      self
        .seq(parts)
        .with_flags(Flags::default().with_starts_with_function_or_class(true)),
    )
  }

  fn reduce_getter(&self, _node: &Getter, name: CodeRep, body: CodeRep) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("get"),
      name,
      self.factory.paren(self.factory.empty()),
      body,
    ]))
  }

  fn reduce_identifier_expression(&self, node: &IdentifierExpression) -> Result<CodeRep, E::Error> {
    Ok(self.identifier_reference(&node.name))
  }

  fn reduce_if_statement(
    &self,
    _node: &IfStatement,
    test: CodeRep,
    consequent: CodeRep,
    alternate: Option<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    let consequent = if alternate.is_some() && consequent.ends_with_missing_else() {
      self.factory.brace(consequent)
    } else {
      consequent
    };
    let missing_else = alternate
      .as_ref()
      .map_or(true, |alternate| alternate.ends_with_missing_else());
    let alternate = match alternate {
      Some(alternate) => self.seq(vec![self.token("else"), alternate]),
      None => self.factory.empty(),
    };
    Ok(
      self
        .seq(vec![
          self.token("if"),
          self.factory.paren(test),
          consequent,
          alternate,
        ])
        .with_flags(Flags::default().with_ends_with_missing_else(missing_else)),
    )
  }

  fn reduce_import(
    &self,
    node: &Import,
    default_binding: Option<CodeRep>,
    named_imports: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    let mut bindings: Vec<CodeRep> = default_binding.into_iter().collect();
    if !named_imports.is_empty() {
      bindings.push(self.factory.brace(self.factory.comma_sep(named_imports)));
    }
    let specifier = self.string(&node.module_specifier);
    if bindings.is_empty() {
      return Ok(self.seq(vec![
        self.token("import"),
        specifier,
        self.factory.semi_op(),
      ]));
    }
    Ok(self.seq(vec![
      self.token("import"),
      self.factory.comma_sep(bindings),
      self.token("from"),
      specifier,
      self.factory.semi_op(),
    ]))
  }

  fn reduce_import_namespace(
    &self,
    node: &ImportNamespace,
    default_binding: Option<CodeRep>,
    namespace_binding: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let default_binding = match default_binding {
      Some(binding) => self.seq(vec![binding, self.token(",")]),
      None => self.factory.empty(),
    };
    Ok(self.seq(vec![
      self.token("import"),
      default_binding,
      self.token("*"),
      self.token("as"),
      namespace_binding,
      self.token("from"),
      self.string(&node.module_specifier),
      self.factory.semi_op(),
    ]))
  }

  fn reduce_import_specifier(
    &self,
    node: &ImportSpecifier,
    binding: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(match &node.name {
      Some(name) => self.seq(vec![self.ident(name), self.token("as"), binding]),
      None => binding,
    })
  }

  fn reduce_labeled_statement(
    &self,
    node: &LabeledStatement,
    body: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.ending_in(vec![self.ident(&node.label), self.token(":")], body))
  }

  fn reduce_literal_boolean_expression(
    &self,
    node: &LiteralBooleanExpression,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.token(if node.value { "true" } else { "false" }))
  }

  fn reduce_literal_infinity_expression(
    &self,
    _node: &LiteralInfinityExpression,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.token("2e308"))
  }

  fn reduce_literal_null_expression(
    &self,
    _node: &LiteralNullExpression,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.token("null"))
  }

  fn reduce_literal_numeric_expression(
    &self,
    node: &LiteralNumericExpression,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.factory.num(node.value))
  }

  fn reduce_literal_reg_exp_expression(
    &self,
    node: &LiteralRegExpExpression,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.factory.token(self.escaper.regexp(node)?))
  }

  fn reduce_literal_string_expression(
    &self,
    node: &LiteralStringExpression,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.string(&node.value))
  }

  fn reduce_method(
    &self,
    node: &Method,
    name: CodeRep,
    params: CodeRep,
    body: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.opt("async", node.is_async),
      self.opt("*", node.is_generator),
      name,
      params,
      body,
    ]))
  }

  fn reduce_module(
    &self,
    _node: &Module,
    directives: Vec<CodeRep>,
    items: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.program_body(directives, items))
  }

  fn reduce_new_expression(
    &self,
    node: &NewExpression,
    callee: CodeRep,
    arguments: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    // A call callee would otherwise lend its argument list to the `new`.
    let callee = if expression_precedence(&node.callee) == Precedence::Call {
      self.factory.paren(callee)
    } else {
      let prec = new_precedence(node.arguments.is_empty());
      self.p(&node.callee, prec, callee)
    };
    let arguments = if node.arguments.is_empty() {
      self.factory.empty()
    } else {
      self.arguments(&node.arguments, arguments)
    };
    Ok(self.seq(vec![self.token("new"), callee, arguments]))
  }

  fn reduce_new_target_expression(
    &self,
    _node: &NewTargetExpression,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.token("new.target"))
  }

  fn reduce_object_assignment_target(
    &self,
    _node: &ObjectAssignmentTarget,
    properties: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.object_braces(properties))
  }

  fn reduce_object_binding(
    &self,
    _node: &ObjectBinding,
    properties: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.object_braces(properties))
  }

  fn reduce_object_expression(
    &self,
    _node: &ObjectExpression,
    properties: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.object_braces(properties))
  }

  fn reduce_return_statement(
    &self,
    _node: &ReturnStatement,
    expression: Option<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("return"),
      expression.unwrap_or_else(|| self.factory.empty()),
      self.factory.semi_op(),
    ]))
  }

  fn reduce_script(
    &self,
    _node: &Script,
    directives: Vec<CodeRep>,
    statements: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.program_body(directives, statements))
  }

  fn reduce_setter(
    &self,
    _node: &Setter,
    name: CodeRep,
    param: CodeRep,
    body: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("set"),
      name,
      self.factory.paren(param),
      body,
    ]))
  }

  fn reduce_shorthand_property(
    &self,
    _node: &ShorthandProperty,
    name: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(name)
  }

  fn reduce_spread_element(
    &self,
    node: &SpreadElement,
    expression: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let expression = self.p(&node.expression, Precedence::Assignment, expression);
    Ok(self.seq(vec![self.token("..."), expression]))
  }

  fn reduce_static_member_assignment_target(
    &self,
    node: &StaticMemberAssignmentTarget,
    object: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.static_member(&node.object, Precedence::Member, object, &node.property))
  }

  fn reduce_static_member_expression(
    &self,
    node: &StaticMemberExpression,
    object: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let prec = member_precedence(&node.object);
    Ok(self.static_member(&node.object, prec, object, &node.property))
  }

  fn reduce_static_property_name(&self, node: &StaticPropertyName) -> Result<CodeRep, E::Error> {
    let value = node.value.as_str();
    if is_identifier_name(value) && value != "Infinity" {
      return Ok(self.ident(value));
    }
    if let Ok(n) = value.parse::<f64>() {
      if n >= 0.0 && d2a(n) == value {
        return Ok(self.factory.num(n));
      }
    }
    Ok(self.string(value))
  }

  fn reduce_super(&self, _node: &Super) -> Result<CodeRep, E::Error> {
    Ok(self.token("super"))
  }

  fn reduce_switch_case(
    &self,
    _node: &SwitchCase,
    test: CodeRep,
    consequent: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("case"),
      test,
      self.token(":"),
      self.seq(consequent),
    ]))
  }

  fn reduce_switch_default(
    &self,
    _node: &SwitchDefault,
    consequent: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("default"),
      self.token(":"),
      self.seq(consequent),
    ]))
  }

  fn reduce_switch_statement(
    &self,
    _node: &SwitchStatement,
    discriminant: CodeRep,
    cases: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("switch"),
      self.factory.paren(discriminant),
      self.factory.brace(self.seq(cases)),
    ]))
  }

  fn reduce_switch_statement_with_default(
    &self,
    _node: &SwitchStatementWithDefault,
    discriminant: CodeRep,
    pre_default_cases: Vec<CodeRep>,
    default_case: CodeRep,
    post_default_cases: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    let cases = self.seq(vec![
      self.seq(pre_default_cases),
      default_case,
      self.seq(post_default_cases),
    ]);
    Ok(self.seq(vec![
      self.token("switch"),
      self.factory.paren(discriminant),
      self.factory.brace(cases),
    ]))
  }

  fn reduce_template_element(&self, node: &TemplateElement) -> Result<CodeRep, E::Error> {
    Ok(self.factory.raw_token(node.raw_value.as_str()))
  }

  fn reduce_template_expression(
    &self,
    node: &TemplateExpression,
    tag: Option<CodeRep>,
    elements: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    let tagged = node.tag.is_some();
    let tag = match (node.tag.as_deref(), tag) {
      (Some(tag_node), Some(tag)) => {
        let prec = template_precedence(Some(tag_node));
        Some(self.p(tag_node, prec, tag))
      }
      _ => None,
    };
    let flags = tag
      .as_ref()
      .map_or_else(Flags::default, |tag| Flags::leading(tag.flags()));

    let mut parts: Vec<CodeRep> = tag.into_iter().collect();
    parts.push(self.token("`"));
    let last = node.elements.len().saturating_sub(1);
    for (i, (part, rep)) in node.elements.iter().zip(elements).enumerate() {
      match part {
        // Segment text is re-derived so it can be escaped knowing whether the template is tagged.
        TemplatePart::TemplateElement(element) => {
          if i > 0 {
            parts.push(self.token("}"));
          }
          let text = self.escaper.template_text(&element.raw_value, tagged)?;
          parts.push(self.factory.raw_token(text.into_owned()));
          if i < last {
            parts.push(self.token("${"));
          }
        }
        TemplatePart::Expression(_) => parts.push(rep),
      }
    }
    parts.push(self.token("`"));
    Ok(self.seq(parts).with_flags(flags))
  }

  fn reduce_this_expression(&self, _node: &ThisExpression) -> Result<CodeRep, E::Error> {
    Ok(self.token("this"))
  }

  fn reduce_throw_statement(
    &self,
    _node: &ThrowStatement,
    expression: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("throw"),
      expression,
      self.factory.semi_op(),
    ]))
  }

  fn reduce_try_catch_statement(
    &self,
    _node: &TryCatchStatement,
    body: CodeRep,
    catch_clause: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![self.token("try"), body, catch_clause]))
  }

  fn reduce_try_finally_statement(
    &self,
    _node: &TryFinallyStatement,
    body: CodeRep,
    catch_clause: Option<CodeRep>,
    finalizer: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token("try"),
      body,
      catch_clause.unwrap_or_else(|| self.factory.empty()),
      self.token("finally"),
      finalizer,
    ]))
  }

  fn reduce_unary_expression(
    &self,
    node: &UnaryExpression,
    operand: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let operand = self.p(&node.operand, Precedence::Prefix, operand);
    Ok(self.seq(vec![self.token(node.operator.name()), operand]))
  }

  fn reduce_update_expression(
    &self,
    node: &UpdateExpression,
    operand: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let op = self.token(node.operator.name());
    if node.is_prefix {
      return Ok(self.seq(vec![op, operand]));
    }
    let flags = Flags::leading(operand.flags());
    Ok(self.seq(vec![operand, op]).with_flags(flags))
  }

  fn reduce_variable_declaration(
    &self,
    node: &VariableDeclaration,
    declarators: Vec<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![
      self.token(node.kind.name()),
      self.factory.comma_sep(declarators),
    ]))
  }

  fn reduce_variable_declaration_statement(
    &self,
    _node: &VariableDeclarationStatement,
    declaration: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.seq(vec![declaration, self.factory.semi_op()]))
  }

  fn reduce_variable_declarator(
    &self,
    _node: &VariableDeclarator,
    binding: CodeRep,
    init: Option<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    let contains_in = init
      .as_ref()
      .is_some_and(|init| init.contains_in() && !init.contains_group());
    let init = init.map(|init| {
      if init.contains_group() {
        self.factory.paren(init)
      } else {
        self.factory.test_in(init)
      }
    });
    Ok(
      self
        .factory
        .init(binding, init)
        .with_flags(Flags::default().with_contains_in(contains_in)),
    )
  }

  fn reduce_while_statement(
    &self,
    _node: &WhileStatement,
    test: CodeRep,
    body: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.ending_in(vec![self.token("while"), self.factory.paren(test)], body))
  }

  fn reduce_with_statement(
    &self,
    _node: &WithStatement,
    object: CodeRep,
    body: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    Ok(self.ending_in(vec![self.token("with"), self.factory.paren(object)], body))
  }

  fn reduce_yield_expression(
    &self,
    node: &YieldExpression,
    expression: Option<CodeRep>,
  ) -> Result<CodeRep, E::Error> {
    let mut parts = vec![self.token("yield")];
    let mut contains_in = false;
    if let (Some(node), Some(expression)) = (node.expression.as_deref(), expression) {
      let expression = self.p(node, Precedence::Assignment, expression);
      contains_in = expression.contains_in();
      parts.push(expression);
    }
    Ok(
      self
        .seq(parts)
        .with_flags(Flags::default().with_contains_in(contains_in)),
    )
  }

  fn reduce_yield_generator_expression(
    &self,
    node: &YieldGeneratorExpression,
    expression: CodeRep,
  ) -> Result<CodeRep, E::Error> {
    let expression = self.p(&node.expression, Precedence::Assignment, expression);
    let flags = Flags::default().with_contains_in(expression.contains_in());
    Ok(
      self
        .seq(vec![self.token("yield"), self.token("*"), expression])
        .with_flags(flags),
    )
  }
}
