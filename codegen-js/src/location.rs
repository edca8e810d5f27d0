//! Source locations of nodes in generated output.
//!
//! [`CodeGenWithLocation`] wraps another generator and attributes every fragment it builds to the
//! node it came from. When such a fragment is emitted through a token stream created
//! [`with_locations`](crate::TokenStream::with_locations), the stream records where the node's text
//! starts and finishes.
//!
//! Nodes are identified by address and type, so lookups must use references into the same tree
//! that was generated, and the tree must not have moved in between.

use std::any::TypeId;

use ahash::HashMap;

use crate::ast::class_or_object::{
  ClassElement, ComputedPropertyName, DataProperty, Getter, Method, Setter, ShorthandProperty,
  StaticPropertyName,
};
use crate::ast::expr::{
  ArrayExpression, ArrowExpression, AssignmentExpression, AwaitExpression, BinaryExpression,
  CallExpression, ClassExpression, CompoundAssignmentExpression, ComputedMemberExpression,
  ConditionalExpression, FunctionExpression, IdentifierExpression, LiteralBooleanExpression,
  LiteralInfinityExpression, LiteralNullExpression, LiteralNumericExpression,
  LiteralRegExpExpression, LiteralStringExpression, NewExpression, NewTargetExpression,
  ObjectExpression, SpreadElement, StaticMemberExpression, Super, TemplateElement,
  TemplateExpression, ThisExpression, UnaryExpression, UpdateExpression, YieldExpression,
  YieldGeneratorExpression,
};
use crate::ast::func::{Directive, FormalParameters, FunctionBody};
use crate::ast::import_export::{
  Export, ExportAllFrom, ExportDefault, ExportFrom, ExportFromSpecifier, ExportLocalSpecifier,
  ExportLocals, Import, ImportNamespace, ImportSpecifier,
};
use crate::ast::pat::{
  ArrayAssignmentTarget, ArrayBinding, AssignmentTargetIdentifier,
  AssignmentTargetPropertyIdentifier, AssignmentTargetPropertyProperty,
  AssignmentTargetWithDefault, BindingIdentifier, BindingPropertyIdentifier,
  BindingPropertyProperty, BindingWithDefault, ComputedMemberAssignmentTarget,
  ObjectAssignmentTarget, ObjectBinding, Parameter, StaticMemberAssignmentTarget,
};
use crate::ast::stmt::{
  Block, BlockStatement, BreakStatement, CatchClause, ClassDeclaration, ContinueStatement,
  DebuggerStatement, DoWhileStatement, EmptyStatement, ExpressionStatement, ForInStatement,
  ForOfStatement, ForStatement, FunctionDeclaration, IfStatement, LabeledStatement,
  ReturnStatement, SwitchCase, SwitchDefault, SwitchStatement, SwitchStatementWithDefault,
  ThrowStatement, TryCatchStatement, TryFinallyStatement, VariableDeclaration,
  VariableDeclarationStatement, VariableDeclarator, WhileStatement, WithStatement,
};
use crate::ast::{Module, Script};
use crate::code_rep::{CodeRep, CodeRepKind};
use crate::reducer::Reducer;

/// A position in generated text. `line` counts from 1; `column` and `offset` are byte counts
/// from the start of the line and of the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
  pub line: usize,
  pub column: usize,
  pub offset: usize,
}

impl Location {
  fn advanced(self, bytes: usize) -> Location {
    Location {
      column: self.column + bytes,
      offset: self.offset + bytes,
      ..self
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceSpan {
  pub start: Location,
  pub end: Location,
}

/// Identity of a node in a tree being generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
  addr: usize,
  // A struct and its first field share an address.
  ty: TypeId,
}

impl NodeId {
  pub fn of<T: 'static>(node: &T) -> NodeId {
    NodeId {
      addr: node as *const T as usize,
      ty: TypeId::of::<T>(),
    }
  }
}

/// How a node's recorded span reacts to text the stream decides on later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
  /// A script or module; starts where its emission starts, even if it is empty.
  Program,
  /// A node whose owed trailing semicolon, once printed, is part of it.
  Statement,
  /// A numeric literal, which owns the second `.` of `1..a`.
  Number,
  Other,
}

/// Spans of the nodes of one generated tree.
#[derive(Clone, Debug, Default)]
pub struct Locations {
  starts: HashMap<NodeId, Location>,
  finishes: HashMap<NodeId, Location>,
}

impl Locations {
  /// The span of `node`'s text, if it was generated and produced a start and finish.
  pub fn get<T: 'static>(&self, node: &T) -> Option<SourceSpan> {
    let id = NodeId::of(node);
    Some(SourceSpan {
      start: *self.starts.get(&id)?,
      end: *self.finishes.get(&id)?,
    })
  }

  /// Number of nodes with a complete span.
  pub fn len(&self) -> usize {
    self
      .finishes
      .keys()
      .filter(|id| self.starts.contains_key(id))
      .count()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Location bookkeeping carried by a token stream.
#[derive(Clone, Debug, Default)]
pub(crate) struct LocationTracker {
  // Line breaks seen so far.
  line: usize,
  line_start: usize,
  locations: Locations,
  // Nodes that start at the next written text.
  starting: Vec<NodeId>,
  // Statements finished since the last token, which would own an owed semicolon.
  finishing_statements: Vec<NodeId>,
  last_number: Option<NodeId>,
}

impl LocationTracker {
  fn location(&self, offset: usize) -> Location {
    Location {
      line: self.line + 1,
      column: offset - self.line_start,
      offset,
    }
  }

  pub(crate) fn start_node(&mut self, node: NodeId, role: NodeRole, offset: usize) {
    if role == NodeRole::Program {
      let location = self.location(offset);
      self.locations.starts.insert(node, location);
    } else {
      self.starting.push(node);
    }
  }

  pub(crate) fn finish_node(&mut self, node: NodeId, role: NodeRole, offset: usize) {
    let location = self.location(offset);
    self.locations.finishes.insert(node, location);
    match role {
      NodeRole::Statement => self.finishing_statements.push(node),
      NodeRole::Number => self.last_number = Some(node),
      NodeRole::Program | NodeRole::Other => {}
    }
  }

  pub(crate) fn semicolon_inserted(&mut self) {
    for node in &self.finishing_statements {
      if let Some(end) = self.locations.finishes.get_mut(node) {
        *end = end.advanced(1);
      }
    }
  }

  pub(crate) fn statements_closed(&mut self) {
    self.finishing_statements.clear();
  }

  pub(crate) fn number_extended(&mut self) {
    if let Some(end) = self
      .last_number
      .and_then(|node| self.locations.finishes.get_mut(&node))
    {
      *end = end.advanced(1);
    }
  }

  pub(crate) fn number_closed(&mut self) {
    self.last_number = None;
  }

  /// Called before `text` is appended at `offset`.
  pub(crate) fn text_written(&mut self, offset: usize, text: &str) {
    let location = self.location(offset);
    for node in self.starting.drain(..) {
      self.locations.starts.insert(node, location);
    }
    for end in line_break_ends(text) {
      self.line += 1;
      self.line_start = offset + end;
    }
  }

  pub(crate) fn into_locations(self) -> Locations {
    self.locations
  }
}

/// Byte offsets just past each line break in `text`; `\r\n` is one break.
fn line_break_ends(text: &str) -> impl Iterator<Item = usize> + '_ {
  let bytes = text.as_bytes();
  text.char_indices().filter_map(move |(i, c)| match c {
    '\r' if bytes.get(i + 1) == Some(&b'\n') => None,
    '\r' | '\n' | '\u{2028}' | '\u{2029}' => Some(i + c.len_utf8()),
    _ => None,
  })
}

/// Wraps a generator so every node's fragment is attributed to that node.
pub struct CodeGenWithLocation<R> {
  inner: R,
}

impl<R> CodeGenWithLocation<R> {
  pub fn new(inner: R) -> Self {
    CodeGenWithLocation { inner }
  }

  pub fn inner(&self) -> &R {
    &self.inner
  }

  fn locate<T: 'static>(&self, node: &T, role: NodeRole, rep: CodeRep) -> CodeRep {
    rep.located(NodeId::of(node), role)
  }
}

/// A lone identifier parameter is printed without parentheses, in place of the reduced parameter
/// list. Such an arrow is `[async, identifier, =>, body]`.
fn has_bare_parameter(rep: &CodeRep) -> bool {
  let CodeRepKind::Seq(parts) = rep.kind() else {
    return false;
  };
  matches!(parts.get(1).map(CodeRep::kind), Some(CodeRepKind::Token(_)))
    && matches!(parts.get(2).map(CodeRep::kind), Some(CodeRepKind::Token(arrow)) if arrow == "=>")
}

macro_rules! located {
  ($($method:ident($node:ty $(, $arg:ident: $ty:ty)*) => $role:ident;)*) => {
    $(
      fn $method(&self, node: &$node $(, $arg: $ty)*) -> Result<CodeRep, Self::Error> {
        let rep = self.inner.$method(node $(, $arg)*)?;
        Ok(self.locate(node, NodeRole::$role, rep))
      }
    )*
  };
}

impl<R: Reducer<State = CodeRep>> Reducer for CodeGenWithLocation<R> {
  type State = CodeRep;
  type Error = R::Error;

  fn reduce_arrow_expression(
    &self,
    node: &ArrowExpression,
    params: CodeRep,
    body: CodeRep,
  ) -> Result<CodeRep, Self::Error> {
    let mut rep = self.inner.reduce_arrow_expression(node, params, body)?;
    if let (None, [Parameter::BindingIdentifier(id)]) =
      (&node.params.rest, node.params.items.as_slice())
    {
      if has_bare_parameter(&rep) {
        rep = rep.map_seq_part(1, |binding| {
          let binding = self.locate(id, NodeRole::Other, binding);
          self.locate(&node.params, NodeRole::Other, binding)
        });
      }
    }
    Ok(self.locate(node, NodeRole::Other, rep))
  }

  located! {
    reduce_array_assignment_target(ArrayAssignmentTarget, elements: Vec<Option<CodeRep>>, rest: Option<CodeRep>) => Other;
    reduce_array_binding(ArrayBinding, elements: Vec<Option<CodeRep>>, rest: Option<CodeRep>) => Other;
    reduce_array_expression(ArrayExpression, elements: Vec<Option<CodeRep>>) => Other;
    reduce_assignment_expression(AssignmentExpression, binding: CodeRep, expression: CodeRep) => Other;
    reduce_assignment_target_identifier(AssignmentTargetIdentifier) => Other;
    reduce_assignment_target_property_identifier(AssignmentTargetPropertyIdentifier, binding: CodeRep, init: Option<CodeRep>) => Other;
    reduce_assignment_target_property_property(AssignmentTargetPropertyProperty, name: CodeRep, binding: CodeRep) => Other;
    reduce_assignment_target_with_default(AssignmentTargetWithDefault, binding: CodeRep, init: CodeRep) => Other;
    reduce_await_expression(AwaitExpression, expression: CodeRep) => Other;
    reduce_binary_expression(BinaryExpression, left: CodeRep, right: CodeRep) => Other;
    reduce_binding_identifier(BindingIdentifier) => Other;
    reduce_binding_property_identifier(BindingPropertyIdentifier, binding: CodeRep, init: Option<CodeRep>) => Other;
    reduce_binding_property_property(BindingPropertyProperty, name: CodeRep, binding: CodeRep) => Other;
    reduce_binding_with_default(BindingWithDefault, binding: CodeRep, init: CodeRep) => Other;
    reduce_block(Block, statements: Vec<CodeRep>) => Other;
    reduce_block_statement(BlockStatement, block: CodeRep) => Other;
    reduce_break_statement(BreakStatement) => Other;
    reduce_call_expression(CallExpression, callee: CodeRep, arguments: Vec<CodeRep>) => Other;
    reduce_catch_clause(CatchClause, binding: CodeRep, body: CodeRep) => Other;
    reduce_class_declaration(ClassDeclaration, name: CodeRep, super_class: Option<CodeRep>, elements: Vec<CodeRep>) => Other;
    reduce_class_element(ClassElement, method: CodeRep) => Other;
    reduce_class_expression(ClassExpression, name: Option<CodeRep>, super_class: Option<CodeRep>, elements: Vec<CodeRep>) => Other;
    reduce_compound_assignment_expression(CompoundAssignmentExpression, binding: CodeRep, expression: CodeRep) => Other;
    reduce_computed_member_assignment_target(ComputedMemberAssignmentTarget, object: CodeRep, expression: CodeRep) => Other;
    reduce_computed_member_expression(ComputedMemberExpression, object: CodeRep, expression: CodeRep) => Other;
    reduce_computed_property_name(ComputedPropertyName, expression: CodeRep) => Other;
    reduce_conditional_expression(ConditionalExpression, test: CodeRep, consequent: CodeRep, alternate: CodeRep) => Other;
    reduce_continue_statement(ContinueStatement) => Other;
    reduce_data_property(DataProperty, name: CodeRep, expression: CodeRep) => Other;
    reduce_debugger_statement(DebuggerStatement) => Other;
    reduce_directive(Directive) => Statement;
    reduce_do_while_statement(DoWhileStatement, body: CodeRep, test: CodeRep) => Other;
    reduce_empty_statement(EmptyStatement) => Other;
    reduce_export(Export, declaration: CodeRep) => Statement;
    reduce_export_all_from(ExportAllFrom) => Statement;
    reduce_export_default(ExportDefault, body: CodeRep) => Statement;
    reduce_export_from(ExportFrom, named_exports: Vec<CodeRep>) => Statement;
    reduce_export_from_specifier(ExportFromSpecifier) => Other;
    reduce_export_local_specifier(ExportLocalSpecifier, name: CodeRep) => Other;
    reduce_export_locals(ExportLocals, named_exports: Vec<CodeRep>) => Statement;
    reduce_expression_statement(ExpressionStatement, expression: CodeRep) => Other;
    reduce_for_in_statement(ForInStatement, left: CodeRep, right: CodeRep, body: CodeRep) => Other;
    reduce_for_of_statement(ForOfStatement, left: CodeRep, right: CodeRep, body: CodeRep) => Other;
    reduce_for_statement(ForStatement, init: Option<CodeRep>, test: Option<CodeRep>, update: Option<CodeRep>, body: CodeRep) => Other;
    reduce_formal_parameters(FormalParameters, items: Vec<CodeRep>, rest: Option<CodeRep>) => Other;
    reduce_function_body(FunctionBody, directives: Vec<CodeRep>, statements: Vec<CodeRep>) => Other;
    reduce_function_declaration(FunctionDeclaration, name: CodeRep, params: CodeRep, body: CodeRep) => Other;
    reduce_function_expression(FunctionExpression, name: Option<CodeRep>, params: CodeRep, body: CodeRep) => Other;
    reduce_getter(Getter, name: CodeRep, body: CodeRep) => Other;
    reduce_identifier_expression(IdentifierExpression) => Other;
    reduce_if_statement(IfStatement, test: CodeRep, consequent: CodeRep, alternate: Option<CodeRep>) => Other;
    reduce_import(Import, default_binding: Option<CodeRep>, named_imports: Vec<CodeRep>) => Statement;
    reduce_import_namespace(ImportNamespace, default_binding: Option<CodeRep>, namespace_binding: CodeRep) => Statement;
    reduce_import_specifier(ImportSpecifier, binding: CodeRep) => Other;
    reduce_labeled_statement(LabeledStatement, body: CodeRep) => Other;
    reduce_literal_boolean_expression(LiteralBooleanExpression) => Other;
    reduce_literal_infinity_expression(LiteralInfinityExpression) => Other;
    reduce_literal_null_expression(LiteralNullExpression) => Other;
    reduce_literal_numeric_expression(LiteralNumericExpression) => Number;
    reduce_literal_reg_exp_expression(LiteralRegExpExpression) => Other;
    reduce_literal_string_expression(LiteralStringExpression) => Other;
    reduce_method(Method, name: CodeRep, params: CodeRep, body: CodeRep) => Other;
    reduce_module(Module, directives: Vec<CodeRep>, items: Vec<CodeRep>) => Program;
    reduce_new_expression(NewExpression, callee: CodeRep, arguments: Vec<CodeRep>) => Other;
    reduce_new_target_expression(NewTargetExpression) => Other;
    reduce_object_assignment_target(ObjectAssignmentTarget, properties: Vec<CodeRep>) => Other;
    reduce_object_binding(ObjectBinding, properties: Vec<CodeRep>) => Other;
    reduce_object_expression(ObjectExpression, properties: Vec<CodeRep>) => Other;
    reduce_return_statement(ReturnStatement, expression: Option<CodeRep>) => Other;
    reduce_script(Script, directives: Vec<CodeRep>, statements: Vec<CodeRep>) => Program;
    reduce_setter(Setter, name: CodeRep, param: CodeRep, body: CodeRep) => Other;
    reduce_shorthand_property(ShorthandProperty, name: CodeRep) => Other;
    reduce_spread_element(SpreadElement, expression: CodeRep) => Other;
    reduce_static_member_assignment_target(StaticMemberAssignmentTarget, object: CodeRep) => Other;
    reduce_static_member_expression(StaticMemberExpression, object: CodeRep) => Other;
    reduce_static_property_name(StaticPropertyName) => Other;
    reduce_super(Super) => Other;
    reduce_switch_case(SwitchCase, test: CodeRep, consequent: Vec<CodeRep>) => Statement;
    reduce_switch_default(SwitchDefault, consequent: Vec<CodeRep>) => Statement;
    reduce_switch_statement(SwitchStatement, discriminant: CodeRep, cases: Vec<CodeRep>) => Other;
    reduce_switch_statement_with_default(SwitchStatementWithDefault, discriminant: CodeRep, pre_default_cases: Vec<CodeRep>, default_case: CodeRep, post_default_cases: Vec<CodeRep>) => Other;
    reduce_template_element(TemplateElement) => Other;
    reduce_template_expression(TemplateExpression, tag: Option<CodeRep>, elements: Vec<CodeRep>) => Other;
    reduce_this_expression(ThisExpression) => Other;
    reduce_throw_statement(ThrowStatement, expression: CodeRep) => Other;
    reduce_try_catch_statement(TryCatchStatement, body: CodeRep, catch_clause: CodeRep) => Other;
    reduce_try_finally_statement(TryFinallyStatement, body: CodeRep, catch_clause: Option<CodeRep>, finalizer: CodeRep) => Other;
    reduce_unary_expression(UnaryExpression, operand: CodeRep) => Other;
    reduce_update_expression(UpdateExpression, operand: CodeRep) => Other;
    reduce_variable_declaration(VariableDeclaration, declarators: Vec<CodeRep>) => Other;
    reduce_variable_declaration_statement(VariableDeclarationStatement, declaration: CodeRep) => Other;
    reduce_variable_declarator(VariableDeclarator, binding: CodeRep, init: Option<CodeRep>) => Other;
    reduce_while_statement(WhileStatement, test: CodeRep, body: CodeRep) => Other;
    reduce_with_statement(WithStatement, object: CodeRep, body: CodeRep) => Other;
    reduce_yield_expression(YieldExpression, expression: Option<CodeRep>) => Other;
    reduce_yield_generator_expression(YieldGeneratorExpression, expression: CodeRep) => Other;
  }
}
