//! Post-order traversal of the syntax tree.
//!
//! A [`Reducer`] supplies one rule per node kind. The director functions in this module reduce
//! every child of a node first and then hand the node together with its children's results to
//! the matching rule, so rules never recurse themselves. The first error aborts the walk.

use crate::ast::class_or_object::{
  ClassElement, ComputedPropertyName, DataProperty, Getter, Method, MethodDefinition,
  ObjectProperty, PropertyName, Setter, ShorthandProperty, StaticPropertyName,
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
  Export, ExportAllFrom, ExportDeclaration, ExportDefault, ExportDefaultBody,
  ExportDefaultDeclaration, ExportFrom, ExportFromSpecifier, ExportLocalSpecifier, ExportLocals,
  ExportableDeclaration, Import, ImportDeclaration, ImportNamespace, ImportSpecifier,
};
use crate::ast::pat::{
  ArrayAssignmentTarget, ArrayBinding, AssignmentTarget, AssignmentTargetIdentifier,
  AssignmentTargetMaybeDefault, AssignmentTargetProperty, AssignmentTargetPropertyIdentifier,
  AssignmentTargetPropertyProperty, AssignmentTargetWithDefault, Binding, BindingIdentifier,
  BindingProperty, BindingPropertyIdentifier, BindingPropertyProperty, BindingWithDefault,
  ComputedMemberAssignmentTarget, ObjectAssignmentTarget, ObjectBinding, Parameter,
  SimpleAssignmentTarget, StaticMemberAssignmentTarget,
};
use crate::ast::stmt::{
  Block, BlockStatement, BreakStatement, CatchClause, ClassDeclaration, ContinueStatement,
  DebuggerStatement, DoWhileStatement, EmptyStatement, ExpressionStatement, ForInOfLeft,
  ForInStatement, ForInit, ForOfStatement, ForStatement, FunctionDeclaration, IfStatement,
  LabeledStatement, ReturnStatement, Statement, SwitchCase, SwitchDefault, SwitchStatement,
  SwitchStatementWithDefault, ThrowStatement, TryCatchStatement, TryFinallyStatement,
  VariableDeclaration, VariableDeclarationStatement, VariableDeclarator, WhileStatement,
  WithStatement,
};
use crate::ast::{Module, ModuleItem, Program, Script};

/// Rules for folding a tree bottom-up. Each rule receives the node and the already reduced state
/// of each structural child, in source order. Absent optional children are `None`; array holes are
/// `None` entries.
pub trait Reducer {
  type State;
  type Error;

  fn reduce_array_assignment_target(
    &self,
    node: &ArrayAssignmentTarget,
    elements: Vec<Option<Self::State>>,
    rest: Option<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_array_binding(
    &self,
    node: &ArrayBinding,
    elements: Vec<Option<Self::State>>,
    rest: Option<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_array_expression(
    &self,
    node: &ArrayExpression,
    elements: Vec<Option<Self::State>>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_arrow_expression(
    &self,
    node: &ArrowExpression,
    params: Self::State,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_assignment_expression(
    &self,
    node: &AssignmentExpression,
    binding: Self::State,
    expression: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_assignment_target_identifier(
    &self,
    node: &AssignmentTargetIdentifier,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_assignment_target_property_identifier(
    &self,
    node: &AssignmentTargetPropertyIdentifier,
    binding: Self::State,
    init: Option<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_assignment_target_property_property(
    &self,
    node: &AssignmentTargetPropertyProperty,
    name: Self::State,
    binding: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_assignment_target_with_default(
    &self,
    node: &AssignmentTargetWithDefault,
    binding: Self::State,
    init: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_await_expression(
    &self,
    node: &AwaitExpression,
    expression: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_binary_expression(
    &self,
    node: &BinaryExpression,
    left: Self::State,
    right: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_binding_identifier(&self, node: &BindingIdentifier)
    -> Result<Self::State, Self::Error>;

  fn reduce_binding_property_identifier(
    &self,
    node: &BindingPropertyIdentifier,
    binding: Self::State,
    init: Option<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_binding_property_property(
    &self,
    node: &BindingPropertyProperty,
    name: Self::State,
    binding: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_binding_with_default(
    &self,
    node: &BindingWithDefault,
    binding: Self::State,
    init: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_block(
    &self,
    node: &Block,
    statements: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_block_statement(
    &self,
    node: &BlockStatement,
    block: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_break_statement(&self, node: &BreakStatement) -> Result<Self::State, Self::Error>;

  fn reduce_call_expression(
    &self,
    node: &CallExpression,
    callee: Self::State,
    arguments: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_catch_clause(
    &self,
    node: &CatchClause,
    binding: Self::State,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_class_declaration(
    &self,
    node: &ClassDeclaration,
    name: Self::State,
    super_class: Option<Self::State>,
    elements: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_class_element(
    &self,
    node: &ClassElement,
    method: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_class_expression(
    &self,
    node: &ClassExpression,
    name: Option<Self::State>,
    super_class: Option<Self::State>,
    elements: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_compound_assignment_expression(
    &self,
    node: &CompoundAssignmentExpression,
    binding: Self::State,
    expression: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_computed_member_assignment_target(
    &self,
    node: &ComputedMemberAssignmentTarget,
    object: Self::State,
    expression: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_computed_member_expression(
    &self,
    node: &ComputedMemberExpression,
    object: Self::State,
    expression: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_computed_property_name(
    &self,
    node: &ComputedPropertyName,
    expression: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_conditional_expression(
    &self,
    node: &ConditionalExpression,
    test: Self::State,
    consequent: Self::State,
    alternate: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_continue_statement(&self, node: &ContinueStatement)
    -> Result<Self::State, Self::Error>;

  fn reduce_data_property(
    &self,
    node: &DataProperty,
    name: Self::State,
    expression: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_debugger_statement(&self, node: &DebuggerStatement)
    -> Result<Self::State, Self::Error>;

  fn reduce_directive(&self, node: &Directive) -> Result<Self::State, Self::Error>;

  fn reduce_do_while_statement(
    &self,
    node: &DoWhileStatement,
    body: Self::State,
    test: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_empty_statement(&self, node: &EmptyStatement) -> Result<Self::State, Self::Error>;

  fn reduce_export(
    &self,
    node: &Export,
    declaration: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_export_all_from(&self, node: &ExportAllFrom) -> Result<Self::State, Self::Error>;

  fn reduce_export_default(
    &self,
    node: &ExportDefault,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_export_from(
    &self,
    node: &ExportFrom,
    named_exports: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_export_from_specifier(
    &self,
    node: &ExportFromSpecifier,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_export_local_specifier(
    &self,
    node: &ExportLocalSpecifier,
    name: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_export_locals(
    &self,
    node: &ExportLocals,
    named_exports: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_expression_statement(
    &self,
    node: &ExpressionStatement,
    expression: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_for_in_statement(
    &self,
    node: &ForInStatement,
    left: Self::State,
    right: Self::State,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_for_of_statement(
    &self,
    node: &ForOfStatement,
    left: Self::State,
    right: Self::State,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_for_statement(
    &self,
    node: &ForStatement,
    init: Option<Self::State>,
    test: Option<Self::State>,
    update: Option<Self::State>,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_formal_parameters(
    &self,
    node: &FormalParameters,
    items: Vec<Self::State>,
    rest: Option<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_function_body(
    &self,
    node: &FunctionBody,
    directives: Vec<Self::State>,
    statements: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_function_declaration(
    &self,
    node: &FunctionDeclaration,
    name: Self::State,
    params: Self::State,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_function_expression(
    &self,
    node: &FunctionExpression,
    name: Option<Self::State>,
    params: Self::State,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_getter(
    &self,
    node: &Getter,
    name: Self::State,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_identifier_expression(
    &self,
    node: &IdentifierExpression,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_if_statement(
    &self,
    node: &IfStatement,
    test: Self::State,
    consequent: Self::State,
    alternate: Option<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_import(
    &self,
    node: &Import,
    default_binding: Option<Self::State>,
    named_imports: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_import_namespace(
    &self,
    node: &ImportNamespace,
    default_binding: Option<Self::State>,
    namespace_binding: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_import_specifier(
    &self,
    node: &ImportSpecifier,
    binding: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_labeled_statement(
    &self,
    node: &LabeledStatement,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_literal_boolean_expression(
    &self,
    node: &LiteralBooleanExpression,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_literal_infinity_expression(
    &self,
    node: &LiteralInfinityExpression,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_literal_null_expression(
    &self,
    node: &LiteralNullExpression,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_literal_numeric_expression(
    &self,
    node: &LiteralNumericExpression,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_literal_reg_exp_expression(
    &self,
    node: &LiteralRegExpExpression,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_literal_string_expression(
    &self,
    node: &LiteralStringExpression,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_method(
    &self,
    node: &Method,
    name: Self::State,
    params: Self::State,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_module(
    &self,
    node: &Module,
    directives: Vec<Self::State>,
    items: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_new_expression(
    &self,
    node: &NewExpression,
    callee: Self::State,
    arguments: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_new_target_expression(
    &self,
    node: &NewTargetExpression,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_object_assignment_target(
    &self,
    node: &ObjectAssignmentTarget,
    properties: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_object_binding(
    &self,
    node: &ObjectBinding,
    properties: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_object_expression(
    &self,
    node: &ObjectExpression,
    properties: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_return_statement(
    &self,
    node: &ReturnStatement,
    expression: Option<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_script(
    &self,
    node: &Script,
    directives: Vec<Self::State>,
    statements: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_setter(
    &self,
    node: &Setter,
    name: Self::State,
    param: Self::State,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_shorthand_property(
    &self,
    node: &ShorthandProperty,
    name: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_spread_element(
    &self,
    node: &SpreadElement,
    expression: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_static_member_assignment_target(
    &self,
    node: &StaticMemberAssignmentTarget,
    object: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_static_member_expression(
    &self,
    node: &StaticMemberExpression,
    object: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_static_property_name(
    &self,
    node: &StaticPropertyName,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_super(&self, node: &Super) -> Result<Self::State, Self::Error>;

  fn reduce_switch_case(
    &self,
    node: &SwitchCase,
    test: Self::State,
    consequent: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_switch_default(
    &self,
    node: &SwitchDefault,
    consequent: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_switch_statement(
    &self,
    node: &SwitchStatement,
    discriminant: Self::State,
    cases: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_switch_statement_with_default(
    &self,
    node: &SwitchStatementWithDefault,
    discriminant: Self::State,
    pre_default_cases: Vec<Self::State>,
    default_case: Self::State,
    post_default_cases: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_template_element(&self, node: &TemplateElement) -> Result<Self::State, Self::Error>;

  fn reduce_template_expression(
    &self,
    node: &TemplateExpression,
    tag: Option<Self::State>,
    elements: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_this_expression(&self, node: &ThisExpression) -> Result<Self::State, Self::Error>;

  fn reduce_throw_statement(
    &self,
    node: &ThrowStatement,
    expression: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_try_catch_statement(
    &self,
    node: &TryCatchStatement,
    body: Self::State,
    catch_clause: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_try_finally_statement(
    &self,
    node: &TryFinallyStatement,
    body: Self::State,
    catch_clause: Option<Self::State>,
    finalizer: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_unary_expression(
    &self,
    node: &UnaryExpression,
    operand: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_update_expression(
    &self,
    node: &UpdateExpression,
    operand: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_variable_declaration(
    &self,
    node: &VariableDeclaration,
    declarators: Vec<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_variable_declaration_statement(
    &self,
    node: &VariableDeclarationStatement,
    declaration: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_variable_declarator(
    &self,
    node: &VariableDeclarator,
    binding: Self::State,
    init: Option<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_while_statement(
    &self,
    node: &WhileStatement,
    test: Self::State,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_with_statement(
    &self,
    node: &WithStatement,
    object: Self::State,
    body: Self::State,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_yield_expression(
    &self,
    node: &YieldExpression,
    expression: Option<Self::State>,
  ) -> Result<Self::State, Self::Error>;

  fn reduce_yield_generator_expression(
    &self,
    node: &YieldGeneratorExpression,
    expression: Self::State,
  ) -> Result<Self::State, Self::Error>;
}

pub fn reduce_program<R: Reducer>(reducer: &R, program: &Program) -> Result<R::State, R::Error> {
  match program {
    Program::Module(module) => reduce_module(reducer, module),
    Program::Script(script) => reduce_script(reducer, script),
  }
}

pub fn reduce_script<R: Reducer>(reducer: &R, script: &Script) -> Result<R::State, R::Error> {
  Director { reducer }.script(script)
}

pub fn reduce_module<R: Reducer>(reducer: &R, module: &Module) -> Result<R::State, R::Error> {
  Director { reducer }.module(module)
}

/// Reduces a single expression; useful for printing fragments.
pub fn reduce_expression<R: Reducer>(
  reducer: &R,
  expression: &Expression,
) -> Result<R::State, R::Error> {
  Director { reducer }.expression(expression)
}

pub fn reduce_statement<R: Reducer>(
  reducer: &R,
  statement: &Statement,
) -> Result<R::State, R::Error> {
  Director { reducer }.statement(statement)
}

struct Director<'r, R> {
  reducer: &'r R,
}

type Reduced<R> = Result<<R as Reducer>::State, <R as Reducer>::Error>;

impl<R: Reducer> Director<'_, R> {
  fn list<T>(&self, items: &[T], f: impl Fn(&Self, &T) -> Reduced<R>) -> Result<Vec<R::State>, R::Error> {
    items.iter().map(|item| f(self, item)).collect()
  }

  fn holes<T>(
    &self,
    items: &[Option<T>],
    f: impl Fn(&Self, &T) -> Reduced<R>,
  ) -> Result<Vec<Option<R::State>>, R::Error> {
    items
      .iter()
      .map(|item| item.as_ref().map(|item| f(self, item)).transpose())
      .collect()
  }

  fn opt_expression(&self, expr: Option<&Expression>) -> Result<Option<R::State>, R::Error> {
    expr.map(|expr| self.expression(expr)).transpose()
  }

  fn script(&self, node: &Script) -> Reduced<R> {
    let directives = self.list(&node.directives, |d, n| d.reducer.reduce_directive(n))?;
    let statements = self.list(&node.statements, Self::statement)?;
    self.reducer.reduce_script(node, directives, statements)
  }

  fn module(&self, node: &Module) -> Reduced<R> {
    let directives = self.list(&node.directives, |d, n| d.reducer.reduce_directive(n))?;
    let items = self.list(&node.items, Self::module_item)?;
    self.reducer.reduce_module(node, directives, items)
  }

  fn module_item(&self, item: &ModuleItem) -> Reduced<R> {
    match item {
      ModuleItem::ImportDeclaration(import) => self.import_declaration(import),
      ModuleItem::ExportDeclaration(export) => self.export_declaration(export),
      ModuleItem::Statement(statement) => self.statement(statement),
    }
  }

  fn import_declaration(&self, node: &ImportDeclaration) -> Reduced<R> {
    let r = self.reducer;
    match node {
      ImportDeclaration::Import(n) => {
        let default_binding = n
          .default_binding
          .as_ref()
          .map(|b| r.reduce_binding_identifier(b))
          .transpose()?;
        let named_imports = self.list(&n.named_imports, |d, s| {
          let binding = d.reducer.reduce_binding_identifier(&s.binding)?;
          d.reducer.reduce_import_specifier(s, binding)
        })?;
        r.reduce_import(n, default_binding, named_imports)
      }
      ImportDeclaration::ImportNamespace(n) => {
        let default_binding = n
          .default_binding
          .as_ref()
          .map(|b| r.reduce_binding_identifier(b))
          .transpose()?;
        let namespace_binding = r.reduce_binding_identifier(&n.namespace_binding)?;
        r.reduce_import_namespace(n, default_binding, namespace_binding)
      }
    }
  }

  fn export_declaration(&self, node: &ExportDeclaration) -> Reduced<R> {
    let r = self.reducer;
    match node {
      ExportDeclaration::Export(n) => {
        let declaration = match &n.declaration {
          ExportableDeclaration::ClassDeclaration(c) => self.class_declaration(c)?,
          ExportableDeclaration::FunctionDeclaration(f) => self.function_declaration(f)?,
          ExportableDeclaration::VariableDeclaration(v) => self.variable_declaration(v)?,
        };
        r.reduce_export(n, declaration)
      }
      ExportDeclaration::ExportAllFrom(n) => r.reduce_export_all_from(n),
      ExportDeclaration::ExportDefault(n) => {
        let body = match &n.body {
          ExportDefaultBody::Expression(e) => self.expression(e)?,
          ExportDefaultBody::Declaration(ExportDefaultDeclaration::ClassDeclaration(c)) => {
            self.class_declaration(c)?
          }
          ExportDefaultBody::Declaration(ExportDefaultDeclaration::FunctionDeclaration(f)) => {
            self.function_declaration(f)?
          }
        };
        r.reduce_export_default(n, body)
      }
      ExportDeclaration::ExportFrom(n) => {
        let named_exports =
          self.list(&n.named_exports, |d, s| d.reducer.reduce_export_from_specifier(s))?;
        r.reduce_export_from(n, named_exports)
      }
      ExportDeclaration::ExportLocals(n) => {
        let named_exports = self.list(&n.named_exports, |d, s| {
          let name = d.reducer.reduce_identifier_expression(&s.name)?;
          d.reducer.reduce_export_local_specifier(s, name)
        })?;
        r.reduce_export_locals(n, named_exports)
      }
    }
  }

  fn statement(&self, node: &Statement) -> Reduced<R> {
    let r = self.reducer;
    match node {
      Statement::BlockStatement(n) => {
        let block = self.block(&n.block)?;
        r.reduce_block_statement(n, block)
      }
      Statement::BreakStatement(n) => r.reduce_break_statement(n),
      Statement::ClassDeclaration(n) => self.class_declaration(n),
      Statement::ContinueStatement(n) => r.reduce_continue_statement(n),
      Statement::DebuggerStatement(n) => r.reduce_debugger_statement(n),
      Statement::DoWhileStatement(n) => {
        let body = self.statement(&n.body)?;
        let test = self.expression(&n.test)?;
        r.reduce_do_while_statement(n, body, test)
      }
      Statement::EmptyStatement(n) => r.reduce_empty_statement(n),
      Statement::ExpressionStatement(n) => {
        let expression = self.expression(&n.expression)?;
        r.reduce_expression_statement(n, expression)
      }
      Statement::ForInStatement(n) => {
        let left = self.for_in_of_left(&n.left)?;
        let right = self.expression(&n.right)?;
        let body = self.statement(&n.body)?;
        r.reduce_for_in_statement(n, left, right, body)
      }
      Statement::ForOfStatement(n) => {
        let left = self.for_in_of_left(&n.left)?;
        let right = self.expression(&n.right)?;
        let body = self.statement(&n.body)?;
        r.reduce_for_of_statement(n, left, right, body)
      }
      Statement::ForStatement(n) => {
        let init = match &n.init {
          Some(ForInit::Expression(e)) => Some(self.expression(e)?),
          Some(ForInit::VariableDeclaration(v)) => Some(self.variable_declaration(v)?),
          None => None,
        };
        let test = self.opt_expression(n.test.as_deref())?;
        let update = self.opt_expression(n.update.as_deref())?;
        let body = self.statement(&n.body)?;
        r.reduce_for_statement(n, init, test, update, body)
      }
      Statement::FunctionDeclaration(n) => self.function_declaration(n),
      Statement::IfStatement(n) => {
        let test = self.expression(&n.test)?;
        let consequent = self.statement(&n.consequent)?;
        let alternate = n
          .alternate
          .as_deref()
          .map(|s| self.statement(s))
          .transpose()?;
        r.reduce_if_statement(n, test, consequent, alternate)
      }
      Statement::LabeledStatement(n) => {
        let body = self.statement(&n.body)?;
        r.reduce_labeled_statement(n, body)
      }
      Statement::ReturnStatement(n) => {
        let expression = self.opt_expression(n.expression.as_deref())?;
        r.reduce_return_statement(n, expression)
      }
      Statement::SwitchStatement(n) => {
        let discriminant = self.expression(&n.discriminant)?;
        let cases = self.list(&n.cases, Self::switch_case)?;
        r.reduce_switch_statement(n, discriminant, cases)
      }
      Statement::SwitchStatementWithDefault(n) => {
        let discriminant = self.expression(&n.discriminant)?;
        let pre_default_cases = self.list(&n.pre_default_cases, Self::switch_case)?;
        let consequent = self.list(&n.default_case.consequent, Self::statement)?;
        let default_case = r.reduce_switch_default(&n.default_case, consequent)?;
        let post_default_cases = self.list(&n.post_default_cases, Self::switch_case)?;
        r.reduce_switch_statement_with_default(
          n,
          discriminant,
          pre_default_cases,
          default_case,
          post_default_cases,
        )
      }
      Statement::ThrowStatement(n) => {
        let expression = self.expression(&n.expression)?;
        r.reduce_throw_statement(n, expression)
      }
      Statement::TryCatchStatement(n) => {
        let body = self.block(&n.body)?;
        let catch_clause = self.catch_clause(&n.catch_clause)?;
        r.reduce_try_catch_statement(n, body, catch_clause)
      }
      Statement::TryFinallyStatement(n) => {
        let body = self.block(&n.body)?;
        let catch_clause = n
          .catch_clause
          .as_ref()
          .map(|c| self.catch_clause(c))
          .transpose()?;
        let finalizer = self.block(&n.finalizer)?;
        r.reduce_try_finally_statement(n, body, catch_clause, finalizer)
      }
      Statement::VariableDeclarationStatement(n) => {
        let declaration = self.variable_declaration(&n.declaration)?;
        r.reduce_variable_declaration_statement(n, declaration)
      }
      Statement::WhileStatement(n) => {
        let test = self.expression(&n.test)?;
        let body = self.statement(&n.body)?;
        r.reduce_while_statement(n, test, body)
      }
      Statement::WithStatement(n) => {
        let object = self.expression(&n.object)?;
        let body = self.statement(&n.body)?;
        r.reduce_with_statement(n, object, body)
      }
    }
  }

  fn block(&self, node: &Block) -> Reduced<R> {
    let statements = self.list(&node.statements, Self::statement)?;
    self.reducer.reduce_block(node, statements)
  }

  fn catch_clause(&self, node: &CatchClause) -> Reduced<R> {
    let binding = self.binding(&node.binding)?;
    let body = self.block(&node.body)?;
    self.reducer.reduce_catch_clause(node, binding, body)
  }

  fn switch_case(&self, node: &SwitchCase) -> Reduced<R> {
    let test = self.expression(&node.test)?;
    let consequent = self.list(&node.consequent, Self::statement)?;
    self.reducer.reduce_switch_case(node, test, consequent)
  }

  fn for_in_of_left(&self, node: &ForInOfLeft) -> Reduced<R> {
    match node {
      ForInOfLeft::AssignmentTarget(target) => self.assignment_target(target),
      ForInOfLeft::VariableDeclaration(declaration) => self.variable_declaration(declaration),
    }
  }

  fn variable_declaration(&self, node: &VariableDeclaration) -> Reduced<R> {
    let declarators = self.list(&node.declarators, |d, n| {
      let binding = d.binding(&n.binding)?;
      let init = d.opt_expression(n.init.as_deref())?;
      d.reducer.reduce_variable_declarator(n, binding, init)
    })?;
    self.reducer.reduce_variable_declaration(node, declarators)
  }

  fn class_declaration(&self, node: &ClassDeclaration) -> Reduced<R> {
    let name = self.reducer.reduce_binding_identifier(&node.name)?;
    let super_class = self.opt_expression(node.super_class.as_deref())?;
    let elements = self.list(&node.elements, Self::class_element)?;
    self
      .reducer
      .reduce_class_declaration(node, name, super_class, elements)
  }

  fn class_element(&self, node: &ClassElement) -> Reduced<R> {
    let method = self.method_definition(&node.method)?;
    self.reducer.reduce_class_element(node, method)
  }

  fn function_declaration(&self, node: &FunctionDeclaration) -> Reduced<R> {
    let name = self.reducer.reduce_binding_identifier(&node.name)?;
    let params = self.formal_parameters(&node.params)?;
    let body = self.function_body(&node.body)?;
    self
      .reducer
      .reduce_function_declaration(node, name, params, body)
  }

  fn formal_parameters(&self, node: &FormalParameters) -> Reduced<R> {
    let items = self.list(&node.items, Self::parameter)?;
    let rest = node.rest.as_deref().map(|b| self.binding(b)).transpose()?;
    self.reducer.reduce_formal_parameters(node, items, rest)
  }

  fn function_body(&self, node: &FunctionBody) -> Reduced<R> {
    let directives = self.list(&node.directives, |d, n| d.reducer.reduce_directive(n))?;
    let statements = self.list(&node.statements, Self::statement)?;
    self
      .reducer
      .reduce_function_body(node, directives, statements)
  }

  fn method_definition(&self, node: &MethodDefinition) -> Reduced<R> {
    match node {
      MethodDefinition::Getter(n) => self.getter(n),
      MethodDefinition::Method(n) => self.method(n),
      MethodDefinition::Setter(n) => self.setter(n),
    }
  }

  fn getter(&self, node: &Getter) -> Reduced<R> {
    let name = self.property_name(&node.name)?;
    let body = self.function_body(&node.body)?;
    self.reducer.reduce_getter(node, name, body)
  }

  fn setter(&self, node: &Setter) -> Reduced<R> {
    let name = self.property_name(&node.name)?;
    let param = self.parameter(&node.param)?;
    let body = self.function_body(&node.body)?;
    self.reducer.reduce_setter(node, name, param, body)
  }

  fn method(&self, node: &Method) -> Reduced<R> {
    let name = self.property_name(&node.name)?;
    let params = self.formal_parameters(&node.params)?;
    let body = self.function_body(&node.body)?;
    self.reducer.reduce_method(node, name, params, body)
  }

  fn property_name(&self, node: &PropertyName) -> Reduced<R> {
    match node {
      PropertyName::ComputedPropertyName(n) => {
        let expression = self.expression(&n.expression)?;
        self.reducer.reduce_computed_property_name(n, expression)
      }
      PropertyName::StaticPropertyName(n) => self.reducer.reduce_static_property_name(n),
    }
  }

  fn object_property(&self, node: &ObjectProperty) -> Reduced<R> {
    match node {
      ObjectProperty::DataProperty(n) => {
        let name = self.property_name(&n.name)?;
        let expression = self.expression(&n.expression)?;
        self.reducer.reduce_data_property(n, name, expression)
      }
      ObjectProperty::Getter(n) => self.getter(n),
      ObjectProperty::Method(n) => self.method(n),
      ObjectProperty::Setter(n) => self.setter(n),
      ObjectProperty::ShorthandProperty(n) => {
        let name = self.reducer.reduce_identifier_expression(&n.name)?;
        self.reducer.reduce_shorthand_property(n, name)
      }
    }
  }

  fn binding(&self, node: &Binding) -> Reduced<R> {
    match node {
      Binding::ArrayBinding(n) => self.array_binding(n),
      Binding::BindingIdentifier(n) => self.reducer.reduce_binding_identifier(n),
      Binding::ObjectBinding(n) => self.object_binding(n),
    }
  }

  fn parameter(&self, node: &Parameter) -> Reduced<R> {
    match node {
      Parameter::ArrayBinding(n) => self.array_binding(n),
      Parameter::BindingIdentifier(n) => self.reducer.reduce_binding_identifier(n),
      Parameter::BindingWithDefault(n) => {
        let binding = self.binding(&n.binding)?;
        let init = self.expression(&n.init)?;
        self.reducer.reduce_binding_with_default(n, binding, init)
      }
      Parameter::ObjectBinding(n) => self.object_binding(n),
    }
  }

  fn array_binding(&self, node: &ArrayBinding) -> Reduced<R> {
    let elements = self.holes(&node.elements, Self::parameter)?;
    let rest = node.rest.as_deref().map(|b| self.binding(b)).transpose()?;
    self.reducer.reduce_array_binding(node, elements, rest)
  }

  fn object_binding(&self, node: &ObjectBinding) -> Reduced<R> {
    let properties = self.list(&node.properties, |d, p| match p {
      BindingProperty::BindingPropertyIdentifier(n) => {
        let binding = d.reducer.reduce_binding_identifier(&n.binding)?;
        let init = d.opt_expression(n.init.as_deref())?;
        d.reducer.reduce_binding_property_identifier(n, binding, init)
      }
      BindingProperty::BindingPropertyProperty(n) => {
        let name = d.property_name(&n.name)?;
        let binding = d.parameter(&n.binding)?;
        d.reducer.reduce_binding_property_property(n, name, binding)
      }
    })?;
    self.reducer.reduce_object_binding(node, properties)
  }

  fn assignment_target(&self, node: &AssignmentTarget) -> Reduced<R> {
    match node {
      AssignmentTarget::ArrayAssignmentTarget(n) => self.array_assignment_target(n),
      AssignmentTarget::AssignmentTargetIdentifier(n) => {
        self.reducer.reduce_assignment_target_identifier(n)
      }
      AssignmentTarget::ComputedMemberAssignmentTarget(n) => {
        self.computed_member_assignment_target(n)
      }
      AssignmentTarget::ObjectAssignmentTarget(n) => self.object_assignment_target(n),
      AssignmentTarget::StaticMemberAssignmentTarget(n) => self.static_member_assignment_target(n),
    }
  }

  fn simple_assignment_target(&self, node: &SimpleAssignmentTarget) -> Reduced<R> {
    match node {
      SimpleAssignmentTarget::AssignmentTargetIdentifier(n) => {
        self.reducer.reduce_assignment_target_identifier(n)
      }
      SimpleAssignmentTarget::ComputedMemberAssignmentTarget(n) => {
        self.computed_member_assignment_target(n)
      }
      SimpleAssignmentTarget::StaticMemberAssignmentTarget(n) => {
        self.static_member_assignment_target(n)
      }
    }
  }

  fn assignment_target_maybe_default(&self, node: &AssignmentTargetMaybeDefault) -> Reduced<R> {
    match node {
      AssignmentTargetMaybeDefault::ArrayAssignmentTarget(n) => self.array_assignment_target(n),
      AssignmentTargetMaybeDefault::AssignmentTargetIdentifier(n) => {
        self.reducer.reduce_assignment_target_identifier(n)
      }
      AssignmentTargetMaybeDefault::AssignmentTargetWithDefault(n) => {
        let binding = self.assignment_target(&n.binding)?;
        let init = self.expression(&n.init)?;
        self
          .reducer
          .reduce_assignment_target_with_default(n, binding, init)
      }
      AssignmentTargetMaybeDefault::ComputedMemberAssignmentTarget(n) => {
        self.computed_member_assignment_target(n)
      }
      AssignmentTargetMaybeDefault::ObjectAssignmentTarget(n) => self.object_assignment_target(n),
      AssignmentTargetMaybeDefault::StaticMemberAssignmentTarget(n) => {
        self.static_member_assignment_target(n)
      }
    }
  }

  fn array_assignment_target(&self, node: &ArrayAssignmentTarget) -> Reduced<R> {
    let elements = self.holes(&node.elements, Self::assignment_target_maybe_default)?;
    let rest = node
      .rest
      .as_deref()
      .map(|t| self.assignment_target(t))
      .transpose()?;
    self
      .reducer
      .reduce_array_assignment_target(node, elements, rest)
  }

  fn object_assignment_target(&self, node: &ObjectAssignmentTarget) -> Reduced<R> {
    let properties = self.list(&node.properties, |d, p| match p {
      AssignmentTargetProperty::AssignmentTargetPropertyIdentifier(n) => {
        let binding = d.reducer.reduce_assignment_target_identifier(&n.binding)?;
        let init = d.opt_expression(n.init.as_deref())?;
        d.reducer
          .reduce_assignment_target_property_identifier(n, binding, init)
      }
      AssignmentTargetProperty::AssignmentTargetPropertyProperty(n) => {
        let name = d.property_name(&n.name)?;
        let binding = d.assignment_target_maybe_default(&n.binding)?;
        d.reducer
          .reduce_assignment_target_property_property(n, name, binding)
      }
    })?;
    self
      .reducer
      .reduce_object_assignment_target(node, properties)
  }

  fn static_member_assignment_target(&self, node: &StaticMemberAssignmentTarget) -> Reduced<R> {
    let object = self.expression_or_super(&node.object)?;
    self
      .reducer
      .reduce_static_member_assignment_target(node, object)
  }

  fn computed_member_assignment_target(
    &self,
    node: &ComputedMemberAssignmentTarget,
  ) -> Reduced<R> {
    let object = self.expression_or_super(&node.object)?;
    let expression = self.expression(&node.expression)?;
    self
      .reducer
      .reduce_computed_member_assignment_target(node, object, expression)
  }

  fn expression_or_super(&self, node: &ExpressionOrSuper) -> Reduced<R> {
    match node {
      ExpressionOrSuper::Expression(e) => self.expression(e),
      ExpressionOrSuper::Super(s) => self.reducer.reduce_super(s),
    }
  }

  fn spread_or_expression(&self, node: &SpreadOrExpression) -> Reduced<R> {
    match node {
      SpreadOrExpression::Expression(e) => self.expression(e),
      SpreadOrExpression::SpreadElement(s) => {
        let expression = self.expression(&s.expression)?;
        self.reducer.reduce_spread_element(s, expression)
      }
    }
  }

  fn expression(&self, node: &Expression) -> Reduced<R> {
    let r = self.reducer;
    match node {
      Expression::ArrayExpression(n) => {
        let elements = self.holes(&n.elements, Self::spread_or_expression)?;
        r.reduce_array_expression(n, elements)
      }
      Expression::ArrowExpression(n) => {
        let params = self.formal_parameters(&n.params)?;
        let body = match &n.body {
          ArrowBody::Expression(e) => self.expression(e)?,
          ArrowBody::FunctionBody(b) => self.function_body(b)?,
        };
        r.reduce_arrow_expression(n, params, body)
      }
      Expression::AssignmentExpression(n) => {
        let binding = self.assignment_target(&n.binding)?;
        let expression = self.expression(&n.expression)?;
        r.reduce_assignment_expression(n, binding, expression)
      }
      Expression::AwaitExpression(n) => {
        let expression = self.expression(&n.expression)?;
        r.reduce_await_expression(n, expression)
      }
      Expression::BinaryExpression(n) => {
        let left = self.expression(&n.left)?;
        let right = self.expression(&n.right)?;
        r.reduce_binary_expression(n, left, right)
      }
      Expression::CallExpression(n) => {
        let callee = self.expression_or_super(&n.callee)?;
        let arguments = self.list(&n.arguments, Self::spread_or_expression)?;
        r.reduce_call_expression(n, callee, arguments)
      }
      Expression::ClassExpression(n) => {
        let name = n
          .name
          .as_ref()
          .map(|b| r.reduce_binding_identifier(b))
          .transpose()?;
        let super_class = self.opt_expression(n.super_class.as_deref())?;
        let elements = self.list(&n.elements, Self::class_element)?;
        r.reduce_class_expression(n, name, super_class, elements)
      }
      Expression::CompoundAssignmentExpression(n) => {
        let binding = self.simple_assignment_target(&n.binding)?;
        let expression = self.expression(&n.expression)?;
        r.reduce_compound_assignment_expression(n, binding, expression)
      }
      Expression::ComputedMemberExpression(n) => {
        let object = self.expression_or_super(&n.object)?;
        let expression = self.expression(&n.expression)?;
        r.reduce_computed_member_expression(n, object, expression)
      }
      Expression::ConditionalExpression(n) => {
        let test = self.expression(&n.test)?;
        let consequent = self.expression(&n.consequent)?;
        let alternate = self.expression(&n.alternate)?;
        r.reduce_conditional_expression(n, test, consequent, alternate)
      }
      Expression::FunctionExpression(n) => {
        let name = n
          .name
          .as_ref()
          .map(|b| r.reduce_binding_identifier(b))
          .transpose()?;
        let params = self.formal_parameters(&n.params)?;
        let body = self.function_body(&n.body)?;
        r.reduce_function_expression(n, name, params, body)
      }
      Expression::IdentifierExpression(n) => r.reduce_identifier_expression(n),
      Expression::LiteralBooleanExpression(n) => r.reduce_literal_boolean_expression(n),
      Expression::LiteralInfinityExpression(n) => r.reduce_literal_infinity_expression(n),
      Expression::LiteralNullExpression(n) => r.reduce_literal_null_expression(n),
      Expression::LiteralNumericExpression(n) => r.reduce_literal_numeric_expression(n),
      Expression::LiteralRegExpExpression(n) => r.reduce_literal_reg_exp_expression(n),
      Expression::LiteralStringExpression(n) => r.reduce_literal_string_expression(n),
      Expression::NewExpression(n) => {
        let callee = self.expression(&n.callee)?;
        let arguments = self.list(&n.arguments, Self::spread_or_expression)?;
        r.reduce_new_expression(n, callee, arguments)
      }
      Expression::NewTargetExpression(n) => r.reduce_new_target_expression(n),
      Expression::ObjectExpression(n) => {
        let properties = self.list(&n.properties, Self::object_property)?;
        r.reduce_object_expression(n, properties)
      }
      Expression::StaticMemberExpression(n) => {
        let object = self.expression_or_super(&n.object)?;
        r.reduce_static_member_expression(n, object)
      }
      Expression::TemplateExpression(n) => {
        let tag = self.opt_expression(n.tag.as_deref())?;
        let elements = self.list(&n.elements, |d, part| match part {
          TemplatePart::Expression(e) => d.expression(e),
          TemplatePart::TemplateElement(t) => d.reducer.reduce_template_element(t),
        })?;
        r.reduce_template_expression(n, tag, elements)
      }
      Expression::ThisExpression(n) => r.reduce_this_expression(n),
      Expression::UnaryExpression(n) => {
        let operand = self.expression(&n.operand)?;
        r.reduce_unary_expression(n, operand)
      }
      Expression::UpdateExpression(n) => {
        let operand = self.simple_assignment_target(&n.operand)?;
        r.reduce_update_expression(n, operand)
      }
      Expression::YieldExpression(n) => {
        let expression = self.opt_expression(n.expression.as_deref())?;
        r.reduce_yield_expression(n, expression)
      }
      Expression::YieldGeneratorExpression(n) => {
        let expression = self.expression(&n.expression)?;
        r.reduce_yield_generator_expression(n, expression)
      }
    }
  }
}
