mod common;

use codegen_js::ast::expr::{ClassExpression, Expression, IdentifierExpression};
use codegen_js::ast::func::{Directive, FormalParameters, FunctionBody};
use codegen_js::ast::import_export::{
  Export, ExportAllFrom, ExportDeclaration, ExportDefault, ExportDefaultBody,
  ExportDefaultDeclaration, ExportFrom, ExportFromSpecifier, ExportLocalSpecifier, ExportLocals,
  Import, ImportNamespace, ImportSpecifier,
};
use codegen_js::ast::pat::BindingIdentifier;
use codegen_js::ast::stmt::{ClassDeclaration, FunctionDeclaration};
use codegen_js::ast::{Module, ModuleItem, Program};
use codegen_js::operator::VariableDeclarationKind;
use common::*;

fn print_module(items: Vec<ModuleItem>) -> String {
  codegen_js::generate(&module(items))
}

fn import(default: Option<&str>, named: Vec<ImportSpecifier>) -> ModuleItem {
  ModuleItem::from(codegen_js::ast::import_export::ImportDeclaration::from(Import {
    default_binding: default.map(BindingIdentifier::new),
    named_imports: named,
    module_specifier: "m".into(),
  }))
}

fn specifier(name: Option<&str>, binding: &str) -> ImportSpecifier {
  ImportSpecifier {
    name: name.map(String::from),
    binding: BindingIdentifier::new(binding),
  }
}

fn export(declaration: impl Into<ExportDeclaration>) -> ModuleItem {
  ModuleItem::from(declaration.into())
}

fn function_named(name: &str) -> FunctionDeclaration {
  FunctionDeclaration {
    is_async: false,
    is_generator: false,
    name: BindingIdentifier::new(name),
    params: FormalParameters::default(),
    body: FunctionBody::default(),
  }
}

fn statement(expression: Expression) -> ModuleItem {
  expr_stmt(expression).into()
}

#[test]
fn test_imports() {
  assert_source(&print_module(vec![import(None, vec![])]), "import\"m\"");
  assert_source(
    &print_module(vec![import(Some("a"), vec![])]),
    "import a from\"m\"",
  );
  assert_source(
    &print_module(vec![import(None, vec![specifier(None, "b")])]),
    "import{b}from\"m\"",
  );
  assert_source(
    &print_module(vec![import(
      Some("a"),
      vec![specifier(None, "b"), specifier(None, "c")],
    )]),
    "import a,{b,c}from\"m\"",
  );
  assert_source(
    &print_module(vec![import(None, vec![specifier(Some("a"), "b")])]),
    "import{a as b}from\"m\"",
  );

  let namespace = |default: Option<&str>| {
    ModuleItem::from(codegen_js::ast::import_export::ImportDeclaration::from(ImportNamespace {
      default_binding: default.map(BindingIdentifier::new),
      namespace_binding: BindingIdentifier::new("b"),
      module_specifier: "m".into(),
    }))
  };
  assert_source(&print_module(vec![namespace(None)]), "import*as b from\"m\"");
  assert_source(&print_module(vec![namespace(Some("a"))]), "import a,*as b from\"m\"");
}

#[test]
fn test_exports() {
  let variables = Export {
    declaration: declaration(
      VariableDeclarationKind::Var,
      vec![("a", Some(num(0.0))), ("b", Some(num(0.0)))],
    )
    .into(),
  };
  assert_source(&print_module(vec![export(variables)]), "export var a=0,b=0");

  let function = Export {
    declaration: function_named("f").into(),
  };
  assert_source(
    &print_module(vec![export(function), statement(num(0.0))]),
    "export function f(){}0",
  );

  let class = Export {
    declaration: ClassDeclaration {
      name: BindingIdentifier::new("A"),
      super_class: None,
      elements: vec![],
    }
    .into(),
  };
  assert_source(&print_module(vec![export(class)]), "export class A{}");

  assert_source(
    &print_module(vec![export(ExportAllFrom {
      module_specifier: "m".into(),
    })]),
    "export*from\"m\"",
  );

  let from = |named_exports: Vec<ExportFromSpecifier>| {
    export(ExportFrom {
      named_exports,
      module_specifier: "m".into(),
    })
  };
  assert_source(&print_module(vec![from(vec![])]), "export{}from\"m\"");
  assert_source(
    &print_module(vec![from(vec![
      ExportFromSpecifier {
        name: "a".into(),
        exported_name: Some("b".into()),
      },
      ExportFromSpecifier {
        name: "c".into(),
        exported_name: None,
      },
    ])]),
    "export{a as b,c}from\"m\"",
  );

  let locals = ExportLocals {
    named_exports: vec![ExportLocalSpecifier {
      name: IdentifierExpression { name: "a".into() },
      exported_name: Some("b".into()),
    }],
  };
  let let_a = codegen_js::ast::stmt::VariableDeclarationStatement {
    declaration: declaration(VariableDeclarationKind::Let, vec![("a", None)]),
  };
  assert_source(
    &print_module(vec![
      codegen_js::ast::stmt::Statement::from(let_a).into(),
      export(locals),
    ]),
    "let a;export{a as b}",
  );
}

#[test]
fn test_export_default() {
  let default = |body: ExportDefaultBody| export(ExportDefault { body });

  let anonymous = ExportDefaultDeclaration::from(function_named("*default*"));
  assert_source(
    &print_module(vec![default(anonymous.into())]),
    "export default function(){}",
  );
  let named = ExportDefaultDeclaration::from(function_named("f"));
  assert_source(
    &print_module(vec![default(named.into())]),
    "export default function f(){}",
  );
  let anonymous_class = ExportDefaultDeclaration::from(ClassDeclaration {
    name: BindingIdentifier::new("*default*"),
    super_class: None,
    elements: vec![],
  });
  assert_source(
    &print_module(vec![default(anonymous_class.into())]),
    "export default class{}",
  );

  let expression = |e: Expression| ExportDefaultBody::from(Box::new(e));
  assert_source(
    &print_module(vec![default(expression(num(0.0))), statement(num(0.0))]),
    "export default 0;0",
  );
  let class_expression = ClassExpression {
    name: None,
    super_class: None,
    elements: vec![],
  };
  assert_source(
    &print_module(vec![default(expression(class_expression.into()))]),
    "export default(class{})",
  );
  assert_source(
    &print_module(vec![default(expression(function(None, vec![])))]),
    "export default(function(){})",
  );
  assert_source(
    &print_module(vec![default(expression(object(vec![])))]),
    "export default{}",
  );
  assert_source(
    &print_module(vec![default(expression(bin(
      num(0.0),
      codegen_js::operator::BinaryOperator::Sequence,
      num(1.0),
    )))]),
    "export default(0,1)",
  );
}

#[test]
fn test_module_directives_and_statements() {
  let program: Program = Module {
    directives: vec![Directive::new("use strict")],
    items: vec![statement(string("use strict"))],
  }
  .into();
  assert_source(&codegen_js::generate(&program), "\"use strict\";(\"use strict\")");
  assert_source(&print_module(vec![statement(string("a"))]), "(\"a\")");
  assert_source(&print_module(vec![]), "");
}
