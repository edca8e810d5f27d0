use derive_more::derive::From;
use serde::{Deserialize, Serialize};

use super::expr::{Expression, IdentifierExpression};
use super::pat::BindingIdentifier;
use super::stmt::{ClassDeclaration, FunctionDeclaration, VariableDeclaration};

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ImportDeclaration {
  Import(Import),
  ImportNamespace(ImportNamespace),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Import {
  pub default_binding: Option<BindingIdentifier>,
  pub named_imports: Vec<ImportSpecifier>,
  pub module_specifier: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportNamespace {
  pub default_binding: Option<BindingIdentifier>,
  pub namespace_binding: BindingIdentifier,
  pub module_specifier: String,
}

/// `name as binding`; `name` is absent for `import {binding}`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ImportSpecifier {
  pub name: Option<String>,
  pub binding: BindingIdentifier,
}

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ExportDeclaration {
  Export(Export),
  ExportAllFrom(ExportAllFrom),
  ExportDefault(ExportDefault),
  ExportFrom(ExportFrom),
  ExportLocals(ExportLocals),
}

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ExportableDeclaration {
  ClassDeclaration(ClassDeclaration),
  FunctionDeclaration(FunctionDeclaration),
  VariableDeclaration(VariableDeclaration),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Export {
  pub declaration: ExportableDeclaration,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAllFrom {
  pub module_specifier: String,
}

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportDefaultBody {
  Expression(Box<Expression>),
  Declaration(ExportDefaultDeclaration),
}

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ExportDefaultDeclaration {
  ClassDeclaration(ClassDeclaration),
  FunctionDeclaration(FunctionDeclaration),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ExportDefault {
  pub body: ExportDefaultBody,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFrom {
  pub named_exports: Vec<ExportFromSpecifier>,
  pub module_specifier: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFromSpecifier {
  pub name: String,
  pub exported_name: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLocals {
  pub named_exports: Vec<ExportLocalSpecifier>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLocalSpecifier {
  pub name: IdentifierExpression,
  pub exported_name: Option<String>,
}
