pub mod class_or_object;
pub mod expr;
pub mod func;
pub mod import_export;
pub mod pat;
pub mod stmt;

use derive_more::derive::From;
use func::Directive;
use import_export::{ExportDeclaration, ImportDeclaration};
use serde::{Deserialize, Serialize};
use stmt::Statement;

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Program {
  Module(Module),
  Script(Script),
}

impl Program {
  /// Reads a tree in the Shift JSON interchange shape (`{"type": "Script", ...}`).
  pub fn from_json(text: &str) -> Result<Program, serde_json::Error> {
    serde_json::from_str(text)
  }

  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string(self)
  }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Script {
  pub directives: Vec<Directive>,
  pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Module {
  pub directives: Vec<Directive>,
  pub items: Vec<ModuleItem>,
}

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleItem {
  ImportDeclaration(ImportDeclaration),
  ExportDeclaration(ExportDeclaration),
  Statement(Statement),
}
