use derive_more::derive::From;
use serde::{Deserialize, Serialize};

use super::expr::Expression;
use super::pat::{Binding, Parameter};
use super::stmt::Statement;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FormalParameters {
  pub items: Vec<Parameter>,
  pub rest: Option<Box<Binding>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FunctionBody {
  pub directives: Vec<Directive>,
  pub statements: Vec<Statement>,
}

// Raw text between the quotes; escapes are kept exactly as written.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Directive {
  pub raw_value: String,
}

impl Directive {
  pub fn new(raw_value: impl Into<String>) -> Self {
    Directive {
      raw_value: raw_value.into(),
    }
  }
}

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArrowBody {
  Expression(Box<Expression>),
  FunctionBody(FunctionBody),
}
