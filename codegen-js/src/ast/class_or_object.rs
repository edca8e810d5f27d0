use derive_more::derive::From;
use serde::{Deserialize, Serialize};

use super::expr::{Expression, IdentifierExpression};
use super::func::{FormalParameters, FunctionBody};
use super::pat::Parameter;

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum PropertyName {
  ComputedPropertyName(ComputedPropertyName),
  StaticPropertyName(StaticPropertyName),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ComputedPropertyName {
  pub expression: Box<Expression>,
}

/// A property key written as an identifier, string, or number; `value` is its string value.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StaticPropertyName {
  pub value: String,
}

impl StaticPropertyName {
  pub fn new(value: impl Into<String>) -> Self {
    StaticPropertyName {
      value: value.into(),
    }
  }
}

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ObjectProperty {
  DataProperty(DataProperty),
  Getter(Getter),
  Method(Method),
  Setter(Setter),
  ShorthandProperty(ShorthandProperty),
}

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum MethodDefinition {
  Getter(Getter),
  Method(Method),
  Setter(Setter),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DataProperty {
  pub name: PropertyName,
  pub expression: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ShorthandProperty {
  pub name: IdentifierExpression,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Getter {
  pub name: PropertyName,
  pub body: FunctionBody,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Setter {
  pub name: PropertyName,
  pub param: Parameter,
  pub body: FunctionBody,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
  pub is_async: bool,
  pub is_generator: bool,
  pub name: PropertyName,
  pub params: FormalParameters,
  pub body: FunctionBody,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassElement {
  pub is_static: bool,
  pub method: MethodDefinition,
}
