use derive_more::derive::From;
use serde::{Deserialize, Serialize};

use super::class_or_object::PropertyName;
use super::expr::{Expression, ExpressionOrSuper};

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Binding {
  ArrayBinding(ArrayBinding),
  BindingIdentifier(BindingIdentifier),
  ObjectBinding(ObjectBinding),
}

/// A binding that may carry a default initializer, as found in parameter lists and array patterns.
#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Parameter {
  ArrayBinding(ArrayBinding),
  BindingIdentifier(BindingIdentifier),
  BindingWithDefault(BindingWithDefault),
  ObjectBinding(ObjectBinding),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BindingIdentifier {
  pub name: String,
}

impl BindingIdentifier {
  pub fn new(name: impl Into<String>) -> Self {
    BindingIdentifier { name: name.into() }
  }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BindingWithDefault {
  pub binding: Binding,
  pub init: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ArrayBinding {
  pub elements: Vec<Option<Parameter>>,
  pub rest: Option<Box<Binding>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ObjectBinding {
  pub properties: Vec<BindingProperty>,
}

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum BindingProperty {
  BindingPropertyIdentifier(BindingPropertyIdentifier),
  BindingPropertyProperty(BindingPropertyProperty),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BindingPropertyIdentifier {
  pub binding: BindingIdentifier,
  pub init: Option<Box<Expression>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BindingPropertyProperty {
  pub name: PropertyName,
  pub binding: Parameter,
}

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AssignmentTarget {
  ArrayAssignmentTarget(ArrayAssignmentTarget),
  AssignmentTargetIdentifier(AssignmentTargetIdentifier),
  ComputedMemberAssignmentTarget(ComputedMemberAssignmentTarget),
  ObjectAssignmentTarget(ObjectAssignmentTarget),
  StaticMemberAssignmentTarget(StaticMemberAssignmentTarget),
}

/// The operand of an update or compound assignment.
#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SimpleAssignmentTarget {
  AssignmentTargetIdentifier(AssignmentTargetIdentifier),
  ComputedMemberAssignmentTarget(ComputedMemberAssignmentTarget),
  StaticMemberAssignmentTarget(StaticMemberAssignmentTarget),
}

/// An assignment target that may carry a default, as found in destructuring assignment patterns.
#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AssignmentTargetMaybeDefault {
  ArrayAssignmentTarget(ArrayAssignmentTarget),
  AssignmentTargetIdentifier(AssignmentTargetIdentifier),
  AssignmentTargetWithDefault(AssignmentTargetWithDefault),
  ComputedMemberAssignmentTarget(ComputedMemberAssignmentTarget),
  ObjectAssignmentTarget(ObjectAssignmentTarget),
  StaticMemberAssignmentTarget(StaticMemberAssignmentTarget),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AssignmentTargetIdentifier {
  pub name: String,
}

impl AssignmentTargetIdentifier {
  pub fn new(name: impl Into<String>) -> Self {
    AssignmentTargetIdentifier { name: name.into() }
  }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StaticMemberAssignmentTarget {
  pub object: Box<ExpressionOrSuper>,
  pub property: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ComputedMemberAssignmentTarget {
  pub object: Box<ExpressionOrSuper>,
  pub expression: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AssignmentTargetWithDefault {
  pub binding: AssignmentTarget,
  pub init: Box<Expression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ArrayAssignmentTarget {
  pub elements: Vec<Option<AssignmentTargetMaybeDefault>>,
  pub rest: Option<Box<AssignmentTarget>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ObjectAssignmentTarget {
  pub properties: Vec<AssignmentTargetProperty>,
}

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AssignmentTargetProperty {
  AssignmentTargetPropertyIdentifier(AssignmentTargetPropertyIdentifier),
  AssignmentTargetPropertyProperty(AssignmentTargetPropertyProperty),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AssignmentTargetPropertyIdentifier {
  pub binding: AssignmentTargetIdentifier,
  pub init: Option<Box<Expression>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AssignmentTargetPropertyProperty {
  pub name: PropertyName,
  pub binding: AssignmentTargetMaybeDefault,
}
