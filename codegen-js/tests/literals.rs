mod common;

use codegen_js::ast::expr::{
  Expression, LiteralBooleanExpression, LiteralInfinityExpression, LiteralRegExpExpression,
  ThisExpression, UpdateExpression,
};
use codegen_js::ast::pat::{AssignmentTargetIdentifier, SimpleAssignmentTarget};
use codegen_js::operator::BinaryOperator::{Div, In, LessThan, Minus, Plus};
use codegen_js::operator::{UnaryOperator, UpdateOperator};
use common::*;

fn regexp(pattern: &str) -> LiteralRegExpExpression {
  LiteralRegExpExpression {
    pattern: pattern.into(),
    ..Default::default()
  }
}

fn prefix(operator: UpdateOperator, name: &str) -> Expression {
  UpdateExpression {
    is_prefix: true,
    operator,
    operand: SimpleAssignmentTarget::from(AssignmentTargetIdentifier::new(name)),
  }
  .into()
}

#[test]
fn test_keyword_literals() {
  assert_source(&print_expr(null()), "null");
  assert_source(&print_expr(LiteralBooleanExpression { value: true }.into()), "true");
  assert_source(&print_expr(LiteralBooleanExpression { value: false }.into()), "false");
  assert_source(&print_expr(ThisExpression {}.into()), "this");
  assert_source(&print_expr(LiteralInfinityExpression {}.into()), "2e308");
  assert_source(&print_expr(member(LiteralInfinityExpression {}.into(), "a")), "2e308.a");
}

#[test]
fn test_numbers() {
  assert_source(&print_expr(num(0.0)), "0");
  assert_source(&print_expr(num(0.1)), ".1");
  assert_source(&print_expr(num(1.5)), "1.5");
  assert_source(&print_expr(num(1000.0)), "1e3");
  assert_source(&print_expr(num(1010.0)), "1010");
  assert_source(&print_expr(num(1e17)), "1e17");
  assert_source(&print_expr(num(1e-7)), "1e-7");
  assert_source(&print_expr(num(1000000000000001.0)), "0x38D7EA4C68001");
  assert_source(&print_expr(unary(UnaryOperator::Minus, num(1.0))), "-1");
}

#[test]
fn test_member_access_on_numbers() {
  assert_source(&print_expr(member(num(1.0), "a")), "1..a");
  assert_source(&print_expr(member(num(1.5), "a")), "1.5.a");
  assert_source(&print_expr(member(num(0.1), "a")), ".1.a");
  assert_source(&print_expr(member(num(1000.0), "a")), "1e3.a");
  assert_source(&print_expr(member(num(1000000000000001.0), "a")), "0x38D7EA4C68001.a");
  assert_source(&print_expr(index(num(1.0), id("a"))), "1[a]");
}

#[test]
fn test_adjacent_operators() {
  assert_source(&print_expr(bin(id("a"), Plus, unary(UnaryOperator::Plus, id("b")))), "a+ +b");
  assert_source(&print_expr(bin(id("a"), Minus, unary(UnaryOperator::Minus, id("b")))), "a- -b");
  assert_source(&print_expr(bin(id("a"), Plus, unary(UnaryOperator::Minus, id("b")))), "a+-b");
  assert_source(&print_expr(bin(id("a"), Plus, prefix(UpdateOperator::Increment, "b"))), "a+ ++b");
  assert_source(&print_expr(bin(id("a"), Minus, prefix(UpdateOperator::Decrement, "b"))), "a- --b");
  assert_source(
    &print_expr(unary(UnaryOperator::Minus, unary(UnaryOperator::Minus, id("a")))),
    "- -a",
  );
  assert_source(&print_expr(unary(UnaryOperator::Typeof, id("a"))), "typeof a");
  assert_source(&print_expr(unary(UnaryOperator::Void, num(0.0))), "void 0");
  assert_source(&print_expr(unary(UnaryOperator::Delete, member(id("a"), "b"))), "delete a.b");
  assert_source(&print_expr(unary(UnaryOperator::LogicalNot, string("a"))), "!\"a\"");
}

#[test]
fn test_html_comment_open_is_broken() {
  let not_decrement = unary(UnaryOperator::LogicalNot, prefix(UpdateOperator::Decrement, "b"));
  assert_source(&print_expr(bin(id("a"), LessThan, not_decrement)), "a<! --b");
}

#[test]
fn test_regexps() {
  assert_source(&print_expr(regexp("a").into()), "/a/");
  let all_flags = LiteralRegExpExpression {
    pattern: "a".into(),
    global: true,
    ignore_case: true,
    multi_line: true,
    sticky: true,
    unicode: true,
  };
  assert_source(&print_expr(all_flags.into()), "/a/gimuy");
  assert_source(&print_expr(bin(regexp("a").into(), In, id("b"))), "/a/ in b");
  assert_source(&print_expr(bin(id("a"), Div, regexp("b").into())), "a/ /b/");
  assert_source(&print_expr(bin(id("a"), Div, id("b"))), "a/b");
}

#[test]
fn test_strings() {
  assert_source(&print_expr(string("")), "(\"\")");
  assert_source(&print_expr(string("'")), "(\"'\")");
  assert_source(&print_expr(string("\"")), "('\"')");
  assert_source(&print_expr(string("\"'\"")), "('\"\\'\"')");
  assert_source(&print_expr(string("a\nb\\")), "(\"a\\nb\\\\\")");
  assert_source(&print_expr(string("\u{2028}")), "(\"\\u2028\")");
  assert_source(&print_expr(string("φ")), "(\"φ\")");
  // Only a bare string statement could be read as a directive.
  assert_source(&print_expr(member(string("a"), "length")), "\"a\".length");
}
