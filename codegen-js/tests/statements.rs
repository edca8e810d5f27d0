mod common;

use codegen_js::ast::expr::{
  ArrayExpression, AssignmentExpression, ComputedMemberExpression, Expression, ExpressionOrSuper,
  YieldExpression, YieldGeneratorExpression,
};
use codegen_js::ast::pat::{
  ArrayBinding, AssignmentTarget, AssignmentTargetIdentifier, Binding, BindingIdentifier,
  ComputedMemberAssignmentTarget, Parameter, StaticMemberAssignmentTarget,
};
use codegen_js::ast::stmt::{
  Block, BreakStatement, CatchClause, ContinueStatement, DebuggerStatement, DoWhileStatement,
  ForInOfLeft, ForInStatement, ForInit, ForOfStatement, ForStatement, LabeledStatement,
  ReturnStatement, Statement, SwitchCase, SwitchDefault, SwitchStatement,
  SwitchStatementWithDefault, ThrowStatement, TryCatchStatement, TryFinallyStatement,
  VariableDeclaration, VariableDeclarationStatement, VariableDeclarator, WithStatement,
};
use codegen_js::operator::BinaryOperator::*;
use codegen_js::operator::VariableDeclarationKind;
use common::*;

fn labeled(label: &str, body: Statement) -> Statement {
  LabeledStatement {
    label: label.into(),
    body: Box::new(body),
  }
  .into()
}

fn break_(label: Option<&str>) -> Statement {
  BreakStatement {
    label: label.map(String::from),
  }
  .into()
}

fn continue_(label: Option<&str>) -> Statement {
  ContinueStatement {
    label: label.map(String::from),
  }
  .into()
}

fn for_(
  init: Option<ForInit>,
  test: Option<Expression>,
  update: Option<Expression>,
  body: Statement,
) -> Statement {
  ForStatement {
    init,
    test: test.map(Box::new),
    update: update.map(Box::new),
    body: Box::new(body),
  }
  .into()
}

fn for_in(left: ForInOfLeft, right: Expression, body: Statement) -> Statement {
  ForInStatement {
    left,
    right: Box::new(right),
    body: Box::new(body),
  }
  .into()
}

fn for_of(left: ForInOfLeft, right: Expression, body: Statement) -> Statement {
  ForOfStatement {
    left,
    right: Box::new(right),
    body: Box::new(body),
  }
  .into()
}

fn target(name: &str) -> ForInOfLeft {
  AssignmentTarget::from(AssignmentTargetIdentifier::new(name)).into()
}

fn empty_array() -> Expression {
  ArrayExpression { elements: vec![] }.into()
}

fn one_in_array() -> Expression {
  bin(num(1.0), In, empty_array())
}

#[test]
fn test_asi() {
  assert_source(&print(vec![expr_stmt(id("a")), expr_stmt(id("a"))]), "a;a");
  assert_source(&print(vec![block(vec![expr_stmt(id("a")), expr_stmt(id("b"))])]), "{a;b}");
  assert_source(&print(vec![block(vec![])]), "{}");
  assert_source(&print(vec![block(vec![block(vec![])])]), "{{}}");
  assert_source(
    &print(vec![expr_stmt(id("a")), block(vec![]), expr_stmt(id("b"))]),
    "a;{}b",
  );
}

#[test]
fn test_if() {
  let a = || id("a");
  assert_source(&print(vec![if_stmt(a(), empty(), None)]), "if(a);");
  assert_source(&print(vec![if_stmt(a(), expr_stmt(id("b")), None)]), "if(a)b");
  assert_source(
    &print(vec![if_stmt(a(), if_stmt(a(), expr_stmt(id("b")), None), None)]),
    "if(a)if(a)b",
  );
  assert_source(&print(vec![if_stmt(a(), block(vec![]), None)]), "if(a){}");
  assert_source(&print(vec![if_stmt(a(), empty(), Some(empty()))]), "if(a);else;");
  assert_source(
    &print(vec![if_stmt(a(), block(vec![]), Some(block(vec![])))]),
    "if(a){}else{}",
  );
  assert_source(
    &print(vec![if_stmt(
      a(),
      if_stmt(a(), block(vec![]), Some(block(vec![]))),
      Some(block(vec![])),
    )]),
    "if(a)if(a){}else{}else{}",
  );
  assert_source(
    &print(vec![if_stmt(a(), expr_stmt(id("b")), Some(expr_stmt(id("c"))))]),
    "if(a)b;else c",
  );
}

#[test]
fn test_dangling_else() {
  let a = || id("a");
  let missing_else = || if_stmt(a(), empty(), None);
  let wrap = |consequent: Statement| print(vec![if_stmt(a(), consequent, Some(empty()))]);
  assert_source(&wrap(missing_else()), "if(a){if(a);}else;");
  assert_source(&wrap(labeled("a", missing_else())), "if(a){a:if(a);}else;");
  assert_source(
    &wrap(if_stmt(a(), empty(), Some(missing_else()))),
    "if(a){if(a);else if(a);}else;",
  );
  assert_source(&wrap(while_stmt(a(), missing_else())), "if(a){while(a)if(a);}else;");
  let with: Statement = WithStatement {
    object: Box::new(a()),
    body: Box::new(missing_else()),
  }
  .into();
  assert_source(&wrap(with), "if(a){with(a)if(a);}else;");
  assert_source(
    &wrap(for_(None, None, None, missing_else())),
    "if(a){for(;;)if(a);}else;",
  );
  assert_source(
    &wrap(for_in(target("a"), a(), missing_else())),
    "if(a){for(a in a)if(a);}else;",
  );
  assert_source(
    &wrap(for_of(target("a"), a(), missing_else())),
    "if(a){for(a of a)if(a);}else;",
  );
  // An `if` with its own `else` closes the inner statement.
  assert_source(
    &wrap(if_stmt(a(), empty(), Some(empty()))),
    "if(a)if(a);else;else;",
  );
}

#[test]
fn test_loops() {
  assert_source(&print(vec![while_stmt(num(0.0), empty())]), "while(0);");
  assert_source(
    &print(vec![while_stmt(num(0.0), while_stmt(num(0.0), empty()))]),
    "while(0)while(0);",
  );
  let do_while = |body: Statement| -> Statement {
    DoWhileStatement {
      body: Box::new(body),
      test: Box::new(num(1.0)),
    }
    .into()
  };
  assert_source(&print(vec![do_while(empty())]), "do;while(1)");
  assert_source(&print(vec![do_while(block(vec![]))]), "do{}while(1)");
  assert_source(&print(vec![do_while(expr_stmt(num(3.0)))]), "do 3;while(1)");
  assert_source(
    &print(vec![do_while(DebuggerStatement {}.into())]),
    "do debugger;while(1)",
  );
  assert_source(
    &print(vec![do_while(expr_stmt(object(vec![data_property("a", num(3.0))])))]),
    "do({a:3});while(1)",
  );
  assert_source(
    &print(vec![do_while(if_stmt(num(3.0), block(vec![]), None))]),
    "do if(3){}while(1)",
  );
}

#[test]
fn test_break_continue_labels() {
  assert_source(&print(vec![while_stmt(num(1.0), break_(None))]), "while(1)break");
  assert_source(
    &print(vec![while_stmt(num(1.0), block(vec![break_(None), break_(None)]))]),
    "while(1){break;break}",
  );
  assert_source(
    &print(vec![labeled(
      "a",
      while_stmt(num(1.0), block(vec![continue_(None), continue_(Some("a"))])),
    )]),
    "a:while(1){continue;continue a}",
  );
  assert_source(&print(vec![labeled("a", empty())]), "a:;");
  assert_source(&print(vec![labeled("a", labeled("b", empty()))]), "a:b:;");
  assert_source(&print(vec![labeled("a", block(vec![]))]), "a:{}");
}

#[test]
fn test_for() {
  let var_init = |declarators: Vec<(&str, Option<Expression>)>| {
    Some(ForInit::from(declaration(VariableDeclarationKind::Var, declarators)))
  };
  let expr_init = |e: Expression| Some(ForInit::from(Box::new(e)));
  assert_source(
    &print(vec![for_(var_init(vec![("i", Some(one_in_array()))]), None, None, empty())]),
    "for(var i=(1 in[]);;);",
  );
  assert_source(
    &print(vec![for_(
      var_init(vec![
        ("i", Some(one_in_array())),
        ("b", None),
        ("c", Some(one_in_array())),
      ]),
      None,
      None,
      empty(),
    )]),
    "for(var i=(1 in[]),b,c=(1 in[]);;);",
  );
  assert_source(
    &print(vec![for_(expr_init(one_in_array()), None, None, empty())]),
    "for((1 in[]);;);",
  );
  assert_source(
    &print(vec![for_(expr_init(bin(num(1.0), Mul, one_in_array())), None, None, empty())]),
    "for(1*(1 in[]);;);",
  );
  assert_source(
    &print(vec![for_(
      expr_init(bin(num(1.0), Mul, bin(bin(num(1.0), Plus, num(1.0)), In, empty_array()))),
      None,
      None,
      empty(),
    )]),
    "for(1*(1+1 in[]);;);",
  );
  let b_in_b = || bin(id("b"), In, id("b"));
  assert_source(
    &print(vec![for_(expr_init(b_in_b()), Some(b_in_b()), Some(b_in_b()), empty())]),
    "for((b in b);b in b;b in b);",
  );
  assert_source(
    &print(vec![for_(
      var_init(vec![("a", Some(b_in_b())), ("c", Some(b_in_b()))]),
      Some(b_in_b()),
      Some(b_in_b()),
      empty(),
    )]),
    "for(var a=(b in b),c=(b in b);b in b;b in b);",
  );
  // Brackets and calls lift the restriction.
  assert_source(
    &print(vec![for_(
      expr_init(call(id("f"), vec![b_in_b()])),
      None,
      None,
      empty(),
    )]),
    "for(f(b in b);;);",
  );
  assert_source(
    &print(vec![for_(
      var_init(vec![("a", Some(bin(b_in_b(), Sequence, id("c"))))]),
      None,
      None,
      empty(),
    )]),
    "for(var a=(b in b,c);;);",
  );
  // `for(let[` would begin a declaration.
  let let_member = ComputedMemberAssignmentTarget {
    object: Box::new(ExpressionOrSuper::from(id("let"))),
    expression: Box::new(id("a")),
  };
  let init = AssignmentExpression {
    binding: let_member.into(),
    expression: Box::new(num(0.0)),
  };
  assert_source(
    &print(vec![for_(expr_init(init.into()), None, None, empty())]),
    "for((let[a]=0);;);",
  );
  assert_source(&print(vec![for_(None, None, None, block(vec![]))]), "for(;;){}");
}

#[test]
fn test_for_init_with_nested_in() {
  let expr_init = |e: Expression| Some(ForInit::from(Box::new(e)));
  let b_in_c = || bin(id("b"), In, id("c"));
  let print_init = |init: Option<ForInit>| print(vec![for_(init, None, None, empty())]);

  // A concise arrow body is parsed under the header's restriction.
  assert_source(&print_init(expr_init(arrow(&["a"], b_in_c()))), "for((a=>b in c);;);");
  assert_source(
    &print_init(expr_init(assign("x", arrow(&["a"], b_in_c())))),
    "for((x=a=>b in c);;);",
  );
  assert_source(
    &print_init(Some(ForInit::from(declaration(
      VariableDeclarationKind::Var,
      vec![("x", Some(arrow(&["a"], b_in_c())))],
    )))),
    "for(var x=(a=>b in c);;);",
  );
  assert_source(
    &print_init(expr_init(arrow(&["a"], bin(b_in_c(), Sequence, id("d"))))),
    "for(a=>(b in c,d);;);",
  );

  let yield_: Expression = YieldExpression {
    expression: Some(Box::new(b_in_c())),
  }
  .into();
  assert_source(&print_init(expr_init(yield_)), "for((yield b in c);;);");
  let yield_star: Expression = YieldGeneratorExpression {
    expression: Box::new(b_in_c()),
  }
  .into();
  assert_source(&print_init(expr_init(yield_star)), "for((yield*b in c);;);");
  let bare_yield: Expression = YieldExpression { expression: None }.into();
  assert_source(&print_init(expr_init(bare_yield)), "for(yield;;);");
}

#[test]
fn test_for_in_of() {
  let var_a = || ForInOfLeft::from(declaration(VariableDeclarationKind::Var, vec![("a", None)]));
  assert_source(&print(vec![for_in(var_a(), num(1.0), empty())]), "for(var a in 1);");
  assert_source(&print(vec![for_in(target("a"), num(1.0), empty())]), "for(a in 1);");
  assert_source(&print(vec![for_in(target("let"), num(1.0), empty())]), "for((let)in 1);");
  assert_source(
    &print(vec![for_in(target("b"), bin(id("c"), In, id("d")), empty())]),
    "for(b in c in d);",
  );
  let let_member: ForInOfLeft = AssignmentTarget::from(ComputedMemberAssignmentTarget {
    object: Box::new(ExpressionOrSuper::from(id("let"))),
    expression: Box::new(id("a")),
  })
  .into();
  assert_source(&print(vec![for_in(let_member, id("b"), empty())]), "for((let[a])in b);");
  // Only `let` and `let[` would start a declaration in a `for-in` head.
  let let_dot = || -> ForInOfLeft {
    AssignmentTarget::from(StaticMemberAssignmentTarget {
      object: Box::new(ExpressionOrSuper::from(id("let"))),
      property: "a".into(),
    })
    .into()
  };
  assert_source(&print(vec![for_in(let_dot(), id("b"), empty())]), "for(let.a in b);");
  assert_source(&print(vec![for_in(target("async"), id("b"), empty())]), "for(async in b);");
  assert_source(&print(vec![for_of(let_dot(), id("b"), empty())]), "for((let.a)of b);");

  assert_source(&print(vec![for_of(target("a"), id("b"), empty())]), "for(a of b);");
  assert_source(&print(vec![for_of(target("async"), id("b"), empty())]), "for((async)of b);");
  let let_array = ForInOfLeft::from(VariableDeclaration {
    kind: VariableDeclarationKind::Let,
    declarators: vec![VariableDeclarator {
      binding: ArrayBinding {
        elements: vec![Some(Parameter::from(BindingIdentifier::new("a")))],
        rest: None,
      }
      .into(),
      init: None,
    }],
  });
  let array_b: Expression = ArrayExpression {
    elements: vec![Some(id("b").into())],
  }
  .into();
  assert_source(&print(vec![for_of(let_array, array_b, empty())]), "for(let[a]of[b]);");
  assert_source(
    &print(vec![for_of(target("a"), bin(id("b"), Sequence, id("c")), empty())]),
    "for(a of(b,c));",
  );
}

#[test]
fn test_switch() {
  let switch = |cases: Vec<SwitchCase>| -> Statement {
    SwitchStatement {
      discriminant: Box::new(num(0.0)),
      cases,
    }
    .into()
  };
  let with_default = |pre: Vec<SwitchCase>, default: Vec<Statement>| -> Statement {
    SwitchStatementWithDefault {
      discriminant: Box::new(num(0.0)),
      pre_default_cases: pre,
      default_case: SwitchDefault { consequent: default },
      post_default_cases: vec![],
    }
    .into()
  };
  let case = |test: f64, consequent: Vec<Statement>| SwitchCase {
    test: Box::new(num(test)),
    consequent,
  };
  assert_source(&print(vec![switch(vec![])]), "switch(0){}");
  assert_source(&print(vec![with_default(vec![], vec![])]), "switch(0){default:}");
  assert_source(
    &print(vec![with_default(vec![case(0.0, vec![])], vec![])]),
    "switch(0){case 0:default:}",
  );
  assert_source(
    &print(vec![with_default(
      vec![case(0.0, vec![expr_stmt(id("a"))])],
      vec![labeled("c", expr_stmt(id("b")))],
    )]),
    "switch(0){case 0:a;default:c:b}",
  );
  assert_source(
    &print(vec![switch(vec![case(1.0, vec![break_(None)])])]),
    "switch(0){case 1:break}",
  );
}

#[test]
fn test_try_throw_return() {
  let catch = || CatchClause {
    binding: Binding::from(BindingIdentifier::new("a")),
    body: Block::default(),
  };
  let try_catch: Statement = TryCatchStatement {
    body: Block::default(),
    catch_clause: catch(),
  }
  .into();
  assert_source(&print(vec![try_catch]), "try{}catch(a){}");
  let try_catch_finally: Statement = TryFinallyStatement {
    body: Block::default(),
    catch_clause: Some(catch()),
    finalizer: Block::default(),
  }
  .into();
  assert_source(&print(vec![try_catch_finally]), "try{}catch(a){}finally{}");
  let try_finally: Statement = TryFinallyStatement {
    body: Block::default(),
    catch_clause: None,
    finalizer: Block::default(),
  }
  .into();
  assert_source(&print(vec![try_finally]), "try{}finally{}");

  let throw = |e| -> Statement {
    ThrowStatement {
      expression: Box::new(e),
    }
    .into()
  };
  assert_source(&print(vec![throw(num(0.0))]), "throw 0");
  assert_source(
    &print(vec![throw(bin(bin(num(1.0), LessThan, num(1.0)), Plus, num(1.0)))]),
    "throw(1<1)+1",
  );

  let ret = |e: Option<Expression>| -> Statement {
    ReturnStatement {
      expression: e.map(Box::new),
    }
    .into()
  };
  assert_source(&print_expr(function(Some("a"), vec![ret(None)])), "(function a(){return})");
  assert_source(
    &print_expr(function(Some("a"), vec![ret(Some(num(0.0)))])),
    "(function a(){return 0})",
  );
}

#[test]
fn test_variable_declarations() {
  assert_source(&print(vec![var(vec![("a", Some(num(0.0)))])]), "var a=0");
  assert_source(
    &print(vec![var(vec![("a", Some(num(0.0))), ("b", Some(num(0.0)))])]),
    "var a=0,b=0",
  );
  assert_source(
    &print(vec![var(vec![("a", Some(bin(num(0.0), Sequence, num(0.0))))])]),
    "var a=(0,0)",
  );
  assert_source(&print(vec![var(vec![("a", None), ("b", None)])]), "var a,b");
  assert_source(
    &print(vec![var(vec![("a", Some(bin(string(""), In, object(vec![]))))])]),
    "var a=\"\"in{}",
  );
  let declare = |kind| -> Statement {
    VariableDeclarationStatement {
      declaration: declaration(kind, vec![("a", None)]),
    }
    .into()
  };
  assert_source(&print(vec![declare(VariableDeclarationKind::Let)]), "let a");
  assert_source(
    &print(vec![declare(VariableDeclarationKind::Const), expr_stmt(id("b"))]),
    "const a;b",
  );
}

#[test]
fn test_with_and_debugger() {
  let with: Statement = WithStatement {
    object: Box::new(null()),
    body: Box::new(empty()),
  }
  .into();
  assert_source(&print(vec![with]), "with(null);");
  assert_source(&print(vec![DebuggerStatement {}.into()]), "debugger");
}

#[test]
fn test_let_member_statement() {
  let let_index: Expression = ComputedMemberExpression {
    object: Box::new(ExpressionOrSuper::from(id("let"))),
    expression: Box::new(id("a")),
  }
  .into();
  assert_source(&print_expr(let_index.clone()), "(let[a])");
  assert_source(&print_expr(call(let_index, vec![])), "(let[a]())");
}

#[test]
fn test_directives() {
  let generate = codegen_js::generate;
  assert_source(&generate(&script_with_directives(&["use strict"], vec![])), "\"use strict\"");
  assert_source(&generate(&script_with_directives(&["\""], vec![])), "'\"'");
  assert_source(&generate(&script_with_directives(&["\\\""], vec![])), "\"\\\"\"");
  assert_source(
    &generate(&script_with_directives(&["use strict"], vec![expr_stmt(num(0.0))])),
    "\"use strict\";0",
  );
  assert_source(&print(vec![expr_stmt(string("use strict"))]), "(\"use strict\")");
  assert_source(
    &print(vec![expr_stmt(string("use strict")), empty()]),
    "(\"use strict\");;",
  );
  assert_source(
    &generate(&script_with_directives(&["use strict"], vec![empty()])),
    "\"use strict\";;",
  );
  assert_source(
    &generate(&script_with_directives(
      &["use strict"],
      vec![expr_stmt(string("use strict"))],
    )),
    "\"use strict\";(\"use strict\")",
  );
  assert_source(
    &generate(&script_with_directives(
      &["use strict"],
      vec![empty(), expr_stmt(string("use strict"))],
    )),
    "\"use strict\";;\"use strict\"",
  );
  assert_source(&print(vec![empty(), expr_stmt(string("a"))]), ";\"a\"");
  // Function bodies start a new directive prologue.
  assert_source(
    &print_expr(function(None, vec![expr_stmt(string("a"))])),
    "(function(){(\"a\")})",
  );
}
