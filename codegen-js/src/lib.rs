//! Prints ES2017 syntax trees as JavaScript source.
//!
//! Generation recurses once per tree level, so very deep trees can exhaust the stack.

pub mod ast;
mod char;
mod code_rep;
mod codegen;
mod error;
mod escape;
mod factory;
mod location;
mod num;
pub mod operator;
mod precedence;
pub mod reducer;
mod token_stream;
mod web_safe;

use ast::Program;
use tracing::debug_span;

pub use crate::char::{is_identifier_name, is_identifier_part, is_identifier_start};
pub use code_rep::{CodeRep, CodeRepKind, Flags};
pub use codegen::{CodeGen, Escaper, Plain};
pub use error::{CodegenError, CodegenResult};
pub use escape::escape_string_literal;
pub use factory::{CodeRepFactory, Style};
pub use location::{CodeGenWithLocation, Location, Locations, NodeId, NodeRole, SourceSpan};
pub use num::{d2a, short_d2a};
pub use precedence::{expression_precedence, Precedence};
pub use token_stream::TokenStream;
pub use web_safe::{safe, WebSafe};

/// How to print a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodegenOptions {
  pub style: Style,
  /// Escape the output so it can be embedded in an HTML `<script>` element.
  pub web_safe: bool,
}

impl CodegenOptions {
  pub fn compact() -> Self {
    CodegenOptions::default()
  }

  pub fn pretty() -> Self {
    CodegenOptions {
      style: Style::Pretty,
      ..CodegenOptions::default()
    }
  }

  pub fn with_web_safe(mut self, web_safe: bool) -> Self {
    self.web_safe = web_safe;
    self
  }
}

/// Prints `program` with no more whitespace than needed.
pub fn generate(program: &Program) -> String {
  generate_plain(program, Style::Compact)
}

/// Prints `program` with a line break after every statement and opening brace.
pub fn generate_pretty(program: &Program) -> String {
  generate_plain(program, Style::Pretty)
}

/// Prints `program` compactly, escaped for embedding in an HTML `<script>` element. Fails if a
/// regular expression or tagged template would need escaping that changes its meaning.
pub fn generate_web_safe(program: &Program) -> CodegenResult<String> {
  generate_with_options(program, CodegenOptions::compact().with_web_safe(true))
}

pub fn generate_with_options(program: &Program, options: CodegenOptions) -> CodegenResult<String> {
  if !options.web_safe {
    return Ok(generate_plain(program, options.style));
  }
  let span = debug_span!("generate", style = ?options.style, web_safe = true);
  let _guard = span.enter();
  let codegen = CodeGen::new(CodeRepFactory::new(options.style), WebSafe);
  let rep = reducer::reduce_program(&codegen, program)?;
  Ok(emit(&rep, TokenStream::web_safe()))
}

/// Prints `program` as [`generate_with_options`] does, also recording the span of every node in
/// the output. Spans are looked up with references into `program`.
pub fn generate_with_locations(
  program: &Program,
  options: CodegenOptions,
) -> CodegenResult<(String, Locations)> {
  let span = debug_span!(
    "generate",
    style = ?options.style,
    web_safe = options.web_safe,
    locations = true
  );
  let _guard = span.enter();
  let factory = CodeRepFactory::new(options.style);
  let (rep, ts) = if options.web_safe {
    let codegen = CodeGenWithLocation::new(CodeGen::new(factory, WebSafe));
    (reducer::reduce_program(&codegen, program)?, TokenStream::web_safe())
  } else {
    let codegen = CodeGenWithLocation::new(CodeGen::new(factory, Plain));
    match reducer::reduce_program(&codegen, program) {
      Ok(rep) => (rep, TokenStream::new()),
      Err(never) => match never {},
    }
  };
  let mut ts = ts.with_locations();
  rep.emit(&mut ts, false);
  Ok(ts.finish_with_locations())
}

fn generate_plain(program: &Program, style: Style) -> String {
  let span = debug_span!("generate", ?style, web_safe = false);
  let _guard = span.enter();
  let codegen = CodeGen::new(CodeRepFactory::new(style), Plain);
  match reducer::reduce_program(&codegen, program) {
    Ok(rep) => emit(&rep, TokenStream::new()),
    Err(never) => match never {},
  }
}

fn emit(rep: &CodeRep, mut ts: TokenStream) -> String {
  rep.emit(&mut ts, false);
  ts.finish()
}
