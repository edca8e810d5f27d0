use clap::{Parser, ValueEnum};
use codegen_js::ast::Program;
use codegen_js::{generate_with_options, CodegenOptions, Style};
use std::fs::File;
use std::io::stdin;
use std::io::stdout;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser)]
#[command(
  name = "codegen-js",
  about = "Print ECMAScript source from a Shift JSON AST"
)]
struct Cli {
  /// JSON AST to print; omit for stdin.
  #[arg(short, long)]
  input: Option<PathBuf>,

  /// Output destination; omit for stdout.
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Output layout.
  #[arg(long, value_enum, default_value_t = StyleArg::Compact)]
  style: StyleArg,

  /// Escape the output for embedding in an HTML `<script>` element.
  #[arg(long)]
  web_safe: bool,

  /// Emit JSON tracing spans to stderr.
  #[arg(long)]
  trace: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
  Compact,
  Pretty,
}

impl From<StyleArg> for Style {
  fn from(style: StyleArg) -> Style {
    match style {
      StyleArg::Compact => Style::Compact,
      StyleArg::Pretty => Style::Pretty,
    }
  }
}

fn init_tracing(enabled: bool) {
  if !enabled {
    return;
  }
  let _ = tracing_subscriber::fmt()
    .with_span_events(FmtSpan::CLOSE)
    .with_max_level(Level::DEBUG)
    .with_writer(std::io::stderr)
    .json()
    .with_ansi(false)
    .try_init();
}

fn exit_with_error(name: &str, message: impl std::fmt::Display) -> ! {
  eprintln!("{name}: {message}");
  process::exit(1);
}

fn main() {
  let args = Cli::parse();
  init_tracing(args.trace);
  let input_name = args
    .input
    .as_ref()
    .map(|p| p.to_string_lossy().into_owned())
    .unwrap_or_else(|| "<stdin>".to_string());
  let mut input = Vec::new();
  let mut input_file: Box<dyn Read> = match args.input.as_ref() {
    Some(p) => match File::open(p) {
      Ok(f) => Box::new(f),
      Err(err) => exit_with_error(&input_name, format!("failed to open: {err}")),
    },
    None => Box::new(stdin()),
  };
  if let Err(err) = input_file.read_to_end(&mut input) {
    exit_with_error(&input_name, format!("failed to read input: {err}"));
  }
  let source = match std::str::from_utf8(&input) {
    Ok(source) => source,
    Err(err) => exit_with_error(&input_name, format!("input is not valid UTF-8: {err}")),
  };
  let program = match Program::from_json(source) {
    Ok(program) => program,
    Err(err) => exit_with_error(&input_name, format!("invalid AST: {err}")),
  };
  let options = CodegenOptions {
    style: args.style.into(),
    web_safe: args.web_safe,
  };
  let mut output = match generate_with_options(&program, options) {
    Ok(output) => output,
    Err(err) => exit_with_error(&input_name, err),
  };
  if !output.is_empty() && !output.ends_with('\n') {
    output.push('\n');
  }
  let write_result = match args.output.as_ref() {
    Some(p) => File::create(p)
      .and_then(|mut file| file.write_all(output.as_bytes()))
      .map_err(|err| (p.display().to_string(), err)),
    None => stdout()
      .write_all(output.as_bytes())
      .map_err(|err| ("<stdout>".to_string(), err)),
  };
  if let Err((dest, err)) = write_result {
    exit_with_error(&dest, format!("failed to write output: {err}"));
  }
}
