use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use clap_stdin::FileOrStdin;
use minilang::report::{Report, Section};
use minilang::{analyze, AnalyzerError, Vocabulary};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Pass {
    All,
    Lexical,
    Syntax,
    Semantic,
}

impl Pass {
    fn sections(self) -> &'static [Section] {
        match self {
            Pass::All => &Section::ALL,
            Pass::Lexical => &[Section::Lexical],
            Pass::Syntax => &[Section::Syntax],
            Pass::Semantic => &[Section::Semantics],
        }
    }
}

/// Lexical, syntactic and semantic analyzer for MiniLang sources
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file, or `-` to read from stdin
    #[arg(default_value = "-")]
    input: FileOrStdin,

    /// Report sections to print
    #[arg(long, value_enum, default_value_t = Pass::All)]
    pass: Pass,

    /// Exit with status 1 when the syntax or semantic pass reports anything
    #[arg(long)]
    strict: bool,
}

fn run(cli: Cli) -> Result<ExitCode, AnalyzerError> {
    let vocabulary = Vocabulary::new()?;
    let user_input = cli.input.contents()?;

    let analysis = analyze(&vocabulary, &user_input);
    print!("{}", Report::new(&analysis).sections(cli.pass.sections()));

    if cli.strict && analysis.has_diagnostics() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
