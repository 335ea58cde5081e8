//! stag-forest CLI
//!
//! Usage:
//!   stag-forest [OPTIONS] <INPUT>
//!   stag-forest [OPTIONS] -f <FILE>
//!
//! Options:
//!   -f, --file <FILE>          File containing the trees (instead of <INPUT>)
//!   -p, --preamble             Include preamble (macro definitions and \usepackage{}s)
//!   -c, --circle               Circle links (default puts links in boxes)
//!   -s, --scale <SCALE>        Scale factor for the figure [default: 0.6]
//!   -m, --mode <MODE>          Input notation: bracket, named or flat
//!       --stylesheet <FILE>    Stylesheet file for macro names (TOML format)
//!   -d, --debug                Print parsed pairs to stderr
//!   -h, --help                 Print help

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use stag_forest::{
    debug_pair, InputFormat, LatexConfig, LinkStyle, Pairs, RenderConfig, Stylesheet,
};

#[derive(Parser)]
#[command(name = "stag-forest")]
#[command(about = "Generate LaTeX trees from bracketed representations")]
struct Cli {
    /// File containing the trees ('-' reads stdin)
    #[arg(required_unless_present = "file")]
    input: Option<PathBuf>,

    /// File containing the trees, given as an option
    #[arg(short = 'f', long = "file", conflicts_with = "input")]
    file: Option<PathBuf>,

    /// Include preamble (macro definitions and \usepackage{}s)
    #[arg(short, long)]
    preamble: bool,

    /// Circle links (default puts links in boxes)
    #[arg(short, long)]
    circle: bool,

    /// Scale factor applied to the whole figure (named mode)
    #[arg(short, long, default_value_t = 0.6)]
    scale: f64,

    /// Input notation
    #[arg(short, long, value_enum, default_value_t = Mode::Bracket)]
    mode: Mode,

    /// Stylesheet file for macro names (TOML format)
    #[arg(long)]
    stylesheet: Option<PathBuf>,

    /// Debug mode: print parsed pairs to stderr
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Bracketed trees, two per pair
    Bracket,
    /// Named trees and {...} MC-sets, two per pair
    Named,
    /// One source#target pair per line
    Flat,
}

impl From<Mode> for InputFormat {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Bracket => InputFormat::Bracket,
            Mode::Named => InputFormat::Named,
            Mode::Flat => InputFormat::Flat,
        }
    }
}

impl Cli {
    /// The input path, from `-f` or the positional argument
    fn input_path(&self) -> &Path {
        self.file
            .as_deref()
            .or(self.input.as_deref())
            .unwrap_or_else(|| Path::new("-"))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let input = cli.input_path();

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Stylesheet::default(),
    };
    for role in stylesheet.unknown_roles() {
        eprintln!("Warning: stylesheet names unknown macro role '{}'", role);
    }

    // Read input; the file is closed before parsing starts
    let source = match read_input(input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading '{}': {}", input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let link_style = if cli.circle {
        LinkStyle::Circled
    } else {
        LinkStyle::Boxed
    };
    let config = RenderConfig::new()
        .with_format(cli.mode.into())
        .with_latex(
            LatexConfig::new()
                .with_link_style(link_style)
                .with_scale(cli.scale)
                .with_preamble(cli.preamble),
        )
        .with_stylesheet(stylesheet)
        .with_debug(cli.debug);

    let filename = input.display().to_string();
    match emit(&source, &filename, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_input(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}

/// Print each pair as soon as it parses; stop at the first error
fn emit(source: &str, filename: &str, config: &RenderConfig) -> io::Result<ExitCode> {
    let renderer = config.renderer();
    let mut out = io::stdout().lock();

    if let Some(preamble) = renderer.preamble() {
        writeln!(out, "{}", preamble)?;
    }
    if let Some(begin) = renderer.begin() {
        writeln!(out, "{}", begin)?;
    }

    for result in Pairs::new(source, config.format) {
        match result {
            Ok(pair) => {
                if config.debug {
                    debug_pair(&pair);
                }
                writeln!(out, "{}", renderer.render_pair(&pair))?;
            }
            Err(e) => {
                out.flush()?;
                eprint!("{}", e.format(source, filename));
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    if let Some(end) = renderer.end() {
        writeln!(out, "{}", end)?;
    }
    Ok(ExitCode::SUCCESS)
}
