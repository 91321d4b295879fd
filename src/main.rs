mod debug_report;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use tashkeel::{Context, ERROR_MARKER, FileSink, Options, ReportSink, VerbSuffixPolicy, process_text_verbose_with};

/// Sample sentences for `--demo`.
const DEMO_INPUTS: &[&str] = &[
    "إنَّ إسحاقَ عليهِ السَّلامُ نبيٌّ مِنَ الأنبياءِ الكِرامِ",
    "في القرآنِ الكريمِ ذُكِرَ اسمُ إسحاقَ في مواضعَ عديدةٍ",
    "كانَ إسحاقُ عليهِ السَّلامُ مثالًا للصَّبرِ والحكمةِ",
    "جاء أبو محمدٍ إلى المسجدِ",
    "رأيت ذا العلمِ في المكتبةِ",
];

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_logging(config.verbosity);

    let ctx = Context::default();
    let opts = Options { verb_suffixes: config.verb_suffixes };
    let sink = config.save_dir.map(FileSink::new);
    let sink = sink.as_ref().map(|s| s as &dyn ReportSink);

    let mut failed = false;
    for input in &config.inputs {
        let res = process_text_verbose_with(input, &ctx, &opts, sink, config.explain);
        failed |= res.output.starts_with(ERROR_MARKER);

        if config.explain {
            debug_report::print_run(&res, config.color);
        } else {
            println!("{}", res.output);
        }
    }

    if failed {
        std::process::exit(1);
    }
}

struct CliConfig {
    inputs: Vec<String>,
    save_dir: Option<PathBuf>,
    verb_suffixes: VerbSuffixPolicy,
    explain: bool,
    color: bool,
    verbosity: u8,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut demo = false;
    let mut save_dir = None;
    let mut verb_suffixes = VerbSuffixPolicy::Legacy;
    let mut explain = false;
    let mut color = io::stdout().is_terminal();
    let mut verbosity = 0u8;
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("tashkeel {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--explain" => explain = true,
            "--demo" => demo = true,
            "--strict-verbs" => verb_suffixes = VerbSuffixPolicy::Strict,
            "-v" | "--verbose" => verbosity = verbosity.saturating_add(1),
            "-vv" => verbosity = verbosity.saturating_add(2),
            "--save" => {
                let value = args.next().ok_or_else(|| "error: --save expects a directory".to_string())?;
                save_dir = Some(PathBuf::from(value));
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--save=") => {
                save_dir = Some(PathBuf::from(arg.trim_start_matches("--save=")));
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let inputs = match (demo, input) {
        (true, Some(_)) => return Err("error: --demo cannot be combined with input text".to_string()),
        (true, None) => DEMO_INPUTS.iter().map(|s| s.to_string()).collect(),
        (false, Some(value)) => vec![value],
        (false, None) => vec![read_stdin_input()?],
    };

    // Empty text is not an argument error: the library answers it with its
    // placeholder message.
    Ok(CliConfig { inputs, save_dir, verb_suffixes, explain, color, verbosity })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "tashkeel {version}

Rule-based Arabic diacritizer.

Usage:
  tashkeel [OPTIONS] [--] <text...>
  tashkeel [OPTIONS] --input <text>
  tashkeel [OPTIONS] --demo

Options:
  -i, --input <text>         Text to diacritize. If omitted, reads remaining args
                             or stdin when no args are provided.
  --demo                     Diacritize the built-in example sentences.
  --save <dir>               Also write a timestamped report into <dir>.
  --strict-verbs             Only treat words with a tense prefix or a past
                             suffix as verbs.
  --explain                  Print the per-word classification trace.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -v, --verbose              Raise log level (repeat for more; RUST_LOG wins).
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Processing failed (a diagnostic was printed).
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
