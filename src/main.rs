use clap::{CommandFactory, Parser};
use php_accessors::{GenerateResult, Options, generate_with};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "php-accessors")]
#[command(about = "Generate getters and setters for PHP class files")]
struct Cli {
    /// Path to a .php file containing a single class, or a directory (with --write)
    #[arg(required_unless_present = "stdin")]
    file: Option<PathBuf>,

    /// Read the class from stdin instead of a file
    #[arg(long)]
    stdin: bool,

    /// Characters used as one indentation level
    #[arg(long, value_name = "tab", default_value = "    ")]
    tabchar: String,

    /// Add docblocks above the generated methods
    #[arg(long, value_name = "boolean", default_value = "true", action = clap::ArgAction::Set, value_parser = parse_boolean)]
    docblock: bool,

    /// Create getters
    #[arg(long, value_name = "boolean", default_value = "true", action = clap::ArgAction::Set, value_parser = parse_boolean)]
    getters: bool,

    /// Create setters
    #[arg(long, value_name = "boolean", default_value = "true", action = clap::ArgAction::Set, value_parser = parse_boolean)]
    setters: bool,

    /// Property that shouldn't get a getter and a setter (repeatable)
    #[arg(long, value_name = "property")]
    ignore: Vec<String>,

    /// Rewrite the input file(s) in place instead of printing to stdout
    #[arg(long)]
    write: bool,

    /// Output as JSON with the generated method names
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            tabchar: self.tabchar.clone(),
            docblock: self.docblock,
            getters: self.getters,
            setters: self.setters,
            ignore: self.ignore.iter().cloned().collect(),
        }
    }
}

/// Boolean-like flag values: exactly 0, 1, false or true.
fn parse_boolean(value: &str) -> Result<bool, String> {
    match value {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(format!(
            "`{value}` is not a boolean, use one of: 0, 1, false, true"
        )),
    }
}

fn main() {
    let cli = Cli::parse();
    let options = cli.options();

    if cli.stdin {
        generate_stdin(&cli, &options);
    } else if let Some(path) = cli.file.as_deref() {
        if path.is_file() {
            generate_file(path, &cli, &options);
        } else if path.is_dir() {
            generate_directory(path, &cli, &options);
        } else {
            fail(&format!(
                "file {} does not exist, provide a valid file",
                path.display()
            ));
        }
    } else {
        fail("no input file given");
    }
}

fn generate_stdin(cli: &Cli, options: &Options) {
    if cli.write {
        fail("--write needs a file path, not stdin");
    }

    let mut source = String::new();
    if io::stdin().read_to_string(&mut source).is_err() {
        fail("failed to read stdin");
    }

    match generate_with(&source, options) {
        Ok(result) => emit(&result, cli),
        Err(err) => fail(&err.to_string()),
    }
}

fn generate_file(path: &Path, cli: &Cli, options: &Options) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => fail(&format!("failed to read {}: {}", path.display(), err)),
    };

    let result = match generate_with(&source, options) {
        Ok(result) => result,
        Err(err) => fail(&err.to_string()),
    };

    if cli.write {
        let start = Instant::now();
        if let Err(err) = fs::write(path, &result.code) {
            fail(&format!("failed to write {}: {}", path.display(), err));
        }
        print_generated(&path.display().to_string());
        print_summary(1, start.elapsed());
    }

    if cli.json {
        emit(&result, cli);
    } else if !cli.write {
        print!("{}", result.code);
    }
}

fn generate_directory(dir: &Path, cli: &Cli, options: &Options) {
    if !cli.write {
        fail("directory input needs --write");
    }
    if cli.json {
        fail("--json is not available for directory input");
    }

    let start = Instant::now();
    let mut file_count = 0;

    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "php"))
    {
        let path = entry.path();
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("  skipped {}: {}", path.display(), err);
                continue;
            }
        };

        match generate_with(&source, options) {
            Ok(result) => {
                if let Err(err) = fs::write(path, &result.code) {
                    fail(&format!("failed to write {}: {}", path.display(), err));
                }
                file_count += 1;
                print_generated(&path.display().to_string());
            }
            Err(err) => {
                eprintln!("  skipped {}: {}", path.display(), err);
            }
        }
    }

    if file_count == 0 {
        fail(&format!("no .php files updated under {}", dir.display()));
    }

    print_summary(file_count, start.elapsed());
}

fn emit(result: &GenerateResult, cli: &Cli) {
    if cli.json {
        match serde_json::to_string(result) {
            Ok(json) => println!("{json}"),
            Err(err) => fail(&format!("failed to serialize result: {err}")),
        }
    } else {
        print!("{}", result.code);
    }
}

/// Error message followed by the generated help text, then a failure exit.
fn fail(message: &str) -> ! {
    eprintln!("error: {message}");
    eprintln!();
    eprintln!("{}", Cli::command().render_help());
    std::process::exit(1);
}

fn print_generated(path: &str) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("  \x1b[32m✓\x1b[0m {}", path);
    } else {
        eprintln!("  ✓ {}", path);
    }
}

fn print_summary(count: usize, elapsed: std::time::Duration) {
    let is_tty = io::stderr().is_terminal();
    let time_str = format_duration(elapsed);
    let files_word = if count == 1 { "file" } else { "files" };

    if is_tty {
        eprintln!("\n\x1b[1m✨ Updated {} {} in {}\x1b[0m", count, files_word, time_str);
    } else {
        eprintln!("\n✨ Updated {} {} in {}", count, files_word, time_str);
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}μs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
