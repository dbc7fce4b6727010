use std::fs;
use std::path::Path;

use clap::Parser;

use textseek::EXIT_SUCCESS;
use textseek::cli::{Cli, Commands, ConfigAction, ConfigArgs, InitArgs, ScanArgs};
use textseek::config::{Config, ConfigLoader, FileConfigLoader};
use textseek::output::canonical_path;
use textseek::scanner::{DirectoryScanner, ExtensionFilter, FileScanner};
use textseek::searcher::{ContentSearcher, KeywordSearcher};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Scan(args) => run_scan(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}

fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> textseek::Result<()> {
    use std::io::Write;

    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Validate resolved values before any scanning begins
    config.validate()?;

    // 4. Build filter and scanner
    let mut exclude_patterns = config.scan.exclude.clone();
    exclude_patterns.extend(args.exclude.clone());
    let filter = ExtensionFilter::new(&config.scan.extensions, &exclude_patterns)?;
    let scanner = DirectoryScanner::new(&config.scan.directory, filter)?;

    // 5. Materialize the candidate list, then search each candidate in
    //    scan order, printing matches as soon as they are determined
    let files = scanner.scan()?;
    let searcher = KeywordSearcher::new(&config.search.keyword, config.search.case_sensitive)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for file in &files {
        match searcher.contains_keyword(file) {
            Ok(true) => writeln!(out, "{}", canonical_path(file)?.display())?,
            Ok(false) => {}
            Err(e) if config.search.skip_unreadable => {
                if !cli.quiet {
                    eprintln!("Warning: {e}, skipping");
                }
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> textseek::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &ScanArgs) {
    if let Some(directory) = &args.directory {
        config.scan.directory.clone_from(directory);
    }

    if let Some(keyword) = &args.keyword {
        config.search.keyword.clone_from(keyword);
    }

    if args.case_sensitive {
        config.search.case_sensitive = true;
    }

    if let Some(ext) = &args.ext {
        config.scan.extensions.clone_from(ext);
    }

    if args.skip_unreadable {
        config.search.skip_unreadable = true;
    }
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

fn run_init_impl(args: &InitArgs) -> textseek::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(textseek::TextSeekError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> &'static str {
    r#"# textseek configuration file

[scan]
# Directory to scan recursively
directory = "./data"

# File name suffixes to include (plain suffix match, case-insensitive)
extensions = [".txt", ".log"]

# Exclude patterns (glob syntax)
# exclude = ["**/archive/**"]

[search]
# Keyword to look for (required)
keyword = "ERROR"

# Match with exact casing (default: false)
case_sensitive = false

# Skip unreadable files instead of aborting (default: false)
skip_unreadable = false
"#
}

fn run_config(args: &ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            e.exit_code()
        }
    }
}

fn run_config_validate_impl(config_path: &Path) -> textseek::Result<()> {
    if !config_path.exists() {
        return Err(textseek::TextSeekError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    // Exclude patterns must compile; exercises the same path as scanning.
    ExtensionFilter::new(&config.scan.extensions, &config.scan.exclude)?;

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> textseek::Result<String> {
    let config = load_config(config_path, false)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        _ => Ok(format_config_text(&config)),
    }
}

fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[scan]\n");
    let _ = writeln!(output, "  directory = \"{}\"", config.scan.directory.display());
    let _ = writeln!(output, "  extensions = {:?}", config.scan.extensions);
    if !config.scan.exclude.is_empty() {
        let _ = writeln!(output, "  exclude = {:?}", config.scan.exclude);
    }

    output.push_str("\n[search]\n");
    let _ = writeln!(output, "  keyword = \"{}\"", config.search.keyword);
    let _ = writeln!(output, "  case_sensitive = {}", config.search.case_sensitive);
    let _ = writeln!(output, "  skip_unreadable = {}", config.search.skip_unreadable);

    output
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
