use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use script_components_config::{Config, OutputFormat};
use script_components_engine::{
    ChangeSummary, Component, ComponentChange, content_hash, diff_components, io,
    is_component_paragraph,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Extract numbered production components from scripts
#[derive(Debug, Parser)]
#[command(name = "script-components", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the components of a script, or of every script in a directory
    Extract {
        path: PathBuf,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Report whether a paragraph would be numbered or is a header marker
    Check {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Compare the components of two scripts by number and hash
    Diff {
        old: PathBuf,
        new: PathBuf,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("Ignoring unreadable config: {e}");
            Config::default()
        }
    };

    let output = run(cli.command, &config)?;
    println!("{output}");
    Ok(())
}

fn run(command: Command, config: &Config) -> Result<String> {
    match command {
        Command::Extract { path, format } => {
            let format = format.map(OutputFormat::from).unwrap_or(config.format);
            let path = config.resolve_script_path(&path);
            if path.is_dir() {
                extract_directory(&path, format)
            } else {
                let components = load(&path)?;
                render_components(&components, format)
            }
        }
        Command::Check { text } => Ok(render_check(&text)),
        Command::Diff { old, new, format } => {
            let format = format.map(OutputFormat::from).unwrap_or(config.format);
            let previous = load(&config.resolve_script_path(&old))?;
            let current = load(&config.resolve_script_path(&new))?;
            let changes = diff_components(&previous, &current);
            render_changes(&changes, format)
        }
    }
}

fn load(path: &Path) -> Result<Vec<Component>> {
    io::load_components(path, content_hash)
        .with_context(|| format!("Failed to extract components from '{}'", path.display()))
}

fn extract_directory(dir: &Path, format: OutputFormat) -> Result<String> {
    let files = io::scan_scripts(dir)?;
    log::info!("Extracting {} scripts from {}", files.len(), dir.display());

    let mut by_file = BTreeMap::new();
    for file in &files {
        let relative = file.strip_prefix(dir).unwrap_or(file);
        by_file.insert(relative.display().to_string(), load(file)?);
    }

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&by_file)?),
        OutputFormat::Text => {
            let mut sections = Vec::new();
            for (name, components) in &by_file {
                sections.push(format!(
                    "== {name}\n{}",
                    render_components(components, OutputFormat::Text)?
                ));
            }
            Ok(sections.join("\n\n"))
        }
    }
}

fn render_components(components: &[Component], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(components)?),
        OutputFormat::Text if components.is_empty() => Ok("(no components)".to_string()),
        OutputFormat::Text => Ok(components
            .iter()
            .map(|c| {
                let words = if c.word_count == 1 { "word" } else { "words" };
                format!("C{} ({} {words}) {}", c.number, c.word_count, c.content)
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn render_check(text: &str) -> String {
    if is_component_paragraph(text) {
        format!("component: {}", text.trim())
    } else {
        format!("header marker: {}", text.trim())
    }
}

fn render_changes(changes: &[ComponentChange], format: OutputFormat) -> Result<String> {
    let summary = ChangeSummary::from_changes(changes);

    if let OutputFormat::Json = format {
        let report = serde_json::json!({ "summary": summary, "changes": changes });
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut lines: Vec<String> = changes
        .iter()
        .filter_map(|change| match change {
            ComponentChange::Added(c) => Some(format!("+ C{} {}", c.number, c.content)),
            ComponentChange::Removed(c) => Some(format!("- C{} {}", c.number, c.content)),
            ComponentChange::Modified { previous, current } => Some(format!(
                "~ C{} {} -> {}",
                current.number, previous.content, current.content
            )),
            ComponentChange::Unchanged { .. } => None,
        })
        .collect();
    lines.push(format!(
        "{} added, {} removed, {} modified, {} unchanged",
        summary.added, summary.removed, summary.modified, summary.unchanged
    ));
    Ok(lines.join("\n"))
}
