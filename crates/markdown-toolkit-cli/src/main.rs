use anyhow::{Context, Result, bail};
use clap::Parser;
use markdown_toolkit_config::{Config, OutputFormat};
use markdown_toolkit_parser::{
    MarkdownDocument, parse_with_options,
    render::{outline, to_html},
};
use std::{
    collections::{HashMap, HashSet},
    io::{self, Read, Write},
    path::{Component, Path, PathBuf},
};

mod cli;

use cli::Cli;

/// Where Markdown text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn read(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read stdin")?;
                Ok(text)
            }
            Input::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn label(&self) -> String {
        match self {
            Input::Stdin => "stdin".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    fn stem(&self) -> String {
        match self {
            Input::Stdin => "stdin".to_string(),
            Input::File(path) => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "document".to_string()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let config = load_config(cli.config.as_deref())?;
    let config = apply_overrides(config, &cli);
    let inputs = resolve_inputs(&cli.inputs)?;
    log::debug!("{} input(s), format {}", inputs.len(), config.output.format);

    let out_paths = config
        .output
        .directory
        .as_deref()
        .map(|dir| output_paths(dir, &inputs, config.output.format));
    let mut stdout = io::stdout().lock();
    for (i, input) in inputs.iter().enumerate() {
        let text = input.read()?;
        let doc = parse_with_options(&text, &config.parser);
        let rendered = render(&doc, config.output.format)
            .with_context(|| format!("Failed to render {}", input.label()))?;

        match out_paths.as_ref().and_then(|paths| paths.get(i)) {
            Some(path) => {
                write_output(path, &rendered)?;
                log::info!("wrote {}", path.display());
            }
            None => stdout.write_all(rendered.as_bytes())?,
        }
    }
    Ok(())
}

/// Reads the config file given on the command line, or the default one.
/// A missing default config means defaults; a missing explicit one is an error.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file '{}' does not exist", path.display()),
        },
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "no config at {}; using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(depth) = cli.max_depth {
        config.parser.max_nesting_depth = depth;
    }
    if let Some(dir) = &cli.out_dir {
        config.output.directory = Some(dir.clone());
    }
    config
}

/// Expands glob patterns; plain paths pass through so a missing file is
/// reported when it is read.
fn resolve_inputs(args: &[String]) -> Result<Vec<Input>> {
    if args.is_empty() {
        return Ok(vec![Input::Stdin]);
    }
    let mut inputs = vec![];
    for arg in args {
        if arg == "-" {
            inputs.push(Input::Stdin);
        } else if arg.contains(['*', '?', '[']) {
            let mut matched = glob::glob(arg)
                .with_context(|| format!("Invalid glob pattern '{arg}'"))?
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("Failed to expand '{arg}'"))?;
            if matched.is_empty() {
                log::warn!("pattern '{arg}' matched no files");
            }
            matched.sort();
            inputs.extend(matched.into_iter().map(Input::File));
        } else {
            inputs.push(Input::File(PathBuf::from(arg)));
        }
    }
    Ok(inputs)
}

fn render(doc: &MarkdownDocument, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(doc)?;
            json.push('\n');
            json
        }
        OutputFormat::Html => to_html(doc),
        OutputFormat::Outline => outline(doc),
    })
}

/// One output file per input, named after the input's stem.
///
/// Files sharing a stem keep their directory under `dir`, so `a/x.md` and
/// `b/x.md` become `a/x.html` and `b/x.html`. A path that still clashes
/// (the same file twice, or stdin twice) gets a numeric suffix.
fn output_paths(dir: &Path, inputs: &[Input], format: OutputFormat) -> Vec<PathBuf> {
    let ext = format.extension();
    let mut stems: HashMap<String, usize> = HashMap::new();
    for input in inputs {
        *stems.entry(input.stem()).or_default() += 1;
    }

    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = input.stem();
            let name = match input {
                Input::File(path) if stems.get(&stem).is_some_and(|&n| n > 1) => {
                    relative_parent(path).join(&stem)
                }
                _ => PathBuf::from(&stem),
            };
            let mut path = dir.join(format!("{}.{ext}", name.display()));
            let mut n = 1;
            while !taken.insert(path.clone()) {
                n += 1;
                path = dir.join(format!("{}-{n}.{ext}", name.display()));
            }
            if n > 1 {
                log::warn!(
                    "output for {} would overwrite another input's; writing {}",
                    input.label(),
                    path.display()
                );
            }
            path
        })
        .collect()
}

/// The input's directory with root, prefix and `..` parts dropped.
fn relative_parent(path: &Path) -> PathBuf {
    path.parent()
        .map(|p| {
            p.components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .collect()
        })
        .unwrap_or_default()
}

fn write_output(path: &Path, rendered: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, rendered).with_context(|| format!("Failed to write {}", path.display()))
}
