//! Minimal CLI: infer → (java classes | schema dump)
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;

use crate::codegen::{self, SourceFile};
use crate::element::{self, Element, Format};
use crate::error::Error;
use crate::inference::{name, InferenceOptions, StringTyping};
use crate::ir::Inferred;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer a class schema from one sample JSON/XML document per input and emit Java classes
#[derive(Parser, Debug)]
#[command(name = "pojo-infer", version)]
pub struct CommandLineInterface {
    /// more log output (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and emit one Java class per discovered object shape
    Classes(ClassesOut),
    /// infer and print the class registry as JSON (debug view)
    Schema(SchemaOut),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FormatArg {
    /// by file extension, else by first character
    Auto,
    Json,
    Xml,
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// input format
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,

    /// JSON Pointer to select the sample inside each document (e.g. /data/items/0)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; must yield exactly one value
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns.
    /// Every input is a separate sample with its own set of classes.
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
struct Naming {
    /// fully-qualified root class name, e.g. com.example.Root (one input only)
    #[arg(long)]
    root: Option<String>,

    /// package for the root classes; each input's root class is named after its file stem
    #[arg(long)]
    package: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct InferenceSettings {
    /// type JSON strings by their content ("42" ⇒ int) instead of always String
    #[arg(long, default_value_t = false)]
    sniff_strings: bool,

    /// merge structurally identical classes
    #[arg(long, default_value_t = false)]
    dedupe: bool,
}

#[derive(clap::Parser, Debug)]
struct ClassesOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    naming: Naming,

    #[command(flatten)]
    inference_settings: InferenceSettings,

    /// source root to write <package dirs>/<Name>.java into (stdout if omitted)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    naming: Naming,

    #[command(flatten)]
    inference_settings: InferenceSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

struct Job {
    path: PathBuf,
    root_name: String,
}

#[derive(Serialize)]
struct SchemaView<'a> {
    input: String,
    #[serde(flatten)]
    inferred: &'a Inferred,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InferenceSettings {
    fn options(&self) -> InferenceOptions {
        InferenceOptions {
            string_typing: if self.sniff_strings { StringTyping::Sniff } else { StringTyping::Literal },
            dedupe: self.dedupe,
        }
    }
}

impl InputSettings {
    fn jobs(&self, naming: &Naming) -> Result<Vec<Job>> {
        let paths = resolve_file_path_patterns(&self.input).context("failed to resolve input file paths")?;
        match (&naming.root, &naming.package) {
            (Some(root), _) => {
                let [path] = paths.as_slice() else {
                    bail!(
                        "--root names exactly one input but {} matched; use --package for several",
                        paths.len()
                    );
                };
                Ok(vec![Job { path: path.clone(), root_name: root.clone() }])
            }
            (None, Some(package)) => paths
                .into_iter()
                .map(|path| {
                    let stem = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .ok_or_else(|| anyhow!("cannot derive a class name from {}", path.display()))?;
                    let simple_name = name::capitalize_first(stem)?;
                    Ok(Job { root_name: name::qualify(package, &simple_name), path })
                })
                .collect(),
            (None, None) => bail!("either --root or --package is required"),
        }
    }

    fn load_element(&self, path: &Path) -> Result<Element> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read source file {}", path.display()))?;
        let format = match self.format {
            FormatArg::Json => Format::Json,
            FormatArg::Xml => Format::Xml,
            FormatArg::Auto => Format::from_path(path).unwrap_or_else(|| Format::detect(&source)),
        };
        match format {
            Format::Xml => {
                if self.json_pointer.is_some() || self.jq_expr.is_some() {
                    bail!(Error::invalid(format!(
                        "--json-pointer/--jq-expr only apply to JSON input ({} is XML)",
                        path.display()
                    )));
                }
                Ok(element::xml::parse(&source)?)
            }
            Format::Json => {
                let mut value = crate::path_de::parse_json(&source)?;
                if let Some(pointer) = self.json_pointer.as_ref() {
                    value = value
                        .pointer(pointer)
                        .cloned()
                        .ok_or_else(|| Error::invalid(format!("JSON pointer `{pointer}` selects nothing")))?;
                }
                if let Some(jq_expr) = self.jq_expr.as_ref() {
                    value = crate::jq_exec::select_one(jq_expr, &value)?;
                }
                Ok(element::json::from_value(&value))
            }
        }
    }

    /// Each input is inferred independently, in parallel, with a private registry.
    fn infer_all(&self, naming: &Naming, options: &InferenceOptions) -> Result<Vec<(PathBuf, Inferred)>> {
        let jobs = self.jobs(naming)?;
        jobs.par_iter()
            .map(|job| {
                tracing::info!(input = %job.path.display(), root = %job.root_name, "inferring");
                let element = self.load_element(&job.path)
                    .with_context(|| format!("failed to load {}", job.path.display()))?;
                let inferred = crate::infer(&element, &job.root_name, options)
                    .with_context(|| format!("inference failed for {}", job.path.display()))?;
                tracing::info!(input = %job.path.display(), classes = inferred.registry.len(), "inferred");
                Ok((job.path.clone(), inferred))
            })
            .collect()
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn init_logging(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
        // a second init (tests, embedding) keeps the first subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Classes(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let options = target.inference_settings.options();
                let results = target.input_settings.infer_all(&target.naming, &options)?;

                let mut files = Vec::<SourceFile>::new();
                for (path, inferred) in &results {
                    let emitted = codegen::emit_registry(&inferred.registry)
                        .with_context(|| format!("failed to emit classes for {}", path.display()))?;
                    if emitted.is_empty() {
                        tracing::warn!(
                            input = %path.display(),
                            root = ?inferred.root,
                            "sample root is not an object; no classes to emit"
                        );
                    }
                    files.extend(emitted);
                }
                write_sources(&files, target.out_dir.as_deref())
            }
            Command::Schema(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let options = target.inference_settings.options();
                let results = target.input_settings.infer_all(&target.naming, &options)?;
                let views = results
                    .iter()
                    .map(|(path, inferred)| SchemaView { input: path.display().to_string(), inferred })
                    .collect::<Vec<_>>();
                let schema_src = match views.as_slice() {
                    [single] => serde_json::to_string_pretty(single.inferred)?,
                    many => serde_json::to_string_pretty(many)?,
                };
                match target.out.as_ref() {
                    Some(out) => write_file(out, &schema_src),
                    None => {
                        println!("{schema_src}");
                        Ok(())
                    }
                }
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_file(dest: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(dest, contents).with_context(|| format!("failed to write {}", dest.display()))
}

fn write_sources(files: &[SourceFile], out_dir: Option<&Path>) -> Result<()> {
    let Some(out_dir) = out_dir else {
        for file in files {
            println!("// {}", file.path.display());
            println!("{}", file.contents);
        }
        return Ok(());
    };

    let mut written = HashSet::<PathBuf>::new();
    for file in files {
        let dest = out_dir.join(&file.path);
        if !written.insert(dest.clone()) {
            tracing::warn!(path = %dest.display(), "class generated by an earlier input is overwritten");
        }
        write_file(&dest, &file.contents)?;
        tracing::info!(path = %dest.display(), "wrote class");
    }
    eprintln!(
        "{} {} class file(s) under {}",
        "generated".green().bold(),
        written.len(),
        out_dir.display()
    );
    Ok(())
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let before = out.len();
            for entry in glob::glob(pattern).with_context(|| format!("bad glob pattern: {pattern}"))? {
                out.push(entry?);
            }
            if out.len() == before {
                // explicitly a glob but matched nothing
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
