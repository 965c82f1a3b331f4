mod args;
mod demo;

pub use args::{Args, DEFAULT_SEED};
pub use demo::{demo_data, run_demo};

use crate::core::matrix::DType;
use crate::stats::{NanStdevOptions, nanstdev_value};
use anyhow::{Context, Result};
use log::{LevelFilter, debug};
use schemars::schema_for;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn read_json_stdin() -> Result<Value> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("cannot read stdin")?;
    serde_json::from_str(&text).context("stdin is not valid JSON")
}

/// Options file first, then command-line overrides.
pub fn resolve_options(args: &Args) -> Result<NanStdevOptions> {
    let mut opts = match &args.options {
        Some(path) => NanStdevOptions::from_json(&read_json(path)?)?,
        None => NanStdevOptions::default(),
    };
    opts.bias |= args.bias;
    if let Some(dim) = args.dim {
        opts.dim = dim;
    }
    if let Some(name) = &args.dtype {
        opts.dtype = DType::from_name(name)?;
    }
    if !args.encoding.is_empty() {
        opts.encoding.extend(args.encoding.iter().copied());
    }
    if let Some(field) = &args.field {
        opts.field = Some(field.clone());
    }
    opts.validate()?;
    Ok(opts)
}

/// Executes one invocation and returns what should be printed.
pub fn run(args: &Args) -> Result<String> {
    if args.schema {
        return Ok(serde_json::to_string_pretty(&schema_for!(NanStdevOptions))?);
    }
    if args.demo {
        return Ok(run_demo(args.seed)?.join("\n"));
    }

    let opts = resolve_options(args)?;
    let input = match &args.input {
        Some(path) => read_json(path)?,
        None => read_json_stdin()?,
    };
    debug!("resolved options: {}", serde_json::to_string(&opts)?);

    let result = nanstdev_value(&input, &opts)?;
    Ok(serde_json::to_string(&result)?)
}
