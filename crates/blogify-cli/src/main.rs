use anyhow::{Context, Result};
use blogify_config::Config;
use blogify_engine::{build_from_root, write_output};
use env_logger::Env;
use log::{info, warn};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

/// Where to read from and write to, as given on the command line.
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    paper_dir: PathBuf,
    /// Set when the paper argument names a `.tex` file.
    root: Option<PathBuf>,
    output: Option<PathBuf>,
}

/// `[PAPER] [OUTPUT]`; `None` when there are too many arguments.
fn parse_args(args: &[String]) -> Option<Invocation> {
    if args.len() > 2 {
        return None;
    }
    let paper = args.first().map(PathBuf::from);
    let output = args.get(1).map(PathBuf::from);

    let (paper_dir, root) = match paper {
        Some(path) if path.is_file() || path.extension().is_some_and(|ext| ext == "tex") => {
            let dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            (dir, Some(path))
        }
        Some(dir) => (dir, None),
        None => (PathBuf::from("."), None),
    };

    Some(Invocation {
        paper_dir,
        root,
        output,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("blogify");
    let Some(invocation) = parse_args(args.get(1..).unwrap_or_default()) else {
        eprintln!("Usage: {program} [paper-dir-or-tex-file] [output.html]");
        process::exit(1);
    };

    let config_path = Config::config_path(&invocation.paper_dir);
    let config = match Config::load_from_dir(&invocation.paper_dir) {
        Ok(Some(config)) => {
            info!("using config {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program} [paper-dir-or-tex-file] [output.html]");
            process::exit(1);
        }
    };

    let root = invocation
        .root
        .unwrap_or_else(|| config.root_file(&invocation.paper_dir));
    let output = invocation
        .output
        .unwrap_or_else(|| config.output_file(&invocation.paper_dir));

    let build = build_from_root(&root, &config.publication)
        .with_context(|| format!("failed to convert {}", root.display()))?;

    let failed = build.report.failures().count();
    if failed > 0 {
        warn!(
            "{failed} of {} bibliography sources could not be loaded",
            build.report.sources.len()
        );
    }

    write_output(&output, &build.html)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("wrote {}", output.display());
    Ok(())
}
