//! Scoped CSS command line driver
//!
//! Reads component stylesheets, scopes each through one shared registry and
//! reports the inserted stylesheets together with the annotated render tree.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use scoped_css::{
    IdGenerator, NanoIdGenerator, Node, Registry, ScopeConfig, ScopeToken, SequentialIdGenerator,
    StyleSheetList,
};

pub type CliRegistry = Registry<Box<dyn IdGenerator + Send>, StyleSheetList>;

#[derive(Debug, Default)]
pub struct ScopeOptions {
    pub config: ScopeConfig,
    /// Number tokens `<prefix>0`, `<prefix>1`, ... instead of random ones.
    pub sequential: bool,
    /// Render tree the stylesheets belong to. Without one, no root selectors
    /// are known and only descendant forms are emitted.
    pub tree: Option<Node>,
}

#[derive(Debug)]
pub struct ScopedFile {
    pub path: PathBuf,
    pub token: ScopeToken,
    pub tree: Option<Node>,
}

pub fn build_registry(options: &ScopeOptions) -> Result<CliRegistry> {
    let id_generator: Box<dyn IdGenerator + Send> = if options.sequential {
        Box::new(SequentialIdGenerator::new(options.config.token_prefix.clone())?)
    } else {
        Box::new(NanoIdGenerator::new(&options.config)?)
    };
    Ok(Registry::with_collaborators(id_generator, StyleSheetList::new()))
}

/// Expand glob patterns into the list of files they name, in the order given.
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let before = files.len();
        let paths =
            glob::glob(pattern).with_context(|| format!("invalid pattern {:?}", pattern))?;
        for path in paths {
            files.push(path.with_context(|| format!("failed to read a match of {:?}", pattern))?);
        }
        if files.len() == before {
            bail!("no files matched {:?}", pattern);
        }
    }
    Ok(files)
}

/// Scope every file through `registry`.
///
/// Files are read in parallel and scoped in input order, so sequential tokens
/// follow the command line.
pub fn scope_files(
    files: &[PathBuf],
    registry: &CliRegistry,
    tree: Option<&Node>,
) -> Result<Vec<ScopedFile>> {
    let start = Instant::now();

    let sources: Vec<(PathBuf, String)> = files
        .par_iter()
        .map(|path| -> Result<(PathBuf, String)> {
            let css = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path.clone(), css))
        })
        .collect::<Result<_>>()?;

    let empty = Node::fragment(Vec::<Node>::new());
    let mut results = Vec::with_capacity(sources.len());
    for (path, css) in sources {
        let annotated = registry.scope(&css, tree.unwrap_or(&empty));
        let token = registry
            .token_for(&css)
            .with_context(|| format!("no scope recorded for {}", path.display()))?;
        results.push(ScopedFile {
            path,
            token,
            tree: tree.map(|_| annotated),
        });
    }

    log::info!(
        "scoped {} files into {} stylesheets in {:?}",
        results.len(),
        registry.len(),
        start.elapsed()
    );
    Ok(results)
}

/// Render the stylesheets and annotated trees for printing.
pub fn render_report(results: &[ScopedFile], registry: &CliRegistry, html: bool) -> Result<String> {
    let sheets = registry.style_sheets();
    let mut out = Vec::new();

    for result in results {
        let css = sheets.get(result.token.as_str()).unwrap_or_default();
        if html {
            out.push(format!(
                "<!-- {} -->\n<style id=\"{}\">\n{}\n</style>",
                display(&result.path),
                result.token,
                css
            ));
        } else {
            out.push(format!(
                "/* {} -> {} */\n{}",
                display(&result.path),
                result.token,
                css
            ));
        }

        if let Some(tree) = &result.tree {
            out.push(tree.to_json_pretty()?);
        }
    }

    Ok(out.join("\n"))
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
