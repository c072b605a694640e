//! Scoped CSS CLI - scope-css
//!
//! Scopes component stylesheets and prints the resulting <style> contents

use clap::{Arg, ArgAction, Command};
use std::path::Path;
use std::process;

use anyhow::Context;
use scoped_css::{Node, ScopeConfig};
use scoped_css_cli::{build_registry, expand_inputs, render_report, scope_files, ScopeOptions};

fn main() {
    env_logger::init();

    let matches = Command::new("scope-css")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scope component CSS to a single component instance")
        .arg(
            Arg::new("inputs")
                .value_name("CSS")
                .num_args(1..)
                .required(true)
                .help("CSS files or glob patterns"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to a JSON scope configuration"),
        )
        .arg(
            Arg::new("tree")
                .short('t')
                .long("tree")
                .value_name("PATH")
                .help("Path to the component's render tree as JSON"),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .action(ArgAction::SetTrue)
                .help("Use numbered tokens instead of random ones"),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .action(ArgAction::SetTrue)
                .help("Print stylesheets as <style> elements"),
        )
        .get_matches();

    let inputs: Vec<String> = matches
        .get_many::<String>("inputs")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let result = run(
        &inputs,
        matches.get_one::<String>("config").map(Path::new),
        matches.get_one::<String>("tree").map(Path::new),
        matches.get_flag("sequential"),
        matches.get_flag("html"),
    );

    match result {
        Ok(report) => println!("{}", report),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

fn run(
    inputs: &[String],
    config: Option<&Path>,
    tree: Option<&Path>,
    sequential: bool,
    html: bool,
) -> anyhow::Result<String> {
    let config = match config {
        Some(path) => ScopeConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ScopeConfig::default(),
    };
    let tree = tree
        .map(|path| {
            Node::load(path).with_context(|| format!("failed to load tree {}", path.display()))
        })
        .transpose()?;

    let options = ScopeOptions {
        config,
        sequential,
        tree,
    };
    let registry = build_registry(&options)?;
    let files = expand_inputs(inputs)?;
    let results = scope_files(&files, &registry, options.tree.as_ref())?;
    render_report(&results, &registry, html)
}
