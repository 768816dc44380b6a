use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;

use mst::{build_mst, build_mst_from};
use report::print_mst_results;

mod error;
mod export;
mod graph;
mod input;
mod mst;
mod report;
mod samples;
mod verify;

#[derive(Parser)]
#[clap(author, version, about = "Minimum spanning trees with Prim's algorithm", long_about = None)]
enum Cli {
    /// Run the sparse, dense and varied-weights sample graphs
    Demo(Demo),
    /// Build the tree of an edge-list file (`u v weight` per line)
    Run(Run),
}

#[derive(Parser)]
struct Demo {
    /// Build the sample trees on the rayon pool
    #[clap(short, long)]
    parallel: bool,

    /// Cross-check every tree against Kruskal's algorithm
    #[clap(long)]
    verify: bool,

    #[clap(short, long)]
    verbose: bool,
}

#[derive(Parser)]
struct Run {
    file: PathBuf,

    /// Start node, defaults to the smallest node name
    #[clap(short, long)]
    start: Option<String>,

    /// Reject malformed or disconnected graphs
    #[clap(long)]
    strict: bool,

    #[clap(long)]
    verify: bool,

    /// Also write the tree as GraphML
    #[clap(short, long)]
    graphml: Option<PathBuf>,

    /// Name printed in the report header, defaults to the file stem
    #[clap(short, long)]
    label: Option<String>,

    #[clap(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli {
        Cli::Demo(demo) => {
            setup_logging(demo.verbose)?;
            run_demo(demo)
        }
        Cli::Run(run) => {
            setup_logging(run.verbose)?;
            run_file(run)
        }
    }
}

fn run_demo(demo: Demo) -> anyhow::Result<()> {
    let samples = samples::all();

    let trees = if demo.parallel {
        samples
            .par_iter()
            .map(|(label, graph)| {
                build_mst(graph).with_context(|| format!("{} graph", label))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    } else {
        samples
            .iter()
            .map(|(label, graph)| {
                build_mst(graph).with_context(|| format!("{} graph", label))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    let mut out = std::io::stdout().lock();
    for ((label, graph), tree) in samples.iter().zip(trees.iter()) {
        if demo.verify {
            verify::check(graph, tree).with_context(|| format!("{} graph", label))?;
            log::info!("✔️ Verified {} graph", label);
        }
        print_mst_results(&mut out, label, tree)?;
    }
    out.flush()?;
    Ok(())
}

fn run_file(run: Run) -> anyhow::Result<()> {
    let graph = input::load_edge_list(&run.file)?;
    log::info!(
        "Loaded {} nodes from {}",
        graph.node_count(),
        run.file.display()
    );

    if run.strict {
        graph.validate()?;
    }

    let tree = match run.start {
        Some(start) => build_mst_from(&graph, start)?,
        None => build_mst(&graph)?,
    };
    let tree = if run.strict {
        tree.ensure_spanning()?
    } else {
        tree
    };
    log::info!(
        "Tree from {} reaches {} of {} nodes",
        tree.start(),
        tree.reached(),
        tree.node_count()
    );

    if run.verify {
        verify::check(&graph, &tree)?;
        log::info!("✔️ Verified tree against Kruskal");
    }

    let label = run.label.unwrap_or_else(|| {
        run.file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input".into())
    });
    let mut out = std::io::stdout().lock();
    print_mst_results(&mut out, &label, &tree)?;
    out.flush()?;

    if let Some(path) = run.graphml {
        let file = File::create(&path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        export::write_graphml(&tree, BufWriter::new(file))?;
        log::info!("Wrote tree to {}", path.display());
    }

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<(), fern::InitError> {
    let base_config = fern::Dispatch::new();

    // Separate file config so we can include year, month and day in file logs
    let file_config = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Trace)
        .chain(
            OpenOptions::new()
                .truncate(true)
                .write(true)
                .create(true)
                .open("program.log")?,
        );

    let stdout_config = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(if verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .chain(std::io::stderr());

    base_config.chain(stdout_config).chain(file_config).apply()?;

    Ok(())
}
