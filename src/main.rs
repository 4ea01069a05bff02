use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use clap::Parser;
use log::info;
use pathgrow::{check, exact, compute_matching, WeightedGraph};

#[derive(Parser, Debug)]
#[clap(version, about = "Approximate maximum weight matching with the path growing algorithm", long_about = None)]
struct Args {
    /// the input graph; read from stdin if omitted
    #[clap(value_parser)]
    input: Option<PathBuf>,

    /// start paths at the vertex of maximum weighted degree
    #[clap(long)]
    heuristics: bool,

    /// verify the matching before printing it
    #[clap(long)]
    check: bool,

    /// also compute the optimum with the ILP solver and report the ratio
    #[clap(long)]
    optimum: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let g = match &args.input {
        Some(path) => WeightedGraph::new_from_reader(BufReader::new(File::open(path)?))?,
        None => WeightedGraph::new_from_stdin()?,
    };
    info!("read graph with {} vertices and {} edges", g.n(), g.m());

    let m = compute_matching(&g, args.heuristics)?;
    if args.check {
        check::check_matching(&g, &m)?;
        info!("matching is valid");
    }

    let mut out = BufWriter::new(std::io::stdout().lock());
    writeln!(out, "s {} {}", m.weight(), m.len())?;
    if args.optimum {
        let opt = exact::max_weight(&g)?;
        let ratio = if opt > 0.0 { m.weight() / opt } else { 1.0 };
        writeln!(out, "o {} {}", opt, ratio)?;
    }
    for (u, v) in m.pairs() {
        writeln!(out, "m {} {}", u + 1, v + 1)?;
    }
    out.flush()?;
    Ok(())
}
