use std::path::PathBuf;
use std::time::Instant;

use polycube_io::{format_solution, load_problem};
use polycube_solver::solve;

#[cfg(feature = "telemetry-subscriber")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("polycube_solver=trace,polycube_io=info,polycube_cli=info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(not(feature = "telemetry-subscriber"))]
fn init_tracing() {}

fn usage() -> &'static str {
    "polycube-cli\n\
\n\
USAGE:\n\
  polycube-cli solve --file <problem.toml> [--limit <N>]\n\
  polycube-cli count --file <problem.toml> --limit <N>\n\
\n\
EXAMPLES:\n\
  polycube-cli solve --file box.toml --limit 1\n\
  polycube-cli count --file box.toml --limit 100\n"
}

fn parse_arg_value(args: &[String], i: &mut usize) -> Result<String, String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| "missing value".to_string())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}\n\n{}", usage());
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        return Err("missing command".to_string());
    }

    let cmd = args[1].as_str();
    let mut file: Option<PathBuf> = None;
    let mut limit: usize = 1;

    let mut i = 2usize;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                file = Some(PathBuf::from(parse_arg_value(&args, &mut i)?));
            }
            "--limit" | "-l" => {
                let v = parse_arg_value(&args, &mut i)?;
                limit = v
                    .parse::<usize>()
                    .map_err(|_| "invalid --limit".to_string())?;
            }
            "--help" | "-h" => {
                println!("{}", usage());
                return Ok(());
            }
            other => {
                return Err(format!("unknown arg: {other}"));
            }
        }
        i += 1;
    }

    let Some(file) = file else {
        return Err("missing required flag: --file".to_string());
    };

    let problem = load_problem(&file).map_err(|e| e.to_string())?;

    match cmd {
        "solve" => {
            let start = Instant::now();
            let mut found = 0u32;
            let stats = solve(&problem, limit, |sol| {
                found += 1;
                println!("solution {found}:");
                println!("{}", format_solution(&problem, sol));
            })
            .map_err(|e| e.to_string())?;
            eprintln!(
                "{found} solution(s) in {:.3}s ({} nodes, {} branches, depth {})",
                start.elapsed().as_secs_f64(),
                stats.nodes_visited,
                stats.branches,
                stats.max_depth
            );
        }
        "count" => {
            let start = Instant::now();
            let n = polycube_solver::count(&problem, limit).map_err(|e| e.to_string())?;
            println!("{n}");
            eprintln!("counted in {:.3}s", start.elapsed().as_secs_f64());
        }
        _ => {
            return Err(format!("unknown command: {cmd}"));
        }
    }

    Ok(())
}
