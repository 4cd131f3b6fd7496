use std::env;
use std::time::Instant;

use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use tabular_dp::problems::edit_distance::EditDistance;
use tabular_dp::problems::lcs::Lcs;
use tabular_dp::problems::matrix_chain::MatrixChain;
use tabular_dp::problems::scs::Scs;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("table_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("{}", "=".repeat(72));
    eprintln!("tabular-dp probe: wall time and memory across input sizes");
    eprintln!("{}", "=".repeat(72));
    eprintln!("sizes: {:?}", options.sizes);
    eprintln!();

    for &len in &options.sizes {
        let s = synthetic_seq(len, 3);
        let t = synthetic_seq(len, 5);

        probe("lcs_length", len, || Lcs::new(&s, &t).length() as u64);
        probe("edit_distance", len, || {
            EditDistance::new(&s, &t).distance() as u64
        });
        if options.reconstruct {
            probe("scs_sequence", len, || Scs::new(&s, &t).sequence().len() as u64);
        }

        let dims = chain_dims(len.min(options.chain_limit));
        probe("matrix_chain", dims.len() - 1, || {
            MatrixChain::new(dims.clone())
                .expect("probe dims have at least two entries")
                .min_cost()
        });
        eprintln!();
    }
}

fn probe(name: &str, size: usize, run: impl FnOnce() -> u64) {
    let before = rss_kib();
    let start = Instant::now();
    let answer = run();
    let wall = start.elapsed().as_secs_f64();
    let after = rss_kib();
    eprintln!(
        "{name:>16} size={size:<8} wall_s={wall:<10.4} rss_delta_kib={:<8} answer={answer}",
        after.saturating_sub(before)
    );
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::everything());
    match get_current_pid() {
        Ok(pid) => sys.process(pid).map_or(0, |p| p.memory() / 1024),
        Err(_) => 0,
    }
}

/// Deterministic pseudo-random sequence over a 4-letter alphabet.
fn synthetic_seq(len: usize, stride: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i * stride + i / 7) % ALPHABET.len()])
        .collect()
}

fn chain_dims(n: usize) -> Vec<u64> {
    (0..=n.max(1)).map(|i| 5 + ((i * 13) % 40) as u64).collect()
}

struct Options {
    sizes: Vec<usize>,
    chain_limit: usize,
    reconstruct: bool,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut sizes = Vec::new();
        let mut chain_limit = 400;
        let mut reconstruct = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--sizes" => {
                    let list = args.next().ok_or("--sizes needs a comma-separated list")?;
                    sizes = list
                        .split(',')
                        .map(|s| s.trim().parse::<usize>().map_err(|e| e.to_string()))
                        .collect::<Result<_, _>>()?;
                }
                "--chain-limit" => {
                    chain_limit = args
                        .next()
                        .ok_or("--chain-limit needs a value")?
                        .parse::<usize>()
                        .map_err(|e| e.to_string())?;
                }
                "--reconstruct" => reconstruct = true,
                "--help" | "-h" => {
                    Self::print_help();
                    std::process::exit(0);
                }
                other => return Err(format!("unknown argument {other:?}")),
            }
        }
        if sizes.is_empty() {
            sizes = vec![1_000, 4_000, 8_000];
        }
        if sizes.iter().any(|&s| s == 0) {
            return Err("sizes must be positive".into());
        }
        Ok(Self {
            sizes,
            chain_limit,
            reconstruct,
        })
    }

    fn print_help() {
        eprintln!("usage: table_probe [--sizes N,N,...] [--chain-limit N] [--reconstruct]");
        eprintln!("  --sizes        sequence lengths to probe (default 1000,4000,8000)");
        eprintln!("  --chain-limit  cap on matrix-chain atoms (default 400)");
        eprintln!("  --reconstruct  also time full-table SCS reconstruction");
    }
}
