/*
  Gatewidth, a grid-puzzle planning engine.
  Copyright (C) 2026 The Gatewidth Authors (see AUTHORS.md file)

  Gatewidth is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Gatewidth is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! The `gatewidth` command-line entry point: `solve <map-path> [--algo N]
//! [--max-width N]`.

use std::{env, process::ExitCode};

use gatewidth_base::loader;
use gatewidth_engine::{config::Algorithm, search, EngineConfig};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("usage: gatewidth solve <map-path> [--algo 1|2|3] [--max-width N]");
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "solve" => run_solve(&args[2..]),
        other => {
            println!("unrecognized mode of operation {other:?}");
            ExitCode::FAILURE
        }
    }
}

fn run_solve(rest: &[String]) -> ExitCode {
    let Some(map_path) = rest.first() else {
        println!("usage: gatewidth solve <map-path> [--algo 1|2|3] [--max-width N]");
        return ExitCode::FAILURE;
    };

    let mut config = EngineConfig::new();
    let mut i = 1;
    while i < rest.len() {
        match rest[i].as_str() {
            "--algo" => {
                let Some(value) = rest.get(i + 1) else {
                    println!("--algo requires a value");
                    return ExitCode::FAILURE;
                };
                config.algorithm = match value.as_str() {
                    "1" => Algorithm::Bfs,
                    "2" => Algorithm::BfsDedup,
                    "3" => Algorithm::IteratedWidth,
                    other => {
                        println!("unknown algorithm {other:?}, expected 1, 2, or 3");
                        return ExitCode::FAILURE;
                    }
                };
                i += 2;
            }
            "--max-width" => {
                let Some(value) = rest.get(i + 1) else {
                    println!("--max-width requires a value");
                    return ExitCode::FAILURE;
                };
                match value.parse::<usize>() {
                    Ok(w) => config.max_width = Some(w),
                    Err(_) => {
                        println!("--max-width expects an integer, got {value:?}");
                        return ExitCode::FAILURE;
                    }
                }
                i += 2;
            }
            other => {
                println!("unrecognized option {other:?}");
                return ExitCode::FAILURE;
            }
        }
    }

    let state = match loader::load(map_path) {
        Ok(state) => state,
        Err(e) => {
            println!("failed to load {map_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match search::run(&state, &config) {
        Ok(stats) => {
            println!("{stats}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("search failed: {e}");
            ExitCode::FAILURE
        }
    }
}
