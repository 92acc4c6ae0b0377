// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

//! Statewalk CLI entrypoint.
//!
//! Loads a diagram from a file (or `--demo`) and drives the simulation store
//! from stdin commands, printing node/edge state after every step. This is a
//! plain control surface: it does not draw the diagram, it reports status.

use std::error::Error;
use std::io::{self, BufRead};

use statewalk::format::mermaid::parse_state_diagram;
use statewalk::query;
use statewalk::sim::SimulationStore;

const DEMO_DIAGRAM: &str = "stateDiagram-v2
[*] --> Idle
Idle --> Loading
Loading --> Ready
Ready --> [*]
";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <diagram-file> [--json]\n  {program} --demo [--json]\n\nReads simulation commands from stdin, one per line:\n  next | n      step forward\n  prev | p      step backward\n  stop          mark the current state errored and freeze\n  reset         return to idle\n  path          print the default forward path\n  show | s      reprint the current state\n  quit | q      exit\n\n--json prints a JSON snapshot instead of the text summary.\n--demo uses a built-in demo diagram and cannot be combined with a file."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    json: bool,
    diagram_file: Option<String>,
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    for arg in args {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            _ => {
                if arg.starts_with('-') || options.diagram_file.is_some() {
                    return Err(());
                }
                options.diagram_file = Some(arg);
            }
        }
    }

    if options.demo == options.diagram_file.is_some() {
        return Err(());
    }

    Ok(options)
}

fn print_state(store: &SimulationStore, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
        return Ok(());
    }

    let phase = match store.phase() {
        statewalk::sim::SimulationPhase::Idle => "idle",
        statewalk::sim::SimulationPhase::Running => "running",
        statewalk::sim::SimulationPhase::Stopped => "stopped",
    };
    println!(
        "phase: {phase}  forward: {}  backward: {}",
        if store.can_go_forward() { "yes" } else { "no" },
        if store.can_go_backward() { "yes" } else { "no" },
    );

    for node in store.nodes() {
        let marker = if store.current_node_id() == Some(node.id()) {
            '*'
        } else {
            ' '
        };
        println!(
            "{marker} [{:<7}] {} ({})",
            node.status().as_str(),
            node.id(),
            node.label()
        );
    }
    for edge in store.edges() {
        let marker = if edge.animated() { " <<" } else { "" };
        println!("  {} -> {}{marker}", edge.source(), edge.target());
    }

    Ok(())
}

fn print_path(store: &SimulationStore) {
    let walk = query::default_walk(store.nodes(), store.edges());
    let path: Vec<&str> = walk.iter().map(|id| id.as_str()).collect();
    println!("path: {}", path.join(" -> "));
}

fn run(options: &CliOptions) -> Result<(), Box<dyn Error>> {
    let text = match &options.diagram_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEMO_DIAGRAM.to_owned(),
    };

    let diagram = parse_state_diagram(&text);
    if diagram.is_empty() {
        return Err("no valid states found".into());
    }

    let mut store = SimulationStore::new();
    store.load(diagram);
    store.set_source(Some(text));

    print_state(&store, options.json)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "next" | "n" => store.next_state(),
            "prev" | "p" => store.previous_state(),
            "stop" => store.stop_simulation(),
            "reset" => store.reset_simulation(),
            "path" => {
                print_path(&store);
                continue;
            }
            "show" | "s" => {}
            "quit" | "q" | "exit" => break,
            other => {
                eprintln!("statewalk: unknown command: {other}");
                continue;
            }
        }
        print_state(&store, options.json)?;
    }

    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "statewalk".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&options) {
        eprintln!("statewalk: {err}");
        std::process::exit(1);
    }
}
