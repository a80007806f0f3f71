use std::error::Error;
use std::io::Write;
use std::time::Instant;

use clap::Parser;

use brutecube::prelude::*;

/// Face-level Rubik's cube scrambler and brute-force solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Apply a scramble sequence on the assembled cube
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Scramble the cube with random turns
	#[arg(short, long, default_value_t = false)]
	random: bool,

	/// Number of random turns when scrambling
	#[arg(long, default_value_t = 20)]
	scramble_length: usize,

	/// Solve the cube and report the best sequence found
	#[arg(long, default_value_t = false)]
	solve: bool,

	/// Maximum number of turns in the solution
	#[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
	depth: usize,

	/// Explore without the search-space pruning rules
	#[arg(long, default_value_t = false)]
	no_prune: bool,

	/// Output the cube as plain letters rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
	#[cfg(debug_assertions)]
	std::env::set_var("RUST_BACKTRACE", "1");

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn std::io::Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(args.output)?)
	};
	let mut cube = Cube::new();

	// Scramble the input cube
	if args.random {
		cube.apply_turns(random_sequence(args.scramble_length));
	}
	match parse_turns(&args.sequence) {
		Ok(turns) => cube.apply_turns(turns),
		Err(e) => return Err(e.into()),
	}

	// Print the cube (either as letters or with colors)
	if args.char_print {
		writeln!(out.as_mut(), "{}", cube)?;
	} else {
		cube.print();
	}

	if !args.solve {
		return Ok(());
	}

	let limits = SearchLimits::from_depth(args.depth);
	let mut solver = BruteForce::new(limits);
	if args.no_prune {
		solver = solver.without_pruning();
	}

	let start = Instant::now();
	let outcome = solver.solve(&cube)?;

	writeln!(
		out.as_mut(),
		"Best solution - {} colors in place:",
		solver.best().count
	)?;
	writeln!(out.as_mut(), "{} rotations", solver.best().turns.len())?;
	writeln!(out.as_mut(), "{}", solver.best())?;

	match outcome {
		Outcome::Achieved(_) => writeln!(out.as_mut(), "Solved.")?,
		Outcome::Exhausted => writeln!(out.as_mut(), "Not solved.")?,
		Outcome::BudgetStop => writeln!(out.as_mut(), "Not solved, budget exhausted.")?,
	}

	writeln!(out.as_mut(), "Longest explored sequence:")?;
	writeln!(out.as_mut(), "{}", solver.longest())?;

	let stats = solver.stats();
	writeln!(out.as_mut())?;
	writeln!(out.as_mut(), "Total depth: {}", stats.depth_reached)?;
	writeln!(
		out.as_mut(),
		"Total calls: {} of max {}",
		stats.calls,
		limits.max_calls
	)?;
	writeln!(
		out.as_mut(),
		"Total rotations: {} of max {}",
		stats.rotations,
		limits.max_rotations
	)?;
	writeln!(
		out.as_mut(),
		"Total time: {:.1} seconds",
		start.elapsed().as_secs_f64()
	)?;

	Ok(())
}
