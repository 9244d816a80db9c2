//! Emovec - inverse-frequency weighted emoji embeddings
//!
//! A command-line tool that blends GloVe word vectors into one unit
//! vector per emoji, weighting rare keywords above common ones, then
//! searches and rewrites text against the built table.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::path::Path;
use std::time::Instant;

use emovec::blend::write_vectors;
use emovec::cli::{Cli, Command};
use emovec::config::UNKNOWN_PLACEHOLDER;
use emovec::glove::load_embeddings;
use emovec::keywords::load_keywords;
use emovec::logger::{self, log, summary, Level};
use emovec::matcher::{embed_query, emojify, load_emoji_table};
use emovec::weights::compute_weights;

fn main() -> Result<()> {
	let cli = Cli::parse();

	logger::set_verbose(cli.verbose);

	match cli.command {
		Command::Build { glove, keywords, output } => {
			run_build(&glove, &keywords, &output)
		}
		Command::Search { query, vectors, glove, limit, min_score } => {
			run_search(&query, &vectors, &glove, limit, min_score)
		}
		Command::Emojify { text, vectors, glove } => {
			run_emojify(&text, &vectors, &glove)
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help().unwrap();
				} else {
					eprintln!("Unknown subcommand: {}", sub);
					cmd.print_help().unwrap();
				}
			} else {
				cmd.print_help().unwrap();
			}
			Ok(())
		}
	}
}

fn run_build(glove: &Path, keywords: &Path, output: &Path) -> Result<()> {
	print_header();
	let start = Instant::now();

	log(Level::Info, "Loading word embeddings...");
	let embeddings = load_embeddings(glove)?;
	log(Level::Success, &format!("Loaded {} word vectors", embeddings.len()));
	if embeddings.skipped_lines > 0 {
		log(
			Level::Info,
			&format!("Skipped {} unusable lines (--verbose for details)", embeddings.skipped_lines),
		);
	}

	log(Level::Info, "Loading emoji keywords...");
	let table = load_keywords(keywords)?;
	log(Level::Success, &format!("Loaded keywords for {} emoji", table.len()));

	log(Level::Info, "Computing keyword frequencies...");
	let weights = compute_weights(&table, &embeddings);
	log(Level::Success, &format!("Weighted {} distinct keywords", weights.len()));

	log(Level::Info, "Blending emoji vectors...");
	let stats = write_vectors(&table, &embeddings, &weights, output)?;

	if stats.skipped > 0 {
		log(Level::Warning, &format!("{} emoji produced no vector", stats.skipped));
	}
	log(
		Level::Success,
		&format!("Saved {} emoji vectors to {}", stats.written, output.display()),
	);

	summary(stats.written, stats.skipped, start.elapsed().as_secs_f32());
	Ok(())
}

fn run_search(query: &str, vectors: &Path, glove: &Path, limit: usize, min_score: f32) -> Result<()> {
	print_header();
	let start = Instant::now();

	log(Level::Info, &format!("Searching: {}", query.bright_blue()));

	let embeddings = load_embeddings(glove)?;
	let table = load_emoji_table(vectors)?;
	log(
		Level::Debug,
		&format!("Loaded {} word vectors, {} emoji vectors", embeddings.len(), table.len()),
	);
	if table.skipped_lines > 0 {
		log(
			Level::Warning,
			&format!("{} unusable lines in {}", table.skipped_lines, vectors.display()),
		);
	}

	let Some(query_vector) = embed_query(query, &embeddings) else {
		log(Level::Error, "No word in the query has a known embedding");
		std::process::exit(1);
	};

	let results: Vec<_> = table
		.rank(&query_vector)
		.into_iter()
		.filter(|m| m.score >= min_score)
		.take(limit)
		.collect();

	if results.is_empty() {
		log(Level::Warning, "No matches found");
		return Ok(());
	}

	log(
		Level::Success,
		&format!("Found {} matches in {}ms", results.len(), start.elapsed().as_millis()),
	);
	println!();

	for (i, result) in results.iter().enumerate() {
		let rank = format!("#{}", i + 1).bright_blue().bold();
		let score_pct = format!("{:.0}%", result.score * 100.0).dimmed();
		println!("  {} {} {}", rank, result.symbol, score_pct);
	}

	println!();
	Ok(())
}

fn run_emojify(text: &str, vectors: &Path, glove: &Path) -> Result<()> {
	print_header();

	let embeddings = load_embeddings(glove)?;
	let table = load_emoji_table(vectors)?;

	if table.is_empty() {
		log(Level::Error, "Emoji vector table is empty (run 'emovec build' first)");
		std::process::exit(1);
	}
	if table.skipped_lines > 0 {
		log(
			Level::Warning,
			&format!("{} unusable lines in {}", table.skipped_lines, vectors.display()),
		);
	}

	let symbols = emojify(text, &embeddings, &table);
	if symbols.is_empty() {
		log(Level::Warning, "Nothing to emojify");
		return Ok(());
	}

	println!();
	println!("  {}", symbols.join(" "));
	println!();

	let unmatched = symbols.iter().filter(|s| s.as_str() == UNKNOWN_PLACEHOLDER).count();
	if unmatched > 0 {
		log(Level::Warning, &format!("{} of {} words had no embedding", unmatched, symbols.len()));
	} else {
		log(Level::Success, &format!("Matched all {} words", symbols.len()));
	}

	Ok(())
}

fn print_header() {
	println!();
	println!(
		"{}",
		format!("─── Emovec v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
