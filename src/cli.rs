use clap::builder::{styling, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_LIMIT, DEFAULT_MIN_SCORE, GLOVE_FILE, KEYWORDS_FILE, VECTORS_FILE};

fn styles() -> Styles {
	Styles::styled()
		.header(styling::Style::new().bold().fg_color(Some(styling::Color::Ansi(styling::AnsiColor::Blue))))
		.usage(styling::Style::new().bold().fg_color(Some(styling::Color::Ansi(styling::AnsiColor::Blue))))
		.literal(styling::Style::new().fg_color(Some(styling::Color::Ansi(styling::AnsiColor::Blue))))
		.placeholder(styling::Style::new().fg_color(Some(styling::Color::Ansi(styling::AnsiColor::Yellow))))
		.valid(styling::Style::new().fg_color(Some(styling::Color::Ansi(styling::AnsiColor::Blue))))
		.invalid(styling::Style::new().fg_color(Some(styling::Color::Ansi(styling::AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "emovec",
	version,
	about = "Inverse-frequency weighted emoji embeddings",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {emovec} {build}                              {build_desc}
  {emovec} {build} {build_args}    {build_custom_desc}
  {emovec} {search} {search_args}           {search_desc}
  {emovec} {emojify} {emojify_args}      {emojify_desc}
  {emovec} {help} {help_args}                        {help_desc}",
		title = "Examples:".bright_blue().bold(),
		emovec = "emovec".bright_blue(),
		build = "build".yellow(),
		build_desc = "Build emoji vectors".dimmed(),
		build_args = "-g glove.txt -o emoji.txt",
		build_custom_desc = "Custom table paths".dimmed(),
		search = "search".yellow(),
		search_args = "\"happy face\" -n 5",
		search_desc = "Find nearest emoji".dimmed(),
		emojify = "emojify".yellow(),
		emojify_args = "\"pizza party tonight\"",
		emojify_desc = "Swap words for emoji".dimmed(),
		help = "help".yellow(),
		help_args = "build",
		help_desc = "Show help for build".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Build emoji vectors from word embeddings and keyword lists
	Build {
		/// GloVe word embedding file
		#[arg(short = 'g', long = "glove", default_value = GLOVE_FILE)]
		glove: PathBuf,

		/// Emoji keyword JSON file
		#[arg(short = 'k', long = "keywords", default_value = KEYWORDS_FILE)]
		keywords: PathBuf,

		/// Output emoji vector file
		#[arg(short = 'o', long = "output", default_value = VECTORS_FILE)]
		output: PathBuf,
	},

	/// Search emoji by text description
	Search {
		/// Search query (text description)
		#[arg(value_name = "QUERY")]
		query: String,

		/// Built emoji vector file
		#[arg(short = 'e', long = "vectors", default_value = VECTORS_FILE)]
		vectors: PathBuf,

		/// GloVe word embedding file
		#[arg(short = 'g', long = "glove", default_value = GLOVE_FILE)]
		glove: PathBuf,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_LIMIT)]
		limit: usize,

		/// Minimum similarity score (0.0-1.0)
		#[arg(short = 's', long = "score", default_value_t = DEFAULT_MIN_SCORE)]
		min_score: f32,
	},

	/// Replace every word of a text with its nearest emoji
	Emojify {
		/// Text to translate
		#[arg(value_name = "TEXT")]
		text: String,

		/// Built emoji vector file
		#[arg(short = 'e', long = "vectors", default_value = VECTORS_FILE)]
		vectors: PathBuf,

		/// GloVe word embedding file
		#[arg(short = 'g', long = "glove", default_value = GLOVE_FILE)]
		glove: PathBuf,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
