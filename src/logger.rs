// Logger - Colored console output with timestamps

use chrono::Local;
use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Copy)]
pub enum Level {
	Info,
	Success,
	Warning,
	Error,
	Debug,
}

pub fn set_verbose(enabled: bool) {
	VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
	VERBOSE.load(Ordering::Relaxed)
}

/// Prints a timestamped, colored log message to stdout. Debug
/// messages only appear with --verbose.
pub fn log(level: Level, message: &str) {
	if matches!(level, Level::Debug) && !is_verbose() {
		return;
	}

	let time = Local::now().format("%H:%M:%S").to_string().dimmed();
	let icon = match level {
		Level::Info =>    "ℹ".blue().bold(),
		Level::Success => "✔".bright_green().bold(),
		Level::Warning => "⚠".yellow().bold(),
		Level::Error =>   "✘".red().bold(),
		Level::Debug =>   "⚙".bright_blue().bold(),
	};
	println!("[{}] {} {}", time, icon, message);
}

/// Prints a section header with visual separation.
pub fn header(title: &str) {
	println!();
	println!("{}", format!("─── {} ───", title).bright_blue().bold());
}

/// Prints a build summary with statistics.
pub fn summary(written: usize, skipped: usize, duration_secs: f32) {
	println!();
	header("Summary");

	if written > 0 {
		println!("  {} {}", "Written:".bright_blue(), written);
	}
	if skipped > 0 {
		println!("  {} {}", "Skipped:".yellow(), skipped);
	}

	println!("  {} {:.2}s", "Duration:".bright_blue(), duration_secs);
	if written > 0 {
		let avg_ms = (duration_secs * 1000.0) / written as f32;
		println!("  {} {:.0}ms/emoji", "Average:".bright_blue(), avg_ms);
	}
	println!();
}
