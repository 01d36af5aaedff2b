use colored::*;
use memrank::MemrankError;
use memrank::marshal::{Decoded, Ranked};
use memrank::ranking::score;
use serde_json::{Value, json};

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }

    pub fn primary() -> Color {
        Color::White
    }

    pub fn accent() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }
}

/// Stable machine-readable code for an error
pub fn error_code(error: &MemrankError) -> &'static str {
    match error {
        MemrankError::InvalidArgument(_) => "INVALID_ARGUMENT",
        MemrankError::MalformedRecord { .. } => "MALFORMED_RECORD",
        MemrankError::Configuration(_) => "CONFIGURATION_ERROR",
        MemrankError::Logging(_) => "LOGGING_ERROR",
        MemrankError::Io(_) => "IO_ERROR",
        MemrankError::Json(_) => "JSON_ERROR",
        MemrankError::Other(_) => "OTHER_ERROR",
    }
}

/// Structured JSON form of an error, as printed in json output mode
pub fn error_response(error: &MemrankError) -> Value {
    let mut response = json!({
        "error": true,
        "code": error_code(error),
        "message": error.to_string(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    if let MemrankError::MalformedRecord { index, reason } = error {
        response["details"] = json!({
            "index": index,
            "reason": reason,
            "hint": "Drop --strict to skip malformed records"
        });
    }

    response
}

/// Report a MemrankError: structured JSON on stderr in json mode, a
/// `tracing` error event otherwise.
pub fn output_error_json(error: &MemrankError, output_format: &str) {
    if output_format == "json" {
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&error_response(error)).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        tracing::error!("{}", error);
    }
}

pub fn format_success(msg: &str) -> String {
    format!(
        "{} {}",
        "✓".color(CliColors::success()).bold(),
        msg.color(CliColors::success())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

fn truncate_content(content: &str, max_chars: usize) -> String {
    if content.chars().count() > max_chars {
        let head: String = content.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        content.to_string()
    }
}

pub fn print_ranked_list(ranked: &Ranked) {
    if ranked.skipped > 0 {
        println!(
            "{}",
            format_warning(&format!("Skipped {} malformed records", ranked.skipped))
        );
    }

    if ranked.records.is_empty() {
        println!("{}", format_info("No records matched."));
        return;
    }

    println!(
        "{}",
        format_info(&format!(
            "Top {} of {} matching records ({} considered):",
            ranked.report.returned, ranked.report.matched, ranked.report.considered
        ))
    );
    println!();

    println!(
        "{:<6} {:<12} {:<22} {:<11} {:<14} {}",
        "Rank".color(CliColors::muted()).bold(),
        "ID".color(CliColors::muted()).bold(),
        "Score".color(CliColors::muted()).bold(),
        "Importance".color(CliColors::muted()).bold(),
        "Topic".color(CliColors::muted()).bold(),
        "Content".color(CliColors::muted()).bold()
    );
    println!("{}", "─".repeat(100).color(CliColors::muted()));

    for (position, record) in ranked.records.iter().enumerate() {
        println!(
            "{:<6} {:<12} {:<22} {:<11} {:<14} {}",
            (position + 1).to_string().color(CliColors::muted()),
            record.id.to_string().color(CliColors::accent()),
            score(record).to_string().color(CliColors::primary()).bold(),
            record.importance.to_string().color(CliColors::warning()),
            truncate_content(&record.topic, 14).color(CliColors::info()),
            truncate_content(&record.content, 50).color(CliColors::primary())
        );
    }
}

pub fn print_check_report(decoded: &Decoded) {
    let total = decoded.records.len() + decoded.skipped;

    if decoded.skipped == 0 {
        println!(
            "{}",
            format_success(&format!("All {} records are valid", total))
        );
    } else {
        println!(
            "{}",
            format_warning(&format!(
                "{} of {} records are valid, {} would be skipped",
                decoded.records.len(),
                total,
                decoded.skipped
            ))
        );
    }
}
