//! Colorful console output for FieldForge runs.
//!
//! Provides a custom `tracing` layer that formats validation and resolution
//! events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve, validation, resolution start/end)
//! - **DEBUG**: Individual position assignments and pass summaries

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Targets whose events the console formats.
const TARGETS: [&str; 2] = ["fieldforge_core", "fieldforge"];

/// Initializes console output at INFO level.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_default("info");
}

/// Initializes console output with `level` for FieldForge targets.
///
/// A target that `RUST_LOG` already names keeps the `RUST_LOG` level.
pub fn init_with_default(level: &str) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
        let mut filter = EnvFilter::builder().from_env_lossy();
        for directive in default_directives(&rust_log, level) {
            if let Ok(directive) = directive.parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(FieldForgeConsoleLayer)
            .try_init();
    });
}

// Directives for the targets `rust_log` leaves unset.
fn default_directives(rust_log: &str, level: &str) -> Vec<String> {
    let named: Vec<&str> = rust_log
        .split(',')
        .map(|directive| {
            directive
                .split(|c: char| c == '=' || c == '[')
                .next()
                .unwrap_or("")
                .trim()
        })
        .collect();

    TARGETS
        .iter()
        .filter(|target| !named.contains(*target))
        .map(|target| format!("{target}={level}"))
        .collect()
}

/// A tracing layer that formats FieldForge events with colors.
pub struct FieldForgeConsoleLayer;

impl<S: Subscriber> Layer<S> for FieldForgeConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();

        if !target.starts_with("fieldforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    field: Option<String>,
    pass: Option<u64>,
    passes: Option<u64>,
    position: Option<u64>,
    resolved: Option<u64>,
    remaining: Option<u64>,
    ticket_count: Option<u64>,
    field_count: Option<u64>,
    valid_count: Option<u64>,
    invalid_count: Option<u64>,
    rule_count: Option<u64>,
    error_rate: Option<i64>,
    target_product: Option<i64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "field" => self.field = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "pass" => self.pass = Some(value),
            "passes" => self.passes = Some(value),
            "position" => self.position = Some(value),
            "resolved" => self.resolved = Some(value),
            "remaining" => self.remaining = Some(value),
            "ticket_count" => self.ticket_count = Some(value),
            "field_count" => self.field_count = Some(value),
            "valid_count" => self.valid_count = Some(value),
            "invalid_count" => self.invalid_count = Some(value),
            "rule_count" => self.rule_count = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "error_rate" => self.error_rate = Some(value),
            "target_product" => self.target_product = Some(value),
            _ => {
                if let Ok(value) = u64::try_from(value) {
                    self.record_u64(field, value);
                }
            }
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "field" => self.field = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "validate_end" => format_validate_end(v),
        "resolve_start" => format_resolve_start(v),
        "position_resolved" => format_position_resolved(v),
        "resolve_pass" => format_resolve_pass(v),
        "resolve_end" => format_resolve_end(v),
        "solve_end" => format_solve_end(v),
        _ => String::new(),
    }
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn signed(value: Option<i64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Solving │ {} rules │ {} nearby tickets",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.rule_count).bright_yellow(),
        count(v.ticket_count).bright_yellow(),
    )
}

fn format_validate_end(v: &EventVisitor) -> String {
    let invalid = v.invalid_count.unwrap_or(0);
    let icon = if invalid == 0 {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "{} {} Validated │ {} valid │ {} invalid │ error rate {}",
        format_elapsed(),
        icon,
        count(v.valid_count).bright_yellow(),
        count(v.invalid_count).bright_yellow(),
        signed(v.error_rate).bright_magenta().bold(),
    )
}

fn format_resolve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Resolving │ {} fields │ {} tickets",
        format_elapsed(),
        "▶".bright_cyan().bold(),
        count(v.field_count).bright_yellow(),
        count(v.ticket_count).bright_yellow(),
    )
}

fn format_position_resolved(v: &EventVisitor) -> String {
    format!(
        "{}   Pass {:>3} │ position {:>3} → {}",
        format_elapsed(),
        count(v.pass).bright_black(),
        count(v.position).white(),
        v.field.as_deref().unwrap_or("?").bright_cyan(),
    )
}

fn format_resolve_pass(v: &EventVisitor) -> String {
    format!(
        "{}   Pass {:>3} │ {} resolved │ {} remaining",
        format_elapsed(),
        count(v.pass).bright_black(),
        count(v.resolved).white(),
        count(v.remaining).white(),
    )
}

fn format_resolve_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Resolved │ {} fields in {} passes",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(v.field_count).bright_yellow(),
        count(v.passes).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Solved │ error rate {} │ target product {}",
        format_elapsed(),
        "■".bright_green().bold(),
        signed(v.error_rate).bright_magenta().bold(),
        signed(v.target_product).bright_magenta().bold(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_default_directives_without_rust_log() {
        assert_eq!(
            default_directives("", "debug"),
            vec!["fieldforge_core=debug", "fieldforge=debug"]
        );
    }

    #[test]
    fn test_rust_log_target_keeps_its_level() {
        assert_eq!(
            default_directives("warn,fieldforge_core=trace", "info"),
            vec!["fieldforge=info"]
        );
        assert_eq!(
            default_directives("fieldforge[solve]=off, fieldforge_core", "info"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("phase_start")).is_empty());
        assert!(format_event(&EventVisitor::default()).is_empty());
    }

    #[test]
    fn test_validate_end_shows_counts() {
        let v = EventVisitor {
            valid_count: Some(1_200),
            invalid_count: Some(3),
            error_rate: Some(71),
            ..visitor("validate_end")
        };
        let line = format_event(&v);
        assert!(line.contains("1,200"));
        assert!(line.contains("71"));
    }

    #[test]
    fn test_position_resolved_shows_field() {
        let v = EventVisitor {
            pass: Some(2),
            position: Some(5),
            field: Some("departure track".to_string()),
            ..visitor("position_resolved")
        };
        assert!(format_event(&v).contains("departure track"));
    }

    #[test]
    fn test_solve_end_formats_large_product() {
        let v = EventVisitor {
            error_rate: Some(25_059),
            target_product: Some(3_253_972_369_789),
            ..visitor("solve_end")
        };
        let line = format_event(&v);
        assert!(line.contains("25,059"));
        assert!(line.contains("3,253,972,369,789"));
    }
}
