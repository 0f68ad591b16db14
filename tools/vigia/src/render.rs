//! Terminal rendering of submission outcomes

use colored::*;
use vigia_events::EventOutcome;

const CARD_WIDTH: usize = 44;

/// Label and body texts for the result card
fn card_texts(alert: bool) -> (&'static str, &'static str) {
    if alert {
        ("ALERTA GERADO", "Evento critico detectado")
    } else {
        ("Sem Alerta", "Evento registrado")
    }
}

/// Center within the card before any color codes are attached; padding a
/// `ColoredString` would count the ANSI escape bytes as width
fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = CARD_WIDTH)
}

/// Print the alert/no-alert result card
pub fn print_outcome(outcome: &EventOutcome) {
    let (label, body) = card_texts(outcome.alert);
    let label = if outcome.alert {
        centered(label).red().bold()
    } else {
        centered(label).green().bold()
    };

    println!();
    println!("{}", "=".repeat(CARD_WIDTH).bright_blue());
    println!("{}", label);
    println!("{}", centered(body));
    println!(
        "{}",
        centered(&format!("{} · {}", outcome.camera_id, outcome.event_type)).bright_black()
    );
    println!("{}", "=".repeat(CARD_WIDTH).bright_blue());
}

/// Print the derived error message, replacing any prior card
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR".red(), message);
}
