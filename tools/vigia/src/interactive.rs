//! Interactive submission form
//!
//! Line-based rendition of the original single-page form: prompt the three
//! fields, submit, render the card, offer another round.

use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use vigia_client::EventClient;
use vigia_events::EventType;

use crate::form::{submit, FormEvent, FormState};
use crate::render;

pub async fn run(client: &EventClient) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("{}", "Monitoramento Inteligente".bright_yellow().bold());
    println!("{}", "Painel de eventos em tempo real".bright_black());
    println!();

    loop {
        let mut state = FormState::new();

        let camera_id = match prompt_camera_id(&mut rl)? {
            Some(value) => value,
            None => break,
        };
        state.apply(FormEvent::CameraIdChanged(camera_id));

        let event_type = match prompt_event_type(&mut rl)? {
            Some(value) => value,
            None => break,
        };
        state.apply(FormEvent::EventTypeChanged(event_type));

        let default_ts = state.timestamp_raw.clone();
        match prompt(&mut rl, &format!("Timestamp em ms [{}]: ", default_ts))? {
            Some(value) if !value.is_empty() => state.apply(FormEvent::TimestampChanged(value)),
            Some(_) => {},
            None => break,
        }

        println!("{}", "Enviando...".bright_cyan());
        submit(&mut state, client).await;

        if let Some(outcome) = &state.last_outcome {
            render::print_outcome(outcome);
        }
        if let Some(message) = &state.last_error {
            render::print_error(message);
        }

        match prompt(&mut rl, "\nEnviar outro evento? [s/N]: ")? {
            Some(answer) if answer.eq_ignore_ascii_case("s") => println!(),
            _ => break,
        }
    }

    Ok(())
}

/// Read one trimmed line; `None` means the user left with Ctrl-C/Ctrl-D
fn prompt(rl: &mut DefaultEditor, text: &str) -> Result<Option<String>> {
    match rl.readline(text) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn prompt_camera_id(rl: &mut DefaultEditor) -> Result<Option<String>> {
    loop {
        match prompt(rl, "Camera ID (ex: CAM-001): ")? {
            Some(value) if value.is_empty() => {
                println!("{} Camera ID e obrigatorio", "WARNING".yellow());
            },
            other => return Ok(other),
        }
    }
}

fn prompt_event_type(rl: &mut DefaultEditor) -> Result<Option<EventType>> {
    println!("Tipo de Evento:");
    for (index, event_type) in EventType::ALL.iter().enumerate() {
        println!("  {}. {}", index + 1, event_type.label());
    }

    loop {
        let input = match prompt(rl, "Tipo [1-5, padrao 1]: ")? {
            Some(value) => value,
            None => return Ok(None),
        };

        if input.is_empty() {
            return Ok(Some(EventType::default()));
        }

        if let Ok(choice) = input.parse::<usize>() {
            if (1..=EventType::ALL.len()).contains(&choice) {
                return Ok(Some(EventType::ALL[choice - 1]));
            }
        }

        // Also accept the wire value directly, e.g. "queda"
        if let Ok(event_type) = input.parse::<EventType>() {
            return Ok(Some(event_type));
        }

        println!("{} Escolha um numero entre 1 e 5", "WARNING".yellow());
    }
}
