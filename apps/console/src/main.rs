use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Result;
use catalog::{config::load_settings, open_window};
use clap::Parser;
use client_core::{windows::WindowKind, CommandWindow, Flow, InputSource, ServiceCollaborator};
use shared::domain::TriggerKind;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod script;

use script::{parse_line, ConsoleLine};

/// Drive a client window from stdin, one control activation per line.
#[derive(Parser, Debug)]
struct Args {
    /// Which window to open: `media` or `demo`.
    #[arg(long, default_value = "media")]
    window: WindowKind,
    /// Settings file; defaults to `media.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let settings = load_settings(args.config.as_deref())?;
    let mut window = open_window(args.window, &settings)?;
    let mut stdout = io::stdout().lock();
    print_controls(&window, &mut stdout)?;
    run(&mut window, io::stdin().lock(), &mut stdout)?;

    Ok(())
}

/// Feeds `input` to the window line by line, echoing whatever each control
/// adds to the output surface. Returns at end of input or once the window
/// has closed.
fn run<C: ServiceCollaborator>(
    window: &mut CommandWindow<C>,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut printed = 0;
    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            ConsoleLine::SetInput(text) => window.input_mut().set_text(text.to_string()),
            ConsoleLine::Fire { kind, label } => {
                let Some(trigger) = window.registry().find_trigger(kind, label).copied() else {
                    debug!(kind = kind.label(), label, "no such control");
                    continue;
                };
                let flow = match window.handle(trigger.id.into()) {
                    Ok(flow) => flow,
                    // The failure is already on the output surface.
                    Err(err) => {
                        debug!(error = %err, "dispatch failed");
                        Flow::Continue
                    }
                };
                let output = window.output().as_str();
                out.write_all(output[printed..].as_bytes())?;
                out.flush()?;
                printed = output.len();
                if flow == Flow::Exit {
                    break;
                }
            }
            ConsoleLine::Show => {
                out.write_all(window.output().as_str().as_bytes())?;
                out.flush()?;
            }
            ConsoleLine::Blank => {}
            ConsoleLine::Unknown(text) => debug!(line = text, "ignoring unrecognised line"),
        }
    }
    Ok(())
}

fn print_controls<C: ServiceCollaborator>(
    window: &CommandWindow<C>,
    out: &mut impl Write,
) -> io::Result<()> {
    let layout = window.layout();
    writeln!(out, "{}", layout.title)?;
    if let Some(prompt) = layout.prompt {
        writeln!(out, "  :text <value>    {prompt}")?;
    }
    writeln!(out, "  {}", layout.instructions)?;
    for trigger in window.registry().triggers() {
        writeln!(out, "  {} {}", trigger.kind.label(), trigger.label)?;
    }
    if window.registry().triggers_of(TriggerKind::MenuItem).next().is_some() {
        if let Some(menu) = layout.menu_title {
            writeln!(out, "  (menu items live under \"{menu}\")")?;
        }
    }
    out.flush()
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
