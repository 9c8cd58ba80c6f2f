use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use inkbridge_host::{toolbar, ToolbarControl};
use inkbridge_protocol::{EditorAction, EditorState};
use inkbridge_session::{SessionConfig, SessionHandle};
use std::path::Path;

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Initial content (overrides config)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Action to dispatch, by wire name (repeatable)
    #[arg(short, long = "action", value_parser = parse_action)]
    pub actions: Vec<EditorAction>,

    /// Toolbar control to press by label, after any --action (repeatable)
    #[arg(short, long = "press", value_parser = parse_control)]
    pub presses: Vec<ToolbarControl>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_action(name: &str) -> Result<EditorAction, String> {
    EditorAction::from_name(name).ok_or_else(|| {
        let known: Vec<_> = EditorAction::ALL.iter().map(|a| a.as_str()).collect();
        format!("unknown action `{}` (expected one of: {})", name, known.join(", "))
    })
}

fn parse_control(label: &str) -> Result<ToolbarControl, String> {
    ToolbarControl::from_label(label).ok_or_else(|| {
        let known: Vec<_> = ToolbarControl::ALL.iter().map(|c| c.label()).collect();
        format!("unknown control `{}` (expected one of: {})", label, known.join(", "))
    })
}

pub fn simulate(args: SimulateArgs, cwd: &Path) -> Result<()> {
    let mut config = SessionConfig::load(cwd)?;
    if let Some(content) = args.content {
        config.initial_content = content;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let state = runtime.block_on(run(&config, &args.actions, &args.presses))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    print_state(&state);
    Ok(())
}

async fn run(
    config: &SessionConfig,
    actions: &[EditorAction],
    presses: &[ToolbarControl],
) -> Result<EditorState> {
    tracing::debug!(actions = actions.len(), "starting simulated session");
    let mut session = SessionHandle::from_config(config);
    if !session.ready().await {
        return Err(anyhow!("editor stopped before it was initialised"));
    }
    for action in actions {
        if !session.dispatch(*action) {
            return Err(anyhow!("session stopped before `{}` was sent", action));
        }
    }
    for control in presses {
        if !session.press(*control) {
            return Err(anyhow!("session stopped before `{}` was pressed", control));
        }
    }
    Ok(session.finish().await)
}

fn print_state(state: &EditorState) {
    println!("{}", "Document".bright_blue().bold());
    println!("  {}", state.html);
    println!();
    println!("{}", "Toolbar".bright_blue().bold());
    for item in toolbar(state) {
        let marker = if item.active { "●".green() } else { "○".normal() };
        let label = if item.disabled {
            item.label.dimmed()
        } else {
            item.label.normal()
        };
        println!("  {} {}", marker, label);
    }
}
