use anyhow::Result;
use clap::Args;
use colored::Colorize;
use inkbridge_session::{SessionConfig, DEFAULT_CONFIG_NAME};
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Content the editor is mounted with
    #[arg(short, long, default_value = "")]
    pub content: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = SessionConfig::path_in(cwd);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = SessionConfig {
        initial_content: args.content,
        ..Default::default()
    };
    fs::write(&config_path, config.to_json()?)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("Next steps:");
    println!("  1. Edit initialContent in {}", DEFAULT_CONFIG_NAME);
    println!("  2. Run: inkbridge simulate --action toggleBold");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        init(
            InitArgs {
                content: "<p>hi</p>".to_string(),
                force: false,
            },
            dir.path(),
        )
        .unwrap();

        let config = SessionConfig::load(dir.path()).unwrap();
        assert_eq!(config.initial_content, "<p>hi</p>");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = SessionConfig::path_in(dir.path());
        fs::write(&path, r#"{"logLevel":"trace"}"#).unwrap();

        let args = |force| InitArgs {
            content: String::new(),
            force,
        };
        init(args(false), dir.path()).unwrap();
        assert_eq!(SessionConfig::load(dir.path()).unwrap().log_level, "trace");

        init(args(true), dir.path()).unwrap();
        assert_eq!(SessionConfig::load(dir.path()).unwrap().log_level, "info");
    }
}
