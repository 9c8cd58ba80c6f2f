use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use inkbridge_protocol::{decode as decode_message, MessageKind, NativeMessage, WebViewMessage};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Host → editor
    Native,
    /// Editor → host
    Webview,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Raw JSON message
    pub message: String,

    /// Which side the message is addressed to
    #[arg(short, long, value_enum, default_value_t = Direction::Native)]
    pub direction: Direction,
}

pub fn decode(args: DecodeArgs) -> Result<()> {
    let summary = match args.direction {
        Direction::Native => describe::<NativeMessage>(&args.message)?,
        Direction::Webview => describe::<WebViewMessage>(&args.message)?,
    };
    println!("{} {}", "✓".green(), summary);
    Ok(())
}

/// One-line description of a decoded message, or the reason it would be
/// dropped by the receiver.
fn describe<M>(raw: &str) -> Result<String>
where
    M: serde::de::DeserializeOwned + MessageKind + Debug,
{
    let message = decode_message::<M>(raw)?;
    Ok(format!("{} {:?}", message.kind().bold(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_messages() {
        let summary = describe::<NativeMessage>(r#"{"kind":"action","payload":"toggleBold"}"#).unwrap();
        assert!(summary.contains("action"));
        assert!(summary.contains("ToggleBold"));

        let summary = describe::<WebViewMessage>(r#"{"kind":"editorInitialised"}"#).unwrap();
        assert!(summary.contains("editorInitialised"));
    }

    #[test]
    fn test_describe_rejects_wrong_direction() {
        let err = describe::<NativeMessage>(r#"{"kind":"editorInitialised"}"#).unwrap_err();
        assert!(err.to_string().contains("Unknown message kind"));
    }
}
