//! Ingest mode: echo stdin to stdout while capturing error blocks

mod runner;
pub mod signals;

pub use runner::{run_ingest, IngestSummary};

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracer_app::config::GeneralSettings;

const RESET: &[u8] = b"\x1b[0m";

/// How flagged lines are echoed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EchoStyle {
    flagged_prefix: Option<String>,
}

impl EchoStyle {
    /// Every line verbatim
    pub fn plain() -> Self {
        Self::default()
    }

    /// Flagged lines wrapped in `prefix` and a reset sequence
    pub fn colored(prefix: impl Into<String>) -> Self {
        Self {
            flagged_prefix: Some(prefix.into()),
        }
    }

    pub fn from_settings(general: &GeneralSettings) -> Self {
        if general.highlight_errors {
            Self::colored(general.error_color.clone())
        } else {
            Self::plain()
        }
    }

    pub(crate) async fn write_line<W>(
        &self,
        writer: &mut W,
        line: &[u8],
        flagged: bool,
    ) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        match &self.flagged_prefix {
            Some(prefix) if flagged => {
                writer.write_all(prefix.as_bytes()).await?;
                writer.write_all(line).await?;
                writer.write_all(RESET).await
            }
            _ => writer.write_all(line).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_style_echoes_verbatim() {
        let mut out = Vec::new();
        EchoStyle::plain()
            .write_line(&mut out, b"ERROR boom\n", true)
            .await
            .unwrap();
        assert_eq!(out, b"ERROR boom\n");
    }

    #[tokio::test]
    async fn test_colored_style_wraps_flagged_lines_only() {
        let style = EchoStyle::colored("\x1b[0;31m");
        let mut out = Vec::new();
        style.write_line(&mut out, b"INFO ok\n", false).await.unwrap();
        style.write_line(&mut out, b"ERROR x\n", true).await.unwrap();
        assert_eq!(out, b"INFO ok\n\x1b[0;31mERROR x\n\x1b[0m");
    }

    #[test]
    fn test_from_settings() {
        let mut general = GeneralSettings::default();
        assert_eq!(EchoStyle::from_settings(&general), EchoStyle::colored("\x1b[0;31m"));

        general.highlight_errors = false;
        assert_eq!(EchoStyle::from_settings(&general), EchoStyle::plain());
    }
}
