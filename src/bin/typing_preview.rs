//! Terminal preview of the hero typing animation.
//!
//! ```text
//! cargo run --bin typing-preview --features preview -- "Hello" "World" --hold-ms 800
//! ```

use std::{
    io::Write,
    path::PathBuf,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use anyhow::Context;
use clap::Parser;
use portfolio_site::{
    portfolio::hero_typing_config,
    typing::{driver, TypingAnimator, TypingConfig},
};
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

/// Play the typing animation on a single terminal line
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Phrases to cycle through; defaults to the site's hero phrases
    phrases: Vec<String>,

    /// JSON typing config (`phrases`, `typingDelayMs`, `deletingDelayMs`, `holdDelayMs`)
    #[arg(long, conflicts_with = "phrases")]
    config: Option<PathBuf>,

    /// Delay between typed characters
    #[arg(long)]
    typing_ms: Option<u64>,

    /// Delay between deleted characters
    #[arg(long)]
    deleting_ms: Option<u64>,

    /// Pause once a phrase is fully typed
    #[arg(long)]
    hold_ms: Option<u64>,

    /// Exit after this many full rotations through the phrases
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    cycles: Option<u64>,
}

impl Args {
    fn typing_config(&self) -> anyhow::Result<TypingConfig> {
        let mut config = if let Some(path) = &self.config {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("couldn't read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("couldn't parse {}", path.display()))?
        } else if self.phrases.is_empty() {
            hero_typing_config()
        } else {
            TypingConfig::new(self.phrases.iter().cloned())
        };

        if let Some(ms) = self.typing_ms {
            config.typing_delay_ms = ms;
        }
        if let Some(ms) = self.deleting_ms {
            config.deleting_delay_ms = ms;
        }
        if let Some(ms) = self.hold_ms {
            config.hold_delay_ms = ms;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let animator = TypingAnimator::new(args.typing_config()?)?;
    log::info!("previewing {} phrases", animator.config().phrases.len());

    let finished = Arc::new(Notify::new());
    let rotations = Arc::new(AtomicU64::new(0));
    let cycles = args.cycles;
    let mut handle = {
        let finished = finished.clone();
        let rotations = rotations.clone();
        driver::spawn_with_observer(animator, move |anim| {
            // back at the first phrase with nothing typed: one rotation done
            if anim.is_typing() && anim.char_index() == 0 && anim.phrase_index() == 0 {
                let done = rotations.fetch_add(1, Ordering::Relaxed) + 1;
                if cycles.is_some_and(|n| done >= n) {
                    finished.notify_one();
                }
            }
        })
    };

    let mut text = handle.subscribe();
    let mut stdout = std::io::stdout();
    let all_done = finished.notified();
    let interrupted = tokio::signal::ctrl_c();
    tokio::pin!(all_done, interrupted);
    loop {
        tokio::select! {
            changed = text.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = text.borrow_and_update().clone();
                write!(stdout, "\r\x1b[2K{current}▌")?;
                stdout.flush()?;
            }
            _ = &mut all_done => break,
            _ = &mut interrupted => break,
        }
    }

    handle.stop();
    writeln!(stdout)?;
    log::debug!(
        "stopped after {} rotations",
        rotations.load(Ordering::Relaxed)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_must_be_positive() {
        assert!(Args::try_parse_from(["typing-preview", "--cycles", "0"]).is_err());
        let args = Args::try_parse_from(["typing-preview", "--cycles", "3"]).unwrap();
        assert_eq!(args.cycles, Some(3));
    }

    #[test]
    fn test_config_conflicts_with_phrases() {
        let res = Args::try_parse_from(["typing-preview", "Hi", "--config", "typing.json"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_delay_overrides() {
        let args =
            Args::try_parse_from(["typing-preview", "Hi", "Yo", "--typing-ms", "10", "--hold-ms", "5"])
                .unwrap();
        let config = args.typing_config().unwrap();
        assert_eq!(config.phrases, vec!["Hi", "Yo"]);
        assert_eq!(config.typing_delay_ms, 10);
        assert_eq!(config.deleting_delay_ms, 50);
        assert_eq!(config.hold_delay_ms, 5);
    }

    #[test]
    fn test_defaults_to_hero_phrases() {
        let args = Args::try_parse_from(["typing-preview"]).unwrap();
        assert_eq!(args.typing_config().unwrap(), hero_typing_config());
    }
}
