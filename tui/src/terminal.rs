//! Terminal mode switching
//!
//! Raw mode and the alternate screen must be undone on every exit path,
//! including errors part-way through setup.

use std::io;

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Enter raw mode and the alternate screen, and hide the cursor
///
/// # Errors
///
/// Returns the first crossterm error.
pub fn enter() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
}

/// Undo [`enter`], attempting every step even if one fails
///
/// # Errors
///
/// Returns the first error seen.
pub fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    raw.and(screen)
}

/// Run `body`, then `restore`, whatever `body` returned
///
/// # Errors
///
/// The body's error wins; a restore error is reported only after a
/// successful body.
pub fn guarded<T, B, R>(body: B, restore: R) -> anyhow::Result<T>
where
    B: FnOnce() -> anyhow::Result<T>,
    R: FnOnce() -> io::Result<()>,
{
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_when_setup_fails() {
        let restored = Cell::new(false);

        let result: anyhow::Result<()> = guarded(
            || anyhow::bail!("alternate screen unavailable"),
            || {
                restored.set(true);
                Ok(())
            },
        );

        assert!(restored.get());
        assert_eq!(
            result.unwrap_err().to_string(),
            "alternate screen unavailable"
        );
    }

    #[test]
    fn test_body_error_wins_over_restore_error() {
        let result: anyhow::Result<()> = guarded(
            || anyhow::bail!("draw failed"),
            || Err(io::Error::new(io::ErrorKind::Other, "restore failed")),
        );
        assert_eq!(result.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn test_restore_error_reported_after_success() {
        let result = guarded(
            || Ok(7),
            || Err(io::Error::new(io::ErrorKind::Other, "restore failed")),
        );
        assert_eq!(result.unwrap_err().to_string(), "restore failed");
    }

    #[test]
    fn test_value_passes_through() {
        let result = guarded(|| Ok("done"), || Ok(()));
        assert_eq!(result.unwrap(), "done");
    }
}
