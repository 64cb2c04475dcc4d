//! Running a shell against a chart window that lives for the whole process.
//!
//! The native window can only be opened once, and it owns the thread from
//! then on. So the terminal dialogue runs synchronously until the first
//! chart is ready, and then continues inside the window's frame loop.

use std::cell::RefCell;
use std::future::Future;
use std::io::{BufRead, Write};
use std::pin::Pin;
use std::rc::Rc;

use crate::display::{ChartPresenter, ChartSurface};
use crate::shell::{Shell, ShellError, ShellState};

pub type SessionFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Steps `shell` until it finishes, showing each chart on `surface`.
pub async fn drive<R, W, P, S>(shell: &mut Shell<R, W, P>, surface: &mut S) -> Result<(), ShellError>
where
    R: BufRead,
    W: Write,
    P: ChartPresenter,
    S: ChartSurface,
{
    while shell.state() != ShellState::Finished {
        match shell.take_chart() {
            Some(chart) => surface.show(&chart).await,
            None => shell.step()?,
        }
    }
    Ok(())
}

/// Runs a whole session. `launch` is called at most once, with the rest of
/// the session, the first time a chart has to be shown; a session without
/// charts never opens the window.
pub fn run_session<R, W, P, S, L>(
    mut shell: Shell<R, W, P>,
    mut surface: S,
    launch: L,
) -> Result<(), ShellError>
where
    R: BufRead + 'static,
    W: Write + 'static,
    P: ChartPresenter + 'static,
    S: ChartSurface + 'static,
    L: FnOnce(SessionFuture),
{
    shell.begin()?;
    loop {
        match shell.state() {
            ShellState::Finished => {
                log::info!("session finished");
                return Ok(());
            }
            ShellState::Displaying => break,
            _ => shell.step()?,
        }
    }

    log::info!("opening chart window");
    let outcome = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&outcome);
    launch(Box::pin(async move {
        let result = drive(&mut shell, &mut surface).await;
        *slot.borrow_mut() = Some(result);
    }));
    log::info!("session finished");

    let result = outcome.borrow_mut().take();
    result.unwrap_or_else(|| {
        log::warn!("chart window closed before the session ended");
        Ok(())
    })
}
