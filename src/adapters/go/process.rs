//! Subprocess execution with merged output and cooperative cancellation
//!
//! stdout and stderr share one pipe, so the captured bytes keep the order in
//! which the child wrote them. The child is polled with a short timeout and
//! killed as soon as the context is done.

use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::debug;
use wait_timeout::ChildExt;

use crate::core::{Context, ExecError, RunFailure};

/// How often the context is checked while the child runs
const POLL_INTERVAL: Duration = Duration::from_millis(50);

type Buffer = Arc<Mutex<Vec<u8>>>;

/// Run `command` to completion, returning its combined output
///
/// A non-zero exit, a signal, or a done context is an error carrying
/// whatever output was captured up to that point.
pub fn run_combined(mut command: Command, ctx: &Context) -> Result<Vec<u8>, RunFailure> {
    if let Some(reason) = ctx.err() {
        return Err(RunFailure::new(reason.into(), Vec::new()));
    }

    let (reader, writer) = io::pipe().map_err(spawn_failure)?;
    let stderr = writer.try_clone().map_err(spawn_failure)?;
    command.stdin(Stdio::null()).stdout(writer).stderr(stderr);

    let mut child = command.spawn().map_err(spawn_failure)?;
    // The command holds the parent's copies of the write end; without
    // dropping it the reader never sees EOF.
    drop(command);
    debug!("Spawned process {}", child.id());

    let buffer: Buffer = Arc::default();
    let collector = spawn_collector(reader, Arc::clone(&buffer));

    let outcome = wait(&mut child, ctx).and_then(|status| {
        drain(collector, ctx)?;
        Ok(status)
    });
    let output = std::mem::take(&mut *buffer.lock().unwrap_or_else(PoisonError::into_inner));

    match outcome {
        Ok(status) if status.success() => Ok(output),
        Ok(status) => {
            debug!("Process exited with {status}");
            let cause = status.code().map_or(ExecError::Signaled, ExecError::Exit);
            Err(RunFailure::new(cause, output))
        },
        Err(cause) => Err(RunFailure::new(cause, output)),
    }
}

fn spawn_failure(err: io::Error) -> RunFailure {
    RunFailure::new(ExecError::Spawn(err), Vec::new())
}

fn spawn_collector(mut reader: io::PipeReader, sink: Buffer) -> JoinHandle<io::Result<()>> {
    thread::spawn(move || {
        let mut chunk = [0u8; 8192];
        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => return Ok(()),
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            sink.lock().unwrap_or_else(PoisonError::into_inner).extend_from_slice(&chunk[..n]);
        }
    })
}

fn wait(child: &mut Child, ctx: &Context) -> Result<ExitStatus, ExecError> {
    loop {
        if let Some(reason) = ctx.err() {
            debug!("Killing process {}: {reason}", child.id());
            let _ = child.kill();
            let _ = child.wait();
            return Err(reason.into());
        }

        let slice = ctx.remaining().map_or(POLL_INTERVAL, |left| left.min(POLL_INTERVAL));
        if let Some(status) = child.wait_timeout(slice).map_err(ExecError::Io)? {
            return Ok(status);
        }
    }
}

/// Wait for the collector to reach EOF
///
/// Grandchildren can inherit the pipe and keep it open after the child
/// exits, so this also gives up once the context is done.
fn drain(collector: JoinHandle<io::Result<()>>, ctx: &Context) -> Result<(), ExecError> {
    while !collector.is_finished() {
        if let Some(reason) = ctx.err() {
            return Err(reason.into());
        }
        thread::sleep(POLL_INTERVAL.min(ctx.remaining().unwrap_or(POLL_INTERVAL)));
    }
    match collector.join() {
        Ok(result) => result.map_err(ExecError::Io),
        Err(_) => Err(ExecError::Io(io::Error::other("output collector panicked"))),
    }
}
