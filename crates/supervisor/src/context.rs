// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide supervision state.
//!
//! Signal dispositions belong to the whole process, so only one invocation
//! may be supervised at a time. SIGINT and SIGQUIT are each relayed through
//! a self-pipe registered once, on first use. Outside supervision they keep
//! their default action; while a child runs the default action is switched
//! off and deliveries queue in the pipe until the driver forwards them to
//! the child's process group.

use std::io::{self, Read};
use std::os::unix::net::UnixStream as StdUnixStream;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Arc;

use nix::sys::signal::{killpg, Signal};
use nix::unistd::Pid;
use parking_lot::Mutex;
use signal_hook::consts::{SIGINT, SIGQUIT};
use tokio::io::AsyncReadExt;
use tokio::net::UnixStream;

use crate::SupervisorError;

struct SupervisionContext {
    active: AtomicBool,
    /// Process group of the running child, 0 when none.
    pgid: AtomicI32,
    relays: Mutex<Option<Vec<SignalRelay>>>,
}

static CONTEXT: SupervisionContext = SupervisionContext {
    active: AtomicBool::new(false),
    pgid: AtomicI32::new(0),
    relays: parking_lot::const_mutex(None),
};

/// Process group of the compiler currently being supervised, if any.
pub fn active_process_group() -> Option<i32> {
    match CONTEXT.pgid.load(Ordering::Acquire) {
        0 => None,
        pgid => Some(pgid),
    }
}

/// One relayed signal: its self-pipe and its default-action switch.
struct SignalRelay {
    signal: i32,
    /// While true a delivery runs the signal's default action.
    default_action: Arc<AtomicBool>,
    reader: StdUnixStream,
}

impl SignalRelay {
    fn install(signal: i32) -> io::Result<Self> {
        let (reader, writer) = StdUnixStream::pair()?;
        reader.set_nonblocking(true)?;
        writer.set_nonblocking(true)?;
        let default_action = Arc::new(AtomicBool::new(true));
        signal_hook::low_level::pipe::register(signal, writer)?;
        signal_hook::flag::register_conditional_default(signal, Arc::clone(&default_action))?;
        tracing::debug!(signal, "installed interrupt relay");
        Ok(Self { signal, default_action, reader })
    }

    /// Consume queued deliveries, reporting whether there were any.
    fn take_pending(&self) -> bool {
        let mut buf = [0u8; 64];
        let mut pending = false;
        loop {
            match (&self.reader).read(&mut buf) {
                Ok(n) if n > 0 => pending = true,
                _ => return pending,
            }
        }
    }
}

fn with_relays<T>(f: impl FnOnce(&[SignalRelay]) -> T) -> T {
    let relays = CONTEXT.relays.lock();
    f(relays.as_deref().unwrap_or_default())
}

fn restore_defaults() {
    with_relays(|relays| {
        for relay in relays {
            relay.default_action.store(true, Ordering::SeqCst);
        }
    });
}

/// Claim the supervision context and start relaying interrupts.
///
/// Deliveries from earlier invocations are discarded; anything arriving
/// after this returns is queued until [`Interrupts::next`] reads it.
pub(crate) fn acquire() -> Result<ActiveSupervision, SupervisorError> {
    if CONTEXT.active.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
        return Err(SupervisorError::AlreadyActive);
    }
    // The guard releases the context on every path from here on.
    let mut active = ActiveSupervision { interrupts: Interrupts::default() };
    active.interrupts = arm()?;
    Ok(active)
}

fn arm() -> Result<Interrupts, SupervisorError> {
    let mut relays = CONTEXT.relays.lock();
    if relays.is_none() {
        let installed = [SIGINT, SIGQUIT]
            .into_iter()
            .map(SignalRelay::install)
            .collect::<io::Result<Vec<_>>>()
            .map_err(SupervisorError::io("installing interrupt handlers"))?;
        *relays = Some(installed);
    }

    let mut interrupts = Interrupts::default();
    for relay in relays.iter().flatten() {
        relay.take_pending();
        relay.default_action.store(false, Ordering::SeqCst);
        let reader = relay
            .reader
            .try_clone()
            .and_then(UnixStream::from_std)
            .map_err(SupervisorError::io("watching for interrupts"))?;
        match relay.signal {
            SIGINT => interrupts.sigint = Some(reader),
            _ => interrupts.sigquit = Some(reader),
        }
    }
    Ok(interrupts)
}

/// Exclusive hold on the supervision context for one invocation.
pub(crate) struct ActiveSupervision {
    interrupts: Interrupts,
}

impl ActiveSupervision {
    pub(crate) fn set_process_group(&self, pgid: Pid) {
        CONTEXT.pgid.store(pgid.as_raw(), Ordering::Release);
    }

    pub(crate) fn clear_process_group(&self) {
        CONTEXT.pgid.store(0, Ordering::Release);
    }

    /// Wait for the next relayed interrupt.
    pub(crate) async fn next_interrupt(&mut self) -> i32 {
        self.interrupts.next().await
    }

    /// Give `signal` its default action back and deliver it to the driver.
    pub(crate) fn reraise(&self, signal: i32) {
        restore_defaults();
        if let Err(e) = signal_hook::low_level::raise(signal) {
            tracing::warn!(signal, error = %e, "failed to re-raise interrupt");
        }
    }

    /// Stop relaying. Interrupts that arrived after the last forward are
    /// re-raised when `reraise_late` is set, and discarded otherwise.
    pub(crate) fn release(self, reraise_late: bool) {
        restore_defaults();
        let late: Vec<i32> = with_relays(|relays| {
            relays.iter().filter(|relay| relay.take_pending()).map(|relay| relay.signal).collect()
        });
        for signal in late {
            tracing::debug!(signal, reraise = reraise_late, "interrupt arrived after the compiler exited");
            if reraise_late {
                self.reraise(signal);
            }
        }
    }
}

impl Drop for ActiveSupervision {
    fn drop(&mut self) {
        let pgid = CONTEXT.pgid.swap(0, Ordering::AcqRel);
        if pgid != 0 {
            kill_group(Pid::from_raw(pgid), Signal::SIGKILL);
        }
        restore_defaults();
        CONTEXT.active.store(false, Ordering::Release);
    }
}

/// Signal every process in `pgid`, ignoring a group that is already gone.
pub(crate) fn kill_group(pgid: Pid, signal: Signal) {
    match killpg(pgid, signal) {
        Ok(()) | Err(nix::errno::Errno::ESRCH) => {}
        Err(e) => tracing::warn!(pgid = pgid.as_raw(), %signal, error = %e, "killpg failed"),
    }
}

/// Async readers for the relayed signals.
#[derive(Default)]
pub(crate) struct Interrupts {
    sigint: Option<UnixStream>,
    sigquit: Option<UnixStream>,
}

impl Interrupts {
    /// Resolve with the next relayed signal. Deliveries queued together are
    /// coalesced.
    async fn next(&mut self) -> i32 {
        loop {
            tokio::select! {
                got = recv(&mut self.sigint) => if got { return SIGINT },
                got = recv(&mut self.sigquit) => if got { return SIGQUIT },
            }
        }
    }
}

/// Read from a relay pipe; closes it on EOF or error. Never completes once
/// closed.
async fn recv(stream: &mut Option<UnixStream>) -> bool {
    let Some(reader) = stream.as_mut() else {
        return std::future::pending().await;
    };
    let mut buf = [0u8; 16];
    match reader.read(&mut buf).await {
        Ok(n) if n > 0 => true,
        _ => {
            *stream = None;
            false
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
