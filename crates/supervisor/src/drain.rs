// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrent draining of the compiler's stdout and stderr.

use std::time::Duration;

use caliber_core::TestOutput;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{ChildStderr, ChildStdout};

/// Bound on the final drain once the compiler has been reaped.
///
/// Descendants that escaped the process group may hold the pipes open
/// indefinitely; whatever they have not written by then is dropped.
pub const DRAIN_GRACE: Duration = Duration::from_millis(250);

const CHUNK: usize = 8 * 1024;

pub(crate) struct OutputDrain {
    stdout: Option<ChildStdout>,
    stderr: Option<ChildStderr>,
    stdout_buf: Vec<u8>,
    stderr_buf: Vec<u8>,
}

impl OutputDrain {
    pub(crate) fn new(stdout: ChildStdout, stderr: ChildStderr) -> Self {
        Self {
            stdout: Some(stdout),
            stderr: Some(stderr),
            stdout_buf: Vec::new(),
            stderr_buf: Vec::new(),
        }
    }

    /// Both pipes have reached EOF.
    pub(crate) fn is_done(&self) -> bool {
        self.stdout.is_none() && self.stderr.is_none()
    }

    /// Read one chunk from whichever pipe is ready first.
    ///
    /// Cancel safe: a step dropped mid-flight loses no bytes.
    pub(crate) async fn step(&mut self) -> std::io::Result<()> {
        if self.is_done() {
            return Ok(());
        }
        tokio::select! {
            res = read_chunk(&mut self.stdout, &mut self.stdout_buf) => res,
            res = read_chunk(&mut self.stderr, &mut self.stderr_buf) => res,
        }
    }

    /// Keep reading until both pipes close or `grace` runs out.
    pub(crate) async fn finish(&mut self, grace: Duration) -> std::io::Result<()> {
        let drained = tokio::time::timeout(grace, async {
            while !self.is_done() {
                self.step().await?;
            }
            Ok::<_, std::io::Error>(())
        })
        .await;

        match drained {
            Ok(res) => res,
            Err(_) => {
                tracing::debug!("pipes still open after final drain, abandoning them");
                Ok(())
            }
        }
    }

    pub(crate) fn into_output(self) -> TestOutput {
        TestOutput::from_bytes(&self.stdout_buf, &self.stderr_buf)
    }
}

/// Append the next chunk of `reader` to `buf`, closing it at EOF. A closed
/// reader never completes.
async fn read_chunk<R: AsyncRead + Unpin>(
    reader: &mut Option<R>,
    buf: &mut Vec<u8>,
) -> std::io::Result<()> {
    let Some(stream) = reader.as_mut() else {
        return std::future::pending().await;
    };
    buf.reserve(CHUNK);
    if stream.read_buf(buf).await? == 0 {
        *reader = None;
    }
    Ok(())
}
