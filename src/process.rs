//! Launching agent executables under a deadline.
//!
//! Each agent runs in its own process group. Whatever it started is killed with it, so nothing
//! it leaves behind outlives the move or keeps the output pipe open.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{self, bail, Context};
use tracing::{debug, trace, warn};

/// How a bounded agent run ended.
#[derive(Debug)]
pub enum ProcessOutcome {
    /// The agent exited and closed its output before the deadline.
    Finished { status: ExitStatus, output: String },
    /// The deadline passed first. The agent has been killed.
    TimedOut,
}

/// An agent process with its standard error merged into its standard output.
///
/// The child is killed and reaped on drop if it is still running.
#[derive(Debug)]
pub struct AgentProcess {
    child: Child,
    output: Receiver<std::io::Result<Vec<u8>>>,
    cleaned_up: bool,
}

impl AgentProcess {
    /// Launch `path`, feed it `input` and close its standard input.
    pub fn spawn(path: &Path, input: &[u8]) -> anyhow::Result<AgentProcess> {
        let (mut reader, writer) = std::io::pipe().context("could not create output pipe")?;

        let mut command = Command::new(command_path(path));
        command
            .stdin(Stdio::piped())
            .stdout(writer.try_clone().context("could not share output pipe")?)
            .stderr(writer);
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }
        let mut child = command
            .spawn()
            .with_context(|| format!("could not launch agent '{}'", path.display()))?;
        // the parent's write ends must be closed, otherwise the reader never sees EOF
        drop(command);
        trace!(pid = child.id(), "agent launched");

        // ends once every process of the group is gone
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buf = Vec::new();
            let res = reader.read_to_end(&mut buf).map(|_| buf);
            let _ = tx.send(res);
        });

        if let Some(mut stdin) = child.stdin.take() {
            // agents are free to ignore their input and exit early
            if let Err(e) = stdin.write_all(input) {
                debug!("could not write board to agent: {e}");
            }
        }

        Ok(AgentProcess {
            child,
            output: rx,
            cleaned_up: false,
        })
    }

    /// Wait for the agent to exit and for its output to be complete, up to `deadline`.
    pub fn wait_with_deadline(&mut self, deadline: Instant) -> anyhow::Result<ProcessOutcome> {
        let status = loop {
            if let Some(status) = self.child.try_wait().context("could not poll agent process")? {
                break status;
            }
            let now = Instant::now();
            if now >= deadline {
                self.try_kill()?;
                return Ok(ProcessOutcome::TimedOut);
            }
            thread::sleep(Duration::from_millis(5).min(deadline - now));
        };
        self.cleaned_up = true;

        // a child of the agent may still hold the pipe open
        let remaining = deadline.saturating_duration_since(Instant::now());
        match self.output.recv_timeout(remaining) {
            Ok(output) => {
                let output = output.context("could not read agent output")?;
                Ok(ProcessOutcome::Finished {
                    status,
                    output: String::from_utf8_lossy(&output).into_owned(),
                })
            }
            Err(RecvTimeoutError::Timeout) => {
                self.kill_group();
                Ok(ProcessOutcome::TimedOut)
            }
            Err(RecvTimeoutError::Disconnected) => bail!("agent output reader stopped"),
        }
    }

    /// Kill the agent with its process group and reap it.
    pub fn try_kill(&mut self) -> anyhow::Result<()> {
        self.kill_group();
        self.child.kill().context("could not kill process")?;
        self.child.wait().context("could not reap process")?;
        self.cleaned_up = true;
        Ok(())
    }

    /// Send `SIGKILL` to every process left in the group of the agent.
    #[cfg(unix)]
    fn kill_group(&self) {
        use nix::errno::Errno;
        use nix::sys::signal::{killpg, Signal};
        use nix::unistd::Pid;

        let pgid = Pid::from_raw(self.child.id() as i32);
        match killpg(pgid, Signal::SIGKILL) {
            Ok(()) | Err(Errno::ESRCH) => {}
            Err(e) => warn!("could not kill process group {pgid}: {e}"),
        }
    }

    #[cfg(not(unix))]
    fn kill_group(&self) {}
}

impl Drop for AgentProcess {
    fn drop(&mut self) {
        // the agent may be gone while processes it started are still running
        self.kill_group();
        if !self.cleaned_up {
            if let Err(e) = self.try_kill() {
                warn!("could not clean up agent process {}: {e:#}", self.child.id());
            }
        }
    }
}

/// A bare file name would be looked up in `PATH`, agents are always run from their path.
fn command_path(path: &Path) -> PathBuf {
    if path.is_relative() && path.components().count() == 1 {
        Path::new(".").join(path)
    } else {
        path.to_path_buf()
    }
}
