//! Background job handling for GUI operations.
//!
//! Portal operations suspend on the wallet and ledger collaborators, so
//! they run on a worker thread with their own runtime and get polled from
//! the GUI thread each frame.

use anyhow::{anyhow, Result};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tokio::runtime::Builder;

/// Handle to a background task, polled from the GUI thread.
pub struct AsyncJob<T> {
    receiver: Option<Receiver<Result<T>>>,
}

impl<T: Send + 'static> AsyncJob<T> {
    /// Run a future to completion on a dedicated worker thread with a
    /// current-thread runtime.
    pub fn spawn<FutBuilder, Fut>(builder: FutBuilder) -> Self
    where
        FutBuilder: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<T>> + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime.block_on(builder()),
                Err(e) => Err(anyhow!("Failed to create async runtime: {}", e)),
            };
            let _ = tx.send(result);
        });
        Self { receiver: Some(rx) }
    }
}

impl<T> AsyncJob<T> {
    /// Poll the job for completion.
    /// Returns Some(result) if the job has completed, None if still running.
    pub fn poll(&mut self) -> Option<Result<T>> {
        if let Some(rx) = &self.receiver {
            match rx.try_recv() {
                Ok(res) => {
                    self.receiver = None;
                    return Some(res);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.receiver = None;
                    return Some(Err(anyhow!("Worker task disconnected")));
                }
            }
        }
        None
    }

    /// Check if the job is still running
    pub fn is_running(&self) -> bool {
        self.receiver.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_spawned_job_delivers_result() {
        let mut job = AsyncJob::spawn(|| async { Ok(41 + 1) });
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(res) = job.poll() {
                assert_eq!(res.unwrap(), 42);
                assert!(!job.is_running());
                return;
            }
            assert!(std::time::Instant::now() < deadline, "job never completed");
            thread::sleep(Duration::from_millis(5));
        }
    }
}
