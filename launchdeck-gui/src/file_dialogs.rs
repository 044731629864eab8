//! Native file dialogs run on worker threads so the UI loop never blocks.

use std::path::PathBuf;
use std::sync::mpsc;

/// Receivers for dialogs currently open on a worker thread. `Some` while a
/// dialog is up; a second dialog of the same kind is refused until the
/// first one resolves.
#[derive(Default)]
pub(crate) struct FileDialogManager {
    pub folder_dialog_rx: Option<mpsc::Receiver<Option<PathBuf>>>,
}

pub(crate) fn spawn_file_dialog_thread<F, T>(f: F) -> std::thread::JoinHandle<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    std::thread::spawn(f)
}
