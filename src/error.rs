//! Fatal setup failures. Any of these ends the process with status -1.

use std::any::Any;
use std::panic::{self, UnwindSafe};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to initialize the windowing system: {0}")]
    EventLoop(String),

    #[error("failed to create the window and OpenGL context: {0}")]
    Window(#[from] glutin::CreationError),

    #[error("failed to make the OpenGL context current: {0}")]
    MakeCurrent(#[from] glutin::ContextError),

    #[error("failed to load OpenGL function pointers: {0} is unavailable")]
    Loader(&'static str),
}

/// Runs a windowing-system constructor that reports failure by panicking
/// and turns the panic into `Error::EventLoop`. The default panic hook is
/// silenced for the duration of the call.
pub fn catch_window_system<T, F>(init: F) -> Result<T, Error>
where
    F: FnOnce() -> T + UnwindSafe,
{
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(init);
    panic::set_hook(hook);

    result.map_err(|payload| Error::EventLoop(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown error".to_owned()
    }
}
