//! Command execution capability
//!
//! Ping runs never execute anything themselves. They hand a finished command
//! line to a [`CommandExecutor`], which runs it on some node (remote or local)
//! and returns the captured standard output. Failures of the executor are passed
//! back to callers unchanged.

pub mod local;

pub use local::LocalShellExecutor;

use crate::error::Result;

/// Runs a shell command line on some node and returns its standard output
pub trait CommandExecutor {
    /// Execute `command` using the named `shell`, or the executor's default
    /// shell when `None`.
    fn execute(&self, command: &str, shell: Option<&str>) -> Result<String>;
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for &E {
    fn execute(&self, command: &str, shell: Option<&str>) -> Result<String> {
        (**self).execute(command, shell)
    }
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for Box<E> {
    fn execute(&self, command: &str, shell: Option<&str>) -> Result<String> {
        (**self).execute(command, shell)
    }
}

/// Executor backed by a closure, see [`from_fn`]
#[derive(Clone)]
pub struct FnExecutor<F> {
    f: F,
}

/// Wrap a closure `(command, shell) -> Result<String>` as an executor
pub fn from_fn<F>(f: F) -> FnExecutor<F>
where
    F: Fn(&str, Option<&str>) -> Result<String>,
{
    FnExecutor { f }
}

impl<F> CommandExecutor for FnExecutor<F>
where
    F: Fn(&str, Option<&str>) -> Result<String>,
{
    fn execute(&self, command: &str, shell: Option<&str>) -> Result<String> {
        (self.f)(command, shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn run<E: CommandExecutor + ?Sized>(executor: &E) -> Result<String> {
        executor.execute("ping -c 1 127.0.0.1", Some("bash"))
    }

    #[test]
    fn test_closure_executor() {
        let echo = from_fn(|command, shell| Ok(format!("{}:{}", shell.unwrap_or("default"), command)));
        assert_eq!(run(&echo).unwrap(), "bash:ping -c 1 127.0.0.1");
    }

    #[test]
    fn test_trait_object_executor() {
        let failing = from_fn(|_, _| Err(AppError::execution("connection lost")));
        let dynamic: &dyn CommandExecutor = &failing;
        assert_eq!(run(dynamic).unwrap_err(), AppError::execution("connection lost"));
    }

    #[test]
    fn test_boxed_and_borrowed_executors() {
        let echo = from_fn(|command, _| Ok(command.to_string()));
        let boxed: Box<dyn CommandExecutor> = Box::new(echo.clone());
        assert_eq!(run(&boxed).unwrap(), "ping -c 1 127.0.0.1");

        let borrowed = &echo;
        assert_eq!(run(&borrowed).unwrap(), "ping -c 1 127.0.0.1");
    }
}
