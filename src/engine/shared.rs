//! Thread-safe handle for presentation layers that run on several threads.

use crate::core::{CalculatorState, History, Token};
use crate::engine::{Calculator, CalculatorView};
use crate::input::Command;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle that serializes every command through one lock.
///
/// Each command runs to completion while holding the lock, so all handles
/// observe the same sequence of states a single-threaded caller would.
///
/// # Example
///
/// ```rust
/// use calcbook::engine::SharedCalculator;
/// use calcbook::input::parse_keys;
///
/// let shared = SharedCalculator::default();
/// let handle = shared.clone();
///
/// std::thread::spawn(move || handle.dispatch_all(parse_keys("2*21=").unwrap()))
///     .join()
///     .unwrap();
///
/// assert_eq!(shared.view().display_value, "42");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedCalculator {
    inner: Arc<Mutex<Calculator>>,
}

impl SharedCalculator {
    pub fn new(calculator: Calculator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(calculator)),
        }
    }

    pub fn append(&self, token: Token) {
        self.inner.lock().append(token);
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn calculate(&self) {
        self.inner.lock().calculate();
    }

    pub fn dispatch(&self, command: Command) {
        self.inner.lock().dispatch(command);
    }

    /// Apply a batch of commands without letting other handles interleave.
    pub fn dispatch_all<I>(&self, commands: I)
    where
        I: IntoIterator<Item = Command>,
    {
        self.inner.lock().dispatch_all(commands);
    }

    /// Consistent snapshot of the rendered fields.
    pub fn view(&self) -> CalculatorView {
        self.inner.lock().view()
    }

    pub fn state(&self) -> CalculatorState {
        self.inner.lock().state().clone()
    }

    pub fn history(&self) -> History {
        self.inner.lock().history().clone()
    }
}

impl From<Calculator> for SharedCalculator {
    fn from(calculator: Calculator) -> Self {
        Self::new(calculator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_keys;
    use std::thread;

    #[test]
    fn handles_share_one_session() {
        let shared = SharedCalculator::default();
        let other = shared.clone();

        shared.dispatch_all(parse_keys("3+").unwrap());
        other.dispatch_all(parse_keys("4=").unwrap());

        assert_eq!(shared.view().display_value, "7");
        assert_eq!(other.history().len(), 1);
    }

    #[test]
    fn batches_from_threads_do_not_interleave() {
        let shared = SharedCalculator::default();

        let workers: Vec<_> = (0..8)
            .map(|_| {
                let handle = shared.clone();
                thread::spawn(move || {
                    for _ in 0..5 {
                        handle.dispatch_all(parse_keys("C2*3=").unwrap());
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().unwrap();
        }

        let history = shared.history();
        assert_eq!(history.len(), 10);
        assert!(history.iter().all(|e| e.expression == "2 * 3" && e.result == 6.0));
    }

    #[test]
    fn clear_through_handle_resets_state() {
        let shared = SharedCalculator::from(Calculator::new());
        shared.append(Token::digit(5).unwrap());
        shared.clear();
        shared.calculate();

        assert_eq!(shared.state(), CalculatorState::default());
    }
}
