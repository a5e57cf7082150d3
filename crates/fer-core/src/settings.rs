//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**: the date treated as "today"
//! when highlighting the current day.  It is a process-wide singleton
//! accessed via a `std::sync::OnceLock`.  When no evaluation date is set the
//! system clock decides.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that it
//! can be changed from any thread.  Tests should prefer
//! [`ScopedEvaluationDate`], which restores the previous value on drop and
//! serializes scoped overrides across threads.  Scopes may nest on one
//! thread.

use std::cell::Cell;
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::Year;

/// Process-wide settings used by feriados-rs.
pub struct Settings {
    /// The evaluation date as `(year, month, day)`.
    evaluation_date: Mutex<Option<(Year, u8, u8)>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Held by the outermost live [`ScopedEvaluationDate`] of a thread.
static SCOPE_LOCK: Mutex<()> = Mutex::new(());

thread_local! {
    /// Number of live scopes on this thread.
    static SCOPE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the evaluation date override as `(year, month, day)`.
    ///
    /// Returns `None` if no evaluation date has been set.
    pub fn evaluation_date(&self) -> Option<(Year, u8, u8)> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Set the evaluation date.  The triple is not validated here; date
    /// types validate it when they read it back.
    pub fn set_evaluation_date(&self, year: Year, month: u8, day: u8) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some((year, month, day));
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }

    fn replace_evaluation_date(&self, value: Option<(Year, u8, u8)>) -> Option<(Year, u8, u8)> {
        std::mem::replace(
            &mut *self
                .evaluation_date
                .lock()
                .expect("Settings mutex poisoned"),
            value,
        )
    }
}

/// RAII guard that overrides the evaluation date for its lifetime.
///
/// The previous value is restored when the guard is dropped.  Guards nest
/// on a single thread and must be dropped in reverse order of creation;
/// guards on other threads wait until the outermost one is dropped.
///
/// ```
/// use fer_core::{ScopedEvaluationDate, Settings};
///
/// {
///     let _guard = ScopedEvaluationDate::new(2025, 4, 20);
///     assert_eq!(Settings::instance().evaluation_date(), Some((2025, 4, 20)));
/// }
/// assert_eq!(Settings::instance().evaluation_date(), None);
/// ```
pub struct ScopedEvaluationDate {
    previous: Option<(Year, u8, u8)>,
    _lock: Option<MutexGuard<'static, ()>>,
}

impl ScopedEvaluationDate {
    /// Override the evaluation date until the guard goes out of scope.
    pub fn new(year: Year, month: u8, day: u8) -> Self {
        let depth = SCOPE_DEPTH.with(|d| d.replace(d.get() + 1));
        // A panicking test must not wedge every later scope.
        let lock = (depth == 0).then(|| SCOPE_LOCK.lock().unwrap_or_else(|e| e.into_inner()));
        let previous = Settings::instance().replace_evaluation_date(Some((year, month, day)));
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        Settings::instance().replace_evaluation_date(self.previous);
        SCOPE_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}
