//! Calendar refresh hook

/// Called after actions have been applied so the host can re-attach date
/// pickers to fields that became editable again
pub trait CalendarHook: Send + Sync {
    fn refresh(&self);
}

impl<F> CalendarHook for F
where
    F: Fn() + Send + Sync,
{
    fn refresh(&self) {
        self()
    }
}
