use std::cell::Cell;
use std::rc::Rc;

/// Shared flag telling a spawned task whether its component is still mounted.
///
/// Clone it into the task, keep the original for the effect cleanup, and call
/// [`MountFlag::unmount`] when the component is torn down. Any state write the
/// task makes afterwards must be skipped.
///
/// # Example
///
/// ```rust,ignore
/// use_effect_with((), move |_| {
///     let mounted = MountFlag::new();
///     let task_flag = mounted.clone();
///
///     spawn_local(async move {
///         let value = load().await;
///         if task_flag.is_mounted() {
///             state.set(value);
///         }
///     });
///
///     move || mounted.unmount()
/// });
/// ```
#[derive(Clone, Debug, Default)]
pub struct MountFlag {
    unmounted: Rc<Cell<bool>>,
}

impl MountFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        !self.unmounted.get()
    }

    pub fn unmount(&self) {
        self.unmounted.set(true);
    }

    /// Runs `write` only while the component is mounted. Returns whether it ran.
    pub fn run_if_mounted(&self, write: impl FnOnce()) -> bool {
        if self.is_mounted() {
            write();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_flag_is_mounted() {
        assert!(MountFlag::new().is_mounted());
    }

    #[test]
    fn test_unmount_is_shared_between_clones() {
        let flag = MountFlag::new();
        let task_flag = flag.clone();

        flag.unmount();

        assert!(!task_flag.is_mounted());
    }

    #[test]
    fn test_run_if_mounted_skips_after_unmount() {
        let flag = MountFlag::new();
        let writes = Cell::new(0);

        assert!(flag.run_if_mounted(|| writes.set(writes.get() + 1)));
        flag.unmount();
        assert!(!flag.run_if_mounted(|| writes.set(writes.get() + 1)));

        assert_eq!(writes.get(), 1);
    }
}
