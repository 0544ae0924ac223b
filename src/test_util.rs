pub(crate) fn with_temp_home<F, R>(func: F) -> R
where
    F: FnOnce(&std::path::Path) -> R,
{
    static HOME_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
    let _guard = HOME_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let dir = tempfile::tempdir().expect("tempdir");
    let old_home = std::env::var("HOME").ok();
    let old_base = std::env::var(crate::paths::BASE_DIR_ENV).ok();
    // SAFETY: every test touching HOME holds HOME_MUTEX.
    unsafe {
        std::env::set_var("HOME", dir.path());
        std::env::remove_var(crate::paths::BASE_DIR_ENV);
    }
    let result = func(dir.path());
    unsafe {
        match old_home {
            Some(old) => std::env::set_var("HOME", old),
            None => std::env::remove_var("HOME"),
        }
        if let Some(old) = old_base {
            std::env::set_var(crate::paths::BASE_DIR_ENV, old);
        }
    }
    result
}
