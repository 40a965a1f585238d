use once_cell::sync::Lazy;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the process working directory.
/// Changing the directory concurrently can lead to nondeterministic failures.
pub static TEST_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// DDL used across the converter tests: two tables, a private id column and
/// one type nothing classifies.
pub const SAMPLE_DDL: &str = "\
CREATE TABLE users (
    id INT,
    DeviceId VARCHAR,
    email TEXT,
    score FLOAT,
    active BOOLEAN,
    created_at TIMESTAMP,
    avatar BLOB
);

CREATE TABLE sessions (
    session_id BIGINT,
    deviceid TEXT,
    started DATE
);
";

/// Write `sql` to `<tmp>/<file_name>` inside a fresh temp dir.
///
/// The returned `TempDir` must outlive the path.
pub fn write_sql_fixture(file_name: &str, sql: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(file_name);
    fs::write(&path, sql).expect("write sql fixture");
    (dir, path)
}

/// Temporarily change the current working directory for the duration of the closure.
/// Guards against concurrent `chdir` calls by taking the global `TEST_MUTEX` lock.
/// Always restores the original directory, even if the closure panics.
pub fn with_chdir<F, T>(target: impl AsRef<Path>, f: F) -> std::io::Result<T>
where
    F: FnOnce() -> T,
{
    let _lock = TEST_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let original = env::current_dir()?;
    env::set_current_dir(target.as_ref())?;

    struct Reset(PathBuf);
    impl Drop for Reset {
        fn drop(&mut self) {
            let _ = env::set_current_dir(&self.0);
        }
    }
    let _guard = Reset(original);

    Ok(f())
}
