//! Logger setup for the daemon.
//!
//! Logs go to stderr through `env_logger` (default level `info`, override with
//! `RUST_LOG`). When a log directory is given, every line is also written to
//! `{log_dir}/backend.log`, which rotates to `backend.log.1` .. `backend.log.5`
//! once it would exceed 1 MB.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

const LOG_FILE_NAME: &str = "backend.log";
const MAX_LOG_BYTES: u64 = 1_000_000;
const LOG_BACKUPS: usize = 5;

/// Writes each log line to stderr and to a rotating file.
struct Tee {
    file: RotatingFile,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Losing the console copy must not lose the file copy.
        let _ = io::stderr().write_all(buf);
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let _ = io::stderr().flush();
        self.file.flush()
    }
}

/// Size-capped log file with numbered backups.
///
/// A write that would push the file past `max_bytes` first shifts
/// `backend.log.N` to `backend.log.N+1` (dropping the oldest), renames the
/// live file to `backend.log.1` and starts a fresh one. A single write larger
/// than the cap still lands whole in the fresh file.
pub struct RotatingFile {
    dir: PathBuf,
    file: File,
    size: u64,
    max_bytes: u64,
    backups: usize,
}

impl RotatingFile {
    /// Open (or create) `{log_dir}/backend.log` for appending, creating the directory if needed.
    pub fn open(log_dir: &Path, max_bytes: u64, backups: usize) -> Result<Self, String> {
        let file = open_log_file(log_dir)?;
        let size = file
            .metadata()
            .map(|m| m.len())
            .map_err(|e| format!("Failed to read log file metadata: {}", e))?;

        Ok(Self {
            dir: log_dir.to_path_buf(),
            file,
            size,
            max_bytes,
            backups,
        })
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let live = log_file_path(&self.dir);

        if self.backups == 0 {
            self.file = OpenOptions::new().write(true).truncate(true).open(&live)?;
        } else {
            for n in (1..self.backups).rev() {
                let from = backup_path(&self.dir, n);
                if from.exists() {
                    fs::rename(&from, backup_path(&self.dir, n + 1))?;
                }
            }
            fs::rename(&live, backup_path(&self.dir, 1))?;
            self.file = OpenOptions::new().create(true).append(true).open(&live)?;
        }

        self.size = 0;
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let len = buf.len() as u64;
        if self.size > 0 && self.size + len > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.size += len;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Path of the log file inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

/// Path of the `n`-th backup, `backend.log.{n}`.
pub fn backup_path(log_dir: &Path, n: usize) -> PathBuf {
    log_dir.join(format!("{}.{}", LOG_FILE_NAME, n))
}

/// Open (or create) `{log_dir}/backend.log` for appending, creating the directory if needed.
pub fn open_log_file(log_dir: &Path) -> Result<File, String> {
    fs::create_dir_all(log_dir)
        .map_err(|e| format!("Failed to create log directory {}: {}", log_dir.display(), e))?;

    let path = log_file_path(log_dir);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))
}

/// Install the global logger.
pub fn init(log_dir: Option<&Path>) -> Result<(), String> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            buf.timestamp_millis(),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(dir) = log_dir {
        let file = RotatingFile::open(dir, MAX_LOG_BYTES, LOG_BACKUPS)?;
        builder.target(env_logger::Target::Pipe(Box::new(Tee { file })));
    }

    builder
        .try_init()
        .map_err(|e| format!("Failed to initialize logger: {}", e))?;

    if let Some(dir) = log_dir {
        log::info!("Logging initialized. Writing to {}", log_file_path(dir).display());
    }
    Ok(())
}
