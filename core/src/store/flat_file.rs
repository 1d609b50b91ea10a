use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use tracing::debug;

use roster_common::error::StoreError;
use roster_common::models::{DELIMITER, FlatRecord};
use roster_common::repository::Repository;

/// Stores records as `first,second` lines in a single text file.
///
/// There is no escaping. A field holding the delimiter or a newline
/// produces a file that no longer loads.
pub struct FlatFileRepository<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> FlatFileRepository<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: FlatRecord> Repository<T> for FlatFileRepository<T> {
    fn load_all(&self) -> Result<Vec<T>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let records = parse_records(&content, &self.path)?;
        debug!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn save_all(&self, records: &[T]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        fs::write(&self.path, render_records(records)).map_err(|e| StoreError::io(&self.path, e))?;
        debug!("wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

fn parse_records<T: FlatRecord>(content: &str, path: &Path) -> Result<Vec<T>, StoreError> {
    let mut records = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(DELIMITER).collect();
        let [first, second] = fields.as_slice() else {
            return Err(StoreError::Malformed {
                path: path.to_path_buf(),
                line: idx + 1,
                content: raw.to_string(),
            });
        };

        records.push(T::from_fields(first, second));
    }

    Ok(records)
}

fn render_records<T: FlatRecord>(records: &[T]) -> String {
    records
        .iter()
        .map(|record| {
            let (first, second) = record.fields();
            format!("{first}{DELIMITER}{second}\n")
        })
        .collect()
}
