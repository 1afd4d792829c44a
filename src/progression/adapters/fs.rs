//! File-backed slot scoped to one capability directory.
//!
//! Each slot is a `<name>.json` file. Writes go to a temporary sibling first
//! and are renamed into place, so readers never see a half-written payload.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use crate::progression::ports::{ProgressSlot, SlotError, SlotKey, SlotResult};

/// Suffix of slot files.
const SLOT_SUFFIX: &str = ".json";

/// Suffix of in-flight temporary files.
const TMP_SUFFIX: &str = ".tmp";

/// Slot storing payloads as files inside one directory.
#[derive(Debug)]
pub struct FileSlot {
    dir: Dir,
    root: Utf8PathBuf,
}

impl FileSlot {
    /// Opens `root`, creating it and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while creating or opening the directory.
    pub fn open(root: impl AsRef<Utf8Path>) -> io::Result<Self> {
        let path = root.as_ref().to_owned();
        Dir::create_ambient_dir_all(&path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(&path, ambient_authority())?;
        Ok(Self { dir, root: path })
    }

    /// Returns the directory this slot writes to.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the file name used for `key`.
    #[must_use]
    pub fn file_name(key: SlotKey) -> String {
        format!("{}{SLOT_SUFFIX}", key.as_str())
    }

    fn tmp_file_name(key: SlotKey) -> String {
        format!("{}{TMP_SUFFIX}", Self::file_name(key))
    }
}

impl ProgressSlot for FileSlot {
    fn save(&self, key: SlotKey, payload: &str) -> SlotResult<()> {
        let tmp_name = Self::tmp_file_name(key);
        let file_name = Self::file_name(key);
        self.dir
            .write(&tmp_name, payload)
            .map_err(|err| SlotError::storage(key, err))?;
        self.dir
            .rename(&tmp_name, &self.dir, &file_name)
            .map_err(|err| SlotError::storage(key, err))?;
        debug!(slot = %key, root = %self.root, bytes = payload.len(), "saved slot");
        Ok(())
    }

    fn load(&self, key: SlotKey) -> SlotResult<Option<String>> {
        match self.dir.read_to_string(Self::file_name(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SlotError::storage(key, err)),
        }
    }

    fn clear(&self, key: SlotKey) -> SlotResult<()> {
        match self.dir.remove_file(Self::file_name(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SlotError::storage(key, err)),
        }
    }
}
