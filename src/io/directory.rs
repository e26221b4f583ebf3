use crate::entry::FileEntry;
use std::fs;
use std::path::Path;

/// Read `path` for the listing panel: case-insensitive by name, optionally
/// with directories grouped first.
pub fn read_directory(
    path: &Path,
    show_hidden: bool,
    dirs_first: bool,
) -> Result<Vec<FileEntry>, std::io::Error> {
    let mut entries: Vec<FileEntry> = fs::read_dir(path)?
        .flatten()
        .filter_map(|entry| FileEntry::from_path(entry.path()))
        .filter(|entry| show_hidden || !entry.is_hidden())
        .collect();

    entries.sort_by(|a, b| {
        if dirs_first && a.is_dir != b.is_dir {
            return b.is_dir.cmp(&a.is_dir);
        }
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    });
    Ok(entries)
}
