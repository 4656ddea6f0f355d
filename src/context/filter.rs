use crate::config::FilterConfig;

impl FilterConfig {
    /// True when a directory with this basename must not be descended into.
    pub fn is_pruned_dir(
        &self,
        name: &str,
    ) -> bool {
        self.ignore_dirs.contains(name)
    }

    /// Decides whether a file with this basename goes into the artifact.
    ///
    /// Suffixes are compared as plain strings, so `notes.txt` and a file
    /// literally named `.txt` both match, while `weirdtxt` does not.
    pub fn is_included_file(
        &self,
        name: &str,
    ) -> bool {
        if self.excluded_names.contains(name) {
            return false;
        }
        self.extensions.iter().any(|ext| name.ends_with(ext)) || self.include_files.contains(name)
    }
}
