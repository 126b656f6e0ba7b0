//! Path utilities: expand ~ in user-supplied file names.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("/tmp/out.csv"), PathBuf::from("/tmp/out.csv"));
        assert_eq!(expand_tilde("out.csv"), PathBuf::from("out.csv"));
    }

    #[test]
    fn tilde_expands_to_the_home_directory() {
        let home = dirs::home_dir().expect("home directory");
        let p = expand_tilde("~/june.csv");
        assert!(p.is_absolute());
        assert_eq!(p, home.join("june.csv"));
    }
}
