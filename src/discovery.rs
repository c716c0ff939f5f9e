use std::env;
use std::path::PathBuf;

pub(crate) const LIBRARY_PATH_ENV: &str = "MILKCAT_LIBRARY_PATH";
pub(crate) const MODEL_PATH_ENV: &str = "MILKCAT_MODEL_PATH";

/// Bare names and absolute paths handed to the platform loader as a last resort.
pub(crate) fn default_library_candidates() -> &'static [&'static str] {
    #[cfg(target_os = "windows")]
    {
        &["milkcat.dll", "libmilkcat.dll"]
    }
    #[cfg(target_os = "macos")]
    {
        &[
            "libmilkcat.dylib",
            "/usr/local/lib/libmilkcat.dylib",
            "/opt/homebrew/lib/libmilkcat.dylib",
            "@rpath/libmilkcat.dylib",
            "@loader_path/libmilkcat.dylib",
        ]
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        &[
            "libmilkcat.so",
            "./libmilkcat.so",
            "/usr/local/lib/libmilkcat.so",
            "/usr/lib/libmilkcat.so",
        ]
    }
}

fn library_file_name() -> &'static str {
    #[cfg(target_os = "windows")]
    {
        "milkcat.dll"
    }
    #[cfg(target_os = "macos")]
    {
        "libmilkcat.dylib"
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        "libmilkcat.so"
    }
}

/// Looks for an installed library in the per-user prefix and well-known
/// system locations. Returns the first path that exists.
pub(crate) fn discover_default_library_path() -> Option<PathBuf> {
    let file_name = library_file_name();

    #[cfg(target_os = "windows")]
    let user_root = env::var_os("LOCALAPPDATA").map(|root| PathBuf::from(root).join("milkcat"));
    #[cfg(not(target_os = "windows"))]
    let user_root = env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("milkcat"));

    if let Some(root) = user_root {
        let path = root.join("lib").join(file_name);
        if path.exists() {
            return Some(path);
        }
    }

    #[cfg(target_os = "windows")]
    let well_known = [PathBuf::from("C:\\milkcat\\lib").join(file_name)];
    #[cfg(target_os = "macos")]
    let well_known = [
        PathBuf::from("/usr/local/lib").join(file_name),
        PathBuf::from("/opt/homebrew/lib").join(file_name),
    ];
    #[cfg(all(unix, not(target_os = "macos")))]
    let well_known = [
        PathBuf::from("/usr/local/lib").join(file_name),
        PathBuf::from("/usr/lib").join(file_name),
    ];

    well_known.into_iter().find(|path| path.exists())
}

/// Model directory from `MILKCAT_MODEL_PATH`. `None` lets the engine use its
/// bundled model location.
pub(crate) fn discover_default_model_path() -> Option<PathBuf> {
    env::var_os(MODEL_PATH_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
