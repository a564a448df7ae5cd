#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Locate a usable TTF/OTF on the host. The repository bundles no font
/// binary, so font-dependent tests skip when this returns `None`.
pub fn find_system_font() -> Option<PathBuf> {
    let mut roots = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("C:\\Windows\\Fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        roots.push(PathBuf::from(home).join(".fonts"));
    }

    let mut found = Vec::new();
    for root in roots {
        collect_fonts(&root, &mut found);
    }

    // Plain .ttf faces first, then lexicographic for determinism.
    found.sort_by_key(|p| {
        let is_otf = p
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| !e.eq_ignore_ascii_case("ttf"))
            .unwrap_or(true);
        (is_otf, p.clone())
    });
    found.into_iter().next()
}

fn collect_fonts(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in rd.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_fonts(&path, out);
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext == "ttf" || ext == "otf" {
            out.push(path);
        }
    }
}
