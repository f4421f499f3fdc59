use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub const TOAST_LOG_FILE: &str = "toast.log";

/// Append a timestamped toast message. Failures to write are ignored.
pub fn append_toast_log(path: impl AsRef<Path>, msg: &str) {
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())
    {
        let _ = writeln!(file, "{} - {}", Local::now().to_rfc3339(), msg);
    }
}

#[cfg(test)]
mod tests {
    use super::append_toast_log;

    #[test]
    fn appends_one_line_per_toast() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("toast.log");
        append_toast_log(&path, "Unidade Painel 1 cadastrada");
        append_toast_log(&path, "Não foi possível remover a unidade 2");
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - Unidade Painel 1 cadastrada"));
    }
}
