//! Caller location resolution and stack capture
//!
//! The facade reports the source location of its caller, not of the facade
//! itself. Frames are recovered from `std::backtrace::Backtrace`; the
//! facade's own frames are discarded, then `skip - 1` additional frames are
//! advanced so wrappers around the facade can point attribution at their own
//! callers. Resolution is best-effort: builds without symbols degrade to the
//! `#[track_caller]` location fallback supplied by the logger.

use std::backtrace::Backtrace;

/// Resolved attribution for one log call
#[derive(Debug, Clone, Default)]
pub struct CallerInfo {
    /// Short caller form: `basename:line`
    pub file: Option<String>,
    /// Caller function name, hash suffix stripped
    pub func: Option<String>,
    /// Rendered stack from the caller frame downward
    pub stack: Option<String>,
}

#[derive(Debug)]
struct Frame {
    func: String,
    file: Option<String>,
    line: Option<u32>,
}

impl Frame {
    fn short_location(&self) -> Option<String> {
        let file = self.file.as_deref()?;
        let line = self.line?;
        Some(format!("{}:{}", basename(file), line))
    }
}

/// Capture caller attribution, skipping `skip` frames past the facade's own
/// frames (skip = 1 resolves the immediate caller).
pub fn capture(skip: usize, with_stack: bool) -> CallerInfo {
    let rendered = Backtrace::force_capture().to_string();
    let frames = parse_frames(&rendered);

    let first_external = frames.iter().position(|f| !is_facade_frame(&f.func));
    let caller_index = first_external.map(|i| i + skip.saturating_sub(1));

    let mut info = CallerInfo::default();
    if let Some(idx) = caller_index {
        if let Some(frame) = frames.get(idx) {
            info.file = frame.short_location();
            info.func = Some(frame.func.clone());
        }
        if with_stack {
            info.stack = render_stack(&frames[idx.min(frames.len())..]);
        }
    }

    if with_stack && info.stack.is_none() {
        // Symbolization unavailable; fall back to the raw rendering so a
        // requested stack is always attached.
        info.stack = Some(rendered);
    }

    info
}

/// Frames belonging to the facade or the backtrace machinery itself
fn is_facade_frame(func: &str) -> bool {
    func.starts_with("std::backtrace")
        || func.starts_with("backtrace::")
        || func.starts_with("std::panicking")
        || (func.contains("splitlog::core::caller") && !func.contains("::tests::"))
        || (func.contains("splitlog::core::logger::Logger") && !func.contains("::tests::"))
}

fn parse_frames(rendered: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();

    for line in rendered.lines() {
        let trimmed = line.trim_start();
        if let Some(location) = trimmed.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                let (file, line_no) = split_location(location);
                frame.file = file;
                frame.line = line_no;
            }
        } else if let Some((index, symbol)) = trimmed.split_once(": ") {
            if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
                frames.push(Frame {
                    func: strip_hash(symbol.trim()),
                    file: None,
                    line: None,
                });
            }
        }
    }

    frames
}

/// Split a `path:line:column` location into path and line number
fn split_location(location: &str) -> (Option<String>, Option<u32>) {
    let mut parts = location.rsplitn(3, ':');
    let _column = parts.next();
    let line = parts.next().and_then(|l| l.parse::<u32>().ok());
    let path = parts.next().map(str::to_string);
    match (path, line) {
        (Some(p), Some(l)) => (Some(p), Some(l)),
        _ => (None, None),
    }
}

fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Strip the trailing `::h0123456789abcdef` symbol hash, if present
fn strip_hash(symbol: &str) -> String {
    if let Some(pos) = symbol.rfind("::h") {
        let suffix = &symbol[pos + 3..];
        if suffix.len() == 16 && suffix.chars().all(|c| c.is_ascii_hexdigit()) {
            return symbol[..pos].to_string();
        }
    }
    symbol.to_string()
}

fn render_stack(frames: &[Frame]) -> Option<String> {
    if frames.is_empty() {
        return None;
    }
    let mut out = String::new();
    for frame in frames {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&frame.func);
        if let Some(location) = frame.short_location() {
            out.push_str("\n\t");
            out.push_str(&location);
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_hash() {
        assert_eq!(
            strip_hash("my_app::handler::h0123456789abcdef"),
            "my_app::handler"
        );
        assert_eq!(strip_hash("my_app::handler"), "my_app::handler");
        assert_eq!(strip_hash("my_app::hash_fn"), "my_app::hash_fn");
    }

    #[test]
    fn test_split_location() {
        let (path, line) = split_location("./src/main.rs:42:13");
        assert_eq!(path.as_deref(), Some("./src/main.rs"));
        assert_eq!(line, Some(42));

        let (path, line) = split_location("nonsense");
        assert!(path.is_none());
        assert!(line.is_none());
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("/a/b/handler.rs"), "handler.rs");
        assert_eq!(basename("handler.rs"), "handler.rs");
        assert_eq!(basename("a\\b\\handler.rs"), "handler.rs");
    }

    #[test]
    fn test_parse_frames() {
        let rendered = "   0: std::backtrace::Backtrace::force_capture\n\
                        \u{20}            at /rustc/lib.rs:1:1\n\
                        \u{20}  1: splitlog::core::caller::capture::h0123456789abcdef\n\
                        \u{20}            at ./src/core/caller.rs:30:5\n\
                        \u{20}  2: my_app::handler\n\
                        \u{20}            at ./src/main.rs:10:5\n";
        let frames = parse_frames(rendered);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1].func, "splitlog::core::caller::capture");
        assert_eq!(frames[2].short_location().as_deref(), Some("main.rs:10"));
    }

    #[test]
    fn test_capture_does_not_panic() {
        let info = capture(1, false);
        // Resolution is best-effort; only shape is guaranteed here.
        let _ = info.file;
        let _ = info.func;
        assert!(info.stack.is_none());
    }

    #[test]
    fn test_capture_with_stack_always_present() {
        let info = capture(1, true);
        assert!(info.stack.is_some());
        assert!(!info.stack.unwrap().is_empty());
    }
}
