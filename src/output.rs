//! User-facing console lines.
//! Colored prefixes only when the target stream is a TTY so piped output
//! stays plain. Info/ok go to stdout, warnings and errors to stderr.

use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy)]
enum Tag {
    Info,
    Ok,
    Warn,
    Error,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Tag::Info => "info:",
            Tag::Ok => "ok:",
            Tag::Warn => "warn:",
            Tag::Error => "error:",
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Tag::Warn | Tag::Error)
    }
}

fn emit(tag: Tag, msg: &str) {
    let stream = if tag.to_stderr() {
        atty::Stream::Stderr
    } else {
        atty::Stream::Stdout
    };
    let prefix = if atty::is(stream) {
        let label = tag.label();
        match tag {
            Tag::Info => label.cyan().bold().to_string(),
            Tag::Ok => label.green().bold().to_string(),
            Tag::Warn => label.yellow().bold().to_string(),
            Tag::Error => label.red().bold().to_string(),
        }
    } else {
        tag.label().to_string()
    };
    if tag.to_stderr() {
        eprintln!("{prefix} {msg}");
    } else {
        println!("{prefix} {msg}");
    }
}

pub fn print_info(msg: &str) {
    emit(Tag::Info, msg);
}

pub fn print_success(msg: &str) {
    emit(Tag::Ok, msg);
}

pub fn print_warn(msg: &str) {
    emit(Tag::Warn, msg);
}

pub fn print_error(msg: &str) {
    emit(Tag::Error, msg);
}
