use std::fs::OpenOptions;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
    line: Option<usize>,
    title: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape_workflow_command_value(file)));
    }
    if let Some(line) = line {
        props.push(format!("line={}", line));
    }
    if let Some(title) = title {
        props.push(format!("title={}", escape_workflow_command_value(title)));
    }

    let prop_str = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!(
        "::{}{}::{}",
        level_str,
        prop_str,
        escape_workflow_command_message(message)
    )
}

/// Append a `name=value` step output to the file named by `$GITHUB_OUTPUT`.
///
/// `value` must be a single line: the multi-line heredoc form is not
/// emitted here, and shipmate's matrix output is always one line.
pub fn append_step_output(name: &str, value: &str) -> io::Result<()> {
    let path = std::env::var("GITHUB_OUTPUT").map_err(|_| {
        io::Error::other("GITHUB_OUTPUT is not set (not running under GitHub Actions?)")
    })?;

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}={}", name, value)?;
    Ok(())
}

fn escape_workflow_command_value(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_workflow_command_message(s: &str) -> String {
    escape_workflow_command_value(s)
}
