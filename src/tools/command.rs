//! Prepared external commands.

use std::ffi::OsString;

/// A fully-prepared external command: program name plus argv.
///
/// Building one does nothing — a [`ToolRunner`](super::ToolRunner) executes
/// it. Keeping preparation and execution apart lets tests assert the exact
/// argv a run would use without running anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: &'static str,
    pub args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: &'static str) -> Self {
        Self {
            program,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Human-readable rendering for reports and error messages.
    pub fn rendered(&self) -> String {
        let mut out = String::from(self.program);
        for arg in &self.args {
            out.push(' ');
            out.push_str(&arg.to_string_lossy());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_keep_insertion_order() {
        let cmd = ToolCommand::new("tool").arg("a").arg("b").arg("c");
        assert_eq!(cmd.args, vec!["a", "b", "c"]);
    }

    #[test]
    fn rendered_joins_program_and_args() {
        let cmd = ToolCommand::new("convert")
            .arg("in.jpg")
            .arg("-resize")
            .arg("640x480")
            .arg("out.jpg");
        assert_eq!(cmd.rendered(), "convert in.jpg -resize 640x480 out.jpg");
    }

    #[test]
    fn rendered_with_no_args_is_the_program() {
        assert_eq!(ToolCommand::new("jpegoptim").rendered(), "jpegoptim");
    }
}
