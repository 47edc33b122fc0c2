//! Typed compiler flags and the command-line serializer.
//!
//! A build command is a list of `(FlagKind, value)` pairs. [`render_command`]
//! is the only place that decides quoting and prefixes, and it always emits
//! the nine kinds in slot order:
//!
//! ```text
//! <compiler> "<src>"... -O<level> -D NAME... -s KEY=VALUE... -I"dir"... -L"dir"... -lname... -o "<output>"
//! ```
//!
//! Library-path flags must precede library-file flags for some linkers, and
//! the output flag is always last.

/// Command-line slot a flag belongs to, declared in serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlagKind {
    /// Slot 1: compiler executable
    Compiler,
    /// Slot 2: translation unit
    Source,
    /// Slot 3: `-O` level
    Optimization,
    /// Slot 4: `-D NAME`
    Macro,
    /// Slot 5: emscripten `-s KEY=VALUE`
    Setting,
    /// Slot 6: `-I"dir"`
    IncludePath,
    /// Slot 7: `-L"dir"`
    LibraryPath,
    /// Slot 8: `-lname`
    LibraryFile,
    /// Slot 9: `-o "path"`
    Output,
}

impl FlagKind {
    /// All kinds, in the order they are serialized.
    pub const ORDER: [FlagKind; 9] = [
        FlagKind::Compiler,
        FlagKind::Source,
        FlagKind::Optimization,
        FlagKind::Macro,
        FlagKind::Setting,
        FlagKind::IncludePath,
        FlagKind::LibraryPath,
        FlagKind::LibraryFile,
        FlagKind::Output,
    ];

    /// Render a single value as it appears on the command line.
    pub fn render(self, value: &str) -> String {
        match self {
            FlagKind::Compiler if is_bare_program(value) => value.to_string(),
            FlagKind::Compiler | FlagKind::Source => quote(value),
            FlagKind::Optimization => format!("-O{value}"),
            FlagKind::Macro => format!("-D {value}"),
            FlagKind::Setting => format!("-s {value}"),
            FlagKind::IncludePath => format!("-I{}", quote(value)),
            FlagKind::LibraryPath => format!("-L{}", quote(value)),
            FlagKind::LibraryFile => format!("-l{value}"),
            FlagKind::Output => format!("-o {}", quote(value)),
        }
    }
}

/// A single typed command-line value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flag {
    kind: FlagKind,
    value: String,
}

impl Flag {
    pub fn new(kind: FlagKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> FlagKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Rendered token, e.g. `-I"/usr/include"`.
    pub fn render(&self) -> String {
        self.kind.render(&self.value)
    }
}

/// Serialize flags into one command line.
///
/// Flags are grouped by kind in [`FlagKind::ORDER`]; within a kind they keep
/// insertion order (duplicates included). Empty values and empty slots
/// contribute nothing, and tokens are joined with single spaces.
pub fn render_command(flags: &[Flag]) -> String {
    render_tokens(flags).join(" ")
}

/// Rendered tokens in slot order.
pub fn render_tokens(flags: &[Flag]) -> Vec<String> {
    FlagKind::ORDER
        .iter()
        .flat_map(|kind| flags.iter().filter(move |flag| flag.kind == *kind))
        .filter(|flag| !flag.value.is_empty())
        .map(Flag::render)
        .collect()
}

fn quote(value: &str) -> String {
    format!("\"{value}\"")
}

// A bare program name is resolved through the shell search path and stays
// unquoted; anything that looks like a filesystem path is quoted.
fn is_bare_program(value: &str) -> bool {
    !value.contains(|c: char| c == '/' || c == '\\' || c.is_whitespace())
}
