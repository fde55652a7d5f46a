use cmdline::{CmdParser, FlagKind};
use std::fmt::Write;
use tracing::warn;

use crate::config::FlagDecl;

/// Flags every `flagcheck` run understands.
pub(crate) const BUILTIN_FLAGS: [(FlagKind, &str); 5] = [
    (FlagKind::Int, "n"),
    (FlagKind::Int64, "seed"),
    (FlagKind::Float, "rate"),
    (FlagKind::String, "name"),
    (FlagKind::Bool, "verbose"),
];

/// Declares the built-in flags, then the configured ones.
///
/// A configured flag reusing a built-in name replaces it.
pub(crate) fn declare_flags(parser: &mut CmdParser, extra: &[FlagDecl]) {
    for (kind, name) in BUILTIN_FLAGS {
        parser.add_flag(kind, name, false);
    }
    for decl in extra {
        if !parser.declare(&decl.kind, decl.name.as_str(), decl.required) {
            warn!(flag = %decl.name, kind = %decl.kind, "Unknown flag kind in config, skipped");
        }
    }
}

/// One line per flag, sorted by name: `name = value` or `name (unset)`.
pub(crate) fn render(parser: &CmdParser) -> String {
    let mut names: Vec<&str> = parser.names().collect();
    names.sort_unstable();

    let mut out = String::new();
    for name in names {
        if parser.is_loaded(name) {
            let _ = writeln!(out, "{name} = {}", parser.get_var(name));
        } else {
            let _ = writeln!(out, "{name} (unset)");
        }
    }
    out
}
