use super::{Banner, Naming};
use std::fmt::{self, Write};

/// Declaration file: imports, the registered object handle, and the proxy
/// `@interface` deriving from the parent's proxy.
pub fn emit_header(
    out: &mut String,
    class_name: &str,
    parent_name: &str,
    naming: &Naming,
    banner: &Banner,
) -> fmt::Result {
    let proxy = naming.proxy(class_name);

    banner.write_to(out)?;
    writeln!(out)?;
    writeln!(out, "#import \"{}\"", naming.header_file(class_name))?;
    writeln!(out)?;
    writeln!(out, "#import \"{}\"", naming.header_file(parent_name))?;
    writeln!(out)?;
    writeln!(out, "extern JSObject *{}_object;", proxy)?;
    writeln!(out)?;
    writeln!(out, "/* Proxy class */")?;
    writeln!(out, "@interface {} : {}", proxy, naming.proxy(parent_name))?;
    writeln!(out, "{{")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "@end")
}
