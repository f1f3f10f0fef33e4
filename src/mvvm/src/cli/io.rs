use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use eyre::WrapErr;

use super::HYPHEN;

/// Reads the whole input named by `path` into a string.
///
/// A path of "-" reads from stdin.
pub fn read_input(path: &Path) -> eyre::Result<String> {
    if path.as_os_str() == HYPHEN {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .wrap_err("failed to read script from stdin")?;

        return Ok(buf);
    }

    fs::read_to_string(path).wrap_err_with(|| format!("failed to read '{}'", path.display()))
}
