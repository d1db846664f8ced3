use std::path::Path;

use boxtag_core::{IconError, pack_ico};

/// Pack `input` into a multi-size ICO at `output`.
pub fn run(input: &Path, output: &Path) -> Result<(), IconError> {
    let sizes = pack_ico(input, output)?;

    let listed: Vec<String> = sizes.iter().map(|s| format!("{}x{}", s, s)).collect();
    println!("Created {} ({})", output.display(), listed.join(", "));
    Ok(())
}
