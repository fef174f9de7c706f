use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::model::SampleTable;

/// Header line written above the data rows. The loader skips it as a comment.
pub const HEADER: &str = "#time [s]        phi";

/// Write `table` as space-separated `time phi` rows under [`HEADER`].
pub fn write_table<W: Write>(mut out: W, table: &SampleTable) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for [t, phi] in table.points() {
        writeln!(out, "{t} {phi}")?;
    }
    out.flush()
}

pub fn save_file(path: &Path, table: &SampleTable) -> io::Result<()> {
    let file = File::create(path)?;
    write_table(BufWriter::new(file), table)
}
