//! Groups the raw line stream into candidate transaction blocks.

use crate::lines::{is_metadata_line, is_transaction_start};

/// Most transactions span 2-4 extracted lines; cap runaway blocks caused by
/// unrecognized trailing noise.
pub const MAX_CONTINUATION_LINES: usize = 5;

/// Walk the line stream and group it into blocks, each opened by a date
/// anchor line. A block ends at the next anchor, at a metadata line (which
/// is not consumed into the block), or at the continuation cap. Lines that
/// precede the first anchor are skipped one at a time.
pub fn assemble_blocks<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !is_transaction_start(lines[i]) {
            i += 1;
            continue;
        }

        let mut block = vec![lines[i]];
        let mut j = i + 1;
        while j < lines.len() {
            let next = lines[j];
            if is_transaction_start(next) || is_metadata_line(next) {
                break;
            }
            block.push(next);
            j += 1;
            if block.len() > MAX_CONTINUATION_LINES {
                break;
            }
        }

        blocks.push(block);
        i = j;
    }

    blocks
}
