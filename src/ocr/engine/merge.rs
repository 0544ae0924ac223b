use std::collections::BTreeMap;

use crate::ocr::{LineRegion, Token, WordRegion};

use super::geom::union_bbox;

/// `(block_num, line_num)`; word numbers are only unique inside one key.
pub type LineKey = (u32, u32);

/// Groups filtered tokens into lines keyed by block and line number.
///
/// Each line's box is the smallest box holding all of its words. Words are
/// re-ordered by x before the line text is built because recognizers do not
/// always emit a line strictly left to right.
pub fn aggregate_lines(tokens: &[Token]) -> BTreeMap<LineKey, LineRegion> {
    let mut lines: BTreeMap<LineKey, LineRegion> = BTreeMap::new();

    for token in tokens {
        let key = (token.block_num, token.line_num);
        let line = lines.entry(key).or_insert_with(|| LineRegion {
            text: String::new(),
            bbox: token.bbox,
            block_num: token.block_num,
            line_num: token.line_num,
            words: Vec::new(),
        });
        line.bbox = union_bbox(&line.bbox, &token.bbox);
        line.words.push(WordRegion::from(token.clone()));
    }

    for line in lines.values_mut() {
        // stable: equal x keeps emission order
        line.words.sort_by_key(|word| word.bbox.x);
        line.text = line
            .words
            .iter()
            .map(|word| word.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
    }

    lines
}
