use tracing::debug;

use crate::ocr::{BBoxPx, Token};

const TSV_MIN_COLUMNS: usize = 11;

/// Parses `tesseract ... tsv` output into the raw token stream.
///
/// Columns: level, page_num, block_num, par_num, line_num, word_num, left, top,
/// width, height, conf, text. Rows of every level are kept; page/block/line rows
/// carry `conf = -1` and no text, so the token filter removes them later.
pub fn parse_tsv_tokens(tsv: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (idx, row) in tsv.lines().enumerate() {
        if idx == 0 && row.starts_with("level") {
            continue;
        }
        let cols = row.split('\t').collect::<Vec<_>>();
        if cols.len() < TSV_MIN_COLUMNS {
            continue;
        }
        match parse_row(&cols) {
            Some(token) => tokens.push(token),
            None => debug!("tsv: skipping malformed row {}: {:?}", idx, row),
        }
    }

    tokens
}

fn parse_row(cols: &[&str]) -> Option<Token> {
    let block_num: u32 = cols[2].trim().parse().ok()?;
    let line_num: u32 = cols[4].trim().parse().ok()?;
    let word_num: u32 = cols[5].trim().parse().ok()?;
    let left: u32 = cols[6].trim().parse().ok()?;
    let top: u32 = cols[7].trim().parse().ok()?;
    let width: u32 = cols[8].trim().parse().ok()?;
    let height: u32 = cols[9].trim().parse().ok()?;
    let confidence = parse_confidence(cols[10])?;
    let text = cols.get(11).copied().unwrap_or("");

    Some(Token {
        text: text.to_string(),
        confidence,
        bbox: BBoxPx {
            x: left,
            y: top,
            w: width,
            h: height,
        },
        block_num,
        line_num,
        word_num,
    })
}

// Tesseract 4+ prints fractional confidences ("96.412346"); truncate toward zero.
fn parse_confidence(value: &str) -> Option<i32> {
    let value = value.trim();
    if let Ok(conf) = value.parse::<i32>() {
        return Some(conf);
    }
    let conf = value.parse::<f32>().ok()?;
    if !conf.is_finite() {
        return None;
    }
    Some(conf.trunc() as i32)
}
