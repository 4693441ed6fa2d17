use seqalign_alignment_rs::pairwise::alignment::Op;

mod execution;
mod global;
mod local;

pub type Score = i32;
pub type Symbol = u8;

/// Alignment RLE of the same pair with the sequences swapped.
pub fn invrle(rle: &str) -> String {
    let gapfirst = Op::GapFirst.symbol();
    let gapsecond = Op::GapSecond.symbol();
    rle.chars()
        .map(|x| {
            if x == gapfirst {
                gapsecond
            } else if x == gapsecond {
                gapfirst
            } else {
                x
            }
        })
        .collect::<String>()
}
