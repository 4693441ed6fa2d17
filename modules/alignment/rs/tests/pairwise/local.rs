use seqalign_alignment_rs::pairwise::scoring::SimpleScheme;
use seqalign_alignment_rs::pairwise::{Aligner, Config, Coordinate, Mode, Output};

use crate::{invrle, Score, Symbol};

type Engine = Aligner<SimpleScheme<Score, Symbol>>;

struct Workload<'a> {
    seq1: (&'a [u8], usize),
    seq2: (&'a [u8], usize),
    score: Score,
    rle: &'a str,
}

fn engine(matched: Score, mismatched: Score, open: Score, extend: Score) -> Engine {
    let config = Config::affine(matched, mismatched, open, extend)
        .with_mode(Mode::Local)
        .with_output(Output::Alignment);
    Aligner::new(config).unwrap()
}

fn ensure(aligner: &Engine, w: Workload<'_>) {
    let invrle = invrle(w.rle);

    for (seq1, seq2, rle) in [(w.seq1, w.seq2, w.rle), (w.seq2, w.seq1, invrle.as_str())] {
        let result = aligner.align((), seq1.0, seq2.0);
        let alignment = result.alignment().unwrap_or_else(|| {
            panic!(
                "Aligner failed: {:?} & {:?}",
                String::from_utf8_lossy(seq1.0),
                String::from_utf8_lossy(seq2.0)
            )
        });

        assert_eq!(alignment.query().start, seq1.1);
        assert_eq!(alignment.database().start, seq2.1);
        assert_eq!(*result.score(), w.score);
        assert_eq!(alignment.rle(), rle);

        // Begin/end cells bracket the aligned ranges
        assert_eq!(result.begin(), Some(Coordinate::new(seq1.1, seq2.1)));
        assert_eq!(
            result.end(),
            Some(Coordinate::new(alignment.query().end, alignment.database().end))
        );
    }
}

fn test_all(aligner: &Engine, workloads: Vec<Workload<'_>>) {
    for w in workloads {
        ensure(aligner, w);
    }
}

#[test]
fn test_no_gaps() {
    let aligner = engine(2, -3, -5, -2);
    let workloads = vec![
        Workload {
            seq1: (b"ACGTTT", 0),
            seq2: (b"ACGTTT", 0),
            score: 12,
            rle: "6=",
        },
        Workload {
            seq1: (b"TTTTACGTAGGG", 4),
            seq2: (b"CCACGTACC", 2),
            score: 10,
            rle: "5=",
        },
        Workload {
            seq1: (b"AAAAAAAAGGGAAA", 0),
            seq2: (b"AAAAAAAA", 0),
            score: 16,
            rle: "8=",
        },
    ];
    test_all(&aligner, workloads);
}

#[test]
fn test_affine_gaps() {
    let aligner = engine(1, -2, -4, -1);
    let workloads = vec![
        Workload {
            seq1: (b"AAAAAAAAAAAAAAAA*********AAAAAAAAAAAAAAAA", 0),
            seq2: (b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", 0),
            score: 19,
            rle: "16=9v16=",
        },
        Workload {
            seq1: (b"ACGTACGTACGT****_________", 0),
            seq2: (b"****ACGTACGTACGT_________ACGT*****", 4),
            score: 13,
            rle: "12=4v9=",
        },
    ];
    test_all(&aligner, workloads);
}

#[test]
fn test_linear_gaps() {
    let aligner = engine(1, -2, 0, -1);
    let workloads = vec![
        Workload {
            seq1: (b"A***AAAAAAAA***AAAAAAAA***A", 4),
            seq2: (b"AAAAAAAAAAAAAAAA", 0),
            score: 13,
            rle: "8=3v8=",
        },
        Workload {
            seq1: (b"AAAAAAA**AAAAA*****", 0),
            seq2: (b"___AAAAAAAAAAA", 3),
            score: 9,
            rle: "7=2v4=",
        },
    ];
    test_all(&aligner, workloads);
}

#[test]
fn test_nothing_to_align() {
    let aligner = engine(1, -1, -2, -1);
    for (seq1, seq2) in [("AAAA", "TTTT"), ("", "ACGT"), ("", "")] {
        let result = aligner.align((), seq1, seq2);
        assert_eq!(*result.score(), 0);
        assert_eq!(result.end(), Some(Coordinate::new(0, 0)));
        assert_eq!(result.begin(), Some(Coordinate::new(0, 0)));
        assert!(result.alignment().unwrap().is_empty());
    }
}

#[test]
fn test_first_best_cell_wins() {
    // Both ACGT copies score the same, the one reached first in row-major order is reported
    let aligner = engine(1, -1, -2, -1);
    let result = aligner.align((), "ACGT", "ACGTTTTTACGT");
    assert_eq!(*result.score(), 4);
    assert_eq!(result.end(), Some(Coordinate::new(4, 4)));
    assert_eq!(result.begin(), Some(Coordinate::new(0, 0)));
}
