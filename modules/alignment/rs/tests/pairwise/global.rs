use seqalign_alignment_rs::pairwise::alignment::Op;
use seqalign_alignment_rs::pairwise::matrix::{self, DerivedTraceMatrix, Matrix};
use seqalign_alignment_rs::pairwise::scoring::SimpleScheme;
use seqalign_alignment_rs::pairwise::{Aligner, Config, Coordinate, Mode, Output};

use crate::{invrle, Score, Symbol};

type Engine = Aligner<SimpleScheme<Score, Symbol>>;

fn edit() -> Engine {
    Aligner::new(Config::edit().with_output(Output::Alignment)).unwrap()
}

fn levenshtein(a: &[u8], b: &[u8]) -> usize {
    let mut prev = (0..=b.len()).collect::<Vec<_>>();
    for (i, x) in a.iter().enumerate() {
        let mut cur = vec![i + 1; b.len() + 1];
        for (j, y) in b.iter().enumerate() {
            cur[j + 1] = (prev[j] + usize::from(x != y))
                .min(prev[j + 1] + 1)
                .min(cur[j] + 1);
        }
        prev = cur;
    }
    prev[b.len()]
}

// Deterministic pseudo-random DNA
fn sequences(count: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };
    (0..count)
        .map(|_| {
            let len = next() % 24;
            (0..len).map(|_| b"ACGT"[next() % 4]).collect()
        })
        .collect()
}

#[test]
fn test_edit_distance() {
    let aligner = edit();
    for (query, database, score, rle) in [
        ("AT", "AT", 0, "2="),
        ("ACGT", "AGT", -1, "1=1v2="),
        ("kitten", "sitting", -3, "1X3=1X1=1^"),
        ("", "ACGT", -4, "4^"),
        ("", "", 0, ""),
    ] {
        let result = aligner.align((), query, database);
        assert_eq!(*result.score(), score);
        assert_eq!(result.end(), Some(Coordinate::new(query.len(), database.len())));
        assert_eq!(result.begin(), Some(Coordinate::new(0, 0)));
        assert_eq!(result.alignment().unwrap().rle(), rle);

        let swapped = aligner.align((), database, query);
        assert_eq!(*swapped.score(), score);
        assert_eq!(swapped.alignment().unwrap().rle(), invrle(rle));
    }
}

#[test]
fn test_gapped_rows() {
    let aligner = edit();
    let result = aligner.align((), "", "ACGT");
    let rows = result.alignment().unwrap().gapped_strings("", "ACGT");
    assert_eq!(rows, ("----".to_string(), "ACGT".to_string()));

    let result = aligner.align((), "ACGT", "AGT");
    let rows = result.alignment().unwrap().gapped_strings("ACGT", "AGT");
    assert_eq!(rows, ("ACGT".to_string(), "A-GT".to_string()));
}

#[test]
fn test_matches_reference_edit_distance() {
    let aligner = edit();
    let seqs = sequences(40, 17);

    for pair in seqs.chunks(2) {
        let (query, database) = (pair[0].as_slice(), pair[1].as_slice());
        let result = aligner.align((), query, database);
        let alignment = result.alignment().unwrap();

        let distance = levenshtein(query, database);
        assert_eq!(*result.score(), -(distance as Score));

        // The alignment covers both sequences and its columns add up to the score
        let (mut consumed, mut cost) = ((0, 0), 0);
        for op in alignment.columns() {
            let (q, d) = op.consumes();
            consumed = (consumed.0 + q, consumed.1 + d);
            cost += usize::from(op != Op::Match);
        }
        assert_eq!(consumed, (query.len(), database.len()));
        assert_eq!(cost, distance);
        assert_eq!(alignment.swapped().swapped(), *alignment);

        // Dropping the gaps restores the sequences
        let (qrow, drow) = alignment.gapped_strings(query, database);
        assert_eq!(qrow.len(), drow.len());
        assert_eq!(qrow.replace('-', ""), String::from_utf8_lossy(query));
        assert_eq!(drow.replace('-', ""), String::from_utf8_lossy(database));
    }
}

#[test]
fn test_affine_gaps() {
    // A gap of length k costs -2 - k
    let aligner: Engine =
        Aligner::new(Config::affine(1, -1, -2, -1).with_output(Output::Alignment)).unwrap();

    let result = aligner.align((), "AAAAAAAA", "AAAA");
    assert_eq!(*result.score(), 4 - 6);
    assert_eq!(result.alignment().unwrap().rle(), "4v4=");

    let result = aligner.align((), "AAAA", "AAAAAAAA");
    assert_eq!(*result.score(), 4 - 6);
    assert_eq!(result.alignment().unwrap().rle(), "4^4=");
}

#[test]
fn test_derived_traces_match_materialized() {
    let config = Config::affine(1, -1, 0, -1).with_debug(true);
    let aligner: Engine = Aligner::new(config).unwrap();

    for pair in sequences(20, 3).chunks(2) {
        let (query, database) = (pair[0].as_slice(), pair[1].as_slice());
        for mode in [Mode::Global, Mode::Local] {
            let aligner = Aligner::new(aligner.config().clone().with_mode(mode)).unwrap();
            let result = aligner.align((), query, database);

            let scores = result.score_matrix().unwrap();
            let traces = result.trace_matrix().unwrap();
            assert_eq!((traces.rows(), traces.cols()), (query.len() + 1, database.len() + 1));

            let derived =
                DerivedTraceMatrix::new(scores, query, database, aligner.config().scheme(), mode)
                    .unwrap();
            assert!(matrix::equal(&derived, traces));
        }
    }
}

#[test]
fn test_derived_traces_require_linear_gaps() {
    let config = Config::affine(1, -1, -3, -1).with_debug(true);
    let aligner: Engine = Aligner::new(config).unwrap();
    let result = aligner.align((), "ACGT", "AGT");

    let derived = DerivedTraceMatrix::new(
        result.score_matrix().unwrap(),
        "ACGT",
        "AGT",
        aligner.config().scheme(),
        Mode::Global,
    );
    assert!(derived.is_err());
}

#[test]
fn test_matrices_only_in_debug_mode() {
    let aligner: Engine = Aligner::new(Config::edit().with_output(Output::Score)).unwrap();
    let result = aligner.align(1, "GATTACA", "GCATGCT");
    assert!(result.score_matrix().is_none() && result.trace_matrix().is_none());
    assert!(result.end().is_none());

    let aligner: Engine =
        Aligner::new(Config::edit().with_output(Output::Score).with_debug(true)).unwrap();
    let result = aligner.align(1, "GATTACA", "GCATGCT");
    let scores = result.score_matrix().unwrap();
    assert_eq!(scores.at(7, 7), *result.score());
    assert!(result.end().is_none());
}
