use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use eyre::Result;

use seqalign_alignment_rs::execution::{AlgorithmExecutor, End, Parallel, ResultRange, Sequential};
use seqalign_alignment_rs::pairwise::scoring::SimpleScheme;
use seqalign_alignment_rs::pairwise::{Aligner, AlignmentResult, Config, Output, WorkItem};
use seqalign_alignment_rs::{align_pairwise, Execution};
use seqalign_core_rs::LendingIterator;

use crate::{Score, Symbol};

type EditConfig = Config<SimpleScheme<Score, Symbol>>;

fn workload(count: usize) -> Vec<WorkItem<usize, String, String>> {
    (0..count)
        .map(|id| {
            let query = "ACGT".repeat(id % 7 + 1);
            let database = format!("{}{}", "A".repeat(id % 5), "ACGT".repeat(id % 3 + 1));
            WorkItem::new(id, query, database)
        })
        .collect()
}

fn expected(items: &[WorkItem<usize, String, String>]) -> Vec<(usize, Score)> {
    let aligner = Aligner::new(EditConfig::edit()).unwrap();
    items
        .iter()
        .map(|x| (x.id, *aligner.align(x.id, &x.query, &x.database).score()))
        .collect()
}

fn executions() -> Vec<Execution> {
    vec![
        Execution::Sequential,
        Execution::Parallel {
            threads: 1,
            capacity: None,
        },
        Execution::Parallel {
            threads: 4,
            capacity: Some(3),
        },
        Execution::Parallel {
            threads: -1,
            capacity: Some(64),
        },
    ]
}

#[test]
fn test_results_follow_input_order() -> Result<()> {
    let items = workload(97);
    let expected = expected(&items);

    for execution in executions() {
        let range = align_pairwise(items.clone(), EditConfig::edit(), execution)?;
        let results = range
            .into_iter()
            .map(|x| x.map(|x| (*x.id(), *x.score())))
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(results, expected, "{execution:?}");
    }
    Ok(())
}

#[test]
fn test_each_item_is_aligned_once() -> Result<()> {
    let items = workload(50);
    for execution in executions() {
        let mut seen = HashSet::new();
        let visited = align_pairwise(items.clone(), EditConfig::edit(), execution)?
            .for_each(|_, x| assert!(seen.insert(*x.unwrap().id())));
        assert_eq!(visited, items.len());
        assert_eq!(seen.len(), items.len());
    }
    Ok(())
}

#[test]
fn test_parallel_invokes_each_item_once() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let aligner = Aligner::new(EditConfig::edit())?;
    let algorithm = move |item: WorkItem<usize, String, String>| -> Result<(usize, Score)> {
        counter.fetch_add(1, Ordering::SeqCst);
        let result = aligner.align(item.id, &item.query, &item.database);
        Ok((*result.id(), *result.score()))
    };

    let items = workload(500);
    let expected = expected(&items);
    let executor = AlgorithmExecutor::new(items, algorithm, Parallel::new(4, 7)?);
    let results = ResultRange::new(executor)
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    assert_eq!(calls.load(Ordering::SeqCst), 500);
    assert_eq!(results, expected);
    Ok(())
}

#[test]
fn test_cursor_walk() -> Result<()> {
    let items = workload(5);
    let expected = expected(&items);

    for execution in executions() {
        let mut range = align_pairwise(items.clone(), EditConfig::edit(), execution)?;
        let end = range.end();

        let mut results = Vec::new();
        let mut cursor = range.begin()?;
        while cursor != end {
            let result = cursor.get().unwrap();
            results.push((*result.id(), *result.score()));
            cursor.advance()?;
        }
        assert!(End == cursor);
        assert_eq!(results, expected);
    }
    Ok(())
}

#[test]
fn test_empty_input() -> Result<()> {
    for execution in executions() {
        let mut range = align_pairwise(workload(0), EditConfig::edit(), execution)?;
        let cursor = range.begin()?;
        assert!(cursor == End);
        assert!(cursor.get().is_none());
    }
    Ok(())
}

#[test]
fn test_output_level_is_uniform() -> Result<()> {
    let config = EditConfig::edit().with_output(Output::Alignment);
    let range = align_pairwise(workload(20), config, Execution::Parallel {
        threads: 2,
        capacity: Some(4),
    })?;

    for result in range {
        let result = result?;
        let alignment = result.alignment().unwrap();
        assert_eq!(result.begin().unwrap().row, alignment.query().start);
        assert_eq!(result.end().unwrap().col, alignment.database().end);
        assert!(result.score_matrix().is_none());
    }
    Ok(())
}

#[test]
fn test_detached_range_reports_an_error() -> Result<()> {
    let mut range = align_pairwise(workload(3), EditConfig::edit(), Execution::Sequential)?;
    let executor = range.detach().unwrap();
    assert!(range.is_detached());

    let err = range.begin().err().unwrap();
    assert_eq!(err.to_string(), "No algorithm execution buffer available.");

    // The executor keeps working on its own
    let mut range = ResultRange::new(executor);
    assert_eq!(*range.begin()?.get().unwrap().id(), 0);
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected_upfront() {
    let config = EditConfig::affine(1, -1, 3, -1);
    assert!(align_pairwise(workload(3), config, Execution::Sequential).is_err());

    let parallel = Execution::Parallel {
        threads: 2,
        capacity: Some(0),
    };
    assert!(align_pairwise(workload(3), EditConfig::edit(), parallel).is_err());
}

#[test]
fn test_borrowed_sequences_run_sequentially() -> Result<()> {
    let (query, database) = (String::from("GATTACA"), String::from("GCATGCU"));
    let items = (0..3).map(|id| WorkItem::new(id, query.as_str(), database.as_str()));

    let aligner = Aligner::new(EditConfig::edit())?;
    let range = ResultRange::new(AlgorithmExecutor::new(items, aligner, Sequential));
    let scores = range
        .into_iter()
        .map(|x| x.map(|x| *x.score()))
        .collect::<Result<Vec<_>>>()?;
    assert_eq!(scores, vec![-4; 3]);
    Ok(())
}

#[test]
fn test_parallel_failures_stay_in_place() -> Result<()> {
    let algorithm = |x: u64| -> Result<u64> {
        thread::sleep(Duration::from_millis(10 * (x % 3)));
        eyre::ensure!(x % 4 != 1, "item {x} is rejected");
        Ok(x)
    };
    let executor = AlgorithmExecutor::new(0..12u64, algorithm, Parallel::new(3, 5)?);

    let results = ResultRange::new(executor)
        .into_iter()
        .map(|x| x.map_err(|e| e.to_string()))
        .collect::<Vec<_>>();
    assert_eq!(results.len(), 12);
    for (x, result) in results.into_iter().enumerate() {
        match x % 4 {
            1 => assert_eq!(result, Err(format!("item {x} is rejected"))),
            _ => assert_eq!(result, Ok(x as u64)),
        }
    }
    Ok(())
}

#[test]
fn test_parallel_panics_reach_the_consumer() -> Result<()> {
    let algorithm = |x: i32| -> Result<i32> {
        if x == 5 {
            panic!("worker failed on {x}");
        }
        Ok(x)
    };
    let mut range = ResultRange::new(AlgorithmExecutor::new(0..10, algorithm, Parallel::new(2, 4)?));

    let mut cursor = range.begin()?;
    for _ in 0..4 {
        cursor.advance()?;
    }
    assert_eq!(cursor.get(), Some(&4));

    let payload = panic::catch_unwind(AssertUnwindSafe(|| cursor.advance())).unwrap_err();
    assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("worker failed on 5"));
    Ok(())
}

#[test]
fn test_shared_aligner() -> Result<()> {
    let items = workload(30);
    let expected = expected(&items);

    let aligner = Arc::new(Aligner::new(EditConfig::edit())?);
    let (first, second) = items.split_at(15);

    let mut results: Vec<AlignmentResult<usize, Score>> = Vec::new();
    for (chunk, threads) in [(first, 2), (second, 3)] {
        let executor =
            AlgorithmExecutor::with_shared(chunk.to_vec(), Arc::clone(&aligner), Parallel::with_threads(threads)?);
        for result in ResultRange::new(executor) {
            results.push(result?);
        }
    }
    let results = results.iter().map(|x| (*x.id(), *x.score())).collect::<Vec<_>>();
    assert_eq!(results, expected);
    Ok(())
}
