#![allow(dead_code)]

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::io;
use std::rc::Rc;

use seq_collate::{from_iter, Builder, Error, Source};

/// Wrapper tagging an item with the index of the input it came from.
/// Ordered by the item alone, so ties between inputs stay ties.
#[derive(Debug, Clone, Copy)]
pub struct Tagged<T> {
    pub item: T,
    pub input_idx: usize,
}

impl<T: Ord> Ord for Tagged<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.item.cmp(&other.item)
    }
}

impl<T: PartialOrd> PartialOrd for Tagged<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.item.partial_cmp(&other.item)
    }
}

impl<T: PartialEq> PartialEq for Tagged<T> {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

impl<T: Eq> Eq for Tagged<T> {}

/// Collates `input` with the default builder and verifies the output:
/// every element is a head no other live input could beat, ties go to the
/// earliest input, and everything is consumed.
pub fn check_collation<T>(input: &[Vec<T>])
where
    T: Ord + Debug + Copy,
{
    let tagged = input.iter().enumerate().map(|(input_idx, items)| {
        from_iter(
            items
                .iter()
                .copied()
                .map(move |item| Tagged { item, input_idx })
                .collect::<Vec<_>>(),
        )
    });
    let output = Builder::new(tagged)
        .build()
        .try_into_vec()
        .expect("infallible inputs");

    let mut remaining: Vec<&[T]> = input.iter().map(AsRef::as_ref).collect();
    for choice in &output {
        for (input_idx, head) in remaining
            .iter()
            .enumerate()
            .filter_map(|(idx, items)| items.first().map(|head| (idx, head)))
        {
            match head.cmp(&choice.item) {
                Ordering::Less => panic!(
                    "chose {choice:?} while input {input_idx} still holds the smaller {head:?}"
                ),
                Ordering::Equal => assert!(
                    input_idx >= choice.input_idx,
                    "input {input_idx} should have won the tie over {choice:?}"
                ),
                Ordering::Greater => {}
            }
        }
        let Some((head, rest)) = remaining[choice.input_idx].split_first() else {
            panic!("consumed {choice:?} from an already-empty input");
        };
        assert_eq!(head, &choice.item);
        remaining[choice.input_idx] = rest;
    }
    assert!(
        remaining.iter().all(|items| items.is_empty()),
        "not every element was consumed"
    );
}

/// Yields the given items, fails the following pull, then reports
/// exhaustion.
pub struct FailAfter<T> {
    items: std::vec::IntoIter<T>,
    tripped: bool,
}

impl<T> FailAfter<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
            tripped: false,
        }
    }
}

impl<T> Source for FailAfter<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>, Error> {
        match self.items.next() {
            Some(item) => Ok(Some(item)),
            None if !self.tripped => {
                self.tripped = true;
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "dead reader").into())
            }
            None => Ok(None),
        }
    }
}

/// Counts every pull made against the wrapped items.
pub struct CountedPulls<T> {
    items: std::vec::IntoIter<T>,
    pulls: Rc<Cell<usize>>,
}

impl<T> CountedPulls<T> {
    pub fn new(items: Vec<T>, pulls: Rc<Cell<usize>>) -> Self {
        Self {
            items: items.into_iter(),
            pulls,
        }
    }
}

impl<T> Source for CountedPulls<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>, Error> {
        self.pulls.set(self.pulls.get() + 1);
        Ok(self.items.next())
    }
}
