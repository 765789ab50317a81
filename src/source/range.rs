use crate::error::Error;
use crate::source::Source;

/// Source yielding integers from `start` to `end`, both inclusive.
///
/// The direction is inferred from the bounds: when `start > end` the range
/// counts down. `step` is always supplied as a positive increment and is
/// applied in the inferred direction.
///
/// # Examples
///
/// ```
/// use seq_collate::{Source, StepRange};
///
/// let up: Result<Vec<_>, _> = StepRange::new(1, 7, 2)?.items().collect();
/// assert_eq!(up?, vec![1, 3, 5, 7]);
///
/// let down: Result<Vec<_>, _> = StepRange::new(3, 1, 1)?.items().collect();
/// assert_eq!(down?, vec![3, 2, 1]);
/// # Ok::<(), seq_collate::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StepRange {
    next: i64,
    end: i64,
    step: i64,
    done: bool,
}

impl StepRange {
    /// Creates a range counting from `start` to `end` inclusive, `step`
    /// apart.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] unless `step` is a positive integer.
    pub fn new(start: i64, end: i64, step: i64) -> Result<Self, Error> {
        if step <= 0 {
            return Err(Error::Config("step must be a positive integer"));
        }
        Ok(Self {
            next: start,
            end,
            step: if start > end { -step } else { step },
            done: false,
        })
    }
}

impl Source for StepRange {
    type Item = i64;

    fn pull(&mut self) -> Result<Option<i64>, Error> {
        if self.done {
            return Ok(None);
        }
        let value = self.next;
        let past_end = if self.step > 0 {
            value > self.end
        } else {
            value < self.end
        };
        if past_end {
            self.done = true;
            return Ok(None);
        }
        match value.checked_add(self.step) {
            Some(next) => self.next = next,
            // the increment left i64, so nothing past `value` can be in range
            None => self.done = true,
        }
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn collect(range: StepRange) -> Vec<i64> {
        range.items().map(Result::unwrap).collect()
    }

    #[test]
    fn counts_up() {
        assert_eq!(collect(StepRange::new(1, 5, 1).unwrap()), vec![1, 2, 3, 4, 5]);
        assert_eq!(collect(StepRange::new(1, 6, 2).unwrap()), vec![1, 3, 5]);
    }

    #[test]
    fn counts_down_when_start_is_larger() {
        assert_eq!(collect(StepRange::new(5, 1, 1).unwrap()), vec![5, 4, 3, 2, 1]);
        assert_eq!(collect(StepRange::new(10, 1, 4).unwrap()), vec![10, 6, 2]);
    }

    #[test]
    fn single_point() {
        assert_eq!(collect(StepRange::new(5, 5, 3).unwrap()), vec![5]);
    }

    #[test]
    fn rejects_non_positive_steps() {
        assert!(matches!(StepRange::new(1, 5, 0), Err(Error::Config(_))));
        assert!(matches!(StepRange::new(1, 5, -2), Err(Error::Config(_))));
    }

    #[test]
    fn stays_exhausted() {
        let mut range = StepRange::new(1, 1, 1).unwrap();
        assert_eq!(range.pull().unwrap(), Some(1));
        assert_eq!(range.pull().unwrap(), None);
        assert_eq!(range.pull().unwrap(), None);
    }

    #[test]
    fn survives_the_edge_of_i64() {
        let range = StepRange::new(i64::MAX - 2, i64::MAX, 2).unwrap();
        assert_eq!(collect(range), vec![i64::MAX - 2, i64::MAX]);

        // stepping below i64::MIN terminates instead of wrapping
        let range = StepRange::new(i64::MIN + 1, i64::MIN, 3).unwrap();
        assert_eq!(collect(range), vec![i64::MIN + 1]);
    }
}
