use crate::control::Option;
use crate::iter::Iterator;

/// Yields the first element, then every `step`th element after it.
///
/// The first pull is `nth(0)`; every later pull is `nth(step - 1)`. A step
/// of zero is treated as one.
///
/// Created by [`Iterator::step_by`].
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let values = [0, 1, 2, 3, 4, 5, 6];
/// let every_third: Vec<i32> = values.seq().step_by(3).cloned().collect();
/// assert_eq!(every_third, vec![0, 3, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct StepBy<I> {
    iter: I,
    step_minus_one: usize,
    first_take: bool,
}

impl<I> StepBy<I> {
    pub(crate) const fn new(iter: I, step: usize) -> Self {
        Self {
            iter,
            step_minus_one: step.saturating_sub(1),
            first_take: true,
        }
    }
}

impl<I: Iterator> Iterator for StepBy<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let skip = if self.first_take {
            self.first_take = false;
            0
        } else {
            self.step_minus_one
        };
        self.iter.nth(skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Iterable;
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![1, 2, 3, 4, 5])]
    #[case(1, vec![1, 2, 3, 4, 5])]
    #[case(2, vec![1, 3, 5])]
    #[case(4, vec![1, 5])]
    #[case(9, vec![1])]
    fn test_step(#[case] step: usize, #[case] expected: Vec<i32>) {
        let values = [1, 2, 3, 4, 5];
        let stepped: Vec<i32> = values.seq().step_by(step).cloned().collect();
        assert_eq!(stepped, expected);
    }

    #[rstest]
    fn test_offset_carries_across_cycle() {
        let letters = ['A', 'B', 'C', 'D', 'E'];
        let stepped: String = letters.seq().cycle().step_by(2).take(6).cloned().collect();
        assert_eq!(stepped, "ACEBDA");
    }
}
