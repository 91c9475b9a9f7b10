//! Strategy: interchangeable sort algorithms behind one contract. The
//! context owns at most one strategy; running it with none bound is a
//! reported usage error, never a silent no-op.

use itertools::Itertools;
use patterns::client::Client;

// ===== Strategy contract =====

trait SortStrategy {
    fn name(&self) -> &str;
    fn sort(&self, data: &mut Vec<i32>);
}

// ===== Concrete strategies =====

struct BubbleSort;
struct QuickSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &str {
        "Bubble Sort"
    }

    fn sort(&self, data: &mut Vec<i32>) {
        for i in 0..data.len() {
            for j in 0..data.len().saturating_sub(i + 1) {
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                }
            }
        }
    }
}

impl SortStrategy for QuickSort {
    fn name(&self) -> &str {
        "Quick Sort"
    }

    fn sort(&self, data: &mut Vec<i32>) {
        quicksort(data);
    }
}

fn quicksort(data: &mut [i32]) {
    if data.len() <= 1 {
        return;
    }
    let pivot = data[data.len() - 1];
    let mut partition = 0;
    for i in 0..data.len() - 1 {
        if data[i] < pivot {
            data.swap(i, partition);
            partition += 1;
        }
    }
    let last = data.len() - 1;
    data.swap(partition, last);
    let (left, right) = data.split_at_mut(partition);
    quicksort(left);
    quicksort(&mut right[1..]);
}

// ===== Context =====

fn run_sort(context: &Client<dyn SortStrategy>, data: &[i32]) {
    match context.capability() {
        Ok(strategy) => {
            let mut working = data.to_vec();
            println!("Using {}...", strategy.name());
            strategy.sort(&mut working);
            println!("{}", working.iter().join(" "));
        }
        Err(err) => println!("{err}"),
    }
}

fn main() {
    let data = vec![10, 3, 5, 8, 2, 7];
    println!("Unsorted: {}", data.iter().join(" "));

    let mut context: Client<dyn SortStrategy> = Client::new();
    run_sort(&context, &data); // nothing bound yet

    context.bind(Box::new(BubbleSort));
    run_sort(&context, &data);

    context.bind(Box::new(QuickSort));
    run_sort(&context, &data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn both_strategies_agree_on_the_result() {
        let input = vec![10, 3, 5, 8, 2, 7];

        let mut bubbled = input.clone();
        BubbleSort.sort(&mut bubbled);

        let mut quicked = input.clone();
        QuickSort.sort(&mut quicked);

        assert_eq!(bubbled, vec![2, 3, 5, 7, 8, 10]);
        assert_eq!(quicked, bubbled);
    }

    #[test]
    fn quicksort_handles_duplicates_and_empty() {
        let mut data = vec![5, 1, 5, 1, 5];
        quicksort(&mut data);
        assert_eq!(data, vec![1, 1, 5, 5, 5]);

        let mut empty: Vec<i32> = Vec::new();
        quicksort(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn unbound_context_reports_an_error() {
        let context: Client<dyn SortStrategy> = Client::new();
        assert!(context.capability().is_err());
    }

    #[test]
    fn strategies_agree_with_std_sort_on_seeded_random_data() {
        let mut rng = StdRng::seed_from_u64(7);

        for len in [0usize, 1, 2, 17, 64] {
            let input: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();

            let mut expected = input.clone();
            expected.sort_unstable();

            for strategy in [&BubbleSort as &dyn SortStrategy, &QuickSort] {
                let mut data = input.clone();
                strategy.sort(&mut data);
                assert_eq!(data, expected, "{} on len {len}", strategy.name());
            }
        }
    }
}

// Expected output:
//
// Unsorted: 10 3 5 8 2 7
// no capability bound to this client
// Using Bubble Sort...
// 2 3 5 7 8 10
// Using Quick Sort...
// 2 3 5 7 8 10
