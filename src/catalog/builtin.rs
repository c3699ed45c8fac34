//! Built-in walkthroughs
//!
//! Hand-authored step data for the nine algorithms that ship with the
//! binary. Pseudocode line numbers are 1-based.

use super::{Algorithm, Category, CodeSample, Complexity, Difficulty};
use crate::step::{Bounds, Step, StepSequence, VisualState};

pub(super) fn algorithms() -> Vec<Algorithm> {
    vec![
        bubble_sort(),
        selection_sort(),
        merge_sort(),
        insertion_sort(),
        linear_search(),
        binary_search(),
        stack_operations(),
        queue_operations(),
        linked_list_traversal(),
    ]
}

fn lines(listing: &[&str]) -> Vec<String> {
    listing.iter().map(|line| line.to_string()).collect()
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|tag| tag.to_string()).collect()
}

fn bubble_sort() -> Algorithm {
    let arr = VisualState::array_with_pointers;
    Algorithm {
        slug: "bubble-sort".into(),
        name: "Bubble Sort".into(),
        category: Category::Sorting,
        difficulty: Difficulty::Beginner,
        short_description: "Step through pairs, swap when out of order; largest element bubbles to the end each pass.".into(),
        tags: tags(&["array", "stable", "simple"]),
        complexity: Complexity::new("O(n)", "O(n²)", "O(n²)", "O(1)"),
        pseudocode: lines(&[
            "for i from 0 to n - 1",
            "  for j from 0 to n - i - 2",
            "    if a[j] > a[j + 1]",
            "      swap a[j], a[j + 1]",
            "return a",
        ]),
        code: vec![
            CodeSample::new(
                "Rust",
                r#"fn bubble_sort(a: &mut [i64]) {
    let n = a.len();
    for i in 0..n {
        for j in 0..n.saturating_sub(i + 1) {
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
            }
        }
    }
}"#,
            ),
            CodeSample::new(
                "TypeScript",
                r#"function bubbleSort(a: number[]): number[] {
  const arr = [...a];
  for (let i = 0; i < arr.length; i++) {
    for (let j = 0; j < arr.length - i - 1; j++) {
      if (arr[j] > arr[j + 1]) {
        [arr[j], arr[j + 1]] = [arr[j + 1], arr[j]];
      }
    }
  }
  return arr;
}"#,
            ),
        ],
        steps: StepSequence::starting_with(
            Step::new(arr(&[5, 2, 4, 1], &[], &[("i", 0), ("j", 0)]))
                .title("Start")
                .description("Initial array before any passes.")
                .line(1),
            [
                Step::new(arr(&[5, 2, 4, 1], &[0, 1], &[("i", 0), ("j", 0)]))
                    .title("Compare first pair")
                    .description("Compare indices 0 and 1.")
                    .note("compare")
                    .line(3),
                Step::new(arr(&[2, 5, 4, 1], &[0, 1], &[("i", 0), ("j", 0)]))
                    .title("Swap happens")
                    .description("2 moves before 5.")
                    .note("swap")
                    .line(4),
                Step::new(arr(&[2, 5, 4, 1], &[1, 2], &[("i", 0), ("j", 1)]))
                    .title("Next pair")
                    .description("Compare indices 1 and 2.")
                    .note("compare")
                    .line(3),
                Step::new(arr(&[2, 4, 5, 1], &[1, 2], &[("i", 0), ("j", 1)]))
                    .title("Swap again")
                    .description("5 > 4 so swap.")
                    .note("swap")
                    .line(4),
                Step::new(arr(&[2, 4, 1, 5], &[2, 3], &[("i", 0), ("j", 2)]))
                    .title("Bubble completes")
                    .description("Largest element settles at the end of the pass.")
                    .note("compare")
                    .line(3),
                Step::new(arr(&[1, 2, 4, 5], &[0, 1, 2, 3], &[("i", 1), ("j", 0)]))
                    .title("Next pass")
                    .description("Continue passes until fully sorted.")
                    .line(1),
            ],
        ),
    }
}

fn selection_sort() -> Algorithm {
    let arr = VisualState::array_with_pointers;
    Algorithm {
        slug: "selection-sort".into(),
        name: "Selection Sort".into(),
        category: Category::Sorting,
        difficulty: Difficulty::Beginner,
        short_description: "Find the minimum each pass and place it at the front.".into(),
        tags: tags(&["array", "in-place"]),
        complexity: Complexity::new("O(n²)", "O(n²)", "O(n²)", "O(1)"),
        pseudocode: lines(&[
            "for i from 0 to n - 1",
            "  min = i",
            "  for j from i + 1 to n - 1",
            "    if a[j] < a[min] then min = j",
            "  swap a[i], a[min]",
            "return a",
        ]),
        code: vec![
            CodeSample::new(
                "Rust",
                r#"fn selection_sort(a: &mut [i64]) {
    for i in 0..a.len() {
        let mut min = i;
        for j in i + 1..a.len() {
            if a[j] < a[min] {
                min = j;
            }
        }
        a.swap(i, min);
    }
}"#,
            ),
            CodeSample::new(
                "TypeScript",
                r#"function selectionSort(a: number[]): number[] {
  const arr = [...a];
  for (let i = 0; i < arr.length; i++) {
    let min = i;
    for (let j = i + 1; j < arr.length; j++) {
      if (arr[j] < arr[min]) min = j;
    }
    [arr[i], arr[min]] = [arr[min], arr[i]];
  }
  return arr;
}"#,
            ),
        ],
        steps: StepSequence::starting_with(
            Step::new(arr(&[5, 2, 4, 1], &[0], &[("i", 0), ("min", 0)]))
                .title("Start")
                .description("Assume first element is min.")
                .line(1),
            [
                Step::new(arr(&[5, 2, 4, 1], &[0, 1], &[("i", 0), ("j", 1), ("min", 1)]))
                    .title("Scan for min")
                    .description("Compare j against current min.")
                    .note("compare")
                    .line(4),
                Step::new(arr(&[5, 2, 4, 1], &[0, 3], &[("i", 0), ("j", 3), ("min", 3)]))
                    .title("Found new min")
                    .description("1 is the smallest in the unsorted region.")
                    .note("compare")
                    .line(4),
                Step::new(arr(&[1, 2, 4, 5], &[0, 3], &[("i", 0), ("min", 3)]))
                    .title("Swap into place")
                    .description("Place min at position i.")
                    .note("swap")
                    .line(5),
            ],
        ),
    }
}

fn merge_sort() -> Algorithm {
    Algorithm {
        slug: "merge-sort".into(),
        name: "Merge Sort".into(),
        category: Category::Sorting,
        difficulty: Difficulty::Intermediate,
        short_description: "Divide the array and merge sorted halves.".into(),
        tags: tags(&["divide-and-conquer", "stable"]),
        complexity: Complexity::new("O(n log n)", "O(n log n)", "O(n log n)", "O(n)"),
        pseudocode: lines(&[
            "mergeSort(a):",
            "  if n <= 1 return a",
            "  mid = n/2",
            "  left = mergeSort(a[0..mid])",
            "  right = mergeSort(a[mid..n])",
            "  return merge(left, right)",
        ]),
        code: vec![
            CodeSample::new(
                "Rust",
                r#"fn merge_sort(a: &[i64]) -> Vec<i64> {
    if a.len() <= 1 {
        return a.to_vec();
    }
    let mid = a.len() / 2;
    let left = merge_sort(&a[..mid]);
    let right = merge_sort(&a[mid..]);
    merge(&left, &right)
}

fn merge(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}"#,
            ),
            CodeSample::new(
                "TypeScript",
                r#"function mergeSort(a: number[]): number[] {
  if (a.length <= 1) return a;
  const mid = Math.floor(a.length / 2);
  const left = mergeSort(a.slice(0, mid));
  const right = mergeSort(a.slice(mid));
  return merge(left, right);
}

function merge(left: number[], right: number[]): number[] {
  const res: number[] = [];
  let i = 0, j = 0;
  while (i < left.length && j < right.length) {
    if (left[i] <= right[j]) res.push(left[i++]);
    else res.push(right[j++]);
  }
  return res.concat(left.slice(i)).concat(right.slice(j));
}"#,
            ),
        ],
        steps: StepSequence::starting_with(
            Step::new(VisualState::array(&[5, 1, 4, 2], &[0, 1, 2, 3]))
                .title("Split array")
                .description("Divide into left/right halves.")
                .note("split")
                .line(3),
            [
                Step::new(VisualState::array(&[5, 1], &[0, 1]))
                    .title("Sort left")
                    .description("Recursively sort [5,1].")
                    .note("recurse left")
                    .line(4),
                Step::new(VisualState::array(&[4, 2], &[0, 1]))
                    .title("Sort right")
                    .description("Recursively sort [4,2].")
                    .note("recurse right")
                    .line(5),
                Step::new(VisualState::array(&[1, 2, 4, 5], &[0, 1, 2, 3]))
                    .title("Merge halves")
                    .description("Merge left and right in order.")
                    .note("merge")
                    .line(6),
            ],
        ),
    }
}

fn insertion_sort() -> Algorithm {
    let arr = VisualState::array_with_pointers;
    Algorithm {
        slug: "insertion-sort".into(),
        name: "Insertion Sort".into(),
        category: Category::Sorting,
        difficulty: Difficulty::Beginner,
        short_description: "Builds the sorted array one element at a time by insertion.".into(),
        tags: tags(&["array", "adaptive", "stable"]),
        complexity: Complexity::new("O(n)", "O(n²)", "O(n²)", "O(1)"),
        pseudocode: lines(&[
            "for i from 1 to n - 1",
            "  key = a[i]",
            "  j = i - 1",
            "  while j >= 0 and a[j] > key",
            "    a[j + 1] = a[j]",
            "    j = j - 1",
            "  a[j + 1] = key",
            "return a",
        ]),
        code: vec![
            CodeSample::new(
                "Rust",
                r#"fn insertion_sort(a: &mut [i64]) {
    for i in 1..a.len() {
        let key = a[i];
        let mut j = i;
        while j > 0 && a[j - 1] > key {
            a[j] = a[j - 1];
            j -= 1;
        }
        a[j] = key;
    }
}"#,
            ),
            CodeSample::new(
                "TypeScript",
                r#"function insertionSort(a: number[]): number[] {
  const arr = [...a];
  for (let i = 1; i < arr.length; i++) {
    const key = arr[i];
    let j = i - 1;
    while (j >= 0 && arr[j] > key) {
      arr[j + 1] = arr[j];
      j--;
    }
    arr[j + 1] = key;
  }
  return arr;
}"#,
            ),
        ],
        steps: StepSequence::starting_with(
            Step::new(arr(&[4, 1, 3, 2], &[0], &[("i", 1)]))
                .title("Start")
                .description("First element is considered sorted.")
                .line(1),
            [
                Step::new(arr(&[4, 1, 3, 2], &[0, 1], &[("i", 1), ("j", 0)]))
                    .title("Pick key")
                    .description("Key = 1, compare with sorted part.")
                    .line(4),
                Step::new(arr(&[4, 4, 3, 2], &[0, 1], &[("i", 1), ("j", -1)]))
                    .title("Shift larger elements")
                    .description("4 shifts right to make room.")
                    .line(5),
                Step::new(arr(&[1, 4, 3, 2], &[0], &[("i", 1)]))
                    .title("Insert key")
                    .description("Place 1 at index 0.")
                    .line(7),
                Step::new(arr(&[1, 4, 3, 2], &[1, 2], &[("i", 2), ("j", 1)]))
                    .title("Next iteration")
                    .description("Key = 3, insert into correct spot.")
                    .line(4),
            ],
        ),
    }
}

fn linear_search() -> Algorithm {
    let arr = VisualState::array_with_pointers;
    let values = [3, 5, 7, 9, 11];
    Algorithm {
        slug: "linear-search".into(),
        name: "Linear Search".into(),
        category: Category::Searching,
        difficulty: Difficulty::Beginner,
        short_description: "Scan each element until you find the target.".into(),
        tags: tags(&["array", "sequential"]),
        complexity: Complexity::new("O(1)", "O(n)", "O(n)", "O(1)"),
        pseudocode: lines(&[
            "for i from 0 to n - 1",
            "  if a[i] == target",
            "    return i",
            "return -1",
        ]),
        code: vec![
            CodeSample::new(
                "Rust",
                r#"fn linear_search(a: &[i64], target: i64) -> Option<usize> {
    a.iter().position(|&x| x == target)
}"#,
            ),
            CodeSample::new(
                "TypeScript",
                r#"function linearSearch(a: number[], target: number): number {
  for (let i = 0; i < a.length; i++) {
    if (a[i] === target) return i;
  }
  return -1;
}"#,
            ),
        ],
        steps: StepSequence::starting_with(
            Step::new(arr(&values, &[0], &[("i", 0)]))
                .title("Start")
                .description("Target is 7.")
                .note("Compare index 0")
                .line(1),
            [
                Step::new(arr(&values, &[1], &[("i", 1)]))
                    .title("Advance")
                    .description("Move to index 1.")
                    .note("Compare index 1")
                    .line(1),
                Step::new(arr(&values, &[2], &[("i", 2)]))
                    .title("Found target")
                    .description("7 matches target, return index.")
                    .note("Match!")
                    .line(2),
            ],
        ),
    }
}

fn binary_search() -> Algorithm {
    let values = [1, 3, 5, 7, 9, 11, 13];
    let window = |low, high, mid| Bounds {
        low,
        high,
        mid: Some(mid),
    };
    Algorithm {
        slug: "binary-search".into(),
        name: "Binary Search".into(),
        category: Category::Searching,
        difficulty: Difficulty::Intermediate,
        short_description: "Split the search space in half each step on a sorted array.".into(),
        tags: tags(&["array", "divide-and-conquer", "sorted"]),
        complexity: Complexity::new("O(1)", "O(log n)", "O(log n)", "O(1)"),
        pseudocode: lines(&[
            "low = 0, high = n - 1",
            "while low <= high",
            "  mid = floor((low + high) / 2)",
            "  if a[mid] == target return mid",
            "  else if a[mid] < target low = mid + 1",
            "  else high = mid - 1",
            "return -1",
        ]),
        code: vec![
            CodeSample::new(
                "Rust",
                r#"fn binary_search(a: &[i64], target: i64) -> Option<usize> {
    let (mut low, mut high) = (0, a.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match a[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }
    None
}"#,
            ),
            CodeSample::new(
                "TypeScript",
                r#"function binarySearch(a: number[], target: number): number {
  let low = 0;
  let high = a.length - 1;
  while (low <= high) {
    const mid = Math.floor((low + high) / 2);
    if (a[mid] === target) return mid;
    if (a[mid] < target) low = mid + 1;
    else high = mid - 1;
  }
  return -1;
}"#,
            ),
        ],
        steps: StepSequence::starting_with(
            Step::new(VisualState::bounds(&values, &[0, 6], window(0, 6, 3)))
                .title("Initialize bounds")
                .description("Search for 9 in a sorted array.")
                .line(1),
            [
                Step::new(VisualState::bounds(&values, &[3], window(4, 6, 5)))
                    .title("Check mid")
                    .description("Value at mid (index 3) is 7, lower than target.")
                    .line(5),
                Step::new(VisualState::bounds(&values, &[5], window(4, 4, 4)))
                    .title("Shrink range")
                    .description("New mid is index 5, value 11, greater than target.")
                    .line(6),
                Step::new(VisualState::bounds(&values, &[4], window(4, 4, 4)))
                    .title("Found target")
                    .description("Index 4 holds the target 9.")
                    .line(4),
            ],
        ),
    }
}

fn stack_operations() -> Algorithm {
    Algorithm {
        slug: "stack-operations".into(),
        name: "Stack Push/Pop".into(),
        category: Category::DataStructure,
        difficulty: Difficulty::Beginner,
        short_description: "LIFO structure visualized with push and pop operations.".into(),
        tags: tags(&["LIFO", "array-backed"]),
        complexity: Complexity::new("O(1)", "O(1)", "O(1)", "O(n)"),
        pseudocode: lines(&[
            "push(x):",
            "  top = top + 1",
            "  stack[top] = x",
            "pop():",
            "  if empty return error",
            "  value = stack[top]",
            "  top = top - 1",
            "  return value",
        ]),
        code: vec![
            CodeSample::new(
                "Rust",
                r#"struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    fn push(&mut self, x: T) {
        self.items.push(x);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}"#,
            ),
            CodeSample::new(
                "TypeScript",
                r#"class Stack<T> {
  private items: T[] = [];
  push(x: T) {
    this.items.push(x);
  }
  pop(): T | undefined {
    return this.items.pop();
  }
  peek(): T | undefined {
    return this.items[this.items.length - 1];
  }
}"#,
            ),
        ],
        steps: StepSequence::starting_with(
            Step::new(VisualState::stack(&[]))
                .title("Start empty")
                .description("Stack is empty.")
                .note("top = -1")
                .line(1),
            [
                Step::new(VisualState::stack(&["A"]))
                    .title("Push A")
                    .description("Add A to the stack.")
                    .note("push(A)")
                    .line(2),
                Step::new(VisualState::stack(&["A", "B"]))
                    .title("Push B")
                    .description("Add B above A.")
                    .note("push(B)")
                    .line(2),
                Step::new(VisualState::stack(&["A"]))
                    .title("Pop returns B")
                    .description("Top element B is removed.")
                    .note("pop() -> B")
                    .line(4),
            ],
        ),
    }
}

fn queue_operations() -> Algorithm {
    Algorithm {
        slug: "queue-operations".into(),
        name: "Queue Enqueue/Dequeue".into(),
        category: Category::DataStructure,
        difficulty: Difficulty::Beginner,
        short_description: "FIFO structure visualized with enqueue and dequeue.".into(),
        tags: tags(&["FIFO", "array-backed"]),
        complexity: Complexity::new("O(1)", "O(1)", "O(1)", "O(n)"),
        pseudocode: lines(&[
            "enqueue(x):",
            "  tail = tail + 1",
            "  queue[tail] = x",
            "dequeue():",
            "  if empty return error",
            "  value = queue[head]",
            "  head = head + 1",
            "  return value",
        ]),
        code: vec![
            CodeSample::new(
                "Rust",
                r#"use std::collections::VecDeque;

struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    fn enqueue(&mut self, x: T) {
        self.items.push_back(x);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}"#,
            ),
            CodeSample::new(
                "TypeScript",
                r#"class Queue<T> {
  private items: T[] = [];
  enqueue(x: T) {
    this.items.push(x);
  }
  dequeue(): T | undefined {
    return this.items.shift();
  }
}"#,
            ),
        ],
        steps: StepSequence::starting_with(
            Step::new(VisualState::queue(&[]))
                .title("Start empty")
                .description("Queue is empty.")
                .note("head=tail=0")
                .line(1),
            [
                Step::new(VisualState::queue(&["A"]))
                    .title("Enqueue A")
                    .description("Add A to the tail.")
                    .note("enqueue(A)")
                    .line(2),
                Step::new(VisualState::queue(&["A", "B"]))
                    .title("Enqueue B")
                    .description("Add B after A.")
                    .note("enqueue(B)")
                    .line(2),
                Step::new(VisualState::queue(&["B"]))
                    .title("Dequeue returns A")
                    .description("Remove from head (FIFO).")
                    .note("dequeue() -> A")
                    .line(4),
            ],
        ),
    }
}

fn linked_list_traversal() -> Algorithm {
    let nodes = ["A", "B", "C"];
    Algorithm {
        slug: "linked-list-traversal".into(),
        name: "Linked List Traversal".into(),
        category: Category::DataStructure,
        difficulty: Difficulty::Beginner,
        short_description: "Visit each node following next pointers.".into(),
        tags: tags(&["nodes", "pointers"]),
        complexity: Complexity::new("O(n)", "O(n)", "O(n)", "O(1)"),
        pseudocode: lines(&[
            "current = head",
            "while current != null",
            "  visit(current)",
            "  current = current.next",
        ]),
        code: vec![
            CodeSample::new(
                "Rust",
                r#"struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

fn traverse<T>(head: Option<&Node<T>>, mut visit: impl FnMut(&T)) {
    let mut current = head;
    while let Some(node) = current {
        visit(&node.value);
        current = node.next.as_deref();
    }
}"#,
            ),
            CodeSample::new(
                "TypeScript",
                r#"type Node<T> = { value: T; next: Node<T> | null };

function traverse<T>(head: Node<T> | null, visit: (v: T) => void) {
  let current = head;
  while (current) {
    visit(current.value);
    current = current.next;
  }
}"#,
            ),
        ],
        steps: StepSequence::starting_with(
            Step::new(VisualState::list(&nodes, &[0]))
                .title("Start at head")
                .description("Current points to A.")
                .note("current = head")
                .line(1),
            [
                Step::new(VisualState::list(&nodes, &[1]))
                    .title("Visit B")
                    .description("Move current to B.")
                    .note("current = current.next")
                    .line(4),
                Step::new(VisualState::list(&nodes, &[2]))
                    .title("Visit C")
                    .description("Move current to C, then null.")
                    .note("current = current.next")
                    .line(4),
            ],
        ),
    }
}
