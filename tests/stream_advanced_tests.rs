use rusty_iterators::stream::{advanced::*, from_iter, from_slice, repeat, Stream, StreamExt};

#[derive(Debug, Clone)]
struct TestStream {
    values: Vec<i32>,
    index: usize,
}

impl TestStream {
    fn new(values: Vec<i32>) -> Self {
        Self { values, index: 0 }
    }
}

impl Stream for TestStream {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.values.get(self.index).copied();
        if value.is_some() {
            self.index += 1;
        }
        value
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.values.len() - self.index)
    }
}

#[test]
fn test_filter_map() {
    let mut stream = TestStream::new(vec![1, 2, 3, 4, 5]).filter_map(|x| if x % 2 == 0 { Some(x * 10) } else { None });
    assert_eq!(stream.size_hint(), Some(5));
    assert_eq!(stream.collect().unwrap(), vec![20, 40]);
}

#[test]
fn test_filter_map_parse() {
    let input = ["1", "x", "3"];
    let parsed = from_slice(&input).filter_map(|s| s.parse::<i32>().ok()).collect().unwrap();
    assert_eq!(parsed, vec![1, 3]);
}

#[test]
fn test_zip_stops_at_shorter_side() {
    let mut stream = TestStream::new(vec![1, 2, 3]).zip(TestStream::new(vec![4]));
    assert_eq!(stream.size_hint(), Some(1));
    assert_eq!(stream.collect().unwrap(), vec![(1, 4)]);
}

#[test]
fn test_zip_hint_with_unbounded_side() {
    let stream = TestStream::new(vec![1, 2]).zip(repeat('x'));
    assert_eq!(stream.size_hint(), Some(2));
    let stream = repeat('x').zip(TestStream::new(vec![1, 2, 3]));
    assert_eq!(stream.size_hint(), Some(3));
    assert_eq!(repeat(1).zip(repeat(2)).size_hint(), None);
}

#[test]
fn test_zip_with_unbounded_side_collects() {
    let mut stream = TestStream::new(vec![1, 2]).zip(repeat('x'));
    assert_eq!(stream.collect().unwrap(), vec![(1, 'x'), (2, 'x')]);
}

#[test]
fn test_zip_nth_advances_both_sides() {
    let mut stream = TestStream::new(vec![1, 2, 3, 4]).zip(TestStream::new(vec![5, 6, 7, 8]));
    assert_eq!(stream.nth(2), Some((3, 7)));
    assert_eq!(stream.next(), Some((4, 8)));
}

#[test]
fn test_zip_nth_stops_at_shorter_side() {
    let mut second = TestStream::new(vec![4, 5, 6, 7, 8]);
    assert_eq!(TestStream::new(vec![1]).zip(second.by_ref()).nth(3), None);
    assert_eq!(second.size_hint(), Some(4));
    assert_eq!(second.next(), Some(5));
}

#[test]
fn test_zip_nth_with_unbounded_side_ends_early() {
    let mut stream = TestStream::new(vec![1, 2]).zip(repeat('x'));
    assert_eq!(stream.nth(usize::MAX), None);
    assert_eq!(stream.next(), None);
}

#[test]
fn test_moving_window() {
    let mut stream = TestStream::new(vec![1, 2, 3, 4]).moving_window(2);
    assert_eq!(stream.size_hint(), Some(3));
    assert_eq!(stream.collect().unwrap(), vec![vec![1, 2], vec![2, 3], vec![3, 4]]);
}

#[test]
fn test_moving_window_larger_than_input() {
    let mut stream = TestStream::new(vec![1, 2, 3]).moving_window(4);
    assert_eq!(stream.size_hint(), Some(0));
    assert_eq!(stream.collect().unwrap(), Vec::<Vec<i32>>::new());
}

#[test]
fn test_moving_window_of_one() {
    let mut stream = TestStream::new(vec![1, 2, 3]).moving_window(1);
    assert_eq!(stream.collect().unwrap(), vec![vec![1], vec![2], vec![3]]);
}

#[test]
fn test_moving_window_exactly_one_window() {
    let mut stream = TestStream::new(vec![1, 2, 3]).moving_window(3);
    assert_eq!(stream.next(), Some(vec![1, 2, 3]));
    assert_eq!(stream.next(), None);
    assert_eq!(stream.next(), None);
}

#[test]
#[should_panic(expected = "`size` must be greater than zero")]
fn test_moving_window_of_zero_panics() {
    let _ = TestStream::new(vec![1, 2]).moving_window(0);
}

#[test]
fn test_moving_window_try_new_reports_error() {
    assert!(MovingWindow::try_new(TestStream::new(vec![1]), 0).is_err());
}

#[test]
fn test_moving_window_over_unbounded_stream() {
    let mut counter = 0;
    let naturals = repeat(()).map(move |_| {
        counter += 1;
        counter
    });
    let windows = naturals.moving_window(3);
    assert_eq!(windows.size_hint(), None);
    assert_eq!(windows.take(2).collect().unwrap(), vec![vec![1, 2, 3], vec![2, 3, 4]]);
}

#[test]
fn test_unzip_pairs() {
    let (letters, numbers) = from_iter(vec![('a', 1), ('b', 2), ('c', 3)]).unzip().unwrap();
    assert_eq!(letters, vec!['a', 'b', 'c']);
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_unzip_windows() {
    let (first, second) = TestStream::new(vec![1, 2, 3]).moving_window(2).unzip().unwrap();
    assert_eq!(first, vec![1, 2]);
    assert_eq!(second, vec![2, 3]);
}

#[test]
fn test_unzip_arrays() {
    let (left, right) = from_iter(vec![[1, 2], [3, 4]]).unzip().unwrap();
    assert_eq!(left, vec![1, 3]);
    assert_eq!(right, vec![2, 4]);
}

#[test]
fn test_unzip_refuses_unbounded() {
    assert!(repeat((1, 2)).unzip().unwrap_err().is_unbounded());
}
