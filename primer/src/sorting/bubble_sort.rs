/// In-place ascending bubble sort.
///
/// Pass `i` bubbles the largest remaining element to `len - 1 - i`; a pass
/// with no swap means the prefix is already ordered.
pub fn bubble_sort<T: PartialOrd>(arr: &mut [T]) {
    let len = arr.len();
    for i in 0..len {
        let mut swapped = false;
        for j in 0..len - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
