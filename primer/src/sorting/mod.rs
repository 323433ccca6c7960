pub mod bubble_sort;
