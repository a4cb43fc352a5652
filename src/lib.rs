use std::cmp::Ordering;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod bubble;
pub mod insertion;
pub mod selection;

// O(n log n) sorts the elementary ones are compared with.
pub mod heap;
pub mod merge;
pub mod quick;

// Reference implementation the elementary sorts are checked and measured against.
pub mod rust_std;

pub mod config;
pub mod demo;
pub mod error;
pub mod measure;
pub mod patterns;
pub mod scenarios;

pub use error::{Error, Result};
